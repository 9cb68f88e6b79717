use clap::Parser;

use crate::cli::Cli;
use icon_matte::run;

mod cli;

fn main() {
    let cli = Cli::parse();

    match run(cli.into()) {
        Ok(summary) => println!("{summary}"),
        Err(error) => {
            eprintln!("Error: {error:#}");
            std::process::exit(1);
        }
    }
}
