use crate::args::Args;
use crate::filter::Summary;

pub mod args;
pub mod error;
pub mod filter;
pub mod resource;

pub fn run(args: Args) -> anyhow::Result<Summary> {
    env_logger::init();

    let summary = filter::make_transparent(&args.path, args.tolerance)?;
    Ok(summary)
}
