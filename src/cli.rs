use clap::Parser;

use icon_matte::args::Args;

/// Makes the near-white background of the app icon transparent
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// How far below 255 each color channel may be and still count as background
    #[arg(short, long, default_value_t = 30)]
    pub tolerance: u8,
}

impl From<Cli> for Args {
    fn from(value: Cli) -> Self {
        Args {
            tolerance: value.tolerance.into(),
            ..Args::default()
        }
    }
}
