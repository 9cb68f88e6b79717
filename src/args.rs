use std::path::PathBuf;

use crate::filter::Tolerance;

/// Image rewritten in place by every run.
pub const IMAGE_PATH: &str = "public/app-icon.png";

pub struct Args {
    pub path: PathBuf,
    pub tolerance: Tolerance,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            path: PathBuf::from(IMAGE_PATH),
            tolerance: Tolerance::default(),
        }
    }
}
