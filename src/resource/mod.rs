use image::{DynamicImage, RgbaImage};

use crate::error::Result;

pub mod file;

pub trait ImageSource {
    fn load(&self) -> Result<DynamicImage>;
    fn store(&self, image: &RgbaImage) -> Result<()>;
}
