use std::fmt;
use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::Result;
use crate::filter::mask::Mask;
use crate::resource::file::FileSystemImage;
use crate::resource::ImageSource;

pub mod mask;

/// How far each color channel may fall below 255 and still count as background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance(u8);

impl Tolerance {
    pub const DEFAULT: Tolerance = Tolerance(30);

    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Every channel must be strictly greater than this. A tolerance of zero
    /// yields 255, which no 8-bit channel can exceed.
    pub fn threshold(&self) -> u8 {
        u8::MAX - self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Tolerance {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub matched: u64,
    pub tolerance: Tolerance,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Background made transparent")?;
        writeln!(f, "Tolerance: {}", self.tolerance)?;
        write!(f, "Transparent pixels: {}", self.matched)
    }
}

pub fn is_near_white(pixel: Rgba<u8>, tolerance: Tolerance) -> bool {
    let threshold = tolerance.threshold();
    let [r, g, b, _] = pixel.0;

    r > threshold && g > threshold && b > threshold
}

/// Makes every near-white pixel of `image` fully transparent.
pub fn make_transparent_image(image: &mut RgbaImage, tolerance: Tolerance) -> Summary {
    let mask = Mask::build(image, tolerance);
    mask.apply(image);

    Summary {
        matched: mask.count(),
        tolerance,
    }
}

/// Loads the image from `source`, clears its near-white background and stores
/// the result back. Nothing is stored if loading fails.
pub fn make_transparent_from(source: &impl ImageSource, tolerance: Tolerance) -> Result<Summary> {
    let image = source.load()?;
    log::debug!(
        "Decoded {}x{} image ({:?})",
        image.width(),
        image.height(),
        image.color()
    );

    let mut image = image.into_rgba8();
    let summary = make_transparent_image(&mut image, tolerance);

    source.store(&image)?;
    Ok(summary)
}

/// Rewrites the PNG at `path` in place with its near-white background removed.
pub fn make_transparent(path: &Path, tolerance: Tolerance) -> Result<Summary> {
    log::info!(
        "Removing background from {} (tolerance {tolerance})",
        path.display()
    );

    let summary = make_transparent_from(&FileSystemImage::from_path(path), tolerance)?;

    log::info!(
        "Wrote {} with {} transparent pixels",
        path.display(),
        summary.matched
    );
    Ok(summary)
}
