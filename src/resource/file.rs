use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};

use crate::error::{Error, Result};
use crate::resource::ImageSource;

/// An image read from and written back to the same path on disk.
pub struct FileSystemImage {
    path: PathBuf,
}

impl FileSystemImage {
    pub fn from_path(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn decode(&self) -> image::ImageResult<DynamicImage> {
        ImageReader::open(&self.path)?
            .with_guessed_format()?
            .decode()
    }
}

impl ImageSource for FileSystemImage {
    fn load(&self) -> Result<DynamicImage> {
        self.decode().map_err(|source| Error::Decode {
            path: self.path.clone(),
            source,
        })
    }

    fn store(&self, image: &RgbaImage) -> Result<()> {
        image
            .save_with_format(&self.path, ImageFormat::Png)
            .map_err(|source| Error::Encode {
                path: self.path.clone(),
                source,
            })
    }
}
