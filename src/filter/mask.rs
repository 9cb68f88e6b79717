use image::RgbaImage;

use crate::filter::{is_near_white, Tolerance};

/// Near-white classification of every pixel of an image, row-major.
pub struct Mask {
    width: u32,
    height: u32,
    matches: Vec<bool>,
}

impl Mask {
    pub fn build(image: &RgbaImage, tolerance: Tolerance) -> Self {
        let (width, height) = image.dimensions();
        let matches = image
            .pixels()
            .map(|pixel| is_near_white(*pixel, tolerance))
            .collect();

        Self {
            width,
            height,
            matches,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        assert!(x < self.width && y < self.height);
        self.matches[(y as usize) * (self.width as usize) + x as usize]
    }

    pub fn count(&self) -> u64 {
        self.matches.iter().filter(|&&matched| matched).count() as u64
    }

    /// Zeroes the alpha of every matched pixel. Color channels are left alone.
    pub fn apply(&self, image: &mut RgbaImage) {
        assert_eq!(
            image.dimensions(),
            self.dimensions(),
            "mask was built for a different image"
        );

        for (pixel, &matched) in image.pixels_mut().zip(&self.matches) {
            if matched {
                pixel[3] = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    #[test]
    fn mask_matches_image_dimensions() {
        let image = RgbaImage::new(7, 3);
        let mask = Mask::build(&image, Tolerance::default());

        assert_eq!(mask.dimensions(), (7, 3));
    }

    #[test]
    fn get_is_row_major() {
        let mut image = RgbaImage::new(3, 2);
        image.put_pixel(2, 1, Rgba([255, 255, 255, 255]));

        let mask = Mask::build(&image, Tolerance::default());

        assert!(mask.get(2, 1));
        assert!(!mask.get(1, 1));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn apply_only_touches_alpha() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([240, 250, 230, 128]));
        image.put_pixel(1, 0, Rgba([12, 34, 56, 78]));

        let mask = Mask::build(&image, Tolerance::default());
        mask.apply(&mut image);

        assert_eq!(*image.get_pixel(0, 0), Rgba([240, 250, 230, 0]));
        assert_eq!(*image.get_pixel(1, 0), Rgba([12, 34, 56, 78]));
    }

    #[test]
    #[should_panic(expected = "mask was built for a different image")]
    fn apply_rejects_mismatched_image() {
        let mask = Mask::build(&RgbaImage::new(2, 2), Tolerance::default());
        mask.apply(&mut RgbaImage::new(3, 2));
    }
}
