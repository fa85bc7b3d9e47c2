use image::{imageops, DynamicImage};

pub const BYTES_PER_PIXEL: usize = 4;

/// Raster buffer in the classifier's fixed input format: BGRA, 8 bits per
/// channel, rows top-down from the top-left corner, alpha forced opaque.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Stretches `image` to exactly `width` x `height` and repacks it into
    /// the BGRA layout. Aspect ratio is not preserved.
    pub fn from_image(
        image: &DynamicImage,
        width: u32,
        height: u32,
    ) -> Result<PixelBuffer, Box<dyn std::error::Error + Send + Sync>> {
        if width == 0 || height == 0 {
            return Err(format!(
                "pixel buffer dimensions must be positive, got {}x{}",
                width, height
            )
            .into());
        }

        let resized = image.resize_exact(width, height, imageops::FilterType::Triangle);
        let rgba = resized.to_rgba8();

        let mut data = vec![0u8; width as usize * height as usize * BYTES_PER_PIXEL];
        for (i, pixel) in rgba.pixels().enumerate() {
            let offset = i * BYTES_PER_PIXEL;
            data[offset] = pixel[2];
            data[offset + 1] = pixel[1];
            data[offset + 2] = pixel[0];
            data[offset + 3] = u8::MAX;
        }

        Ok(PixelBuffer {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw buffer a model backend would consume.
    #[allow(dead_code)]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// BGRA bytes of the pixel at (x, y), top-left origin.
    #[allow(dead_code)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Some(&self.data[offset..offset + BYTES_PER_PIXEL])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, Rgb};

    fn solid_image(width: u32, height: u32, color: Rgb<u8>) -> DynamicImage {
        let mut img = ImageBuffer::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = color;
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_exact_output_dimensions() {
        for (w, h) in [(1, 1), (100, 50), (640, 480), (3, 999)] {
            let image = solid_image(w, h, Rgb([10, 20, 30]));
            let buffer = PixelBuffer::from_image(&image, 360, 360).unwrap();
            assert_eq!(buffer.width(), 360);
            assert_eq!(buffer.height(), 360);
            assert_eq!(buffer.len(), 360 * 360 * BYTES_PER_PIXEL);
        }
    }

    #[test]
    fn test_zero_width_fails() {
        let image = solid_image(10, 10, Rgb([0, 0, 0]));
        assert!(PixelBuffer::from_image(&image, 0, 360).is_err());
    }

    #[test]
    fn test_zero_height_fails() {
        let image = solid_image(10, 10, Rgb([0, 0, 0]));
        assert!(PixelBuffer::from_image(&image, 360, 0).is_err());
    }

    #[test]
    fn test_bgra_channel_order() {
        let image = solid_image(4, 4, Rgb([255, 0, 0]));
        let buffer = PixelBuffer::from_image(&image, 4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                let bgra = buffer.pixel(x, y).unwrap();
                assert_eq!(bgra, &[0, 0, 255, 255]);
            }
        }
    }

    #[test]
    fn test_stretch_ignores_aspect_ratio() {
        // Left half red, right half blue, in a wide 200x10 image. After the
        // stretch to a square the halves must still split at the midline.
        let mut img = ImageBuffer::new(200, 10);
        for (x, _, pixel) in img.enumerate_pixels_mut() {
            *pixel = if x < 100 {
                Rgb([255, 0, 0])
            } else {
                Rgb([0, 0, 255])
            };
        }
        let image = DynamicImage::ImageRgb8(img);

        let buffer = PixelBuffer::from_image(&image, 8, 8).unwrap();
        let left = buffer.pixel(0, 4).unwrap();
        let right = buffer.pixel(7, 4).unwrap();
        assert!(left[2] > left[0], "left edge should stay red");
        assert!(right[0] > right[2], "right edge should stay blue");
    }

    #[test]
    fn test_alpha_is_opaque() {
        let mut img = ImageBuffer::new(2, 2);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgba([5, 5, 5, 0]);
        }
        let image = DynamicImage::ImageRgba8(img);
        let buffer = PixelBuffer::from_image(&image, 2, 2).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(buffer.pixel(x, y).unwrap()[3], u8::MAX);
            }
        }
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let image = solid_image(4, 4, Rgb([1, 2, 3]));
        let buffer = PixelBuffer::from_image(&image, 4, 4).unwrap();
        assert!(buffer.pixel(4, 0).is_none());
        assert!(buffer.pixel(0, 4).is_none());
    }
}
