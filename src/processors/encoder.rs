// quadrat/src/processors/encoder.rs
use crate::core::{Result, ThumbnailError};
use image::{ImageFormat, RgbaImage};
use oxipng::{optimize_from_memory, Options};
use std::io::Cursor;
use std::path::Path;

/// Writes thumbnails as losslessly optimized PNG.
pub struct PngSink {
    options: Options,
}

impl PngSink {
    pub fn new() -> Self {
        let mut options = Options::max_compression();
        // Every output must keep its alpha channel, so only the filter and
        // deflate search are allowed to vary, not the pixel layout.
        options.bit_depth_reduction = false;
        options.color_type_reduction = false;
        options.palette_reduction = false;
        options.grayscale_reduction = false;

        Self { options }
    }

    pub fn save(&self, image: &RgbaImage, path: &Path) -> Result<()> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png)?;

        let optimized = optimize_from_memory(&buffer.into_inner(), &self.options)
            .map_err(|e| ThumbnailError::Encode(e.to_string()))?;

        std::fs::write(path, &optimized)?;
        log::debug!("Saved {} ({} bytes)", path.display(), optimized.len());

        Ok(())
    }
}

impl Default for PngSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    #[test]
    fn save_produces_decodable_rgba_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.png");

        let mut image = RgbaImage::from_pixel(16, 16, Rgba([10, 20, 30, 255]));
        image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));

        PngSink::new().save(&image, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (16, 16));
        assert_eq!(decoded.get_pixel(0, 0)[3], 0);
        assert_eq!(decoded.get_pixel(8, 8)[3], 255);
    }

    #[test]
    fn save_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.png");
        let second = dir.path().join("b.png");

        let image = RgbaImage::from_pixel(32, 32, Rgba([120, 60, 200, 255]));
        let sink = PngSink::new();
        sink.save(&image, &first).unwrap();
        sink.save(&image, &second).unwrap();

        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn save_fails_on_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist").join("out.png");

        let image = RgbaImage::new(4, 4);
        assert!(PngSink::new().save(&image, &path).is_err());
    }
}
