// quadrat/src/processors/thumbnail.rs
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, RgbaImage};

/// The two square transforms. Both return RGBA buffers so every output
/// carries an alpha channel regardless of the source color mode.
pub struct Thumbnailer {
    filter: FilterType,
}

impl Thumbnailer {
    pub fn new() -> Self {
        // Lanczos3 is deterministic, so re-running a batch reproduces the
        // output byte for byte.
        Self {
            filter: FilterType::Lanczos3,
        }
    }

    /// Letterbox: downscale so neither dimension exceeds `size` (images
    /// already inside the box keep their native resolution), then center on
    /// a fully transparent square canvas.
    pub fn fit(&self, image: &DynamicImage, size: u32) -> RgbaImage {
        let scaled = if image.width() <= size && image.height() <= size {
            image.to_rgba8()
        } else {
            image.resize(size, size, self.filter).to_rgba8()
        };

        let mut canvas = RgbaImage::new(size, size);
        let x = (size - scaled.width()) / 2;
        let y = (size - scaled.height()) / 2;
        imageops::overlay(&mut canvas, &scaled, i64::from(x), i64::from(y));

        canvas
    }

    /// Cover: crop the largest centered square, then resize it to exactly
    /// `size`x`size`. No padding; the whole canvas is image content.
    pub fn cover(&self, image: &DynamicImage, size: u32) -> RgbaImage {
        let (width, height) = image.dimensions();
        let side = width.min(height);
        let left = (width - side) / 2;
        let top = (height - side) / 2;

        image
            .crop_imm(left, top, side, side)
            .resize_exact(size, size, self.filter)
            .to_rgba8()
    }
}

impl Default for Thumbnailer {
    fn default() -> Self {
        Self::new()
    }
}
