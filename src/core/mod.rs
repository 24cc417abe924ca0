// quadrat/src/core/mod.rs
use std::path::PathBuf;
use thiserror::Error;

mod pipeline;
pub use pipeline::{FileOutcome, FileProcessor};

/// Square output sizes produced for every source image, in pixels.
pub const TARGET_SIZES: [u32; 6] = [1024, 512, 256, 128, 64, 32];

/// Extensions picked up from the input directory (matched case-insensitively).
/// HEIC is listed but decoding it depends on codec support; without it those
/// files fail individually and the batch carries on.
pub const SUPPORTED_EXTENSIONS: [&str; 8] = [
    "jpg", "jpeg", "png", "webp", "bmp", "tif", "tiff", "heic",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Downscale preserving aspect ratio, pad with transparency to a square.
    #[default]
    Fit,
    /// Crop to a centered square, then resize to fill it.
    Cover,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Fit => "fit",
            Mode::Cover => "cover",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub mode: Mode,
}

#[derive(Error, Debug)]
pub enum ThumbnailError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to decode {0}")]
    Decode(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("invalid mode: {0}")]
    InvalidMode(String),

    #[error("input directory not found: {0}")]
    InvalidInputDir(PathBuf),
}

pub type Result<T> = std::result::Result<T, ThumbnailError>;
