// quadrat/src/processors/loader.rs
use crate::core::{Result, ThumbnailError};
use image::DynamicImage;
use std::io::Cursor;
use std::path::Path;

/// EXIF orientation tag values (tag 0x0112).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90,
    Transverse,
    Rotate270,
}

impl Orientation {
    pub fn from_exif_value(value: u16) -> Option<Self> {
        match value {
            1 => Some(Self::Normal),
            2 => Some(Self::FlipHorizontal),
            3 => Some(Self::Rotate180),
            4 => Some(Self::FlipVertical),
            5 => Some(Self::Transpose),
            6 => Some(Self::Rotate90),
            7 => Some(Self::Transverse),
            8 => Some(Self::Rotate270),
            _ => None,
        }
    }

    /// Rotates/flips the pixel data so it matches the intended display
    /// orientation.
    pub fn apply(self, image: DynamicImage) -> DynamicImage {
        match self {
            Self::Normal => image,
            Self::FlipHorizontal => image.fliph(),
            Self::Rotate180 => image.rotate180(),
            Self::FlipVertical => image.flipv(),
            Self::Transpose => image.rotate90().fliph(),
            Self::Rotate90 => image.rotate90(),
            Self::Transverse => image.rotate270().fliph(),
            Self::Rotate270 => image.rotate270(),
        }
    }
}

/// Reads the EXIF orientation tag from a raw image container, if any.
pub fn read_orientation(data: &[u8]) -> Option<Orientation> {
    let mut cursor = Cursor::new(data);
    let exif = exif::Reader::new().read_from_container(&mut cursor).ok()?;

    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    let value = field.value.get_uint(0)?;

    Orientation::from_exif_value(value as u16)
}

/// Decodes a source image and normalizes its orientation.
#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// Decodes the file at `path`. The format is guessed from the content,
    /// not the extension, so a mislabeled file still decodes if the codec is
    /// available. HEIC and other unsupported content surface here as a
    /// per-file decode error.
    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        let data = std::fs::read(path)?;
        if data.is_empty() {
            return Err(ThumbnailError::Decode(format!(
                "{}: file is empty",
                path.display()
            )));
        }

        let image = image::load_from_memory(&data)
            .map_err(|e| ThumbnailError::Decode(format!("{}: {}", path.display(), e)))?;

        let image = match read_orientation(&data) {
            Some(orientation) if orientation != Orientation::Normal => {
                log::debug!("Applying EXIF orientation {:?}", orientation);
                orientation.apply(image)
            }
            _ => image,
        };

        log::debug!(
            "Loaded image: {}x{} pixels, color {:?}",
            image.width(),
            image.height(),
            image.color()
        );

        Ok(image)
    }
}
