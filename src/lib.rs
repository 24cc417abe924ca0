mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{parse_mode, Cli};
pub use core::{
    Config, FileOutcome, FileProcessor, Mode, Result, ThumbnailError, SUPPORTED_EXTENSIONS,
    TARGET_SIZES,
};
pub use processors::{
    read_orientation, BatchProcessor, BatchReport, Loader, Orientation, PngSink, Thumbnailer,
};
pub use utils::{is_supported_format, output_file_name};

pub mod prelude {
    pub use crate::{
        BatchProcessor, Config, FileProcessor, Loader, Mode, PngSink, Thumbnailer,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
