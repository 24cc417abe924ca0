// quadrat/src/core/pipeline.rs
use super::{Mode, Result, TARGET_SIZES};
use crate::processors::{Loader, PngSink, Thumbnailer};
use crate::utils::output_file_name;
use std::path::{Path, PathBuf};

/// Converts one source file into the full set of square thumbnails.
///
/// The source is decoded exactly once; every target size is produced from
/// that single decode.
pub struct FileProcessor {
    mode: Mode,
    loader: Loader,
    thumbnailer: Thumbnailer,
    sink: PngSink,
}

impl FileProcessor {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            loader: Loader::new(),
            thumbnailer: Thumbnailer::new(),
            sink: PngSink::new(),
        }
    }

    /// Processes a single input file, writing `{stem}_{size}x{size}.png` into
    /// `output_dir` for every target size. Returns the number of thumbnails
    /// written. Any error aborts the remaining sizes for this file only.
    pub fn process(&self, input_path: &Path, output_dir: &Path) -> Result<usize> {
        let image = self.loader.load(input_path)?;

        let stem = input_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image");

        let mut written = 0;
        for &size in TARGET_SIZES.iter() {
            let thumbnail = match self.mode {
                Mode::Fit => self.thumbnailer.fit(&image, size),
                Mode::Cover => self.thumbnailer.cover(&image, size),
            };

            let output_path = output_dir.join(output_file_name(stem, size));
            self.sink.save(&thumbnail, &output_path)?;
            written += 1;
        }

        Ok(written)
    }
}

/// Result of processing one file, collected by the batch driver.
#[derive(Debug)]
pub enum FileOutcome {
    Ok { path: PathBuf, written: usize },
    Failed { path: PathBuf, message: String },
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, FileOutcome::Ok { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Ok { path, .. } => path,
            FileOutcome::Failed { path, .. } => path,
        }
    }
}
