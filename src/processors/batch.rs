// quadrat/src/processors/batch.rs
use crate::core::{Config, FileOutcome, FileProcessor, Result, ThumbnailError};
use crate::utils::is_supported_format;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Aggregated result of one batch run. Per-file failures are collected here
/// and never abort the batch or change the exit status.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub thumbnails: usize,
    pub failures: Vec<(PathBuf, String)>,
}

/// Sequential driver over one input directory.
pub struct BatchProcessor {
    config: Config,
}

impl BatchProcessor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<BatchReport> {
        self.validate_input_dir()?;
        std::fs::create_dir_all(&self.config.output_dir)?;

        let files = self.collect_image_paths();
        let mut report = BatchReport::default();

        if files.is_empty() {
            println!("Keine unterstützten Bilddateien im Eingabeordner gefunden.");
            return Ok(report);
        }

        println!(
            "Verarbeite {} Dateien aus {} → {} (mode={})",
            files.len(),
            self.config.input_dir.display(),
            self.config.output_dir.display(),
            self.config.mode
        );

        let processor = FileProcessor::new(self.config.mode);
        for path in &files {
            match self.process_file(&processor, path) {
                FileOutcome::Ok { written, .. } => {
                    report.processed += 1;
                    report.thumbnails += written;
                }
                FileOutcome::Failed { path, message } => {
                    report.failures.push((path, message));
                }
            }
        }

        Ok(report)
    }

    fn process_file(&self, processor: &FileProcessor, path: &Path) -> FileOutcome {
        match processor.process(path, &self.config.output_dir) {
            Ok(written) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                println!("OK  : {}", name);
                FileOutcome::Ok {
                    path: path.to_path_buf(),
                    written,
                }
            }
            Err(e) => {
                println!("FEHLER bei {}: {}", path.display(), e);
                log::warn!("Failed to process {}: {}", path.display(), e);
                FileOutcome::Failed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        }
    }

    fn validate_input_dir(&self) -> Result<()> {
        let dir = &self.config.input_dir;
        if !dir.is_dir() {
            return Err(ThumbnailError::InvalidInputDir(dir.clone()));
        }
        Ok(())
    }

    /// Immediate files only (no recursion), filtered by the extension
    /// allow-list, in lexicographic filename order.
    fn collect_image_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = WalkDir::new(&self.config.input_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| is_supported_format(entry.path()))
            .map(|entry| entry.into_path())
            .collect();

        paths.sort();
        paths
    }
}
