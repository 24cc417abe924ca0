// quadrat/src/cli.rs
use crate::core::{Mode, Result, ThumbnailError};
use clap::Parser;
use std::path::PathBuf;

/// Scale images in a folder to multiple square sizes and save them as PNG
/// into a single output folder.
#[derive(Parser, Debug)]
#[command(name = "quadrat", version, about)]
pub struct Cli {
    /// Directory containing the source images
    pub input: PathBuf,

    /// Directory the thumbnails are written to (created if missing)
    pub output: PathBuf,

    /// Resize strategy: fit (letterbox with transparency) or cover
    /// (centered crop). Also accepted as --mode=fit / --mode=cover.
    #[arg(default_value = "fit", allow_hyphen_values = true)]
    pub mode: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Normalizes the mode argument: case-insensitive, with or without a
/// `--mode=` prefix.
pub fn parse_mode(raw: &str) -> Result<Mode> {
    let lowered = raw.to_lowercase();
    let name = lowered.strip_prefix("--mode=").unwrap_or(&lowered);

    match name {
        "fit" => Ok(Mode::Fit),
        "cover" => Ok(Mode::Cover),
        other => Err(ThumbnailError::InvalidMode(other.to_string())),
    }
}
