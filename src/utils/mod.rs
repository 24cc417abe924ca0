// quadrat/src/utils/mod.rs
use crate::core::SUPPORTED_EXTENSIONS;
use std::path::Path;

/// Whether a path carries one of the supported image extensions
/// (case-insensitive). Anything else is silently skipped by the batch.
pub fn is_supported_format(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Output filename for one (source, size) pair: `{stem}_{size}x{size}.png`.
pub fn output_file_name(stem: &str, size: u32) -> String {
    format!("{}_{}x{}.png", stem, size, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_format(Path::new("photo.jpg")));
        assert!(is_supported_format(Path::new("photo.JPEG")));
        assert!(is_supported_format(Path::new("scan.TIF")));
        assert!(is_supported_format(Path::new("shot.heic")));
        assert!(is_supported_format(Path::new("img.WebP")));
    }

    #[test]
    fn unsupported_extensions_are_rejected() {
        assert!(!is_supported_format(Path::new("anim.gif")));
        assert!(!is_supported_format(Path::new("notes.txt")));
        assert!(!is_supported_format(Path::new("archive.tar.gz")));
        assert!(!is_supported_format(Path::new("no_extension")));
    }

    #[test]
    fn output_names_combine_stem_and_size() {
        assert_eq!(output_file_name("photo", 128), "photo_128x128.png");
        assert_eq!(output_file_name("DSC_0001", 1024), "DSC_0001_1024x1024.png");
    }
}
