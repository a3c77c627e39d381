use std::fs;
use std::path::Path;

/// Whether `path` resolves to a regular file. Missing paths, directories and
/// unreadable metadata all count as "no file".
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path)
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}
