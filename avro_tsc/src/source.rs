//! Schema file discovery.

use crate::error::AvroTscError;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Every regular file under `directory` whose path ends with `extension`,
/// recursively, in file name order. Symlinks are followed.
///
/// # Errors
///
/// Returns `SourceUnavailable` if the directory or any entry below it cannot
/// be read.
pub fn collect_files(directory: &Path, extension: &str) -> Result<Vec<PathBuf>, AvroTscError> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(directory)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| AvroTscError::SourceUnavailable {
            path: directory.to_path_buf(),
            reason: e.to_string(),
        })?;
        let path: &Path = entry.path();
        if entry.file_type().is_file() && path.to_string_lossy().ends_with(extension) {
            debug!(file = %path.display(), "found schema file");
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}
