//! Writes generated files to disk.

use crate::error::AvroTscError;
use crate::generator::ExportFile;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::info;

/// Recreate `output_dir` and write every file into it. Anything previously
/// in the directory is removed.
///
/// # Errors
///
/// Returns `Io` if a file name is not a plain relative path, the directory
/// cannot be cleared or created, or a file cannot be written. File names are
/// checked before anything is removed.
pub fn write_files(output_dir: &Path, files: &[ExportFile]) -> Result<(), AvroTscError> {
    if let Some(file) = files.iter().find(|f| !is_plain_relative(&f.filename)) {
        return Err(AvroTscError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "output file '{}' is not a relative path inside the output directory",
                file.filename
            ),
        )));
    }
    if output_dir.exists() {
        fs::remove_dir_all(output_dir)?;
    }
    fs::create_dir_all(output_dir)?;
    for file in files {
        let path: PathBuf = output_dir.join(&file.filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.content)?;
        info!(file = %path.display(), bytes = file.content.len(), "wrote output file");
    }
    Ok(())
}

/// Non-empty and made of normal components only: no root, prefix, `.` or `..`.
fn is_plain_relative(filename: &str) -> bool {
    let path: &Path = Path::new(filename);
    path.components().next().is_some()
        && path.components().all(|c| matches!(c, Component::Normal(_)))
}
