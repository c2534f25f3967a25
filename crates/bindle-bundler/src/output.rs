//! Output writing.
//!
//! The bundle call writes exactly one file, at the end, on success only.
//! The write is atomic: content goes to a temporary sibling first and is
//! renamed into place, so readers never observe a partial bundle. Output
//! paths are normalized and validated before any filesystem work.

use std::fs;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::{Error, Result};

/// Write `content` to `path` atomically, creating parent directories.
pub fn write_atomic(path: &Path, content: &str) -> Result<PathBuf> {
    let target = validate_and_normalize(path)?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::WriteFailure(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }

    let temp = target.with_extension("tmp");
    fs::write(&temp, content).map_err(|e| {
        Error::WriteFailure(format!(
            "failed to write temporary file '{}': {e}",
            temp.display()
        ))
    })?;

    if let Err(e) = fs::rename(&temp, &target) {
        let _ = fs::remove_file(&temp);
        return Err(Error::WriteFailure(format!(
            "failed to rename '{}' to '{}': {e}",
            temp.display(),
            target.display()
        )));
    }

    Ok(target)
}

/// Normalize an output path, resolving `.` and `..` components against
/// the process working directory and rejecting suspicious input.
fn validate_and_normalize(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidOutputPath("output path is empty".to_string()));
    }
    if path.to_string_lossy().contains('\0') {
        return Err(Error::InvalidOutputPath(
            "output path contains a null byte".to_string(),
        ));
    }

    let cleaned = path.clean();
    if cleaned.is_absolute() {
        return Ok(cleaned);
    }
    let cwd = std::env::current_dir().map_err(|e| {
        Error::InvalidOutputPath(format!("failed to get current directory: {e}"))
    })?;
    Ok(cwd.join(cleaned).clean())
}
