//! Path helpers for user-supplied locations.

use crate::errors::{AppError, AppResult};
use std::io;
use std::path::{Path, PathBuf};

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Output files must be given as absolute paths (after `~` expansion).
pub fn require_absolute(path: &str) -> AppResult<PathBuf> {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Err(AppError::from(io::Error::other(format!(
            "Output file path must be absolute: {path}"
        ))))
    }
}

/// Lower-cased extension of `path`, empty when there is none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}
