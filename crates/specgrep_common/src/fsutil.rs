//! Filesystem helpers for the per-run results folder.
//!
//! Results live under `<log_dir>/<run_name>/Results/<serial>`: one JSON file
//! per category, the rotated console logs, and the saved workbook.

use crate::error::SpecError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Create (if needed) and return the per-run results directory.
pub fn results_dir(log_dir: &Path, run_name: &str, serial: &str) -> Result<PathBuf, SpecError> {
    let dir = log_dir.join(run_name).join("Results").join(serial);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Serialize `value` as pretty JSON at `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), SpecError> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Rename the shared console log to a category-specific name. A missing
/// source file is tolerated: the run may not have a file logger attached.
pub fn rotate_log(from: &Path, to: &Path) -> Result<(), SpecError> {
    if !from.exists() {
        warn!("log file {} not present, skipping rotation", from.display());
        return Ok(());
    }
    fs::rename(from, to)?;
    Ok(())
}

/// Strip every occurrence of the given characters from `value`.
pub fn replace_chars(value: &str, chars: &[char]) -> String {
    value.chars().filter(|c| !chars.contains(c)).collect()
}
