//! Configuration: defaults, optional TOML file, CLI overrides on top.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the adb binary.
    #[serde(default = "default_adb_path")]
    pub adb_path: String,

    /// Device serial to target; autodetected when absent.
    #[serde(default)]
    pub serial: Option<String>,

    /// Base directory for per-run results folders.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

fn default_adb_path() -> String {
    "adb".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("specgrep-logs")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adb_path: default_adb_path(),
            serial: None,
            log_dir: default_log_dir(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
