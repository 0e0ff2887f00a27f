//! Device command channel over adb.
//!
//! One blocking shell invocation per query; stdout comes back as lossy
//! UTF-8. A missing device or failing adb binary surfaces as an error here
//! and is flattened to an empty result by the collectors.

use anyhow::{bail, Context, Result};
use std::process::Command;
use tracing::debug;

/// A channel that can run one shell command on the attached device.
pub trait DeviceChannel {
    fn execute(&self, command: &str) -> Result<String>;
}

/// Real adb-backed channel.
#[derive(Debug, Clone)]
pub struct AdbChannel {
    adb_path: String,
    serial: Option<String>,
}

impl AdbChannel {
    pub fn new(adb_path: impl Into<String>, serial: Option<String>) -> Self {
        Self {
            adb_path: adb_path.into(),
            serial,
        }
    }

    /// Serial number of the target device: the configured one when pinned,
    /// otherwise whatever adb reports for the single attached device.
    pub fn serial_no(&self) -> Result<String> {
        if let Some(serial) = &self.serial {
            return Ok(serial.clone());
        }
        let output = Command::new(&self.adb_path)
            .arg("get-serialno")
            .output()
            .with_context(|| format!("failed to run {} get-serialno", self.adb_path))?;
        let serial = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if serial.is_empty() || serial == "unknown" {
            bail!("no device serial reported by adb");
        }
        Ok(serial)
    }
}

impl DeviceChannel for AdbChannel {
    fn execute(&self, command: &str) -> Result<String> {
        let mut cmd = Command::new(&self.adb_path);
        if let Some(serial) = &self.serial {
            cmd.args(["-s", serial]);
        }
        // The command string is passed to the device-side shell as one
        // argument, so pipes and quoting run on the device.
        cmd.arg("shell").arg(command);
        debug!("adb shell: {}", command);
        let output = cmd
            .output()
            .with_context(|| format!("failed to run {} shell '{}'", self.adb_path, command))?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
