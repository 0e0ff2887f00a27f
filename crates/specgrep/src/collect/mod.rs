//! Category collectors: one fixed, ordered query list per device subsystem.
//!
//! Each collector declares its fields, their descriptions, and how every
//! field's value is pulled out of raw command output. A missed query or
//! pattern leaves the field absent and never aborts the pass.

pub mod cpu;
pub mod display;
pub mod hardware;
pub mod software;

use crate::adb::DeviceChannel;
use regex::Regex;
use specgrep_common::{extract, SpecError, SpecRecord};
use tracing::warn;

/// Fallback used when a field or value has no declared description.
pub const DESCRIPTION_UNAVAILABLE: &str = "Description not available";

/// Value-keyed description tables: field name -> (value -> description).
pub type ValueDescriptions = &'static [(&'static str, &'static [(&'static str, &'static str)])];

pub trait SpecCollector {
    /// Category name; also the sheet name and the JSON file stem.
    fn category(&self) -> &'static str;

    /// Declared fields, in query order.
    fn fields(&self) -> &'static [&'static str];

    /// Field-keyed descriptions for the report.
    fn descriptions(&self) -> &'static [(&'static str, &'static str)];

    /// Fields whose report description is keyed by collected value.
    fn value_descriptions(&self) -> ValueDescriptions {
        &[]
    }

    /// Run every query for this category and return the populated record.
    fn collect(&self, device: &dyn DeviceChannel) -> SpecRecord;
}

/// Run one device query, flattening channel failures to empty output.
pub fn query(device: &dyn DeviceChannel, command: &str) -> String {
    match device.execute(command) {
        Ok(output) => output,
        Err(err) => {
            warn!("device query '{}' failed: {:#}", command, err);
            String::new()
        }
    }
}

/// Query the device and extract one named group from the output.
pub fn query_extract(
    device: &dyn DeviceChannel,
    command: &str,
    pattern: &Regex,
    group: &str,
) -> Option<String> {
    let raw = query(device, command);
    extract::capture(pattern, &raw, group)
}

/// Query the device and take the trimmed raw output as the value.
pub fn query_raw(device: &dyn DeviceChannel, command: &str) -> Option<String> {
    let raw = query(device, command);
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Every declared field must carry a description. Runs at startup so a
/// mismatch fails the whole pass instead of silently falling back.
pub fn validate_descriptions(collector: &dyn SpecCollector) -> Result<(), SpecError> {
    for field in collector.fields() {
        if !collector.descriptions().iter().any(|(key, _)| key == field) {
            return Err(SpecError::MissingDescription {
                category: collector.category().to_string(),
                field: (*field).to_string(),
            });
        }
    }
    Ok(())
}
