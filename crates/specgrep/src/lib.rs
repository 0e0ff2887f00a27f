//! Specgrep - device configuration collection and report assembly.
//!
//! Runs a fixed set of category collectors against an adb-attached device,
//! accumulates each category into an ordered record, and emits per-category
//! JSON plus a styled workbook report.

pub mod adb;
pub mod collect;
pub mod config;
pub mod pipeline;
pub mod report;
