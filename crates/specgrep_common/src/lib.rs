//! Specgrep Common - shared building blocks for the spec collection pipeline.
//!
//! Holds the pieces every category collector leans on: the ordered spec
//! record, named-capture text extraction, the in-memory workbook model with
//! its named styles, and filesystem helpers for the per-run results folder.

pub mod error;
pub mod extract;
pub mod fsutil;
pub mod record;
pub mod workbook;

pub use error::SpecError;
pub use record::SpecRecord;
