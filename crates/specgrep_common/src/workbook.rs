//! In-memory workbook with named cell styles.
//!
//! Stands in for a spreadsheet backend: sheets are sparse 1-based grids of
//! styled cells, and the report renderer only ever talks to this surface.
//! `save` persists the whole model as pretty JSON; a real spreadsheet writer
//! could be swapped in behind the same methods.

use crate::error::SpecError;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const HEADER_ROW_STYLE: &str = "headerRow";
pub const NORMAL_ROW_STYLE: &str = "normalRow";
pub const LAST_ROW_STYLE: &str = "lastRow";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedStyle {
    pub name: String,
    pub bold: bool,
    pub fill: Option<String>,
    pub border_bottom: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub value: String,
    pub style: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Sheet {
    pub name: String,
    #[serde(serialize_with = "serialize_cells")]
    cells: BTreeMap<(u32, u32), Cell>,
    column_widths: BTreeMap<u32, u32>,
}

#[derive(Serialize)]
struct CellEntry<'a> {
    row: u32,
    col: u32,
    value: &'a str,
    style: &'a str,
}

fn serialize_cells<S: Serializer>(
    cells: &BTreeMap<(u32, u32), Cell>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(cells.len()))?;
    for ((row, col), cell) in cells {
        seq.serialize_element(&CellEntry {
            row: *row,
            col: *col,
            value: &cell.value,
            style: &cell.style,
        })?;
    }
    seq.end()
}

impl Sheet {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Rows and columns are 1-based, like the spreadsheet they model.
    pub fn set_cell(&mut self, row: u32, col: u32, value: impl Into<String>, style: &str) {
        self.cells.insert(
            (row, col),
            Cell {
                value: value.into(),
                style: style.to_string(),
            },
        );
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    pub fn set_column_width(&mut self, col: u32, width: u32) {
        self.column_widths.insert(col, width);
    }

    pub fn column_width(&self, col: u32) -> Option<u32> {
        self.column_widths.get(&col).copied()
    }

    /// Highest populated row, 0 when the sheet is empty.
    pub fn max_row(&self) -> u32 {
        self.cells.keys().map(|(row, _)| *row).max().unwrap_or(0)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

#[derive(Debug, Default, Serialize)]
pub struct Workbook {
    styles: Vec<NamedStyle>,
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// A workbook seeded with the three styles the renderer depends on.
    pub fn new() -> Self {
        Self {
            styles: vec![
                NamedStyle {
                    name: HEADER_ROW_STYLE.to_string(),
                    bold: true,
                    fill: Some("D9D9D9".to_string()),
                    border_bottom: true,
                },
                NamedStyle {
                    name: NORMAL_ROW_STYLE.to_string(),
                    bold: false,
                    fill: None,
                    border_bottom: false,
                },
                NamedStyle {
                    name: LAST_ROW_STYLE.to_string(),
                    bold: false,
                    fill: None,
                    border_bottom: true,
                },
            ],
            sheets: Vec::new(),
        }
    }

    pub fn named_style(&self, name: &str) -> Result<&NamedStyle, SpecError> {
        self.styles
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SpecError::UnknownStyle(name.to_string()))
    }

    pub fn create_sheet(&mut self, name: &str) -> Result<&mut Sheet, SpecError> {
        if self.sheets.iter().any(|s| s.name == name) {
            return Err(SpecError::DuplicateSheet(name.to_string()));
        }
        self.sheets.push(Sheet::new(name));
        Ok(self.sheets.last_mut().expect("sheet just pushed"))
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_mut(&mut self, name: &str) -> Result<&mut Sheet, SpecError> {
        self.sheets
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| SpecError::SheetNotFound(name.to_string()))
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn save(&self, path: &Path) -> Result<(), SpecError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
