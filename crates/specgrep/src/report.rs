//! Tabular report rendering into a workbook sheet.
//!
//! One block per category: a styled header row, one row per collected field
//! in insertion order, and a closing border row. The renderer only mutates
//! the sheet; saving the workbook is the orchestrator's job.

use crate::collect::DESCRIPTION_UNAVAILABLE;
use specgrep_common::record::SpecRecord;
use specgrep_common::workbook::{
    Workbook, HEADER_ROW_STYLE, LAST_ROW_STYLE, NORMAL_ROW_STYLE,
};
use specgrep_common::{fsutil, SpecError};

const HEADERS: [&str; 3] = ["Parameters", "Description", "Results"];
const HEADER_ROW: u32 = 2;
const FIRST_COLUMN: u32 = 2;
const COLUMN_WIDTH: u32 = 40;

/// Characters the device shell tends to leave in list-ish values.
const STRAY_CHARS: [char; 3] = ['[', '\'', ']'];

/// Render `record` into the named sheet. Descriptions are looked up by
/// field key, except for fields listed in `value_descriptions`, whose
/// description is keyed by the collected value instead.
pub fn render(
    workbook: &mut Workbook,
    sheet_name: &str,
    record: &SpecRecord,
    descriptions: &[(&str, &str)],
    value_descriptions: &[(&str, &[(&str, &str)])],
) -> Result<(), SpecError> {
    for style in [HEADER_ROW_STYLE, NORMAL_ROW_STYLE, LAST_ROW_STYLE] {
        workbook.named_style(style)?;
    }
    let sheet = workbook.sheet_mut(sheet_name)?;

    for (idx, header) in HEADERS.iter().enumerate() {
        let col = FIRST_COLUMN + idx as u32;
        sheet.set_column_width(col, COLUMN_WIDTH);
        sheet.set_cell(HEADER_ROW, col, *header, HEADER_ROW_STYLE);
    }

    for (offset, (key, value)) in record.iter().enumerate() {
        let row = HEADER_ROW + 1 + offset as u32;
        sheet.set_cell(row, FIRST_COLUMN, key, NORMAL_ROW_STYLE);

        let description = match value_descriptions.iter().find(|(field, _)| *field == key) {
            Some((_, table)) => lookup(table, value.unwrap_or("")),
            None => lookup(descriptions, key),
        };
        sheet.set_cell(row, FIRST_COLUMN + 1, description, NORMAL_ROW_STYLE);

        let result = fsutil::replace_chars(value.unwrap_or(""), &STRAY_CHARS);
        sheet.set_cell(row, FIRST_COLUMN + 2, result, NORMAL_ROW_STYLE);
    }

    // Closing border row, one below the last data row. Carries no data.
    let closing_row = HEADER_ROW + 1 + record.len() as u32;
    for idx in 0..HEADERS.len() as u32 {
        sheet.set_cell(closing_row, FIRST_COLUMN + idx, "", LAST_ROW_STYLE);
    }

    Ok(())
}

fn lookup<'a>(table: &[(&str, &'a str)], key: &str) -> &'a str {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, d)| *d)
        .unwrap_or(DESCRIPTION_UNAVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::display::{self, DisplayCollector};
    use crate::collect::SpecCollector;

    fn display_record() -> SpecRecord {
        let mut record = SpecRecord::new(display::CATEGORY);
        record.insert("DisplayDensity", Some("600".to_string()));
        record.insert("DisplayScreenSize", Some("1080x2280".to_string()));
        record.insert("ScreenBrightness", Some("120".to_string()));
        record.insert("RefreshRate", Some("60.0".to_string()));
        record.insert("ScreenOffTimeout", Some("15000".to_string()));
        record.insert("ScreenRotation", Some("0".to_string()));
        record
    }

    fn render_display(wb: &mut Workbook, sheet_name: &str, record: &SpecRecord) {
        wb.create_sheet(sheet_name).unwrap();
        render(
            wb,
            sheet_name,
            record,
            DisplayCollector.descriptions(),
            DisplayCollector.value_descriptions(),
        )
        .unwrap();
    }

    #[test]
    fn test_block_layout_for_six_fields() {
        let mut wb = Workbook::new();
        render_display(&mut wb, "DisplaySpecs", &display_record());

        let sheet = wb.sheet("DisplaySpecs").unwrap();
        // Header at row 2, columns 2..4.
        assert_eq!(sheet.cell(2, 2).unwrap().value, "Parameters");
        assert_eq!(sheet.cell(2, 3).unwrap().value, "Description");
        assert_eq!(sheet.cell(2, 4).unwrap().value, "Results");
        assert_eq!(sheet.cell(2, 2).unwrap().style, "headerRow");
        for col in 2..=4 {
            assert_eq!(sheet.column_width(col), Some(40));
        }
        // Six data rows, 3 through 8.
        assert_eq!(sheet.cell(3, 2).unwrap().value, "DisplayDensity");
        assert_eq!(sheet.cell(3, 4).unwrap().value, "600");
        assert_eq!(sheet.cell(8, 2).unwrap().value, "ScreenRotation");
        assert_eq!(sheet.cell(8, 2).unwrap().style, "normalRow");
        // Closing row at row 9.
        assert_eq!(sheet.max_row(), 9);
        for col in 2..=4 {
            let cell = sheet.cell(9, col).unwrap();
            assert_eq!(cell.value, "");
            assert_eq!(cell.style, "lastRow");
        }
    }

    #[test]
    fn test_rotation_description_is_keyed_by_value() {
        let mut wb = Workbook::new();
        render_display(&mut wb, "DisplaySpecs", &display_record());

        let sheet = wb.sheet("DisplaySpecs").unwrap();
        // ScreenRotation sits on row 8; description comes from the rotation
        // table, not the field table.
        assert_eq!(
            sheet.cell(8, 3).unwrap().value,
            "The screen is in its default portrait orientation."
        );
    }

    #[test]
    fn test_unrecognized_rotation_falls_back_to_placeholder() {
        let mut wb = Workbook::new();
        let mut record = display_record();
        record.insert("ScreenRotation", Some("45".to_string()));
        render_display(&mut wb, "DisplaySpecs", &record);

        let sheet = wb.sheet("DisplaySpecs").unwrap();
        assert_eq!(sheet.cell(8, 3).unwrap().value, DESCRIPTION_UNAVAILABLE);
    }

    #[test]
    fn test_stray_punctuation_stripped_from_results() {
        let mut wb = Workbook::new();
        let mut record = display_record();
        record.insert("DisplayDensity", Some("['600']".to_string()));
        render_display(&mut wb, "DisplaySpecs", &record);

        let sheet = wb.sheet("DisplaySpecs").unwrap();
        let result = &sheet.cell(3, 4).unwrap().value;
        assert_eq!(result, "600");
        assert!(!result.contains(['[', '\'', ']']));
    }

    #[test]
    fn test_absent_value_renders_empty_result() {
        let mut wb = Workbook::new();
        let mut record = display_record();
        record.insert("RefreshRate", None);
        render_display(&mut wb, "DisplaySpecs", &record);

        let sheet = wb.sheet("DisplaySpecs").unwrap();
        assert_eq!(sheet.cell(6, 4).unwrap().value, "");
        // The field-keyed description is still present.
        assert_eq!(
            sheet.cell(6, 3).unwrap().value,
            "The maximum rate at which the screen can refresh its content, measured in Hertz (Hz)"
        );
    }

    #[test]
    fn test_rendering_is_idempotent_across_fresh_sheets() {
        let mut wb = Workbook::new();
        let record = display_record();
        render_display(&mut wb, "First", &record);
        render_display(&mut wb, "Second", &record);

        let first = wb.sheet("First").unwrap();
        let second = wb.sheet("Second").unwrap();
        assert_eq!(first.cell_count(), second.cell_count());
        for row in 2..=9 {
            for col in 2..=4 {
                assert_eq!(first.cell(row, col), second.cell(row, col));
            }
        }
    }

    #[test]
    fn test_missing_sheet_is_an_error() {
        let mut wb = Workbook::new();
        let err = render(
            &mut wb,
            "Nope",
            &display_record(),
            DisplayCollector.descriptions(),
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, SpecError::SheetNotFound(_)));
    }
}
