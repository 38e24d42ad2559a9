//! Worksheet rendering for field rows
//!
//! A pure rendering pass: one five-column sheet per row sequence, in
//! sequence order, with a styled frozen header. No sorting, filtering,
//! or computed columns.

use crate::documentation::extract::FieldRow;
use rust_xlsxwriter::{Color, Format, FormatAlign, Worksheet, XlsxError};

/// Fixed sheet header.
pub const COLUMN_HEADERS: [&str; 5] = ["Name", "Description", "Required", "Data Type", "Enum"];

/// Relative column widths; the description column is widest.
const COLUMN_WIDTHS: [f64; 5] = [25.0, 60.0, 10.0, 25.0, 30.0];

const HEADER_FILL: Color = Color::RGB(0x366092);

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(HEADER_FILL)
        .set_text_wrap()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::Top)
}

fn body_format() -> Format {
    Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::Top)
}

/// Write a field row sequence to a worksheet.
///
/// Emits the header row, one row per [`FieldRow`] in order, fixed column
/// widths, and freezes the header row.
pub fn write_sheet(worksheet: &mut Worksheet, rows: &[FieldRow]) -> Result<(), XlsxError> {
    let header = header_format();
    let body = body_format();

    for (col, title) in COLUMN_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let row_num = (idx + 1) as u32;
        let cells = [
            row.name.as_str(),
            row.description.as_str(),
            row.required.as_str(),
            row.data_type.as_str(),
            row.enum_values.as_str(),
        ];
        for (col, cell) in cells.iter().enumerate() {
            worksheet.write_string_with_format(row_num, col as u16, *cell, &body)?;
        }
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    #[test]
    fn test_write_sheet_accepts_rows() {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("meta").unwrap();

        let rows = vec![
            FieldRow {
                name: "schema_version".to_string(),
                description: "Version identifier".to_string(),
                required: "Yes".to_string(),
                data_type: "string".to_string(),
                enum_values: String::new(),
            },
            FieldRow::separator("nested"),
        ];
        write_sheet(worksheet, &rows).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        workbook.save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_sheet_empty_rows_still_has_header() {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, &[]).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        workbook.save(&path).unwrap();
        assert!(path.exists());
    }
}
