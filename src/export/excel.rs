//! Excel出力（rust_xlsxwriter）

use super::CalendarRow;
use crate::error::Result;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

const SHEET_NAME: &str = "シフト";
const HEADERS: [&str; 5] = ["Subject", "Start Date", "Start Time", "End Date", "End Time"];

pub fn write_xlsx(rows: &[CalendarRow], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, row.subject.as_str())?;
        worksheet.write_string(r, 1, row.date.as_str())?;
        worksheet.write_string(r, 2, row.start.as_str())?;
        worksheet.write_string(r, 3, row.date.as_str())?;
        worksheet.write_string(r, 4, row.end.as_str())?;
    }

    worksheet.set_column_width(0, 16)?;
    worksheet.set_column_width(1, 12)?;
    worksheet.set_column_width(3, 12)?;

    workbook.save(output_path)?;
    Ok(())
}
