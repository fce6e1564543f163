//! Googleカレンダー取込用CSV
//!
//! UTF-8（BOMなし）、改行CRLF、必要な時だけクォート

use super::CalendarRow;
use crate::error::Result;
use csv::{Terminator, WriterBuilder};
use std::path::Path;

const MINIMAL_HEADERS: [&str; 3] = ["Subject", "Start Date", "Start Time"];
const FULL_HEADERS: [&str; 5] = ["Subject", "Start Date", "Start Time", "End Date", "End Time"];

fn write_csv<const N: usize>(
    headers: [&str; N],
    rows: &[CalendarRow],
    output_path: &Path,
    project: impl Fn(&CalendarRow) -> [&str; N],
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_path(output_path)?;

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(project(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// Subject, Start Date, Start Time
pub fn write_minimal_csv(rows: &[CalendarRow], output_path: &Path) -> Result<()> {
    write_csv(MINIMAL_HEADERS, rows, output_path, |row| {
        [row.subject.as_str(), row.date.as_str(), row.start.as_str()]
    })
}

/// Subject, Start Date, Start Time, End Date, End Time
///
/// 終了日は開始日と同じ（日またぎは判定しない）
pub fn write_full_csv(rows: &[CalendarRow], output_path: &Path) -> Result<()> {
    write_csv(FULL_HEADERS, rows, output_path, |row| {
        [
            row.subject.as_str(),
            row.date.as_str(),
            row.start.as_str(),
            row.date.as_str(),
            row.end.as_str(),
        ]
    })
}
