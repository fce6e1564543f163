//! 勤務レコードの出力
//!
//! - gcal: Googleカレンダー取込用の最小CSV（Subject, Start Date, Start Time）
//! - gcal-full: 終了日時つきCSV
//! - json: 日付・開始・終了のJSON配列
//! - xlsx: gcal-fullと同じ列のExcel

pub mod gcal;
pub mod json;
pub mod excel;

use crate::cli::OutputFormat;
use crate::error::Result;
use serde::Serialize;
use shift_cal_common::{ScheduleMonth, ShiftRecord};
use std::path::Path;

/// 出力1行分
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarRow {
    pub subject: String,
    /// YYYY/MM/DD
    pub date: String,
    pub day: u8,
    pub start: String,
    pub end: String,
}

/// 日の昇順（同日は元の順）で出力行を組み立てる
pub fn calendar_rows(
    records: &[ShiftRecord],
    month: ScheduleMonth,
    subject: &str,
) -> Vec<CalendarRow> {
    let mut sorted: Vec<&ShiftRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.day);

    sorted
        .into_iter()
        .map(|record| CalendarRow {
            subject: subject.to_string(),
            date: month.date_string(record.day),
            day: record.day,
            start: record.start.clone(),
            end: record.end.clone(),
        })
        .collect()
}

pub fn export_records(
    records: &[ShiftRecord],
    format: &OutputFormat,
    month: ScheduleMonth,
    subject: &str,
    output_path: &Path,
) -> Result<()> {
    let rows = calendar_rows(records, month, subject);
    log::debug!("{}形式で{}件を出力: {}", format, rows.len(), output_path.display());

    match format {
        OutputFormat::Gcal => gcal::write_minimal_csv(&rows, output_path),
        OutputFormat::GcalFull => gcal::write_full_csv(&rows, output_path),
        OutputFormat::Json => json::write_json(&rows, output_path),
        OutputFormat::Xlsx => excel::write_xlsx(&rows, output_path),
    }
}
