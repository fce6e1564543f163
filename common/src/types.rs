//! 勤務表パース結果の型定義
//!
//! - ShiftRecord: 1日分の勤務（日・開始・終了）
//! - ShiftTable: パース結果（レコード＋認識したブロック数）
//! - ScheduleMonth: 出力時に使う年月（パーサー自体は日付しか知らない）

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 1日分の勤務
///
/// `start` / `end` は勤務表の表記そのまま（`9:00` のような1桁の時も維持）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// 日（1〜31、月の日数とは照合しない）
    pub day: u8,
    /// 開始時刻 "H:MM" / "HH:MM"
    pub start: String,
    /// 終了時刻 "H:MM" / "HH:MM"
    pub end: String,
}

impl ShiftRecord {
    pub fn new(day: u8, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            day,
            start: start.into(),
            end: end.into(),
        }
    }
}

/// パース結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftTable {
    /// 重複除去・日付順ソート済みのレコード
    pub records: Vec<ShiftRecord>,
    /// 認識した3行ブロックの数（対象者の有無は問わない）
    pub blocks: usize,
}

impl ShiftTable {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// 出力対象の年月
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleMonth {
    year: i32,
    month: u32,
}

impl ScheduleMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::InvalidYear(year));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(Error::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// `YYYY/MM/DD` 形式の日付文字列
    ///
    /// 日は月の日数と照合しない（30日の月の31日もそのまま出力）
    pub fn date_string(&self, day: u8) -> String {
        format!("{:04}/{:02}/{:02}", self.year, self.month, day)
    }
}
