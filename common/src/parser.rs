//! 勤務表パーサー
//!
//! 正規化済みの行から「日付行・氏名行・時間行」の3行ブロックを探し、
//! 対象者の列だけを (日, 開始, 終了) として取り出す。
//!
//! ```text
//! 1 2 3                                  <- 日付行
//! 山縣 田中 山縣                          <- 氏名行
//! 09:00~17:00 08:00-16:00 13:00-21:00    <- 時間行
//! ```
//!
//! ブロック以外の行（タイトル・凡例・フッター）は読み飛ばす。
//! 列数が揃わない場合は最短の行に合わせ、時間が読めないセルは無視する。

use crate::normalize::normalize_lines;
use crate::types::{ShiftRecord, ShiftTable};
use regex::Regex;
use std::collections::HashSet;

/// 1ブロックの行数
const BLOCK_LINES: usize = 3;

/// 行の分類
#[derive(Debug, PartialEq, Eq)]
enum LineKind {
    /// 日付行（各列の日）
    DayHeader(Vec<u8>),
    Other,
}

/// 行全体が「1〜31の整数をスペース区切りで並べたもの」かを判定
fn classify(line: &str) -> LineKind {
    lazy_static::lazy_static! {
        static ref DAY_HEADER_RE: Regex = Regex::new(
            r"^(?:[1-9]|[12][0-9]|3[01])(?: (?:[1-9]|[12][0-9]|3[01]))*$"
        ).unwrap();
    }

    if !DAY_HEADER_RE.is_match(line) {
        return LineKind::Other;
    }

    let days = line
        .split(' ')
        .filter_map(|token| token.parse::<u8>().ok())
        .collect();
    LineKind::DayHeader(days)
}

/// 時間セルを (開始, 終了) に分解
///
/// セル先頭が `H:MM~H:MM` / `H:MM-H:MM` であればよい（後ろの注記は無視）
fn parse_time_range(cell: &str) -> Option<(&str, &str)> {
    lazy_static::lazy_static! {
        static ref TIME_RANGE_RE: Regex = Regex::new(
            r"^([0-9]{1,2}:[0-9]{2})[~\-]([0-9]{1,2}:[0-9]{2})"
        ).unwrap();
    }

    let caps = TIME_RANGE_RE.captures(cell)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// 1ブロック分の対象者の勤務を取り出す
fn extract_block(
    days: &[u8],
    names_line: &str,
    times_line: &str,
    target_name: &str,
    out: &mut Vec<ShiftRecord>,
) {
    let names: Vec<&str> = names_line.split_whitespace().collect();
    let times: Vec<&str> = times_line.split_whitespace().collect();

    // 列数が異なる場合は最短に合わせる
    let n = days.len().min(names.len()).min(times.len());

    for idx in 0..n {
        if names[idx] != target_name {
            continue;
        }
        if let Some((start, end)) = parse_time_range(times[idx]) {
            out.push(ShiftRecord::new(days[idx], start, end));
        }
    }
}

/// 重複除去（先勝ち）後、日付順に安定ソート
fn dedup_and_sort(records: Vec<ShiftRecord>) -> Vec<ShiftRecord> {
    let mut seen = HashSet::new();
    let mut unique: Vec<ShiftRecord> = records
        .into_iter()
        .filter(|record| seen.insert(record.clone()))
        .collect();
    unique.sort_by_key(|record| record.day);
    unique
}

/// 勤務表テキストをパースし、ブロック数も含めた結果を返す
///
/// # Arguments
/// * `text` - 抽出済みの勤務表テキスト（未正規化でよい）
/// * `target_name` - 対象者の氏名（完全一致）
pub fn parse_shift_table(text: &str, target_name: &str) -> ShiftTable {
    let lines = normalize_lines(text);
    let mut records = Vec::new();
    let mut blocks = 0;

    let mut i = 0;
    while i + BLOCK_LINES <= lines.len() {
        match classify(&lines[i]) {
            LineKind::DayHeader(days) => {
                extract_block(&days, &lines[i + 1], &lines[i + 2], target_name, &mut records);
                blocks += 1;
                i += BLOCK_LINES;
            }
            LineKind::Other => i += 1,
        }
    }

    ShiftTable {
        records: dedup_and_sort(records),
        blocks,
    }
}

/// 勤務表テキストから対象者の勤務を取り出す
///
/// 結果は (日, 開始, 終了) で重複除去され、日の昇順に並ぶ。
/// 該当なしは空のVecでありエラーではない。
///
/// # Examples
/// ```
/// use shift_cal_common::{parse_shifts, ShiftRecord};
///
/// let text = "1 2 3\n山縣 田中 山縣\n09:00～17:00 08:00-16:00 13:00-21:00";
/// let shifts = parse_shifts(text, "山縣");
/// assert_eq!(shifts, vec![
///     ShiftRecord::new(1, "09:00", "17:00"),
///     ShiftRecord::new(3, "13:00", "21:00"),
/// ]);
/// ```
pub fn parse_shifts(text: &str, target_name: &str) -> Vec<ShiftRecord> {
    parse_shift_table(text, target_name).records
}
