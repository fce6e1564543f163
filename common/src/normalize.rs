//! 行テキストの正規化
//!
//! - 全角数字・記号 → 半角
//! - 連続する空白 → 半角スペース1つ
//! - 前後の空白を除去

use regex::Regex;

/// 全角→半角の変換表
const FULLWIDTH_TABLE: &[(char, char)] = &[
    ('０', '0'),
    ('１', '1'),
    ('２', '2'),
    ('３', '3'),
    ('４', '4'),
    ('５', '5'),
    ('６', '6'),
    ('７', '7'),
    ('８', '8'),
    ('９', '9'),
    ('：', ':'),
    ('－', '-'),
    ('ー', '-'),
    ('〜', '~'),
    ('～', '~'),
    ('　', ' '),
];

/// 改行として扱う文字（CRLFは空行を挟むだけなので個別に扱わない）
const LINE_TERMINATORS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

fn to_halfwidth(c: char) -> char {
    FULLWIDTH_TABLE
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}

/// 1行を正規化する
///
/// # Examples
/// ```
/// use shift_cal_common::normalize;
///
/// assert_eq!(normalize("１２：３４"), "12:34");
/// assert_eq!(normalize("  山縣　　田中 "), "山縣 田中");
/// ```
pub fn normalize(line: &str) -> String {
    lazy_static::lazy_static! {
        static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    }

    let translated: String = line.chars().map(to_halfwidth).collect();
    WHITESPACE_RE.replace_all(&translated, " ").trim().to_string()
}

/// テキスト全体を行に分割し、正規化して空行を除く
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.split(LINE_TERMINATORS)
        .map(normalize)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullwidth_digits() {
        assert_eq!(normalize("０１２３４５６７８９"), "0123456789");
        assert_eq!(normalize("１２:３４"), "12:34");
    }

    #[test]
    fn test_fullwidth_separators() {
        assert_eq!(normalize("９：００－１７：００"), "9:00-17:00");
        assert_eq!(normalize("9:00ー17:00"), "9:00-17:00");
        assert_eq!(normalize("9:00〜17:00"), "9:00~17:00");
        assert_eq!(normalize("9:00～17:00"), "9:00~17:00");
    }

    #[test]
    fn test_ideographic_space_collapsed() {
        assert_eq!(normalize("山縣　　　田中"), "山縣 田中");
        assert_eq!(normalize("　1　2　"), "1 2");
    }

    #[test]
    fn test_whitespace_collapse_and_trim() {
        assert_eq!(normalize("  1 \t 2\t\t3  "), "1 2 3");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t　 "), "");
    }

    #[test]
    fn test_other_characters_untouched() {
        assert_eq!(normalize("山縣 ａｂｃ"), "山縣 ａｂｃ");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "１２:３４",
            "　山縣　田中  佐藤 ",
            "09:00～17:00 08:00－16:00",
            "勤務表 ２０２５年４月",
            "\t\t",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "入力: {:?}", s);
        }
    }

    #[test]
    fn test_no_table_chars_remain() {
        let out = normalize("０１２３４５６７８９：－ー〜～　");
        for (from, _) in FULLWIDTH_TABLE {
            assert!(!out.contains(*from), "{} が残っている", from);
        }
        assert!(!out.contains("  "));
    }

    #[test]
    fn test_normalize_lines_drops_blank() {
        let text = "1 2\n\n　\r\n山縣 田中\r\n09:00-17:00 10:00-18:00\n";
        let lines = normalize_lines(text);
        assert_eq!(lines, vec!["1 2", "山縣 田中", "09:00-17:00 10:00-18:00"]);
    }

    #[test]
    fn test_normalize_lines_bare_cr() {
        let lines = normalize_lines("1 2\r山縣 田中\r9:00-17:00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_normalize_lines_form_feed_page_break() {
        let lines = normalize_lines("1 2\u{0c}山縣 田中");
        assert_eq!(lines, vec!["1 2", "山縣 田中"]);
    }
}
