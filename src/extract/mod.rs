//! 勤務表テキストの取得
//!
//! 優先順位:
//! 1. --text のTXTファイル（Acrobatやpdftotextの書き出し）
//! 2. --input のPDF（lopdfで抽出 → 空ならpdftotext -layout）
//!
//! どちらからも空白以外のテキストが得られなければ TextUnavailable

mod pdf;
mod pdftotext;

use crate::config::Config;
use crate::error::{ShiftCalError, Result};
use std::path::Path;

/// UTF-8として読めないバイトを捨てて文字列にする（置換文字は入れない）
pub(crate) fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// テキストファイルを読み込む（UTF-8として読めないバイトは無視）
pub fn read_text_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ShiftCalError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    Ok(decode_ignoring_invalid(&bytes))
}

/// PDFからテキストを抽出する
///
/// 抽出できなかった場合は空文字列（エラーはログのみ）
pub async fn extract_text_from_pdf(path: &Path, config: &Config) -> String {
    match pdf::extract_with_lopdf(path) {
        Ok(text) if !text.trim().is_empty() => {
            log::debug!("lopdfで抽出: {} chars", text.len());
            return text;
        }
        Ok(_) => log::debug!("lopdfの抽出結果が空: {}", path.display()),
        Err(e) => log::debug!("{}", e),
    }

    match pdftotext::run_pdftotext(path, config).await {
        Ok(text) => {
            log::debug!("pdftotextで抽出: {} chars", text.len());
            text
        }
        Err(e) => {
            log::warn!("{}", e);
            String::new()
        }
    }
}

/// 引数に応じてテキストを取得する
///
/// # Arguments
/// * `text_path` - --text のパス
/// * `pdf_path` - --input のパス
/// * `config` - pdftotextの設定
pub async fn acquire_text(
    text_path: Option<&Path>,
    pdf_path: Option<&Path>,
    config: &Config,
) -> Result<String> {
    let text = match (text_path, pdf_path) {
        (Some(path), _) if path.exists() => {
            log::info!("テキストファイルを読み込み: {}", path.display());
            read_text_file(path)?
        }
        (_, Some(path)) if path.exists() => {
            log::info!("PDFからテキストを抽出: {}", path.display());
            extract_text_from_pdf(path, config).await
        }
        _ => {
            for path in text_path.into_iter().chain(pdf_path) {
                log::warn!("ファイルが見つかりません: {}", path.display());
            }
            String::new()
        }
    };

    if text.trim().is_empty() {
        return Err(ShiftCalError::TextUnavailable);
    }

    Ok(text)
}
