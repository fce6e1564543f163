//! lopdfによるPDFテキスト抽出（OCRテキスト層つきPDF向け）

use crate::error::{ShiftCalError, Result};
use lopdf::Document;
use std::path::Path;

/// 全ページのテキストを改行で連結して返す
pub fn extract_with_lopdf(path: &Path) -> Result<String> {
    let doc = Document::load(path)
        .map_err(|e| ShiftCalError::PdfExtraction(format!("PDF読み込みエラー: {}", e)))?;

    let pages = doc
        .get_pages()
        .keys()
        .map(|&page_num| {
            doc.extract_text(&[page_num]).map_err(|e| {
                ShiftCalError::PdfExtraction(format!("{}ページ目の抽出エラー: {}", page_num, e))
            })
        })
        .collect::<Result<Vec<String>>>()?;

    Ok(pages.join("\n"))
}
