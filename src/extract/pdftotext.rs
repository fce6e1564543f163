//! pdftotext（poppler）によるテキスト抽出
//!
//! `pdftotext -layout <pdf> -` の標準出力を読む

use super::decode_ignoring_invalid;
use crate::config::Config;
use crate::error::{ShiftCalError, Result};
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

pub async fn run_pdftotext(path: &Path, config: &Config) -> Result<String> {
    let program = which::which(&config.pdftotext_command).map_err(|e| {
        ShiftCalError::PdfExtraction(format!(
            "{} が見つかりません: {}",
            config.pdftotext_command, e
        ))
    })?;

    let mut command = Command::new(program);
    command.arg("-layout").arg(path).arg("-").kill_on_drop(true);

    let timeout = Duration::from_secs(config.extract_timeout_seconds);
    let output = tokio::time::timeout(timeout, command.output())
        .await
        .map_err(|_| {
            ShiftCalError::PdfExtraction(format!(
                "pdftotextがタイムアウトしました（{}秒）",
                config.extract_timeout_seconds
            ))
        })?
        .map_err(|e| ShiftCalError::PdfExtraction(format!("pdftotext実行エラー: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ShiftCalError::PdfExtraction(format!(
            "pdftotext failed (code {:?}): {}",
            output.status.code(),
            stderr.trim()
        )));
    }

    Ok(decode_ignoring_invalid(&output.stdout))
}
