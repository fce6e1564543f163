//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("月が不正です: {0}（1〜12で指定してください）")]
    InvalidMonth(u32),

    #[error("年が不正です: {0}（1〜9999で指定してください）")]
    InvalidYear(i32),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
