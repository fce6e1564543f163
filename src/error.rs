use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftCalError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("テキストが取得できませんでした。--text にTXTを指定するか、--input にPDFを指定してください。")]
    TextUnavailable,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("PDFテキスト抽出エラー: {0}")]
    PdfExtraction(String),

    #[error("Subjectが指定されていません。--subject で指定するか `shift-cal config --set-subject 件名` で設定してください")]
    MissingSubject,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV出力エラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel生成エラー: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Common(#[from] shift_cal_common::Error),
}

pub type Result<T> = std::result::Result<T, ShiftCalError>;
