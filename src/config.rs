use crate::error::{ShiftCalError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SUBJECT_ENV: &str = "SHIFT_CAL_SUBJECT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// --subject 省略時のSubject
    pub default_subject: Option<String>,
    /// --format 省略時の出力形式
    pub default_format: Option<String>,
    /// pdftotextのコマンド名またはパス
    pub pdftotext_command: String,
    /// pdftotextのタイムアウト（秒）
    pub extract_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_subject: None,
            default_format: None,
            pdftotext_command: "pdftotext".into(),
            extract_timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ShiftCalError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("shift-cal").join("config.json"))
    }

    /// Subjectを決定（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_subject(&self, arg: Option<String>) -> Result<String> {
        if let Some(subject) = arg {
            return Ok(subject);
        }

        if let Ok(subject) = std::env::var(SUBJECT_ENV) {
            if !subject.trim().is_empty() {
                return Ok(subject);
            }
        }

        self.default_subject.clone().ok_or(ShiftCalError::MissingSubject)
    }
}
