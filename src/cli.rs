use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shift-cal")]
#[command(about = "勤務表PDF・テキストからカレンダー取込CSVを生成するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 勤務表から対象者のシフトを抽出してCSV等に出力
    Convert {
        /// 入力PDF（OCR推奨）
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// TXTファイルパス（Acrobatやpdftotextの書き出し）
        #[arg(short, long)]
        text: Option<PathBuf>,

        /// 抽出対象の氏名（完全一致）
        #[arg(short, long)]
        name: String,

        /// CSVのSubject欄（省略時は設定値）
        #[arg(short, long)]
        subject: Option<String>,

        /// 年(YYYY)
        #[arg(short, long)]
        year: i32,

        /// 月(MM)
        #[arg(short, long)]
        month: u32,

        /// 出力ファイルパス
        #[arg(short, long)]
        output: PathBuf,

        /// 出力形式 (gcal/gcal-full/json/xlsx、省略時は設定値またはgcal)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// 正規化済みテキストを出力（氏名の表記確認用）
    Extract {
        /// 入力PDF
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// TXTファイルパス
        #[arg(short, long)]
        text: Option<PathBuf>,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のSubjectを設定
        #[arg(long)]
        set_subject: Option<String>,

        /// 既定の出力形式を設定
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// pdftotextのコマンド名/パスを設定
        #[arg(long)]
        set_pdftotext: Option<String>,

        /// pdftotextのタイムアウト（秒）を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Subject, Start Date, Start Time
    #[default]
    Gcal,
    /// 終了日時つき
    GcalFull,
    Json,
    Xlsx,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gcal" | "csv" => Ok(OutputFormat::Gcal),
            "gcal-full" | "full" => Ok(OutputFormat::GcalFull),
            "json" => Ok(OutputFormat::Json),
            "xlsx" | "excel" => Ok(OutputFormat::Xlsx),
            _ => Err(format!(
                "Unknown format: {}. Use gcal, gcal-full, json, or xlsx",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Gcal => write!(f, "gcal"),
            OutputFormat::GcalFull => write!(f, "gcal-full"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Xlsx => write!(f, "xlsx"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("gcal".parse::<OutputFormat>().unwrap(), OutputFormat::Gcal);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Gcal);
        assert_eq!("gcal-full".parse::<OutputFormat>().unwrap(), OutputFormat::GcalFull);
        assert_eq!("excel".parse::<OutputFormat>().unwrap(), OutputFormat::Xlsx);
        assert!("ical".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display_round_trip() {
        for format in [
            OutputFormat::Gcal,
            OutputFormat::GcalFull,
            OutputFormat::Json,
            OutputFormat::Xlsx,
        ] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_parse_convert_args() {
        let cli = Cli::try_parse_from([
            "shift-cal", "convert", "--text", "shift.txt", "--name", "山縣", "--subject", "勤務",
            "--year", "2025", "--month", "4", "--output", "out.csv", "--format", "gcal-full",
        ])
        .unwrap();

        match cli.command {
            Commands::Convert { name, year, month, format, input, .. } => {
                assert_eq!(name, "山縣");
                assert_eq!(year, 2025);
                assert_eq!(month, 4);
                assert_eq!(format, Some(OutputFormat::GcalFull));
                assert!(input.is_none());
            }
            _ => panic!("Expected Convert"),
        }
    }

    #[test]
    fn test_convert_requires_name() {
        let result = Cli::try_parse_from([
            "shift-cal", "convert", "--text", "a.txt", "--year", "2025", "--month", "4",
            "--output", "out.csv",
        ]);
        assert!(result.is_err());
    }
}
