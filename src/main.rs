use clap::Parser;
use shift_cal::{cli, config, error, export, extract};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::Result;
use shift_cal_common::{normalize_lines, parse_shift_table, ScheduleMonth};
use std::io::Write;

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Convert { input, text, name, subject, year, month, output, format } => {
            println!("📅 shift-cal - シフト抽出\n");

            // 引数チェックはテキスト取得より先に行う
            let month = ScheduleMonth::new(year, month)?;
            let subject = config.resolve_subject(subject)?;
            let format = match format {
                Some(format) => format,
                None => match config.default_format.as_deref() {
                    Some(s) => s.parse().map_err(error::ShiftCalError::Config)?,
                    None => OutputFormat::default(),
                },
            };

            // 1. テキスト取得
            println!("[1/3] テキストを取得中...");
            let raw_text = extract::acquire_text(text.as_deref(), input.as_deref(), &config).await?;
            println!("✔ {}文字を取得\n", raw_text.chars().count());

            // 2. パース
            println!("[2/3] 勤務表を解析中...");
            let table = parse_shift_table(&raw_text, &name);
            log::debug!("ブロック数: {}, 抽出件数: {}", table.blocks, table.len());
            if table.is_empty() {
                if table.blocks == 0 {
                    log::warn!("勤務表のブロック（日付行・氏名行・時間行）が見つかりません");
                }
                println!("警告: 抽出0件。氏名の表記ゆれ（山縣/山県、スペース有無、全角/半角）を確認してください。");
            } else {
                println!("✔ {}件のシフトを抽出\n", table.len());
            }

            // 3. 出力
            println!(
                "[3/3] {}年{}月分を{}形式で出力中...",
                month.year(),
                month.month(),
                format
            );
            export::export_records(&table.records, &format, month, &subject, &output)?;
            println!("出力: {}（{}件）", output.display(), table.len());
        }

        Commands::Extract { input, text, output } => {
            let raw_text = extract::acquire_text(text.as_deref(), input.as_deref(), &config).await?;
            let lines = normalize_lines(&raw_text);

            match output {
                Some(path) => {
                    let mut content = lines.join("\n");
                    content.push('\n');
                    std::fs::write(&path, content)?;
                    println!("出力: {}（{}行）", path.display(), lines.len());
                }
                None => {
                    let stdout = std::io::stdout();
                    let mut handle = stdout.lock();
                    for line in &lines {
                        writeln!(handle, "{}", line)?;
                    }
                }
            }
        }

        Commands::Config { set_subject, set_format, set_pdftotext, set_timeout, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(subject) = set_subject {
                config.default_subject = Some(subject);
                changed = true;
            }
            if let Some(format) = set_format {
                config.default_format = Some(format.to_string());
                changed = true;
            }
            if let Some(command) = set_pdftotext {
                config.pdftotext_command = command;
                changed = true;
            }
            if let Some(seconds) = set_timeout {
                config.extract_timeout_seconds = seconds;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  Subject: {}", config.default_subject.as_deref().unwrap_or("未設定"));
                println!("  出力形式: {}", config.default_format.as_deref().unwrap_or("gcal"));
                println!("  pdftotext: {}", config.pdftotext_command);
                println!("  タイムアウト: {}秒", config.extract_timeout_seconds);
            }
        }
    }

    Ok(())
}
