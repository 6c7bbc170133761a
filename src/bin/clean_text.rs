// 文本清洗工具 - 对标准输入逐行运行指定清洗管道
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tts_cleaners_lib::{CleanedText, Cleaner, CleanerConfig, TextCleaner};

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    // --json: 每行输出一个 JSON 值（文本为字符串，符号序列为数组）
    let json = args.iter().any(|a| a == "--json");
    let Some(name) = args.iter().find(|a| !a.starts_with("--")) else {
        let names: Vec<&str> = Cleaner::ALL.iter().map(|c| c.name()).collect();
        anyhow::bail!(
            "用法: clean_text [--json] <cleaner>\n可选管道: {}",
            names.join(", ")
        );
    };

    let cleaner: Cleaner = name
        .parse()
        .with_context(|| format!("无效的清洗管道: {}", name))?;

    let config = CleanerConfig::load()?;
    let text_cleaner = TextCleaner::new(&config);
    tracing::info!("使用清洗管道 {} ({:?})", cleaner, text_cleaner);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let cleaned = text_cleaner.clean(cleaner, &line)?;
        if json {
            writeln!(out, "{}", serde_json::to_string(&cleaned)?)?;
            continue;
        }
        match cleaned {
            CleanedText::Text(text) => writeln!(out, "{}", text)?,
            CleanedText::Symbols(symbols) => writeln!(out, "{}", symbols.join(" "))?,
        }
    }

    Ok(())
}
