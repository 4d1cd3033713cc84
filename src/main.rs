//! 交互式中英互译命令行入口

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use fanyi::{AppConfig, CandidateAggregator, CacheStore, DictionaryApiClient, GoogleWebTranslator};

/// 触发退出的命令（不区分大小写）
const EXIT_COMMANDS: &[&str] = &["exit", "quit", "q"];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("配置加载失败，使用默认配置: {}", e);
            AppConfig::default()
        }
    };

    let translator = GoogleWebTranslator::new(&config);
    let dictionary = DictionaryApiClient::new(&config);
    let cache = CacheStore::load_default();
    let mut aggregator = CandidateAggregator::new(translator, dictionary, cache);

    println!("Interactive Translation Tool (Chinese <-> English)");
    println!("Type 'exit' or 'quit' to stop, or press Ctrl+C");
    let stats = aggregator.cache().stats();
    println!("Cache: {} entries ({})\n", stats.entries, stats.path.display());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter word to translate: ");
        if io::stdout().flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            // 读取失败或输入结束（Ctrl+D）
            _ => {
                println!("\nGoodbye!");
                break;
            }
        };

        let input = line.trim();

        if EXIT_COMMANDS.contains(&input.to_lowercase().as_str()) {
            println!("Goodbye!");
            break;
        }

        // 跳过空行，不产生任何输出
        if input.is_empty() {
            continue;
        }

        let result = aggregator.lookup(input);
        println!("{}\n", result);
    }

    ExitCode::SUCCESS
}
