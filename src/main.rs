//! koguard - 표준 입력의 각 줄을 금칙어 검사하여 JSON으로 출력
//!
//! 사용법: koguard <dictionary.json> [config.json]

use std::io::{self, BufRead, Write};
use std::process;
use std::sync::Arc;

use clap::Parser;
use koguard::cli::Cli;
use koguard::config::{load_config, GuardConfig};
use koguard::{DetectionEngine, DictionaryStore};

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // 설정 로드
    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("설정 로드 실패: {}", e);
                process::exit(1);
            }
        },
        None => GuardConfig::default(),
    };
    let options = match config.options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("잘못된 설정: {}", e);
            process::exit(1);
        }
    };

    let store = Arc::new(DictionaryStore::new());
    if let Err(e) = store.refresh_from_path(&cli.dictionary) {
        eprintln!("사전 로드 실패: {}", e);
        process::exit(1);
    }

    let engine = DetectionEngine::new(store).with_max_input_length(config.max_input_length);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };

        let output = match engine.detect_text(&line, options) {
            Ok(result) => serde_json::to_string(&result),
            Err(e) => serde_json::to_string(&serde_json::json!({ "error": e.to_string() })),
        };
        match output {
            Ok(json) => {
                if writeln!(out, "{}", json).is_err() {
                    break;
                }
            }
            Err(e) => log::error!("결과 직렬화 실패: {}", e),
        }
    }
}
