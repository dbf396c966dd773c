//! 명령행 인자

use clap::Parser;
use std::path::PathBuf;

/// 표준 입력의 각 줄을 금칙어 검사하여 JSON으로 출력
#[derive(Parser, Debug)]
#[command(
    name = "koguard",
    version,
    about = "Korean-aware banned-word checker: one JSON result per stdin line"
)]
pub struct Cli {
    /// 금칙어 사전 JSON 파일
    pub dictionary: PathBuf,

    /// 검사 설정 JSON 파일 (생략 시 기본값)
    pub config: Option<PathBuf>,
}
