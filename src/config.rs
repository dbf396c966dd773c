//! 설정 파일 로드 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

use crate::detection::{DetectionMode, DetectionOptions, DEFAULT_MAX_INPUT_LENGTH};

/// 잘못된 설정 (기본값으로 대체하지 않고 거부)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("알 수 없는 검사 모드: {0:?} (lenient, normal, strict 중 하나)")]
    InvalidMode(String),
    #[error("편집 거리 허용치는 0 이상이어야 합니다: {0}")]
    InvalidThreshold(i64),
    #[error("최대 입력 길이는 1 이상이어야 합니다")]
    InvalidMaxInputLength,
    #[error("설정 파일 읽기 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 JSON 파싱 오류: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 검사기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GuardConfig {
    /// 기본 검사 모드
    #[serde(default)]
    pub mode: DetectionMode,
    /// 초성 비교 사용 여부
    #[serde(default)]
    pub check_korean_jamo: bool,
    /// 편집 거리 허용치 (파일에서는 부호 있는 정수, 음수는 거부)
    #[serde(default)]
    pub levenshtein_threshold: i64,
    /// 편집 거리 비교 입력 길이 상한 (문자 수)
    #[serde(default = "default_max_input_length")]
    pub max_input_length: usize,
}

fn default_max_input_length() -> usize {
    DEFAULT_MAX_INPUT_LENGTH
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            mode: DetectionMode::default(),
            check_korean_jamo: false,
            levenshtein_threshold: 0,
            max_input_length: default_max_input_length(),
        }
    }
}

impl GuardConfig {
    /// 값 범위 검증
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levenshtein_threshold < 0 {
            return Err(ConfigError::InvalidThreshold(self.levenshtein_threshold));
        }
        if self.max_input_length == 0 {
            return Err(ConfigError::InvalidMaxInputLength);
        }
        Ok(())
    }

    /// 검사 옵션으로 변환
    pub fn options(&self) -> Result<DetectionOptions, ConfigError> {
        let levenshtein_threshold = u32::try_from(self.levenshtein_threshold)
            .map_err(|_| ConfigError::InvalidThreshold(self.levenshtein_threshold))?;
        Ok(DetectionOptions {
            mode: self.mode,
            check_korean_jamo: self.check_korean_jamo,
            levenshtein_threshold,
        })
    }
}

/// JSON 문자열에서 설정 파싱 및 검증
pub fn parse_config(json: &str) -> Result<GuardConfig, ConfigError> {
    let config: GuardConfig = serde_json::from_str(json).map_err(|e| {
        // 알 수 없는 모드 문자열은 별도 에러로 구분
        match serde_json::from_str::<serde_json::Value>(json)
            .ok()
            .and_then(|v| v.get("mode").and_then(|m| m.as_str()).map(str::to_string))
        {
            Some(mode) if mode.parse::<DetectionMode>().is_err() => ConfigError::InvalidMode(mode),
            _ => ConfigError::Parse(e),
        }
    })?;
    config.validate()?;
    Ok(config)
}

/// 설정 파일 로드
///
/// 파일이 없으면 기본값, 내용이 잘못되었으면 에러
pub fn load_config(path: impl AsRef<Path>) -> Result<GuardConfig, ConfigError> {
    match fs::read_to_string(path.as_ref()) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("설정 파일 없음, 기본값 사용: {}", path.as_ref().display());
            Ok(GuardConfig::default())
        }
        Err(e) => Err(ConfigError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GuardConfig::default();
        assert_eq!(config.mode, DetectionMode::Normal);
        assert!(!config.check_korean_jamo);
        assert_eq!(config.levenshtein_threshold, 0);
        assert_eq!(config.max_input_length, 1000);
        assert_eq!(config.options().unwrap(), DetectionOptions::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = parse_config(r#"{"mode": "STRICT", "levenshtein_threshold": 1}"#).unwrap();
        assert_eq!(config.mode, DetectionMode::Strict);
        assert_eq!(config.max_input_length, 1000);
        assert_eq!(config.options().unwrap().levenshtein_threshold, 1);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let result = parse_config(r#"{"levenshtein_threshold": -2}"#);
        assert!(matches!(result, Err(ConfigError::InvalidThreshold(-2))));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result = parse_config(r#"{"mode": "PARANOID"}"#);
        assert!(matches!(result, Err(ConfigError::InvalidMode(m)) if m == "PARANOID"));
    }

    #[test]
    fn test_zero_cap_rejected() {
        let result = parse_config(r#"{"max_input_length": 0}"#);
        assert!(matches!(result, Err(ConfigError::InvalidMaxInputLength)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_config("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_defaults() {
        let config = load_config("/nonexistent/koguard/config.json").unwrap();
        assert_eq!(config, GuardConfig::default());
    }
}
