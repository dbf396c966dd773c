//! 검사 모드와 요청 옵션

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::ConfigError;

/// 검사 엄격도
///
/// - `Lenient`: 원문 부분 문자열 비교만
/// - `Normal`: 정규화 비교 (+ 선택적 초성 비교)
/// - `Strict`: `Normal` + 편집 거리 비교
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectionMode {
    Lenient,
    #[default]
    Normal,
    Strict,
}

impl DetectionMode {
    /// 정규화 비교 수행 여부
    pub fn normalizes(self) -> bool {
        !matches!(self, DetectionMode::Lenient)
    }

    /// 편집 거리 비교 수행 여부
    pub fn fuzzy(self) -> bool {
        matches!(self, DetectionMode::Strict)
    }
}

impl FromStr for DetectionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(DetectionMode::Lenient),
            "normal" => Ok(DetectionMode::Normal),
            "strict" => Ok(DetectionMode::Strict),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

// 설정 파일에서는 대소문자 구분 없이 허용
impl<'de> Deserialize<'de> for DetectionMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetectionMode::Lenient => "LENIENT",
            DetectionMode::Normal => "NORMAL",
            DetectionMode::Strict => "STRICT",
        };
        f.write_str(name)
    }
}

/// 검사 옵션
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetectionOptions {
    #[serde(default)]
    pub mode: DetectionMode,
    /// 초성 비교 사용 여부
    #[serde(default)]
    pub check_korean_jamo: bool,
    /// 편집 거리 허용치 (`Strict`에서만 사용, 0이면 사실상 비활성)
    #[serde(default)]
    pub levenshtein_threshold: u32,
}

impl DetectionOptions {
    /// 기본 옵션 (`Normal`, 초성 비교 없음, 허용치 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// 외부 입력(문자열 모드, 부호 있는 허용치)으로 옵션 생성
    ///
    /// 알 수 없는 모드나 음수 허용치는 기본값으로 대체하지 않고 거부합니다.
    pub fn parse(mode: &str, check_korean_jamo: bool, threshold: i64) -> Result<Self, ConfigError> {
        let mode = mode.parse()?;
        let levenshtein_threshold =
            u32::try_from(threshold).map_err(|_| ConfigError::InvalidThreshold(threshold))?;
        Ok(Self {
            mode,
            check_korean_jamo,
            levenshtein_threshold,
        })
    }

    pub fn with_mode(mut self, mode: DetectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_korean_jamo(mut self, enabled: bool) -> Self {
        self.check_korean_jamo = enabled;
        self
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.levenshtein_threshold = threshold;
        self
    }

    /// 초성 비교가 실제로 수행되는지
    pub(crate) fn runs_chosung(&self) -> bool {
        self.check_korean_jamo && self.mode.normalizes()
    }

    /// 편집 거리 비교가 실제로 수행되는지
    ///
    /// 허용치 0은 정규화 비교와 결과가 같으므로 건너뜀
    pub(crate) fn runs_fuzzy(&self) -> bool {
        self.mode.fuzzy() && self.levenshtein_threshold > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DetectionOptions::default();
        assert_eq!(options.mode, DetectionMode::Normal);
        assert!(!options.check_korean_jamo);
        assert_eq!(options.levenshtein_threshold, 0);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("lenient".parse::<DetectionMode>().unwrap(), DetectionMode::Lenient);
        assert_eq!("NORMAL".parse::<DetectionMode>().unwrap(), DetectionMode::Normal);
        assert_eq!(" Strict ".parse::<DetectionMode>().unwrap(), DetectionMode::Strict);
        assert!(matches!(
            "paranoid".parse::<DetectionMode>(),
            Err(ConfigError::InvalidMode(_))
        ));
    }

    #[test]
    fn test_parse_rejects_negative_threshold() {
        assert!(matches!(
            DetectionOptions::parse("strict", false, -1),
            Err(ConfigError::InvalidThreshold(-1))
        ));
        let options = DetectionOptions::parse("strict", true, 2).unwrap();
        assert_eq!(options.mode, DetectionMode::Strict);
        assert!(options.check_korean_jamo);
        assert_eq!(options.levenshtein_threshold, 2);
    }

    #[test]
    fn test_strategy_gates() {
        let lenient = DetectionOptions::new()
            .with_mode(DetectionMode::Lenient)
            .with_korean_jamo(true)
            .with_threshold(3);
        assert!(!lenient.runs_chosung());
        assert!(!lenient.runs_fuzzy());

        let normal = DetectionOptions::new().with_korean_jamo(true).with_threshold(3);
        assert!(normal.runs_chosung());
        assert!(!normal.runs_fuzzy());

        let strict_zero = DetectionOptions::new().with_mode(DetectionMode::Strict);
        assert!(!strict_zero.runs_fuzzy());
        assert!(strict_zero.with_threshold(1).runs_fuzzy());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DetectionMode::Strict).unwrap();
        assert_eq!(json, "\"STRICT\"");
        let options: DetectionOptions = serde_json::from_str(r#"{"mode": "LENIENT"}"#).unwrap();
        assert_eq!(options.mode, DetectionMode::Lenient);
        let options: DetectionOptions = serde_json::from_str(r#"{"mode": "strict"}"#).unwrap();
        assert_eq!(options.mode, DetectionMode::Strict);
        assert_eq!(options.levenshtein_threshold, 0);
    }
}
