//! 금칙어 검사 엔진
//!
//! 사전의 각 항목에 대해 비용이 낮은 순서로 비교 방식을 적용하고
//! 처음 일치한 항목/방식을 결과로 반환합니다:
//!
//! 1. 원문 부분 문자열 (`Lenient`, 또는 정규화하면 빈 문자열이 되는 항목)
//! 2. 정규화 부분 문자열 (`Normal`, `Strict`; 원문 포함은 정규화 후에도 포함이므로 1을 대신함)
//! 3. 초성 부분 문자열 (초성 비교 옵션 사용 시)
//! 4. 편집 거리 (`Strict`, 허용치 1 이상)
//!
//! 엔진 자체는 상태가 없고, 호출마다 현재 사전 스냅샷 하나만 읽습니다.

use std::sync::Arc;

use thiserror::Error;

use super::mode::DetectionOptions;
use super::result::{DetectionResult, MatchType};
use crate::core::distance::BoundedLevenshtein;
use crate::core::normalizer::{extract_chosung, normalize};
use crate::dictionary::{DictionaryStore, PreparedTerm, WordDictionary};

/// 편집 거리 비교 전 정규화 텍스트의 기본 최대 길이 (문자 수)
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 1000;

/// 엔진 사용 오류 (검사 결과가 아님)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectionError {
    #[error("입력 길이 {length}자가 최대 허용 길이 {max}자를 초과합니다")]
    InputTooLong { length: usize, max: usize },
}

/// 검사 요청
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectionRequest<'a> {
    /// 검사 대상 (None 또는 빈 문자열이면 미검출)
    pub text: Option<&'a str>,
    pub options: DetectionOptions,
}

impl<'a> DetectionRequest<'a> {
    /// 기본 옵션 요청
    pub fn new(text: &'a str) -> Self {
        Self {
            text: Some(text),
            options: DetectionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DetectionOptions) -> Self {
        self.options = options;
        self
    }
}

/// 요청 텍스트의 비교용 형태
///
/// 모드에 따라 필요한 형태만 계산합니다.
struct PreparedText<'a> {
    raw: &'a str,
    normalized: String,
    chosung: String,
    fuzzy_chars: Vec<char>,
}

impl<'a> PreparedText<'a> {
    fn new(raw: &'a str, options: &DetectionOptions) -> Self {
        let normalized = if options.mode.normalizes() {
            normalize(raw)
        } else {
            String::new()
        };
        let chosung = if options.runs_chosung() {
            extract_chosung(&normalized)
        } else {
            String::new()
        };
        let fuzzy_chars = if options.runs_fuzzy() {
            normalized.chars().collect()
        } else {
            Vec::new()
        };
        Self {
            raw,
            normalized,
            chosung,
            fuzzy_chars,
        }
    }
}

/// 금칙어 검사 엔진
pub struct DetectionEngine {
    store: Arc<DictionaryStore>,
    max_input_length: usize,
}

impl DetectionEngine {
    /// 사전 저장소를 주입하여 생성
    pub fn new(store: Arc<DictionaryStore>) -> Self {
        Self {
            store,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }

    /// 편집 거리 비교 입력 길이 상한 설정
    pub fn with_max_input_length(mut self, max: usize) -> Self {
        self.max_input_length = max;
        self
    }

    pub fn max_input_length(&self) -> usize {
        self.max_input_length
    }

    /// 주입된 사전 저장소
    pub fn store(&self) -> &Arc<DictionaryStore> {
        &self.store
    }

    /// 현재 사전 스냅샷으로 검사
    pub fn detect(&self, request: &DetectionRequest<'_>) -> Result<DetectionResult, DetectionError> {
        let snapshot = self.store.snapshot();
        self.detect_in(&snapshot, request)
    }

    /// 텍스트와 옵션으로 바로 검사
    pub fn detect_text(
        &self,
        text: &str,
        options: DetectionOptions,
    ) -> Result<DetectionResult, DetectionError> {
        self.detect(&DetectionRequest::new(text).with_options(options))
    }

    /// 지정한 사전 스냅샷으로 검사
    pub fn detect_in(
        &self,
        dictionary: &WordDictionary,
        request: &DetectionRequest<'_>,
    ) -> Result<DetectionResult, DetectionError> {
        let raw = match request.text {
            Some(t) if !t.is_empty() => t,
            _ => return Ok(DetectionResult::clean()),
        };
        if dictionary.is_empty() {
            return Ok(DetectionResult::clean());
        }

        let options = request.options;
        let text = PreparedText::new(raw, &options);

        if options.runs_fuzzy() && text.fuzzy_chars.len() > self.max_input_length {
            log::warn!(
                "편집 거리 검사 입력 길이 초과: {}자 (최대 {}자)",
                text.fuzzy_chars.len(),
                self.max_input_length
            );
            return Err(DetectionError::InputTooLong {
                length: text.fuzzy_chars.len(),
                max: self.max_input_length,
            });
        }

        let mut distance = BoundedLevenshtein::new();
        for entry in dictionary.prepared() {
            if let Some(match_type) = match_entry(&text, entry, &options, &mut distance) {
                log::debug!(
                    "금칙어 검출: {:?} ({:?}, {:?}/{:?})",
                    entry.term.term,
                    match_type,
                    entry.term.category,
                    entry.term.severity
                );
                return Ok(DetectionResult::matched(&entry.term, match_type));
            }
        }

        Ok(DetectionResult::clean())
    }
}

/// 한 항목에 대해 비교 방식을 순서대로 적용
fn match_entry(
    text: &PreparedText<'_>,
    entry: &PreparedTerm,
    options: &DetectionOptions,
    distance: &mut BoundedLevenshtein,
) -> Option<MatchType> {
    // 1. 원문 (대소문자 구분, 정규화 없음)
    if !options.mode.normalizes() || entry.normalized.is_empty() {
        return text
            .raw
            .contains(entry.term.term.as_str())
            .then_some(MatchType::Exact);
    }

    // 2. 정규화
    if text.normalized.contains(entry.normalized.as_str()) {
        return Some(MatchType::Normalized);
    }

    // 3. 초성 (낱자모 항목도 포함, 정규화 비교가 먼저이므로 그대로 쓰인 경우는 위에서 처리됨)
    if options.runs_chosung()
        && !entry.chosung.is_empty()
        && text.chosung.contains(entry.chosung.as_str())
    {
        return Some(MatchType::Chosung);
    }

    // 4. 편집 거리
    if options.runs_fuzzy()
        && fuzzy_contains(
            &text.fuzzy_chars,
            &entry.normalized_chars,
            options.levenshtein_threshold as usize,
            distance,
        )
    {
        return Some(MatchType::Fuzzy);
    }

    None
}

/// 항목 길이 ±1 인 연속 구간 중 편집 거리가 허용치 이내인 것이 있는지
fn fuzzy_contains(
    text: &[char],
    term: &[char],
    threshold: usize,
    distance: &mut BoundedLevenshtein,
) -> bool {
    if term.is_empty() {
        return false;
    }

    let min_len = term.len().saturating_sub(1).max(1);
    let max_len = term.len() + 1;

    for len in min_len..=max_len {
        if len > text.len() {
            break;
        }
        for window in text.windows(len) {
            if let Some(d) = distance.within(window, term, threshold) {
                log::trace!(
                    "편집 거리 일치: {:?} ~ {:?} = {}",
                    window.iter().collect::<String>(),
                    term.iter().collect::<String>(),
                    d
                );
                return true;
            }
        }
    }

    false
}
