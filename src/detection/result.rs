//! 검사 결과

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::dictionary::{BannedTerm, Category, Severity};

/// 일치를 만든 비교 방식
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    /// 원문 부분 문자열
    Exact,
    /// 정규화 후 부분 문자열
    Normalized,
    /// 초성 부분 문자열
    Chosung,
    /// 편집 거리 허용치 이내
    Fuzzy,
}

/// 일치 정보 (사전 항목에서 복사한 값)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectedTerm {
    pub word: String,
    pub match_type: MatchType,
    pub category: Category,
    pub severity: Severity,
}

/// 불변 검사 결과
///
/// 일치 정보는 `Option` 하나로만 표현되므로
/// `detected()`와 `detected_word().is_some()`은 항상 같습니다.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetectionResult {
    hit: Option<DetectedTerm>,
}

impl DetectionResult {
    /// 금칙어 없음
    pub fn clean() -> Self {
        Self { hit: None }
    }

    pub(crate) fn matched(term: &BannedTerm, match_type: MatchType) -> Self {
        Self {
            hit: Some(DetectedTerm {
                word: term.term.clone(),
                match_type,
                category: term.category,
                severity: term.severity,
            }),
        }
    }

    pub fn detected(&self) -> bool {
        self.hit.is_some()
    }

    pub fn detected_word(&self) -> Option<&str> {
        self.hit.as_ref().map(|h| h.word.as_str())
    }

    pub fn match_type(&self) -> Option<MatchType> {
        self.hit.as_ref().map(|h| h.match_type)
    }

    pub fn category(&self) -> Option<Category> {
        self.hit.as_ref().map(|h| h.category)
    }

    pub fn severity(&self) -> Option<Severity> {
        self.hit.as_ref().map(|h| h.severity)
    }

    /// 일치 정보 전체
    pub fn hit(&self) -> Option<&DetectedTerm> {
        self.hit.as_ref()
    }
}

// 호출 측 로그/응답 형식: 미검출 시 나머지 필드는 null
impl Serialize for DetectionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DetectionResult", 5)?;
        state.serialize_field("detected", &self.detected())?;
        state.serialize_field("detectedWord", &self.detected_word())?;
        state.serialize_field("matchType", &self.match_type())?;
        state.serialize_field("category", &self.category())?;
        state.serialize_field("severity", &self.severity())?;
        state.end()
    }
}
