//! 입력 필드 검증
//!
//! 닉네임, 제목, 채팅 메시지 등 사용자 입력 필드를 검사해
//! 금칙어가 있으면 거부합니다. 거부 메시지에는 필드 이름만 담고,
//! 검출된 단어와 분류/심각도는 로그로만 남깁니다.

use thiserror::Error;

use super::engine::{DetectionEngine, DetectionError, DetectionRequest};
use super::mode::DetectionOptions;

/// 필드 검증 실패
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}에 사용할 수 없는 표현이 포함되어 있습니다")]
    Inappropriate { field: String },
    #[error(transparent)]
    Detection(#[from] DetectionError),
}

/// 필드 값 검증
///
/// `None`이나 빈 문자열은 항상 통과합니다.
pub fn validate_field(
    engine: &DetectionEngine,
    field_name: &str,
    text: Option<&str>,
    options: DetectionOptions,
) -> Result<(), ValidationError> {
    let request = DetectionRequest { text, options };
    let result = engine.detect(&request)?;

    match result.hit() {
        Some(hit) => {
            log::warn!(
                "필드 '{}' 금칙어 거부: {:?} {:?} ({:?}/{:?})",
                field_name,
                hit.word,
                hit.match_type,
                hit.category,
                hit.severity
            );
            Err(ValidationError::Inappropriate {
                field: field_name.to_string(),
            })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::mode::DetectionMode;
    use crate::dictionary::{BannedTerm, Category, DictionaryStore, Severity, WordDictionary};
    use std::sync::Arc;

    fn engine() -> DetectionEngine {
        let dictionary = WordDictionary::new(vec![BannedTerm::new(
            "시발",
            Category::General,
            Severity::High,
        )]);
        DetectionEngine::new(Arc::new(DictionaryStore::with_dictionary(dictionary)))
    }

    #[test]
    fn test_clean_field_passes() {
        let engine = engine();
        assert!(validate_field(&engine, "nickname", Some("착한사람"), DetectionOptions::default()).is_ok());
        assert!(validate_field(&engine, "nickname", None, DetectionOptions::default()).is_ok());
    }

    #[test]
    fn test_message_names_field_only() {
        let engine = engine();
        let err = validate_field(&engine, "nickname", Some("시 발"), DetectionOptions::default())
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("nickname"));
        assert!(!message.contains("시발"));
        assert!(matches!(err, ValidationError::Inappropriate { .. }));
    }

    #[test]
    fn test_detection_error_propagates() {
        let engine = engine().with_max_input_length(2);
        let options = DetectionOptions::new()
            .with_mode(DetectionMode::Strict)
            .with_threshold(1);
        let err = validate_field(&engine, "title", Some("가나다라"), options).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Detection(DetectionError::InputTooLong { length: 4, max: 2 })
        ));
    }
}
