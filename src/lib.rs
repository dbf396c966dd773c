//! 한글 인식 금칙어 검출 엔진
//!
//! 사용자 입력(닉네임, 제목, 채팅 등)에 금칙어가 포함되어 있는지 판정합니다.
//!
//! ```
//! use std::sync::Arc;
//! use koguard::{BannedTerm, Category, DetectionEngine, DetectionOptions, DictionaryStore, Severity};
//!
//! let store = Arc::new(DictionaryStore::new());
//! store.refresh(vec![BannedTerm::new("시발", Category::General, Severity::High)]);
//!
//! let engine = DetectionEngine::new(store);
//! let result = engine.detect_text("이 시발놈아", DetectionOptions::default()).unwrap();
//! assert_eq!(result.detected_word(), Some("시발"));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod detection;
pub mod dictionary;

pub use detection::{
    validate_field, DetectionEngine, DetectionError, DetectionMode, DetectionOptions,
    DetectionRequest, DetectionResult, MatchType, ValidationError,
};
pub use dictionary::{BannedTerm, Category, DictionaryError, DictionaryStore, Severity, WordDictionary};
