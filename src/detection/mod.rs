//! 금칙어 검출 모듈

mod engine;
mod mode;
mod result;
pub mod validator;

pub use engine::{DetectionEngine, DetectionError, DetectionRequest, DEFAULT_MAX_INPUT_LENGTH};
pub use mode::{DetectionMode, DetectionOptions};
pub use result::{DetectedTerm, DetectionResult, MatchType};
pub use validator::{validate_field, ValidationError};
