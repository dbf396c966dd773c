//! 텍스트 정규화 라이브러리 (한글 범위 판별, 초성 추출, 편집 거리)

pub mod distance;
pub mod normalizer;
pub mod unicode;

pub use distance::levenshtein_distance;
pub use normalizer::{extract_chosung, extract_korean_only, normalize};
pub use unicode::{is_korean_chosung, is_korean_jamo, is_korean_syllable};
