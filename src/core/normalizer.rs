//! 검사용 텍스트 정규화
//!
//! 모든 함수는 상태가 없는 순수 함수라 여러 스레드에서 잠금 없이 호출할 수 있습니다.

use super::unicode::{is_hangul, is_korean_jamo, leading_consonant};

/// 정규화 후 남기는 문자인지 확인
/// 완성형 한글, 호환용 자모, ASCII 영문자, 숫자만 허용
fn is_retained(ch: char) -> bool {
    is_hangul(ch) || ch.is_ascii_alphanumeric()
}

/// 소문자로 바꾼 뒤 한글/영문/숫자 외의 문자를 모두 제거
///
/// 공백, 문장부호, 기호, 이모지는 전부 사라집니다.
///
/// ```
/// use koguard::core::normalizer::normalize;
/// assert_eq!(normalize("시 발!"), "시발");
/// assert_eq!(normalize("F.u_C k"), "fuck");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|&ch| is_retained(ch))
        .collect()
}

/// 초성 추출
///
/// - 완성형 음절: 초성 자모로 치환
/// - 낱자모: 그대로 유지
/// - 그 외 문자: 버림
pub fn extract_chosung(text: &str) -> String {
    text.chars()
        .filter_map(|ch| {
            if is_korean_jamo(ch) {
                Some(ch)
            } else {
                leading_consonant(ch)
            }
        })
        .collect()
}

/// 한글(완성형 + 낱자모)만 남김
pub fn extract_korean_only(text: &str) -> String {
    text.chars().filter(|&ch| is_hangul(ch)).collect()
}
