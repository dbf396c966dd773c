//! 유니코드 한글 범위 판별 및 초성 분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 호환용 자모 시작 (ㄱ)
const JAMO_FIRST: u32 = 0x3131;
/// 호환용 자모 끝 (ㅣ)
const JAMO_LAST: u32 = 0x3163;
/// 호환용 자음 끝 (ㅎ)
const CHOSUNG_LAST: u32 = 0x314E;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성 인덱스 순서의 호환용 자모
/// ㄱㄲㄴㄷㄸㄹㅁㅂㅃㅅㅆㅇㅈㅉㅊㅋㅌㅍㅎ
const CHOSEONG_JAMO: [char; CHOSEONG_COUNT as usize] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_korean_syllable(ch: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(ch as u32))
}

/// 호환용 자모(ㄱ-ㅣ, 자음과 모음 모두)인지 확인
pub fn is_korean_jamo(ch: char) -> bool {
    (JAMO_FIRST..=JAMO_LAST).contains(&(ch as u32))
}

/// 호환용 자음(ㄱ-ㅎ)인지 확인
pub fn is_korean_chosung(ch: char) -> bool {
    (JAMO_FIRST..=CHOSUNG_LAST).contains(&(ch as u32))
}

/// 완성형 음절 또는 낱자모인지 확인
pub fn is_hangul(ch: char) -> bool {
    is_korean_syllable(ch) || is_korean_jamo(ch)
}

/// 완성형 한글의 초성 인덱스 (0~18)
///
/// 완성형이 아니면 None
pub fn choseong_index(ch: char) -> Option<u32> {
    if !is_korean_syllable(ch) {
        return None;
    }
    Some((ch as u32 - HANGUL_SYLLABLE_BASE) / (JUNGSEONG_COUNT * JONGSEONG_COUNT))
}

/// 초성 인덱스에 해당하는 호환용 자모 문자
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 완성형 한글의 초성을 호환용 자모로 반환
pub fn leading_consonant(ch: char) -> Option<char> {
    choseong_index(ch).and_then(choseong_to_jamo_char)
}
