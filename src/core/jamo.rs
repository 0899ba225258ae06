//! 호환용 자모 표와 분류
//!
//! 표의 순서는 유니코드 완성형 음절의 조합 순서와 같습니다.
//! 인덱스는 프로세스 수명 동안 바뀌지 않는 상수입니다.

/// 중성 (21개): ㅏ(0) ~ ㅣ(20)
pub const VOWELS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 호환용 자음 전체 (U+3131 ~ U+314E)
pub const CONSONANTS: [char; 30] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅃ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 초성 (19개): ㄱ(0) ~ ㅎ(18)
pub const INITIALS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// 종성 (28개, 0 = 종성 없음)
pub const FINALS: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// 리을
pub const RIEUL: char = 'ㄹ';

/// 완성형 한글 음절인지 확인 (가 ~ 힣)
pub fn is_hangul(c: char) -> bool {
    ('가'..='힣').contains(&c)
}

/// 호환용 모음 자모인지 확인
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// 호환용 자음 자모인지 확인
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c)
}

/// 초성으로 쓸 수 있는 자음인지 확인
pub fn is_initial(c: char) -> bool {
    INITIALS.contains(&c)
}

/// 종성으로 쓸 수 있는 자음인지 확인
pub fn is_final(c: char) -> bool {
    FINALS.contains(&Some(c))
}

pub(crate) fn vowel_index(c: char) -> Option<u32> {
    VOWELS.iter().position(|&v| v == c).map(|i| i as u32)
}

pub(crate) fn initial_index(c: char) -> Option<u32> {
    INITIALS.iter().position(|&v| v == c).map(|i| i as u32)
}

pub(crate) fn final_index(c: Option<char>) -> Option<u32> {
    FINALS.iter().position(|&v| v == c).map(|i| i as u32)
}

/// 앞 음절의 받침에 따른 음운 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinalClass {
    /// 받침 없음 (모음으로 끝남)
    NoFinal,
    /// ㄹ 받침
    Rieul,
    /// ㄹ 이외의 받침
    OtherFinal,
}

/// 종성으로 음운 환경 분류
pub fn classify(final_jamo: Option<char>) -> FinalClass {
    match final_jamo {
        None => FinalClass::NoFinal,
        Some(RIEUL) => FinalClass::Rieul,
        Some(_) => FinalClass::OtherFinal,
    }
}
