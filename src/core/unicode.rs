//! 유니코드 한글 조합/분해 유틸리티

use crate::core::jamo::{
    final_index, initial_index, is_final, is_hangul, is_initial, is_vowel, vowel_index, FINALS,
    INITIALS, VOWELS,
};
use crate::error::{GrammarError, Result};

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

fn not_hangul(c: char) -> GrammarError {
    GrammarError::CodecPrecondition(format!("완성형 한글이 아닙니다: {:?}", c))
}

/// 완성형 한글을 (초성, 중성, 종성) 자모로 분해
///
/// ```
/// use hangeul::core::unicode::split_char;
/// assert_eq!(split_char('한').unwrap(), ('ㅎ', 'ㅏ', Some('ㄴ')));
/// assert_eq!(split_char('가').unwrap(), ('ㄱ', 'ㅏ', None));
/// ```
pub fn split_char(c: char) -> Result<(char, char, Option<char>)> {
    let (cho, jung, jong) = decompose_syllable(c).ok_or_else(|| not_hangul(c))?;
    Ok((
        INITIALS[cho as usize],
        VOWELS[jung as usize],
        FINALS[jong as usize],
    ))
}

/// (초성, 중성, 종성) 자모로 완성형 한글 조합
///
/// 초성이나 중성 중 하나가 없으면 나머지 하나를 그대로 반환합니다.
pub fn join_char(initial: Option<char>, vowel: Option<char>, final_jamo: Option<char>) -> Result<char> {
    let (initial, vowel) = match (initial, vowel) {
        (Some(i), Some(v)) => (i, v),
        (Some(only), None) | (None, Some(only)) => return Ok(only),
        (None, None) => {
            return Err(GrammarError::CodecPrecondition(
                "초성과 중성이 모두 없습니다".into(),
            ))
        }
    };
    let cho = initial_index(initial).ok_or_else(|| {
        GrammarError::CodecPrecondition(format!("초성이 아닙니다: {:?}", initial))
    })?;
    let jung = vowel_index(vowel).ok_or_else(|| {
        GrammarError::CodecPrecondition(format!("중성이 아닙니다: {:?}", vowel))
    })?;
    let jong = final_index(final_jamo).ok_or_else(|| {
        GrammarError::CodecPrecondition(format!("종성이 아닙니다: {:?}", final_jamo))
    })?;
    compose_syllable(cho, jung, jong).ok_or_else(|| {
        GrammarError::CodecPrecondition(format!("조합할 수 없습니다: {}{}", initial, vowel))
    })
}

/// 초성 추출 (초성 자모가 주어지면 그대로 반환)
pub fn get_initial(c: char) -> Result<char> {
    if is_initial(c) {
        return Ok(c);
    }
    split_char(c).map(|(initial, _, _)| initial)
}

/// 중성 추출 (모음 자모가 주어지면 그대로 반환)
pub fn get_vowel(c: char) -> Result<char> {
    if is_vowel(c) {
        return Ok(c);
    }
    split_char(c).map(|(_, vowel, _)| vowel)
}

/// 종성 추출
///
/// 종성 자모는 그대로, 모음 자모는 받침 없음으로 취급합니다.
pub fn get_final(c: char) -> Result<Option<char>> {
    if is_final(c) {
        return Ok(Some(c));
    }
    if is_vowel(c) {
        return Ok(None);
    }
    split_char(c).map(|(_, _, final_jamo)| final_jamo)
}

/// 두 중성을 복합 모음으로 조합 (ㅗ + ㅏ = ㅘ)
pub fn combine_vowels(first: char, second: char) -> Option<char> {
    // 중성 인덱스 기준 복합 모음 조합 표
    let combined = match (vowel_index(first)?, vowel_index(second)?) {
        (8, 0) => 9,   // ㅗ + ㅏ = ㅘ
        (8, 1) => 10,  // ㅗ + ㅐ = ㅙ
        (8, 20) => 11, // ㅗ + ㅣ = ㅚ
        (13, 4) => 14, // ㅜ + ㅓ = ㅝ
        (13, 5) => 15, // ㅜ + ㅔ = ㅞ
        (13, 20) => 16, // ㅜ + ㅣ = ㅟ
        (18, 20) => 19, // ㅡ + ㅣ = ㅢ
        _ => return None,
    };
    Some(VOWELS[combined])
}
