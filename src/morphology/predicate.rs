//! 용언 (동사, 형용사) 활용
//!
//! 어간 끝 음절과 어미 첫 자모를 보고 음절을 합칩니다.
//! - `ㅂ`: 받침 없음/ㄹ 받침이면 받침으로 (갑니다, 만듭니다), 그 밖에는 "습" (먹습니다)
//! - `ㄴ`: 받침 없음/ㄹ 받침이면 받침으로 (간다, 만든다), 그 밖에는 "는" (먹는다)
//! - `ㅆ`: 받침이 없으면 모음을 줄여 받침으로 (갔다, 봤다, 했다), 있으면 "았"/"었"

use std::fmt;

use crate::core::jamo::{is_hangul, RIEUL};
use crate::core::unicode::{combine_vowels, get_vowel, join_char, split_char};
use crate::error::{GrammarError, Result};

/// 양성 모음 (았/아 계열을 고름)
const BRIGHT_VOWELS: [char; 4] = ['ㅏ', 'ㅗ', 'ㅑ', 'ㅛ'];

/// 용언 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateKind {
    Verb,
    Adjective,
}

/// 용언 기본형 ("먹다", "예쁘다")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Predicate {
    kind: PredicateKind,
    origin: String,
}

impl Predicate {
    /// 기본형으로 용언 생성 ("다"로 끝나고 어간이 있어야 함)
    pub fn new(kind: PredicateKind, origin: impl Into<String>) -> Result<Self> {
        let origin = origin.into();
        match origin.strip_suffix('다') {
            Some(stem) if !stem.is_empty() => Ok(Self { kind, origin }),
            _ => Err(GrammarError::NotDictionaryForm(origin)),
        }
    }

    pub fn verb(origin: impl Into<String>) -> Result<Self> {
        Self::new(PredicateKind::Verb, origin)
    }

    pub fn adjective(origin: impl Into<String>) -> Result<Self> {
        Self::new(PredicateKind::Adjective, origin)
    }

    pub fn kind(&self) -> PredicateKind {
        self.kind
    }

    /// 기본형
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// 어간 (기본형에서 "다"를 뺀 부분)
    pub fn stem(&self) -> &str {
        &self.origin[..self.origin.len() - '다'.len_utf8()]
    }

    /// 어미를 붙여 활용
    ///
    /// ```
    /// use hangeul::Predicate;
    ///
    /// let verb = Predicate::verb("먹다").unwrap();
    /// assert_eq!(verb.conjugate("ㅂ니다").unwrap(), "먹습니다");
    /// assert_eq!(verb.conjugate("고").unwrap(), "먹고");
    /// ```
    pub fn conjugate(&self, ending: &str) -> Result<String> {
        let stem = self.stem();
        let mut rest = ending.chars();
        let lead = match rest.next() {
            Some(c @ ('ㅂ' | 'ㄴ' | 'ㅆ')) => c,
            _ => return Ok(format!("{}{}", stem, ending)),
        };

        let last = stem.chars().last().unwrap_or_default();
        let head = &stem[..stem.len() - last.len_utf8()];
        let (initial, vowel, final_jamo) = split_char(last)?;

        let glued = match (lead, final_jamo) {
            // ㄹ 받침은 떨어지고 어미 자음이 받침 자리에 들어감
            ('ㅂ' | 'ㄴ', None) | ('ㅂ' | 'ㄴ', Some(RIEUL)) => {
                join_char(Some(initial), Some(vowel), Some(lead))?.to_string()
            }
            ('ㅂ', Some(_)) => format!("{}습", last),
            ('ㄴ', Some(_)) => format!("{}는", last),
            (_, Some(_)) => {
                let past = if BRIGHT_VOWELS.contains(&vowel) { "았" } else { "었" };
                format!("{}{}", last, past)
            }
            (_, None) => {
                let contracted = contract_vowel(head, initial, vowel);
                match contracted {
                    Some(v) => join_char(Some(initial), Some(v), Some(lead))?.to_string(),
                    None => format!("{}었", last),
                }
            }
        };
        Ok(format!("{}{}{}", head, glued, rest.as_str()))
    }
}

/// 받침 없는 어간 끝 모음에 "아/어"가 줄어든 모음
fn contract_vowel(head: &str, initial: char, vowel: char) -> Option<char> {
    if initial == 'ㅎ' && vowel == 'ㅏ' {
        return Some('ㅐ');
    }
    match vowel {
        'ㅏ' | 'ㅐ' | 'ㅓ' | 'ㅔ' | 'ㅕ' | 'ㅒ' | 'ㅖ' | 'ㅘ' | 'ㅙ' | 'ㅝ' => Some(vowel),
        'ㅗ' => combine_vowels('ㅗ', 'ㅏ'),
        'ㅜ' => combine_vowels('ㅜ', 'ㅓ'),
        'ㅚ' => combine_vowels('ㅗ', 'ㅐ'),
        'ㅣ' => Some('ㅕ'),
        // 으 탈락: 앞 음절이 양성이면 ㅏ (아프다 -> 아팠다)
        'ㅡ' => {
            let bright = head
                .chars()
                .last()
                .filter(|c| is_hangul(*c))
                .and_then(|c| get_vowel(c).ok())
                .is_some_and(|v| BRIGHT_VOWELS.contains(&v));
            Some(if bright { 'ㅏ' } else { 'ㅓ' })
        }
        _ => None,
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conjugate(origin: &str, ending: &str) -> String {
        Predicate::verb(origin).unwrap().conjugate(ending).unwrap()
    }

    #[test]
    fn test_new() {
        let verb = Predicate::verb("먹다").unwrap();
        assert_eq!(verb.stem(), "먹");
        assert_eq!(verb.origin(), "먹다");
        assert_eq!(verb.kind(), PredicateKind::Verb);
        assert_eq!(verb.to_string(), "먹다");

        assert!(matches!(Predicate::verb("다"), Err(GrammarError::NotDictionaryForm(_))));
        assert!(Predicate::adjective("예쁜").is_err());
        assert!(Predicate::adjective("").is_err());
    }

    #[test]
    fn test_formal_ending() {
        assert_eq!(conjugate("가다", "ㅂ니다"), "갑니다");
        assert_eq!(conjugate("먹다", "ㅂ니다"), "먹습니다");
        assert_eq!(conjugate("만들다", "ㅂ니다"), "만듭니다");
        assert_eq!(conjugate("공부하다", "ㅂ니까"), "공부합니까");
    }

    #[test]
    fn test_plain_ending() {
        assert_eq!(conjugate("가다", "ㄴ다"), "간다");
        assert_eq!(conjugate("먹다", "ㄴ다"), "먹는다");
        assert_eq!(conjugate("만들다", "ㄴ다"), "만든다");
    }

    #[test]
    fn test_past_contraction() {
        assert_eq!(conjugate("가다", "ㅆ다"), "갔다");
        assert_eq!(conjugate("서다", "ㅆ다"), "섰다");
        assert_eq!(conjugate("보다", "ㅆ다"), "봤다");
        assert_eq!(conjugate("주다", "ㅆ다"), "줬다");
        assert_eq!(conjugate("마시다", "ㅆ다"), "마셨다");
        assert_eq!(conjugate("쓰다", "ㅆ다"), "썼다");
        assert_eq!(conjugate("되다", "ㅆ다"), "됐다");
        assert_eq!(conjugate("하다", "ㅆ다"), "했다");
        assert_eq!(conjugate("보내다", "ㅆ다"), "보냈다");
        assert_eq!(conjugate("아프다", "ㅆ다"), "아팠다");
        assert_eq!(conjugate("기쁘다", "ㅆ다"), "기뻤다");
        assert_eq!(conjugate("쉬다", "ㅆ다"), "쉬었다");
    }

    #[test]
    fn test_past_after_final() {
        assert_eq!(conjugate("잡다", "ㅆ다"), "잡았다");
        assert_eq!(conjugate("먹다", "ㅆ다"), "먹었다");
        assert_eq!(conjugate("좋다", "ㅆ습니다"), "좋았습니다");
    }

    #[test]
    fn test_other_endings() {
        assert_eq!(conjugate("먹다", "고"), "먹고");
        assert_eq!(conjugate("가다", ""), "가");
    }

    #[test]
    fn test_non_hangul_stem() {
        let verb = Predicate::verb("OK다").unwrap();
        assert!(matches!(verb.conjugate("ㅂ니다"), Err(GrammarError::CodecPrecondition(_))));
        assert_eq!(verb.conjugate("고").unwrap(), "OK고");
    }
}
