//! 체언: 명사, 수사, 외래어
//!
//! 조사 선택에 필요한 것은 "읽는 형태"의 마지막 음절뿐이므로,
//! 체언은 화면에 보일 글자와 읽는 형태를 따로 가집니다.

use std::borrow::Cow;
use std::fmt;

use crate::core::jamo::is_hangul;
use crate::core::unicode::get_final;
use crate::error::{GrammarError, Result};
use crate::morphology::number::NumberReader;

/// 받침처럼 읽히는 로마자 자음 (Python -> 파이썬)
const CLOSED_LATIN_CONSONANTS: &str = "bcdfgjklmnpqrtx";

/// 체언 종류 (조사 선택 규칙 표의 키)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubstantiveKind {
    Noun,
    NumberWord,
    Loanword,
}

/// 체언 공통 동작
pub trait Substantive: fmt::Debug {
    /// 조사 선택 규칙 표의 키
    fn kind(&self) -> SubstantiveKind;

    /// 화면에 보일 글자
    fn text(&self) -> Cow<'_, str>;

    /// 읽는 형태 (숫자는 주어진 변환기로 읽음)
    fn read_with(&self, numbers: &NumberReader) -> String;

    /// 기본 한자어 수사로 읽은 형태
    fn read(&self) -> String {
        self.read_with(NumberReader::sino_korean())
    }
}

/// 마지막 글자에 받침이 있는지 확인
///
/// 한글이면 종성 유무, 로마자면 받침처럼 읽히는 자음인지로 판단합니다.
/// 그 밖의 글자는 모음으로 끝나는 것으로 봅니다.
pub fn has_final_consonant(text: &str) -> bool {
    match text.chars().last() {
        Some(c) if is_hangul(c) => matches!(get_final(c), Ok(Some(_))),
        Some(c) if c.is_ascii_alphabetic() => {
            CLOSED_LATIN_CONSONANTS.contains(c.to_ascii_lowercase())
        }
        _ => false,
    }
}

/// 명사
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Noun {
    text: String,
}

impl Noun {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Substantive for Noun {
    fn kind(&self) -> SubstantiveKind {
        SubstantiveKind::Noun
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    /// 글자 속 숫자 덩어리를 수사로 바꿔 읽음 ("64렙" -> "육십사렙")
    fn read_with(&self, numbers: &NumberReader) -> String {
        let mut spoken = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();
        while let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
            spoken.push_str(&rest[..start]);
            let run = &rest[start..];
            let end = run
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(run.len());
            let digits = &run[..end];
            match numbers.read_digits(digits) {
                Some(reading) => spoken.push_str(&reading),
                // 단위 낱말로 부를 수 없을 만큼 긴 숫자는 그대로
                None => spoken.push_str(digits),
            }
            rest = &run[end..];
        }
        spoken.push_str(rest);
        spoken
    }
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// 수사 (정수 하나)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberWord {
    number: i64,
}

impl NumberWord {
    pub fn new(number: i64) -> Self {
        Self { number }
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    /// 묶음별 읽기
    pub fn read_phases(&self, numbers: &NumberReader) -> Vec<String> {
        numbers.read_phases(self.number)
    }
}

impl Substantive for NumberWord {
    fn kind(&self) -> SubstantiveKind {
        SubstantiveKind::NumberWord
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Owned(self.number.to_string())
    }

    fn read_with(&self, numbers: &NumberReader) -> String {
        numbers.read(self.number)
    }
}

impl fmt::Display for NumberWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// 외래어를 한글로 옮겨 적는 외부 전사기
pub trait Transliterator {
    /// `text`를 `lang` 언어 규칙으로 전사 (실패 시 None)
    fn transliterate(&self, text: &str, lang: &str) -> Option<String>;
}

impl<F> Transliterator for F
where
    F: Fn(&str, &str) -> Option<String>,
{
    fn transliterate(&self, text: &str, lang: &str) -> Option<String> {
        self(text, lang)
    }
}

/// 외래어: 원문을 보여주고 한글 전사로 읽음
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Loanword {
    text: String,
    lang: String,
    reading: String,
}

impl Loanword {
    /// 전사기로 읽는 형태를 미리 구해 둠
    pub fn new(
        text: impl Into<String>,
        lang: impl Into<String>,
        transliterator: &dyn Transliterator,
    ) -> Result<Self> {
        let text = text.into();
        let lang = lang.into();
        let reading = transliterator
            .transliterate(&text, &lang)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| GrammarError::Transliteration(format!("{} ({})", text, lang)))?;
        Ok(Self {
            text,
            lang,
            reading,
        })
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }
}

impl Substantive for Loanword {
    fn kind(&self) -> SubstantiveKind {
        SubstantiveKind::Loanword
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn read_with(&self, _numbers: &NumberReader) -> String {
        self.reading.clone()
    }
}

impl fmt::Display for Loanword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn italian(text: &str, _lang: &str) -> Option<String> {
        match text {
            "italia" | "Italia" => Some("이탈리아".to_string()),
            "gloria" => Some("글로리아".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_has_final_consonant() {
        assert!(has_final_consonant("받침"));
        assert!(!has_final_consonant("나비"));
        assert!(has_final_consonant("Python"));
        assert!(has_final_consonant("JOB"));
        assert!(!has_final_consonant("Java"));
        assert!(!has_final_consonant("2"));
        assert!(!has_final_consonant(""));
    }

    #[test]
    fn test_noun_read() {
        assert_eq!(Noun::new("주인공").read(), "주인공");
        assert_eq!(Noun::new("컴퓨터").read(), "컴퓨터");
    }

    #[test]
    fn test_noun_read_with_number() {
        assert_eq!(Noun::new("레벨 4").read(), "레벨 사");
        assert_eq!(Noun::new("레벨 50").read(), "레벨 오십");
        assert_eq!(Noun::new("64렙").read(), "육십사렙");
        assert_eq!(Noun::new("1층과 2층").read(), "일층과 이층");
        assert_eq!(Noun::new("007").read(), "칠");
    }

    #[test]
    fn test_noun_read_long_number() {
        // u64보다 긴 숫자도 해 단위까지 읽음
        let spoken = Noun::new("123456789012345678903").read();
        assert!(spoken.starts_with("해이천삼백사십오경"));
        assert!(spoken.ends_with("팔천구백삼"));
        assert!(has_final_consonant(&spoken));
    }

    #[test]
    fn test_noun_read_overlong_number() {
        let digits = "123456789012345678901234567890";
        assert_eq!(Noun::new(digits).read(), digits);
    }

    #[test]
    fn test_number_word() {
        let word = NumberWord::new(32);
        assert_eq!(word.read(), "삼십이");
        assert_eq!(word.text(), "32");
        assert_eq!(word.to_string(), "32");
        assert_eq!(
            NumberWord::new(-8).read_phases(NumberReader::sino_korean()),
            ["마이너스", "팔"]
        );
    }

    #[test]
    fn test_loanword() {
        let word = Loanword::new("italia", "ita", &italian).unwrap();
        assert_eq!(word.read(), "이탈리아");
        assert_eq!(word.text(), "italia");
        assert_eq!(word.lang(), "ita");
        assert_eq!(word.kind(), SubstantiveKind::Loanword);
    }

    #[test]
    fn test_loanword_without_transcription() {
        let result = Loanword::new("štěstí", "ces", &italian);
        assert!(matches!(result, Err(GrammarError::Transliteration(_))));
    }
}
