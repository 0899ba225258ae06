//! 조사 선택기: 조사 등록부, 수 읽기, 이형태 규칙 표를 한데 묶음
//!
//! 체언의 서식 지정자는 `:`로 나뉘며, 한글로 시작하는 조각이 조사 요청입니다.
//! - `"을"`: 조사만
//! - `"는:5"`, `",:을"`: 조사 + 일반 서식 (순서 무관)
//! - `">5"`: 일반 서식만

use std::sync::Arc;

use crate::config::KoreanConfig;
use crate::core::jamo::{is_consonant, is_hangul, is_vowel};
use crate::error::{GrammarError, Result};
use crate::morphology::format_spec::FormatSpec;
use crate::morphology::inflection::{attach_form, InflectionTable};
use crate::morphology::number::NumberReader;
use crate::morphology::particle::{Particle, ParticleRegistry};
use crate::morphology::predicate::Predicate;
use crate::morphology::substantive::{has_final_consonant, Loanword, Noun, NumberWord, Substantive};

/// 서식 지정자를 받아 글자로 바꿀 수 있는 형태소
pub trait Formattable {
    fn format(&self, grammar: &Grammar, spec: &str) -> Result<String>;
}

/// 조사 선택기
#[derive(Debug, Clone)]
pub struct Grammar {
    registry: ParticleRegistry,
    numbers: NumberReader,
    inflections: InflectionTable,
}

impl Grammar {
    /// 설정으로 생성 (검증 후 등록부와 수 읽기 준비)
    pub fn new(config: &KoreanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry: ParticleRegistry::from_config(config)?,
            numbers: NumberReader::new(&config.numerals)?,
            inflections: InflectionTable::standard(),
        })
    }

    /// 직접 만든 구성 요소로 생성
    pub fn from_parts(
        registry: ParticleRegistry,
        numbers: NumberReader,
        inflections: InflectionTable,
    ) -> Self {
        Self {
            registry,
            numbers,
            inflections,
        }
    }

    pub fn registry(&self) -> &ParticleRegistry {
        &self.registry
    }

    pub fn numbers(&self) -> &NumberReader {
        &self.numbers
    }

    pub fn inflections(&self) -> &InflectionTable {
        &self.inflections
    }

    /// 조사 찾기 (없으면 추측)
    pub fn particle(&self, key: &str) -> Result<Arc<Particle>> {
        self.registry.lookup(key)
    }

    /// 앞 체언에 맞는 조사 형태
    ///
    /// ```
    /// use hangeul::{Grammar, KoreanConfig, Noun};
    ///
    /// let grammar = Grammar::new(&KoreanConfig::default()).unwrap();
    /// let ro = grammar.particle("로").unwrap();
    /// assert_eq!(grammar.inflect(&ro, &Noun::new("파이썬")).unwrap(), "으로");
    /// assert_eq!(grammar.inflect(&ro, &Noun::new("마을")).unwrap(), "로");
    /// ```
    pub fn inflect(&self, particle: &Particle, substantive: &dyn Substantive) -> Result<String> {
        self.inflections.inflect(particle, substantive, &self.numbers)
    }

    /// 체언 글자에 고른 조사 형태를 이어 붙임
    pub fn merge(&self, substantive: &dyn Substantive, particle: &Particle) -> Result<String> {
        let form = self.inflect(particle, substantive)?;
        Ok(attach_form(&substantive.text(), &form, particle))
    }

    pub fn read_number(&self, number: i64) -> String {
        self.numbers.read(number)
    }

    pub fn read_phases(&self, number: i64) -> Vec<String> {
        self.numbers.read_phases(number)
    }

    /// 서식 지정자에서 요청한 조사를 붙임
    ///
    /// 모르는 조사는 글자 그대로 잇고, 한글로 읽히지 않는 체언은
    /// 로마자 받침 규칙으로 고릅니다.
    fn attach(&self, substantive: &dyn Substantive, shown: &str, key: &str) -> Result<String> {
        let particle = match self.particle(key) {
            Ok(particle) => particle,
            Err(GrammarError::ParticleNotFound(_)) => {
                log::debug!("등록되지 않은 조사, 그대로 붙임: {}", key);
                return Ok(format!("{}{}", shown, key));
            }
            Err(e) => return Err(e),
        };
        let form = match self.inflect(&particle, substantive) {
            Ok(form) => form,
            Err(GrammarError::CodecPrecondition(_)) => {
                let spoken = substantive.read_with(&self.numbers);
                if has_final_consonant(&spoken) {
                    particle.after_consonant().to_string()
                } else {
                    particle.after_vowel().to_string()
                }
            }
            Err(e) => return Err(e),
        };
        Ok(attach_form(shown, &form, &particle))
    }

    /// 글자로 보이는 체언 (명사, 외래어): 조사를 붙인 뒤 일반 서식 적용
    fn format_text(&self, substantive: &dyn Substantive, spec: &str) -> Result<String> {
        let (particle, generic) = split_spec(spec)?;
        let generic = FormatSpec::parse(generic)?;
        let text = substantive.text();
        let merged = match particle {
            Some(key) => self.attach(substantive, &text, key)?,
            None => text.into_owned(),
        };
        generic.apply_str(&merged)
    }
}

fn starts_with_hangul(segment: &str) -> bool {
    segment
        .chars()
        .next()
        .is_some_and(|c| is_hangul(c) || is_consonant(c) || is_vowel(c))
}

/// 서식 지정자를 (조사 요청, 일반 서식)으로 나눔
fn split_spec(spec: &str) -> Result<(Option<&str>, &str)> {
    let segments: Vec<&str> = spec.split(':').collect();
    let particles: Vec<usize> = segments
        .iter()
        .enumerate()
        .filter(|(_, s)| starts_with_hangul(s))
        .map(|(i, _)| i)
        .collect();
    match (segments.len(), particles.as_slice()) {
        (_, []) => Ok((None, spec)),
        (1, [_]) => Ok((Some(spec), "")),
        (2, [i]) => Ok((Some(segments[*i]), segments[1 - *i])),
        _ => Err(GrammarError::MalformedFormatSpec(spec.to_string())),
    }
}

impl Formattable for Noun {
    fn format(&self, grammar: &Grammar, spec: &str) -> Result<String> {
        grammar.format_text(self, spec)
    }
}

impl Formattable for Loanword {
    fn format(&self, grammar: &Grammar, spec: &str) -> Result<String> {
        grammar.format_text(self, spec)
    }
}

/// 수는 숫자로 서식을 적용한 뒤 조사를 붙임 (19,891,212를)
impl Formattable for NumberWord {
    fn format(&self, grammar: &Grammar, spec: &str) -> Result<String> {
        let (particle, generic) = split_spec(spec)?;
        let shown = FormatSpec::parse(generic)?.apply_int(self.number())?;
        match particle {
            Some(key) => grammar.attach(self, &shown, key),
            None => Ok(shown),
        }
    }
}

/// 용언의 서식 지정자는 어미 ("ㅂ니다", "ㅆ다")
impl Formattable for Predicate {
    fn format(&self, _grammar: &Grammar, spec: &str) -> Result<String> {
        if spec.is_empty() {
            return Ok(self.origin().to_string());
        }
        self.conjugate(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> Grammar {
        Grammar::new(&KoreanConfig::default()).unwrap()
    }

    #[test]
    fn test_merge() {
        let g = grammar();
        let ilang = g.particle("일랑").unwrap();
        assert_eq!(g.merge(&Noun::new("게임"), &ilang).unwrap(), "게임일랑");
        assert_eq!(g.merge(&Noun::new("서버"), &ilang).unwrap(), "서벌랑");
        let ga = g.particle("가").unwrap();
        assert_eq!(g.merge(&NumberWord::new(1), &ga).unwrap(), "1이");
        // 합칠 음절이 없으면 자모 없는 형태
        assert_eq!(g.merge(&NumberWord::new(4), &ilang).unwrap(), "4일랑");
    }

    #[test]
    fn test_format_jamo_particle() {
        let g = grammar();
        assert_eq!(Noun::new("서버").format(&g, "일랑").unwrap(), "서벌랑");
        assert_eq!(NumberWord::new(4).format(&g, "일랑").unwrap(), "4일랑");
        assert_eq!(NumberWord::new(1).format(&g, "일랑").unwrap(), "1일랑");
        assert_eq!(Noun::new("Java").format(&g, "일랑").unwrap(), "Java일랑");
    }

    #[test]
    fn test_split_spec() {
        assert_eq!(split_spec("").unwrap(), (None, ""));
        assert_eq!(split_spec("을").unwrap(), (Some("을"), ""));
        assert_eq!(split_spec("는:5").unwrap(), (Some("는"), "5"));
        assert_eq!(split_spec(",:을").unwrap(), (Some("을"), ","));
        assert_eq!(split_spec(">5").unwrap(), (None, ">5"));
        assert!(matches!(
            split_spec("을:를"),
            Err(GrammarError::MalformedFormatSpec(_))
        ));
        assert!(split_spec("을:5:5").is_err());
    }

    #[test]
    fn test_format_noun() {
        let g = grammar();
        assert_eq!(Noun::new("소년").format(&g, "는").unwrap(), "소년은");
        assert_eq!(Noun::new("한국어").format(&g, "을").unwrap(), "한국어를");
        assert_eq!(Noun::new("소년").format(&g, "는:5").unwrap(), "소년은  ");
        assert_eq!(Noun::new("한국어").format(&g, "을:>5").unwrap(), " 한국어를");
        assert_eq!(Noun::new("소년").format(&g, "").unwrap(), "소년");
    }

    #[test]
    fn test_format_guessed_and_unknown() {
        let g = grammar();
        assert_eq!(Noun::new("학생").format(&g, "로서").unwrap(), "학생으로서");
        assert_eq!(Noun::new("칼").format(&g, "로써").unwrap(), "칼로써");
        assert_eq!(Noun::new("녀석").format(&g, "랑은").unwrap(), "녀석이랑은");
        assert_eq!(Noun::new("소년").format(&g, "에게").unwrap(), "소년에게");
    }

    #[test]
    fn test_format_latin_noun() {
        let g = grammar();
        assert_eq!(Noun::new("Python").format(&g, "을").unwrap(), "Python을");
        assert_eq!(Noun::new("Java").format(&g, "을").unwrap(), "Java를");
    }

    #[test]
    fn test_format_number_word() {
        let g = grammar();
        assert_eq!(NumberWord::new(123).format(&g, "로").unwrap(), "123으로");
        assert_eq!(NumberWord::new(2).format(&g, "개").unwrap(), "2개");
        assert_eq!(
            NumberWord::new(19891212).format(&g, ",:을").unwrap(),
            "19,891,212를"
        );
        assert_eq!(NumberWord::new(4).format(&g, ".1f").unwrap(), "4.0");
        assert_eq!(NumberWord::new(4).format(&g, "4d").unwrap(), "   4");
    }

    #[test]
    fn test_format_predicate() {
        let g = grammar();
        let verb = Predicate::verb("먹다").unwrap();
        assert_eq!(verb.format(&g, "ㅂ니다").unwrap(), "먹습니다");
        assert_eq!(verb.format(&g, "").unwrap(), "먹다");
    }

    #[test]
    fn test_malformed_generic_spec() {
        let g = grammar();
        assert!(matches!(
            Noun::new("소년").format(&g, "을:,"),
            Err(GrammarError::MalformedFormatSpec(_))
        ));
    }
}
