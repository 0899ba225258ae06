//! 조사 교정: "사과은(는)" -> "사과는"
//!
//! 작성자가 모호하게 적은 조사 표기("을(를)", "(으)로")를 찾아
//! 바로 앞 글자에 맞는 형태로 바꿉니다.

use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;

use crate::error::{GrammarError, Result};
use crate::morphology::grammar::Grammar;
use crate::morphology::inflection::attach_form;
use crate::morphology::particle::{Particle, ParticleRegistry};
use crate::morphology::substantive::Noun;

/// 앞 글자를 찾을 때 건너뛰는 닫는 따옴표/괄호
const CLOSING_MARKS: &[char] = &[
    '"', '\'', '\u{201D}', '\u{2019}', ')', ']', '}', '>', '\u{300D}', '\u{300F}', '\u{3009}',
    '\u{300B}', '\u{FF09}', '\u{00BB}',
];

/// 교정 단위
#[derive(Debug, Clone)]
pub enum Token<'a> {
    /// 그대로 둘 글자
    Literal(&'a str),
    /// 모호한 조사 표기와 그 조사
    Particle {
        naive: &'a str,
        particle: Arc<Particle>,
    },
}

/// 조사는 같은 객체인지로 비교
impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Token::Literal(a), Token::Literal(b)) => a == b,
            (Token::Particle { particle: a, .. }, Token::Particle { particle: b, .. }) => {
                Arc::ptr_eq(a, b)
            }
            _ => false,
        }
    }
}

/// 모호한 조사 표기 검색기
#[derive(Debug, Clone)]
pub struct Proofreader {
    /// 등록부가 비어 있으면 None
    pattern: Option<Regex>,
    spellings: HashMap<String, Arc<Particle>>,
}

impl Proofreader {
    /// 등록된 모든 조사의 모호한 표기로 검색 패턴 생성
    pub fn new(registry: &ParticleRegistry) -> Result<Self> {
        let mut spellings: HashMap<String, Arc<Particle>> = HashMap::new();
        for particle in registry.particles() {
            for naive in particle.naive() {
                // 표기가 겹치면 먼저 등록된 조사
                spellings
                    .entry(naive)
                    .or_insert_with(|| Arc::clone(particle));
            }
        }

        let mut alternatives: Vec<&str> = spellings.keys().map(String::as_str).collect();
        alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let pattern = if alternatives.is_empty() {
            None
        } else {
            let source = alternatives
                .iter()
                .map(|s| regex::escape(s))
                .collect::<Vec<_>>()
                .join("|");
            let compiled = Regex::new(&source)
                .map_err(|e| GrammarError::InvalidConfiguration(format!("조사 검색 패턴: {}", e)))?;
            Some(compiled)
        };

        log::debug!("교정기 생성: 모호한 조사 표기 {}개", spellings.len());
        Ok(Self { pattern, spellings })
    }

    /// 글자와 모호한 조사 표기로 나눔
    ///
    /// ```
    /// use hangeul::l10n::Token;
    ///
    /// let tokens = hangeul::korean().proofreader().tokenize("말을(를)(를)");
    /// assert_eq!(tokens.len(), 3);
    /// assert_eq!(tokens[0], Token::Literal("말"));
    /// assert_eq!(tokens[2], Token::Literal("(를)"));
    /// ```
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut last = 0;
        if let Some(pattern) = &self.pattern {
            for found in pattern.find_iter(text) {
                if found.start() > last {
                    tokens.push(Token::Literal(&text[last..found.start()]));
                }
                if let Some(particle) = self.spellings.get(found.as_str()) {
                    tokens.push(Token::Particle {
                        naive: found.as_str(),
                        particle: Arc::clone(particle),
                    });
                }
                last = found.end();
            }
        }
        if last < text.len() || tokens.is_empty() {
            tokens.push(Token::Literal(&text[last..]));
        }
        tokens
    }

    /// 모호한 조사 표기를 앞 글자에 맞는 형태로 교정
    ///
    /// 앞 글자로 고를 수 없으면 첫 번째 모호한 표기를 그대로 남깁니다.
    pub fn proofread(&self, grammar: &Grammar, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for token in self.tokenize(text) {
            match token {
                Token::Literal(literal) => output.push_str(literal),
                Token::Particle { naive, particle } => {
                    match preceding_char(&output)
                        .map(|c| grammar.inflect(&particle, &Noun::new(c.to_string())))
                    {
                        Some(Ok(form)) => output = attach_form(&output, &form, &particle),
                        _ => {
                            log::debug!("조사를 고를 수 없어 그대로 둠: {}", naive);
                            let fallback = particle.naive();
                            output.push_str(fallback.first().map_or(naive, String::as_str));
                        }
                    }
                }
            }
        }
        output
    }
}

/// 닫는 따옴표/괄호를 건너뛴 마지막 글자
fn preceding_char(output: &str) -> Option<char> {
    output.chars().rev().find(|c| !CLOSING_MARKS.contains(c))
}
