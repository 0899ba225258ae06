//! 조사 서식을 지원하는 템플릿
//!
//! `{0:을}`처럼 서식 지정자 자리에 조사를 적으면 인자에 맞는 형태로 붙입니다.
//! 글자 인자는 명사로, 정수 인자는 수사로 감싸서 서식을 적용합니다.

use std::collections::HashMap;
use std::fmt;

use crate::error::{GrammarError, Result};
use crate::morphology::format_spec::FormatSpec;
use crate::morphology::grammar::{Formattable, Grammar};
use crate::morphology::predicate::Predicate;
use crate::morphology::substantive::{Loanword, Noun, NumberWord};

/// 템플릿 인자
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 명사로 서식 적용
    Text(String),
    /// 수사로 서식 적용
    Int(i64),
    Float(f64),
    Bool(bool),
    Loanword(Loanword),
    Predicate(Predicate),
}

impl Value {
    /// 서식 지정자를 적용한 글자
    pub fn format(&self, grammar: &Grammar, spec: &str) -> Result<String> {
        match self {
            Value::Text(text) => Noun::new(text.as_str()).format(grammar, spec),
            Value::Int(number) => NumberWord::new(*number).format(grammar, spec),
            Value::Float(number) => FormatSpec::parse(spec)?.apply_float(*number),
            Value::Bool(flag) => FormatSpec::parse(spec)?.apply_str(&flag.to_string()),
            Value::Loanword(word) => word.format(grammar, spec),
            Value::Predicate(predicate) => predicate.format(grammar, spec),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Int(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Int(number.into())
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Value::Int(number.into())
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Float(number)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<Loanword> for Value {
    fn from(word: Loanword) -> Self {
        Value::Loanword(word)
    }
}

impl From<Predicate> for Value {
    fn from(predicate: Predicate) -> Self {
        Value::Predicate(predicate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldKey {
    Index(usize),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Text(String),
    Field { key: FieldKey, spec: String },
}

/// 미리 해석해 둔 템플릿
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    pieces: Vec<Piece>,
}

fn malformed(source: &str, reason: &str) -> GrammarError {
    GrammarError::MalformedTemplate(format!("{} ({})", source, reason))
}

impl Template {
    /// 템플릿 해석
    ///
    /// `{}`는 차례대로 번호가 매겨지며 `{0}` 같은 직접 번호와 섞어 쓸 수 없습니다.
    pub fn new(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let mut pieces = Vec::new();
        let mut text = String::new();
        let mut chars = source.chars().peekable();
        let mut next_index = 0;
        let (mut automatic, mut manual) = (false, false);

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    text.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    text.push('}');
                }
                '}' => return Err(malformed(&source, "짝이 없는 '}'")),
                '{' => {
                    let mut field = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') => return Err(malformed(&source, "필드 안의 '{'")),
                            Some(c) => field.push(c),
                            None => return Err(malformed(&source, "닫히지 않은 필드")),
                        }
                    }
                    let (name, spec) = field.split_once(':').unwrap_or((field.as_str(), ""));
                    let key = if name.is_empty() {
                        automatic = true;
                        next_index += 1;
                        FieldKey::Index(next_index - 1)
                    } else if let Ok(index) = name.parse::<usize>() {
                        manual = true;
                        FieldKey::Index(index)
                    } else {
                        FieldKey::Name(name.to_string())
                    };
                    if automatic && manual {
                        return Err(malformed(&source, "자동 번호와 직접 번호를 섞을 수 없음"));
                    }
                    if !text.is_empty() {
                        pieces.push(Piece::Text(std::mem::take(&mut text)));
                    }
                    pieces.push(Piece::Field {
                        key,
                        spec: spec.to_string(),
                    });
                }
                c => text.push(c),
            }
        }
        if !text.is_empty() {
            pieces.push(Piece::Text(text));
        }
        Ok(Self { source, pieces })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// 인자를 채워 넣음
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use hangeul::{Template, Value};
    ///
    /// let template = Template::new("{0:을} 좋아합니다.").unwrap();
    /// let text = template
    ///     .format(hangeul::korean().grammar(), &[Value::from("향수")], &HashMap::new())
    ///     .unwrap();
    /// assert_eq!(text, "향수를 좋아합니다.");
    /// ```
    pub fn format(
        &self,
        grammar: &Grammar,
        args: &[Value],
        kwargs: &HashMap<String, Value>,
    ) -> Result<String> {
        let mut output = String::with_capacity(self.source.len());
        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => output.push_str(text),
                Piece::Field { key, spec } => {
                    let value = match key {
                        FieldKey::Index(index) => args.get(*index),
                        FieldKey::Name(name) => kwargs.get(name),
                    }
                    .ok_or_else(|| {
                        GrammarError::MissingArgument(match key {
                            FieldKey::Index(index) => index.to_string(),
                            FieldKey::Name(name) => name.clone(),
                        })
                    })?;
                    output.push_str(&value.format(grammar, spec)?);
                }
            }
        }
        Ok(output)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
