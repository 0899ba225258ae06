//! 일반 서식 지정자 (폭, 정렬, 채움, 정밀도, 자릿수 구분)
//!
//! 형식: `[[fill]align][sign][#][0][width][,|_][.precision][type]`
//!
//! 조사 부분을 떼어 낸 나머지 서식 지정자를 해석합니다.
//! 폭은 유니코드 문자 수로 셉니다.

use crate::error::{GrammarError, Result};

/// 정렬
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `<`
    Left,
    /// `>`
    Right,
    /// `^`
    Center,
    /// `=`: 부호 뒤에 채움
    AfterSign,
}

/// 부호 표시
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// 음수만 표시
    #[default]
    Minus,
    /// 항상 표시
    Plus,
    /// 양수 앞에 공백
    Space,
}

/// 해석한 서식 지정자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    pub fill: char,
    pub align: Option<Align>,
    pub sign: Option<Sign>,
    pub alternate: bool,
    pub width: Option<usize>,
    pub grouping: Option<char>,
    pub precision: Option<usize>,
    pub kind: Option<char>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            sign: None,
            alternate: false,
            width: None,
            grouping: None,
            precision: None,
            kind: None,
        }
    }
}

fn align_of(c: char) -> Option<Align> {
    match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        '=' => Some(Align::AfterSign),
        _ => None,
    }
}

fn malformed(spec: &str) -> GrammarError {
    GrammarError::MalformedFormatSpec(spec.to_string())
}

/// 정수 자릿수에 구분자 넣기 ("19891212" -> "19,891,212")
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(digits.len() + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// 지수에 부호와 두 자리 이상을 붙임 ("1.5e3" -> "1.5e+03")
fn signed_exponent(text: &str, marker: char) -> String {
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    format!("{}{}{:+03}", mantissa, marker, exponent)
}

impl FormatSpec {
    /// 서식 지정자 해석
    pub fn parse(spec: &str) -> Result<Self> {
        let chars: Vec<char> = spec.chars().collect();
        let mut parsed = Self::default();
        let mut i = 0;

        if let Some(align) = chars.get(1).copied().and_then(align_of) {
            parsed.fill = chars[0];
            parsed.align = Some(align);
            i = 2;
        } else if let Some(align) = chars.first().copied().and_then(align_of) {
            parsed.align = Some(align);
            i = 1;
        }

        parsed.sign = match chars.get(i) {
            Some('+') => Some(Sign::Plus),
            Some('-') => Some(Sign::Minus),
            Some(' ') => Some(Sign::Space),
            _ => None,
        };
        if parsed.sign.is_some() {
            i += 1;
        }

        if chars.get(i) == Some(&'#') {
            parsed.alternate = true;
            i += 1;
        }

        if chars.get(i) == Some(&'0') {
            if parsed.align.is_none() {
                parsed.fill = '0';
                parsed.align = Some(Align::AfterSign);
            }
            i += 1;
        }

        let start = i;
        while chars.get(i).is_some_and(char::is_ascii_digit) {
            i += 1;
        }
        if i > start {
            let width: String = chars[start..i].iter().collect();
            parsed.width = Some(width.parse().map_err(|_| malformed(spec))?);
        }

        if let Some(&sep) = chars.get(i).filter(|c| **c == ',' || **c == '_') {
            parsed.grouping = Some(sep);
            i += 1;
        }

        if chars.get(i) == Some(&'.') {
            i += 1;
            let start = i;
            while chars.get(i).is_some_and(char::is_ascii_digit) {
                i += 1;
            }
            if i == start {
                return Err(malformed(spec));
            }
            let precision: String = chars[start..i].iter().collect();
            parsed.precision = Some(precision.parse().map_err(|_| malformed(spec))?);
        }

        if let Some(&kind) = chars.get(i) {
            if !"sdfFeE%".contains(kind) {
                return Err(malformed(spec));
            }
            parsed.kind = Some(kind);
            i += 1;
        }

        if i != chars.len() {
            return Err(malformed(spec));
        }
        Ok(parsed)
    }

    /// 문자열에 적용 (기본 왼쪽 정렬)
    pub fn apply_str(&self, text: &str) -> Result<String> {
        if !matches!(self.kind, None | Some('s'))
            || self.sign.is_some()
            || self.grouping.is_some()
            || self.align == Some(Align::AfterSign)
        {
            return Err(GrammarError::MalformedFormatSpec(format!(
                "문자열에 쓸 수 없는 서식: {:?}",
                self
            )));
        }
        let body: String = match self.precision {
            Some(p) => text.chars().take(p).collect(),
            None => text.to_string(),
        };
        Ok(self.pad("", &body, Align::Left))
    }

    /// 정수에 적용 (기본 오른쪽 정렬)
    pub fn apply_int(&self, number: i64) -> Result<String> {
        match self.kind {
            None | Some('d') => {
                if self.precision.is_some() {
                    return Err(GrammarError::MalformedFormatSpec(
                        "정수 서식에는 정밀도를 쓸 수 없습니다".into(),
                    ));
                }
                let digits = number.unsigned_abs().to_string();
                let body = match self.grouping {
                    Some(sep) => group_digits(&digits, sep),
                    None => digits,
                };
                Ok(self.pad(self.sign_prefix(number < 0), &body, Align::Right))
            }
            Some('s') => Err(GrammarError::MalformedFormatSpec(
                "정수에 문자열 서식을 쓸 수 없습니다".into(),
            )),
            Some(_) => self.apply_float(number as f64),
        }
    }

    /// 실수에 적용 (기본 오른쪽 정렬)
    pub fn apply_float(&self, number: f64) -> Result<String> {
        let magnitude = number.abs();
        let body = match self.kind {
            Some('f') | Some('F') => format!("{:.*}", self.precision.unwrap_or(6), magnitude),
            Some('%') => format!("{:.*}%", self.precision.unwrap_or(6), magnitude * 100.0),
            Some('e') | Some('E') => {
                let marker = if self.kind == Some('E') { 'E' } else { 'e' };
                signed_exponent(&format!("{:.*e}", self.precision.unwrap_or(6), magnitude), marker)
            }
            None => match self.precision {
                Some(p) => format!("{:.*}", p, magnitude),
                // 아주 크거나 작은 값은 지수 표기 (1e+16, 1.5e-05)
                None if magnitude != 0.0
                    && magnitude.is_finite()
                    && !(1e-4..1e16).contains(&magnitude) =>
                {
                    signed_exponent(&format!("{:e}", magnitude), 'e')
                }
                None if magnitude.is_finite() && magnitude.fract() == 0.0 => {
                    format!("{:.1}", magnitude)
                }
                None => magnitude.to_string(),
            },
            Some(_) => {
                return Err(GrammarError::MalformedFormatSpec(format!(
                    "실수에 쓸 수 없는 서식: {:?}",
                    self.kind
                )))
            }
        };
        let body = match self.grouping {
            Some(sep) => {
                let split = body.find(|c: char| !c.is_ascii_digit()).unwrap_or(body.len());
                format!("{}{}", group_digits(&body[..split], sep), &body[split..])
            }
            None => body,
        };
        let body = if self.kind == Some('F') || self.kind == Some('E') {
            body.to_uppercase()
        } else {
            body
        };
        Ok(self.pad(self.sign_prefix(number.is_sign_negative() && number != 0.0), &body, Align::Right))
    }

    fn sign_prefix(&self, negative: bool) -> &'static str {
        match (negative, self.sign.unwrap_or_default()) {
            (true, _) => "-",
            (false, Sign::Plus) => "+",
            (false, Sign::Space) => " ",
            (false, Sign::Minus) => "",
        }
    }

    /// 폭에 맞게 채우기
    fn pad(&self, sign: &str, body: &str, default_align: Align) -> String {
        let len = sign.chars().count() + body.chars().count();
        let width = self.width.unwrap_or(0);
        if len >= width {
            return format!("{}{}", sign, body);
        }
        let fill = |n: usize| self.fill.to_string().repeat(n);
        let padding = width - len;
        match self.align.unwrap_or(default_align) {
            Align::Left => format!("{}{}{}", sign, body, fill(padding)),
            Align::Right => format!("{}{}{}", fill(padding), sign, body),
            Align::Center => {
                let left = padding / 2;
                format!("{}{}{}{}", fill(left), sign, body, fill(padding - left))
            }
            Align::AfterSign => format!("{}{}{}", sign, fill(padding), body),
        }
    }
}
