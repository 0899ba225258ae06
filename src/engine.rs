//! 조사 선택기와 교정기를 함께 가진 진입점
//!
//! 설정에서 한 번 만들어 두면 이후로는 읽기만 하므로 스레드 간에 공유할 수 있습니다.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::KoreanConfig;
use crate::error::Result;
use crate::l10n::proofread::Proofreader;
use crate::l10n::template::{Template, Value};
use crate::morphology::grammar::Grammar;

/// 내장 설정으로 만든 기본 인스턴스
static DEFAULT: LazyLock<Korean> = LazyLock::new(|| {
    Korean::new(&KoreanConfig::default()).expect("내장 설정은 항상 유효합니다")
});

/// 한국어 처리기
#[derive(Debug, Clone)]
pub struct Korean {
    grammar: Grammar,
    proofreader: Proofreader,
}

impl Korean {
    /// 설정으로 생성 (조사 충돌, 어휘 오류는 여기서 실패)
    pub fn new(config: &KoreanConfig) -> Result<Self> {
        let grammar = Grammar::new(config)?;
        let proofreader = Proofreader::new(grammar.registry())?;
        Ok(Self {
            grammar,
            proofreader,
        })
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn proofreader(&self) -> &Proofreader {
        &self.proofreader
    }

    /// 모호한 조사 표기 교정
    pub fn proofread(&self, text: &str) -> String {
        self.proofreader.proofread(&self.grammar, text)
    }

    /// 순서 인자만 쓰는 템플릿 서식
    pub fn format(&self, template: &str, args: &[Value]) -> Result<String> {
        self.format_with(template, args, &HashMap::new())
    }

    /// 순서 인자와 이름 인자를 쓰는 템플릿 서식
    pub fn format_with(
        &self,
        template: &str,
        args: &[Value],
        kwargs: &HashMap<String, Value>,
    ) -> Result<String> {
        Template::new(template)?.format(&self.grammar, args, kwargs)
    }
}

/// 내장 설정으로 만든 기본 인스턴스
pub fn korean() -> &'static Korean {
    &DEFAULT
}

/// 기본 인스턴스로 교정
///
/// ```
/// assert_eq!(hangeul::proofread("사과은(는) 맛있다."), "사과는 맛있다.");
/// ```
pub fn proofread(text: &str) -> String {
    korean().proofread(text)
}

/// 기본 인스턴스로 템플릿 서식
///
/// ```
/// use hangeul::Value;
///
/// let text = hangeul::format("{0:이} 있습니다.", &[Value::from("콩")]).unwrap();
/// assert_eq!(text, "콩이 있습니다.");
/// ```
pub fn format(template: &str, args: &[Value]) -> Result<String> {
    korean().format(template, args)
}
