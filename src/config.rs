//! 조사/수사 데이터 설정 로드 (JSON)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{GrammarError, Result};

/// i64 전체를 읽는 데 필요한 가장 큰 만 단위 자릿수 (경 = 10^16)
const MAX_MAJOR_SCALE: u32 = 16;

/// 한글 처리 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct KoreanConfig {
    /// 조사 이형태 묶음: [모음 뒤, 자음 뒤, ㄹ 뒤]
    #[serde(default = "default_particles")]
    pub particles: Vec<Vec<String>>,
    /// 수사 어휘
    #[serde(default)]
    pub numerals: NumeralConfig,
}

/// 수 읽기에 쓰이는 어휘
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NumeralConfig {
    /// 0~9 숫자 낱말
    #[serde(default = "default_digits")]
    pub digits: Vec<String>,
    /// 자릿수 -> 단위 낱말 (1: 십, 4: 만, 8: 억, ...)
    #[serde(default = "default_scales")]
    pub scales: BTreeMap<u32, String>,
    /// 음수 앞에 붙는 낱말
    #[serde(default = "default_minus")]
    pub minus: String,
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_particles() -> Vec<Vec<String>> {
    let groups: &[&[&str]] = &[
        &["가", "이"],
        &["를", "을"],
        &["는", "은"],
        &["로", "으로", "로"],
        &["와", "과"],
        &["나", "이나"],
        &["란", "이란"],
        &["랑", "이랑"],
        &["다", "이다"],
        &["여", "이여"],
        &["야", "아"],
        &["며", "이며"],
        &["ㄹ랑", "일랑"],
    ];
    groups.iter().map(|forms| strings(forms)).collect()
}

fn default_digits() -> Vec<String> {
    strings(&["영", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"])
}

fn default_scales() -> BTreeMap<u32, String> {
    [
        (1, "십"),
        (2, "백"),
        (3, "천"),
        (4, "만"),
        (8, "억"),
        (12, "조"),
        (16, "경"),
        (20, "해"),
    ]
    .into_iter()
    .map(|(p, w)| (p, w.to_string()))
    .collect()
}

fn default_minus() -> String {
    "마이너스".to_string()
}

impl Default for NumeralConfig {
    fn default() -> Self {
        Self {
            digits: default_digits(),
            scales: default_scales(),
            minus: default_minus(),
        }
    }
}

impl Default for KoreanConfig {
    fn default() -> Self {
        Self {
            particles: default_particles(),
            numerals: NumeralConfig::default(),
        }
    }
}

impl NumeralConfig {
    /// 어휘 표 검증
    pub fn validate(&self) -> Result<()> {
        if self.digits.len() != 10 {
            return Err(GrammarError::InvalidConfiguration(format!(
                "숫자 낱말은 10개여야 합니다 (현재 {}개)",
                self.digits.len()
            )));
        }
        let required = (1..=3).chain((4..=MAX_MAJOR_SCALE).step_by(4));
        for position in required {
            if !self.scales.contains_key(&position) {
                return Err(GrammarError::InvalidConfiguration(format!(
                    "{}번째 자리의 단위 낱말이 없습니다",
                    position
                )));
            }
        }
        Ok(())
    }
}

impl KoreanConfig {
    /// JSON 파일에서 설정 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON 문자열에서 설정 로드 (누락된 필드는 기본값)
    pub fn from_json(json: &str) -> Result<Self> {
        let config: KoreanConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 조사 묶음과 수사 어휘 검증
    pub fn validate(&self) -> Result<()> {
        for forms in &self.particles {
            if forms.is_empty() || forms.len() > 3 {
                return Err(GrammarError::InvalidConfiguration(format!(
                    "조사 형태는 1~3개여야 합니다: {:?}",
                    forms
                )));
            }
            if forms.iter().any(|f| f.is_empty()) {
                return Err(GrammarError::InvalidConfiguration(format!(
                    "빈 조사 형태: {:?}",
                    forms
                )));
            }
        }
        self.numerals.validate()
    }
}
