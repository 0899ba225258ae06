//! 조사와 조사 등록부
//!
//! 조사(을/를, 이/가 등)는 앞 음절의 받침에 따라 모양이 달라지는 이형태를 가집니다.
//! 등록부는 알려진 모든 형태를 하나의 공유 조사 객체로 연결하므로,
//! `lookup("가")`와 `lookup("이")`는 같은 `Arc`를 돌려줍니다.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::KoreanConfig;
use crate::core::jamo::FinalClass;
use crate::error::{GrammarError, Result};

/// 조사 (1~3개의 이형태)
///
/// 형태 순서: [모음 뒤, 자음 뒤, ㄹ 뒤]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Particle {
    forms: Vec<String>,
}

impl Particle {
    /// 이형태로 조사 생성
    ///
    /// 자음 뒤 형태가 없으면 모음 뒤 형태를, ㄹ 뒤 형태가 없으면 자음 뒤 형태를 씁니다.
    pub fn new(after_vowel: &str, after_consonant: Option<&str>, after_rieul: Option<&str>) -> Self {
        let mut forms = vec![after_vowel.to_string()];
        if let Some(c) = after_consonant {
            forms.push(c.to_string());
            if let Some(r) = after_rieul {
                forms.push(r.to_string());
            }
        } else if let Some(r) = after_rieul {
            forms.push(after_vowel.to_string());
            forms.push(r.to_string());
        }
        Self { forms }
    }

    /// 형태 목록으로 조사 생성 (1~3개)
    pub fn from_forms<S: AsRef<str>>(forms: &[S]) -> Result<Self> {
        if forms.is_empty() || forms.len() > 3 {
            return Err(GrammarError::InvalidConfiguration(format!(
                "조사 형태는 1~3개여야 합니다 (현재 {}개)",
                forms.len()
            )));
        }
        let forms: Vec<String> = forms.iter().map(|f| f.as_ref().to_string()).collect();
        if forms.iter().any(String::is_empty) {
            return Err(GrammarError::InvalidConfiguration("빈 조사 형태".into()));
        }
        Ok(Self { forms })
    }

    pub fn forms(&self) -> &[String] {
        &self.forms
    }

    /// 기본형 (모음 뒤 형태)
    pub fn basic(&self) -> &str {
        &self.forms[0]
    }

    pub fn after_vowel(&self) -> &str {
        self.basic()
    }

    pub fn after_consonant(&self) -> &str {
        self.forms.get(1).map(String::as_str).unwrap_or_else(|| self.after_vowel())
    }

    pub fn after_rieul(&self) -> &str {
        self.forms.get(2).map(String::as_str).unwrap_or_else(|| self.after_consonant())
    }

    /// 음운 환경에 맞는 형태 선택
    pub fn pick(&self, class: FinalClass) -> &str {
        match class {
            FinalClass::NoFinal => self.after_vowel(),
            FinalClass::Rieul => self.after_rieul(),
            FinalClass::OtherFinal => self.after_consonant(),
        }
    }

    /// 모든 형태 뒤에 같은 꼬리를 붙인 새 조사 (로 -> 로서)
    fn with_suffix(&self, suffix: &str) -> Self {
        Self {
            forms: self.forms.iter().map(|f| format!("{}{}", f, suffix)).collect(),
        }
    }

    /// 작성자가 모호하게 적는 조사 표기들
    ///
    /// 길이가 같은 두 형태는 네 가지 표기("을(를)", "를(을)", "(을)를", "(를)을"),
    /// 길이가 다른 두 형태는 짧은 쪽을 드러낸 한 가지 표기("(으)로")를 만듭니다.
    pub fn naive(&self) -> Vec<String> {
        let mut unique: Vec<&str> = Vec::with_capacity(self.forms.len());
        for form in &self.forms {
            if !unique.contains(&form.as_str()) {
                unique.push(form);
            }
        }

        let mut spellings = Vec::new();
        for pair in unique.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (len_a, len_b) = (a.chars().count(), b.chars().count());
            if len_a == len_b {
                spellings.push(format!("{}({})", a, b));
                spellings.push(format!("{}({})", b, a));
                spellings.push(format!("({}){}", a, b));
                spellings.push(format!("({}){}", b, a));
            } else {
                let (shorter, longer) = if len_a < len_b { (a, b) } else { (b, a) };
                let shared = common_suffix_len(shorter, longer);
                let head = &longer[..longer.len() - shared];
                spellings.push(format!("({}){}", head, shorter));
            }
        }
        spellings
    }
}

/// 두 문자열이 공유하는 꼬리의 바이트 길이
fn common_suffix_len(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.basic())
    }
}

/// 형태 문자열 -> 공유 조사 등록부
///
/// 시작할 때 한 번 채운 뒤에는 읽기만 하므로 여러 스레드에서 잠금 없이 공유할 수 있습니다.
#[derive(Debug, Default, Clone)]
pub struct ParticleRegistry {
    particles: Vec<Arc<Particle>>,
    index: HashMap<String, Arc<Particle>>,
    /// 추측용: 긴 형태부터
    keys_by_length: Vec<String>,
}

impl ParticleRegistry {
    /// 빈 등록부
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정의 조사 묶음으로 등록부 생성
    pub fn from_config(config: &KoreanConfig) -> Result<Self> {
        let mut registry = Self::new();
        for forms in &config.particles {
            registry.register(forms)?;
        }
        log::debug!(
            "조사 등록부 생성: 조사 {}개, 형태 {}개",
            registry.particles.len(),
            registry.index.len()
        );
        Ok(registry)
    }

    /// 조사 하나를 등록하고 모든 형태를 색인
    ///
    /// 이미 다른 조사가 가진 형태를 다시 등록하면 설정 충돌입니다.
    pub fn register<S: AsRef<str>>(&mut self, forms: &[S]) -> Result<Arc<Particle>> {
        let particle = Arc::new(Particle::from_forms(forms)?);
        if let Some(taken) = particle.forms().iter().find(|f| self.index.contains_key(*f)) {
            return Err(GrammarError::ConfigurationConflict(format!(
                "이미 등록된 조사 형태: {}",
                taken
            )));
        }
        for form in particle.forms() {
            if !self.index.contains_key(form) {
                self.index.insert(form.clone(), Arc::clone(&particle));
                self.keys_by_length.push(form.clone());
            }
        }
        self.keys_by_length.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        self.particles.push(Arc::clone(&particle));
        Ok(particle)
    }

    /// 등록된 형태와 정확히 일치하는 조사
    pub fn get(&self, key: &str) -> Option<&Arc<Particle>> {
        self.index.get(key)
    }

    /// 조사 찾기: 정확히 일치하는 조사, 없으면 추측
    ///
    /// ```
    /// use std::sync::Arc;
    /// use hangeul::{KoreanConfig, ParticleRegistry};
    ///
    /// let registry = ParticleRegistry::from_config(&KoreanConfig::default()).unwrap();
    /// let ga = registry.lookup("가").unwrap();
    /// let i = registry.lookup("이").unwrap();
    /// assert!(Arc::ptr_eq(&ga, &i));
    /// ```
    pub fn lookup(&self, key: &str) -> Result<Arc<Particle>> {
        match self.get(key) {
            Some(particle) => Ok(Arc::clone(particle)),
            None => self.guess(key),
        }
    }

    /// 등록된 형태로 시작하는 복합 조사 추측 (로서 -> 로/으로 + 서)
    ///
    /// 추측한 조사는 등록부에 들어가지 않는 새 객체입니다.
    pub fn guess(&self, key: &str) -> Result<Arc<Particle>> {
        for known in &self.keys_by_length {
            if let Some(suffix) = key.strip_prefix(known.as_str()) {
                let base = &self.index[known];
                let guessed = base.with_suffix(suffix);
                log::trace!("조사 추측: {} -> {:?}", key, guessed.forms());
                return Ok(Arc::new(guessed));
            }
        }
        Err(GrammarError::ParticleNotFound(key.to_string()))
    }

    /// 등록된 조사 (등록 순서)
    pub fn particles(&self) -> impl Iterator<Item = &Arc<Particle>> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
