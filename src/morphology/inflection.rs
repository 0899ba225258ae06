//! 조사 이형태 선택 규칙 표와 음절 병합
//!
//! 체언 종류마다 이형태를 고르는 함수를 시작할 때 명시적으로 등록합니다.

use std::collections::HashMap;

use crate::core::jamo::{classify, is_consonant, is_final, is_vowel};
use crate::core::unicode::{get_final, join_char, split_char};
use crate::error::{GrammarError, Result};
use crate::morphology::number::NumberReader;
use crate::morphology::particle::Particle;
use crate::morphology::substantive::{Substantive, SubstantiveKind};

/// 이형태 선택 함수: (조사, 앞 체언, 수 읽기) -> 고른 형태
pub type AllomorphPicker = fn(&Particle, &dyn Substantive, &NumberReader) -> Result<String>;

/// 체언을 읽은 형태의 마지막 음절 받침으로 이형태 선택
pub fn pick_after_substantive(
    particle: &Particle,
    substantive: &dyn Substantive,
    numbers: &NumberReader,
) -> Result<String> {
    let spoken = substantive.read_with(numbers);
    let last = spoken.chars().last().ok_or_else(|| {
        GrammarError::CodecPrecondition(format!("읽을 수 없는 체언: {:?}", substantive))
    })?;
    let final_jamo = get_final(last)?;
    Ok(particle.pick(classify(final_jamo)).to_string())
}

/// 체언 종류 -> 이형태 선택 함수
#[derive(Debug, Clone, Default)]
pub struct InflectionTable {
    pickers: HashMap<SubstantiveKind, AllomorphPicker>,
}

impl InflectionTable {
    /// 빈 규칙 표
    pub fn new() -> Self {
        Self::default()
    }

    /// 명사/수사/외래어 모두 받침 규칙을 쓰는 기본 표
    pub fn standard() -> Self {
        let mut table = Self::new();
        for kind in [
            SubstantiveKind::Noun,
            SubstantiveKind::NumberWord,
            SubstantiveKind::Loanword,
        ] {
            table.pickers.insert(kind, pick_after_substantive);
        }
        table
    }

    /// 규칙 등록 (같은 키를 두 번 등록하면 설정 충돌)
    pub fn define(&mut self, kind: SubstantiveKind, picker: AllomorphPicker) -> Result<()> {
        if self.pickers.contains_key(&kind) {
            return Err(GrammarError::ConfigurationConflict(format!(
                "이미 정의된 조사 선택 규칙: {:?}",
                kind
            )));
        }
        self.pickers.insert(kind, picker);
        Ok(())
    }

    /// 앞 체언에 맞는 조사 형태
    pub fn inflect(
        &self,
        particle: &Particle,
        substantive: &dyn Substantive,
        numbers: &NumberReader,
    ) -> Result<String> {
        let picker = self.pickers.get(&substantive.kind()).ok_or_else(|| {
            GrammarError::InvalidConfiguration(format!(
                "조사 선택 규칙이 없습니다: {:?}",
                substantive.kind()
            ))
        })?;
        picker(particle, substantive, numbers)
    }
}

/// 받침 자모로 시작하는 조사 형태를 앞 음절의 받침으로 합침
///
/// 앞 글자가 받침 없는 완성형 음절이 아니면 None입니다.
fn fuse_form(text: &str, form: &str) -> Option<String> {
    let mut rest = form.chars();
    let lead = rest.next().filter(|c| is_final(*c))?;
    let last = text.chars().last()?;
    match split_char(last) {
        Ok((initial, vowel, None)) => {
            let fused = join_char(Some(initial), Some(vowel), Some(lead)).ok()?;
            let head = &text[..text.len() - last.len_utf8()];
            Some(format!("{}{}{}", head, fused, rest.as_str()))
        }
        _ => None,
    }
}

/// 체언 글자와 조사 형태 잇기
///
/// 조사가 받침 자모로 시작하고 앞 음절에 받침이 없으면 그 음절의 받침으로 붙입니다
/// ("서버" + "ㄹ랑" -> "서벌랑"). 그 밖에는 그대로 이어 붙입니다.
pub fn merge_form(text: &str, form: &str) -> String {
    fuse_form(text, form).unwrap_or_else(|| format!("{}{}", text, form))
}

/// 조사의 고른 형태를 글자 뒤에 붙임
///
/// 자모로 시작하는 형태("ㄹ랑")를 합칠 음절이 없으면 (숫자, 로마자, 따옴표 뒤)
/// 자모가 드러나지 않도록 자음 뒤 형태("일랑")를 씁니다.
pub fn attach_form(text: &str, form: &str, particle: &Particle) -> String {
    if !form.starts_with(|c: char| is_consonant(c) || is_vowel(c)) {
        return format!("{}{}", text, form);
    }
    fuse_form(text, form).unwrap_or_else(|| format!("{}{}", text, particle.after_consonant()))
}
