//! 한자어 수사 읽기
//!
//! 네 자리(만 단위)씩 묶어 읽습니다. 숫자/단위 낱말은 모두 설정에서 주입되므로
//! 같은 묶음 구조를 쓰는 다른 수 체계에도 그대로 쓸 수 있습니다.

use std::sync::LazyLock;

use crate::config::NumeralConfig;
use crate::error::Result;

/// 한 묶음의 자릿수
const PHASE_LEN: u32 = 4;

/// 기본 어휘(영일이삼...)로 만든 수 읽기
static SINO_KOREAN: LazyLock<NumberReader> =
    LazyLock::new(|| NumberReader::build(&NumeralConfig::default()));

/// 정수를 한자어 수사로 읽는 변환기
#[derive(Debug, Clone)]
pub struct NumberReader {
    /// 0~9 숫자 낱말
    digits: Vec<String>,
    /// 십, 백, 천
    minor_scales: Vec<String>,
    /// 묶음 번호 -> 만 단위 낱말 (0번은 빈 문자열)
    major_scales: Vec<String>,
    minus: String,
}

impl Default for NumberReader {
    fn default() -> Self {
        SINO_KOREAN.clone()
    }
}

impl NumberReader {
    /// 설정을 검증한 뒤 변환기 생성
    pub fn new(config: &NumeralConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// 기본 어휘 변환기
    pub fn sino_korean() -> &'static NumberReader {
        &SINO_KOREAN
    }

    fn build(config: &NumeralConfig) -> Self {
        let word = |position: u32| config.scales.get(&position).cloned().unwrap_or_default();
        let minor_scales = (1..PHASE_LEN).map(word).collect();

        // 만 단위 낱말은 빈틈없이 이어진 데까지만 사용
        let mut major_scales = vec![String::new()];
        let mut position = PHASE_LEN;
        while let Some(w) = config.scales.get(&position) {
            major_scales.push(w.clone());
            position += PHASE_LEN;
        }

        Self {
            digits: config.digits.clone(),
            minor_scales,
            major_scales,
            minus: config.minus.clone(),
        }
    }

    /// 숫자 낱말 (0~9)
    fn digit(&self, d: u64) -> &str {
        self.digits.get(d as usize).map(String::as_str).unwrap_or_default()
    }

    /// 묶음별로 읽기
    ///
    /// 가장 높은 묶음이 아닌 빈 묶음은 생략하지 않고 빈 문자열로 남깁니다.
    ///
    /// ```
    /// use hangeul::NumberReader;
    /// let reader = NumberReader::sino_korean();
    /// assert_eq!(reader.read_phases(152400), ["십오만", "이천사백"]);
    /// assert_eq!(reader.read_phases(600000109), ["육억", "", "백구"]);
    /// ```
    pub fn read_phases(&self, number: i64) -> Vec<String> {
        let phases = self.unsigned_phases(number.unsigned_abs());
        if number < 0 {
            std::iter::once(self.minus.clone()).chain(phases).collect()
        } else {
            phases
        }
    }

    /// 정수 전체 읽기
    pub fn read(&self, number: i64) -> String {
        self.read_phases(number).concat()
    }

    /// 음이 아닌 정수 읽기
    pub fn read_unsigned(&self, number: u64) -> String {
        self.unsigned_phases(number).concat()
    }

    /// 숫자 글자 읽기 (길이 제한 없음)
    ///
    /// 설정된 만 단위 낱말로 이름 붙일 수 없을 만큼 길면 None입니다.
    ///
    /// ```
    /// use hangeul::NumberReader;
    /// let reader = NumberReader::sino_korean();
    /// assert_eq!(reader.read_digits("100000000000000000000").as_deref(), Some("해"));
    /// assert_eq!(reader.read_digits("12a"), None);
    /// ```
    pub fn read_digits(&self, digits: &str) -> Option<String> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let significant = digits.trim_start_matches('0').as_bytes();
        // 낮은 묶음부터
        let groups: Vec<u64> = significant
            .rchunks(PHASE_LEN as usize)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'))
            })
            .collect();
        if groups.len() > self.major_scales.len() {
            return None;
        }
        Some(self.phases_from_groups(groups).concat())
    }

    fn unsigned_phases(&self, mut number: u64) -> Vec<String> {
        let mut groups = Vec::new();
        while number > 0 {
            groups.push(number % 10_000);
            number /= 10_000;
        }
        self.phases_from_groups(groups)
    }

    /// 낮은 묶음부터 담긴 네 자리 묶음들을 읽음
    fn phases_from_groups(&self, groups: Vec<u64>) -> Vec<String> {
        if groups.is_empty() {
            return vec![self.digit(0).to_string()];
        }

        let mut phases: Vec<String> = groups
            .into_iter()
            .enumerate()
            .map(|(index, group)| self.read_group(group, index))
            .collect();
        phases.reverse();

        // 맨 앞 "일만", "일억"의 "일"은 읽지 않음
        if let Some(major) = self.major_scales.get(phases.len() - 1) {
            if phases.len() > 1 && phases[0] == format!("{}{}", self.digit(1), major) {
                phases[0] = major.clone();
            }
        }
        phases
    }

    /// 네 자리 묶음 하나 읽기
    fn read_group(&self, group: u64, index: usize) -> String {
        let mut phase = String::new();
        for sub in (0..PHASE_LEN).rev() {
            let d = (group / 10u64.pow(sub)) % 10;
            if d == 0 {
                continue;
            }
            if sub == 0 {
                phase.push_str(self.digit(d));
            } else {
                // "일십"이 아니라 "십"
                if d != 1 {
                    phase.push_str(self.digit(d));
                }
                phase.push_str(&self.minor_scales[sub as usize - 1]);
            }
        }
        if !phase.is_empty() && index > 0 {
            if let Some(major) = self.major_scales.get(index) {
                phase.push_str(major);
            }
        }
        phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader() -> &'static NumberReader {
        NumberReader::sino_korean()
    }

    #[test]
    fn test_read_small_numbers() {
        assert_eq!(reader().read(0), "영");
        assert_eq!(reader().read(1), "일");
        assert_eq!(reader().read(5), "오");
        assert_eq!(reader().read(10), "십");
        assert_eq!(reader().read(32), "삼십이");
        assert_eq!(reader().read(42), "사십이");
        assert_eq!(reader().read(111), "백십일");
        assert_eq!(reader().read(1000), "천");
    }

    #[test]
    fn test_read_large_numbers() {
        assert_eq!(reader().read(152400), "십오만이천사백");
        assert_eq!(reader().read(600000109), "육억백구");
        assert_eq!(reader().read(72009852), "칠천이백만구천팔백오십이");
        assert_eq!(reader().read(110000), "십일만");
    }

    #[test]
    fn test_leading_one_elision() {
        assert_eq!(reader().read_phases(10000), ["만", ""]);
        assert_eq!(reader().read_phases(100000000), ["억", "", ""]);
        // 안쪽 묶음의 "일만"은 그대로
        assert_eq!(reader().read_phases(100010000), ["억", "일만", ""]);
    }

    #[test]
    fn test_read_phases() {
        assert_eq!(reader().read_phases(32), ["삼십이"]);
        assert_eq!(reader().read_phases(152400), ["십오만", "이천사백"]);
        assert_eq!(reader().read_phases(600000109), ["육억", "", "백구"]);
    }

    #[test]
    fn test_negative() {
        assert_eq!(reader().read_phases(-8), ["마이너스", "팔"]);
        assert_eq!(reader().read(-8), "마이너스팔");
        assert!(reader().read(i64::MIN).starts_with("마이너스구천이백이십삼경"));
    }

    #[test]
    fn test_read_unsigned_max() {
        assert!(reader().read_unsigned(u64::MAX).starts_with("천팔백사십사경"));
    }

    #[test]
    fn test_read_digits_beyond_u64() {
        let reading = reader().read_digits("123456789012345678903").unwrap();
        assert_eq!(
            reading,
            "해이천삼백사십오경육천칠백팔십구조백이십삼억사천오백육십칠만팔천구백삼"
        );
        assert_eq!(
            reader().read_digits("18446744073709551615").unwrap(),
            reader().read_unsigned(u64::MAX)
        );
    }

    #[test]
    fn test_read_digits_edges() {
        assert_eq!(reader().read_digits("0000").as_deref(), Some("영"));
        assert_eq!(reader().read_digits("007").as_deref(), Some("칠"));
        // 해(10^20) 다음 단위가 없으므로 25자리부터는 읽을 수 없음
        assert!(reader().read_digits(&"9".repeat(24)).is_some());
        assert_eq!(reader().read_digits(&"1".repeat(25)), None);
        assert_eq!(reader().read_digits(""), None);
    }

    #[test]
    fn test_custom_vocabulary() {
        let mut config = NumeralConfig::default();
        config.minus = "음".to_string();
        config.digits[0] = "공".to_string();
        let custom = NumberReader::new(&config).unwrap();
        assert_eq!(custom.read(-3), "음삼");
        assert_eq!(custom.read(0), "공");
    }

    #[test]
    fn test_invalid_vocabulary() {
        let mut config = NumeralConfig::default();
        config.scales.remove(&8);
        assert!(NumberReader::new(&config).is_err());
    }
}
