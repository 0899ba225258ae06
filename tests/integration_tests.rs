//! 통합 테스트 - 공개 API

use std::sync::Arc;

use hangeul::{
    join_char, split_char, Formattable, Grammar, KoreanConfig, Noun, NumberWord, Particle,
    Predicate, Substantive, Value,
};

fn grammar() -> &'static Grammar {
    hangeul::korean().grammar()
}

fn particle(key: &str) -> Arc<Particle> {
    grammar().particle(key).unwrap()
}

#[test]
fn test_codec_round_trip() {
    for code in 0xAC00..=0xD7A3u32 {
        let c = char::from_u32(code).unwrap();
        let (initial, vowel, final_jamo) = split_char(c).unwrap();
        assert_eq!(join_char(Some(initial), Some(vowel), final_jamo).unwrap(), c);
    }
    assert!(split_char('A').is_err());
}

#[test]
fn test_particle_identity() {
    assert!(Arc::ptr_eq(&particle("가"), &particle("이")));
    assert!(Arc::ptr_eq(&particle("를"), &particle("을")));
    assert!(!Arc::ptr_eq(&particle("가"), &particle("를")));
}

#[test]
fn test_allomorph_selection() {
    let g = grammar();
    assert_eq!(g.inflect(&particle("가"), &Noun::new("받침")).unwrap(), "이");
    assert_eq!(g.inflect(&particle("가"), &Noun::new("나비")).unwrap(), "가");
    assert_eq!(g.inflect(&particle("로"), &Noun::new("마을")).unwrap(), "로");
    assert_eq!(g.inflect(&particle("로"), &Noun::new("파이썬")).unwrap(), "으로");
}

#[test]
fn test_guess_and_merge() {
    let g = grammar();
    assert_eq!(g.merge(&Noun::new("게임"), &particle("일랑")).unwrap(), "게임일랑");
    assert_eq!(g.merge(&Noun::new("서버"), &particle("일랑")).unwrap(), "서벌랑");

    let roseo = particle("로서");
    assert_eq!(roseo.forms(), ["로서", "으로서", "로서"]);
    assert!(grammar().registry().get("로서").is_none());
    assert!(matches!(
        grammar().particle("에게"),
        Err(hangeul::GrammarError::ParticleNotFound(_))
    ));
}

#[test]
fn test_naive_spellings() {
    assert_eq!(particle("을").naive(), ["를(을)", "을(를)", "(를)을", "(을)를"]);
    assert_eq!(particle("로").naive(), ["(으)로"]);
}

#[test]
fn test_number_reading() {
    assert_eq!(NumberWord::new(32).read(), "삼십이");
    assert_eq!(NumberWord::new(0).read(), "영");
    assert_eq!(NumberWord::new(-8).read(), "마이너스팔");
    assert_eq!(grammar().read_phases(152400), ["십오만", "이천사백"]);
    assert_eq!(grammar().read_phases(600000109), ["육억", "", "백구"]);
    assert_eq!(grammar().read_number(72009852), "칠천이백만구천팔백오십이");
    assert_eq!(Noun::new("레벨 4").read(), "레벨 사");
    assert_eq!(Noun::new("레벨 50").read(), "레벨 오십");
}

#[test]
fn test_proofread() {
    assert_eq!(hangeul::proofread("사과은(는) 맛있다."), "사과는 맛있다.");
    assert_eq!(hangeul::proofread("집(으)로 가자."), "집으로 가자.");
    assert_eq!(hangeul::proofread("말을(를)(를)"), "말을(를)");
    assert_eq!(
        hangeul::proofread("the rules of a language"),
        "the rules of a language"
    );
}

#[test]
fn test_proofread_idempotent() {
    for text in [
        "용사은(는) 검을(를) 획득했다.",
        "\"파이어 볼\"을(를) 배웠다.",
        "Korean을(를) 배운다.",
        "사과다.",
        "",
    ] {
        let once = hangeul::proofread(text);
        assert_eq!(hangeul::proofread(&once), once);
    }
}

#[test]
fn test_template_format() {
    assert_eq!(hangeul::format("{0:로}", &[123.into()]).unwrap(), "123으로");
    assert_eq!(
        hangeul::format("{0:이} 있습니다.", &["콩".into()]).unwrap(),
        "콩이 있습니다."
    );
    assert_eq!(
        hangeul::format("{0:는:5}|", &[Value::from("소년")]).unwrap(),
        "소년은  |"
    );
    assert!(hangeul::format("{0:을:를}", &["한국어".into()]).is_err());
}

#[test]
fn test_jamo_particle_without_open_syllable() {
    assert_eq!(hangeul::format("{0:일랑}", &[4.into()]).unwrap(), "4일랑");
    assert_eq!(hangeul::format("{0:일랑}", &["Java".into()]).unwrap(), "Java일랑");
    assert_eq!(hangeul::format("{0:일랑}", &["서버".into()]).unwrap(), "서벌랑");
}

#[test]
fn test_long_digit_run() {
    // 21자리: 해 단위까지 읽어 "삼"으로 끝남
    assert_eq!(
        hangeul::format("{0:을}", &["123456789012345678903".into()]).unwrap(),
        "123456789012345678903을"
    );
    assert_eq!(
        hangeul::format("{0:을}", &["18446744073709551613".into()]).unwrap(),
        "18446744073709551613을"
    );
}

#[test]
fn test_predicate_format() {
    let verb = Predicate::verb("만들다").unwrap();
    assert_eq!(verb.format(grammar(), "ㅂ니다").unwrap(), "만듭니다");
    assert_eq!(verb.format(grammar(), "ㄴ다").unwrap(), "만든다");
}

#[test]
fn test_custom_vocabulary() {
    let json = r#"{
        "particles": [["가", "이"], ["를", "을"]],
        "numerals": { "minus": "음수 " }
    }"#;
    let config = KoreanConfig::from_json(json).unwrap();
    let korean = hangeul::Korean::new(&config).unwrap();
    assert_eq!(korean.grammar().read_number(-3), "음수 삼");
    assert_eq!(korean.proofread("사과를(을) 먹었다."), "사과를 먹었다.");
    // 등록하지 않은 조사는 교정하지 않음
    assert_eq!(korean.proofread("사과은(는)"), "사과은(는)");
}
