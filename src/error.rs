//! 크레이트 공통 에러 타입

/// 한글 처리 에러
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GrammarError {
    /// 한글 음절 범위를 벗어난 문자, 또는 표에 없는 자모
    #[error("한글 입력 오류: {0}")]
    CodecPrecondition(String),

    /// 등록된 조사도 없고 추측할 수 있는 조사도 없음
    #[error("조사를 찾을 수 없습니다: {0}")]
    ParticleNotFound(String),

    /// 서식 지정자 오류
    #[error("잘못된 서식 지정자: {0}")]
    MalformedFormatSpec(String),

    /// 같은 형태가 두 번 등록됨
    #[error("설정 충돌: {0}")]
    ConfigurationConflict(String),

    /// 설정 데이터 형식 오류
    #[error("설정 오류: {0}")]
    InvalidConfiguration(String),

    /// 템플릿 구문 오류
    #[error("잘못된 템플릿: {0}")]
    MalformedTemplate(String),

    /// 템플릿 필드에 대응하는 인자가 없음
    #[error("인자가 없습니다: {0}")]
    MissingArgument(String),

    /// 용언 기본형이 아님 ("다"로 끝나지 않음)
    #[error("용언 기본형이 아닙니다: {0}")]
    NotDictionaryForm(String),

    /// 외래어 전사 실패
    #[error("외래어 전사 실패: {0}")]
    Transliteration(String),

    /// 파일 읽기 실패
    #[error("파일 읽기 오류: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 파싱 실패
    #[error("JSON 파싱 오류: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GrammarError>;
