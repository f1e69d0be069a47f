//! 공통 에러 타입
//!
//! 로스터/캐러셀 연산 자체는 실패하지 않습니다. 여기 정의된 에러는
//! 문자열 파싱, 설정 로드, 데이터 제공자 경계에서만 발생합니다.

/// 보드 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("알 수 없는 주문 상태: {0}")]
    UnknownStatus(String),
    #[error("알 수 없는 티어: {0}")]
    UnknownTier(String),
    #[error("알 수 없는 접속 상태: {0}")]
    UnknownPresence(String),
    #[error("알 수 없는 활동 유형: {0}")]
    UnknownActivityKind(String),
    #[error("평점은 1~5 사이여야 함: {0}")]
    InvalidRating(u8),
    #[error("설정 값 오류 ({key}={value}): {reason}")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },
    #[error("데이터 제공자 오류: {0}")]
    Provider(String),
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("직렬화 오류: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type BoardResult<T> = Result<T, BoardError>;
