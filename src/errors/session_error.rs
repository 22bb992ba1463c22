//! 세션 검증 실패 분류
//!
//! 검증기 내부에서는 실패 이유를 구분하지만, 호출자에게는 [`InvalidToken`]
//! 하나로만 알립니다. "만료"와 "폐기"와 "형식 오류"를 구분하는 오라클을
//! 만들지 않기 위해서입니다.

use thiserror::Error;
use crate::errors::AppError;

/// 리프레시 토큰 검증 실패 시 사용자에게 보이는 메시지
pub const INVALID_REFRESH_MESSAGE: &str = "Invalid or expired refresh token";

/// 토큰 주체가 없을 때의 메시지
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// 이메일 또는 비밀번호가 맞지 않을 때의 메시지
///
/// 어느 쪽이 틀렸는지는 알려주지 않습니다.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
/// 비활성 계정의 로그인/리프레시 거부 메시지
pub const ACCOUNT_INACTIVE_MESSAGE: &str = "account suspended/deactivated";

/// 세션 코어의 실패 분류
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// 서명 불일치, 만료, 형식 오류
    #[error("signature invalid")]
    SignatureInvalid,

    /// 액세스 토큰이 리프레시 자리에 (또는 그 반대로) 제시됨
    #[error("wrong token kind")]
    WrongTokenKind,

    /// 서명은 유효하지만 권한 레코드가 없음
    #[error("token revoked")]
    Revoked,

    /// 토큰의 주체가 사용자 저장소에 없음
    #[error("subject not found")]
    SubjectNotFound,

    /// 주체의 계정 상태가 ACTIVE가 아님
    #[error("subject inactive")]
    SubjectInactive,

    /// 권한 저장소 I/O 실패 또는 시간 초과
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

/// 검증기가 돌려주는 불투명한 실패
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid token")]
pub struct InvalidToken;

impl From<SessionError> for InvalidToken {
    fn from(_: SessionError) -> Self {
        InvalidToken
    }
}

/// 순환 단계에서의 실패를 HTTP 경계용 에러로 변환합니다.
///
/// 서명/종류/폐기 실패는 모두 같은 401 메시지로 합쳐지고,
/// 인증이 끝난 뒤에만 알 수 있는 주체 관련 실패는 구분됩니다.
impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::SignatureInvalid
            | SessionError::WrongTokenKind
            | SessionError::Revoked => AppError::AuthenticationError(INVALID_REFRESH_MESSAGE.to_string()),
            SessionError::SubjectNotFound => AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()),
            SessionError::SubjectInactive => AppError::AuthenticationError(ACCOUNT_INACTIVE_MESSAGE.to_string()),
            SessionError::StoreUnavailable(detail) => AppError::RedisError(detail),
        }
    }
}

/// 검증 실패는 이유와 관계없이 리프레시 거부 메시지 하나로 응답합니다.
impl From<InvalidToken> for AppError {
    fn from(_: InvalidToken) -> Self {
        AppError::AuthenticationError(INVALID_REFRESH_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_reason_collapses_to_invalid() {
        let reasons = [
            SessionError::SignatureInvalid,
            SessionError::WrongTokenKind,
            SessionError::Revoked,
            SessionError::StoreUnavailable("timed out".to_string()),
        ];

        for reason in reasons {
            let invalid: InvalidToken = reason.into();
            assert_eq!(invalid.to_string(), "invalid token");
        }
    }

    #[test]
    fn test_subject_failures_stay_distinct() {
        match AppError::from(SessionError::SubjectNotFound) {
            AppError::NotFound(msg) => assert_eq!(msg, "User not found"),
            other => panic!("unexpected: {other:?}"),
        }

        match AppError::from(SessionError::SubjectInactive) {
            AppError::AuthenticationError(msg) => assert_eq!(msg, "account suspended/deactivated"),
            other => panic!("unexpected: {other:?}"),
        }

        match AppError::from(SessionError::Revoked) {
            AppError::AuthenticationError(msg) => assert_eq!(msg, "Invalid or expired refresh token"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_token_maps_to_unauthorized() {
        match AppError::from(InvalidToken) {
            AppError::AuthenticationError(msg) => assert_eq!(msg, INVALID_REFRESH_MESSAGE),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
