use serde::Serialize;
use crate::domain::dto::UserResponse;
use crate::domain::models::token::TokenPair;

/// 토큰 발급 응답 DTO (로그인, 갱신 공용)
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
    pub user: UserResponse,
}

impl RefreshResponse {
    pub fn new(tokens: TokenPair, user: UserResponse) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: "Bearer",
            expires_in: tokens.expires_in,
            user,
        }
    }
}

/// 모든 기기 로그아웃 응답 DTO
#[derive(Debug, Serialize)]
pub struct RevokeAllResponse {
    /// 삭제된 권한 레코드 수
    pub revoked: usize,
}
