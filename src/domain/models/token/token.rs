//! JWT 인증 토큰 구조체 및 페어링 된 세트
//!
//! RFC 7519 JWT 표준 클레임, 서버측 권한 레코드, 그리고 2개의 용도별 토큰을
//! 페어링 한 정보를 표시합니다.
use std::fmt;
use serde::{Deserialize, Serialize};

/// 토큰 용도
///
/// 클레임에 함께 서명되며, 검증 시 기대한 종류와 다르면 거부됩니다.
/// 권한 저장소의 키 네임스페이스도 이 값으로 결정됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// API 호출용 단기 토큰
    Access,
    /// 새 토큰 쌍 발급 전용 장기 토큰
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }

    /// 권한 저장소 키 접두사
    pub fn key_prefix(&self) -> &'static str {
        match self {
            TokenKind::Access => "access_token",
            TokenKind::Refresh => "refresh_token",
        }
    }

    /// `access_token:<token>` / `refresh_token:<token>` 형식의 권한 레코드 키
    pub fn authority_key(&self, token: &str) -> String {
        format!("{}:{}", self.key_prefix(), token)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 서명 이후에는 변경되지 않습니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `email`: 사용자 이메일
/// - `role`: 사용자 역할
/// - `kind`: 토큰 용도 (access / refresh)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 ID (같은 초에 발급된 토큰끼리도 문자열이 달라지도록)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub kind: TokenKind,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// 권한 레코드
///
/// `access_token:<token>` / `refresh_token:<token>` 키에 JSON으로 저장되며,
/// 레코드가 존재하는 동안만 토큰이 유효합니다. TTL은 남은 유효 기간과 같습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorityRecord {
    pub subject_id: String,
    pub email: String,
    pub role: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl From<&TokenClaims> for AuthorityRecord {
    fn from(claims: &TokenClaims) -> Self {
        Self {
            subject_id: claims.sub.clone(),
            email: claims.email.clone(),
            role: claims.role.clone(),
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

/// JWT 토큰 쌍 구조체
///
/// 클라이언트에게 전달되는 토큰 집합입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: u64,
}
