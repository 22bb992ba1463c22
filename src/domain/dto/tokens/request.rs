use serde::Deserialize;

/// 로그인 요청 DTO
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 토큰 갱신 요청 DTO
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// 로그아웃 요청 DTO
///
/// 액세스 토큰은 Authorization 헤더에서 추출합니다.
/// 함께 보낸 리프레시 토큰이 있으면 같은 쌍으로 폐기합니다.
#[derive(Debug, Default, Deserialize)]
pub struct LogoutRequest {
    #[serde(default)]
    pub refresh_token: Option<String>,
}
