//! # Authentication Configuration Module
//!
//! JWT 서명 키와 토큰 종류별 유효 기간 등 세션 발급에 필요한 설정을 관리합니다.
//!
//! 환경 변수에서 값을 읽는 [`JwtConfig`] 와, 부트스트랩 시점에 한 번 만들어져
//! 각 컴포넌트에 명시적으로 주입되는 [`SessionConfig`] 로 구성됩니다.
//! 전역 지연 초기화 상태는 두지 않습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ACCESS_EXPIRES_IN="15m"    # <정수><s|m|h|d>
//! export JWT_REFRESH_EXPIRES_IN="7d"
//! ```
//!
//! 기간 문자열이 문법에 맞지 않으면 발급이 실패하지 않고 900초로 대체됩니다.
//! (파싱 규칙은 `services::auth::token_codec::parse_duration` 참고)
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::SessionConfig;
//!
//! let config = SessionConfig::from_env();
//! let codec = TokenCodec::new(&config);
//! ```

use std::env;
use crate::config::Environment;

/// 액세스 토큰 기본 유효 기간
pub const DEFAULT_ACCESS_TTL: &str = "15m";

/// 리프레시 토큰 기본 유효 기간
pub const DEFAULT_REFRESH_TTL: &str = "7d";

/// JWT 관련 환경 변수 리더
///
/// ## 권장 설정값
///
/// - **개발**: 액세스 토큰 1시간, 리프레시 토큰 7일
/// - **프로덕션**: 액세스 토큰 15분, 리프레시 토큰 7일
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # 보안 요구사항
    ///
    /// - 최소 256비트 (32바이트) 길이
    /// - 환경별로 다른 키 사용
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용합니다.
    /// 개발 환경에서만 안전하며, 프로덕션에서는 에러 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                if Environment::current() == Environment::Production {
                    log::error!("JWT_SECRET not set in production, using insecure default!");
                } else {
                    log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                }
                "your-secret-key".to_string()
            })
    }

    /// 액세스 토큰 유효 기간 문자열 (`JWT_ACCESS_EXPIRES_IN`, 기본값 "15m")
    pub fn access_expires_in() -> String {
        env::var("JWT_ACCESS_EXPIRES_IN").unwrap_or_else(|_| DEFAULT_ACCESS_TTL.to_string())
    }

    /// 리프레시 토큰 유효 기간 문자열 (`JWT_REFRESH_EXPIRES_IN`, 기본값 "7d")
    ///
    /// 리프레시 토큰은 액세스 토큰을 갱신하는 데만 쓰이므로 훨씬 긴 기간을 가집니다.
    /// 탈취 시 장기간 악용될 수 있으므로 갱신 때마다 순환(rotation)됩니다.
    pub fn refresh_expires_in() -> String {
        env::var("JWT_REFRESH_EXPIRES_IN").unwrap_or_else(|_| DEFAULT_REFRESH_TTL.to_string())
    }
}

/// 세션 코어 설정
///
/// 서명 키와 토큰 종류별 기간 문자열을 한 곳에 묶은 값입니다.
/// 프로세스 부트스트랩에서 생성해 코덱에 넘기며, 테스트에서는 직접 구성합니다.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 서명 키
    pub secret: String,
    /// 액세스 토큰 기간 문자열 (예: "15m")
    pub access_ttl: String,
    /// 리프레시 토큰 기간 문자열 (예: "7d")
    pub refresh_ttl: String,
}

impl SessionConfig {
    /// 주어진 서명 키와 기본 기간(15분 / 7일)으로 설정을 만듭니다.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_ttl: DEFAULT_ACCESS_TTL.to_string(),
            refresh_ttl: DEFAULT_REFRESH_TTL.to_string(),
        }
    }

    /// 환경 변수에서 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        Self {
            secret: JwtConfig::secret(),
            access_ttl: JwtConfig::access_expires_in(),
            refresh_ttl: JwtConfig::refresh_expires_in(),
        }
    }

    /// 기간 문자열을 덮어씁니다.
    pub fn with_durations(mut self, access_ttl: impl Into<String>, refresh_ttl: impl Into<String>) -> Self {
        self.access_ttl = access_ttl.into();
        self.refresh_ttl = refresh_ttl.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::new("secret");

        assert_eq!(config.secret, "secret");
        assert_eq!(config.access_ttl, "15m");
        assert_eq!(config.refresh_ttl, "7d");
    }

    #[test]
    fn test_session_config_with_durations() {
        let config = SessionConfig::new("secret").with_durations("30s", "2h");

        assert_eq!(config.access_ttl, "30s");
        assert_eq!(config.refresh_ttl, "2h");
    }

    #[test]
    fn test_jwt_config_defaults() {
        if env::var("JWT_ACCESS_EXPIRES_IN").is_err() {
            assert_eq!(JwtConfig::access_expires_in(), "15m");
        }

        if env::var("JWT_REFRESH_EXPIRES_IN").is_err() {
            assert_eq!(JwtConfig::refresh_expires_in(), "7d");
        }
    }
}
