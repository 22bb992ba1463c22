//! JWT 토큰 인코더/디코더
//!
//! 토큰 클레임의 서명과 파싱만 담당하는 무상태 컴포넌트입니다.
//! 권한 저장소는 전혀 모르며, 서명/만료가 유효한지만 판단합니다.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};
use uuid::Uuid;
use crate::config::SessionConfig;
use crate::domain::models::token::{TokenClaims, TokenKind};
use crate::errors::{AppResult, ErrorContext, SessionError};

/// 기간 문자열이 문법에 맞지 않을 때 사용하는 값 (15분)
pub const DEFAULT_DURATION_SECS: u64 = 900;

/// 허용하는 최대 기간 (365일). 이보다 길면 저장소가 만료 시간을 거부한다
pub const MAX_DURATION_SECS: u64 = 365 * 86_400;

/// 기간 문자열을 초 단위로 변환합니다.
///
/// 문법은 `<정수><단위>`, 단위는 `s`, `m`, `h`, `d` 입니다.
/// 빈 문자열, 숫자가 아닌 값, 알 수 없는 단위, 뒤에 붙은 잡음 등
/// 맞지 않는 입력은 모두 900초로 대체됩니다. 발급이 기간 설정 때문에
/// 실패해서는 안 되기 때문입니다. 365일을 넘는 값도 같은 방식으로 대체됩니다.
///
/// ```rust,ignore
/// assert_eq!(parse_duration("15m"), 900);
/// assert_eq!(parse_duration("7d"), 604800);
/// assert_eq!(parse_duration("30x"), 900);
/// ```
pub fn parse_duration(input: &str) -> u64 {
    let Some(unit) = input.chars().last() else {
        return DEFAULT_DURATION_SECS;
    };
    let digits = &input[..input.len() - unit.len_utf8()];

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return DEFAULT_DURATION_SECS;
    }

    let multiplier = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3_600,
        'd' => 86_400,
        _ => return DEFAULT_DURATION_SECS,
    };

    digits
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(multiplier))
        .filter(|secs| *secs <= MAX_DURATION_SECS)
        .unwrap_or(DEFAULT_DURATION_SECS)
}

/// 로그용 토큰 지문 (SHA-256 앞 12자리)
///
/// 원본 토큰은 로그에 남기지 않습니다.
pub fn fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    let hex = format!("{:x}", digest);
    hex[..12].to_string()
}

/// 서명된 토큰과 그 클레임
#[derive(Debug, Clone)]
pub struct EncodedToken {
    pub token: String,
    pub claims: TokenClaims,
    /// 권한 레코드 TTL로 쓰이는 남은 유효 기간 (초)
    pub ttl_seconds: u64,
}

/// HMAC-SHA256 JWT 코덱
///
/// 설정은 생성 시점에 주입되며, 키는 한 번만 만들어 재사용합니다.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: u64,
    refresh_ttl: u64,
}

impl TokenCodec {
    pub fn new(config: &SessionConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            access_ttl: parse_duration(&config.access_ttl),
            refresh_ttl: parse_duration(&config.refresh_ttl),
        }
    }

    /// 토큰 종류별로 설정된 유효 기간 (초)
    pub fn ttl_for(&self, kind: TokenKind) -> u64 {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }

    /// 클레임을 서명하여 토큰을 만듭니다.
    ///
    /// 발급 시각과 종류별 기간으로 만료 시각을 계산해 함께 서명합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    pub fn encode(&self, subject_id: &str, email: &str, role: &str, kind: TokenKind) -> AppResult<EncodedToken> {
        let ttl_seconds = self.ttl_for(kind);
        let now = Utc::now().timestamp();
        let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX - now);

        let claims = TokenClaims {
            sub: subject_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            kind,
            iat: now,
            exp: now.saturating_add(ttl),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .with_context(|| format!("{} 토큰 생성 실패", kind))?;

        Ok(EncodedToken { token, claims, ttl_seconds })
    }

    /// 서명을 확인하지 않고 클레임만 읽습니다.
    ///
    /// 절대 실패하지 않으며, 읽을 수 없는 토큰이면 `None` 입니다.
    /// 인가 판단에 사용해서는 안 됩니다.
    pub fn decode(&self, token: &str) -> Option<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .ok()
    }

    /// 서명과 만료를 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `SessionError::SignatureInvalid` - 만료, 잘못된 형식/서명/키.
    ///   폐기(`Revoked`)와는 구별됩니다.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, SessionError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패 [{}]: {:?}", fingerprint(token), e.kind());
                SessionError::SignatureInvalid
            })
    }
}
