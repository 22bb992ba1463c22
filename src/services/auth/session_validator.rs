//! 세션 검증기
//!
//! 토큰이 "지금 유효한가"를 판단합니다. 서명/만료 검증을 통과하고,
//! 요청한 종류와 일치하며, 권한 레코드가 살아 있어야 유효합니다.
//! 저장소 장애 시에는 거부합니다 (fail closed).

use std::sync::Arc;
use crate::domain::models::token::{TokenClaims, TokenKind};
use crate::errors::{InvalidToken, SessionError};
use crate::repositories::tokens::AuthorityStore;
use crate::services::auth::token_codec::{fingerprint, TokenCodec};

pub struct SessionValidator {
    codec: Arc<TokenCodec>,
    store: Arc<dyn AuthorityStore>,
}

impl SessionValidator {
    pub fn new(codec: Arc<TokenCodec>, store: Arc<dyn AuthorityStore>) -> Self {
        Self { codec, store }
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// 실패 이유는 호출자에게 드러나지 않습니다.
    pub async fn validate(&self, token: &str, kind: TokenKind) -> Result<TokenClaims, InvalidToken> {
        self.check(token, kind).await.map_err(|reason| {
            log::debug!("{} 토큰 거부 [{}]: {}", kind, fingerprint(token), reason);
            InvalidToken
        })
    }

    /// 실패 이유를 구분하는 내부 검증
    pub(crate) async fn check(&self, token: &str, kind: TokenKind) -> Result<TokenClaims, SessionError> {
        let claims = self.codec.verify(token)?;

        if claims.kind != kind {
            return Err(SessionError::WrongTokenKind);
        }

        let record = self
            .store
            .get(&kind.authority_key(token))
            .await
            .map_err(|e| {
                log::warn!("권한 저장소 조회 실패, 토큰 거부: {}", e);
                SessionError::StoreUnavailable(e.to_string())
            })?
            .ok_or(SessionError::Revoked)?;

        // 레코드 주체와 토큰 주체가 다르면 레코드를 신뢰하지 않는다
        if record.subject_id != claims.sub {
            log::warn!(
                "권한 레코드 주체 불일치 [{}] - token: {}, record: {}",
                fingerprint(token),
                claims.sub,
                record.subject_id
            );
            return Err(SessionError::Revoked);
        }

        Ok(claims)
    }
}
