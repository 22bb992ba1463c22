//! 세션 발급기
//!
//! 액세스/리프레시 토큰 쌍을 만들고, 두 권한 레코드를 기록한 뒤
//! 사용자 세션 인덱스에 두 토큰을 연결합니다.

use std::sync::Arc;
use crate::domain::models::token::{AuthorityRecord, TokenKind, TokenPair};
use crate::errors::AppResult;
use crate::repositories::tokens::AuthorityStore;
use crate::services::auth::token_codec::{fingerprint, EncodedToken, TokenCodec};

/// 세션 인덱스 갱신 결과
///
/// 권한 레코드 쓰기는 필수이고 인덱스 갱신은 부가 작업입니다.
/// 인덱스 실패는 모든 기기 로그아웃만 약화시킬 뿐 개별 토큰 검증에는
/// 영향이 없으므로, 에러 대신 이 값으로 보고됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexUpdate {
    /// 두 토큰 모두 인덱스에 기록됨
    Recorded,
    /// 인덱스 기록 실패 (사유)
    Degraded(String),
}

impl IndexUpdate {
    pub fn is_recorded(&self) -> bool {
        matches!(self, IndexUpdate::Recorded)
    }
}

/// 발급 결과
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub tokens: TokenPair,
    pub index: IndexUpdate,
}

pub struct SessionIssuer {
    codec: Arc<TokenCodec>,
    store: Arc<dyn AuthorityStore>,
}

impl SessionIssuer {
    pub fn new(codec: Arc<TokenCodec>, store: Arc<dyn AuthorityStore>) -> Self {
        Self { codec, store }
    }

    /// 새 토큰 쌍을 발급합니다.
    ///
    /// 두 권한 레코드가 모두 기록된 경우에만 토큰을 돌려줍니다.
    /// 리프레시 레코드 기록이 실패하면 이미 기록된 액세스 레코드를
    /// 지운 뒤 에러를 전파합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    /// * `AppError::RedisError` - 권한 레코드 기록 실패 또는 시간 초과
    pub async fn issue(&self, subject_id: &str, email: &str, role: &str) -> AppResult<IssuedSession> {
        let access = self.codec.encode(subject_id, email, role, TokenKind::Access)?;
        let refresh = self.codec.encode(subject_id, email, role, TokenKind::Refresh)?;

        self.record(&access).await?;
        if let Err(e) = self.record(&refresh).await {
            let access_key = TokenKind::Access.authority_key(&access.token);
            if let Err(cleanup) = self.store.delete(&[access_key]).await {
                log::error!(
                    "발급 롤백 실패 - 액세스 레코드 [{}] 잔존: {}",
                    fingerprint(&access.token),
                    cleanup
                );
            }
            return Err(e);
        }

        let index = self.link(subject_id, &access.token, &refresh.token).await;

        log::info!(
            "세션 발급 완료 - subject: {}, access: [{}], refresh: [{}]",
            subject_id,
            fingerprint(&access.token),
            fingerprint(&refresh.token)
        );

        Ok(IssuedSession {
            tokens: TokenPair {
                access_token: access.token,
                refresh_token: refresh.token,
                expires_in: access.ttl_seconds,
            },
            index,
        })
    }

    async fn record(&self, encoded: &EncodedToken) -> AppResult<()> {
        let key = encoded.claims.kind.authority_key(&encoded.token);
        let record = AuthorityRecord::from(&encoded.claims);
        self.store.put(&key, &record, encoded.ttl_seconds).await
    }

    async fn link(&self, subject_id: &str, access_token: &str, refresh_token: &str) -> IndexUpdate {
        for token in [access_token, refresh_token] {
            if let Err(e) = self.store.add_to_index(subject_id, token).await {
                log::warn!(
                    "세션 인덱스 갱신 실패 (모든 기기 로그아웃 약화) - subject: {}, 에러: {}",
                    subject_id,
                    e
                );
                return IndexUpdate::Degraded(e.to_string());
            }
        }
        IndexUpdate::Recorded
    }
}
