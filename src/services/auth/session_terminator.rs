//! 세션 종료기
//!
//! 권한 레코드를 지워 토큰을 만료 전에 무효화합니다.
//! 모든 삭제는 멱등이며, 모르는 토큰이나 이미 폐기된 토큰도 성공으로 처리합니다.

use std::sync::Arc;
use crate::domain::models::token::TokenKind;
use crate::errors::AppResult;
use crate::repositories::tokens::AuthorityStore;
use crate::services::auth::token_codec::fingerprint;

pub struct SessionTerminator {
    store: Arc<dyn AuthorityStore>,
}

impl SessionTerminator {
    pub fn new(store: Arc<dyn AuthorityStore>) -> Self {
        Self { store }
    }

    /// 토큰 하나의 권한 레코드를 삭제합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::RedisError` - 저장소 삭제 실패 (폐기 여부를 보장할 수 없음)
    pub async fn revoke(&self, token: &str, kind: TokenKind) -> AppResult<()> {
        let removed = self.store.delete(&[kind.authority_key(token)]).await?;
        log::info!("{} 토큰 폐기 [{}] - 삭제된 레코드: {}", kind, fingerprint(token), removed);
        Ok(())
    }

    /// 액세스/리프레시 토큰 쌍을 한 번에 폐기합니다. (로그아웃)
    pub async fn revoke_pair(&self, access_token: &str, refresh_token: &str) -> AppResult<()> {
        let keys = [
            TokenKind::Access.authority_key(access_token),
            TokenKind::Refresh.authority_key(refresh_token),
        ];
        let removed = self.store.delete(&keys).await?;
        log::info!(
            "토큰 쌍 폐기 - access: [{}], refresh: [{}], 삭제된 레코드: {}",
            fingerprint(access_token),
            fingerprint(refresh_token),
            removed
        );
        Ok(())
    }

    /// 사용자의 모든 세션을 폐기합니다. (모든 기기 로그아웃)
    ///
    /// 세션 인덱스의 모든 토큰에 대해 두 종류의 레코드를 지운 뒤 인덱스를 삭제합니다.
    /// 세션이 없으면 아무것도 하지 않습니다.
    ///
    /// # Returns
    ///
    /// 실제로 삭제된 (만료되지 않았던) 권한 레코드 수
    pub async fn revoke_all(&self, subject_id: &str) -> AppResult<usize> {
        let members = self.store.members_of_index(subject_id).await?;
        if members.is_empty() {
            log::debug!("폐기할 세션 없음 - subject: {}", subject_id);
            return Ok(0);
        }

        // 인덱스에는 종류 구분 없이 토큰 문자열만 있으므로 두 키를 모두 지운다
        let keys: Vec<String> = members
            .iter()
            .flat_map(|token| {
                [
                    TokenKind::Access.authority_key(token),
                    TokenKind::Refresh.authority_key(token),
                ]
            })
            .collect();

        let removed = self.store.delete(&keys).await?;
        self.store.delete_index(subject_id).await?;

        log::info!(
            "모든 세션 폐기 - subject: {}, 인덱스 토큰: {}, 삭제된 레코드: {}",
            subject_id,
            members.len(),
            removed
        );
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::errors::{AppError, InvalidToken};
    use crate::repositories::tokens::memory::{Faults, MemoryAuthorityStore};
    use crate::services::auth::session_issuer::SessionIssuer;
    use crate::services::auth::session_validator::SessionValidator;
    use crate::services::auth::token_codec::TokenCodec;

    struct Fixture {
        store: Arc<MemoryAuthorityStore>,
        issuer: SessionIssuer,
        validator: SessionValidator,
        terminator: SessionTerminator,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryAuthorityStore::new());
        let codec = Arc::new(TokenCodec::new(&SessionConfig::new("secret")));
        Fixture {
            issuer: SessionIssuer::new(codec.clone(), store.clone()),
            validator: SessionValidator::new(codec, store.clone()),
            terminator: SessionTerminator::new(store.clone()),
            store,
        }
    }

    #[actix_web::test]
    async fn test_revoke_invalidates_token() {
        let f = fixture();
        let pair = f.issuer.issue("u1", "u1@x.com", "USER").await.unwrap().tokens;

        f.terminator.revoke(&pair.access_token, TokenKind::Access).await.unwrap();

        assert_eq!(f.validator.validate(&pair.access_token, TokenKind::Access).await, Err(InvalidToken));
        assert!(f.validator.validate(&pair.refresh_token, TokenKind::Refresh).await.is_ok());
    }

    #[actix_web::test]
    async fn test_revoke_is_idempotent() {
        let f = fixture();
        let pair = f.issuer.issue("u1", "u1@x.com", "USER").await.unwrap().tokens;

        f.terminator.revoke(&pair.refresh_token, TokenKind::Refresh).await.unwrap();
        f.terminator.revoke(&pair.refresh_token, TokenKind::Refresh).await.unwrap();
        f.terminator.revoke("never-issued", TokenKind::Access).await.unwrap();
    }

    #[actix_web::test]
    async fn test_revoke_pair_removes_both_records() {
        let f = fixture();
        let pair = f.issuer.issue("u1", "u1@x.com", "USER").await.unwrap().tokens;

        f.terminator.revoke_pair(&pair.access_token, &pair.refresh_token).await.unwrap();

        assert_eq!(f.store.record_count(), 0);
        assert_eq!(f.validator.validate(&pair.access_token, TokenKind::Access).await, Err(InvalidToken));
        assert_eq!(f.validator.validate(&pair.refresh_token, TokenKind::Refresh).await, Err(InvalidToken));
    }

    #[actix_web::test]
    async fn test_revoke_all_invalidates_every_session() {
        let f = fixture();
        let first = f.issuer.issue("u1", "u1@x.com", "USER").await.unwrap().tokens;
        let second = f.issuer.issue("u1", "u1@x.com", "USER").await.unwrap().tokens;
        let other = f.issuer.issue("u2", "u2@x.com", "USER").await.unwrap().tokens;

        let removed = f.terminator.revoke_all("u1").await.unwrap();

        assert_eq!(removed, 4);
        assert!(!f.store.has_index("u1"));
        for pair in [&first, &second] {
            assert_eq!(f.validator.validate(&pair.access_token, TokenKind::Access).await, Err(InvalidToken));
            assert_eq!(f.validator.validate(&pair.refresh_token, TokenKind::Refresh).await, Err(InvalidToken));
        }
        assert!(f.validator.validate(&other.access_token, TokenKind::Access).await.is_ok());
    }

    #[actix_web::test]
    async fn test_revoke_all_without_sessions_is_noop() {
        let f = fixture();

        assert_eq!(f.terminator.revoke_all("nobody").await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_revoke_all_tolerates_expired_members() {
        let f = fixture();
        let pair = f.issuer.issue("u1", "u1@x.com", "USER").await.unwrap().tokens;
        f.store.expire(&format!("access_token:{}", pair.access_token));

        let removed = f.terminator.revoke_all("u1").await.unwrap();

        assert_eq!(removed, 1);
        assert!(!f.store.has_index("u1"));
    }

    #[actix_web::test]
    async fn test_store_failure_is_reported() {
        let f = fixture();
        let pair = f.issuer.issue("u1", "u1@x.com", "USER").await.unwrap().tokens;
        f.store.set_faults(Faults { deletes: true, ..Faults::default() });

        let result = f.terminator.revoke(&pair.access_token, TokenKind::Access).await;

        assert!(matches!(result, Err(AppError::RedisError(_))));
    }
}
