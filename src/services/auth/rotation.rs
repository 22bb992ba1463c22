//! 리프레시 토큰 순환
//!
//! 리프레시 토큰을 사용하는 순간 무효화하고 새 토큰 쌍을 발급합니다.
//!
//! ```text
//! PRESENTED ──검증──▶ VALIDATED ──소비──▶ ROTATED ──발급──▶ ISSUED
//!     │                   │                  │
//!     └───────────────────┴──────────────────┴──────▶ REJECTED
//! ```
//!
//! 비활성 계정으로 거부되는 경우에도 제시된 리프레시 토큰의 레코드는 지웁니다.
//! 계정이 다시 활성화되었을 때 예전 토큰이 재사용되지 않도록 하기 위함입니다.

use std::fmt;
use std::sync::Arc;
use crate::domain::dto::UserResponse;
use crate::domain::models::token::{TokenKind, TokenPair};
use crate::errors::{AppError, AppResult, SessionError};
use crate::repositories::tokens::AuthorityStore;
use crate::repositories::users::UserDirectory;
use crate::services::auth::session_issuer::SessionIssuer;
use crate::services::auth::session_validator::SessionValidator;
use crate::services::auth::token_codec::fingerprint;

/// 순환 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationStage {
    Presented,
    Validated,
    Rotated,
    Issued,
    Rejected,
}

impl fmt::Display for RotationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotationStage::Presented => "PRESENTED",
            RotationStage::Validated => "VALIDATED",
            RotationStage::Rotated => "ROTATED",
            RotationStage::Issued => "ISSUED",
            RotationStage::Rejected => "REJECTED",
        };
        f.write_str(name)
    }
}

/// 순환 성공 결과
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub tokens: TokenPair,
    pub user: UserResponse,
}

pub struct RotationCoordinator {
    validator: Arc<SessionValidator>,
    issuer: Arc<SessionIssuer>,
    store: Arc<dyn AuthorityStore>,
    users: Arc<dyn UserDirectory>,
}

impl RotationCoordinator {
    pub fn new(
        validator: Arc<SessionValidator>,
        issuer: Arc<SessionIssuer>,
        store: Arc<dyn AuthorityStore>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self { validator, issuer, store, users }
    }

    /// 리프레시 토큰으로 새 토큰 쌍을 발급합니다.
    ///
    /// 같은 리프레시 토큰은 한 번만 성공합니다. 동시에 같은 토큰으로 들어온
    /// 요청은 원자적 소비(`take`)에서 하나만 통과합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError("Invalid or expired refresh token")` - 검증 실패, 이미 사용됨
    /// * `AppError::NotFound("User not found")` - 토큰 주체가 없음
    /// * `AppError::AuthenticationError("account suspended/deactivated")` - 비활성 계정
    /// * `AppError::RedisError` / `AppError::DatabaseError` - 저장소 장애
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<RefreshOutcome> {
        let tag = fingerprint(refresh_token);
        log::debug!("토큰 순환 [{}] {}", tag, RotationStage::Presented);

        let claims = match self.validator.validate(refresh_token, TokenKind::Refresh).await {
            Ok(claims) => claims,
            Err(invalid) => {
                log::warn!("토큰 순환 [{}] {} - 유효하지 않은 리프레시 토큰", tag, RotationStage::Rejected);
                return Err(invalid.into());
            }
        };
        log::debug!("토큰 순환 [{}] {} - subject: {}", tag, RotationStage::Validated, claims.sub);

        let Some(user) = self.users.find_by_id(&claims.sub).await? else {
            log::warn!("토큰 순환 [{}] {} - 사용자 없음: {}", tag, RotationStage::Rejected, claims.sub);
            return Err(SessionError::SubjectNotFound.into());
        };

        let key = TokenKind::Refresh.authority_key(refresh_token);

        if !user.is_active() {
            // 거부하더라도 제시된 토큰은 재사용할 수 없게 만든다
            if let Err(e) = self.store.delete(&[key]).await {
                log::error!("비활성 계정의 리프레시 레코드 삭제 실패 [{}]: {}", tag, e);
            }
            log::warn!(
                "토큰 순환 [{}] {} - 계정 상태: {}",
                tag,
                RotationStage::Rejected,
                user.status
            );
            return Err(SessionError::SubjectInactive.into());
        }

        if !self.store.take(&key).await? {
            log::warn!("토큰 순환 [{}] {} - 이미 사용된 리프레시 토큰", tag, RotationStage::Rejected);
            return Err(AppError::from(SessionError::Revoked));
        }
        log::debug!("토큰 순환 [{}] {}", tag, RotationStage::Rotated);

        let issued = self.issuer.issue(&claims.sub, &user.email, &user.role).await?;
        log::info!("토큰 순환 [{}] {} - subject: {}", tag, RotationStage::Issued, claims.sub);

        Ok(RefreshOutcome {
            tokens: issued.tokens,
            user: UserResponse::from(user),
        })
    }
}
