//! 세션 인증 코어
//!
//! 토큰 발급, 검증, 폐기, 순환을 담당하는 컴포넌트들을 제공합니다.
//! 모든 컴포넌트는 부트스트랩에서 한 번 생성되어 `Arc` 로 주입되며,
//! 외부 저장소 외에 프로세스 내 공유 가변 상태를 두지 않습니다.
//!
//! # Components
//!
//! - [`TokenCodec`] - JWT 서명/검증, 기간 문자열 파싱
//! - [`SessionIssuer`] - 토큰 쌍 발급과 권한 레코드 기록
//! - [`SessionValidator`] - 서명 + 종류 + 권한 레코드 검증 (실패 이유 비공개)
//! - [`SessionTerminator`] - 단일/쌍/전체 세션 폐기
//! - [`RotationCoordinator`] - 리프레시 토큰 1회 사용과 새 쌍 발급
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::SessionServices;
//!
//! let services = SessionServices::new(&SessionConfig::from_env(), store, users, credentials);
//! let issued = services.issuer.issue("u1", "u1@x.com", "USER").await?;
//! let claims = services.validator.validate(&issued.tokens.access_token, TokenKind::Access).await?;
//! ```

pub mod token_codec;
pub mod session_issuer;
pub mod session_validator;
pub mod session_terminator;
pub mod rotation;

pub use token_codec::*;
pub use session_issuer::*;
pub use session_validator::*;
pub use session_terminator::*;
pub use rotation::*;

use std::sync::Arc;
use crate::config::SessionConfig;
use crate::repositories::tokens::AuthorityStore;
use crate::repositories::users::{CredentialVerifier, UserDirectory};

/// 세션 컴포넌트 묶음
///
/// 핸들러와 미들웨어는 `web::Data<SessionServices>` 로 이 값을 공유합니다.
#[derive(Clone)]
pub struct SessionServices {
    pub codec: Arc<TokenCodec>,
    pub store: Arc<dyn AuthorityStore>,
    pub issuer: Arc<SessionIssuer>,
    pub validator: Arc<SessionValidator>,
    pub terminator: Arc<SessionTerminator>,
    pub rotation: Arc<RotationCoordinator>,
    /// 로그인 자격 증명 확인 (첫 세션 발급용)
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl SessionServices {
    pub fn new(
        config: &SessionConfig,
        store: Arc<dyn AuthorityStore>,
        users: Arc<dyn UserDirectory>,
        credentials: Arc<dyn CredentialVerifier>,
    ) -> Self {
        let codec = Arc::new(TokenCodec::new(config));
        let issuer = Arc::new(SessionIssuer::new(codec.clone(), store.clone()));
        let validator = Arc::new(SessionValidator::new(codec.clone(), store.clone()));
        let terminator = Arc::new(SessionTerminator::new(store.clone()));
        let rotation = Arc::new(RotationCoordinator::new(
            validator.clone(),
            issuer.clone(),
            store.clone(),
            users,
        ));

        Self { codec, store, issuer, validator, terminator, rotation, credentials }
    }
}
