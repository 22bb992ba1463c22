//! JWT 토큰 권한 저장소 모듈
//!
//! 서명된 토큰마다 서버측 권한 레코드를 두어, 암호학적 만료 전에도
//! 토큰을 폐기할 수 있게 합니다. 레코드가 존재하는 것이 곧 유효함을 뜻합니다.
//!
//! # Features
//!
//! - **권한 레코드**: `access_token:<token>` / `refresh_token:<token>`, TTL 자동 만료
//! - **세션 인덱스**: `user_tokens:<subjectId>` 집합, 모든 기기 로그아웃용
//! - **원자적 소비**: `take` 로 리프레시 토큰을 한 번만 사용
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::tokens::{AuthorityStore, TokenRepository};
//!
//! let store: Arc<dyn AuthorityStore> = Arc::new(TokenRepository::new(redis));
//! store.put("refresh_token:eyJ...", &record, 604800).await?;
//! let consumed = store.take("refresh_token:eyJ...").await?;
//! ```

pub mod token_repository;
#[cfg(test)]
pub mod memory;

pub use token_repository::*;
