//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! - [`auth`] - 세션 토큰 발급, 검증, 폐기, 순환
//!
//! 서비스는 전역 싱글톤이 아니라 부트스트랩에서 생성되는 값입니다.
//!
//! ```rust,ignore
//! use crate::services::auth::SessionServices;
//!
//! let services = SessionServices::new(&config, store, users, credentials);
//! ```

pub mod auth;
