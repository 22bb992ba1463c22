//! 세션 인증 서비스 백엔드
//!
//! 서명된 JWT 액세스/리프레시 토큰 쌍을 발급하고, Redis 권한 저장소에
//! 토큰별 레코드를 두어 암호학적 만료 전에도 폐기할 수 있게 하는 세션 코어입니다.
//!
//! # Features
//!
//! - **발급**: 토큰 쌍 서명, 권한 레코드 기록, 사용자 세션 인덱스
//! - **검증**: 서명 + 토큰 종류 + 권한 레코드, 실패 이유는 비공개
//! - **폐기**: 단일 토큰, 토큰 쌍, 모든 기기
//! - **순환**: 리프레시 토큰 1회 사용, 비활성 계정 거부
//! - **MongoDB**: 사용자 레코드 조회
//! - **Redis**: 권한 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /auth/*, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Handlers + MW   │ ← Bearer 파싱, 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SessionServices │ ← 발급/검증/폐기/순환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← AuthorityStore, UserDirectory
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Redis + MongoDB │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use session_auth_backend::services::auth::SessionServices;
//! use session_auth_backend::domain::models::token::TokenKind;
//!
//! let services = SessionServices::new(&SessionConfig::from_env(), store, users, credentials);
//!
//! let issued = services.issuer.issue("u1", "u1@x.com", "USER").await?;
//! let claims = services.validator.validate(&issued.tokens.access_token, TokenKind::Access).await?;
//! let rotated = services.rotation.refresh(&issued.tokens.refresh_token).await?;
//! ```

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
