//! # Domain Models Module
//!
//! 영속성과 무관한 도메인 값 객체를 정의합니다.
//!
//! - [`token`] - 토큰 종류, 클레임, 권한 레코드, 토큰 쌍
//! - [`auth`] - 인증된 사용자, 인증 모드와 역할 요구사항

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
