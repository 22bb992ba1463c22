//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속성 엔티티)
//! ├── models/       ← 토큰, 인증 값 객체
//! └── dto/          ← 요청/응답 객체
//! ```

pub mod users;

pub use users::*;
