//! # Domain Layer Module
//!
//! 세션 코어의 도메인 타입을 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 사용자 문서
//! ├── Models        - 토큰/인증 값 객체
//! └── DTOs          - HTTP 요청/응답
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, Redis, MongoDB)
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
