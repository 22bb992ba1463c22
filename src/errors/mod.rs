//! 에러 타입 모듈
//!
//! - [`errors`] - HTTP 응답으로 변환되는 애플리케이션 에러 (`AppError`)
//! - [`session_error`] - 세션 검증/순환 실패 분류 (`SessionError`, `InvalidToken`)

pub mod errors;
pub mod session_error;

pub use errors::*;
pub use session_error::*;
