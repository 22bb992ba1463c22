//! Users Entity Module
//!
//! 사용자 문서(`User`)와 세션 코어가 사용하는 조회 결과(`UserRecord`)를 정의합니다.

pub mod user;

pub use user::*;
