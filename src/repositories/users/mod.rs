//! 사용자 레코드 조회 계층
//!
//! [`UserDirectory`](user_repo::UserDirectory) 인터페이스와 MongoDB 기반
//! [`UserRepository`](user_repo::UserRepository) 구현을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserDirectory, UserRepository};
//!
//! let users: Arc<dyn UserDirectory> = Arc::new(UserRepository::new(database));
//! let user = users.find_by_id("65f1c0ffee...").await?;
//! ```

pub mod user_repo;

pub use user_repo::*;
