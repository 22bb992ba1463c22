//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! - [`tokens`] - Redis 권한 저장소 (`AuthorityStore`, `TokenRepository`)
//! - [`users`] - 사용자 레코드 조회 (`UserDirectory`, `UserRepository`)
//!
//! 각 리포지토리는 부트스트랩에서 명시적으로 생성되어 `Arc` 로 주입됩니다.

pub mod tokens;
pub mod users;
