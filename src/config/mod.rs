//! # Configuration Module
//!
//! 세션 코어와 HTTP 경계의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, Redis 관련 설정
//! - [`auth_config`] - JWT 서명 키, 토큰 유효 기간 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 세션 설정은 부트스트랩에서 한 번 생성되어 명시적으로 주입
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, SessionConfig};
//!
//! let env = Environment::current();
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! let session = SessionConfig::from_env();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_ACCESS_EXPIRES_IN="15m"
//! export JWT_REFRESH_EXPIRES_IN="7d"
//!
//! # 권한 저장소
//! export REDIS_URL="redis://localhost:6379"
//! export REDIS_TIMEOUT_MS="2000"
//!
//! # 사용자 레코드 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="session_auth_dev"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
