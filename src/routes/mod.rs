//! API 라우트 설정 모듈
//!
//! 세션 토큰 라우트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | `GET` | `/health` | 불필요 |
//! | `POST` | `/auth/login` | 불필요 (이메일/비밀번호 본문) |
//! | `POST` | `/auth/refresh` | 불필요 (리프레시 토큰 본문) |
//! | `POST` | `/auth/logout` | Bearer 액세스 토큰 |
//! | `POST` | `/auth/revoke-all` | Bearer 액세스 토큰 |
//! | `GET` | `/auth/session` | Bearer 액세스 토큰 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(session_services))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers::token_handlers::configure_token_routes;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
    configure_token_routes(cfg);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "session_auth_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "tokens": "HS256 JWT + revocation records"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "tokens": "HS256 JWT + revocation records"
        }
    }))
}
