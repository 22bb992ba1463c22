//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 `web::Data<SessionServices>` 로 주입된 세션 컴포넌트를 호출하고,
//! 실패는 `AppError` 로 반환하여 `ResponseError` 가 HTTP 응답으로 변환하게 합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) + AuthMiddleware           ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   SessionServices - 발급/검증/폐기/순환           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   AuthorityStore (Redis), UserDirectory (MongoDB) ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`token_handlers`**: 세션 토큰 엔드포인트
//!   - 토큰 갱신 (`POST /auth/refresh`)
//!   - 로그아웃 (`POST /auth/logout`)
//!   - 모든 기기 로그아웃 (`POST /auth/revoke-all`)
//!   - 현재 세션 조회 (`GET /auth/session`)
//!
//! ## 에러 응답
//!
//! ```json
//! { "error": "Invalid or expired refresh token" }
//! ```
//!
//! 저장소/내부 오류는 세부 내용 없이 `"Internal server error"` 로 응답합니다.

pub mod token_handlers;
