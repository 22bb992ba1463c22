//! 세션 토큰 API 핸들러
//!
//! - `POST /auth/login` - 이메일/비밀번호로 첫 토큰 쌍 발급
//! - `POST /auth/refresh` - 리프레시 토큰 순환 (인증 불필요)
//! - `POST /auth/logout` - 현재 세션 폐기
//! - `POST /auth/revoke-all` - 모든 기기 로그아웃
//! - `GET /auth/session` - 현재 액세스 토큰의 사용자 정보

use actix_web::{get, post, web, HttpResponse};
use crate::domain::dto::{
    ApiResponse, LoginRequest, LogoutRequest, RefreshRequest, RefreshResponse, RevokeAllResponse, UserResponse,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::TokenKind;
use crate::errors::{AppError, SessionError, INVALID_CREDENTIALS_MESSAGE};
use crate::middlewares::AuthMiddleware;
use crate::services::auth::SessionServices;

/// 로그인 API 핸들러
///
/// 자격 증명이 맞고 계정이 ACTIVE일 때만 새 토큰 쌍을 발급합니다.
#[post("/login")]
pub async fn login_handler(
    services: web::Data<SessionServices>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { email, password } = payload.into_inner();

    let user = services
        .credentials
        .verify(&email, &password)
        .await?
        .ok_or_else(|| {
            log::warn!("로그인 실패 - 사용자: {}", email);
            AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string())
        })?;

    if !user.is_active() {
        log::warn!("비활성 계정 로그인 거부 - ID: {}, 상태: {}", user.id, user.status);
        return Err(SessionError::SubjectInactive.into());
    }

    log::info!("로컬 로그인 - 사용자: {}, ID: {}", user.email, user.id);

    let issued = services.issuer.issue(&user.id, &user.email, &user.role).await?;
    let response = RefreshResponse::new(issued.tokens, UserResponse::from(user));

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 토큰 갱신 API 핸들러
///
/// 제시된 리프레시 토큰은 이 호출로 소비되며 다시 사용할 수 없습니다.
#[post("/refresh")]
pub async fn refresh_token_handler(
    services: web::Data<SessionServices>,
    payload: web::Json<RefreshRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = services.rotation.refresh(&payload.refresh_token).await?;
    let response = RefreshResponse::new(outcome.tokens, outcome.user);

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 로그아웃 API 핸들러
///
/// 요청에 사용된 액세스 토큰을 폐기합니다. 본문에 리프레시 토큰이 있고
/// 같은 사용자의 것이라면 함께 폐기합니다.
#[post("/logout", wrap = "AuthMiddleware::required()")]
pub async fn logout_handler(
    services: web::Data<SessionServices>,
    user: AuthenticatedUser,
    payload: Option<web::Json<LogoutRequest>>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = payload
        .and_then(|body| body.into_inner().refresh_token)
        .filter(|token| !token.is_empty());

    let terminator = &services.terminator;
    match refresh_token {
        Some(refresh) if owned_by(&services, &refresh, &user.user_id) => {
            terminator.revoke_pair(&user.access_token, &refresh).await?;
        }
        Some(_) => {
            log::warn!("다른 사용자의 리프레시 토큰으로 로그아웃 시도 - user_id: {}", user.user_id);
            terminator.revoke(&user.access_token, TokenKind::Access).await?;
        }
        None => {
            terminator.revoke(&user.access_token, TokenKind::Access).await?;
        }
    }

    log::info!("사용자 로그아웃 성공 - user_id: {}", user.user_id);
    Ok(HttpResponse::Ok().json(ApiResponse::ok_message("로그아웃이 성공적으로 처리되었습니다")))
}

/// 모든 세션 강제 종료 API
#[post("/revoke-all", wrap = "AuthMiddleware::required()")]
pub async fn revoke_all_tokens_handler(
    services: web::Data<SessionServices>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let revoked = services.terminator.revoke_all(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(RevokeAllResponse { revoked })))
}

/// 현재 세션 정보 조회 API
#[get("/session", wrap = "AuthMiddleware::required()")]
pub async fn current_session_handler(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(user))
}

/// 리프레시 토큰의 주체가 주어진 사용자인지 확인합니다. (서명 검증 없음)
fn owned_by(services: &SessionServices, refresh_token: &str, user_id: &str) -> bool {
    services.codec
        .decode(refresh_token)
        .is_some_and(|claims| claims.sub == user_id && claims.kind == TokenKind::Refresh)
}

/// 라우터 설정 함수
pub fn configure_token_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(login_handler)
            .service(refresh_token_handler)
            .service(logout_handler)
            .service(revoke_all_tokens_handler)
            .service(current_session_handler)
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, web, App};
    use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
    use crate::domain::entities::users::UserStatus;
    use crate::services::auth::test_support::TestSession;
    use super::*;

    macro_rules! app {
        ($t:expr) => {
            init_service(
                App::new()
                    .app_data(web::Data::new($t.services.clone()))
                    .configure(configure_token_routes),
            )
            .await
        };
    }

    fn login_request(email: &str, password: &str) -> TestRequest {
        TestRequest::post()
            .uri("/auth/login")
            .set_json(serde_json::json!({ "email": email, "password": password }))
    }

    #[actix_web::test]
    async fn test_login_issues_usable_pair() {
        let t = TestSession::new();
        t.users.insert("u1", "u1@x.com", "ADMIN");
        t.users.set_password("u1", "pw-1");
        let app = app!(t);

        let resp = call_service(&app, login_request("u1@x.com", "pw-1").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = read_body_json(resp).await;
        assert_eq!(body["data"]["token_type"], "Bearer");
        assert_eq!(body["data"]["expires_in"], 900);
        assert_eq!(body["data"]["user"]["id"], "u1");
        assert_eq!(body["data"]["user"]["role"], "ADMIN");
        let access = body["data"]["access_token"].as_str().unwrap().to_string();
        let refresh = body["data"]["refresh_token"].as_str().unwrap().to_string();

        let claims = t.services.validator.validate(&access, TokenKind::Access).await.unwrap();
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.role, "ADMIN");
        assert_eq!(t.store.index_members("u1").len(), 2);

        // 발급된 액세스 토큰으로 보호된 경로 접근
        let req = TestRequest::get()
            .uri("/auth/session")
            .insert_header(("Authorization", format!("Bearer {}", access)))
            .to_request();
        assert_eq!(call_service(&app, req).await.status(), StatusCode::OK);

        // 발급된 리프레시 토큰으로 순환
        let req = TestRequest::post()
            .uri("/auth/refresh")
            .set_json(serde_json::json!({ "refresh_token": refresh }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = read_body_json(resp).await;
        assert_ne!(body["data"]["refresh_token"], refresh.as_str());
    }

    #[actix_web::test]
    async fn test_login_rejects_bad_credentials() {
        let t = TestSession::new();
        t.users.insert("u1", "u1@x.com", "USER");
        t.users.set_password("u1", "pw-1");
        let app = app!(t);

        for (email, password) in [("u1@x.com", "wrong"), ("nobody@x.com", "pw-1"), ("u1@x.com", "")] {
            let resp = call_service(&app, login_request(email, password).to_request()).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "email: {email}");
            let body: serde_json::Value = read_body_json(resp).await;
            assert_eq!(body["error"], "Invalid email or password");
        }
        assert_eq!(t.store.record_count(), 0);
    }

    #[actix_web::test]
    async fn test_login_refuses_inactive_accounts() {
        let t = TestSession::new();
        t.users.insert("u1", "u1@x.com", "USER");
        t.users.set_password("u1", "pw-1");
        t.users.insert("u2", "u2@x.com", "USER");
        t.users.set_password("u2", "pw-2");
        t.users.set_status("u1", UserStatus::Inactive);
        t.users.set_status("u2", UserStatus::Suspended);
        let app = app!(t);

        for (email, password) in [("u1@x.com", "pw-1"), ("u2@x.com", "pw-2")] {
            let resp = call_service(&app, login_request(email, password).to_request()).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "email: {email}");
            let body: serde_json::Value = read_body_json(resp).await;
            assert_eq!(body["error"], "account suspended/deactivated");
        }
        assert_eq!(t.store.record_count(), 0);
    }

    #[actix_web::test]
    async fn test_refresh_endpoint_rotates() {
        let t = TestSession::new();
        t.users.insert("u1", "u1@x.com", "USER");
        let pair = t.services.issuer.issue("u1", "u1@x.com", "USER").await.unwrap().tokens;
        let app = app!(t);

        let req = TestRequest::post()
            .uri("/auth/refresh")
            .set_json(serde_json::json!({ "refresh_token": pair.refresh_token }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["token_type"], "Bearer");
        assert_eq!(body["data"]["expires_in"], 900);
        assert_eq!(body["data"]["user"]["id"], "u1");
        assert_ne!(body["data"]["refresh_token"], pair.refresh_token.as_str());

        // 같은 토큰 재사용은 거부
        let req = TestRequest::post()
            .uri("/auth/refresh")
            .set_json(serde_json::json!({ "refresh_token": pair.refresh_token }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid or expired refresh token");
    }

    #[actix_web::test]
    async fn test_refresh_endpoint_error_statuses() {
        let t = TestSession::new();
        t.users.insert("u2", "u2@x.com", "USER");
        let inactive = t.services.issuer.issue("u2", "u2@x.com", "USER").await.unwrap().tokens;
        t.users.set_status("u2", UserStatus::Inactive);
        let ghost = t.services.issuer.issue("ghost", "g@x.com", "USER").await.unwrap().tokens;
        let app = app!(t);

        let cases = [
            (inactive.refresh_token, StatusCode::UNAUTHORIZED, "account suspended/deactivated"),
            (ghost.refresh_token, StatusCode::NOT_FOUND, "User not found"),
            ("garbage".to_string(), StatusCode::UNAUTHORIZED, "Invalid or expired refresh token"),
        ];

        for (token, status, message) in cases {
            let req = TestRequest::post()
                .uri("/auth/refresh")
                .set_json(serde_json::json!({ "refresh_token": token }))
                .to_request();
            let resp = call_service(&app, req).await;
            assert_eq!(resp.status(), status);
            let body: serde_json::Value = read_body_json(resp).await;
            assert_eq!(body["error"], message);
        }
    }

    #[actix_web::test]
    async fn test_logout_revokes_pair() {
        let t = TestSession::new();
        let pair = t.services.issuer.issue("u1", "u1@x.com", "USER").await.unwrap().tokens;
        let app = app!(t);

        let req = TestRequest::post()
            .uri("/auth/logout")
            .insert_header(("Authorization", format!("Bearer {}", pair.access_token)))
            .set_json(serde_json::json!({ "refresh_token": pair.refresh_token }))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(t.store.record_count(), 0);
    }

    #[actix_web::test]
    async fn test_logout_without_body_revokes_access_only() {
        let t = TestSession::new();
        let pair = t.services.issuer.issue("u1", "u1@x.com", "USER").await.unwrap().tokens;
        let app = app!(t);

        let req = TestRequest::post()
            .uri("/auth/logout")
            .insert_header(("Authorization", format!("Bearer {}", pair.access_token)))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(!t.store.contains(&format!("access_token:{}", pair.access_token)));
        assert!(t.store.contains(&format!("refresh_token:{}", pair.refresh_token)));
    }

    #[actix_web::test]
    async fn test_logout_ignores_foreign_refresh_token() {
        let t = TestSession::new();
        let mine = t.services.issuer.issue("u1", "u1@x.com", "USER").await.unwrap().tokens;
        let theirs = t.services.issuer.issue("u2", "u2@x.com", "USER").await.unwrap().tokens;
        let app = app!(t);

        let req = TestRequest::post()
            .uri("/auth/logout")
            .insert_header(("Authorization", format!("Bearer {}", mine.access_token)))
            .set_json(serde_json::json!({ "refresh_token": theirs.refresh_token }))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(t.store.contains(&format!("refresh_token:{}", theirs.refresh_token)));
    }

    #[actix_web::test]
    async fn test_logout_requires_bearer() {
        let t = TestSession::new();
        let app = app!(t);

        let resp = call_service(&app, TestRequest::post().uri("/auth/logout").to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_revoke_all_endpoint() {
        let t = TestSession::new();
        let first = t.services.issuer.issue("u1", "u1@x.com", "USER").await.unwrap().tokens;
        let _second = t.services.issuer.issue("u1", "u1@x.com", "USER").await.unwrap().tokens;
        let app = app!(t);

        let req = TestRequest::post()
            .uri("/auth/revoke-all")
            .insert_header(("Authorization", format!("Bearer {}", first.access_token)))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = read_body_json(resp).await;
        assert_eq!(body["data"]["revoked"], 4);
        assert_eq!(t.store.record_count(), 0);
    }

    #[actix_web::test]
    async fn test_session_endpoint_returns_claims() {
        let t = TestSession::new();
        let pair = t.services.issuer.issue("u1", "u1@x.com", "ADMIN").await.unwrap().tokens;
        let app = app!(t);

        let req = TestRequest::get()
            .uri("/auth/session")
            .insert_header(("Authorization", format!("Bearer {}", pair.access_token)))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = read_body_json(resp).await;
        assert_eq!(body["data"]["user_id"], "u1");
        assert_eq!(body["data"]["role"], "ADMIN");
        assert!(body["data"].get("access_token").is_none());
    }
}
