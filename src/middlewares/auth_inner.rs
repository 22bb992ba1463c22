//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::{AuthMode, AuthenticatedUser, RequiredRole};
use crate::domain::models::token::TokenKind;
use crate::errors::InvalidToken;
use crate::services::auth::SessionServices;

/// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
///
/// 헤더가 없거나, `"Bearer "` 로 시작하지 않거나, 접두사 뒤가 비어 있으면
/// "자격 증명 없음" 으로 보고 `None` 을 반환합니다. 에러가 아닙니다.
///
/// ```rust,ignore
/// assert_eq!(extract_bearer_token(Some("Bearer abc")), Some("abc"));
/// assert_eq!(extract_bearer_token(Some("Basic abc")), None);
/// assert_eq!(extract_bearer_token(Some("Bearer ")), None);
/// ```
pub fn extract_bearer_token(header: Option<&str>) -> Option<&str> {
    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// 인증 실패 사유 (로그용)
#[derive(Debug)]
enum AuthFailure {
    MissingCredential,
    Invalid(InvalidToken),
}

impl std::fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthFailure::MissingCredential => f.write_str("Bearer 토큰 없음"),
            AuthFailure::Invalid(e) => write!(f, "{}", e),
        }
    }
}

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let Some(services) = req.app_data::<web::Data<SessionServices>>().cloned() else {
                log::error!("SessionServices가 등록되지 않았습니다");
                return Err(actix_web::error::ErrorInternalServerError("session services unavailable"));
            };

            let auth_result = authenticate(&req, &services).await;

            match (&mode, auth_result) {
                // Required 모드에서 인증 실패
                (AuthMode::Required, Err(failure)) => {
                    log::warn!("인증 실패: {} ({})", failure, req.path());
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": "authentication_required",
                            "message": "유효한 인증 토큰이 필요합니다"
                        }));
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                },
                (AuthMode::Required, Ok(user)) => {
                    if let Some(ref required) = required_role {
                        if !required.is_satisfied(&user) {
                            log::warn!("권한 부족: 사용자 ID {} ({}), 필요 권한: {:?}",
                                user.user_id, user.role, required);
                            let response = HttpResponse::Forbidden()
                                .json(serde_json::json!({
                                    "error": "insufficient_permissions",
                                    "message": "접근 권한이 부족합니다"
                                }));
                            let (req, _) = req.into_parts();
                            return Ok(ServiceResponse::new(req, response).map_into_right_body());
                        }
                    }

                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                },
                (AuthMode::Optional, Ok(user)) => {
                    // Optional 모드에서는 역할이 맞지 않으면 익명으로 진행
                    let allowed = required_role
                        .as_ref()
                        .is_none_or(|required| required.is_satisfied(&user));
                    if allowed {
                        log::debug!("선택적 인증 성공: 사용자 ID {}", user.user_id);
                        req.extensions_mut().insert(user);
                    } else {
                        log::debug!("선택적 인증: 권한 부족하지만 진행 허용");
                    }
                },
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 유효한 토큰 없음, 요청 진행");
                },
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 Bearer 토큰을 액세스 토큰으로 검증합니다.
async fn authenticate(
    req: &ServiceRequest,
    services: &SessionServices,
) -> Result<AuthenticatedUser, AuthFailure> {
    let header = req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = extract_bearer_token(header).ok_or(AuthFailure::MissingCredential)?;

    let claims = services.validator
        .validate(token, TokenKind::Access)
        .await
        .map_err(AuthFailure::Invalid)?;

    Ok(AuthenticatedUser::from_claims(claims, token))
}
