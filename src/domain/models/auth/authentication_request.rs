use super::AuthenticatedUser;

/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 인증이 선택사항임 (있으면 검증, 없어도 허용)
    Optional,
}

/// 요구되는 역할 정보
#[derive(Debug, Clone)]
pub enum RequiredRole {
    /// 특정 단일 역할이 필요
    Single(String),
    /// 여러 역할 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<String>),
}

impl RequiredRole {
    /// 사용자가 요구 역할을 보유하는지 확인 (대소문자 무관)
    pub fn is_satisfied(&self, user: &AuthenticatedUser) -> bool {
        match self {
            RequiredRole::Single(required_role) => user.has_role(required_role),
            RequiredRole::Any(required_roles) => {
                let roles: Vec<&str> = required_roles.iter().map(String::as_str).collect();
                user.has_any_role(&roles)
            }
        }
    }
}
