use serde::{Deserialize, Serialize};
use crate::domain::entities::users::UserRecord;

/// 공개 사용자 프로필 DTO
///
/// 토큰 갱신 응답에 함께 실려 나갑니다. 계정 상태는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub role: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        let UserRecord { id, email, username, role, .. } = user;
        Self { id, email, username, role }
    }
}
