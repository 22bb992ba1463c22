//! User Entity Implementation
//!
//! 세션 코어가 참조하는 사용자 엔티티입니다.
//! 계정 생성이나 프로필 관리는 외부 사용자 서비스의 몫이며,
//! 여기서는 로그인과 토큰 발급/순환에 필요한 필드만 매핑합니다.

use std::fmt;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 계정 상태
///
/// `Active` 인 계정만 리프레시 토큰으로 새 토큰 쌍을 받을 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, UserStatus::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
            UserStatus::Suspended => "SUSPENDED",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 문서 (MongoDB `users` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 사용자 이름
    pub username: String,
    /// bcrypt 비밀번호 해시 (비밀번호 없는 계정은 `None`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 사용자 역할 (예: "USER", "ADMIN")
    pub role: String,
    /// 계정 상태
    pub status: UserStatus,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

/// 사용자 레코드 조회 결과
///
/// 세션 코어가 사용자 저장소로부터 받는 최소한의 정보입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub username: String,
    pub role: String,
    pub status: UserStatus,
}

impl UserRecord {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            email: user.email,
            username: user.username,
            role: user.role,
            status: user.status,
        }
    }
}
