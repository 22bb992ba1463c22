//! # 사용자 리포지토리 구현
//!
//! 세션 코어가 사용자 레코드를 조회하는 좁은 인터페이스([`UserDirectory`]),
//! 로그인 자격 증명을 확인하는 인터페이스([`CredentialVerifier`]),
//! 그리고 두 인터페이스의 MongoDB 구현을 제공합니다.
//! 사용자 생성/수정은 이 서비스의 범위 밖입니다.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use crate::{
    db::Database,
    domain::entities::users::{User, UserRecord},
    errors::{AppError, AppResult},
};

/// 사용자 레코드 조회 인터페이스
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// ID로 사용자를 조회합니다. 없으면 `None`.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserRecord>>;
}

/// 로그인 자격 증명 확인 인터페이스
///
/// 계정 상태는 보지 않습니다. 비활성 계정 거부는 호출자의 몫입니다.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// 이메일과 비밀번호가 맞으면 사용자 레코드를 반환합니다.
    ///
    /// 없는 이메일, 틀린 비밀번호, 비밀번호가 없는 계정은 모두 `None` 입니다.
    async fn verify(&self, email: &str, password: &str) -> AppResult<Option<UserRecord>>;
}

/// 평문 비밀번호를 bcrypt 해시와 비교합니다.
fn password_matches(password: &str, password_hash: &str) -> AppResult<bool> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
}

/// 사용자 데이터 액세스 리포지토리 (MongoDB `users` 컬렉션)
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - ObjectId 형식이 아닌 ID는 에러가 아니라 "없음"으로 처리합니다.
///   토큰의 주체가 조회되지 않는 것과 같은 의미이기 때문입니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(database);
/// let user = repo.find_by_id("65f1c0ffee...").await?;
/// ```
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION)
    }
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserRecord>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            log::debug!("ObjectId 형식이 아닌 사용자 ID: {}", id);
            return Ok(None);
        };

        let user = self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(user.map(UserRecord::from))
    }
}

#[async_trait]
impl CredentialVerifier for UserRepository {
    async fn verify(&self, email: &str, password: &str) -> AppResult<Option<UserRecord>> {
        let user = self
            .collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let Some(user) = user else {
            return Ok(None);
        };
        let Some(password_hash) = user.password_hash.as_deref() else {
            log::debug!("비밀번호가 없는 계정으로 로그인 시도: {}", email);
            return Ok(None);
        };

        let verify_start = std::time::Instant::now();
        let is_valid = password_matches(password, password_hash)?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        Ok(is_valid.then(|| UserRecord::from(user)))
    }
}
