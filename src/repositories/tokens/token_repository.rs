use std::sync::Arc;
use async_trait::async_trait;
use crate::caching::redis::RedisClient;
use crate::domain::models::token::AuthorityRecord;
use crate::errors::{AppError, AppResult};

/// 사용자별 세션 인덱스 키 (`user_tokens:<subjectId>`)
pub fn index_key(subject_id: &str) -> String {
    format!("user_tokens:{}", subject_id)
}

/// 권한 저장소 인터페이스
///
/// 외부 키-값 캐시에 대한 얇은 클라이언트입니다. 세션 컴포넌트는 이
/// 인터페이스로만 저장소에 접근하며, 구현체는 부트스트랩에서 주입됩니다.
///
/// 모든 삭제는 멱등입니다. 없는 키를 지워도 성공합니다.
#[async_trait]
pub trait AuthorityStore: Send + Sync {
    /// 권한 레코드를 TTL과 함께 저장합니다.
    async fn put(&self, key: &str, record: &AuthorityRecord, ttl_seconds: u64) -> AppResult<()>;

    /// 권한 레코드를 조회합니다. 없거나 만료되었으면 `None`.
    async fn get(&self, key: &str) -> AppResult<Option<AuthorityRecord>>;

    /// 키들을 삭제하고 실제로 존재했던 개수를 반환합니다.
    async fn delete(&self, keys: &[String]) -> AppResult<usize>;

    /// 키를 삭제하고, 이 호출이 실제로 지웠는지 반환합니다.
    ///
    /// 동시에 같은 키를 가져가려는 호출 중 하나만 `true` 를 받습니다.
    async fn take(&self, key: &str) -> AppResult<bool> {
        Ok(self.delete(&[key.to_string()]).await? > 0)
    }

    /// 사용자 세션 인덱스에 토큰을 추가합니다.
    async fn add_to_index(&self, subject_id: &str, token: &str) -> AppResult<()>;

    /// 사용자 세션 인덱스의 모든 토큰을 조회합니다.
    async fn members_of_index(&self, subject_id: &str) -> AppResult<Vec<String>>;

    /// 사용자 세션 인덱스를 삭제합니다.
    async fn delete_index(&self, subject_id: &str) -> AppResult<()>;
}

/// Redis 기반 권한 저장소
///
/// ## 키 구조
///
/// | 키 | 값 | TTL |
/// |----|----|-----|
/// | `access_token:<token>` | `AuthorityRecord` JSON | 남은 유효 기간 |
/// | `refresh_token:<token>` | `AuthorityRecord` JSON | 남은 유효 기간 |
/// | `user_tokens:<subjectId>` | 토큰 문자열 집합 | 없음 |
///
/// 세션 인덱스는 개별 레코드가 TTL로 사라져도 남아 있을 수 있습니다.
/// 전체 폐기 시에만 정리되며, 그 전까지는 이미 만료된 토큰을 가리킬 수 있습니다.
pub struct TokenRepository {
    redis: Arc<RedisClient>,
}

impl TokenRepository {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

/// 권한 레코드에 실제로 적용할 TTL (초)
///
/// Redis는 0초 만료를 거부하므로 최소 1초.
fn record_ttl(ttl_seconds: u64) -> u64 {
    ttl_seconds.max(1)
}

fn store_error(op: &str, e: redis::RedisError) -> AppError {
    AppError::RedisError(format!("{} 실패: {}", op, e))
}

#[async_trait]
impl AuthorityStore for TokenRepository {
    async fn put(&self, key: &str, record: &AuthorityRecord, ttl_seconds: u64) -> AppResult<()> {
        self.redis
            .set_with_expiry(key, record, record_ttl(ttl_seconds))
            .await
            .map_err(|e| store_error("권한 레코드 저장", e))
    }

    async fn get(&self, key: &str) -> AppResult<Option<AuthorityRecord>> {
        self.redis
            .get::<AuthorityRecord>(key)
            .await
            .map_err(|e| store_error("권한 레코드 조회", e))
    }

    async fn delete(&self, keys: &[String]) -> AppResult<usize> {
        self.redis
            .del_multiple(keys)
            .await
            .map_err(|e| store_error("권한 레코드 삭제", e))
    }

    async fn add_to_index(&self, subject_id: &str, token: &str) -> AppResult<()> {
        self.redis
            .sadd(&index_key(subject_id), token)
            .await
            .map_err(|e| store_error("세션 인덱스 추가", e))
    }

    async fn members_of_index(&self, subject_id: &str) -> AppResult<Vec<String>> {
        self.redis
            .smembers(&index_key(subject_id))
            .await
            .map_err(|e| store_error("세션 인덱스 조회", e))
    }

    async fn delete_index(&self, subject_id: &str) -> AppResult<()> {
        self.redis
            .del_multiple(&[index_key(subject_id)])
            .await
            .map(|_| ())
            .map_err(|e| store_error("세션 인덱스 삭제", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_key_layout() {
        assert_eq!(index_key("u1"), "user_tokens:u1");
    }

    #[test]
    fn test_record_ttl_has_one_second_floor() {
        assert_eq!(record_ttl(0), 1);
        assert_eq!(record_ttl(1), 1);
        assert_eq!(record_ttl(900), 900);
    }
}
