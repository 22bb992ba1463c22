//! # Redis 캐시 클라이언트 구현
//!
//! 세션 권한 저장소가 사용하는 Redis 클라이언트입니다.
//! 타입 안전성과 비동기 처리를 지원하며, 모든 호출은 설정된 시간 안에
//! 끝나지 않으면 `TimedOut` I/O 에러로 실패합니다.
//!
//! ## 연결 관리
//!
//! `ConnectionManager` 하나를 보관하고 호출마다 복제해서 사용합니다.
//! 멀티플렉싱된 단일 TCP 연결에서 여러 동시 요청을 처리하며,
//! 연결이 끊기면 자동으로 재연결합니다.

use std::future::Future;
use std::time::Duration;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError, RedisResult};
use serde::{Serialize, de::DeserializeOwned};

/// Redis 캐시 클라이언트 래퍼
///
/// ## 특징
///
/// - **자동 재연결**: `ConnectionManager` 사용
/// - **자동 직렬화**: JSON 기반 객체 저장/조회
/// - **시간 제한**: 모든 명령에 동일한 타임아웃 적용
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::time::Duration;
/// use crate::caching::redis::RedisClient;
///
/// let redis = RedisClient::connect("redis://localhost:6379", Duration::from_secs(2)).await?;
/// redis.set_with_expiry("refresh_token:abc", &record, 604800).await?;
/// let record: Option<AuthorityRecord> = redis.get("refresh_token:abc").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    /// 자동 재연결을 지원하는 멀티플렉싱 연결
    conn: ConnectionManager,
    /// 명령 1회당 최대 대기 시간
    timeout: Duration,
}

impl RedisClient {
    /// Redis 서버에 연결하고 PING으로 가용성을 확인합니다.
    ///
    /// ## 에러 케이스
    ///
    /// - 잘못된 URL 형식
    /// - 서버에 연결할 수 없거나 `timeout` 안에 응답이 없는 경우
    /// - 인증 실패
    pub async fn connect(redis_url: &str, timeout: Duration) -> RedisResult<Self> {
        let client = Client::open(redis_url)?;

        let conn = bounded(timeout, ConnectionManager::new(client)).await?;
        let client = Self { conn, timeout };

        // 연결 테스트 - PING 명령으로 서버 가용성 확인
        let mut conn = client.conn.clone();
        client.run(async move { redis::cmd("PING").query_async::<()>(&mut conn).await }).await?;

        log::info!("✅ Redis 연결 성공 (timeout: {:?})", timeout);
        Ok(client)
    }

    /// 설정된 타임아웃 안에서 명령을 실행합니다.
    async fn run<T, F>(&self, fut: F) -> RedisResult<T>
    where
        F: Future<Output = RedisResult<T>>,
    {
        bounded(self.timeout, fut).await
    }

    /// 지정된 키에서 JSON 값을 조회하여 역직렬화합니다.
    ///
    /// ## 반환값
    ///
    /// - `Ok(Some(T))` - 키가 존재하고 역직렬화 성공
    /// - `Ok(None)` - 키가 존재하지 않음
    /// - `Err(RedisError)` - Redis 오류, 시간 초과 또는 역직렬화 실패
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> RedisResult<Option<T>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = self.run(async move { conn.get(key).await }).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// 만료 시간과 함께 JSON 값을 저장합니다.
    ///
    /// Redis는 0초 만료를 거부하므로 호출자가 1 이상의 값을 넘겨야 합니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> RedisResult<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        let mut conn = self.conn.clone();
        self.run(async move { conn.set_ex::<_, _, ()>(key, json, seconds).await }).await
    }

    /// 여러 키를 한 번에 삭제하고 실제로 삭제된 키의 개수를 반환합니다.
    ///
    /// `DEL` 은 원자적이므로, 같은 키를 동시에 지우는 두 호출 중
    /// 정확히 하나만 1을 받습니다.
    ///
    /// ```rust,ignore
    /// redis.del_multiple(&[]).await?; // 즉시 0 반환
    /// ```
    pub async fn del_multiple(&self, keys: &[String]) -> RedisResult<usize> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.conn.clone();
        self.run(async move { conn.del::<_, usize>(keys).await }).await
    }

    /// 집합에 멤버를 추가합니다. (`SADD`, TTL 없음)
    pub async fn sadd(&self, key: &str, member: &str) -> RedisResult<()> {
        let mut conn = self.conn.clone();
        self.run(async move { conn.sadd::<_, _, ()>(key, member).await }).await
    }

    /// 집합의 모든 멤버를 조회합니다. (`SMEMBERS`)
    pub async fn smembers(&self, key: &str) -> RedisResult<Vec<String>> {
        let mut conn = self.conn.clone();
        self.run(async move { conn.smembers::<_, Vec<String>>(key).await }).await
    }
}

/// 주어진 시간 안에 끝나지 않은 작업을 `TimedOut` 에러로 바꿉니다.
async fn bounded<T, F>(timeout: Duration, fut: F) -> RedisResult<T>
where
    F: Future<Output = RedisResult<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => {
            log::error!("Redis 명령 시간 초과 ({:?})", timeout);
            Err(RedisError::from(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                format!("redis call exceeded {:?}", timeout),
            )))
        }
    }
}
