//! 테스트용 인메모리 권한 저장소
//!
//! Redis와 같은 의미(TTL 만료, 원자적 삭제 개수, 집합 인덱스)를 흉내내며,
//! 장애 주입 스위치로 저장소 실패 경로를 재현합니다.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use async_trait::async_trait;
use crate::domain::models::token::AuthorityRecord;
use crate::errors::{AppError, AppResult};
use crate::repositories::tokens::{index_key, AuthorityStore};

/// 장애 주입 스위치
#[derive(Debug, Default, Clone)]
pub struct Faults {
    /// 모든 조회 실패
    pub reads: bool,
    /// 인덱스 쓰기 실패
    pub index_writes: bool,
    /// 이 접두사로 시작하는 키의 레코드 쓰기 실패
    pub record_write_prefix: Option<&'static str>,
    /// 모든 삭제 실패
    pub deletes: bool,
}

struct Entry {
    record: AuthorityRecord,
    ttl_seconds: u64,
    expires_at: Instant,
}

#[derive(Default)]
pub struct MemoryAuthorityStore {
    records: Mutex<HashMap<String, Entry>>,
    indexes: Mutex<HashMap<String, HashSet<String>>>,
    faults: Mutex<Faults>,
}

fn unavailable(op: &str) -> AppError {
    AppError::RedisError(format!("{} 실패: injected fault", op))
}

impl MemoryAuthorityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_faults(&self, faults: Faults) {
        *self.faults.lock().unwrap() = faults;
    }

    pub fn contains(&self, key: &str) -> bool {
        self.records
            .lock()
            .unwrap()
            .get(key)
            .is_some_and(|e| e.expires_at > Instant::now())
    }

    /// 저장 시점의 TTL(초)
    pub fn ttl_of(&self, key: &str) -> Option<u64> {
        self.records.lock().unwrap().get(key).map(|e| e.ttl_seconds)
    }

    /// TTL 만료를 즉시 일으킵니다.
    pub fn expire(&self, key: &str) {
        if let Some(entry) = self.records.lock().unwrap().get_mut(key) {
            entry.expires_at = Instant::now();
        }
    }

    pub fn index_members(&self, subject_id: &str) -> Vec<String> {
        self.indexes
            .lock()
            .unwrap()
            .get(&index_key(subject_id))
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// 만료되지 않은 레코드 수
    pub fn record_count(&self) -> usize {
        let now = Instant::now();
        self.records.lock().unwrap().values().filter(|e| e.expires_at > now).count()
    }

    pub fn has_index(&self, subject_id: &str) -> bool {
        self.indexes.lock().unwrap().contains_key(&index_key(subject_id))
    }
}

#[async_trait]
impl AuthorityStore for MemoryAuthorityStore {
    async fn put(&self, key: &str, record: &AuthorityRecord, ttl_seconds: u64) -> AppResult<()> {
        let faults = self.faults.lock().unwrap().clone();
        if faults.record_write_prefix.is_some_and(|prefix| key.starts_with(prefix)) {
            return Err(unavailable("권한 레코드 저장"));
        }

        let ttl = ttl_seconds.max(1);
        self.records.lock().unwrap().insert(
            key.to_string(),
            Entry {
                record: record.clone(),
                ttl_seconds: ttl,
                expires_at: Instant::now() + Duration::from_secs(ttl),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Option<AuthorityRecord>> {
        if self.faults.lock().unwrap().reads {
            return Err(unavailable("권한 레코드 조회"));
        }

        let mut records = self.records.lock().unwrap();
        let expired = records.get(key).is_some_and(|e| e.expires_at <= Instant::now());
        if expired {
            records.remove(key);
        }
        Ok(records.get(key).map(|e| e.record.clone()))
    }

    async fn delete(&self, keys: &[String]) -> AppResult<usize> {
        if self.faults.lock().unwrap().deletes {
            return Err(unavailable("권한 레코드 삭제"));
        }

        let now = Instant::now();
        let mut records = self.records.lock().unwrap();
        let removed = keys
            .iter()
            .filter_map(|key| records.remove(key))
            .filter(|entry| entry.expires_at > now)
            .count();
        Ok(removed)
    }

    async fn add_to_index(&self, subject_id: &str, token: &str) -> AppResult<()> {
        if self.faults.lock().unwrap().index_writes {
            return Err(unavailable("세션 인덱스 추가"));
        }

        self.indexes
            .lock()
            .unwrap()
            .entry(index_key(subject_id))
            .or_default()
            .insert(token.to_string());
        Ok(())
    }

    async fn members_of_index(&self, subject_id: &str) -> AppResult<Vec<String>> {
        if self.faults.lock().unwrap().reads {
            return Err(unavailable("세션 인덱스 조회"));
        }
        Ok(self.index_members(subject_id))
    }

    async fn delete_index(&self, subject_id: &str) -> AppResult<()> {
        if self.faults.lock().unwrap().deletes {
            return Err(unavailable("세션 인덱스 삭제"));
        }
        self.indexes.lock().unwrap().remove(&index_key(subject_id));
        Ok(())
    }
}
