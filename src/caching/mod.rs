//! 캐싱 계층 모듈
//!
//! 세션 권한 레코드를 보관하는 공유 Redis와의 연결을 제공합니다.
//!
//! # 주요 기능
//!
//! - 자동 재연결 멀티플렉싱 연결
//! - JSON 기반 자동 직렬화/역직렬화
//! - TTL 지원, 집합(SADD/SMEMBERS) 지원
//! - 모든 명령에 시간 제한
//!
//! 권한 상태를 인스턴스 로컬에 캐싱하지 않습니다. 오래된 로컬 사본은
//! 이미 폐기된 토큰을 통과시킬 수 있기 때문입니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! REDIS_TIMEOUT_MS=2000             # 기본값
//! ```

pub mod redis;
