//! Fixed-window rate limiting for comment creation.
//!
//! Windows are aligned to wall-clock multiples of `window_secs`; a key's
//! counter resets when the window rolls over.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Context as _;
use chrono::Utc;
use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;

use crate::domain::repository::RateLimiter;
use crate::error::StorefrontError;

pub const DEFAULT_WINDOW_SECS: u64 = 60;

fn window_index(now_secs: u64, window_secs: u64) -> u64 {
    now_secs / window_secs.max(1)
}

fn now_secs() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}

// ── Redis ────────────────────────────────────────────────────────────────────

/// Counter shared by every instance through Redis `INCR` + `EXPIRE`.
#[derive(Clone)]
pub struct RedisRateLimiter {
    pub pool: Pool,
    pub limit: u32,
    pub window_secs: u64,
}

fn redis_key(key: &str, window: u64) -> String {
    format!("ratelimit:{key}:{window}")
}

impl RateLimiter for RedisRateLimiter {
    async fn allow(&self, key: &str) -> Result<bool, StorefrontError> {
        let mut conn = self.pool.get().await.context("get redis connection")?;
        let key = redis_key(key, window_index(now_secs(), self.window_secs));
        let count: u64 = conn.incr(&key, 1u64).await.context("increment rate counter")?;
        if count == 1 {
            let ttl = i64::try_from(self.window_secs).unwrap_or(i64::MAX);
            let (): () = conn.expire(&key, ttl).await.context("expire rate counter")?;
        }
        Ok(count <= u64::from(self.limit))
    }
}

// ── In-memory ────────────────────────────────────────────────────────────────

/// Per-process counter used when no Redis URL is configured.
#[derive(Clone)]
pub struct InMemoryRateLimiter {
    counters: Arc<Mutex<HashMap<String, (u64, u32)>>>,
    limit: u32,
    window_secs: u64,
}

/// Stale windows are pruned once the map grows past this many keys.
const PRUNE_THRESHOLD: usize = 10_000;

impl InMemoryRateLimiter {
    pub fn new(limit: u32, window_secs: u64) -> Self {
        Self {
            counters: Arc::new(Mutex::new(HashMap::new())),
            limit,
            window_secs,
        }
    }

    /// Record a hit at `now_secs` (unix seconds).
    pub fn allow_at(&self, key: &str, now_secs: u64) -> bool {
        let window = window_index(now_secs, self.window_secs);
        let mut counters = self
            .counters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if counters.len() > PRUNE_THRESHOLD {
            counters.retain(|_, (w, _)| *w == window);
        }
        let entry = counters.entry(key.to_owned()).or_insert((window, 0));
        if entry.0 != window {
            *entry = (window, 0);
        }
        entry.1 = entry.1.saturating_add(1);
        entry.1 <= self.limit
    }
}

impl RateLimiter for InMemoryRateLimiter {
    async fn allow(&self, key: &str) -> Result<bool, StorefrontError> {
        Ok(self.allow_at(key, now_secs()))
    }
}

// ── Backend selection ────────────────────────────────────────────────────────

/// The limiter chosen at startup.
#[derive(Clone)]
pub enum RateLimiterBackend {
    Redis(RedisRateLimiter),
    InMemory(InMemoryRateLimiter),
}

impl RateLimiterBackend {
    pub fn redis(pool: Pool, limit: u32) -> Self {
        Self::Redis(RedisRateLimiter {
            pool,
            limit,
            window_secs: DEFAULT_WINDOW_SECS,
        })
    }

    pub fn in_memory(limit: u32) -> Self {
        Self::InMemory(InMemoryRateLimiter::new(limit, DEFAULT_WINDOW_SECS))
    }
}

impl RateLimiter for RateLimiterBackend {
    async fn allow(&self, key: &str) -> Result<bool, StorefrontError> {
        match self {
            Self::Redis(limiter) => limiter.allow(key).await,
            Self::InMemory(limiter) => limiter.allow(key).await,
        }
    }
}
