//! Short-lived cache of the expert list, kept in the session store.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use expertdb_core::models::Expert;
use serde::{Deserialize, Serialize};

use crate::session::SessionStore;

/// Session store key of the cached expert list.
pub const EXPERT_CACHE_KEY: &str = "expertsCache";

/// How long a cached list is considered fresh.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Stored form of the cache entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedExperts {
    pub data: Vec<Expert>,
    /// Milliseconds since the Unix epoch when the list was stored.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStatus {
    pub exists: bool,
    pub valid: bool,
    pub age: Duration,
}

pub struct ExpertCache {
    store: Arc<dyn SessionStore>,
    ttl: Duration,
}

impl ExpertCache {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self::with_ttl(store, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(store: Arc<dyn SessionStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// The stored entry, fresh or not. Corrupt entries read as absent.
    pub fn get(&self) -> Option<CachedExperts> {
        let raw = self.store.get(EXPERT_CACHE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse cached experts data");
                None
            }
        }
    }

    /// The cached list if it is still fresh.
    pub fn fresh(&self) -> Option<Vec<Expert>> {
        self.get()
            .filter(|entry| self.is_valid(entry.timestamp))
            .map(|entry| entry.data)
    }

    pub fn set(&self, experts: &[Expert]) {
        let entry = CachedExperts {
            data: experts.to_vec(),
            timestamp: now_millis(),
        };
        match serde_json::to_string(&entry) {
            Ok(raw) => self.store.set(EXPERT_CACHE_KEY, &raw),
            Err(e) => tracing::warn!(error = %e, "Failed to cache experts data"),
        }
    }

    pub fn is_valid(&self, timestamp: i64) -> bool {
        age_of(timestamp) < self.ttl
    }

    pub fn clear(&self) {
        self.store.clear(EXPERT_CACHE_KEY);
    }

    pub fn status(&self) -> CacheStatus {
        match self.get() {
            None => CacheStatus {
                exists: false,
                valid: false,
                age: Duration::ZERO,
            },
            Some(entry) => CacheStatus {
                exists: true,
                valid: self.is_valid(entry.timestamp),
                age: age_of(entry.timestamp),
            },
        }
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Time elapsed since `timestamp`. Future timestamps count as zero.
fn age_of(timestamp: i64) -> Duration {
    let elapsed = now_millis().saturating_sub(timestamp).max(0);
    Duration::from_millis(elapsed as u64)
}
