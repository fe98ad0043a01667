use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::sync::RwLock;

/// Time source for cache expiry. Injected so tests can advance time
/// deterministically instead of sleeping through real TTLs.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time, used in production.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct CacheEntry {
    payload: Value,
    stored_at: Instant,
}

/// In-memory response cache keyed by normalized request identity.
///
/// Entries are valid while `now - stored_at < ttl`; the TTL is supplied per
/// read because the endpoint classes carry different configured windows.
/// Expired entries are treated as misses but never purged, and the store is
/// unbounded — both accepted properties of this single-process deployment.
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    clock: Box<dyn Clock>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Returns the stored payload if present and fresh, otherwise `None`.
    pub async fn get(&self, key: &str, ttl: Duration) -> Option<Value> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if self.clock.now().duration_since(entry.stored_at) < ttl => {
                tracing::debug!("cache hit for key: {}", key);
                Some(entry.payload.clone())
            }
            Some(_) => {
                tracing::debug!("cache expired for key: {}", key);
                None
            }
            None => {
                tracing::debug!("cache miss for key: {}", key);
                None
            }
        }
    }

    /// Stores `payload` under `key`, replacing any prior entry whole.
    pub async fn put(&self, key: impl Into<String>, payload: Value) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.into(),
            CacheEntry {
                payload,
                stored_at: self.clock.now(),
            },
        );
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}
