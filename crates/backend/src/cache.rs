//! Response cache for backend reads.
//!
//! Entries are keyed by caller, path, and query parameters, expire after a
//! fixed TTL, and are dropped when a mutation touches the same resource.
//! Each resource carries a write generation so a read that was in flight
//! during a write never stores its older answer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde_json::Value;

use crate::token::BearerToken;

/// Identity of a cached read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Token fingerprint; responses never cross callers.
    pub caller: String,
    /// Backend path, e.g. `/orders/5/spots`.
    pub path: String,
    /// Query pairs, sorted so parameter order does not matter.
    pub query: Vec<(String, String)>,
}

impl CacheKey {
    /// Build a key for a read by `token` of `path` with `query`.
    pub fn new(token: &BearerToken, path: &str, query: &[(&str, String)]) -> Self {
        let mut query: Vec<(String, String)> = query
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect();
        query.sort();
        Self {
            caller: token.fingerprint(),
            path: path.to_string(),
            query,
        }
    }
}

#[derive(Debug, Clone)]
struct CachedResponse {
    value: Value,
    stored_at: Instant,
}

/// TTL cache of decoded JSON responses.
#[derive(Debug)]
pub struct QueryCache {
    ttl: Duration,
    entries: DashMap<CacheKey, CachedResponse>,
    generations: DashMap<String, u64>,
    created: Instant,
    last_sweep_ms: AtomicU64,
}

impl QueryCache {
    /// Create a cache whose entries live for `ttl`. A zero TTL disables
    /// caching entirely.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: DashMap::new(),
            generations: DashMap::new(),
            created: Instant::now(),
            last_sweep_ms: AtomicU64::new(0),
        }
    }

    /// Whether the cache stores anything.
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Look up a fresh entry. Expired entries are evicted on access.
    pub fn get(&self, key: &CacheKey) -> Option<Value> {
        if !self.is_enabled() {
            return None;
        }
        let expired = {
            let entry = self.entries.get(key)?;
            if entry.stored_at.elapsed() < self.ttl {
                return Some(entry.value.clone());
            }
            true
        };
        if expired {
            self.entries.remove(key);
        }
        None
    }

    /// Store a response. Expired entries are swept at most once per TTL.
    pub fn insert(&self, key: CacheKey, value: Value) {
        if !self.is_enabled() {
            return;
        }
        self.sweep_if_due();
        self.entries.insert(
            key,
            CachedResponse {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Write generation of every resource `path` mentions. Take it before
    /// sending a read and hand it to [`insert_if_current`](Self::insert_if_current).
    pub fn generation(&self, path: &str) -> u64 {
        segments(path)
            .map(|segment| self.generations.get(segment).map_or(0, |g| *g))
            .sum()
    }

    /// Store a response only if no write touched its path since
    /// `generation` was taken. Returns whether the entry was kept.
    pub fn insert_if_current(&self, key: CacheKey, value: Value, generation: u64) -> bool {
        if !self.is_enabled() || self.generation(&key.path) != generation {
            return false;
        }
        let path = key.path.clone();
        self.insert(key.clone(), value);
        // A write may have bumped the generation between the check and the insert.
        if self.generation(&path) != generation {
            self.entries.remove(&key);
            return false;
        }
        true
    }

    /// Drop every entry whose path mentions the resource of `path`.
    ///
    /// The resource is the first path segment, so a write to `/spots/3`
    /// evicts `/spots`, `/spots/3` and `/orders/5/spots`. Returns the number
    /// of evicted entries.
    pub fn invalidate_resource(&self, path: &str) -> usize {
        let Some(resource) = resource_of(path) else {
            return 0;
        };
        *self.generations.entry(resource.to_string()).or_insert(0) += 1;
        let before = self.entries.len();
        self.entries
            .retain(|key, _| !segments(&key.path).any(|segment| segment == resource));
        let evicted = before.saturating_sub(self.entries.len());
        if evicted > 0 {
            tracing::debug!(resource, evicted, "Invalidated cached responses");
        }
        evicted
    }

    /// Number of stored entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl QueryCache {
    fn sweep_if_due(&self) {
        let now_ms = self.created.elapsed().as_millis() as u64;
        let last = self.last_sweep_ms.load(Ordering::Relaxed);
        if now_ms.saturating_sub(last) < self.ttl.as_millis() as u64 {
            return;
        }
        if self
            .last_sweep_ms
            .compare_exchange(last, now_ms, Ordering::Relaxed, Ordering::Relaxed)
            .is_err()
        {
            return;
        }
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        let swept = before.saturating_sub(self.entries.len());
        if swept > 0 {
            tracing::trace!(swept, "Swept expired cache entries");
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('?')
        .next()
        .unwrap_or("")
        .split('/')
        .filter(|segment| !segment.is_empty())
}

/// First non-empty segment of a path, ignoring any query string.
pub fn resource_of(path: &str) -> Option<&str> {
    segments(path).next()
}
