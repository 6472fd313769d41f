//! In-memory simulation cache with TTL-based freshness.
//!
//! Entries are keyed by [`super::compute_cross_key`] and live only in process
//! memory. An entry older than `ttl_s` is treated as absent and dropped on
//! access; entries are never written anywhere.
//!
//! Time is injected via `_at` suffixed methods for deterministic testing.
//! Production callers use the convenience methods without the suffix.

use std::collections::HashMap;
use std::time::Instant;

use super::result::SimulationResult;

#[derive(Debug, Clone)]
struct CacheEntry {
    result: SimulationResult,
    inserted_at: Instant,
}

#[derive(Debug)]
pub struct SimulationCache {
    entries: HashMap<u64, CacheEntry>,
    ttl_s: f64,
    capacity: usize,
    hits_total: u64,
    misses_total: u64,
    expired_total: u64,
    evictions_total: u64,
}

impl SimulationCache {
    /// Empty cache. Storage grows with use; `capacity` only bounds it.
    pub fn new(ttl_s: f64, capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_s,
            capacity,
            hits_total: 0,
            misses_total: 0,
            expired_total: 0,
            evictions_total: 0,
        }
    }

    /// Insert stamped with the current time.
    pub fn insert(&mut self, key: u64, result: SimulationResult) {
        self.insert_at(key, result, Instant::now());
    }

    /// Insert with an explicit timestamp. At capacity, the oldest entry is
    /// evicted first. A zero-capacity cache stores nothing.
    pub fn insert_at(&mut self, key: u64, result: SimulationResult, now: Instant) {
        if self.capacity == 0 {
            return;
        }
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        self.entries.insert(
            key,
            CacheEntry {
                result,
                inserted_at: now,
            },
        );
    }

    /// Fresh entry for `key`, if any, as of now.
    pub fn get(&mut self, key: u64) -> Option<SimulationResult> {
        self.get_at(key, Instant::now())
    }

    /// Look up with an explicit "now".
    ///
    /// Age strictly greater than the TTL is stale. A non-finite TTL makes
    /// every entry stale.
    pub fn get_at(&mut self, key: u64, now: Instant) -> Option<SimulationResult> {
        let Some(entry) = self.entries.get(&key) else {
            self.misses_total += 1;
            return None;
        };

        let age_s = now.saturating_duration_since(entry.inserted_at).as_secs_f64();
        if !self.ttl_s.is_finite() || age_s > self.ttl_s {
            self.entries.remove(&key);
            self.expired_total += 1;
            self.misses_total += 1;
            return None;
        }

        self.hits_total += 1;
        Some(entry.result.clone())
    }

    /// Drop every entry, e.g. after pedigree data changed.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    pub fn ttl_s(&self) -> f64 {
        self.ttl_s
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hits_total(&self) -> u64 {
        self.hits_total
    }

    pub fn misses_total(&self) -> u64 {
        self.misses_total
    }

    pub fn expired_total(&self) -> u64 {
        self.expired_total
    }

    pub fn evictions_total(&self) -> u64 {
        self.evictions_total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.inserted_at)
            .map(|(&key, _)| key);
        if let Some(key) = oldest {
            self.entries.remove(&key);
            self.evictions_total += 1;
        }
    }
}
