// crates/shared-kernel/src/domain/repositories/cache_repository_stub.rs

use crate::domain::repositories::{CacheRepository, CounterHash, GuardedIncrement};
use crate::errors::{AppError, AppResult, ErrorCode};
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Default)]
pub struct CacheState {
    /// Clés simples (marqueurs) -> date d'expiration
    pub markers: HashMap<String, Instant>,
    pub hashes: HashMap<String, CounterHash>,
    pub sets: HashMap<String, BTreeSet<String>>,
}

impl CacheState {
    fn marker_alive(&mut self, key: &str) -> bool {
        match self.markers.get(key) {
            Some(expires_at) if *expires_at > Instant::now() => true,
            Some(_) => {
                self.markers.remove(key);
                false
            }
            None => false,
        }
    }
}

/// Cache en mémoire pour les tests. Les TTL suivent l'horloge tokio (compatible `start_paused`).
#[derive(Default)]
pub struct CacheRepositoryStub {
    pub state: Mutex<CacheState>,
    pub fail_all: AtomicBool,
    failing_ops: Mutex<HashSet<&'static str>>,
}

impl CacheRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fait échouer une opération précise (ex: "hash_get_many")
    pub fn fail_on(&self, op: &'static str) {
        self.failing_ops.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: &'static str) {
        self.failing_ops.lock().unwrap().remove(op);
    }

    pub fn set_members(&self, set_key: &str) -> BTreeSet<String> {
        self.state
            .lock()
            .unwrap()
            .sets
            .get(set_key)
            .cloned()
            .unwrap_or_default()
    }

    pub fn hash(&self, key: &str) -> Option<CounterHash> {
        self.state.lock().unwrap().hashes.get(key).cloned()
    }

    fn check(&self, op: &'static str) -> AppResult<()> {
        if self.fail_all.load(Ordering::SeqCst) || self.failing_ops.lock().unwrap().contains(op) {
            return Err(AppError::new(ErrorCode::InfrastructureFailure, "Cache Down"));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheRepository for CacheRepositoryStub {
    async fn set_if_absent(&self, key: &str, ttl: Duration) -> AppResult<bool> {
        self.check("set_if_absent")?;
        let mut state = self.state.lock().unwrap();
        if state.marker_alive(key) {
            return Ok(false);
        }
        state.markers.insert(key.to_string(), Instant::now() + ttl);
        Ok(true)
    }

    async fn hash_get_many(&self, keys: &[String]) -> AppResult<Vec<CounterHash>> {
        self.check("hash_get_many")?;
        let state = self.state.lock().unwrap();
        Ok(keys
            .iter()
            .map(|k| state.hashes.get(k).cloned().unwrap_or_default())
            .collect())
    }

    async fn hash_set_many_if_absent(&self, entries: Vec<(String, CounterHash)>) -> AppResult<usize> {
        self.check("hash_set_many_if_absent")?;
        let mut state = self.state.lock().unwrap();
        let mut written = 0;
        for (key, fields) in entries {
            if fields.is_empty() || state.hashes.contains_key(&key) {
                continue;
            }
            state.hashes.insert(key, fields);
            written += 1;
        }
        Ok(written)
    }

    async fn set_add(&self, set_key: &str, members: &[String]) -> AppResult<()> {
        self.check("set_add")?;
        let mut state = self.state.lock().unwrap();
        state
            .sets
            .entry(set_key.to_string())
            .or_default()
            .extend(members.iter().cloned());
        Ok(())
    }

    async fn set_pop(&self, set_key: &str, count: usize) -> AppResult<Vec<String>> {
        self.check("set_pop")?;
        let mut state = self.state.lock().unwrap();
        let Some(set) = state.sets.get_mut(set_key) else {
            return Ok(Vec::new());
        };
        let popped: Vec<String> = std::iter::from_fn(|| set.pop_first()).take(count).collect();
        if set.is_empty() {
            state.sets.remove(set_key);
        }
        Ok(popped)
    }

    async fn incr_once(&self, op: GuardedIncrement) -> AppResult<bool> {
        self.check("incr_once")?;
        // Un seul verrou pour les trois écritures : même atomicité que le script Lua
        let mut state = self.state.lock().unwrap();
        if state.marker_alive(&op.marker_key) {
            return Ok(false);
        }
        *state
            .hashes
            .entry(op.hash_key)
            .or_default()
            .entry(op.field)
            .or_insert(0) += op.delta;
        state.sets.entry(op.dirty_set).or_default().insert(op.member);
        state
            .markers
            .insert(op.marker_key, Instant::now() + op.marker_ttl);
        Ok(true)
    }
}
