// crates/shared-kernel/src/domain/repositories/cache_repository.rs

use crate::errors::AppResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Hash de compteurs (champ -> valeur). Un hash vide signifie "clé absente".
pub type CounterHash = HashMap<String, i64>;

/// Incrément conditionné par l'absence d'un marqueur.
/// Si `marker_key` n'existe pas : `HINCRBY hash_key field delta`, `SADD dirty_set member`,
/// puis pose du marqueur avec `marker_ttl`. Les trois écritures sont atomiques.
#[derive(Debug, Clone)]
pub struct GuardedIncrement {
    pub marker_key: String,
    pub marker_ttl: Duration,
    pub hash_key: String,
    pub field: String,
    pub delta: i64,
    pub dirty_set: String,
    pub member: String,
}

#[async_trait]
pub trait CacheRepository: Send + Sync {
    /// SET NX avec TTL. Renvoie `true` si la clé a été créée.
    async fn set_if_absent(&self, key: &str, ttl: Duration) -> AppResult<bool>;

    /// Lecture groupée, dans l'ordre des clés demandées.
    async fn hash_get_many(&self, keys: &[String]) -> AppResult<Vec<CounterHash>>;
    /// Écrit chaque hash uniquement si sa clé n'existe pas encore (test + écriture atomiques par clé).
    /// Un hash déjà présent n'est jamais écrasé. Renvoie le nombre de hashes écrits.
    async fn hash_set_many_if_absent(&self, entries: Vec<(String, CounterHash)>) -> AppResult<usize>;

    async fn set_add(&self, set_key: &str, members: &[String]) -> AppResult<()>;
    /// Retrait destructif (SPOP) d'au plus `count` membres.
    async fn set_pop(&self, set_key: &str, count: usize) -> AppResult<Vec<String>>;

    /// Renvoie `false` si le marqueur existait déjà (rien n'a été appliqué).
    async fn incr_once(&self, op: GuardedIncrement) -> AppResult<bool>;
}
