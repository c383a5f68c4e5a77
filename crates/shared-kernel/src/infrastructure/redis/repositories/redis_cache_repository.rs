// crates/shared-kernel/src/infrastructure/redis/repositories/redis_cache_repository.rs

use async_trait::async_trait;
use fred::clients::Pool;
use fred::interfaces::{ClientLike, HashesInterface, KeysInterface, LuaInterface, SetsInterface};
use fred::prelude::*;
use fred::types::{Builder, Expiration, SetOptions, Value};
use std::collections::HashMap;
use std::time::Duration;

use crate::domain::repositories::{CacheRepository, CounterHash, GuardedIncrement};
use crate::errors::{AppResult, infra_err};

/// KEYS[1] = marqueur, KEYS[2] = hash, KEYS[3] = set dirty
/// ARGV[1] = champ, ARGV[2] = delta, ARGV[3] = membre dirty, ARGV[4] = TTL du marqueur (ms)
const INCR_ONCE_SCRIPT: &str = r#"
if redis.call('EXISTS', KEYS[1]) == 1 then
    return 0
end
redis.call('HINCRBY', KEYS[2], ARGV[1], ARGV[2])
redis.call('SADD', KEYS[3], ARGV[3])
redis.call('SET', KEYS[1], '1', 'PX', ARGV[4])
return 1
"#;

/// KEYS[1] = hash ; ARGV = champ1, valeur1, champ2, valeur2...
const HSET_IF_ABSENT_SCRIPT: &str = r#"
if redis.call('EXISTS', KEYS[1]) == 1 then
    return 0
end
redis.call('HSET', KEYS[1], unpack(ARGV))
return 1
"#;

pub struct RedisCacheRepository {
    pool: Pool,
}

impl RedisCacheRepository {
    pub async fn new(redis_url: &str, max_clients: usize) -> AppResult<Self> {
        let config = Config::from_url(redis_url).map_err(infra_err)?;
        let max_clients = max_clients.max(1);

        let pool = Builder::from_config(config)
            .with_connection_config(|cfg| {
                cfg.connection_timeout = Duration::from_secs(5);
                cfg.internal_command_timeout = Duration::from_secs(5);
                cfg.max_command_attempts = 5;
            })
            // On rend la reconnexion plus patiente
            .set_policy(ReconnectPolicy::new_exponential(0, 100, 1000, 2))
            .build_pool(max_clients)
            .map_err(infra_err)?;

        pool.init().await.map_err(infra_err)?;

        // On attend que TOUS les clients du pool soient connectés
        pool.wait_for_connect().await.map_err(infra_err)?;

        Ok(Self { pool })
    }

    fn ttl_millis(ttl: Duration) -> i64 {
        // Redis refuse un TTL nul
        (ttl.as_millis() as i64).max(1)
    }

    /// Les valeurs illisibles valent 0 (un compteur corrompu ne bloque pas la lecture).
    fn parse_counter_hash(value: Value) -> AppResult<CounterHash> {
        if value.is_null() {
            return Ok(CounterHash::new());
        }

        let raw: HashMap<String, String> = value.convert().map_err(infra_err)?;
        Ok(raw
            .into_iter()
            .map(|(field, v)| {
                let parsed = v.parse::<i64>().unwrap_or_else(|_| {
                    tracing::warn!(field = %field, value = %v, "unparsable counter value, using 0");
                    0
                });
                (field, parsed)
            })
            .collect())
    }
}

#[async_trait]
impl CacheRepository for RedisCacheRepository {
    async fn set_if_absent(&self, key: &str, ttl: Duration) -> AppResult<bool> {
        let result: Option<String> = self
            .pool
            .set(
                key,
                "1",
                Some(Expiration::PX(Self::ttl_millis(ttl))),
                Some(SetOptions::NX),
                false,
            )
            .await
            .map_err(infra_err)?;

        Ok(result.is_some())
    }

    async fn hash_get_many(&self, keys: &[String]) -> AppResult<Vec<CounterHash>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        // Un seul aller-retour réseau pour tout le lot
        let pipeline = self.pool.next().pipeline();
        for key in keys {
            pipeline
                .hgetall::<(), _>(key.as_str())
                .await
                .map_err(infra_err)?;
        }

        let results: Vec<Value> = pipeline.all().await.map_err(infra_err)?;
        results
            .into_iter()
            .map(Self::parse_counter_hash)
            .collect()
    }

    async fn hash_set_many_if_absent(&self, entries: Vec<(String, CounterHash)>) -> AppResult<usize> {
        let entries: Vec<_> = entries
            .into_iter()
            .filter(|(_, fields)| !fields.is_empty())
            .collect();
        if entries.is_empty() {
            return Ok(0);
        }

        // Un script par clé, tous envoyés dans le même pipeline
        let pipeline = self.pool.next().pipeline();
        for (key, fields) in entries {
            let args: Vec<String> = fields
                .into_iter()
                .flat_map(|(field, value)| [field, value.to_string()])
                .collect();
            pipeline
                .eval::<(), _, _, _>(HSET_IF_ABSENT_SCRIPT, vec![key], args)
                .await
                .map_err(infra_err)?;
        }

        let written: Vec<i64> = pipeline.all().await.map_err(infra_err)?;
        Ok(written.into_iter().filter(|w| *w == 1).count())
    }

    async fn set_add(&self, set_key: &str, members: &[String]) -> AppResult<()> {
        if members.is_empty() {
            return Ok(());
        }

        self.pool
            .sadd::<i64, _, _>(set_key, members.to_vec())
            .await
            .map_err(infra_err)?;
        Ok(())
    }

    async fn set_pop(&self, set_key: &str, count: usize) -> AppResult<Vec<String>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let popped: Value = self
            .pool
            .spop(set_key, Some(count))
            .await
            .map_err(infra_err)?;

        if popped.is_null() {
            return Ok(Vec::new());
        }
        popped.convert().map_err(infra_err)
    }

    async fn incr_once(&self, op: GuardedIncrement) -> AppResult<bool> {
        let keys = vec![op.marker_key, op.hash_key, op.dirty_set];
        let args = vec![
            op.field,
            op.delta.to_string(),
            op.member,
            Self::ttl_millis(op.marker_ttl).to_string(),
        ];

        let applied: i64 = self
            .pool
            .eval(INCR_ONCE_SCRIPT, keys, args)
            .await
            .map_err(infra_err)?;

        Ok(applied == 1)
    }
}
