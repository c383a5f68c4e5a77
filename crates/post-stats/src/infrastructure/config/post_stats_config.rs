// crates/post-stats/src/infrastructure/config/post_stats_config.rs

use crate::application::workers::FlusherConfig;
use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use std::str::FromStr;
use std::time::Duration;

/// Réglages du worker de stats (broker + flusher). Postgres et Redis ont leur propre config.
#[derive(Debug, Clone)]
pub struct PostStatsConfig {
    pub brokers: String,
    pub topic: String,
    pub group_id: String,
    pub prefetch: usize,
    pub flush_interval: Duration,
    pub flush_batch_size: usize,
    pub flush_lock_ttl: Duration,
    pub event_marker_ttl: Duration,
}

impl Default for PostStatsConfig {
    fn default() -> Self {
        Self {
            brokers: "localhost:9092".to_string(),
            topic: "post.stats".to_string(),
            group_id: "post-stats-group".to_string(),
            prefetch: 50,
            flush_interval: Duration::from_millis(5000),
            flush_batch_size: 100,
            flush_lock_ttl: Duration::from_millis(4000),
            event_marker_ttl: Duration::from_secs(86400),
        }
    }
}

impl PostStatsConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Variables absentes : valeur par défaut. Variables présentes mais invalides : erreur.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();

        Ok(Self {
            brokers: lookup("KAFKA_BROKERS").unwrap_or(defaults.brokers),
            topic: lookup("POST_STATS_TOPIC").unwrap_or(defaults.topic),
            group_id: lookup("POST_STATS_GROUP_ID").unwrap_or(defaults.group_id),
            prefetch: parse_or(&lookup, "POST_STATS_PREFETCH", defaults.prefetch)?,
            flush_interval: parse_or(&lookup, "POST_STATS_FLUSH_INTERVAL_MS", 5000u64)
                .map(Duration::from_millis)?,
            flush_batch_size: parse_or(&lookup, "POST_STATS_FLUSH_BATCH_SIZE", defaults.flush_batch_size)?,
            flush_lock_ttl: parse_or(&lookup, "POST_STATS_FLUSH_LOCK_TTL_MS", 4000u64)
                .map(Duration::from_millis)?,
            event_marker_ttl: parse_or(&lookup, "POST_STATS_EVENT_TTL_SECS", 86400u64)
                .map(Duration::from_secs)?,
        })
    }

    pub fn flusher(&self) -> FlusherConfig {
        FlusherConfig {
            interval: self.flush_interval,
            batch_size: self.flush_batch_size,
            lock_ttl: self.flush_lock_ttl,
        }
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> AppResult<T> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::new(ErrorCode::InternalError, format!("Invalid {key}: '{raw}'"))),
    }
}
