// crates/post-stats/src/infrastructure/cache/cache_keys.rs

use crate::domain::events::StatsField;
use crate::domain::value_objects::ReadViewer;
use shared_kernel::domain::value_objects::PostId;

pub const FIELD_LIKE: &str = "like_cnt";
pub const FIELD_COLLECT: &str = "collect_cnt";
pub const FIELD_READ: &str = "read_cnt";

/// Schéma des clés du cache chaud.
pub struct CacheKeys;

impl CacheKeys {
    pub const DIRTY_SET: &'static str = "post:stats:dirty";
    pub const FLUSH_LOCK: &'static str = "post:stats:flush:lock";

    pub fn stats(post_id: PostId) -> String {
        format!("post:stats:{}", post_id)
    }

    pub fn event(event_id: &str) -> String {
        format!("post:stats:event:{}", event_id)
    }

    pub fn read_dedupe(post_id: PostId, viewer: &ReadViewer) -> String {
        match viewer {
            ReadViewer::User(user_id) => {
                format!("post:read:dedupe:uid:{}:pid:{}", user_id, post_id)
            }
            ReadViewer::Anonymous(fingerprint) => {
                format!("post:read:dedupe:anon:{}:pid:{}", fingerprint, post_id)
            }
        }
    }

    pub fn field(field: StatsField) -> &'static str {
        match field {
            StatsField::Like => FIELD_LIKE,
            StatsField::Collect => FIELD_COLLECT,
            StatsField::Read => FIELD_READ,
        }
    }
}
