// crates/post-stats/tests/common/mod.rs

mod in_memory_pipeline;
mod setup_test_infrastructure;

pub use in_memory_pipeline::InMemoryPipeline;
pub use setup_test_infrastructure::{setup_postgres_test_db, setup_redis_test_cache};
