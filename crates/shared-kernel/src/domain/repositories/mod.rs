mod cache_repository;
mod cache_repository_stub;

pub use cache_repository::{CacheRepository, CounterHash, GuardedIncrement};
pub use cache_repository_stub::CacheRepositoryStub;
