// crates/post-stats/src/infrastructure/mod.rs

pub mod bootstrap;
pub mod cache;
pub mod config;
pub mod messaging;
pub mod postgres;
