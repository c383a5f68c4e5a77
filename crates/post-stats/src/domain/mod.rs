// crates/post-stats/src/domain/mod.rs

pub mod events;
pub mod repositories;
pub mod value_objects;
