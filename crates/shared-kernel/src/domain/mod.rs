// crates/shared-kernel/src/domain/mod.rs

pub mod repositories;
pub mod value_objects;
