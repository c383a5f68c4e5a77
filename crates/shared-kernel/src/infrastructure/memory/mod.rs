// crates/shared-kernel/src/infrastructure/memory/mod.rs

mod in_memory_message_bus;

pub use in_memory_message_bus::InMemoryMessageBus;
