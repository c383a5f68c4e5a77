// crates/post-stats/src/application/record_read/mod.rs

mod record_read_command;
mod record_read_use_case;

pub use record_read_command::RecordReadCommand;
pub use record_read_use_case::RecordReadUseCase;
