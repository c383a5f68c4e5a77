// crates/post-stats/src/application/set_relation/mod.rs

mod set_relation_command;
mod set_relation_use_case;

pub use set_relation_command::SetRelationCommand;
pub use set_relation_use_case::SetRelationUseCase;
