// crates/post-stats/src/domain/value_objects/mod.rs

mod post_stats;
mod post_user_stats;
mod read_viewer;
mod relation;

pub use post_stats::PostStats;
pub use post_user_stats::PostUserStats;
pub use read_viewer::ReadViewer;
pub use relation::{RelationKind, RelationStatus};
