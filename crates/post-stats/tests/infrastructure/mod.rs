// crates/post-stats/tests/infrastructure/mod.rs

mod cache_it_for_post_stats;
mod repository_it_for_post_stats;
mod repository_it_for_relations;
