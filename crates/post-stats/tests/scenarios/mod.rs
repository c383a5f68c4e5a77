// crates/post-stats/tests/scenarios/mod.rs

mod interaction_flow_it;
