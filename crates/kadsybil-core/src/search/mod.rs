// crates/kadsybil-core/src/search/mod.rs

pub mod closest;
pub mod engine;
pub mod position;
pub mod score;

pub use engine::{score_all, search, search_with_table, Optimizer, SearchOutcome, SearchStats};
pub use position::{Candidate, SearchPosition};
