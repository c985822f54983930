pub mod error;
pub mod validate;

pub mod checksum;
pub mod config;
pub mod cpl;
pub mod estimate;
pub mod ideal;
pub mod keyspace;
pub mod kl;
pub mod placement;
pub mod search;
pub mod top;

pub use crate::config::{Config, ScorePriority};
pub use crate::cpl::{CplDistribution, K, MAX_CPL};
pub use crate::error::{Result, SybilError};
pub use crate::kl::KlCostTable;
pub use crate::placement::Placement;
pub use crate::search::{search, search_with_table};
