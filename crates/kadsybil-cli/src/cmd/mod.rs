// crates/kadsybil-cli/src/cmd/mod.rs

use clap::ValueEnum;
use kadsybil_core::ScorePriority;

pub mod compare;
pub mod count;
pub mod estimate;
pub mod ideal;
pub mod kl;
pub mod optimize;
pub mod table;

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum Priority {
    Quantity,
    Distribution,
    Proximity,
}

impl From<Priority> for ScorePriority {
    fn from(p: Priority) -> Self {
        match p {
            Priority::Quantity => ScorePriority::Quantity,
            Priority::Distribution => ScorePriority::Distribution,
            Priority::Proximity => ScorePriority::Proximity,
        }
    }
}
