// crates/kadsybil-cli/src/io/mod.rs

pub mod cpl_arg;
pub mod keys;
pub mod report;
pub mod samples;
