// crates/kadsybil-cli/src/io/cpl_arg.rs

use anyhow::{Context, Result};
use kadsybil_core::CplDistribution;

/// Parse a `cpl:count,...` flag value.
pub fn parse(s: &str) -> Result<CplDistribution> {
    s.parse::<CplDistribution>()
        .with_context(|| format!("parse cpl distribution {s:?}"))
}
