// crates/kadsybil-core/src/config.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::blake3_16;
use crate::cpl::CplDistribution;
use crate::error::{Result, SybilError};
use crate::ideal::DEFAULT_NETWORK_SIZE;

/// Default exclusive KL budget for a placement.
pub const DEFAULT_MAX_KL: f64 = 0.94;

const MAGIC: &[u8; 4] = b"KSC1";

/// What a candidate placement is ranked by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorePriority {
    /// Raw Sybil count.
    Quantity,
    /// Sybils weighted by their CPL: closer to the target is worth more.
    Distribution,
    /// Like `Distribution`, counting only Sybils at or above the closest real node.
    Proximity,
}

impl ScorePriority {
    pub const ALL: [ScorePriority; 3] = [
        ScorePriority::Quantity,
        ScorePriority::Distribution,
        ScorePriority::Proximity,
    ];

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quantity" | "q" => Ok(ScorePriority::Quantity),
            "distribution" | "d" => Ok(ScorePriority::Distribution),
            "proximity" | "p" => Ok(ScorePriority::Proximity),
            _ => Err(SybilError::Configuration(format!(
                "unknown score priority: {s}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScorePriority::Quantity => "quantity",
            ScorePriority::Distribution => "distribution",
            ScorePriority::Proximity => "proximity",
        }
    }

    fn tag(&self) -> u8 {
        match self {
            ScorePriority::Quantity => 0,
            ScorePriority::Distribution => 1,
            ScorePriority::Proximity => 2,
        }
    }
}

impl fmt::Display for ScorePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScorePriority {
    type Err = SybilError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Attacker-supplied parameters for one optimization run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Real nodes per CPL among the K closest; must sum to K.
    pub baseline: CplDistribution,
    /// How many ranked placements to keep.
    pub top: usize,
    /// Exclusive upper bound on a placement's KL divergence.
    pub max_kl: f64,
    /// Inclusive lower bound on KL, if any.
    pub min_kl: Option<f64>,
    pub min_score: f64,
    pub min_sybils: u32,
    /// Force the single closest slot to be a Sybil.
    pub closest_node_is_sybil: bool,
    pub network_size: i64,
    pub score_priority: ScorePriority,
}

impl Config {
    pub fn new(baseline: CplDistribution) -> Self {
        Self {
            baseline,
            top: 5,
            max_kl: DEFAULT_MAX_KL,
            min_kl: None,
            min_score: -1.0,
            min_sybils: 0,
            closest_node_is_sybil: false,
            network_size: DEFAULT_NETWORK_SIZE,
            score_priority: ScorePriority::Quantity,
        }
    }

    /// Canonical little-endian encoding of every field.
    /// Layout:
    /// MAGIC[4]
    /// baseline: MAX_CPL x u32
    /// top:u64 max_kl:f64 has_min_kl:u8 min_kl:f64 min_score:f64
    /// min_sybils:u32 closest_node_is_sybil:u8 network_size:i64 priority:u8
    pub fn encode(&self) -> Vec<u8> {
        let mut b = Vec::with_capacity(4 + 4 * self.baseline.0.len() + 48);
        b.extend_from_slice(MAGIC);
        for n in self.baseline.0 {
            b.extend_from_slice(&n.to_le_bytes());
        }
        b.extend_from_slice(&(self.top as u64).to_le_bytes());
        b.extend_from_slice(&self.max_kl.to_le_bytes());
        b.push(self.min_kl.is_some() as u8);
        b.extend_from_slice(&self.min_kl.unwrap_or(0.0).to_le_bytes());
        b.extend_from_slice(&self.min_score.to_le_bytes());
        b.extend_from_slice(&self.min_sybils.to_le_bytes());
        b.push(self.closest_node_is_sybil as u8);
        b.extend_from_slice(&self.network_size.to_le_bytes());
        b.push(self.score_priority.tag());
        b
    }

    /// Stable 16-byte fingerprint of the run parameters.
    pub fn id_16(&self) -> [u8; 16] {
        blake3_16(&self.encode())
    }
}
