// crates/kadsybil-core/src/cpl.rs
//
// Per-CPL node counts among the K closest slots to a target key.
// Index = common prefix length with the target (higher = closer).

use std::fmt;
use std::ops::{Index, IndexMut, RangeInclusive};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SybilError};

/// Neighbourhood size: the closest-K routing slots around a key.
pub const K: usize = 20;

/// Number of CPL buckets the optimizer reasons about.
pub const MAX_CPL: usize = 30;

/// Keyspace width in bits (SHA-256 keys).
pub const KEY_BITS: usize = 256;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CplDistribution(pub [u32; MAX_CPL]);

impl CplDistribution {
    /// Build from a histogram of any length (e.g. the KEY_BITS+1 output of
    /// `keyspace::count_in_cpl`). Occupied entries at or past MAX_CPL are rejected.
    pub fn from_counts(counts: &[u32]) -> Result<Self> {
        let mut out = [0u32; MAX_CPL];
        for (cpl, &n) in counts.iter().enumerate() {
            if n == 0 {
                continue;
            }
            if cpl >= MAX_CPL {
                return Err(SybilError::Configuration(format!(
                    "{n} node(s) at cpl {cpl}, beyond the last supported cpl {}",
                    MAX_CPL - 1
                )));
            }
            out[cpl] = n;
        }
        Self(out).checked_total()?;
        Ok(Self(out))
    }

    pub fn from_pairs(pairs: &[(usize, u32)]) -> Result<Self> {
        let mut out = Self::default();
        for &(cpl, n) in pairs {
            if cpl >= MAX_CPL {
                return Err(SybilError::Configuration(format!(
                    "cpl {cpl} out of range (max {})",
                    MAX_CPL - 1
                )));
            }
            out.0[cpl] = out.0[cpl].checked_add(n).ok_or_else(|| {
                SybilError::Configuration(format!("count overflow at cpl {cpl}"))
            })?;
        }
        out.checked_total()?;
        Ok(out)
    }

    /// Sum of all buckets; saturates at u32::MAX.
    pub fn total(&self) -> u32 {
        self.0.iter().fold(0u32, |acc, &n| acc.saturating_add(n))
    }

    fn checked_total(&self) -> Result<u32> {
        self.0
            .iter()
            .try_fold(0u32, |acc, &n| acc.checked_add(n))
            .ok_or_else(|| SybilError::Configuration("total node count overflows u32".into()))
    }

    pub fn lowest_occupied(&self) -> Option<usize> {
        self.0.iter().position(|&n| n != 0)
    }

    pub fn highest_occupied(&self) -> Option<usize> {
        self.0.iter().rposition(|&n| n != 0)
    }

    pub fn occupied_range(&self) -> Option<RangeInclusive<usize>> {
        Some(self.lowest_occupied()?..=self.highest_occupied()?)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

impl Index<usize> for CplDistribution {
    type Output = u32;

    fn index(&self, cpl: usize) -> &u32 {
        &self.0[cpl]
    }
}

impl IndexMut<usize> for CplDistribution {
    fn index_mut(&mut self, cpl: usize) -> &mut u32 {
        &mut self.0[cpl]
    }
}

/// Compact form: occupied buckets only, "cpl:count" joined by commas.
impl fmt::Display for CplDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (cpl, n) in self.iter().filter(|&(_, n)| n != 0) {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{cpl}:{n}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for CplDistribution {
    type Err = SybilError;

    fn from_str(s: &str) -> Result<Self> {
        let mut pairs = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (cpl, n) = part.split_once(':').ok_or_else(|| {
                SybilError::Configuration(format!("expected cpl:count, got {part:?}"))
            })?;
            let cpl: usize = cpl.trim().parse().map_err(|_| {
                SybilError::Configuration(format!("bad cpl in {part:?}"))
            })?;
            let n: u32 = n.trim().parse().map_err(|_| {
                SybilError::Configuration(format!("bad count in {part:?}"))
            })?;
            if pairs.iter().any(|&(c, _)| c == cpl) {
                return Err(SybilError::Configuration(format!("cpl {cpl} listed twice")));
            }
            pairs.push((cpl, n));
        }
        Self::from_pairs(&pairs)
    }
}
