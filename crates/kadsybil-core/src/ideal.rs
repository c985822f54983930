// crates/kadsybil-core/src/ideal.rs
//
// Ideal (honest network) occupancy of the K closest slots per CPL.
//
// For a uniformly random key and N honest peers, the number of peers sharing
// at least c+1 prefix bits with the key is Binomial(N, 2^-(c+1)). Summing its
// PMF over 0..=i gives P(the (i+1)-th closest peer has CPL <= c); the
// difference between neighbouring CPLs is that order statistic's mass at c.
// The occupancy vector averages those masses over the K order statistics.

use statrs::distribution::{Binomial, Discrete};

use crate::cpl::{K, MAX_CPL};
use crate::error::{Result, SybilError};

/// Default network size estimate used when the caller has none.
pub const DEFAULT_NETWORK_SIZE: i64 = 13_239;

/// Expected fraction of the K closest slots at each CPL. Sums to <= 1.
pub type Occupancy = [f64; MAX_CPL];

/// Pluggable oracle for the honest-network distribution.
/// Implementations must be deterministic in `network_size`.
pub trait OccupancyModel {
    fn occupancy(&self, network_size: i64) -> Result<Occupancy>;
}

/// Order-statistic binomial model of a uniformly distributed keyspace.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinomialOrderModel;

impl OccupancyModel for BinomialOrderModel {
    fn occupancy(&self, network_size: i64) -> Result<Occupancy> {
        if network_size <= 0 {
            return Err(SybilError::InvalidNetworkSize(network_size));
        }
        let n = network_size as u64;

        let laws = (0..MAX_CPL)
            .map(|cpl| {
                Binomial::new(0.5f64.powi(cpl as i32 + 1), n)
                    .map_err(|e| SybilError::Configuration(format!("binomial at cpl {cpl}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut cdf = [0f64; MAX_CPL];
        let mut occupancy = [0f64; MAX_CPL];

        for i in 0..K as u64 {
            for (acc, law) in cdf.iter_mut().zip(&laws) {
                *acc += law.pmf(i);
            }
            for cpl in 0..MAX_CPL {
                let mass = if cpl == 0 {
                    cdf[0]
                } else {
                    cdf[cpl] - cdf[cpl - 1]
                };
                // rounding can leave a -1e-17 where two CDFs agree
                occupancy[cpl] += mass.max(0.0);
            }
        }

        for p in occupancy.iter_mut() {
            *p /= K as f64;
        }
        Ok(occupancy)
    }
}

pub fn ideal_occupancy(network_size: i64) -> Result<Occupancy> {
    BinomialOrderModel.occupancy(network_size)
}
