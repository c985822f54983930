// crates/kadsybil-core/src/kl.rs
//
// Partial KL divergence costs.
//
//   cost[c][n] = (n/K) * ln((n/K) / p[c])
//
// Summing cost[c][count_c] over every CPL gives the KL divergence of a
// complete K-node distribution from the ideal occupancy, which is what an
// eclipse detector compares against its threshold.

use crate::cpl::{CplDistribution, K, MAX_CPL};
use crate::error::Result;
use crate::ideal::{BinomialOrderModel, Occupancy, OccupancyModel};

/// Cost of placing nodes where the ideal model expects none. Never fits a budget.
pub const INFEASIBLE: f64 = f64::INFINITY;

/// Read-only after construction; share it freely between concurrent searches.
#[derive(Clone, Debug)]
pub struct KlCostTable {
    occupancy: Occupancy,
    cost: [[f64; K + 1]; MAX_CPL],
}

impl KlCostTable {
    pub fn build(occupancy: &Occupancy) -> Self {
        let mut cost = [[0f64; K + 1]; MAX_CPL];
        for (cpl, row) in cost.iter_mut().enumerate() {
            for (nodes, cell) in row.iter_mut().enumerate() {
                *cell = partial_kl(nodes as u32, occupancy[cpl]);
            }
        }
        Self {
            occupancy: *occupancy,
            cost,
        }
    }

    pub fn with_model<M: OccupancyModel>(model: &M, network_size: i64) -> Result<Self> {
        Ok(Self::build(&model.occupancy(network_size)?))
    }

    pub fn for_network_size(network_size: i64) -> Result<Self> {
        Self::with_model(&BinomialOrderModel, network_size)
    }

    #[inline]
    pub fn cost(&self, cpl: usize, nodes: u32) -> f64 {
        self.cost[cpl][nodes as usize]
    }

    pub fn row(&self, cpl: usize) -> &[f64; K + 1] {
        &self.cost[cpl]
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Total KL of a complete distribution, read off the table.
    pub fn path_cost(&self, nodes: &CplDistribution) -> f64 {
        nodes.iter().map(|(cpl, n)| self.cost(cpl, n)).sum()
    }
}

pub fn partial_kl(nodes: u32, p: f64) -> f64 {
    if nodes == 0 {
        return 0.0;
    }
    if p <= 0.0 {
        return INFEASIBLE;
    }
    let q = nodes as f64 / K as f64;
    q * (q / p).ln()
}

/// Detector-side KL divergence of observed counts from the ideal occupancy.
/// Counts are normalized by their own total, so any neighbourhood size works.
pub fn divergence(counts: &CplDistribution, occupancy: &Occupancy) -> f64 {
    let total = counts.total();
    if total == 0 {
        return 0.0;
    }
    let mut kl = 0.0;
    for (cpl, n) in counts.iter().filter(|&(_, n)| n != 0) {
        let p = occupancy[cpl];
        if p <= 0.0 {
            return INFEASIBLE;
        }
        let q = n as f64 / total as f64;
        kl += q * (q / p).ln();
    }
    kl
}
