// crates/kadsybil-core/src/search/engine.rs
//
// Depth-first branch-and-bound over CPL buckets, closest bucket first.
//
// At cursor CPL c the search tries every node count n from what c already
// holds up to K. Each node above the current count is a Sybil, paid for by
// evicting one real node from the lowest surviving CPL below c. Branches stop
// when:
//   - cost[c][n] >= max_kl (larger n only costs more from here on),
//   - there are not enough real nodes below c to evict,
//   - the accumulated path KL reaches max_kl.
// Reaching the lowest occupied CPL completes a candidate, which is scored and
// offered to the top-K tracker.

use tracing::{debug, trace};

use crate::config::{Config, ScorePriority};
use crate::cpl::{K, MAX_CPL};
use crate::error::{Result, SybilError};
use crate::kl::KlCostTable;
use crate::placement::Placement;
use crate::search::closest::force_closest_sybil;
use crate::search::position::{Candidate, SearchPosition};
use crate::search::score::score;
use crate::top::TopK;
use crate::validate::validate_config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions whose cost fit the per-cell budget.
    pub visited: u64,
    /// Branches cut by the KL budget.
    pub pruned: u64,
    /// Candidates that reached the lowest occupied CPL.
    pub complete: u64,
    /// Candidates kept by the tracker at the time they were offered.
    pub accepted: u64,
}

#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub placements: Vec<Placement>,
    pub stats: SearchStats,
}

pub struct Optimizer<'a> {
    config: &'a Config,
    table: &'a KlCostTable,
    top: TopK,
    stats: SearchStats,
}

impl<'a> Optimizer<'a> {
    pub fn new(config: &'a Config, table: &'a KlCostTable) -> Result<Self> {
        validate_config(config)?;
        Ok(Self {
            config,
            table,
            top: TopK::new(config.top),
            stats: SearchStats::default(),
        })
    }

    pub fn run(mut self) -> Result<SearchOutcome> {
        let mut start = Candidate::from_baseline(self.config.baseline);
        if self.config.closest_node_is_sybil {
            force_closest_sybil(&mut start, self.table)?;
        }

        let lower = start.nodes.lowest_occupied().ok_or_else(|| {
            SybilError::Configuration("baseline has no occupied cpl".into())
        })?;
        let pos = SearchPosition {
            cpl: MAX_CPL - 1,
            nodes_in_cpl: 0,
            total: 0,
            path_kl: 0.0,
            lower,
            sybils: start.sybils.total(),
            closest_real: start.closest_real(),
        };
        self.descend(start, pos);

        debug!(
            priority = %self.config.score_priority,
            visited = self.stats.visited,
            pruned = self.stats.pruned,
            complete = self.stats.complete,
            accepted = self.stats.accepted,
            kept = self.top.len(),
            "placement search finished"
        );

        if self.top.is_empty() {
            return Err(SybilError::NoFeasiblePlacement);
        }
        Ok(SearchOutcome {
            placements: self.top.into_vec(),
            stats: self.stats,
        })
    }

    fn descend(&mut self, cand: Candidate, pos: SearchPosition) {
        let c = pos.cpl;
        let max_kl = self.config.max_kl;
        let present = cand.nodes[c];
        let evictable = cand.real_between(pos.lower, c);

        for n in present..=K as u32 {
            let cost = self.table.cost(c, n);
            if cost >= max_kl {
                self.stats.pruned += 1;
                break;
            }
            let added = n - present;
            if added > evictable {
                break;
            }
            self.stats.visited += 1;

            let path_kl = pos.path_kl + cost;
            if path_kl >= max_kl {
                self.stats.pruned += 1;
                continue;
            }

            let mut next = cand;
            let mut step = SearchPosition {
                nodes_in_cpl: n,
                total: pos.total + n,
                path_kl,
                sybils: pos.sybils + added,
                ..pos
            };
            if added > 0 {
                next.nodes[c] += added;
                next.sybils[c] += added;
                step.lower = next.evict_from_bottom(pos.lower, added);
                step.closest_real = next.closest_real();
            }
            debug_assert_eq!(
                step.total + next.nodes.0[..c].iter().sum::<u32>(),
                K as u32
            );

            if c <= step.lower {
                self.finish(next, step);
            } else {
                self.descend(next, SearchPosition { cpl: c - 1, ..step });
            }
        }
    }

    fn finish(&mut self, cand: Candidate, pos: SearchPosition) {
        self.stats.complete += 1;

        let kl = pos.path_kl;
        if kl >= self.config.max_kl {
            return;
        }
        if let Some(min_kl) = self.config.min_kl {
            if kl < min_kl {
                return;
            }
        }
        let score = score(self.config.score_priority, &cand.sybils, pos.closest_real);
        if score < self.config.min_score || pos.sybils < self.config.min_sybils {
            return;
        }

        let kept = self.top.offer(Placement {
            nodes_per_cpl: cand.nodes,
            sybils_per_cpl: cand.sybils,
            kl,
            score,
        });
        if kept {
            self.stats.accepted += 1;
            trace!(score, kl, sybils = pos.sybils, lower = pos.lower, "candidate kept");
        }
    }
}

/// Validate, build the KL table for `config.network_size`, and search.
pub fn search(config: &Config) -> Result<Vec<Placement>> {
    validate_config(config)?;
    let table = KlCostTable::for_network_size(config.network_size)?;
    search_with_table(config, &table)
}

/// Search against a prebuilt table. The table must match `config.network_size`.
pub fn search_with_table(config: &Config, table: &KlCostTable) -> Result<Vec<Placement>> {
    Ok(Optimizer::new(config, table)?.run()?.placements)
}

/// One search per score priority over a shared table.
pub fn score_all(config: &Config) -> Result<Vec<(ScorePriority, Result<Vec<Placement>>)>> {
    validate_config(config)?;
    let table = KlCostTable::for_network_size(config.network_size)?;
    Ok(ScorePriority::ALL
        .iter()
        .map(|&priority| {
            let cfg = Config {
                score_priority: priority,
                ..config.clone()
            };
            (priority, search_with_table(&cfg, &table))
        })
        .collect())
}
