// crates/kadsybil-core/tests/scenarios.rs

use kadsybil_core::search::{score_all, search_with_table, Optimizer};
use kadsybil_core::{Config, CplDistribution, KlCostTable, ScorePriority, SybilError};

fn quantity_config() -> Config {
    let mut cfg = Config::new("8:1,9:15,10:4".parse().unwrap());
    cfg.max_kl = 0.94;
    cfg.score_priority = ScorePriority::Quantity;
    cfg
}

fn best_sybils(cfg: &Config, table: &KlCostTable) -> Option<u32> {
    match search_with_table(cfg, table) {
        Ok(out) => Some(out[0].total_sybils()),
        Err(SybilError::NoFeasiblePlacement) => None,
        Err(e) => panic!("unexpected error: {e}"),
    }
}

#[test]
fn quantity_top_result_is_the_most_sybils_under_budget() {
    let table = KlCostTable::for_network_size(13_239).unwrap();
    let cfg = quantity_config();
    let out = search_with_table(&cfg, &table).unwrap();

    let best = out[0].total_sybils();
    // Whole-distribution checks admit 18, but that placement's prefix KL
    // passes the budget at CPL 11 and is cut.
    assert_eq!(best, 17);
    assert_eq!(out[0].score, best as f64);
    assert!(out.iter().all(|r| r.total_sybils() <= best));
    assert!(out[0].kl < 0.94);
}

#[test]
fn tighter_budget_never_allows_more_sybils() {
    let table = KlCostTable::for_network_size(13_239).unwrap();
    let mut cfg = quantity_config();
    let mut prev = best_sybils(&cfg, &table).expect("feasible at 0.94");

    for max_kl in [0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1] {
        cfg.max_kl = max_kl;
        match best_sybils(&cfg, &table) {
            Some(n) => {
                assert!(n <= prev, "max_kl {max_kl}: {n} > {prev}");
                prev = n;
            }
            None => prev = 0,
        }
    }
}

#[test]
fn min_sybils_above_the_maximum_is_infeasible() {
    let table = KlCostTable::for_network_size(13_239).unwrap();
    let mut cfg = quantity_config();
    cfg.top = 1;
    let best = best_sybils(&cfg, &table).unwrap();

    cfg.min_sybils = best + 1;
    assert_eq!(
        search_with_table(&cfg, &table).unwrap_err(),
        SybilError::NoFeasiblePlacement
    );
}

#[test]
fn tiny_budget_is_infeasible_not_a_panic() {
    let mut cfg = quantity_config();
    cfg.max_kl = 1e-6;
    let table = KlCostTable::for_network_size(cfg.network_size).unwrap();
    let err = search_with_table(&cfg, &table).unwrap_err();
    assert_eq!(err, SybilError::NoFeasiblePlacement);
    assert!(!err.is_configuration());
}

#[test]
fn closest_node_is_sybil_holds_for_every_result() {
    let table = KlCostTable::for_network_size(13_239).unwrap();
    for base in ["8:1,9:15,10:4", "9:6,10:7,11:4,12:2,13:1"] {
        for priority in ScorePriority::ALL {
            let mut cfg = Config::new(base.parse().unwrap());
            cfg.closest_node_is_sybil = true;
            cfg.score_priority = priority;
            cfg.top = 10;

            let out = match search_with_table(&cfg, &table) {
                Ok(out) => out,
                Err(SybilError::NoFeasiblePlacement) => continue,
                Err(e) => panic!("{e}"),
            };
            for r in &out {
                let top_cpl = r.nodes_per_cpl.highest_occupied().unwrap();
                assert!(r.sybils_per_cpl[top_cpl] >= 1, "{base} {priority}: {r:?}");
                assert!(r.closest_is_sybil());
            }
        }
    }
}

#[test]
fn bad_baseline_fails_before_searching() {
    let table = KlCostTable::for_network_size(13_239).unwrap();
    let cfg = Config::new("9:15,10:4".parse().unwrap());
    let err = search_with_table(&cfg, &table).unwrap_err();
    assert!(matches!(err, SybilError::Configuration(_)));
    assert!(Optimizer::new(&cfg, &table).is_err());
}

#[test]
fn bad_network_size_is_a_configuration_error() {
    let mut cfg = quantity_config();
    cfg.network_size = 0;
    let err = kadsybil_core::search(&cfg).unwrap_err();
    assert_eq!(err, SybilError::InvalidNetworkSize(0));
    assert!(err.is_configuration());
}

#[test]
fn bad_bounds_are_rejected() {
    let table = KlCostTable::for_network_size(13_239).unwrap();

    let mut cfg = quantity_config();
    cfg.top = 0;
    assert!(search_with_table(&cfg, &table).unwrap_err().is_configuration());

    let mut cfg = quantity_config();
    cfg.min_kl = Some(0.94);
    assert!(search_with_table(&cfg, &table).unwrap_err().is_configuration());

    let mut cfg = quantity_config();
    cfg.max_kl = f64::NAN;
    assert!(search_with_table(&cfg, &table).unwrap_err().is_configuration());
}

#[test]
fn unknown_priority_is_rejected() {
    assert!(ScorePriority::parse("stealth").unwrap_err().is_configuration());
    assert_eq!("Proximity".parse::<ScorePriority>().unwrap(), ScorePriority::Proximity);
}

#[test]
fn score_all_runs_each_priority_once() {
    let cfg = Config::new("9:6,10:7,11:4,12:2,13:1".parse().unwrap());
    let runs = score_all(&cfg).unwrap();
    let priorities: Vec<_> = runs.iter().map(|(p, _)| *p).collect();
    assert_eq!(priorities, ScorePriority::ALL.to_vec());
    for (_, r) in runs {
        assert!(!r.unwrap().is_empty());
    }
}

#[test]
fn search_stats_count_the_work() {
    let table = KlCostTable::for_network_size(13_239).unwrap();
    let cfg = quantity_config();
    let outcome = Optimizer::new(&cfg, &table).unwrap().run().unwrap();
    let s = outcome.stats;
    assert!(s.visited >= s.complete);
    assert!(s.complete >= s.accepted);
    assert!(s.accepted as usize >= outcome.placements.len());
    assert!(s.pruned > 0);
}

#[test]
fn empty_distribution_parses_to_zero() {
    assert_eq!("".parse::<CplDistribution>().unwrap(), CplDistribution::default());
}
