// crates/kadsybil-core/tests/ideal_occupancy.rs

use kadsybil_core::ideal::{
    ideal_occupancy, BinomialOrderModel, Occupancy, OccupancyModel, DEFAULT_NETWORK_SIZE,
};
use kadsybil_core::kl::{divergence, INFEASIBLE};
use kadsybil_core::search::search_with_table;
use kadsybil_core::{Config, KlCostTable, SybilError, MAX_CPL};

fn argmax(v: &[f64]) -> usize {
    let mut best = 0;
    for (i, &p) in v.iter().enumerate() {
        if p > v[best] {
            best = i;
        }
    }
    best
}

#[test]
fn occupancy_is_a_sub_probability_vector() {
    let p = ideal_occupancy(DEFAULT_NETWORK_SIZE).unwrap();
    let sum: f64 = p.iter().sum();

    assert!(p.iter().all(|&x| (0.0..=1.0).contains(&x)));
    assert!(sum <= 1.0 + 1e-9, "sum = {sum}");
    // Virtually all of the K closest fall well inside the first 30 CPLs.
    assert!(sum > 0.999, "sum = {sum}");
}

#[test]
fn occupancy_peaks_near_log2_of_network_size() {
    let p = ideal_occupancy(DEFAULT_NETWORK_SIZE).unwrap();
    let peak = argmax(&p);
    // 13239 peers: the 20 closest sit mostly at CPL 9-10.
    assert!((8..=11).contains(&peak), "peak at cpl {peak}");
    assert!(p[0] < 1e-6);
    assert!(p[25] < 1e-3);
}

#[test]
fn larger_network_moves_mass_to_higher_cpls() {
    let small = ideal_occupancy(1_000).unwrap();
    let large = ideal_occupancy(1_000_000).unwrap();
    assert!(argmax(&large) > argmax(&small));
}

#[test]
fn occupancy_is_deterministic() {
    let a = BinomialOrderModel.occupancy(5_000).unwrap();
    let b = BinomialOrderModel.occupancy(5_000).unwrap();
    assert_eq!(a, b);
}

#[test]
fn non_positive_network_size_is_rejected() {
    for n in [0, -1, -13_239] {
        let err = ideal_occupancy(n).unwrap_err();
        assert_eq!(err, SybilError::InvalidNetworkSize(n));
        assert!(err.is_configuration());
    }
}

/// All honest mass split evenly between CPL 9 and 10.
struct TwoBucketModel;

impl OccupancyModel for TwoBucketModel {
    fn occupancy(&self, _network_size: i64) -> kadsybil_core::Result<Occupancy> {
        let mut p = [0.0; MAX_CPL];
        p[9] = 0.5;
        p[10] = 0.5;
        Ok(p)
    }
}

#[test]
fn search_honours_a_custom_occupancy_model() {
    let table = KlCostTable::with_model(&TwoBucketModel, 1).unwrap();
    assert_eq!(table.occupancy()[8], 0.0);
    assert_eq!(table.cost(11, 1), INFEASIBLE);

    let mut cfg = Config::new("9:10,10:10".parse().unwrap());
    cfg.top = 10;
    let out = search_with_table(&cfg, &table).unwrap();

    // Sybils can only land in CPL 10, paid for by evicting all of CPL 9.
    assert_eq!(out[0].total_sybils(), 10);
    assert_eq!(out[0].nodes_per_cpl.to_string(), "10:20");
    assert!((out[0].kl - 2f64.ln()).abs() < 1e-12);

    for r in &out {
        for (cpl, n) in r.nodes_per_cpl.iter() {
            assert!(n == 0 || cpl == 9 || cpl == 10, "{r:?}");
        }
        let d = divergence(&r.nodes_per_cpl, table.occupancy());
        assert!((d - r.kl).abs() < 1e-9);
    }
}
