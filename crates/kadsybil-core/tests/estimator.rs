// crates/kadsybil-core/tests/estimator.rs

use kadsybil_core::estimate::{MeanType, WelfordAverage};

#[test]
fn mean_and_sample_std_dev() {
    let mut w = WelfordAverage::new();
    for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
        w.add(v);
    }
    assert_eq!(w.count(), 8);
    assert!((w.mean() - 5.0).abs() < 1e-12);
    // sample variance = 32 / 7
    assert!((w.std_dev(false) - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    assert!((w.estimate(MeanType::MeanStdDev) - (5.0 + (32.0f64 / 7.0).sqrt())).abs() < 1e-12);
}

#[test]
fn weighted_mean_follows_recent_samples() {
    let mut w = WelfordAverage::new();
    w.add(100.0);
    assert_eq!(w.weighted_mean(), 100.0);
    w.add(200.0);
    assert!((w.weighted_mean() - 112.5).abs() < 1e-12);
    for _ in 0..100 {
        w.add(200.0);
    }
    assert!(w.weighted_mean() > w.mean());
    assert!((w.estimate(MeanType::WeightedMean) - 200.0).abs() < 1e-3);
}

#[test]
fn fewer_than_two_samples_have_no_spread() {
    let mut w = WelfordAverage::new();
    assert_eq!(w.std_dev(false), 0.0);
    assert_eq!(w.cpl(), None);
    w.add(42.0);
    assert_eq!(w.std_dev(true), 0.0);
    assert_eq!(w.estimate(MeanType::MeanStdDev), 42.0);
}

#[test]
fn cpl_view_averages_prefix_lengths() {
    let mut w = WelfordAverage::new();
    // 2^245 -> 255 - 245 = 10 ; 2^243 -> 12
    w.add(2f64.powi(245));
    w.add(2f64.powi(243));
    assert_eq!(w.cpl(), Some(11));
    assert_eq!(w.estimate(MeanType::Cpl), 11.0);
}
