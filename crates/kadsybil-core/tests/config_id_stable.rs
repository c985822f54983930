// crates/kadsybil-core/tests/config_id_stable.rs

use kadsybil_core::{Config, ScorePriority};

fn base() -> Config {
    Config::new("8:1,9:15,10:4".parse().unwrap())
}

#[test]
fn config_id_is_stable_for_same_config() {
    assert_eq!(base().id_16(), base().id_16());
}

#[test]
fn config_id_changes_with_every_field() {
    let id0 = base().id_16();

    let variants: Vec<Box<dyn Fn(&mut Config)>> = vec![
        Box::new(|c| c.baseline = "8:2,9:14,10:4".parse().unwrap()),
        Box::new(|c| c.top += 1),
        Box::new(|c| c.max_kl = 0.85),
        Box::new(|c| c.min_kl = Some(0.0)),
        Box::new(|c| c.min_score = 0.0),
        Box::new(|c| c.min_sybils = 3),
        Box::new(|c| c.closest_node_is_sybil = true),
        Box::new(|c| c.network_size = 10_000),
        Box::new(|c| c.score_priority = ScorePriority::Proximity),
    ];

    for (i, tweak) in variants.iter().enumerate() {
        let mut c = base();
        tweak(&mut c);
        assert_ne!(c.id_16(), id0, "variant {i} kept the same id");
    }
}
