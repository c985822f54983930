// crates/kadsybil-cli/src/io/report.rs

use kadsybil_core::{CplDistribution, Placement};

pub fn print_placement(rank: usize, p: &Placement) {
    println!(
        "#{:>2} score={:.3} kl={:.6} sybils={} nodes={} sybil_cpls={}",
        rank,
        p.score,
        p.kl,
        p.total_sybils(),
        p.nodes_per_cpl,
        p.sybils_per_cpl
    );
}

/// Per-CPL rows over the range either distribution occupies.
pub fn print_rows(baseline: &CplDistribution, p: &Placement) {
    let (lo, hi) = match (baseline.occupied_range(), p.nodes_per_cpl.occupied_range()) {
        (Some(a), Some(b)) => ((*a.start()).min(*b.start()), (*a.end()).max(*b.end())),
        (Some(r), None) | (None, Some(r)) => (*r.start(), *r.end()),
        (None, None) => return,
    };
    let real = p.real_per_cpl();
    println!("    cpl base real sybil");
    for cpl in lo..=hi {
        println!(
            "    {:>3} {:>4} {:>4} {:>5}",
            cpl, baseline[cpl], real[cpl], p.sybils_per_cpl[cpl]
        );
    }
}
