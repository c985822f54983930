// crates/kadsybil-cli/src/cmd/compare.rs

use anyhow::Context;
use clap::Args;
use kadsybil_core::config::DEFAULT_MAX_KL;
use kadsybil_core::ideal::DEFAULT_NETWORK_SIZE;
use kadsybil_core::search::score_all;
use kadsybil_core::{Config, SybilError};

use crate::io::cpl_arg;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Baseline real nodes per CPL among the K closest
    #[arg(long)]
    pub cpl: String,

    #[arg(long, default_value_t = DEFAULT_MAX_KL)]
    pub max_kl: f64,

    #[arg(long, default_value_t = DEFAULT_NETWORK_SIZE)]
    pub network_size: i64,

    #[arg(long, default_value_t = false)]
    pub closest_node_is_sybil: bool,
}

pub fn run(args: CompareArgs) -> anyhow::Result<()> {
    let mut cfg = Config::new(cpl_arg::parse(&args.cpl)?);
    cfg.top = 1;
    cfg.max_kl = args.max_kl;
    cfg.network_size = args.network_size;
    cfg.closest_node_is_sybil = args.closest_node_is_sybil;

    let runs = score_all(&cfg).context("compare priorities")?;

    eprintln!("--- compare ---");
    eprintln!("baseline        = {}", cfg.baseline);
    eprintln!("max_kl          = {}", cfg.max_kl);
    for (priority, result) in runs {
        match result {
            Ok(placements) => {
                let best = &placements[0];
                println!(
                    "{:<12} score={:.3} kl={:.6} sybils={} closest_is_sybil={} closer_than_reliable={} nodes={}",
                    priority.as_str(),
                    best.score,
                    best.kl,
                    best.total_sybils(),
                    best.closest_is_sybil(),
                    best.closer_than_all_reliable(),
                    best.nodes_per_cpl
                );
            }
            Err(SybilError::NoFeasiblePlacement) => {
                println!("{:<12} no feasible placement", priority.as_str());
            }
            Err(e) => return Err(e).with_context(|| format!("priority {priority}")),
        }
    }
    Ok(())
}
