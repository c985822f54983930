// crates/kadsybil-cli/src/cmd/optimize.rs

use anyhow::Context;
use clap::Args;
use kadsybil_core::checksum::to_hex;
use kadsybil_core::config::DEFAULT_MAX_KL;
use kadsybil_core::ideal::DEFAULT_NETWORK_SIZE;
use kadsybil_core::search::Optimizer;
use kadsybil_core::{Config, KlCostTable, SybilError};

use crate::cmd::Priority;
use crate::io::{cpl_arg, report};

#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Baseline real nodes per CPL among the K closest, e.g. 8:1,9:15,10:4
    #[arg(long)]
    pub cpl: String,

    /// Number of ranked placements to keep
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Exclusive KL budget
    #[arg(long, default_value_t = DEFAULT_MAX_KL)]
    pub max_kl: f64,

    /// Inclusive lower KL bound
    #[arg(long)]
    pub min_kl: Option<f64>,

    #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
    pub min_score: f64,

    #[arg(long, default_value_t = 0)]
    pub min_sybils: u32,

    /// Force the single closest slot to be a Sybil
    #[arg(long, default_value_t = false)]
    pub closest_node_is_sybil: bool,

    /// Estimated number of honest peers in the network
    #[arg(long, default_value_t = DEFAULT_NETWORK_SIZE)]
    pub network_size: i64,

    #[arg(long, value_enum, default_value_t = Priority::Quantity)]
    pub priority: Priority,

    /// One JSON object per placement on stdout instead of the text report
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print the per-CPL rows of every placement
    #[arg(long, default_value_t = false)]
    pub rows: bool,
}

pub fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let baseline = cpl_arg::parse(&args.cpl)?;

    let mut cfg = Config::new(baseline);
    cfg.top = args.top;
    cfg.max_kl = args.max_kl;
    cfg.min_kl = args.min_kl;
    cfg.min_score = args.min_score;
    cfg.min_sybils = args.min_sybils;
    cfg.closest_node_is_sybil = args.closest_node_is_sybil;
    cfg.network_size = args.network_size;
    cfg.score_priority = args.priority.into();

    let table = KlCostTable::for_network_size(cfg.network_size)
        .with_context(|| format!("build kl table for network size {}", cfg.network_size))?;

    eprintln!("--- optimize ---");
    eprintln!("baseline        = {}", cfg.baseline);
    eprintln!("baseline_kl     = {:.6}", table.path_cost(&cfg.baseline));
    eprintln!("config_id       = {}", to_hex(&cfg.id_16()));
    eprintln!("priority        = {}", cfg.score_priority);
    eprintln!("max_kl          = {}", cfg.max_kl);
    eprintln!("network_size    = {}", cfg.network_size);

    let outcome = match Optimizer::new(&cfg, &table).and_then(|o| o.run()) {
        Ok(outcome) => outcome,
        Err(SybilError::NoFeasiblePlacement) => {
            println!("no feasible placement");
            return Ok(());
        }
        Err(e) => return Err(e).context("optimize"),
    };

    tracing::info!(
        kept = outcome.placements.len(),
        visited = outcome.stats.visited,
        pruned = outcome.stats.pruned,
        "search done"
    );

    for (i, p) in outcome.placements.iter().enumerate() {
        if args.json {
            println!("{}", serde_json::to_string(p).context("serialize placement")?);
            continue;
        }
        report::print_placement(i + 1, p);
        if args.rows {
            report::print_rows(&cfg.baseline, p);
        }
    }
    Ok(())
}
