// crates/kadsybil-cli/src/cmd/kl.rs

use anyhow::Context;
use clap::Args;
use kadsybil_core::config::DEFAULT_MAX_KL;
use kadsybil_core::ideal::DEFAULT_NETWORK_SIZE;
use kadsybil_core::kl::divergence;
use kadsybil_core::KlCostTable;

use crate::io::cpl_arg;

#[derive(Args, Debug)]
pub struct KlArgs {
    /// Observed nodes per CPL among the K closest
    #[arg(long)]
    pub cpl: String,

    #[arg(long, default_value_t = DEFAULT_NETWORK_SIZE)]
    pub network_size: i64,

    /// Detection threshold to compare against
    #[arg(long, default_value_t = DEFAULT_MAX_KL)]
    pub max_kl: f64,
}

pub fn run(args: KlArgs) -> anyhow::Result<()> {
    let counts = cpl_arg::parse(&args.cpl)?;
    let table = KlCostTable::for_network_size(args.network_size)
        .with_context(|| format!("build kl table for network size {}", args.network_size))?;

    let kl = divergence(&counts, table.occupancy());
    println!("cpl             = {}", counts);
    println!("nodes           = {}", counts.total());
    println!("kl              = {:.6}", kl);
    println!("flagged         = {}", kl >= args.max_kl);
    Ok(())
}
