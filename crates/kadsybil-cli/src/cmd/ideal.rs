// crates/kadsybil-cli/src/cmd/ideal.rs

use anyhow::Context;
use clap::Args;
use kadsybil_core::ideal::{ideal_occupancy, DEFAULT_NETWORK_SIZE};
use kadsybil_core::{K, MAX_CPL};

#[derive(Args, Debug)]
pub struct IdealArgs {
    #[arg(long, default_value_t = DEFAULT_NETWORK_SIZE)]
    pub network_size: i64,

    /// Print CPLs 0..max_cpl
    #[arg(long, default_value_t = MAX_CPL)]
    pub max_cpl: usize,
}

pub fn run(args: IdealArgs) -> anyhow::Result<()> {
    let occ = ideal_occupancy(args.network_size)
        .with_context(|| format!("ideal occupancy for network size {}", args.network_size))?;

    eprintln!("--- ideal ---");
    eprintln!("network_size    = {}", args.network_size);
    eprintln!("mass            = {:.6}", occ.iter().sum::<f64>());
    for (cpl, p) in occ.iter().enumerate().take(args.max_cpl.min(MAX_CPL)) {
        println!("{:>2} {:.6} ({:.3} of {})", cpl, p, p * K as f64, K);
    }
    Ok(())
}
