// crates/kadsybil-cli/src/cmd/table.rs

use anyhow::Context;
use clap::Args;
use kadsybil_core::config::DEFAULT_MAX_KL;
use kadsybil_core::ideal::DEFAULT_NETWORK_SIZE;
use kadsybil_core::{KlCostTable, MAX_CPL};

#[derive(Args, Debug)]
pub struct TableArgs {
    #[arg(long, default_value_t = DEFAULT_NETWORK_SIZE)]
    pub network_size: i64,

    /// Cells at or above this cost print as "X"
    #[arg(long, default_value_t = DEFAULT_MAX_KL)]
    pub max_kl: f64,

    #[arg(long, default_value_t = MAX_CPL)]
    pub max_cpl: usize,
}

pub fn run(args: TableArgs) -> anyhow::Result<()> {
    let table = KlCostTable::for_network_size(args.network_size)
        .with_context(|| format!("build kl table for network size {}", args.network_size))?;

    eprintln!("--- table ---");
    eprintln!("network_size    = {}", args.network_size);
    eprintln!("max_kl          = {}", args.max_kl);
    for cpl in 0..args.max_cpl.min(MAX_CPL) {
        let cells: Vec<String> = table
            .row(cpl)
            .iter()
            .map(|&c| {
                if c >= args.max_kl {
                    "X".to_string()
                } else {
                    format!("{c:.3}")
                }
            })
            .collect();
        println!("{:>2} {}", cpl, cells.join(" "));
    }
    Ok(())
}
