// crates/kadsybil-cli/src/cmd/estimate.rs

use clap::Args;
use kadsybil_core::estimate::{MeanType, WelfordAverage};

use crate::io::samples;

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// File with one decimal distance per line
    #[arg(long)]
    pub samples: String,
}

pub fn run(args: EstimateArgs) -> anyhow::Result<()> {
    let values = samples::load_samples(&args.samples)?;

    let mut avg = WelfordAverage::new();
    for v in values {
        avg.add(v);
    }

    println!("count           = {}", avg.count());
    for mean_type in MeanType::ALL {
        println!("{:<15} = {}", mean_type.to_string(), avg.estimate(mean_type));
    }
    Ok(())
}
