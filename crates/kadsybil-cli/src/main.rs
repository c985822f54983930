// crates/kadsybil-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "kadsybil-cli")]
#[command(about = "Kademlia Sybil placement optimizer under a KL-divergence budget", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the best Sybil placements for a baseline CPL distribution
    Optimize(cmd::optimize::OptimizeArgs),

    /// Run the search once per score priority and compare the winners
    Compare(cmd::compare::CompareArgs),

    /// Print the honest-network occupancy of the K closest slots
    Ideal(cmd::ideal::IdealArgs),

    /// Print the partial KL cost table
    Table(cmd::table::TableArgs),

    /// KL divergence of a CPL distribution against the ideal model
    Kl(cmd::kl::KlArgs),

    /// CPL histogram of peer ids against a target key
    Count(cmd::count::CountArgs),

    /// Estimate the typical farthest-of-K distance from samples
    Estimate(cmd::estimate::EstimateArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Optimize(args) => cmd::optimize::run(args),
        Commands::Compare(args) => cmd::compare::run(args),
        Commands::Ideal(args) => cmd::ideal::run(args),
        Commands::Table(args) => cmd::table::run(args),
        Commands::Kl(args) => cmd::kl::run(args),
        Commands::Count(args) => cmd::count::run(args),
        Commands::Estimate(args) => cmd::estimate::run(args),
    }
}
