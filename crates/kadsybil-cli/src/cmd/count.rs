// crates/kadsybil-cli/src/cmd/count.rs

use clap::Args;
use kadsybil_core::keyspace::{count_in_cpl, Key};
use kadsybil_core::K;

use crate::io::keys;

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Target key: 64 hex chars, or any id with --hash
    #[arg(long)]
    pub target: String,

    /// File with one peer id per line
    #[arg(long)]
    pub peers: String,

    /// SHA-256 the target and every peer line instead of reading hex keys
    #[arg(long, default_value_t = false)]
    pub hash: bool,

    /// Only count the K peers closest to the target
    #[arg(long, default_value_t = false)]
    pub closest: bool,
}

pub fn run(args: CountArgs) -> anyhow::Result<()> {
    let target = if args.hash {
        Key::from_bytes(args.target.trim().as_bytes())
    } else {
        keys::parse_hex_key(&args.target)?
    };
    let mut peers = keys::load_keys(&args.peers, args.hash)?;

    if args.closest {
        peers.sort_by_key(|p| p.xor(&target));
        peers.truncate(K);
    }

    let counts = count_in_cpl(&target, &peers);
    let line: Vec<String> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n != 0)
        .map(|(cpl, n)| format!("{cpl}:{n}"))
        .collect();

    eprintln!("--- count ---");
    eprintln!("peers           = {}", peers.len());
    println!("{}", line.join(","));
    Ok(())
}
