// crates/kadsybil-core/src/keyspace.rs
//
// XOR keyspace helpers. Keys are SHA-256 digests of peer / content ids, the
// same mapping Kademlia routing tables use, so CPLs computed here line up
// with what a DHT lookup observes.

use sha2::{Digest, Sha256};

use crate::cpl::{CplDistribution, KEY_BITS};
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(pub [u8; 32]);

impl Key {
    /// Hash raw identifier bytes into the keyspace.
    pub fn from_bytes(id: &[u8]) -> Self {
        let digest = Sha256::digest(id);
        let mut out = [0u8; 32];
        out.copy_from_slice(digest.as_slice());
        Key(out)
    }

    /// Use an already-hashed 32-byte key as is.
    pub fn from_digest(digest: [u8; 32]) -> Self {
        Key(digest)
    }

    pub fn xor(&self, other: &Key) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (o, (a, b)) in out.iter_mut().zip(self.0.iter().zip(other.0.iter())) {
            *o = a ^ b;
        }
        out
    }

    /// XOR distance as a float; loses low bits, keeps the magnitude.
    pub fn distance_f64(&self, other: &Key) -> f64 {
        self.xor(other)
            .iter()
            .fold(0.0, |acc, &b| acc * 256.0 + b as f64)
    }
}

/// Leading zero bits of `a XOR b`; KEY_BITS when the keys are equal.
pub fn common_prefix_len(a: &Key, b: &Key) -> usize {
    for (i, byte) in a.xor(b).iter().enumerate() {
        if *byte != 0 {
            return i * 8 + byte.leading_zeros() as usize;
        }
    }
    KEY_BITS
}

/// Histogram of peers by CPL with `target`; KEY_BITS + 1 entries.
pub fn count_in_cpl<'a, I>(target: &Key, peers: I) -> Vec<u32>
where
    I: IntoIterator<Item = &'a Key>,
{
    let mut counts = vec![0u32; KEY_BITS + 1];
    for peer in peers {
        counts[common_prefix_len(target, peer)] += 1;
    }
    counts
}

/// `count_in_cpl` folded into the optimizer's bucket range.
pub fn distribution_of<'a, I>(target: &Key, peers: I) -> Result<CplDistribution>
where
    I: IntoIterator<Item = &'a Key>,
{
    CplDistribution::from_counts(&count_in_cpl(target, peers))
}
