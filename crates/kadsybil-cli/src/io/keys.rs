// crates/kadsybil-cli/src/io/keys.rs

use anyhow::{bail, Context, Result};
use kadsybil_core::keyspace::Key;

/// Decode a 32-byte key from 64 hex chars (optional 0x prefix).
pub fn parse_hex_key(s: &str) -> Result<Key> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() != 64 || !s.is_ascii() {
        bail!("key must be 64 hex chars, got {} ({s:?})", s.len());
    }
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        let pair = &s[2 * i..2 * i + 2];
        *byte = u8::from_str_radix(pair, 16).with_context(|| format!("bad hex {pair:?}"))?;
    }
    Ok(Key::from_digest(out))
}

/// Load peer keys, one per line. Blank lines and `#` comments are skipped.
/// With `hash`, each line is an id run through SHA-256.
pub fn load_keys(path: &str, hash: bool) -> Result<Vec<Key>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read peers {path}"))?;
    let mut keys = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let key = if hash {
            Key::from_bytes(line.as_bytes())
        } else {
            parse_hex_key(line).with_context(|| format!("{path}:{}", lineno + 1))?
        };
        keys.push(key);
    }
    Ok(keys)
}
