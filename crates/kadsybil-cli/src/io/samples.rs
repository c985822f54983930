// crates/kadsybil-cli/src/io/samples.rs

use anyhow::{bail, Context, Result};

/// One non-negative decimal distance per line; blanks and `#` comments skipped.
pub fn load_samples(path: &str) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read samples {path}"))?;
    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let v: f64 = line
            .parse()
            .with_context(|| format!("{path}:{}: bad sample {line:?}", lineno + 1))?;
        if !v.is_finite() || v < 0.0 {
            bail!("{path}:{}: sample must be finite and >= 0, got {v}", lineno + 1);
        }
        out.push(v);
    }
    Ok(out)
}
