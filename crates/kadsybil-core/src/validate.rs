use crate::config::Config;
use crate::cpl::K;
use crate::error::{Result, SybilError};

pub fn validate_config(c: &Config) -> Result<()> {
    // Baseline must describe exactly the K closest slots.
    let total = c.baseline.total();
    if total as usize != K {
        return Err(SybilError::Configuration(format!(
            "baseline holds {total} nodes, expected k = {K}"
        )));
    }
    if c.top == 0 {
        return Err(SybilError::Configuration("top must be >= 1".into()));
    }
    if !c.max_kl.is_finite() || c.max_kl <= 0.0 {
        return Err(SybilError::Configuration(format!(
            "max_kl must be finite and > 0, got {}",
            c.max_kl
        )));
    }
    if let Some(min_kl) = c.min_kl {
        if !min_kl.is_finite() || min_kl < 0.0 {
            return Err(SybilError::Configuration(format!(
                "min_kl must be finite and >= 0, got {min_kl}"
            )));
        }
        if min_kl >= c.max_kl {
            return Err(SybilError::Configuration(format!(
                "min_kl ({min_kl}) must be < max_kl ({})",
                c.max_kl
            )));
        }
    }
    if c.min_score.is_nan() {
        return Err(SybilError::Configuration("min_score is NaN".into()));
    }
    if c.network_size <= 0 {
        return Err(SybilError::InvalidNetworkSize(c.network_size));
    }
    Ok(())
}
