// crates/kadsybil-core/src/estimate.rs
//
// Streaming estimate of the "typical farthest-of-K" XOR distance.
//
// Welford's algorithm keeps the plain mean and the running sum of squared
// deviations; an EWMA (alpha = 1/8) tracks recent samples. Both can be
// widened by beta standard deviations. The CPL view averages
// 255 - floor(log2(distance)) over all samples.

use std::fmt;

const ALPHA: f64 = 1.0 / 8.0;
const BETA: f64 = 1.0;
const KEY_SPACE: i64 = 255;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeanType {
    Mean,
    MeanStdDev,
    WeightedMean,
    WeightedMeanStdDev,
    Cpl,
}

impl MeanType {
    pub const ALL: [MeanType; 5] = [
        MeanType::Mean,
        MeanType::MeanStdDev,
        MeanType::WeightedMean,
        MeanType::WeightedMeanStdDev,
        MeanType::Cpl,
    ];
}

impl fmt::Display for MeanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MeanType::Mean => "M",
            MeanType::MeanStdDev => "M+STD",
            MeanType::WeightedMean => "W",
            MeanType::WeightedMeanStdDev => "W+STD",
            MeanType::Cpl => "CPL",
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct WelfordAverage {
    count: u64,
    mean: f64,
    sum_sq_mean: f64,
    weighted_mean: f64,
    sum_sq_weighted: f64,
    cpl_sum: i64,
}

impl WelfordAverage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Add one distance sample (non-negative).
    pub fn add(&mut self, value: f64) {
        self.count += 1;

        let delta_w = value - self.weighted_mean;
        self.weighted_mean = if self.count == 1 {
            value
        } else {
            (1.0 - ALPHA) * self.weighted_mean + ALPHA * value
        };
        self.sum_sq_weighted += delta_w * (value - self.weighted_mean);

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.sum_sq_mean += delta * (value - self.mean);

        self.cpl_sum += KEY_SPACE - value.max(1.0).log2().floor() as i64;
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn weighted_mean(&self) -> f64 {
        self.weighted_mean
    }

    /// Sample standard deviation; zero below two samples.
    pub fn std_dev(&self, weighted: bool) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let sum = if weighted {
            self.sum_sq_weighted
        } else {
            self.sum_sq_mean
        };
        (sum / (self.count - 1) as f64).max(0.0).sqrt()
    }

    /// Average CPL of the samples, rounded; None before the first sample.
    pub fn cpl(&self) -> Option<i64> {
        if self.count == 0 {
            return None;
        }
        Some((self.cpl_sum as f64 / self.count as f64).round() as i64)
    }

    pub fn estimate(&self, mean_type: MeanType) -> f64 {
        match mean_type {
            MeanType::Mean => self.mean,
            MeanType::MeanStdDev => self.mean + BETA * self.std_dev(false),
            MeanType::WeightedMean => self.weighted_mean,
            MeanType::WeightedMeanStdDev => self.weighted_mean + BETA * self.std_dev(true),
            MeanType::Cpl => self.cpl().unwrap_or(0) as f64,
        }
    }
}
