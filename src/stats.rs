//! Summary statistics over repeated timings.

use std::time::Duration;

use crate::error::{MatmulError, Result};

/// Mean, spread and range of a set of timings, all in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStats {
    pub runs: usize,
    pub mean: f64,
    /// Population standard deviation (divides by `runs`, not `runs - 1`).
    pub stddev: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl TimingStats {
    /// # Errors
    ///
    /// Returns [`MatmulError::EmptySamples`] if `samples` is empty.
    pub fn from_samples(samples: &[Duration]) -> Result<Self> {
        if samples.is_empty() {
            return Err(MatmulError::EmptySamples);
        }

        let mut secs: Vec<f64> = samples.iter().map(Duration::as_secs_f64).collect();
        secs.sort_by(f64::total_cmp);

        let runs = secs.len();
        let mean = secs.iter().sum::<f64>() / runs as f64;
        let variance = secs.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / runs as f64;
        let median = if runs % 2 == 0 {
            (secs[runs / 2 - 1] + secs[runs / 2]) / 2.0
        } else {
            secs[runs / 2]
        };

        Ok(TimingStats {
            runs,
            mean,
            stddev: variance.sqrt(),
            median,
            min: secs[0],
            max: secs[runs - 1],
        })
    }
}
