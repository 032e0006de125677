//! Benchmark records and their JSON / CSV export.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::kernel::Kernel;
use crate::stats::TimingStats;

/// Timing result for one kernel at one matrix size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRecord {
    pub kernel: String,
    pub size: usize,
    pub runs: usize,
    pub mean_s: f64,
    pub stddev_s: f64,
    pub median_s: f64,
    /// Baseline mean divided by this mean; 1.0 for the baseline itself.
    pub speedup: f64,
    pub gflops: f64,
    /// Multiply-adds performed, n³.
    pub items: u64,
    /// Bytes of A, B and C touched at least once, n²·8·3.
    pub bytes: u64,
}

impl BenchRecord {
    pub fn new(kernel: Kernel, size: usize, stats: &TimingStats, baseline_mean: f64) -> Self {
        let n = size as u64;
        let speedup = if stats.mean > 0.0 {
            baseline_mean / stats.mean
        } else {
            0.0
        };

        BenchRecord {
            kernel: kernel.name(),
            size,
            runs: stats.runs,
            mean_s: stats.mean,
            stddev_s: stats.stddev,
            median_s: stats.median,
            speedup,
            gflops: gflops(size, stats.mean),
            items: n * n * n,
            bytes: n * n * 8 * 3,
        }
    }
}

/// 2n³ floating point operations over `secs`, in billions per second.
pub fn gflops(size: usize, secs: f64) -> f64 {
    if secs <= 0.0 {
        return 0.0;
    }
    2.0 * (size as f64).powi(3) / secs / 1e9
}

/// Writes the records as a pretty-printed JSON array.
pub fn write_json<W: Write>(writer: W, records: &[BenchRecord]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, records)
}

/// Writes the records as CSV, one row per (kernel, size).
pub fn write_csv<W: Write>(mut writer: W, records: &[BenchRecord]) -> io::Result<()> {
    writeln!(
        writer,
        "Algorithm,Size,Mean_Time_s,Std_Time_s,Median_Time_s,Speedup,GFLOPS"
    )?;

    for record in records {
        writeln!(
            writer,
            "{},{},{:.9},{:.9},{:.9},{:.4},{:.4}",
            record.kernel,
            record.size,
            record.mean_s,
            record.stddev_s,
            record.median_s,
            record.speedup,
            record.gflops
        )?;
    }

    writer.flush()
}
