//! Benchmark runner for the loop-order kernels.
//!
//! ```bash
//! matmul-loops --sizes 64,128,256 --runs 5
//! matmul-loops -k ijk,blocked:32,blocked:128 --verify --json results.json
//! matmul-loops --sizes 256 --csv results.csv
//! RUST_LOG=debug matmul-loops -s 32 -r 1
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use matmul_loops::report::{BenchRecord, write_csv, write_json};
use matmul_loops::stats::TimingStats;
use matmul_loops::{Kernel, Matrix, random_matrix};
use tracing::{info, warn};

/// Times each kernel on seeded random matrices and prints a comparison.
#[derive(Parser, Debug)]
#[command(name = "matmul-loops")]
#[command(about = "Benchmark i-j-k, i-k-j, k-i-j and blocked matrix multiplication")]
#[command(version)]
struct Args {
    /// Matrix sizes to benchmark
    #[arg(short, long, value_delimiter = ',', default_value = "64,128,256")]
    sizes: Vec<usize>,

    /// Timed runs per kernel
    #[arg(short, long, default_value_t = 5)]
    runs: usize,

    /// Untimed runs before timing starts
    #[arg(short, long, default_value_t = 1)]
    warmup: usize,

    /// Kernels to run (ijk, ikj, kij, blocked, blocked:<size>)
    ///
    /// The first one is the baseline for the speedup column.
    #[arg(short, long, value_delimiter = ',', default_value = "ijk,ikj,kij,blocked")]
    kernels: Vec<Kernel>,

    /// Seed for matrix A
    #[arg(long, default_value_t = 42)]
    seed_a: u64,

    /// Seed for matrix B
    #[arg(long, default_value_t = 43)]
    seed_b: u64,

    /// Check every kernel's output against the first kernel's
    #[arg(long)]
    verify: bool,

    /// Write all results as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write all results as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();
    if args.runs == 0 {
        bail!("--runs must be at least 1");
    }
    if args.kernels.is_empty() {
        bail!("no kernels selected");
    }

    println!("=== Matrix Multiplication Benchmark ===\n");

    let mut all_results = Vec::new();

    for &size in &args.sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(60));

        let a = random_matrix(size, args.seed_a);
        let b = random_matrix(size, args.seed_b);

        let mut reference: Option<Matrix> = None;
        let mut records = Vec::with_capacity(args.kernels.len());
        let mut baseline_mean = None;

        for &kernel in &args.kernels {
            let (stats, c) = bench_kernel(kernel, &a, &b, args.warmup, args.runs)
                .with_context(|| format!("{} failed at size {}", kernel, size))?;

            if args.verify {
                match &reference {
                    None => reference = Some(c),
                    Some(expected) => verify(kernel, size, expected, &c)?,
                }
            }

            let baseline = *baseline_mean.get_or_insert(stats.mean);
            let record = BenchRecord::new(kernel, size, &stats, baseline);
            println!(
                "{}. {:14} {:9.3} ms ± {:7.3} ms  {:6.2} GFLOPS  ({:.2}×)",
                records.len() + 1,
                record.kernel,
                record.mean_s * 1000.0,
                record.stddev_s * 1000.0,
                record.gflops,
                record.speedup
            );
            records.push(record);
        }
        println!();

        all_results.push((size, records));
    }

    print_summary_table(&all_results);

    let flat: Vec<BenchRecord> = all_results
        .into_iter()
        .flat_map(|(_, records)| records)
        .collect();

    if let Some(path) = &args.json {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_json(BufWriter::new(file), &flat)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), records = flat.len(), "wrote JSON report");
    }

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_csv(BufWriter::new(file), &flat)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), records = flat.len(), "wrote CSV report");
    }

    Ok(())
}

/// Warm up, then time `runs` calls. Returns the stats and the last output.
fn bench_kernel(
    kernel: Kernel,
    a: &Matrix,
    b: &Matrix,
    warmup: usize,
    runs: usize,
) -> matmul_loops::Result<(TimingStats, Matrix)> {
    for _ in 0..warmup {
        std::hint::black_box(kernel.run(a, b)?);
    }

    let mut samples: Vec<Duration> = Vec::with_capacity(runs);
    let mut last = Matrix::zeros(0);
    for _ in 0..runs {
        let start = Instant::now();
        let c = std::hint::black_box(kernel.run(a, b)?);
        samples.push(start.elapsed());
        last = c;
    }

    Ok((TimingStats::from_samples(&samples)?, last))
}

// Tolerance grows with n since each entry sums n rounded products.
fn verify(kernel: Kernel, size: usize, expected: &Matrix, actual: &Matrix) -> Result<()> {
    let tol = 1e-10 * size.max(1) as f64;
    let diff = expected
        .max_abs_diff(actual)
        .context("kernel returned a result of the wrong size")?;
    if diff > tol {
        warn!(%kernel, size, diff, tol, "verification failed");
        bail!(
            "{} disagrees with the baseline at size {}: max diff {:e} > {:e}",
            kernel,
            size,
            diff,
            tol
        );
    }
    info!(%kernel, size, diff, "verified");
    Ok(())
}

fn print_summary_table(all_results: &[(usize, Vec<BenchRecord>)]) {
    let Some((_, first)) = all_results.first() else {
        return;
    };

    println!("\n{}", "=".repeat(90));
    println!("SUMMARY");
    println!("{}", "=".repeat(90));

    print!("\n{:<16}", "Method");
    for (size, _) in all_results {
        print!(" {:>14}", format!("{}×{}", size, size));
    }
    println!(" {:>12}", "Speedup");
    println!("{}", "-".repeat(90));

    for (method_idx, method) in first.iter().enumerate() {
        print!("{:<16}", method.kernel);

        let mut speedups = Vec::with_capacity(all_results.len());
        for (_, records) in all_results {
            let record = &records[method_idx];
            print!(" {:>11.2} GF", record.gflops);
            speedups.push(record.speedup);
        }

        let avg_speedup = speedups.iter().sum::<f64>() / speedups.len() as f64;
        println!(" {:>11.1}×", avg_speedup);
    }

    println!("{}", "=".repeat(90));
    println!("\nGF = GFLOPS (billion floating point operations per second)");
    println!(
        "Speedup relative to {}. Higher is better.\n",
        first[0].kernel
    );
}
