use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use matmul_loops::{Kernel, random_matrix};

fn bench_loop_orders(c: &mut Criterion) {
    let kernels = Kernel::ALL_DEFAULT
        .into_iter()
        .chain([Kernel::Blocked { block_size: 32 }]);
    let kernels: Vec<Kernel> = kernels.collect();

    for size in [64, 128, 256] {
        let mut group = c.benchmark_group(format!("matrix_multiplication_{}", size));
        let n = size as u64;
        group.throughput(Throughput::Elements(n * n * n));

        // Inputs are built once per size and only read by the kernels
        let a = random_matrix(size, 42);
        let b = random_matrix(size, 43);

        for kernel in &kernels {
            group.bench_with_input(
                BenchmarkId::new(kernel.name(), size),
                &(&a, &b),
                |bench, (a, b)| {
                    bench.iter(|| kernel.run(black_box(a), black_box(b)).unwrap());
                },
            );
        }

        group.finish();
    }
}

fn bench_block_sizes(c: &mut Criterion) {
    let size = 256;
    let mut group = c.benchmark_group("blocked_tile_size");
    let n = size as u64;
    group.throughput(Throughput::Bytes(n * n * 8 * 3));

    let a = random_matrix(size, 42);
    let b = random_matrix(size, 43);

    for block_size in [8, 16, 32, 64, 128] {
        let kernel = Kernel::Blocked { block_size };
        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| kernel.run(black_box(a), black_box(b)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_loop_orders, bench_block_sizes);
criterion_main!(benches);
