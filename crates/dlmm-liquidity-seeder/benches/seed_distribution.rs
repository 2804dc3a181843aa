use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dlmm_liquidity_seeder::components::seeding_pipeline::build_seed_distribution;
use dlmm_liquidity_seeder::state::seed_parameters::SeedRangeParameters;

// Deterministic fixtures only: benchmark numbers must be reproducible, so
// both parameter sets are fixed rather than sampled.

// Narrow launch-style range: ~150 bins, concentrated toward the maximum.
fn launch_range() -> SeedRangeParameters {
    SeedRangeParameters {
        total_amount: 20_000_000_000,
        bin_step_bps: 200,
        base_decimals: 5,
        quote_decimals: 6,
        min_bin_id: -151,
        max_bin_id: 0,
        curvature: 0.6,
    }
}

// Wide range close to the practical upper bound of a seeding operation:
// a thousand bins at a fine step, linear distribution.
fn wide_range() -> SeedRangeParameters {
    SeedRangeParameters {
        total_amount: 5_000_000_000_000_000,
        bin_step_bps: 25,
        base_decimals: 9,
        quote_decimals: 6,
        min_bin_id: -500,
        max_bin_id: 500,
        curvature: 1.0,
    }
}

// Measures the full pipeline (curve generation, compression,
// redistribution, position sizing) since that is the unit of work an
// orchestrator invokes per seeding operation. The wide range dominates on
// the decimal power evaluations, one per bin boundary.
fn bench_seed_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed_distribution");

    let launch = launch_range();
    group.throughput(Throughput::Elements(u64::from(launch.bin_count())));
    group.bench_function("launch_range_151_bins", |b| {
        b.iter(|| black_box(build_seed_distribution(black_box(&launch)).unwrap()));
    });

    let wide = wide_range();
    group.throughput(Throughput::Elements(u64::from(wide.bin_count())));
    group.bench_function("wide_range_1000_bins", |b| {
        b.iter(|| black_box(build_seed_distribution(black_box(&wide)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_seed_distribution);
criterion_main!(benches);
