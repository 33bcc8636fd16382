//! Criterion benchmarks for the terrain pipeline.
//!
//! Benchmarks:
//!   - full generate() at n = 32 / 64 / 255
//!   - displacement alone at n = 255
//!
//! Run with: cargo bench -p terrain --bench terrain_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use terrain::{displacement, generate, Heightfield, TerrainParams};

// ---------------------------------------------------------------------------
// Benchmark: full pipeline
// ---------------------------------------------------------------------------

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("terrain_generate");

    for n in [32_usize, 64, 255] {
        let params = TerrainParams {
            n,
            ..Default::default()
        };
        group.bench_function(format!("n_{n}"), |b| {
            b.iter(|| {
                let mut rng = ChaCha8Rng::seed_from_u64(42);
                black_box(generate(black_box(&params), &mut rng).unwrap())
            });
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: displacement only
// ---------------------------------------------------------------------------

fn bench_displacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("terrain_displacement");
    let params = TerrainParams::default();

    group.bench_function("n_255", |b| {
        b.iter(|| {
            let mut field = Heightfield::new(
                params.n,
                params.min_x,
                params.max_x,
                params.min_y,
                params.max_y,
            )
            .unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            displacement::displace(&mut field, &params, &mut rng);
            black_box(field)
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Register groups
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_generate, bench_displacement);
criterion_main!(benches);
