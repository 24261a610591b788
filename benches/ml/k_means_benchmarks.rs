use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kmeans_core::{cluster_features, kmeans, FeatureMatrix, Init, KMeansConfig, StandardScaler};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Age / income style rows scattered around `k` centers.
fn generate_rows(n: usize, k: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let centers: Vec<(f64, f64)> = (0..k)
        .map(|_| (rng.gen_range(18.0..80.0), rng.gen_range(20_000.0..250_000.0)))
        .collect();
    (0..n)
        .map(|i| {
            let (age, income) = centers[i % k];
            vec![
                age + rng.gen_range(-3.0..3.0),
                income + rng.gen_range(-10_000.0..10_000.0),
            ]
        })
        .collect()
}

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");
    for &n in &[100, 1_000, 10_000] {
        let rows = generate_rows(n, 5, 42);
        let data = FeatureMatrix::from_rows(&rows).unwrap();
        let (_, scaled) = StandardScaler::fit_transform(&data).unwrap();

        for (name, init) in [("random_rows", Init::RandomRows), ("kmeans_pp", Init::KMeansPlusPlus)] {
            let config = KMeansConfig::new(5).with_init(init);
            group.bench_with_input(BenchmarkId::new(name, n), &scaled, |b, scaled| {
                b.iter(|| kmeans(black_box(scaled), black_box(&config)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let rows = generate_rows(2_000, 3, 7);
    let config = KMeansConfig::default();
    c.bench_function("cluster_features_2000", |b| {
        b.iter(|| cluster_features(black_box(&rows), black_box(&config)).unwrap())
    });
}

criterion_group!(benches, bench_kmeans, bench_pipeline);
criterion_main!(benches);
