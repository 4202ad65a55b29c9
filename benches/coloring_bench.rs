//! Criterion benchmarks for the coloring heuristics.
//!
//! Uses seeded Erdős–Rényi graphs so runs are comparable across machines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_graphcolor::graph::Graph;
use u_graphcolor::greedy::greedy_coloring;
use u_graphcolor::local::{LocalSearchConfig, LocalSearchEngine};
use u_graphcolor::sa::{AnnealingConfig, AnnealingEngine, NeighborStrategy};
use u_graphcolor::tuning::{ParameterTuner, TuningConfig};

// ===========================================================================
// Instances
// ===========================================================================

fn random_edges(n: usize, p: f64, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random_bool(p) {
                edges.push((u, v));
            }
        }
    }
    edges
}

fn random_graph(n: usize, p: f64) -> Graph {
    Graph::from_edges(n, &random_edges(n, p, 42))
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for &n in &[100, 450, 1000] {
        let graph = random_graph(n, 0.1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| black_box(greedy_coloring(black_box(g))))
        });
    }
    group.finish();
}

fn bench_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_search");
    group.sample_size(10);

    for &n in &[50, 100] {
        let graph = random_graph(n, 0.2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| {
                let engine = LocalSearchEngine::new(g, LocalSearchConfig::default()).unwrap();
                black_box(engine.run_all())
            })
        });
    }
    group.finish();
}

fn bench_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("annealing");
    group.sample_size(10);

    let graph = random_graph(200, 0.1);
    for strategy in NeighborStrategy::ALL {
        let config = AnnealingConfig::default()
            .with_strategy(strategy)
            .with_max_iterations(1000)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy),
            &config,
            |b, config| {
                b.iter(|| {
                    let engine = AnnealingEngine::new(&graph, config.clone()).unwrap();
                    black_box(engine.run())
                })
            },
        );
    }
    group.finish();
}

fn bench_tuning(c: &mut Criterion) {
    let mut group = c.benchmark_group("tuning");
    group.sample_size(10);

    let edges = random_edges(60, 0.2, 7);
    let config = TuningConfig::default()
        .with_temperatures(100.0, 500.0, 100.0)
        .with_cooling_rates(0.90, 0.94, 0.01)
        .with_iterations(200)
        .with_seed(42);
    group.bench_function("grid_5x5_n60", |b| {
        b.iter(|| {
            let tuner = ParameterTuner::new(60, &edges, config.clone()).unwrap();
            black_box(tuner.tune().unwrap())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_greedy, bench_local_search, bench_annealing, bench_tuning);
criterion_main!(benches);
