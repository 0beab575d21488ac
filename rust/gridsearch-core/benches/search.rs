use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gridsearch_core::frontier::{Frontier, PriorityFrontier};
use gridsearch_core::grid::{Bounds, GridProblem};
use gridsearch_core::{Algorithm, NodeId, Searcher};

// Open square with a comb of walls so searches have to weave.
fn comb(size: i32) -> GridProblem {
    let mut obstacles = Vec::new();
    for x in (3..size).step_by(4) {
        for y in 1..size {
            obstacles.push((x, y));
        }
        for y in 2..=size {
            obstacles.push((x + 2, y));
        }
    }
    GridProblem::new((1, 1), (size, size), obstacles).with_bounds(Bounds { min: (1, 1), max: (size, size) })
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_search");
    for &size in &[16i32, 64] {
        let problem = comb(size);
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.tag(), size), &problem, |b, p| {
                b.iter(|| black_box(Searcher::new(p).run(algorithm).map(|r| r.stats)))
            });
        }
    }
    group.finish();
}

fn bench_frontier(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_frontier_push_pop");
    for &n in &[100usize, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut f = PriorityFrontier::default();
                for i in 0..n {
                    f.push(NodeId(i), ((i * 7919) % 101) as f64);
                }
                while let Some(id) = f.pop() {
                    black_box(id);
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_frontier);
criterion_main!(benches);
