#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use river_crossing_solver::config::{Method, Options};
use river_crossing_solver::puzzle::Puzzle;
use river_crossing_solver::Solve;

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_canonical(c: &mut Criterion) {
    bench_puzzle(c, Method::BreadthFirst, 3, 2, 100);
}

#[allow(unused)]
fn bench_canonical_dfs(c: &mut Criterion) {
    bench_puzzle(c, Method::DepthFirst, 3, 2, 100);
}

#[allow(unused)]
fn bench_large(c: &mut Criterion) {
    // big boat so there's a solution
    bench_puzzle(c, Method::BreadthFirst, 100, 5, 25);
}

fn bench_puzzle(c: &mut Criterion, method: Method, travelers: u8, capacity: u8, samples: usize) {
    let puzzle = Puzzle::new(travelers, capacity).unwrap();
    let options = Options {
        method,
        ..Options::default()
    };

    c.bench(
        &format!("{}", method),
        Benchmark::new(puzzle.to_string(), move |b| {
            b.iter(|| criterion::black_box(puzzle.solve(criterion::black_box(&options))))
        })
        .sample_size(samples),
    );
}

criterion_group!(benches, bench_canonical, bench_canonical_dfs, bench_large,);
criterion_main!(benches);
