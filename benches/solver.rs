//! Benchmarks for the sliding-tile solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use npuzzle::generator::random_board;
use npuzzle::heuristic::Heuristic;
use npuzzle::moves::legal_moves;
use npuzzle::search::{a_star, best_first};
use npuzzle::Board;

/// An eight-move 3x3 instance whose Manhattan distance equals its depth.
fn shallow_scramble() -> Board {
    Board::parse("4 1 3 2 8 5 7 6 b").unwrap()
}

/// A seeded random 3x3 instance, typically around twenty moves deep.
fn deep_scramble() -> Board {
    let mut rng = StdRng::seed_from_u64(7);
    random_board(9, &mut rng).unwrap()
}

/// Benchmark A* with Manhattan Distance on a shallow instance.
fn bench_a_star_shallow(c: &mut Criterion) {
    let start = shallow_scramble();
    let goal = Board::solved(9).unwrap();

    c.bench_function("a_star_manhattan_shallow", |b| {
        b.iter(|| a_star(black_box(&start), &goal, Heuristic::ManhattanDistance))
    });
}

/// Benchmark best-first search with each heuristic on a shallow instance.
fn bench_best_first_heuristics(c: &mut Criterion) {
    let start = shallow_scramble();
    let goal = Board::solved(9).unwrap();

    for heuristic in Heuristic::ALL {
        c.bench_function(&format!("best_first_{}", heuristic.tag()), |b| {
            b.iter(|| best_first(black_box(&start), &goal, heuristic))
        });
    }
}

/// Benchmark A* with Manhattan Distance on a deep random instance.
fn bench_a_star_deep(c: &mut Criterion) {
    let start = deep_scramble();
    let goal = Board::solved(9).unwrap();

    let mut group = c.benchmark_group("deep");
    group.sample_size(10);
    group.bench_function("a_star_manhattan", |b| {
        b.iter(|| a_star(black_box(&start), &goal, Heuristic::ManhattanDistance))
    });
    group.finish();
}

/// Benchmark successor generation for an interior blank.
fn bench_legal_moves(c: &mut Criterion) {
    let center = Board::parse("1 2 3 4 b 5 7 8 6").unwrap();

    c.bench_function("legal_moves", |b| b.iter(|| legal_moves(black_box(&center))));
}

/// Benchmark the heuristic evaluators on one state.
fn bench_evaluate(c: &mut Criterion) {
    let start = shallow_scramble();

    for heuristic in Heuristic::ALL {
        c.bench_function(&format!("evaluate_{}", heuristic.tag()), |b| {
            b.iter(|| heuristic.evaluate(black_box(&start)))
        });
    }
}

criterion_group!(
    benches,
    bench_a_star_shallow,
    bench_best_first_heuristics,
    bench_a_star_deep,
    bench_legal_moves,
    bench_evaluate
);
criterion_main!(benches);
