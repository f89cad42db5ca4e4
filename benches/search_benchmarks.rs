use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use waypoint::heuristics::{linear_conflict, manhattan};
use waypoint::problems::eight_puzzle::{EightPuzzle, TileState, GOAL_TILES};
use waypoint::problems::sudoku::SudokuBoard;
use waypoint::search::best_first::{astar_problem, ucs_problem};
use waypoint::search::bfs::bfs;

// A handful of moves from the goal; deep enough that the heuristics
// visibly pay off, shallow enough for uninformed search to finish.
const SCRAMBLED: [u8; 9] = [1, 0, 3, 4, 2, 5, 7, 8, 6];

const PUZZLE: [&str; 9] = [
    "530070000",
    "600195000",
    "098000060",
    "800060003",
    "400803001",
    "700020006",
    "060000280",
    "000419005",
    "000080079",
];

fn bench_tile_search(c: &mut Criterion) {
    let start = TileState::new(SCRAMBLED).expect("valid permutation");
    let problem = EightPuzzle::new(start);

    let mut group = c.benchmark_group("eight_puzzle");
    group.bench_with_input(BenchmarkId::new("ucs", "scrambled"), &problem, |b, p| {
        b.iter(|| ucs_problem(black_box(p)).unwrap());
    });
    group.bench_with_input(
        BenchmarkId::new("astar_manhattan", "scrambled"),
        &problem,
        |b, p| {
            b.iter(|| astar_problem(black_box(p), |s| manhattan(s, &GOAL_TILES), "h1").unwrap());
        },
    );
    group.bench_with_input(
        BenchmarkId::new("astar_linear_conflict", "scrambled"),
        &problem,
        |b, p| {
            b.iter(|| {
                astar_problem(black_box(p), |s| linear_conflict(s, &GOAL_TILES), "h2").unwrap()
            });
        },
    );
    group.bench_with_input(BenchmarkId::new("bfs", "scrambled"), &problem, |b, p| {
        b.iter(|| bfs(black_box(p)).unwrap());
    });
    group.finish();
}

fn bench_sudoku(c: &mut Criterion) {
    c.bench_function("sudoku_mrv_backtracking", |b| {
        let board = SudokuBoard::parse(&PUZZLE).expect("well-formed puzzle");
        b.iter(|| black_box(&board).solve().unwrap());
    });
}

criterion_group!(benches, bench_tile_search, bench_sudoku);
criterion_main!(benches);
