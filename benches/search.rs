#[macro_use]
extern crate criterion;

use criterion::{black_box, BenchmarkId, Criterion};

use nrow_search::{
    AlphaBeta, Board, GameState, MaxN, Minimax, MonteCarloTreeSearch, Paranoid, SearchBudget,
    Strategy,
};

// A midgame 3x3 position: X to move with four stones on the board.
fn midgame() -> GameState<char> {
    let cells = "XO__X__O_"
        .chars()
        .map(|c| if c == '_' { None } else { Some(c) })
        .collect();
    let board = Board::from_cells(3, cells).unwrap();
    GameState::new(board, vec!['X', 'O']).unwrap()
}

fn bench_deterministic_searches(c: &mut Criterion) {
    let mut group = c.benchmark_group("deterministic");

    group.bench_function("minimax", |b| {
        b.iter(|| {
            let mut search = Minimax::new(black_box(midgame())).unwrap();
            black_box(search.best_move().unwrap())
        })
    });

    group.bench_function("alpha_beta", |b| {
        b.iter(|| {
            let mut search = AlphaBeta::new(black_box(midgame())).unwrap();
            black_box(search.best_move().unwrap())
        })
    });

    group.bench_function("max_n", |b| {
        b.iter(|| {
            let mut search = MaxN::new(black_box(midgame())).unwrap();
            black_box(search.best_move().unwrap())
        })
    });

    group.bench_function("paranoid", |b| {
        b.iter(|| {
            let mut search = Paranoid::new(black_box(midgame())).unwrap();
            black_box(search.best_move().unwrap())
        })
    });

    group.finish();
}

fn bench_mcts_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_iterations");

    for iterations in [100, 500, 1000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            &iterations,
            |b, &iterations| {
                let budget = SearchBudget::default().with_max_iterations(iterations);
                b.iter(|| {
                    let mut search =
                        MonteCarloTreeSearch::with_budget(black_box(midgame()), budget.clone())
                            .unwrap();
                    black_box(search.best_move().unwrap())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_deterministic_searches, bench_mcts_iterations);
criterion_main!(benches);
