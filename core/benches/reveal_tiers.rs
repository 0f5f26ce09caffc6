use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mineclear_core::*;
use std::hint::black_box;

/// Largest cascade origin on a seeded board, so every tier floods a sizeable region.
fn widest_origin(minefield: &Minefield) -> CellIndex {
    minefield
        .cells()
        .filter(|cell| !cell.mine && cell.adjacent == 0)
        .max_by_key(|cell| minefield.cascade_from(cell.index).map_or(0, |cells| cells.len()))
        .map_or(0, |cell| cell.index)
}

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade");
    for difficulty in Difficulty::ALL {
        let minefield = ShuffleMinefieldGenerator::new(7)
            .generate(&difficulty.config())
            .unwrap();
        let origin = widest_origin(&minefield);
        group.bench_with_input(
            BenchmarkId::from_parameter(difficulty.key()),
            &minefield,
            |b, minefield| b.iter(|| minefield.cascade_from(black_box(origin)).unwrap()),
        );
    }
    group.finish();
}

fn bench_first_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_click");
    for difficulty in Difficulty::ALL {
        let session = GameSession::with_difficulty(difficulty, 7).unwrap();
        let origin = widest_origin(session.minefield());
        group.bench_with_input(
            BenchmarkId::from_parameter(difficulty.key()),
            &session,
            |b, session| {
                b.iter(|| {
                    let mut session = session.clone();
                    session.apply(black_box(Command::reveal(origin))).unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_cascade, bench_first_click);
criterion_main!(benches);
