use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use parlor_chess::check_inspection::inspect_check;
use parlor_chess::move_safety::{has_secure_moves, is_checkmate};
use parlor_chess::piece_record::PieceTeam;
use parlor_chess::team_setup::standard_board;

fn bench_legality(c: &mut Criterion) {
    let mut group = c.benchmark_group("legality");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    let board = standard_board().expect("standard board should build");

    // Correctness guard before benchmarking: all 8 pawns and both knights
    // can move from the starting position.
    {
        let mut probe = board.clone();
        let movable = has_secure_moves(&mut probe, PieceTeam::White)
            .expect("secure-move scan should run");
        assert_eq!(movable.len(), 10);
    }

    group.bench_function("inspect_check_startpos", |b| {
        b.iter(|| {
            let report = inspect_check(black_box(&board)).expect("check scan should run");
            black_box(report.any())
        });
    });

    group.bench_function("secure_moves_startpos", |b| {
        let mut probe = board.clone();
        b.iter(|| {
            let movable = has_secure_moves(black_box(&mut probe), PieceTeam::White)
                .expect("secure-move scan should run");
            black_box(movable.len())
        });
    });

    group.bench_function("checkmate_verdict_startpos", |b| {
        let mut probe = board.clone();
        b.iter(|| {
            let verdict = is_checkmate(black_box(&mut probe)).expect("mate scan should run");
            black_box(verdict)
        });
    });

    group.finish();
}

criterion_group!(legality_benches, bench_legality);
criterion_main!(legality_benches);
