//! Benchmarks for move generation and game bookkeeping.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::{perft, GameSession, Move, Position};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let startpos = Position::starting();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft(&startpos, black_box(depth)))
        });
    }

    if let Ok(kiwipete) = Position::from_fen(KIWIPETE) {
        for depth in 1..=2 {
            group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
                b.iter(|| perft(&kiwipete, black_box(depth)))
            });
        }
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Position::starting();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    if let Ok(middlegame) =
        Position::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
    {
        group.bench_function("middlegame", |b| {
            b.iter(|| black_box(middlegame.legal_moves()))
        });
        group.bench_function("status", |b| b.iter(|| black_box(middlegame.status())));
    }

    if let Ok(kiwipete) = Position::from_fen(KIWIPETE) {
        group.bench_function("kiwipete", |b| b.iter(|| black_box(kiwipete.legal_moves())));
        group.bench_function("fen_roundtrip", |b| {
            b.iter(|| Position::from_fen(black_box(&kiwipete.to_fen())))
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let opening: Vec<Move> = ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6", "b5a4", "g8f6"]
        .iter()
        .filter_map(|uci| uci.parse().ok())
        .collect();

    c.bench_function("session_play_and_rewind", |b| {
        b.iter(|| {
            let mut game = GameSession::new();
            for mv in &opening {
                let _ = game.apply_move(*mv);
            }
            game.rewind_to(black_box(0));
            black_box(game.fen())
        })
    });
}

criterion_group!(benches, bench_perft, bench_movegen, bench_session);
criterion_main!(benches);
