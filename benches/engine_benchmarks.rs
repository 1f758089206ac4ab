//! Benchmarks for move generation and codec throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use position_graph::codec::{Board, Cell, Kind, Side};
use position_graph::rules::all_possible_moves;
use position_graph::seed;

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = seed::standard();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(all_possible_moves(&startpos, Side::Light)))
    });

    let mut cells = [[Cell::Void; 8]; 8];
    cells[4][4] = Cell::Piece(Side::Light, Kind::Radius);
    cells[7][4] = Cell::Piece(Side::Light, Kind::Anchor);
    cells[0][4] = Cell::Piece(Side::Dark, Kind::Anchor);
    let midboard = Board::from_matrix(cells);
    group.bench_function("open_radius", |b| {
        b.iter(|| black_box(all_possible_moves(&midboard, Side::Light)))
    });

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let board = seed::standard();

    for label in ["to_blob", "to_hex"] {
        group.bench_with_input(BenchmarkId::new("encode", label), &label, |b, &label| match label {
            "to_blob" => b.iter(|| black_box(board.to_blob())),
            _ => b.iter(|| black_box(board.to_identifier().to_hex())),
        });
    }

    let blob = board.to_blob();
    group.bench_function("decode_blob", |b| b.iter(|| black_box(Board::from_blob(&blob).unwrap())));

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_codec);
criterion_main!(benches);
