use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sapper_core::{Board, BoardConfig, MineGenerator, RandomMineGenerator};

fn generate_expert(c: &mut Criterion) {
    let config = BoardConfig::new((30, 16), 99).unwrap();
    c.bench_function("generate 30x16/99", |b| {
        b.iter(|| RandomMineGenerator::new(black_box(7)).generate(config, (15, 8)))
    });
}

fn flood_fill_whole_board(c: &mut Criterion) {
    let config = BoardConfig::new((200, 200), 0).unwrap();
    c.bench_function("flood fill 200x200", |b| {
        b.iter(|| {
            let mut board = Board::new(config, 7);
            board.reveal(black_box((100, 100)));
            board
        })
    });
}

criterion_group!(benches, generate_expert, flood_fill_whole_board);
criterion_main!(benches);
