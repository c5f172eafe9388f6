use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_wordsearch::core::{rasterize, PuzzleBoard};
use tui_wordsearch::types::{Coord, Dimensions, REVEAL_DELAY_MS};

fn bench_rasterize(c: &mut Criterion) {
    let a = Coord::new(0, 0);
    let b = Coord::new(37, 11);

    c.bench_function("rasterize_shallow_38", |bench| {
        bench.iter(|| rasterize(black_box(a), black_box(b)))
    });
}

fn bench_hide(c: &mut Criterion) {
    let mut board = PuzzleBoard::new(Dimensions::new(8, 8), 12345);

    c.bench_function("hide_hello_8x8", |b| {
        b.iter(|| {
            let _ = board.hide(black_box("Hello"));
        })
    });

    let mut large = PuzzleBoard::new(Dimensions::new(40, 40), 12345);
    c.bench_function("hide_long_word_40x40", |b| {
        b.iter(|| {
            let _ = large.hide(black_box("supercalifragilisticexpialidocious"));
        })
    });
}

fn bench_drag_and_reveal(c: &mut Criterion) {
    let mut board = PuzzleBoard::new(Dimensions::new(16, 16), 7);

    c.bench_function("drag_judge_reveal_16x16", |b| {
        b.iter(|| {
            let p = match board.hide("benchmark") {
                Ok(p) => p,
                Err(_) => return,
            };
            board.start_drag(p.start);
            for cell in p.cells().skip(1) {
                board.enter(cell);
            }
            board.end_drag(p.end());
            board.tick(REVEAL_DELAY_MS);
            black_box(board.take_events());
        })
    });
}

criterion_group!(benches, bench_rasterize, bench_hide, bench_drag_and_reveal);
criterion_main!(benches);
