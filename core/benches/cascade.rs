use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

const SIZES: [(&str, Coord2, CellCount); 3] = [
    ("expert", (30, 16), 99),
    ("sparse_255", (255, 255), 100),
    ("dense_255", (255, 255), 13000),
];

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade");

    for (name, size, mines) in SIZES {
        let mut grid = Grid::new(size).unwrap();
        RandomMineLayout::new(Some(0xC0FFEE))
            .lay(&mut grid, mines)
            .unwrap();
        let Some(start) = grid
            .coords()
            .find(|&pos| !grid[pos].has_mine() && grid.adjacent_mine_count(pos) == 0)
        else {
            continue;
        };

        group.bench_function(name, |b| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| black_box(reveal::open(&mut grid, black_box(start))),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut layout = RandomMineLayout::new(Some(1));
    c.bench_function("layout/expert", |b| {
        b.iter(|| {
            let mut grid = Grid::new((30, 16)).unwrap();
            layout.lay(&mut grid, 99).unwrap();
            black_box(grid)
        })
    });
}

criterion_group!(benches, bench_cascade, bench_layout);
criterion_main!(benches);
