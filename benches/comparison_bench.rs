use criterion::{criterion_group, criterion_main, Criterion};
use grid_search_viz::{grid::Grid, solver::Algorithm, MAX_DIMENSION, MIN_DIMENSION};
use grid_util::point::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use std::ops::ControlFlow;

/// Random grid with the start and end in opposite corners, kept connected by retrying seeds.
fn bench_grid(n: usize, density: f64) -> (Grid, Point, Point) {
    let start = Point::new(0, 0);
    let end = Point::new(n as i32 - 1, n as i32 - 1);
    let mut rng = StdRng::seed_from_u64(0);
    loop {
        let mut grid = Grid::new(n, 800);
        for y in 0..n as i32 {
            for x in 0..n as i32 {
                if rng.gen_bool(density) {
                    grid.mark_barrier(Point::new(x, y));
                }
            }
        }
        grid.mark_start(start);
        grid.mark_end(end);
        grid.update();
        if grid.reachable(start, end) {
            return (grid, start, end);
        }
    }
}

fn solver_bench(c: &mut Criterion) {
    for n in [MIN_DIMENSION, MAX_DIMENSION] {
        let (grid, start, end) = bench_grid(n, 0.25);
        for algorithm in Algorithm::ALL {
            c.bench_function(format!("{n}x{n}, {algorithm}").as_str(), |b| {
                b.iter(|| {
                    let mut grid = grid.clone();
                    black_box(
                        algorithm
                            .run(&mut grid, start, end, |g: &Grid| {
                                black_box(g);
                                ControlFlow::Continue(())
                            })
                            .unwrap(),
                    )
                })
            });
        }
    }
}

fn refresh_bench(c: &mut Criterion) {
    let (mut grid, _, _) = bench_grid(MAX_DIMENSION, 0.25);
    c.bench_function("refresh adjacency 80x80", |b| {
        b.iter(|| {
            grid.refresh_adjacency();
            black_box(&grid);
        })
    });
}

criterion_group!(benches, solver_bench, refresh_bench);
criterion_main!(benches);
