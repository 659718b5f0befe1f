use clearance_pathfinding::occupancy::GridMap;
use clearance_pathfinding::workspace::Workspace;
use clearance_pathfinding::{plan_path, PlanResult};
use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::point::Point;
use std::hint::black_box;

const SCENARIOS: [((i32, i32), (i32, i32)); 4] = [
    ((6, 6), (50, 50)),
    ((6, 6), (200, 200)),
    ((20, 240), (380, 20)),
    ((6, 6), (394, 244)),
];

fn scenarios() -> Vec<(Point, Point)> {
    SCENARIOS
        .iter()
        .map(|&((sx, sy), (gx, gy))| (Point::new(sx, sy), Point::new(gx, gy)))
        .collect()
}

fn reference_bench(c: &mut Criterion) {
    let workspace = Workspace::reference();
    let raster = GridMap::rasterize(&workspace, workspace.width(), workspace.height());
    let scenarios = scenarios();

    c.bench_function("reference workspace, inequality table", |b| {
        b.iter(|| {
            for (start, goal) in &scenarios {
                let result: Option<PlanResult> = plan_path(&workspace, *start, *goal).ok();
                black_box(result);
            }
        })
    });
    c.bench_function("reference workspace, rasterized", |b| {
        b.iter(|| {
            for (start, goal) in &scenarios {
                black_box(plan_path(&raster, *start, *goal).ok());
            }
        })
    });
}

criterion_group!(benches, reference_bench);
criterion_main!(benches);
