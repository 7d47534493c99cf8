use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tile_sight::core::{compute_visibility, demo_room, extract_edges, Grid, Room, VisibilityConfig};
use tile_sight::types::{Point, TileType};

/// 64x64 walled room with a checkerboard of 2x2 pillars.
fn pillar_room() -> Grid {
    let mut grid = Grid::new(64, 64, 32.0).unwrap();
    grid.fill_border(TileType::Wall);
    for row in (4..60).step_by(6) {
        for col in (4..60).step_by(6) {
            for (dc, dr) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                grid.set_cell_type(col + dc, row + dr, TileType::Wall);
            }
        }
    }
    grid
}

fn bench_edge_rebuild(c: &mut Criterion) {
    let grid = pillar_room();

    c.bench_function("extract_edges_64x64", |b| {
        b.iter(|| extract_edges(black_box(&grid)))
    });
}

fn bench_visibility(c: &mut Criterion) {
    let grid = demo_room().unwrap();
    let segments = extract_edges(&grid);
    let config = VisibilityConfig::default();
    let origin = Point::new(80.0, 80.0);

    c.bench_function("visibility_demo_room", |b| {
        b.iter(|| compute_visibility(black_box(origin), &segments, 300.0, &config))
    });
}

fn bench_edit_and_query(c: &mut Criterion) {
    let mut room = Room::new(pillar_room());
    let origin = Point::new(100.0, 100.0);

    c.bench_function("toggle_then_visibility_64x64", |b| {
        b.iter(|| {
            room.toggle_cell(black_box(30), 30);
            room.visibility(origin, 600.0)
        })
    });
}

criterion_group!(benches, bench_edge_rebuild, bench_visibility, bench_edit_and_query);
criterion_main!(benches);
