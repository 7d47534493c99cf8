//! Visibility sweep tests: fan shape, shadows, dedup and corner sampling.

use std::f32::consts::{PI, TAU};

use tile_sight::core::angle::{dedup_by_distance, AnglePoint};
use tile_sight::core::visibility::{build_fan, sample_rays};
use tile_sight::core::{
    compute_visibility, extract_edges, fan_contains, normalize_angle, Grid, Room,
    VisibilityConfig,
};
use tile_sight::types::{Point, Segment, TileType, Triangle};

/// 10x10 room, walled in, with a 2x2 block covering world [192, 256]².
fn block_room() -> Grid {
    let mut grid = Grid::new(10, 10, 32.0).unwrap();
    grid.fill_border(TileType::Wall);
    for (col, row) in [(6, 6), (7, 6), (6, 7), (7, 7)] {
        grid.set_cell_type(col, row, TileType::Wall);
    }
    grid
}

fn angular_span(origin: Point, tri: &Triangle) -> f32 {
    normalize_angle(tri.p3.angle_from(origin) - tri.p2.angle_from(origin))
}

#[test]
fn fan_covers_full_circle_around_interior_block() {
    let grid = block_room();
    let origin = Point::new(160.0, 160.0);
    let fan = compute_visibility(
        origin,
        &extract_edges(&grid),
        1000.0,
        &VisibilityConfig::default(),
    )
    .unwrap();
    assert!(fan.len() > 4);

    let mut total = 0.0;
    for tri in &fan {
        assert_eq!(tri.p1, origin);
        let span = angular_span(origin, tri);
        assert!((0.0..PI).contains(&span), "span {span} out of range for {tri:?}");
        total += span;
    }
    assert!((total - TAU).abs() < 1e-2, "fan spans {total} radians");
}

#[test]
fn fan_triangles_chain_around_origin() {
    let mut room = Room::new(block_room());
    let fan = room.visibility(Point::new(100.0, 220.0), 1000.0).unwrap();
    assert!(!fan.is_empty());
    for (i, tri) in fan.iter().enumerate() {
        let next = &fan[(i + 1) % fan.len()];
        assert_eq!(tri.p3, next.p2);
    }
}

#[test]
fn block_casts_a_shadow() {
    let grid = block_room();
    let origin = Point::new(160.0, 160.0);
    let fan = compute_visibility(
        origin,
        &extract_edges(&grid),
        1000.0,
        &VisibilityConfig::default(),
    )
    .unwrap();

    // Behind the block as seen from the origin.
    assert!(!fan_contains(&fan, Point::new(270.0, 240.0)));
    // Open floor in other directions.
    assert!(fan_contains(&fan, Point::new(100.0, 120.0)));
    assert!(fan_contains(&fan, Point::new(250.0, 160.0)));
    // Inside the block itself.
    assert!(!fan_contains(&fan, Point::new(224.0, 224.0)));
}

#[test]
fn nearby_points_are_merged() {
    let samples: Vec<AnglePoint> = [
        (0.1, Point::new(10.0, 1.0)),
        (1.0, Point::new(5.0, 8.0)),
        (1.05, Point::new(5.0, 8.5)),
        (2.5, Point::new(-8.0, 5.0)),
        (4.0, Point::new(-6.0, -8.0)),
    ]
    .into_iter()
    .map(|(angle, point)| AnglePoint::new(angle, point))
    .collect();

    let kept = dedup_by_distance(&samples, 1.0);
    assert_eq!(kept.len(), 4);
    assert_eq!(kept[1].point, Point::new(5.0, 8.0));

    let all: Vec<Point> = samples.iter().map(|s| s.point).collect();
    let merged: Vec<Point> = kept.iter().map(|s| s.point).collect();
    assert_eq!(build_fan(Point::ZERO, &all).len(), 5);
    assert_eq!(build_fan(Point::ZERO, &merged).len(), 4);
}

#[test]
fn no_occluders_without_bounds_is_empty() {
    let fan = compute_visibility(
        Point::new(3.0, 4.0),
        &[],
        50.0,
        &VisibilityConfig::default(),
    )
    .unwrap();
    assert!(fan.is_empty());
}

#[test]
fn no_occluders_with_bounds_reaches_max_distance() {
    let grid = Grid::new(8, 8, 32.0).unwrap();
    let config = VisibilityConfig::default().with_bounds(grid.bounds());
    let mut room = Room::new(grid).with_config(config);
    let origin = Point::new(128.0, 128.0);

    let fan = room.visibility(origin, 400.0).unwrap();
    assert_eq!(fan.len(), 4);
    for tri in &fan {
        assert!((tri.p2.distance(origin) - 400.0).abs() < 1e-2);
    }
    assert!(fan_contains(&fan, Point::new(10.0, 200.0)));
}

#[test]
fn side_rays_resolve_both_faces_of_a_corner() {
    let wall = [Segment::new(Point::new(10.0, 0.0), Point::new(10.0, 10.0))];
    let origin = Point::new(0.0, 5.0);
    let samples = sample_rays(origin, &wall, 100.0, &VisibilityConfig::default());
    assert_eq!(samples.len(), 6);

    // Samples come in (-ε, 0, +ε) order per endpoint. The ray that grazes
    // the exact corner may go either way, so only the side rays are checked.

    // (10, 0): the ray just above the corner slips past, the one below hits.
    let (above, below) = (samples[0], samples[2]);
    assert!(above.point.x > 10.5);
    assert!((above.point.distance(origin) - 100.0).abs() < 1e-2);
    assert!((below.point.x - 10.0).abs() < 1e-3);

    // (10, 10): mirrored.
    let (above, below) = (samples[3], samples[5]);
    assert!((above.point.x - 10.0).abs() < 1e-3);
    assert!(below.point.x > 10.5);
}

#[test]
fn moving_the_origin_changes_the_fan() {
    let mut room = Room::new(block_room());
    let a = room.visibility(Point::new(64.0, 64.0), 1000.0).unwrap();
    let b = room.visibility(Point::new(64.0, 250.0), 1000.0).unwrap();
    assert_ne!(a, b);
}
