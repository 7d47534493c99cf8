//! Edge extraction tests against the facade crate.

use tile_sight::core::{extract_boundaries, extract_edges, parse_ascii, Grid};
use tile_sight::types::{Point, Segment, Side, TileType};

fn seg(x0: f32, y0: f32, x1: f32, y1: f32) -> Segment {
    Segment::new(Point::new(x0, y0), Point::new(x1, y1))
}

fn solid_at(grid: &Grid, p: Point) -> bool {
    grid.cell_at_world(p).is_some_and(|c| c.is_solid())
}

#[test]
fn isolated_cell_has_four_unit_edges() {
    let mut grid = Grid::new(3, 3, 32.0).unwrap();
    grid.set_cell_type(1, 1, TileType::Wall);

    let edges = extract_edges(&grid);
    assert_eq!(edges.len(), 4);
    for edge in &edges {
        assert_eq!(edge.length(), 32.0);
    }
    for expected in [
        seg(32.0, 32.0, 64.0, 32.0),
        seg(32.0, 64.0, 64.0, 64.0),
        seg(32.0, 32.0, 32.0, 64.0),
        seg(64.0, 32.0, 64.0, 64.0),
    ] {
        assert!(edges.contains(&expected), "missing {expected:?}");
    }
}

#[test]
fn solid_row_merges_into_single_runs() {
    let grid = parse_ascii("#####\n", 32.0).unwrap();
    let boundaries = extract_boundaries(&grid);

    let north: Vec<_> = boundaries.iter().filter(|b| b.side == Side::North).collect();
    let south: Vec<_> = boundaries.iter().filter(|b| b.side == Side::South).collect();
    assert_eq!(north.len(), 1);
    assert_eq!(south.len(), 1);
    assert_eq!(north[0].segment, seg(0.0, 0.0, 160.0, 0.0));
    assert_eq!(south[0].segment, seg(0.0, 32.0, 160.0, 32.0));
    // Plus the two end caps.
    assert_eq!(boundaries.len(), 4);
}

#[test]
fn l_shape_has_six_edges() {
    let grid = parse_ascii("#.\n##\n", 32.0).unwrap();
    assert_eq!(extract_edges(&grid).len(), 6);
}

#[test]
fn extraction_is_idempotent() {
    let grid = parse_ascii(
        "\
#####.
#..#..
#.##.#
......
",
        32.0,
    )
    .unwrap();
    assert_eq!(extract_edges(&grid), extract_edges(&grid));
}

#[test]
fn every_boundary_separates_solid_from_open() {
    let grid = parse_ascii(
        "\
##..#.
#..##.
.#.#..
##..##
",
        32.0,
    )
    .unwrap();
    let size = grid.cell_size();

    for boundary in extract_boundaries(&grid) {
        let Segment { start, end } = boundary.segment;
        let cells = (boundary.segment.length() / size).round() as usize;
        let along = (end - start) * (1.0 / cells as f32);
        let (nx, ny) = boundary.side.offset();
        let normal = Point::new(nx as f32, ny as f32) * 0.5;

        for i in 0..cells {
            let probe = start + along * (i as f32 + 0.5);
            assert!(
                solid_at(&grid, probe - normal),
                "{boundary:?}: inside of cell {i} is not solid"
            );
            assert!(
                !solid_at(&grid, probe + normal),
                "{boundary:?}: outside of cell {i} is solid"
            );
        }
    }
}

#[test]
fn segments_never_overlap() {
    let grid = parse_ascii("###\n#.#\n###\n", 32.0).unwrap();
    let edges = extract_edges(&grid);
    // Outer ring and inner ring, four merged sides each.
    assert_eq!(edges.len(), 8);
    for (i, a) in edges.iter().enumerate() {
        for b in &edges[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
