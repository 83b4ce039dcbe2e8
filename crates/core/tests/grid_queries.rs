//! End-to-end scenarios that mirror how a presentation layer drives the grid:
//! build it, map pointer positions to hexes, and run area/path queries
//! filtered down to the hexes that exist.

use hexgrid::{Alignment, Cube, CubeSet, HexGrid};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::collections::HashSet;
use strum::IntoEnumIterator;

const HEX_SIZE: f64 = 1.0;

fn rect_grid(width: u32, length: u32) -> HexGrid {
    let mut grid = HexGrid::new();
    grid.generate_rectangular_grid(Alignment::Horizontal, width, length)
        .unwrap();
    grid
}

fn random_cube(rng: &mut impl Rng, bound: i32) -> Cube {
    Cube::new_qr(rng.gen_range(-bound..=bound), rng.gen_range(-bound..=bound))
}

#[test]
fn test_every_hex_center_picks_itself() {
    let grid = rect_grid(12, 9);
    for &cube in grid.hexes() {
        let pixel = grid.cube_to_pixel(cube, HEX_SIZE).unwrap();
        let picked = grid.pixel_to_cube(pixel.x, pixel.y, HEX_SIZE).unwrap();
        assert_eq!(picked, cube);
        assert!(grid.contains(picked));
    }
}

#[test]
fn test_random_pixel_round_trips() {
    let mut rng = Pcg64::seed_from_u64(0x4845_5847);
    for alignment in Alignment::iter() {
        let grid = HexGrid::with_alignment(alignment);
        for _ in 0..1000 {
            let cube = random_cube(&mut rng, 500);
            let hex_size = rng.gen_range(0.1..100.0);
            let pixel = grid.cube_to_pixel(cube, hex_size).unwrap();
            assert_eq!(
                grid.pixel_to_cube(pixel.x, pixel.y, hex_size).unwrap(),
                cube,
                "{:?} grid, hex size {}",
                alignment,
                hex_size
            );
        }
    }
}

#[test]
fn test_random_lines() {
    let mut rng = Pcg64::seed_from_u64(7);
    for _ in 0..500 {
        let a = random_cube(&mut rng, 50);
        let b = random_cube(&mut rng, 50);
        let line = a.line_to(b);
        assert_eq!(line.len(), a.distance_to(b) + 1);
        assert_eq!(line[0], a);
        assert_eq!(line[line.len() - 1], b);
        assert_eq!(a.distance_to(b), b.distance_to(a));
        for pair in line.windows(2) {
            assert_eq!(pair[0].distance_to(pair[1]), 1, "line {} -> {}", a, b);
        }
        assert!(line
            .iter()
            .all(|cube| cube.q() + cube.r() + cube.s() == 0));
    }
}

#[test]
fn test_range_filtered_to_grid() {
    let grid = rect_grid(5, 5);
    // A corner of the grid only has part of its range on the grid
    let in_grid: Vec<Cube> = Cube::ORIGIN
        .range(1)
        .into_iter()
        .filter(|&cube| grid.contains(cube))
        .collect();
    assert_eq!(
        in_grid.into_iter().collect::<HashSet<_>>(),
        [Cube::ORIGIN, Cube::new_qr(1, 0), Cube::new_qr(0, 1)]
            .iter()
            .copied()
            .collect()
    );
}

#[test]
fn test_reachable_matches_range_on_grid() {
    // Deep inside a big grid, the edges are out of reach and shouldn't matter
    let grid = rect_grid(30, 30);
    let start = Cube::new_qr(8, 15);
    let layers = grid
        .reachable(start, 4, |cube| grid.contains(cube))
        .unwrap();
    let flat: CubeSet = layers.into_iter().flatten().collect();
    let range: CubeSet = start.range(4).into_iter().collect();
    assert_eq!(flat, range);
}

#[test]
fn test_path_across_grid_with_obstacles() {
    let grid = rect_grid(10, 10);
    let start = Cube::ORIGIN;
    let target = Cube::new_qr(5, 4);
    assert!(grid.contains(target));

    // Paint a line of obstacles across most of the grid, leaving a gap at the
    // far end
    let obstacles: CubeSet = Cube::new_qr(-1, 2)
        .line_to(Cube::new_qr(7, 2))
        .into_iter()
        .collect();
    let is_passable =
        |cube: Cube| grid.contains(cube) && !obstacles.contains(&cube);

    let open_path = grid
        .shortest_path(start, target, |cube| grid.contains(cube))
        .unwrap();
    let path = grid.shortest_path(start, target, is_passable).unwrap();

    assert_eq!(open_path.len(), start.distance_to(target) + 1);
    assert!(path.len() > open_path.len());
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&target));
    assert!(path.iter().all(|&cube| is_passable(cube)));
    for pair in path.windows(2) {
        assert_eq!(pair[0].distance_to(pair[1]), 1);
    }

    // Reuse a single search for a bunch of targets
    let paths = grid.shortest_paths(start, is_passable).unwrap();
    assert_eq!(paths.path_to(target), path);
    for &cube in grid.hexes() {
        if obstacles.contains(&cube) {
            assert!(paths.path_to(cube).is_empty());
        }
    }
}

#[test]
fn test_path_blocked_completely() {
    let grid = rect_grid(6, 6);
    let start = Cube::ORIGIN;
    let target = Cube::new_qr(2, 4);

    // A full row of obstacles splits the grid in two
    let obstacles: CubeSet = (-1..6).map(|q| Cube::new_qr(q, 2)).collect();
    let is_passable =
        |cube: Cube| grid.contains(cube) && !obstacles.contains(&cube);
    assert!(grid.shortest_path(start, target, is_passable).unwrap().is_empty());

    let layers = grid.reachable(start, 10, is_passable).unwrap();
    assert!(layers.iter().flatten().all(|cube| cube.r() < 2));
}
