//! hexgrid is a coordinate system and spatial query engine for hexagon-tiled
//! grids. It covers the math only: coordinates, pixel conversions, adjacency,
//! lines, ranges, reachability and path finding. Rendering, input handling
//! and everything else presentational is left to the caller.
//!
//! ```
//! use hexgrid::{Alignment, Cube, HexGrid};
//!
//! let mut grid = HexGrid::new();
//! grid.generate_rectangular_grid(Alignment::Horizontal, 10, 10).unwrap();
//!
//! // Map a point on screen to the cell underneath it
//! let cube = grid.pixel_to_cube(3.2, 1.4, 1.0).unwrap();
//! assert!(grid.contains(cube));
//!
//! // Find a path that stays on the grid
//! let path = grid
//!     .shortest_path(Cube::ORIGIN, Cube::new_qr(3, 2), |c| grid.contains(c))
//!     .unwrap();
//! assert_eq!(path.len(), 6);
//! ```
//!
//! See [GridConfig] for details on how a grid can be defined from a config
//! file.

mod config;
mod error;
mod hex;
mod util;

pub use crate::{
    config::GridConfig,
    error::{DirectionKind, HexError},
    hex::*,
    util::hex_count,
};
