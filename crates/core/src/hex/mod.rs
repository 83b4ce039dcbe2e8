//! This module holds the types, data structures and algorithms that make up
//! the hex grid.
//!
//! ## Coordinate Systems
//!
//! Hexes are addressed with the [cube coordinate system defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! ### Cube Coordinates
//!
//! Each coordinate has three components (`q`, `r`, and `s`), and **for any
//! hex, all three components are integers and `q + r + s = 0`.** The grid is
//! two-dimensional, but three axes make the math around hexagons much simpler:
//! distance, lines, rings and ranges are all symmetric in the three axes. See
//! [Cube].
//!
//! ### Axial Coordinates
//!
//! Because `s` is always `-q - r`, it carries no information of its own.
//! [Axial] drops it, which is handy for storage and display. Converting
//! between the two is free and lossless in both directions.
//!
//! ### Pixel Coordinates
//!
//! Pixel coordinates place a hex center in a 2D plane, for rendering and for
//! mapping a point on screen back to the hex underneath it. The conversion
//! depends on the grid's [Alignment]:
//!
//! - [Alignment::Horizontal] grids lay hexes out in horizontal rows
//! - [Alignment::Vertical] grids lay hexes out in vertical columns
//!
//! The alignment also decides which compass [Direction]s name a neighbor,
//! since a hexagon only has six sides but the compass has eight points. Both
//! conversions are owned by [HexGrid], which knows its alignment.

mod data_structure;
mod direction;
mod grid;
mod search;
mod unit;

pub use self::{
    data_structure::*, direction::*, grid::*, search::*, unit::*,
};
