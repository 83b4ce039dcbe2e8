use crate::{error::DirectionKind, hex::Cube, HexError};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The orientation of a hex grid. This decides how hexes map to pixel space,
/// and which compass directions name a neighbor.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Alignment {
    /// Hexes line up in horizontal rows
    Horizontal,
    /// Hexes line up in vertical columns
    Vertical,
}

impl Default for Alignment {
    fn default() -> Self {
        Self::Horizontal
    }
}

/// A compass direction. Hexagons have six sides (and six corners), so only
/// six of these eight labels are meaningful in any one grid. Which six depends
/// on the grid's [Alignment], and differs between neighbors and diagonals.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// A fixed mapping of six direction labels to unit vectors, in clockwise
/// order. The order matters: ring tracing and BFS tie-breaking both follow it.
pub type DirectionTable = [(Direction, Cube); 6];

// The 6 vectors to an adjacent hex, shared by both alignments
const NEIGHBOR_NE: Cube = Cube::new_qr(1, -1);
const NEIGHBOR_E: Cube = Cube::new_qr(1, 0);
const NEIGHBOR_SE: Cube = Cube::new_qr(0, 1);
const NEIGHBOR_SW: Cube = Cube::new_qr(-1, 1);
const NEIGHBOR_W: Cube = Cube::new_qr(-1, 0);
const NEIGHBOR_NW: Cube = Cube::new_qr(0, -1);

// The 6 vectors to a hex across one of our corners
const DIAGONAL_0: Cube = Cube::new_qr(1, -2);
const DIAGONAL_1: Cube = Cube::new_qr(2, -1);
const DIAGONAL_2: Cube = Cube::new_qr(1, 1);
const DIAGONAL_3: Cube = Cube::new_qr(-1, 2);
const DIAGONAL_4: Cube = Cube::new_qr(-2, 1);
const DIAGONAL_5: Cube = Cube::new_qr(-1, -1);

const HORIZONTAL_NEIGHBORS: DirectionTable = [
    (Direction::NE, NEIGHBOR_NE),
    (Direction::E, NEIGHBOR_E),
    (Direction::SE, NEIGHBOR_SE),
    (Direction::SW, NEIGHBOR_SW),
    (Direction::W, NEIGHBOR_W),
    (Direction::NW, NEIGHBOR_NW),
];

// Same vectors as horizontal, but with the labels rotated a sixth of a turn
const VERTICAL_NEIGHBORS: DirectionTable = [
    (Direction::N, NEIGHBOR_NW),
    (Direction::NE, NEIGHBOR_NE),
    (Direction::SE, NEIGHBOR_E),
    (Direction::S, NEIGHBOR_SE),
    (Direction::SW, NEIGHBOR_SW),
    (Direction::NW, NEIGHBOR_W),
];

const HORIZONTAL_DIAGONALS: DirectionTable = [
    (Direction::N, DIAGONAL_0),
    (Direction::NE, DIAGONAL_1),
    (Direction::SE, DIAGONAL_2),
    (Direction::S, DIAGONAL_3),
    (Direction::SW, DIAGONAL_4),
    (Direction::NW, DIAGONAL_5),
];

const VERTICAL_DIAGONALS: DirectionTable = [
    (Direction::NE, DIAGONAL_0),
    (Direction::E, DIAGONAL_1),
    (Direction::SE, DIAGONAL_2),
    (Direction::SW, DIAGONAL_3),
    (Direction::W, DIAGONAL_4),
    (Direction::NW, DIAGONAL_5),
];

impl Alignment {
    /// The six neighbor directions for this alignment, clockwise
    pub fn neighbor_table(self) -> &'static DirectionTable {
        match self {
            Self::Horizontal => &HORIZONTAL_NEIGHBORS,
            Self::Vertical => &VERTICAL_NEIGHBORS,
        }
    }

    /// The six diagonal directions for this alignment, clockwise
    pub fn diagonal_table(self) -> &'static DirectionTable {
        match self {
            Self::Horizontal => &HORIZONTAL_DIAGONALS,
            Self::Vertical => &VERTICAL_DIAGONALS,
        }
    }

    /// Get the unit vector that moves a hex one step towards its neighbor in
    /// the given direction. Returns an error if the direction doesn't point
    /// at a side in this alignment.
    pub fn neighbor_vector(
        self,
        direction: Direction,
    ) -> Result<Cube, HexError> {
        lookup(self.neighbor_table(), direction).ok_or(
            HexError::InvalidDirection {
                direction,
                alignment: self,
                kind: DirectionKind::Neighbor,
            },
        )
    }

    /// Get the vector that moves a hex to its diagonal neighbor in the given
    /// direction. Returns an error if the direction doesn't point at a corner
    /// in this alignment.
    pub fn diagonal_vector(
        self,
        direction: Direction,
    ) -> Result<Cube, HexError> {
        lookup(self.diagonal_table(), direction).ok_or(
            HexError::InvalidDirection {
                direction,
                alignment: self,
                kind: DirectionKind::Diagonal,
            },
        )
    }
}

fn lookup(table: &DirectionTable, direction: Direction) -> Option<Cube> {
    table
        .iter()
        .find(|(label, _)| *label == direction)
        .map(|(_, vector)| *vector)
}
