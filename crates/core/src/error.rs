use crate::hex::{Alignment, Direction};
use thiserror::Error;
use validator::ValidationErrors;

/// Every way an operation in this crate can fail. Failing to find a path is
/// **not** an error; see [ShortestPaths::path_to](crate::ShortestPaths::path_to).
#[derive(Debug, Error)]
pub enum HexError {
    /// A cube coordinate was built from three components that don't sum to 0
    #[error(
        "invalid cube coordinate ({q}, {r}, {s}); \
        components must satisfy q + r + s == 0"
    )]
    InvalidCoordinate { q: i32, r: i32, s: i32 },

    /// A geometric or directional query was made on a grid that has no
    /// alignment yet
    #[error("hex grid alignment has not been set")]
    UnconfiguredAlignment,

    /// The direction label doesn't exist in the grid's alignment
    #[error(
        "{direction} is not a valid {kind} direction in a {alignment} hex grid"
    )]
    InvalidDirection {
        direction: Direction,
        alignment: Alignment,
        kind: DirectionKind,
    },

    /// Rectangular generation was requested for an alignment it can't build
    #[error("rectangular generation does not support {0} hex grids")]
    UnsupportedAlignment(Alignment),

    /// Text couldn't be parsed into a coordinate
    #[error("malformed coordinate {0:?}; expected `q,r` or `q,r,s`")]
    MalformedCoordinate(String),

    #[error("invalid grid config")]
    InvalidConfig(#[from] ValidationErrors),
}

/// Which direction table a lookup was made against
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DirectionKind {
    Neighbor,
    Diagonal,
}
