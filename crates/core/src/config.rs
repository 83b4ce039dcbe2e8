use crate::hex::Alignment;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines a rectangular hex grid. Two grids built from the
/// same config will always be identical. See
/// [HexGrid::from_config](crate::HexGrid::from_config).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Orientation of the grid. Rectangular generation only supports
    /// horizontal grids at the moment.
    pub alignment: Alignment,

    /// Number of hexes in each row
    #[validate(range(min = 1, max = 10000))]
    pub width: u32,

    /// Number of rows
    #[validate(range(min = 1, max = 10000))]
    pub length: u32,

    /// Distance from the center of a hex to any of its corners, in pixels.
    /// This isn't used to build the grid, but it's needed any time a hex is
    /// converted to or from pixel space.
    #[validate(range(min = 0.001))]
    pub hex_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            alignment: Alignment::Horizontal,
            width: 10,
            length: 10,
            hex_size: 1.0,
        }
    }
}
