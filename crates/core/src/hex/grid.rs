use crate::{
    hex::{Alignment, Axial, Cube, CubeIndexSet, Direction, DirectionTable},
    timed, GridConfig, HexError,
};
use log::debug;
use nalgebra::Point3;
use validator::Validate;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A collection of hexes that exist in a grid, along with the grid's
/// [Alignment]. The grid starts out empty and unaligned. Any query that
/// depends on orientation (pixel conversion, directions, neighbors, search)
/// will fail until an alignment is set, either directly with
/// [Self::set_alignment] or through [Self::generate_rectangular_grid].
///
/// Most queries here don't care whether the hexes involved actually exist in
/// the grid. E.g. [Self::neighbors] will happily return neighbors that fall
/// off the edge. Use [Self::contains] to filter results down to the hexes that
/// are present.
#[derive(Clone, Debug, Default)]
pub struct HexGrid {
    alignment: Option<Alignment>,
    hexes: CubeIndexSet,
}

impl HexGrid {
    /// Create a new grid with no hexes and no alignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty grid with the given alignment
    pub fn with_alignment(alignment: Alignment) -> Self {
        Self {
            alignment: Some(alignment),
            hexes: CubeIndexSet::default(),
        }
    }

    /// Build a rectangular grid from a config. Returns an error if the config
    /// is invalid, or if it asks for an alignment that can't be generated.
    pub fn from_config(config: &GridConfig) -> Result<Self, HexError> {
        config.validate()?;

        let mut grid = Self::new();
        grid.generate_rectangular_grid(
            config.alignment,
            config.width,
            config.length,
        )?;
        Ok(grid)
    }

    /// Get the alignment of this grid, or an error if it hasn't been set yet
    pub fn alignment(&self) -> Result<Alignment, HexError> {
        self.alignment.ok_or(HexError::UnconfiguredAlignment)
    }

    /// Set the alignment of this grid. Setting the same alignment again has no
    /// effect.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        if self.alignment != Some(alignment) {
            debug!(
                "Changing grid alignment from {:?} to {:?}",
                self.alignment, alignment
            );
            self.alignment = Some(alignment);
        }
    }

    /// All the hexes in this grid, in the order they were added
    pub fn hexes(&self) -> &CubeIndexSet {
        &self.hexes
    }

    /// Does the given hex exist in this grid?
    pub fn contains(&self, cube: Cube) -> bool {
        self.hexes.contains(&cube)
    }

    /// Get the number of hexes in the grid
    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Add a hex to the grid. Returns `true` if the hex is new, `false` if
    /// it was already in the grid.
    pub fn add_hex(&mut self, hex: impl Into<Cube>) -> bool {
        self.hexes.insert(hex.into())
    }

    /// Add a rectangular block of `width * length` hexes to the grid: one row
    /// per unit of `length`, one column per unit of `width`. Each row is
    /// shifted back in `q` by half its row index (rounded down), which keeps
    /// the block visually rectangular even though hex rows are offset from
    /// one another.
    ///
    /// Existing hexes are kept. On success, the grid's alignment is set to
    /// `alignment`. Only [Alignment::Horizontal] is supported; anything else
    /// returns an error and leaves the grid untouched.
    pub fn generate_rectangular_grid(
        &mut self,
        alignment: Alignment,
        width: u32,
        length: u32,
    ) -> Result<&CubeIndexSet, HexError> {
        if alignment != Alignment::Horizontal {
            return Err(HexError::UnsupportedAlignment(alignment));
        }

        self.set_alignment(alignment);
        let before = self.hexes.len();
        timed!("Rectangular grid generation", {
            self.hexes.reserve(width as usize * length as usize);
            for row in 0..length as i32 {
                let shift = row.div_euclid(2);
                for col in 0..width as i32 {
                    self.hexes.insert(Cube::new_qr(col - shift, row));
                }
            }
        });
        debug!(
            "Generated {}x{} rectangular grid ({} new hexes, {} total)",
            width,
            length,
            self.hexes.len() - before,
            self.hexes.len()
        );

        Ok(&self.hexes)
    }

    /// Convert a hex to the pixel position of its center. `hex_size` is the
    /// distance from a hex's center to any of its corners. The `z` component
    /// of the output is always 0.
    pub fn cube_to_pixel(
        &self,
        cube: Cube,
        hex_size: f64,
    ) -> Result<Point3<f64>, HexError> {
        let q = cube.q() as f64;
        let r = cube.r() as f64;
        let (x, y) = match self.alignment()? {
            Alignment::Horizontal => {
                (hex_size * SQRT_3 * (q + r / 2.0), hex_size * 1.5 * r)
            }
            Alignment::Vertical => {
                (hex_size * 1.5 * q, hex_size * SQRT_3 * (r + q / 2.0))
            }
        };
        Ok(Point3::new(x, y, 0.0))
    }

    /// Find the hex whose area contains the given pixel position. This is the
    /// inverse of [Self::cube_to_pixel]. The output is always a valid hex, but
    /// it **may not exist in this grid**; check it with [Self::contains].
    pub fn pixel_to_cube(
        &self,
        x: f64,
        y: f64,
        hex_size: f64,
    ) -> Result<Cube, HexError> {
        let (q, r) = match self.alignment()? {
            Alignment::Horizontal => (
                (SQRT_3 / 3.0 * x - y / 3.0) / hex_size,
                (2.0 / 3.0 * y) / hex_size,
            ),
            Alignment::Vertical => (
                (2.0 / 3.0 * x) / hex_size,
                (-x / 3.0 + SQRT_3 / 3.0 * y) / hex_size,
            ),
        };
        Ok(Cube::round_qr(q, r))
    }

    /// Get the unit vector that points to a neighbor in the given direction.
    /// Fails if the grid is unaligned, or if the direction doesn't name a
    /// side in this grid's alignment.
    pub fn cube_direction(
        &self,
        direction: Direction,
    ) -> Result<Cube, HexError> {
        self.alignment()?.neighbor_vector(direction)
    }

    /// Get the vector that points to a diagonal neighbor in the given
    /// direction. Fails if the grid is unaligned, or if the direction doesn't
    /// name a corner in this grid's alignment.
    pub fn cube_diagonal(
        &self,
        direction: Direction,
    ) -> Result<Cube, HexError> {
        self.alignment()?.diagonal_vector(direction)
    }

    /// Get the location of the hex adjacent to `cube` in a direction
    pub fn neighbor(
        &self,
        cube: Cube,
        direction: Direction,
    ) -> Result<Cube, HexError> {
        Ok(cube + self.cube_direction(direction)?)
    }

    /// Get all 6 hexes adjacent to `cube`, in clockwise order. See
    /// [Alignment::neighbor_table] for exactly where the order starts.
    pub fn neighbors(&self, cube: Cube) -> Result<[Cube; 6], HexError> {
        Ok(offsets(cube, self.neighbor_table()?))
    }

    /// Get the location of the hex across the corner of `cube` in a direction
    pub fn diagonal_neighbor(
        &self,
        cube: Cube,
        direction: Direction,
    ) -> Result<Cube, HexError> {
        Ok(cube + self.cube_diagonal(direction)?)
    }

    /// Get all 6 hexes diagonal to `cube`, in clockwise order
    pub fn diagonal_neighbors(
        &self,
        cube: Cube,
    ) -> Result<[Cube; 6], HexError> {
        Ok(offsets(cube, self.alignment()?.diagonal_table()))
    }

    /// Get every hex exactly `radius` steps from `center`, walking clockwise
    /// around the ring. Radius 0 gives just the center, otherwise the ring
    /// holds exactly `6 * radius` hexes.
    pub fn ring(
        &self,
        center: Cube,
        radius: u32,
    ) -> Result<Vec<Cube>, HexError> {
        let table = self.neighbor_table()?;
        if radius == 0 {
            return Ok(vec![center]);
        }

        // Start at the corner of the ring that's 120° counter-clockwise from
        // the first walking direction, then walk each side in turn. Each side
        // ends on the corner that starts the next one, so we emit a hex
        // *before* each step to avoid doubling up on corners.
        let steps = radius as i32;
        let mut ring = Vec::with_capacity(6 * radius as usize);
        let mut cube = center + table[4].1 * steps;
        for (_, vector) in table {
            for _ in 0..steps {
                ring.push(cube);
                cube += *vector;
            }
        }
        Ok(ring)
    }

    pub(super) fn neighbor_table(
        &self,
    ) -> Result<&'static DirectionTable, HexError> {
        Ok(self.alignment()?.neighbor_table())
    }
}

impl Extend<Cube> for HexGrid {
    fn extend<T: IntoIterator<Item = Cube>>(&mut self, iter: T) {
        self.hexes.extend(iter);
    }
}

impl Extend<Axial> for HexGrid {
    fn extend<T: IntoIterator<Item = Axial>>(&mut self, iter: T) {
        self.hexes.extend(iter.into_iter().map(Cube::from));
    }
}

fn offsets(cube: Cube, table: &DirectionTable) -> [Cube; 6] {
    (*table).map(|(_, vector)| cube + vector)
}
