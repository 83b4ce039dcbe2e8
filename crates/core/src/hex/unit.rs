//! This sub-module contains the basic coordinate types of the hex grid. See
//! the parent module documentation for more info on the coordinate system.

use crate::{util::hex_count, HexError};
use derive_more::{Add, AddAssign, Display, Mul, MulAssign, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{cmp, str::FromStr};

/// A point in the hex grid that refers to a whole hex (via its center point).
///
/// ## Implementation
///
/// Since `q + r + s = 0` for every hex, this struct only stores `q` and `r`
/// and derives `s` as needed. This also makes equality and hashing depend
/// solely on `(q, r)`, which is all that's needed to identify a hex.
///
/// Arithmetic is componentwise. Adding, subtracting or scaling valid cubes
/// always produces another valid cube, so none of the operators can fail.
/// Like any integer math, they can overflow if `q`, `r` or `s` get near the
/// limits of `i32`. [Cube::new] checks for that; the `const` constructors
/// don't.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Mul,
    AddAssign,
    SubAssign,
    MulAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s()")]
pub struct Cube {
    q: i32,
    r: i32,
}

impl Cube {
    pub const ORIGIN: Self = Self::new_qr(0, 0);

    /// Construct a new cube with the given q and r. Since q+r+s=0 for all
    /// cubes, we can derive s from q & r.
    pub const fn new_qr(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct a new cube with the given q and s. Since q+r+s=0 for all
    /// cubes, we can derive r from q & s.
    pub const fn new_qs(q: i32, s: i32) -> Self {
        Self::new_qr(q, -q - s)
    }

    /// Construct a new cube with the given r and s. Since q+r+s=0 for all
    /// cubes, we can derive q from r & s.
    pub const fn new_rs(r: i32, s: i32) -> Self {
        Self::new_qr(-r - s, r)
    }

    /// Construct a new cube from all three components. Returns an error if
    /// the components don't fall on the plane `q + r + s = 0`. That always
    /// indicates a bug on the caller's side, so it's never corrected.
    ///
    /// All three components must fit in an `i32`, including `s` when it's
    /// derived as `-(q + r)`. Components that overflow are rejected the same
    /// way as ones that are off the plane.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        match q.checked_add(r).and_then(|sum| sum.checked_add(s)) {
            Some(0) => Ok(Self::new_qr(q, r)),
            _ => Err(HexError::InvalidCoordinate { q, r, s }),
        }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        -(self.q + self.r)
    }

    pub fn to_axial(self) -> Axial {
        Axial::new(self.q, self.r)
    }

    /// Snap fractional cube coordinates, e.g. from interpolation or pixel
    /// conversion, to the nearest hex.
    ///
    /// Each component is rounded on its own, which can break the `q + r + s =
    /// 0` invariant. To restore it, the component that moved the furthest
    /// while rounding is thrown out and rebuilt from the other two. `q` is
    /// only rebuilt if its error is strictly the largest, then `r` if its
    /// error strictly beats `s`'s, otherwise `s`. Changing that order changes
    /// which hex a point on a boundary snaps to.
    ///
    /// Halfway values round to the nearest even integer.
    pub fn round(q: f64, r: f64, s: f64) -> Self {
        let mut rq = q.round_ties_even();
        let mut rr = r.round_ties_even();
        let rs = s.round_ties_even();

        let dq = (rq - q).abs();
        let dr = (rr - r).abs();
        let ds = (rs - s).abs();

        if dq > dr && dq > ds {
            rq = -rr - rs;
        } else if dr > ds {
            rr = -rq - rs;
        }
        // Otherwise s is the one that gets thrown out, and we never store it
        Self::new_qr(rq as i32, rr as i32)
    }

    /// Same as [Self::round], with `s` derived from `q` and `r`
    pub fn round_qr(q: f64, r: f64) -> Self {
        Self::round(q, r, -q - r)
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they're adjacent, 2 if there is 1 hex between them, etc.
    pub fn distance_to(self, other: Cube) -> usize {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let diff = self - other;
        cmp::max(diff.q.abs(), cmp::max(diff.r.abs(), diff.s().abs())) as usize
    }

    /// Get every hex on a straight line from this hex to `other`, including
    /// both endpoints. The line always holds exactly `distance + 1` hexes, in
    /// order from `self` to `other`.
    pub fn line_to(self, other: Cube) -> Vec<Cube> {
        if self == other {
            return vec![self];
        }

        let distance = self.distance_to(other);
        (0..=distance)
            .map(|i| {
                let t = i as f64 / distance as f64;
                Self::round(
                    lerp(self.q, other.q, t),
                    lerp(self.r, other.r, t),
                    lerp(self.s(), other.s(), t),
                )
            })
            .collect()
    }

    /// Get every hex within `radius` steps of this one, i.e. a filled
    /// hexagon. The output holds exactly `3r² + 3r + 1` hexes. No hexes are
    /// filtered out, so if you only want the ones that exist in a grid, check
    /// each one against [HexGrid::contains](crate::HexGrid::contains).
    pub fn range(self, radius: u32) -> Vec<Cube> {
        let mut hexes = Vec::with_capacity(hex_count(radius));
        let n = radius as i32;
        for dq in -n..=n {
            // If we just do [-n,n] for r as well, then we end up with a
            // diamond pattern instead of a hexagon
            // https://www.redblobgames.com/grids/hexagons/#range
            let dr_min = cmp::max(-n, -dq - n);
            let dr_max = cmp::min(n, -dq + n);
            for dr in dr_min..=dr_max {
                hexes.push(self + Cube::new_qr(dq, dr));
            }
        }
        hexes
    }
}

/// Linear interpolation between two integer components
fn lerp(a: i32, b: i32, t: f64) -> f64 {
    a as f64 + (b - a) as f64 * t
}

impl From<Axial> for Cube {
    fn from(axial: Axial) -> Self {
        Self::new_qr(axial.q, axial.r)
    }
}

/// Parse a cube from either `q,r` or `q,r,s`, optionally wrapped in
/// parentheses. Whitespace around components is ignored. Three components are
/// validated the same way as [Cube::new].
impl FromStr for Cube {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || HexError::MalformedCoordinate(s.to_owned());
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let components = inner
            .split(',')
            .map(|component| component.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;

        match components.as_slice() {
            &[q, r] => Ok(Self::new_qr(q, r)),
            &[q, r, s] => Self::new(q, r, s),
            _ => Err(malformed()),
        }
    }
}

/// The two-axis form of [Cube]. `s` is left out entirely, since it can
/// always be derived. Converting to and from [Cube] never fails.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.q", "self.r")]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn to_cube(self) -> Cube {
        self.into()
    }
}

impl From<Cube> for Axial {
    fn from(cube: Cube) -> Self {
        cube.to_axial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_new_validates() {
        assert_eq!(Cube::new(1, -1, 0).unwrap(), Cube::new_qr(1, -1));
        assert_eq!(Cube::new(0, 0, 0).unwrap(), Cube::ORIGIN);
        assert!(matches!(
            Cube::new(1, 1, 1),
            Err(HexError::InvalidCoordinate { q: 1, r: 1, s: 1 })
        ));
    }

    #[test]
    fn test_new_rejects_overflow() {
        // On paper these sum to zero, but q + r doesn't fit in an i32
        assert!(matches!(
            Cube::new(i32::MAX, 1, i32::MIN),
            Err(HexError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            "2147483647,1,-2147483648".parse::<Cube>(),
            Err(HexError::InvalidCoordinate { .. })
        ));
        // Extreme, but every component is representable
        let cube = Cube::new(i32::MAX, i32::MIN + 1, 0).unwrap();
        assert_eq!(cube.s(), 0);
        let cube = Cube::new(i32::MIN + 1, 0, i32::MAX).unwrap();
        assert_eq!(cube.s(), i32::MAX);
    }

    #[test]
    fn test_derived_components() {
        let cube = Cube::new_qr(3, -5);
        assert_eq!(cube.s(), 2);
        assert_eq!(Cube::new_qs(3, 2), cube);
        assert_eq!(Cube::new_rs(-5, 2), cube);
        assert_eq!(cube.q() + cube.r() + cube.s(), 0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Cube::new_qr(1, -2);
        let b = Cube::new_qr(-3, 1);
        assert_eq!(a + b, Cube::new_qr(-2, -1));
        assert_eq!(a - b, Cube::new_qr(4, -3));
        assert_eq!(a * 3, Cube::new_qr(3, -6));
        assert_eq!((a * 3).s(), 3);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn test_axial_conversion() {
        let cube = Cube::new_qr(4, -7);
        let axial = cube.to_axial();
        assert_eq!(axial, Axial::new(4, -7));
        assert_eq!(axial.to_cube(), cube);
        assert_eq!(Cube::from(Axial::new(-2, 5)).s(), -3);
        assert_eq!(
            Axial::new(1, 2) + Axial::new(3, -4) - Axial::new(1, 1),
            Axial::new(3, -3)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Cube::new_qr(1, -3).to_string(), "(1, -3, 2)");
        assert_eq!(Axial::new(1, -3).to_string(), "(1, -3)");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1,-2".parse::<Cube>().unwrap(), Cube::new_qr(1, -2));
        assert_eq!(
            " (1, -2, 1) ".parse::<Cube>().unwrap(),
            Cube::new_qr(1, -2)
        );
        assert!(matches!(
            "1,2,3".parse::<Cube>(),
            Err(HexError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            "1".parse::<Cube>(),
            Err(HexError::MalformedCoordinate(_))
        ));
        assert!(matches!(
            "a,b".parse::<Cube>(),
            Err(HexError::MalformedCoordinate(_))
        ));
    }

    #[test]
    fn test_serialize() {
        assert_tokens(
            &Cube::new_qr(1, -1),
            &[
                Token::Struct {
                    name: "Cube",
                    len: 2,
                },
                Token::Str("q"),
                Token::I32(1),
                Token::Str("r"),
                Token::I32(-1),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_round() {
        // Already-integer input is unchanged
        assert_eq!(Cube::round(2.0, -3.0, 1.0), Cube::new_qr(2, -3));
        // q has the largest error, so it gets rebuilt from r and s
        assert_eq!(Cube::round(0.55, 0.4, -0.95), Cube::new_qr(1, 0));
        // q and r tie, so q is kept and r gets rebuilt
        assert_eq!(Cube::round(0.45, 0.45, -0.9), Cube::new_qr(0, 1));
        // s has the largest error
        assert_eq!(Cube::round(0.2, 0.3, -0.5), Cube::ORIGIN);
        // Exact halves round to even
        assert_eq!(Cube::round(0.5, 0.5, -1.0), Cube::new_qr(0, 1));
        assert_eq!(Cube::round_qr(1.6, -0.1), Cube::new_qr(2, 0));
    }

    #[test]
    fn test_distance_to() {
        let p0 = Cube::ORIGIN;
        let p1 = Cube::new_qr(-1, 1);
        let p2 = Cube::new_qr(2, -1);
        let p3 = Cube::new_qr(2, -3);

        assert_eq!(p0.distance_to(p0), 0);
        assert_eq!(p3.distance_to(p3), 0);

        assert_eq!(p0.distance_to(p1), 1);
        assert_eq!(p0.distance_to(p2), 2);
        assert_eq!(p0.distance_to(p3), 3);

        assert_eq!(p1.distance_to(p2), 3);
        assert_eq!(p1.distance_to(p3), 4);
        assert_eq!(p2.distance_to(p3), 2);
        assert_eq!(p3.distance_to(p2), 2);
    }

    #[test]
    fn test_line_to() {
        let a = Cube::new_qr(1, 1);
        assert_eq!(a.line_to(a), vec![a]);

        assert_eq!(
            Cube::ORIGIN.line_to(Cube::new_qr(2, 0)),
            vec![Cube::ORIGIN, Cube::new_qr(1, 0), Cube::new_qr(2, 0)]
        );

        let b = Cube::new_qr(-4, 7);
        let line = a.line_to(b);
        assert_eq!(line.len(), a.distance_to(b) + 1);
        assert_eq!(line.first(), Some(&a));
        assert_eq!(line.last(), Some(&b));
        // Each step moves exactly one hex
        for pair in line.windows(2) {
            assert_eq!(pair[0].distance_to(pair[1]), 1);
        }
    }

    #[test]
    fn test_range() {
        let center = Cube::new_qr(3, -1);
        assert_eq!(center.range(0), vec![center]);

        for radius in 0..5 {
            let range = center.range(radius);
            assert_eq!(range.len(), hex_count(radius));
            assert!(range
                .iter()
                .all(|cube| cube.distance_to(center) <= radius as usize));
        }

        // Ordered by q, then r
        assert_eq!(
            Cube::ORIGIN.range(1),
            vec![
                Cube::new_qr(-1, 0),
                Cube::new_qr(-1, 1),
                Cube::new_qr(0, -1),
                Cube::ORIGIN,
                Cube::new_qr(0, 1),
                Cube::new_qr(1, -1),
                Cube::new_qr(1, 0),
            ]
        );
    }
}
