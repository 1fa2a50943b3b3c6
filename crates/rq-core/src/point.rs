//! Planar coordinate type and angular utilities.
//!
//! Network providers hand us projected metre coordinates (x east, y north),
//! not lat/lon, so plain Euclidean geometry applies.  `f64` keeps the angle
//! math exact enough that equal-angle ties never appear from rounding alone.

/// A projected planar coordinate in metres.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in metres.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Exit angle of the vector `self → other` in degrees, in (−180, 180].
    ///
    /// 0° points east (+x), 90° north (+y), 180° west, −90° south — the
    /// standard `atan2(dy, dx)` convention.
    #[inline]
    pub fn bearing_deg(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
