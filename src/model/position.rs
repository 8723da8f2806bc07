//! Planar positions and per-contact orientation axes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point in the probe plane, in the probe's [`SiUnits`](super::SiUnits).
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Position {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x, self.y].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Position::new(x, y))
    }
}

/// Orientation of a single contact: two axis vectors spanning its plane.
///
/// Serialized as `[[ax, ay], [bx, by]]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaneAxes(pub [f64; 2], pub [f64; 2]);

impl PlaneAxes {
    /// The unrotated axis pair `{(1, 0), (0, 1)}`.
    pub const IDENTITY: PlaneAxes = PlaneAxes([1.0, 0.0], [0.0, 1.0]);
}

impl Default for PlaneAxes {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_finite() {
        assert!(Position::new(10.0, 20.0).is_finite());
        assert!(!Position::new(f64::NAN, 20.0).is_finite());
        assert!(!Position::new(10.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_position_wire_shape() {
        let pos: Position = serde_json::from_str("[1.5, -2.0]").unwrap();
        assert_eq!(pos, Position::new(1.5, -2.0));
        assert_eq!(serde_json::to_string(&pos).unwrap(), "[1.5,-2.0]");
        assert!(serde_json::from_str::<Position>("[1.0, 2.0, 3.0]").is_err());
    }

    #[test]
    fn test_plane_axes_wire_shape() {
        let axes: PlaneAxes = serde_json::from_str("[[1.0, 0.0], [0.0, 1.0]]").unwrap();
        assert_eq!(axes, PlaneAxes::IDENTITY);
        assert_eq!(
            serde_json::to_string(&PlaneAxes::default()).unwrap(),
            "[[1.0,0.0],[0.0,1.0]]"
        );
    }
}
