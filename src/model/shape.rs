//! Contact shapes and their geometry parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outline of a single contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactShape {
    Circle,
    Rect,
    Square,
}

impl fmt::Display for ContactShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContactShape::Circle => "circle",
            ContactShape::Rect => "rect",
            ContactShape::Square => "square",
        };
        f.pad(name)
    }
}

/// Size parameters of a contact.
///
/// Which fields matter depends on the paired [`ContactShape`]: `radius` for
/// circles, `width` for squares, `width` and `height` for rectangles. The
/// pairing is not enforced here; [`crate::lint`] reports mismatches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactShapeParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl ContactShapeParam {
    /// Parameters for a circular contact.
    pub fn circle(radius: f64) -> Self {
        Self {
            radius: Some(radius),
            ..Default::default()
        }
    }

    /// Parameters for a square contact.
    pub fn square(width: f64) -> Self {
        Self {
            width: Some(width),
            ..Default::default()
        }
    }

    /// Parameters for a rectangular contact.
    pub fn rect(width: f64, height: f64) -> Self {
        Self {
            radius: None,
            width: Some(width),
            height: Some(height),
        }
    }

    /// Returns true if the fields required by `shape` are all set.
    pub fn fits(&self, shape: ContactShape) -> bool {
        match shape {
            ContactShape::Circle => self.radius.is_some(),
            ContactShape::Square => self.width.is_some(),
            ContactShape::Rect => self.width.is_some() && self.height.is_some(),
        }
    }

    /// Iterates over the parameters that are set, with their names.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("radius", self.radius),
            ("width", self.width),
            ("height", self.height),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}
