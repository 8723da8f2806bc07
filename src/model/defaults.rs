//! Uniform per-contact arrays for building probes programmatically.
//!
//! Validation only relies on [`default_contact_ids`],
//! [`default_shank_ids`] and [`default_contact_plane_axes`]; the rest are
//! conveniences for callers assembling a [`RawProbe`](super::RawProbe).

use super::position::PlaneAxes;
use super::shape::{ContactShape, ContactShapeParam};
use crate::error::ProbeError;

/// `n` copies of `shape`.
pub fn default_contact_shapes(n: usize, shape: ContactShape) -> Vec<ContactShape> {
    vec![shape; n]
}

/// `n` copies of the identity axis pair.
pub fn default_contact_plane_axes(n: usize) -> Vec<PlaneAxes> {
    vec![PlaneAxes::IDENTITY; n]
}

/// `n` circle parameter sets with only `radius` set.
pub fn default_circle_params(n: usize, radius: f64) -> Vec<ContactShapeParam> {
    vec![ContactShapeParam::circle(radius); n]
}

/// `n` square parameter sets with only `width` set.
pub fn default_square_params(n: usize, width: f64) -> Vec<ContactShapeParam> {
    vec![ContactShapeParam::square(width); n]
}

/// `n` rectangle parameter sets with `width` and `height` set.
pub fn default_rect_params(n: usize, width: f64, height: f64) -> Vec<ContactShapeParam> {
    vec![ContactShapeParam::rect(width, height); n]
}

/// Sequential channels `[offset, offset + 1, ..., offset + n - 1]`.
///
/// # Errors
/// [`ProbeError::ChannelRangeOverflow`] if the last channel does not fit in
/// an `i32`.
pub fn default_device_channel_indices(n: usize, offset: i32) -> Result<Vec<i32>, ProbeError> {
    (0..n)
        .map(|i| {
            i32::try_from(i)
                .ok()
                .and_then(|i| offset.checked_add(i))
                .ok_or(ProbeError::ChannelRangeOverflow { offset, count: n })
        })
        .collect()
}

/// Stringified zero-based indices `["0", "1", ..., "n-1"]`.
pub fn default_contact_ids(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}

/// `n` empty shank labels.
pub fn default_shank_ids(n: usize) -> Vec<String> {
    vec![String::new(); n]
}
