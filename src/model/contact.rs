//! Flattened, per-contact view of a probe.

use serde::Serialize;

use super::shape::{ContactShape, ContactShapeParam};
use super::DISABLED_CHANNEL;

/// A single electrode site, assembled from a probe's parallel arrays.
///
/// Contacts are not stored; they are built on demand by
/// [`Probe::contact`](super::Probe::contact) and
/// [`ProbeGroup::contacts`](super::ProbeGroup::contacts).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contact {
    pub pos_x: f64,
    pub pos_y: f64,
    pub shape: ContactShape,
    pub shape_params: ContactShapeParam,
    /// Hardware channel, or `-1` when the contact is not recorded.
    pub device_id: i32,
    pub contact_id: String,
    pub shank_id: String,
    /// Position of this contact within its probe.
    pub index: usize,
}

impl Contact {
    /// Returns true if the contact is wired to a device channel.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.device_id != DISABLED_CHANNEL
    }
}
