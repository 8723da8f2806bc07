//! Typed model of the probeinterface exchange format.
//!
//! A probeinterface document describes one or more recording probes: where
//! each electrode contact sits, its shape and size, which shank it belongs
//! to, and which hardware channel records it.
//!
//! # Raw and validated types
//!
//! [`RawProbeGroup`] and [`RawProbe`] mirror the JSON document field for
//! field. Optional per-contact arrays are `Option`s and nothing is checked.
//!
//! [`ProbeGroup`] and [`Probe`] are what validation produces. Their fields
//! are private, every per-contact array is present and has one entry per
//! contact, and device channels are unique across the group. Deserializing
//! a [`ProbeGroup`] runs validation.
//!
//! # Example
//!
//! ```
//! use probekit::model::{
//!     default_circle_params, default_contact_shapes, ContactShape, NumDimensions, Position,
//!     ProbeAnnotations, ProbeGroup, RawProbe, SiUnits,
//! };
//!
//! let probe = RawProbe::new(
//!     NumDimensions::Two,
//!     SiUnits::Um,
//!     ProbeAnnotations::new("linear-4", "acme"),
//!     (0..4).map(|i| Position::new(0.0, 20.0 * i as f64)).collect(),
//!     default_contact_shapes(4, ContactShape::Circle),
//!     default_circle_params(4, 6.0),
//! );
//!
//! let group = ProbeGroup::new("probeinterface", "0.2.21", vec![probe]).unwrap();
//! assert_eq!(group.contact_ids(), vec!["0", "1", "2", "3"]);
//! assert_eq!(group.device_channel_indices(), vec![0, 1, 2, 3]);
//! ```

mod annotations;
mod contact;
mod defaults;
mod group;
pub mod io_csv;
pub mod io_json;
mod position;
mod probe;
mod shape;
mod units;

pub use annotations::{ContactAnnotations, ProbeAnnotations};
pub use contact::Contact;
pub use defaults::{
    default_circle_params, default_contact_ids, default_contact_plane_axes,
    default_contact_shapes, default_device_channel_indices, default_rect_params,
    default_shank_ids, default_square_params,
};
pub use group::{ProbeGroup, RawProbeGroup};
pub use position::{PlaneAxes, Position};
pub use probe::{Probe, RawProbe};
pub use shape::{ContactShape, ContactShapeParam};
pub use units::{NumDimensions, SiUnits};

/// Value of the `specification` field of every probeinterface document.
pub const SPECIFICATION: &str = "probeinterface";

/// Device channel index of a contact that is not recorded.
pub const DISABLED_CHANNEL: i32 = -1;
