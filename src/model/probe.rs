//! Probe types: the wire-shaped [`RawProbe`] and the validated [`Probe`].

use serde::{Deserialize, Serialize};

use super::annotations::{ContactAnnotations, ProbeAnnotations};
use super::contact::Contact;
use super::position::{PlaneAxes, Position};
use super::shape::{ContactShape, ContactShapeParam};
use super::units::{NumDimensions, SiUnits};
use super::DISABLED_CHANNEL;
use crate::error::ProbeError;

/// One probe exactly as it appears in a probeinterface document.
///
/// Nothing here is checked: optional per-contact arrays may be missing and
/// lengths may disagree. Turn it into a [`Probe`] by validating the group
/// it belongs to (see [`ProbeGroup::new`](super::ProbeGroup::new)).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawProbe {
    pub ndim: NumDimensions,

    pub si_units: SiUnits,

    pub annotations: ProbeAnnotations,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_annotations: Option<ContactAnnotations>,

    pub contact_positions: Vec<Position>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_plane_axes: Option<Vec<PlaneAxes>>,

    pub contact_shapes: Vec<ContactShape>,

    pub contact_shape_params: Vec<ContactShapeParam>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe_planar_contour: Option<Vec<Position>>,

    /// Hardware channel per contact; `-1` marks a contact that is not recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_channel_indices: Option<Vec<i32>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_ids: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shank_ids: Option<Vec<String>>,
}

impl RawProbe {
    /// Creates a probe with the required per-contact arrays only.
    pub fn new(
        ndim: NumDimensions,
        si_units: SiUnits,
        annotations: ProbeAnnotations,
        contact_positions: Vec<Position>,
        contact_shapes: Vec<ContactShape>,
        contact_shape_params: Vec<ContactShapeParam>,
    ) -> Self {
        Self {
            ndim,
            si_units,
            annotations,
            contact_annotations: None,
            contact_positions,
            contact_plane_axes: None,
            contact_shapes,
            contact_shape_params,
            probe_planar_contour: None,
            device_channel_indices: None,
            contact_ids: None,
            shank_ids: None,
        }
    }

    /// Number of contacts, as defined by `contact_positions`.
    #[inline]
    pub fn number_of_contacts(&self) -> usize {
        self.contact_positions.len()
    }

    /// Sets the per-contact plane axes.
    pub fn with_plane_axes(mut self, axes: Vec<PlaneAxes>) -> Self {
        self.contact_plane_axes = Some(axes);
        self
    }

    /// Sets the device channel indices.
    pub fn with_device_channel_indices(mut self, indices: Vec<i32>) -> Self {
        self.device_channel_indices = Some(indices);
        self
    }

    /// Sets the contact ids.
    pub fn with_contact_ids<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.contact_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the shank ids.
    pub fn with_shank_ids<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.shank_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the planar contour.
    pub fn with_contour(mut self, contour: Vec<Position>) -> Self {
        self.probe_planar_contour = Some(contour);
        self
    }

    /// Sets the per-contact annotations.
    pub fn with_contact_annotations(mut self, annotations: ContactAnnotations) -> Self {
        self.contact_annotations = Some(annotations);
        self
    }
}

/// A validated probe.
///
/// Every per-contact array has exactly [`number_of_contacts`] entries.
/// Instances only come out of group validation, so the accessors never
/// have to re-check lengths.
///
/// [`number_of_contacts`]: Probe::number_of_contacts
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(into = "RawProbe")]
pub struct Probe {
    pub(crate) ndim: NumDimensions,
    pub(crate) si_units: SiUnits,
    pub(crate) annotations: ProbeAnnotations,
    pub(crate) contact_annotations: Option<ContactAnnotations>,
    pub(crate) contact_positions: Vec<Position>,
    pub(crate) contact_plane_axes: Vec<PlaneAxes>,
    pub(crate) contact_shapes: Vec<ContactShape>,
    pub(crate) contact_shape_params: Vec<ContactShapeParam>,
    pub(crate) probe_planar_contour: Option<Vec<Position>>,
    pub(crate) device_channel_indices: Vec<i32>,
    pub(crate) contact_ids: Vec<String>,
    pub(crate) shank_ids: Vec<String>,
}

impl Probe {
    #[inline]
    pub fn number_of_contacts(&self) -> usize {
        self.contact_positions.len()
    }

    pub fn ndim(&self) -> NumDimensions {
        self.ndim
    }

    pub fn si_units(&self) -> SiUnits {
        self.si_units
    }

    pub fn annotations(&self) -> &ProbeAnnotations {
        &self.annotations
    }

    pub fn contact_annotations(&self) -> Option<&ContactAnnotations> {
        self.contact_annotations.as_ref()
    }

    pub fn contact_positions(&self) -> &[Position] {
        &self.contact_positions
    }

    pub fn contact_plane_axes(&self) -> &[PlaneAxes] {
        &self.contact_plane_axes
    }

    pub fn contact_shapes(&self) -> &[ContactShape] {
        &self.contact_shapes
    }

    pub fn contact_shape_params(&self) -> &[ContactShapeParam] {
        &self.contact_shape_params
    }

    pub fn probe_planar_contour(&self) -> Option<&[Position]> {
        self.probe_planar_contour.as_deref()
    }

    pub fn device_channel_indices(&self) -> &[i32] {
        &self.device_channel_indices
    }

    pub fn contact_ids(&self) -> &[String] {
        &self.contact_ids
    }

    pub fn shank_ids(&self) -> &[String] {
        &self.shank_ids
    }

    /// Builds the [`Contact`] at `index`.
    ///
    /// # Errors
    /// Returns [`ProbeError::IndexOutOfRange`] if `index` is not below
    /// [`number_of_contacts`](Probe::number_of_contacts).
    pub fn contact(&self, index: usize) -> Result<Contact, ProbeError> {
        let len = self.number_of_contacts();
        if index >= len {
            return Err(ProbeError::IndexOutOfRange {
                what: "contact",
                index,
                len,
            });
        }
        Ok(self.contact_at(index))
    }

    /// Iterates over every contact in index order.
    pub fn contacts(&self) -> impl Iterator<Item = Contact> + '_ {
        (0..self.number_of_contacts()).map(move |index| self.contact_at(index))
    }

    /// Contacts that are wired to a device channel.
    pub fn enabled_contacts(&self) -> impl Iterator<Item = Contact> + '_ {
        self.contacts().filter(Contact::is_enabled)
    }

    /// Distinct shank labels in first-seen order.
    pub fn shank_ids_unique(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for shank in &self.shank_ids {
            if !seen.contains(&shank.as_str()) {
                seen.push(shank.as_str());
            }
        }
        seen
    }

    /// Contacts whose shank label equals `shank_id`.
    pub fn contacts_on_shank<'a>(&'a self, shank_id: &'a str) -> impl Iterator<Item = Contact> + 'a {
        self.contacts().filter(move |c| c.shank_id == shank_id)
    }

    /// Number of contacts whose channel is not `-1`.
    pub fn enabled_channel_count(&self) -> usize {
        self.device_channel_indices
            .iter()
            .filter(|&&channel| channel != DISABLED_CHANNEL)
            .count()
    }

    /// Axis-aligned `(min, max)` corners around every contact position.
    ///
    /// Returns `None` for a probe without contacts.
    pub fn bounding_box(&self) -> Option<(Position, Position)> {
        let first = *self.contact_positions.first()?;
        let corners = self
            .contact_positions
            .iter()
            .fold((first, first), |(min, max), p| {
                (
                    Position::new(min.x.min(p.x), min.y.min(p.y)),
                    Position::new(max.x.max(p.x), max.y.max(p.y)),
                )
            });
        Some(corners)
    }

    fn contact_at(&self, index: usize) -> Contact {
        let position = self.contact_positions[index];
        Contact {
            pos_x: position.x,
            pos_y: position.y,
            shape: self.contact_shapes[index],
            shape_params: self.contact_shape_params[index],
            device_id: self.device_channel_indices[index],
            contact_id: self.contact_ids[index].clone(),
            shank_id: self.shank_ids[index].clone(),
            index,
        }
    }
}

impl From<Probe> for RawProbe {
    fn from(probe: Probe) -> Self {
        Self {
            ndim: probe.ndim,
            si_units: probe.si_units,
            annotations: probe.annotations,
            contact_annotations: probe.contact_annotations,
            contact_positions: probe.contact_positions,
            contact_plane_axes: Some(probe.contact_plane_axes),
            contact_shapes: probe.contact_shapes,
            contact_shape_params: probe.contact_shape_params,
            probe_planar_contour: probe.probe_planar_contour,
            device_channel_indices: Some(probe.device_channel_indices),
            contact_ids: Some(probe.contact_ids),
            shank_ids: Some(probe.shank_ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{default_circle_params, default_contact_shapes, ProbeGroup};

    fn two_shank_probe() -> Probe {
        let raw = RawProbe::new(
            NumDimensions::Two,
            SiUnits::Um,
            ProbeAnnotations::new("tetrode-pair", "acme"),
            vec![
                Position::new(0.0, 0.0),
                Position::new(0.0, 20.0),
                Position::new(250.0, 0.0),
                Position::new(250.0, 20.0),
            ],
            default_contact_shapes(4, ContactShape::Circle),
            default_circle_params(4, 6.0),
        )
        .with_shank_ids(["a", "a", "b", "b"])
        .with_device_channel_indices(vec![0, -1, 2, 3]);

        let group = ProbeGroup::new("probeinterface", "0.2.21", vec![raw]).unwrap();
        group.probes()[0].clone()
    }

    #[test]
    fn test_contact_reads_parallel_arrays() {
        let probe = two_shank_probe();
        let contact = probe.contact(2).unwrap();

        assert_eq!(contact.pos_x, 250.0);
        assert_eq!(contact.pos_y, 0.0);
        assert_eq!(contact.shape, ContactShape::Circle);
        assert_eq!(contact.shape_params.radius, Some(6.0));
        assert_eq!(contact.device_id, 2);
        assert_eq!(contact.contact_id, "2");
        assert_eq!(contact.shank_id, "b");
        assert_eq!(contact.index, 2);
    }

    #[test]
    fn test_contact_out_of_range() {
        let probe = two_shank_probe();
        let err = probe.contact(4).unwrap_err();
        assert!(matches!(
            err,
            ProbeError::IndexOutOfRange {
                what: "contact",
                index: 4,
                len: 4
            }
        ));
    }

    #[test]
    fn test_shank_views() {
        let probe = two_shank_probe();
        assert_eq!(probe.shank_ids_unique(), vec!["a", "b"]);

        let on_b: Vec<usize> = probe.contacts_on_shank("b").map(|c| c.index).collect();
        assert_eq!(on_b, vec![2, 3]);
    }

    #[test]
    fn test_enabled_contacts_skip_disabled_channels() {
        let probe = two_shank_probe();
        assert_eq!(probe.enabled_channel_count(), 3);
        let enabled: Vec<usize> = probe.enabled_contacts().map(|c| c.index).collect();
        assert_eq!(enabled, vec![0, 2, 3]);
    }

    #[test]
    fn test_bounding_box() {
        let probe = two_shank_probe();
        let (min, max) = probe.bounding_box().unwrap();
        assert_eq!(min, Position::new(0.0, 0.0));
        assert_eq!(max, Position::new(250.0, 20.0));
    }

    #[test]
    fn test_into_raw_keeps_defaulted_arrays() {
        let raw = RawProbe::from(two_shank_probe());
        assert_eq!(raw.contact_ids.as_deref().map(|ids| ids.len()), Some(4));
        assert_eq!(raw.contact_plane_axes.map(|axes| axes.len()), Some(4));
        assert_eq!(raw.device_channel_indices, Some(vec![0, -1, 2, 3]));
    }
}
