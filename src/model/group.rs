//! The top-level probeinterface document.

use serde::{Deserialize, Deserializer, Serialize};

use super::contact::Contact;
use super::probe::{Probe, RawProbe};
use super::DISABLED_CHANNEL;
use crate::error::ProbeError;
use crate::validation;

/// A probeinterface document as it was read, before validation.
///
/// Missing or `null` top-level fields deserialize to empty values so that
/// validation can report them as [`ProbeError::MissingField`] instead of
/// failing inside the JSON parser.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProbeGroup {
    #[serde(default, deserialize_with = "null_as_default")]
    pub specification: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub probes: Vec<RawProbe>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A validated set of probes.
///
/// The only ways to obtain one are [`ProbeGroup::new`], [`validate`] and
/// deserialization (which validates), so every instance satisfies:
///
/// - `specification` is `"probeinterface"` and `version` is non-empty
/// - there is at least one probe
/// - every per-contact array of every probe has one entry per contact
/// - device channel indices other than `-1` are unique across the group
///
/// [`validate`]: crate::validation::validate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProbeGroup", into = "RawProbeGroup")]
pub struct ProbeGroup {
    pub(crate) specification: String,
    pub(crate) version: String,
    pub(crate) probes: Vec<Probe>,
}

impl ProbeGroup {
    /// Builds and validates a group, filling in defaulted per-contact arrays.
    ///
    /// # Errors
    /// Returns the first inconsistency found by the validation pipeline.
    pub fn new(
        specification: impl Into<String>,
        version: impl Into<String>,
        probes: Vec<RawProbe>,
    ) -> Result<Self, ProbeError> {
        validation::validate(RawProbeGroup {
            specification: specification.into(),
            version: version.into(),
            probes,
        })
    }

    /// Runs the whole validation pipeline again on a copy of this group.
    ///
    /// A valid group revalidates to an identical group.
    pub fn revalidate(&self) -> Result<Self, ProbeError> {
        validation::validate(RawProbeGroup::from(self.clone()))
    }

    pub fn specification(&self) -> &str {
        &self.specification
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// Returns the probe at `index`.
    pub fn probe(&self, index: usize) -> Result<&Probe, ProbeError> {
        self.probes.get(index).ok_or(ProbeError::IndexOutOfRange {
            what: "probe",
            index,
            len: self.probes.len(),
        })
    }

    /// Total number of contacts across all probes.
    pub fn number_of_contacts(&self) -> usize {
        self.probes.iter().map(Probe::number_of_contacts).sum()
    }

    /// Every contact id, in probe order then contact order.
    pub fn contact_ids(&self) -> Vec<&str> {
        self.probes
            .iter()
            .flat_map(|probe| probe.contact_ids.iter().map(String::as_str))
            .collect()
    }

    /// Every device channel index, in probe order then contact order.
    pub fn device_channel_indices(&self) -> Vec<i32> {
        self.probes
            .iter()
            .flat_map(|probe| probe.device_channel_indices.iter().copied())
            .collect()
    }

    /// Every contact of every probe, in probe order then contact order.
    pub fn contacts(&self) -> Vec<Contact> {
        self.probes.iter().flat_map(Probe::contacts).collect()
    }

    /// Number of contacts wired to a device channel.
    pub fn enabled_channel_count(&self) -> usize {
        self.probes.iter().map(Probe::enabled_channel_count).sum()
    }

    /// Replaces the device channel indices of one probe.
    ///
    /// The new indices are checked against every other probe before they are
    /// stored; on error the group is left untouched.
    ///
    /// # Errors
    /// - [`ProbeError::IndexOutOfRange`] if `probe_index` is not a probe
    /// - [`ProbeError::ArgumentLengthMismatch`] if `indices` does not have
    ///   one entry per contact
    /// - [`ProbeError::DuplicateChannel`] if a channel other than `-1` would
    ///   appear twice in the group
    pub fn update_device_channel_indices(
        &mut self,
        probe_index: usize,
        indices: Vec<i32>,
    ) -> Result<(), ProbeError> {
        let current = &self.probe(probe_index)?.device_channel_indices;
        if indices.len() != current.len() {
            return Err(ProbeError::ArgumentLengthMismatch {
                expected: current.len(),
                actual: indices.len(),
            });
        }

        let others = self
            .probes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != probe_index)
            .flat_map(|(_, probe)| probe.device_channel_indices.iter().copied());
        validation::ensure_unique_channels(others.chain(indices.iter().copied()))?;

        tracing::debug!(
            probe = probe_index,
            enabled = indices.iter().filter(|&&c| c != DISABLED_CHANNEL).count(),
            "updated device channel indices"
        );
        self.probes[probe_index].device_channel_indices = indices;
        Ok(())
    }

    /// Replaces the contact ids of one probe.
    ///
    /// Contact ids need not be unique but must be integers. The updated group
    /// goes through the whole validation pipeline before it is stored, so the
    /// group-wide one-based rule may renumber every probe's ids; on error the
    /// group is left untouched.
    ///
    /// # Errors
    /// - [`ProbeError::IndexOutOfRange`] if `probe_index` is not a probe
    /// - [`ProbeError::ArgumentLengthMismatch`] if `ids` does not have one
    ///   entry per contact
    /// - [`ProbeError::ParseContactId`] if an id is not an integer
    pub fn update_contact_ids(
        &mut self,
        probe_index: usize,
        ids: Vec<String>,
    ) -> Result<(), ProbeError> {
        let expected = self.probe(probe_index)?.number_of_contacts();
        if ids.len() != expected {
            return Err(ProbeError::ArgumentLengthMismatch {
                expected,
                actual: ids.len(),
            });
        }

        let mut candidate = RawProbeGroup::from(self.clone());
        candidate.probes[probe_index].contact_ids = Some(ids);
        *self = validation::validate(candidate)?;

        tracing::debug!(probe = probe_index, "updated contact ids");
        Ok(())
    }
}

impl TryFrom<RawProbeGroup> for ProbeGroup {
    type Error = ProbeError;

    fn try_from(raw: RawProbeGroup) -> Result<Self, Self::Error> {
        validation::validate(raw)
    }
}

impl From<ProbeGroup> for RawProbeGroup {
    fn from(group: ProbeGroup) -> Self {
        Self {
            specification: group.specification,
            version: group.version,
            probes: group.probes.into_iter().map(RawProbe::from).collect(),
        }
    }
}
