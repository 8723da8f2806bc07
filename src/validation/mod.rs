//! Validation and normalization of probeinterface documents.
//!
//! [`validate`] is the single transition from a [`RawProbeGroup`] to a
//! [`ProbeGroup`]. It runs these steps in order and stops at the first
//! failure:
//!
//! 1. Presence of `specification`, `version` and at least one probe
//! 2. Length consistency of every per-contact array
//! 3. Default contact ids for probes without them
//! 4. Zero-index normalization of contact ids
//! 5. Default (empty) shank ids
//! 6. Default device channel indices derived from contact ids
//! 7. Group-wide uniqueness of device channel indices (ignoring `-1`)
//!
//! The raw group is consumed, so a failure never leaves a half-defaulted
//! group behind.

use std::collections::HashSet;
use std::num::ParseIntError;

use tracing::{debug, trace};

use crate::error::ProbeError;
use crate::model::{
    default_contact_ids, default_contact_plane_axes, default_shank_ids, Probe, ProbeGroup,
    RawProbe, RawProbeGroup, DISABLED_CHANNEL, SPECIFICATION,
};

/// Validates a raw document and fills in every defaulted per-contact array.
///
/// # Errors
/// - [`ProbeError::MissingField`] for an empty specification, version or
///   probe list
/// - [`ProbeError::UnknownSpecification`] if the document is not a
///   probeinterface document
/// - [`ProbeError::LengthMismatch`] if a per-contact array has the wrong length
/// - [`ProbeError::ParseContactId`] if a contact id is not an integer
/// - [`ProbeError::DuplicateChannel`] if a device channel is used twice
pub fn validate(raw: RawProbeGroup) -> Result<ProbeGroup, ProbeError> {
    let RawProbeGroup {
        specification,
        version,
        mut probes,
    } = raw;

    check_presence(&specification, &version, &probes)?;
    validate_variable_length(&probes)?;

    let mut contact_ids = default_contact_ids_if_missing(&mut probes);
    force_contact_ids_to_zero_indexed(&mut contact_ids)?;
    let shank_ids = empty_shank_ids_if_missing(&mut probes);
    let device_channel_indices = default_device_channel_indices_if_missing(&mut probes, &contact_ids);

    let probes: Vec<Probe> = probes
        .into_iter()
        .zip(contact_ids)
        .zip(shank_ids)
        .zip(device_channel_indices)
        .map(|(((raw, ids), shanks), channels)| assemble(raw, ids, shanks, channels))
        .collect();

    ensure_unique_channels(
        probes
            .iter()
            .flat_map(|probe| probe.device_channel_indices.iter().copied()),
    )?;

    Ok(ProbeGroup {
        specification,
        version,
        probes,
    })
}

/// Parses a contact id as an integer, ignoring surrounding whitespace.
pub fn parse_contact_id(id: &str) -> Result<i32, ParseIntError> {
    id.trim().parse()
}

/// Fuzz-only entrypoint for contact id normalization and channel derivation.
///
/// Each line of `input` is one contact id of a single probe.
#[cfg(feature = "fuzzing")]
pub fn fuzz_normalize_contact_ids(input: &str) -> Result<(), ProbeError> {
    let mut contact_ids = vec![input.lines().map(str::to_owned).collect::<Vec<_>>()];
    force_contact_ids_to_zero_indexed(&mut contact_ids)?;
    let _ = channels_from_contact_ids(&contact_ids[0]);
    Ok(())
}

/// Fails on the first channel other than `-1` that appears twice.
pub fn ensure_unique_channels(channels: impl IntoIterator<Item = i32>) -> Result<(), ProbeError> {
    let mut seen = HashSet::new();
    for channel in channels {
        if channel != DISABLED_CHANNEL && !seen.insert(channel) {
            return Err(ProbeError::DuplicateChannel { channel });
        }
    }
    Ok(())
}

fn check_presence(specification: &str, version: &str, probes: &[RawProbe]) -> Result<(), ProbeError> {
    if specification.is_empty() {
        return Err(ProbeError::MissingField {
            field: "specification",
            message: "specification is empty",
        });
    }
    if version.is_empty() {
        return Err(ProbeError::MissingField {
            field: "version",
            message: "version is empty",
        });
    }
    if probes.is_empty() {
        return Err(ProbeError::MissingField {
            field: "probes",
            message: "no probes listed",
        });
    }
    if specification != SPECIFICATION {
        return Err(ProbeError::UnknownSpecification {
            found: specification.to_string(),
        });
    }
    Ok(())
}

fn validate_variable_length(probes: &[RawProbe]) -> Result<(), ProbeError> {
    for (index, probe) in probes.iter().enumerate() {
        let expected = probe.number_of_contacts();
        trace!(probe = index, contacts = expected, "checking per-contact array lengths");

        let lengths = [
            ("contact_plane_axes", probe.contact_plane_axes.as_ref().map(Vec::len)),
            ("contact_shape_params", Some(probe.contact_shape_params.len())),
            ("contact_shapes", Some(probe.contact_shapes.len())),
            ("contact_ids", probe.contact_ids.as_ref().map(Vec::len)),
            ("shank_ids", probe.shank_ids.as_ref().map(Vec::len)),
            (
                "device_channel_indices",
                probe.device_channel_indices.as_ref().map(Vec::len),
            ),
        ];

        for (field, actual) in lengths {
            match actual {
                Some(actual) if actual != expected => {
                    return Err(ProbeError::LengthMismatch {
                        probe: index,
                        field,
                        expected,
                        actual,
                    });
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn default_contact_ids_if_missing(probes: &mut [RawProbe]) -> Vec<Vec<String>> {
    probes
        .iter_mut()
        .enumerate()
        .map(|(index, probe)| {
            probe.contact_ids.take().unwrap_or_else(|| {
                debug!(probe = index, "contact ids missing, using sequential defaults");
                default_contact_ids(probe.number_of_contacts())
            })
        })
        .collect()
}

/// Shifts every contact id down by one when the group is numbered `1..=N`.
///
/// The condition is global: the smallest id across all probes is 1, the
/// largest equals the total contact count, and no id repeats.
fn force_contact_ids_to_zero_indexed(contact_ids: &mut [Vec<String>]) -> Result<(), ProbeError> {
    let total: usize = contact_ids.iter().map(Vec::len).sum();
    let mut parsed = Vec::with_capacity(total);

    for (probe, ids) in contact_ids.iter().enumerate() {
        for (contact, id) in ids.iter().enumerate() {
            let value = parse_contact_id(id).map_err(|source| ProbeError::ParseContactId {
                probe,
                contact,
                id: id.clone(),
                source,
            })?;
            parsed.push(value);
        }
    }

    let (Some(&min), Some(&max)) = (parsed.iter().min(), parsed.iter().max()) else {
        return Ok(());
    };
    let max_matches_total = usize::try_from(max).is_ok_and(|max| max == total);
    let distinct = parsed.iter().collect::<HashSet<_>>().len() == parsed.len();

    if min == 1 && max_matches_total && distinct {
        debug!(contacts = total, "contact ids are one-based, shifting to zero-based");
        let mut values = parsed.into_iter();
        for id in contact_ids.iter_mut().flatten() {
            if let Some(value) = values.next() {
                *id = (value - 1).to_string();
            }
        }
    }
    Ok(())
}

fn empty_shank_ids_if_missing(probes: &mut [RawProbe]) -> Vec<Vec<String>> {
    probes
        .iter_mut()
        .map(|probe| {
            probe
                .shank_ids
                .take()
                .unwrap_or_else(|| default_shank_ids(probe.number_of_contacts()))
        })
        .collect()
}

fn default_device_channel_indices_if_missing(
    probes: &mut [RawProbe],
    contact_ids: &[Vec<String>],
) -> Vec<Vec<i32>> {
    probes
        .iter_mut()
        .zip(contact_ids)
        .enumerate()
        .map(|(index, (probe, ids))| {
            probe.device_channel_indices.take().unwrap_or_else(|| {
                debug!(probe = index, "device channel indices missing, deriving from contact ids");
                channels_from_contact_ids(ids)
            })
        })
        .collect()
}

/// Numeric contact ids become channels; anything else maps to channel 0.
fn channels_from_contact_ids(ids: &[String]) -> Vec<i32> {
    ids.iter()
        .map(|id| parse_contact_id(id).unwrap_or_default())
        .collect()
}

fn assemble(
    raw: RawProbe,
    contact_ids: Vec<String>,
    shank_ids: Vec<String>,
    device_channel_indices: Vec<i32>,
) -> Probe {
    let n = raw.number_of_contacts();
    Probe {
        ndim: raw.ndim,
        si_units: raw.si_units,
        annotations: raw.annotations,
        contact_annotations: raw.contact_annotations,
        contact_plane_axes: raw
            .contact_plane_axes
            .unwrap_or_else(|| default_contact_plane_axes(n)),
        contact_positions: raw.contact_positions,
        contact_shapes: raw.contact_shapes,
        contact_shape_params: raw.contact_shape_params,
        probe_planar_contour: raw.probe_planar_contour,
        device_channel_indices,
        contact_ids,
        shank_ids,
    }
}
