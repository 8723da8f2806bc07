//! Contact table export.
//!
//! Writes one CSV row per contact across the whole group. Probes are
//! identified by their position in the group.

use serde::Serialize;

use super::group::ProbeGroup;
use crate::error::ProbeError;

/// A single row in the contact table.
#[derive(Debug, Serialize)]
struct ContactRow<'a> {
    probe: usize,
    index: usize,
    contact_id: &'a str,
    shank_id: &'a str,
    device_channel: i32,
    x: f64,
    y: f64,
    shape: String,
    radius: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
}

/// Writes the contact table of a probe group to a CSV string.
pub fn to_contacts_csv_string(group: &ProbeGroup) -> Result<String, ProbeError> {
    let mut csv_writer = csv::Writer::from_writer(Vec::new());

    for (probe_index, probe) in group.probes().iter().enumerate() {
        for (index, position) in probe.contact_positions().iter().enumerate() {
            let params = probe.contact_shape_params()[index];
            let row = ContactRow {
                probe: probe_index,
                index,
                contact_id: &probe.contact_ids()[index],
                shank_id: &probe.shank_ids()[index],
                device_channel: probe.device_channel_indices()[index],
                x: position.x,
                y: position.y,
                shape: probe.contact_shapes()[index].to_string(),
                radius: params.radius,
                width: params.width,
                height: params.height,
            };
            csv_writer.serialize(&row).map_err(ProbeError::Csv)?;
        }
    }

    let bytes = csv_writer
        .into_inner()
        .map_err(|e| ProbeError::Io(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| {
        ProbeError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
