//! JSON reading and writing of probeinterface documents.
//!
//! The readers that return a [`ProbeGroup`] parse into a [`RawProbeGroup`]
//! and then validate it, so malformed JSON is reported as
//! [`ProbeError::Json`] while an inconsistent document keeps its specific
//! error kind. Use [`raw_from_json_str`] to inspect a document without
//! validating it.

use std::io::Read;

use super::group::{ProbeGroup, RawProbeGroup};
use crate::error::ProbeError;

/// Reads and validates a probe group from a JSON string.
pub fn from_json_str(json: &str) -> Result<ProbeGroup, ProbeError> {
    ProbeGroup::try_from(raw_from_json_str(json)?)
}

/// Reads and validates a probe group from a JSON byte slice.
///
/// Useful for fuzzing and processing raw bytes without UTF-8 validation overhead.
pub fn from_json_slice(bytes: &[u8]) -> Result<ProbeGroup, ProbeError> {
    let raw: RawProbeGroup = serde_json::from_slice(bytes).map_err(ProbeError::Json)?;
    ProbeGroup::try_from(raw)
}

/// Reads and validates a probe group from any reader.
pub fn from_json_reader<R: Read>(reader: R) -> Result<ProbeGroup, ProbeError> {
    let raw: RawProbeGroup = serde_json::from_reader(reader).map_err(ProbeError::Json)?;
    ProbeGroup::try_from(raw)
}

/// Reads a document without validating it.
pub fn raw_from_json_str(json: &str) -> Result<RawProbeGroup, ProbeError> {
    serde_json::from_str(json).map_err(ProbeError::Json)
}

/// Writes a probe group as pretty-printed JSON, defaulted arrays included.
pub fn to_json_string(group: &ProbeGroup) -> Result<String, ProbeError> {
    serde_json::to_string_pretty(group).map_err(ProbeError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "specification": "probeinterface",
        "version": "0.2.21",
        "probes": [{
            "ndim": 2,
            "si_units": "um",
            "annotations": {"name": "minimal", "manufacturer": "acme"},
            "contact_positions": [[0.0, 0.0], [0.0, 25.0]],
            "contact_shapes": ["square", "square"],
            "contact_shape_params": [{"width": 12.0}, {"width": 12.0}]
        }]
    }"#;

    #[test]
    fn test_parse_validates_and_defaults() {
        let group = from_json_str(MINIMAL).expect("parse minimal document");
        assert_eq!(group.contact_ids(), vec!["0", "1"]);
        assert_eq!(group.probes()[0].shank_ids(), ["", ""]);
    }

    #[test]
    fn test_written_json_contains_defaults() {
        let group = from_json_str(MINIMAL).unwrap();
        let json = to_json_string(&group).unwrap();

        assert!(json.contains("\"device_channel_indices\""));
        assert!(json.contains("\"contact_ids\""));
        assert!(json.contains("\"shank_ids\""));
        assert!(json.contains("\"contact_plane_axes\""));
        assert!(json.contains("\"ndim\": \"2\""));
    }

    #[test]
    fn test_validation_error_keeps_its_kind() {
        let broken = MINIMAL.replace("\"square\", \"square\"", "\"square\"");
        for err in [
            from_json_str(&broken).unwrap_err(),
            from_json_slice(broken.as_bytes()).unwrap_err(),
            from_json_reader(broken.as_bytes()).unwrap_err(),
        ] {
            assert!(
                matches!(
                    err,
                    ProbeError::LengthMismatch {
                        probe: 0,
                        field: "contact_shapes",
                        expected: 2,
                        actual: 1
                    }
                ),
                "{err:?}"
            );
        }
    }

    #[test]
    fn test_missing_probes_is_missing_field() {
        let err = from_json_str(r#"{"specification": "probeinterface", "version": "0.2.21"}"#)
            .unwrap_err();
        assert!(
            matches!(err, ProbeError::MissingField { field: "probes", .. }),
            "{err:?}"
        );
    }

    #[test]
    fn test_syntax_error_is_json() {
        let err = from_json_str("{\"specification\": ").unwrap_err();
        assert!(matches!(err, ProbeError::Json(_)), "{err:?}");
    }

    #[test]
    fn test_raw_parse_skips_validation() {
        let broken = MINIMAL.replace("\"probeinterface\"", "\"other\"");
        assert!(from_json_str(&broken).is_err());

        let raw = raw_from_json_str(&broken).unwrap();
        assert_eq!(raw.specification, "other");
        assert_eq!(raw.probes[0].contact_ids, None);
    }

    #[test]
    fn test_slice_and_reader_agree() {
        let from_slice = from_json_slice(MINIMAL.as_bytes()).unwrap();
        let from_reader = from_json_reader(MINIMAL.as_bytes()).unwrap();
        assert_eq!(from_slice, from_reader);
    }
}
