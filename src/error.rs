use thiserror::Error;

use crate::lint::LintReport;

/// The main error type for probekit operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required field '{field}': {message}")]
    MissingField {
        field: &'static str,
        message: &'static str,
    },

    #[error("Unknown specification '{found}' (expected '{expected}')", expected = crate::model::SPECIFICATION)]
    UnknownSpecification { found: String },

    #[error("Probe {probe}: '{field}' has {actual} entries, expected {expected} (one per contact)")]
    LengthMismatch {
        probe: usize,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Probe {probe}, contact {contact}: contact id '{id}' is not an integer: {source}")]
    ParseContactId {
        probe: usize,
        contact: usize,
        id: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error(
        "Device channel index {channel} is not unique across all probes; \
         ensure all values are either -1 or unique"
    )]
    DuplicateChannel { channel: i32 },

    #[error("{count} sequential channel(s) starting at {offset} do not fit in a 32-bit index")]
    ChannelRangeOverflow { offset: i32, count: usize },

    #[error("Expected {expected} values, got {actual}")]
    ArgumentLengthMismatch { expected: usize, actual: usize },

    #[error("{what} index {index} is out of range (length {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Failed to process probeinterface JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("Failed to write contact table: {0}")]
    Csv(#[source] csv::Error),

    #[error("Lint failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: LintReport,
    },
}
