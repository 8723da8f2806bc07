//! Fuzz target for probeinterface JSON parsing and validation.
//!
//! This fuzzer feeds arbitrary byte sequences to the validating JSON
//! parser, checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use probekit::model::io_json::from_json_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(group) = from_json_slice(data) {
        let _ = group.contacts();
        let _ = group.revalidate();
    }
});
