//! Fuzz target for contact id normalization.
//!
//! This fuzzer feeds arbitrary UTF-8 text, one contact id per line, to the
//! zero-index normalization step, checking for panics or overflows.

#![no_main]

use libfuzzer_sys::fuzz_target;
use probekit::validation::fuzz_normalize_contact_ids;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let _ = fuzz_normalize_contact_ids(input);
});
