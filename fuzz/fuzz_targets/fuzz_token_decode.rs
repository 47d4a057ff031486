//! Fuzz target for token decoding and verification.
//!
//! decode() is total: arbitrary input must come back as a result with an
//! error list, never a panic.

#![no_main]

use idkit::token;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let decoded = token::decode_at(data, 0);
    if !decoded.is_well_formed() {
        assert!(!decoded.errors.is_empty());
    }
    let _ = token::verify_at(data, "fuzz-secret", 0);
});
