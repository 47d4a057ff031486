//! Fuzz target for card validation.
//!
//! validate() and its wrappers must never panic on arbitrary input.

#![no_main]

use idkit::{is_valid, passes_luhn, validate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = validate(data);
    let _ = is_valid(data);
    let _ = passes_luhn(data);
});
