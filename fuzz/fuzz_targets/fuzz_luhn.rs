//! Fuzz target for the Luhn primitives.

#![no_main]

use idkit::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let digits: Vec<u8> = data.iter().map(|b| b % 10).collect();
    let _ = luhn::validate(&digits);
    let _ = luhn::compute_checksum(&digits);
    if !digits.is_empty() {
        let check = luhn::generate_check_digit(&digits);
        let mut full = digits;
        full.push(check);
        assert!(luhn::validate(&full));
    }
});
