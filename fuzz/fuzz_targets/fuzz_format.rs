//! Fuzz target for formatting helpers.
//!
//! Formatting applies to anything, including partial input; stripping a
//! formatted result must recover exactly the input's digits.

#![no_main]

use idkit::format;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let digits = format::strip_non_digits(data);
    assert_eq!(format::strip_non_digits(&format::format_cpf(data)), digits);
    assert_eq!(format::strip_non_digits(&format::format_cnpj(data)), digits);
    assert_eq!(
        format::strip_non_digits(&format::format_card_number(data)),
        digits
    );
});
