//! Fuzz target for CPF/CNPJ validation.

#![no_main]

use idkit::{cnpj, cpf};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = cpf::validate(data);
    let _ = cpf::is_valid(data);
    let _ = cnpj::validate(data);
    let _ = cnpj::is_valid(data);
});
