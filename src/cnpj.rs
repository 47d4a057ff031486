//! CNPJ (Cadastro Nacional da Pessoa Jurídica) validation and generation.
//!
//! A CNPJ is a 14-digit Brazilian company identifier: 8 base digits, a
//! 4-digit branch code, and two check digits. The check digits use fixed
//! weight vectors (the cyclic 2..9 pattern) modulo 11; a remainder below
//! 2 maps to 0, anything else to `11 - remainder`.
//!
//! Generated numbers always carry branch code `0001` — the headquarters
//! registration — after the 8 random base digits.
//!
//! # Example
//!
//! ```
//! use idkit::cnpj;
//!
//! assert!(cnpj::is_valid("00.623.904/0001-73"));
//! assert!(!cnpj::is_valid("00.623.904/0001-71"));
//!
//! let generated = cnpj::generate();
//! assert!(cnpj::is_valid(&generated.to_digit_string()));
//! assert_eq!(&generated.digits()[8..12], &[0, 0, 0, 1]);
//! ```

use crate::error::DocumentError;
use crate::format;
use rand::Rng;
use std::fmt;

/// Number of digits in a CNPJ.
pub const CNPJ_LENGTH: usize = 14;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Branch code used for generated numbers (headquarters).
const HEADQUARTERS_BRANCH: [u8; 4] = [0, 0, 0, 1];

/// A CNPJ that passed shape and check-digit validation, or was generated
/// valid by construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cnpj {
    digits: [u8; CNPJ_LENGTH],
}

impl Cnpj {
    /// Returns the digits as a slice.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Returns the raw 14-digit string.
    pub fn to_digit_string(&self) -> String {
        self.digits.iter().map(|&d| (b'0' + d) as char).collect()
    }

    /// Returns the display form `##.###.###/####-##`.
    pub fn formatted(&self) -> String {
        format::format_cnpj(&self.to_digit_string())
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl fmt::Debug for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cnpj").field(&self.formatted()).finish()
    }
}

fn weighted_check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights.iter())
        .map(|(&d, &w)| d as u32 * w)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

/// Validates a CNPJ string.
///
/// All non-digit characters are stripped first. Rejects wrong lengths,
/// all-identical sequences, and check-digit mismatches. Never panics.
pub fn validate(input: &str) -> Result<Cnpj, DocumentError> {
    let digits: Vec<u8> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| c as u8 - b'0')
        .collect();

    if digits.len() != CNPJ_LENGTH {
        return Err(DocumentError::WrongLength {
            length: digits.len(),
            expected: CNPJ_LENGTH,
        });
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return Err(DocumentError::RepeatedDigits);
    }

    if weighted_check_digit(&digits[..12], &FIRST_WEIGHTS) != digits[12]
        || weighted_check_digit(&digits[..13], &SECOND_WEIGHTS) != digits[13]
    {
        return Err(DocumentError::InvalidCheckDigit);
    }

    let mut fixed = [0u8; CNPJ_LENGTH];
    fixed.copy_from_slice(&digits);
    Ok(Cnpj { digits: fixed })
}

/// Boolean wrapper around [`validate`]. Total over any string input.
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// Generates a random headquarters CNPJ, valid by construction.
pub fn generate() -> Cnpj {
    generate_with_rng(&mut rand::thread_rng())
}

/// Generates a random CNPJ using the provided RNG.
pub fn generate_with_rng<R: Rng>(rng: &mut R) -> Cnpj {
    let mut digits = [0u8; CNPJ_LENGTH];
    for d in digits.iter_mut().take(8) {
        *d = rng.gen_range(0..10);
    }
    digits[8..12].copy_from_slice(&HEADQUARTERS_BRANCH);
    digits[12] = weighted_check_digit(&digits[..12], &FIRST_WEIGHTS);
    digits[13] = weighted_check_digit(&digits[..13], &SECOND_WEIGHTS);
    Cnpj { digits }
}
