//! Error types for card and document-number validation.
//!
//! Each variant carries enough detail for a caller to explain exactly why
//! an input was rejected.

use crate::CardBrand;
use std::fmt;

/// Errors from card-number validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input string was empty.
    Empty,

    /// The card number has too few digits.
    TooShort {
        /// The actual number of digits provided.
        length: usize,
        /// The minimum required digits.
        minimum: usize,
    },

    /// The card number has too many digits.
    TooLong {
        /// The actual number of digits provided.
        length: usize,
        /// The maximum allowed digits.
        maximum: usize,
    },

    /// An invalid character was found in the input.
    ///
    /// Only digits (0-9), spaces, hyphens, and periods are allowed.
    InvalidCharacter {
        /// The position in the input string (0-indexed).
        position: usize,
        /// The invalid character that was found.
        character: char,
    },

    /// The Luhn checksum did not hold.
    InvalidChecksum,

    /// The digit count is not valid for the detected brand.
    InvalidLengthForBrand {
        /// The detected card brand.
        brand: CardBrand,
        /// The actual number of digits.
        length: usize,
        /// The valid lengths for this brand.
        valid_lengths: &'static [u8],
    },

    /// No known brand matched the number's prefix.
    UnknownBrand,

    /// The input contained only whitespace or separators.
    NoDigits,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),

            Self::TooShort { length, minimum } => {
                write!(
                    f,
                    "card number too short: got {} digits, minimum is {}",
                    length, minimum
                )
            }

            Self::TooLong { length, maximum } => {
                write!(
                    f,
                    "card number too long: got {} digits, maximum is {}",
                    length, maximum
                )
            }

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits, spaces, hyphens, and periods allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::InvalidChecksum => {
                write!(f, "invalid checksum (Luhn check failed)")
            }

            Self::InvalidLengthForBrand {
                brand,
                length,
                valid_lengths,
            } => {
                let valid: Vec<String> = valid_lengths.iter().map(|l| l.to_string()).collect();
                write!(
                    f,
                    "{} cards must have {} digits, got {}",
                    brand.name(),
                    valid.join(" or "),
                    length
                )
            }

            Self::UnknownBrand => {
                write!(f, "unknown card brand - check the number prefix")
            }

            Self::NoDigits => {
                write!(f, "card number contains no digits")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors from CPF/CNPJ validation.
///
/// Inputs are stripped to their digits before any check runs, so there is
/// no invalid-character case: a CPF pasted with dots and a dash and one
/// typed raw go down the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentError {
    /// The stripped input has the wrong number of digits.
    WrongLength {
        /// The actual number of digits after stripping.
        length: usize,
        /// The required digit count (11 for CPF, 14 for CNPJ).
        expected: usize,
    },

    /// Every digit is identical (e.g. `000.000.000-00`), which passes the
    /// checksum arithmetic but is not an assignable identifier.
    RepeatedDigits,

    /// The check digits do not match the recomputed values.
    InvalidCheckDigit,
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { length, expected } => {
                write!(f, "expected {} digits, got {}", expected, length)
            }
            Self::RepeatedDigits => {
                write!(f, "all digits are identical")
            }
            Self::InvalidCheckDigit => {
                write!(f, "check digits do not match")
            }
        }
    }
}

impl std::error::Error for DocumentError {}
