//! Card-number validation pipeline.
//!
//! Combines parsing, the Luhn checksum, brand detection, and per-brand
//! length rules into a single entry point. Parsing is single-pass over the
//! input with no intermediate string allocation.

use crate::card::{ValidatedCard, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::detect::detect_brand;
use crate::error::ValidationError;
use crate::luhn;

/// Validates a card number string.
///
/// Accepts spaces, hyphens, and periods as separators. Performs, in
/// order: digit extraction, length bounds, Luhn checksum, brand
/// detection, brand-specific length check.
///
/// # Example
///
/// ```
/// use idkit::validate;
///
/// let card = validate("4111-1111-1111-1111").unwrap();
/// assert_eq!(card.brand().name(), "Visa");
/// assert_eq!(card.last_four(), "1111");
///
/// assert!(validate("4111-1111-1111-1112").is_err());
/// ```
pub fn validate(input: &str) -> Result<ValidatedCard, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut digits = [0u8; MAX_CARD_DIGITS];
    let mut count = 0usize;

    for (pos, c) in input.chars().enumerate() {
        match c {
            '0'..='9' => {
                if count >= MAX_CARD_DIGITS {
                    return Err(ValidationError::TooLong {
                        length: count + 1,
                        maximum: MAX_CARD_DIGITS,
                    });
                }
                digits[count] = (c as u8) - b'0';
                count += 1;
            }
            ' ' | '-' | '.' => {}
            _ => {
                return Err(ValidationError::InvalidCharacter {
                    position: pos,
                    character: c,
                });
            }
        }
    }

    if count == 0 {
        return Err(ValidationError::NoDigits);
    }

    if count < MIN_CARD_DIGITS {
        return Err(ValidationError::TooShort {
            length: count,
            minimum: MIN_CARD_DIGITS,
        });
    }

    if !luhn::validate(&digits[..count]) {
        return Err(ValidationError::InvalidChecksum);
    }

    let brand = detect_brand(&digits[..count]).ok_or(ValidationError::UnknownBrand)?;

    if !brand.is_valid_length(count) {
        return Err(ValidationError::InvalidLengthForBrand {
            brand,
            length: count,
            valid_lengths: brand.valid_lengths(),
        });
    }

    Ok(ValidatedCard::new(brand, digits, count as u8))
}

/// Boolean wrapper around [`validate`].
///
/// # Example
///
/// ```
/// use idkit::is_valid;
///
/// assert!(is_valid("4111 1111 1111 1111"));
/// assert!(!is_valid("4111 1111 1111 1112"));
/// assert!(!is_valid(""));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// Checks only the Luhn checksum, ignoring brand and length rules.
///
/// All non-digit characters are stripped first. An input with no digits
/// at all returns `false`.
///
/// # Example
///
/// ```
/// use idkit::passes_luhn;
///
/// assert!(passes_luhn("4111111111111111"));
/// assert!(!passes_luhn("4111111111111112"));
/// assert!(!passes_luhn(""));
/// ```
#[inline]
pub fn passes_luhn(input: &str) -> bool {
    let digits: Vec<u8> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| (c as u8) - b'0')
        .collect();

    luhn::validate(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardBrand;

    const VISA: &str = "4111111111111111";
    const MASTERCARD: &str = "5500000000000004";
    const AMEX: &str = "378282246310005";
    const DISCOVER: &str = "6011111111111117";
    const JCB: &str = "3530111333300000";
    const DINERS: &str = "30569309025904";

    #[test]
    fn validates_each_brand() {
        assert_eq!(validate(VISA).unwrap().brand(), CardBrand::Visa);
        assert_eq!(validate(MASTERCARD).unwrap().brand(), CardBrand::Mastercard);
        assert_eq!(validate(AMEX).unwrap().brand(), CardBrand::Amex);
        assert_eq!(validate(DISCOVER).unwrap().brand(), CardBrand::Discover);
        assert_eq!(validate(JCB).unwrap().brand(), CardBrand::Jcb);
        assert_eq!(validate(DINERS).unwrap().brand(), CardBrand::DinersClub);
    }

    #[test]
    fn accepts_separators() {
        assert!(validate("4111-1111-1111-1111").is_ok());
        assert!(validate("4111 1111 1111 1111").is_ok());
        assert!(validate("4111.1111 1111-1111").is_ok());
    }

    #[test]
    fn rejects_bad_checksum() {
        assert_eq!(
            validate("4111111111111112").unwrap_err(),
            ValidationError::InvalidChecksum
        );
    }

    #[test]
    fn rejects_invalid_character() {
        match validate("4111-1111-1111-111X").unwrap_err() {
            ValidationError::InvalidCharacter { character, .. } => assert_eq!(character, 'X'),
            other => panic!("expected InvalidCharacter, got {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_bounds_lengths() {
        match validate("411111111111").unwrap_err() {
            ValidationError::TooShort { length, minimum } => {
                assert_eq!(length, 12);
                assert_eq!(minimum, MIN_CARD_DIGITS);
            }
            other => panic!("expected TooShort, got {:?}", other),
        }

        match validate("41111111111111111111").unwrap_err() {
            ValidationError::TooLong { length, maximum } => {
                assert_eq!(length, 20);
                assert_eq!(maximum, MAX_CARD_DIGITS);
            }
            other => panic!("expected TooLong, got {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_and_separator_only() {
        assert_eq!(validate("").unwrap_err(), ValidationError::Empty);
        assert_eq!(validate("---").unwrap_err(), ValidationError::NoDigits);
        assert_eq!(validate("   ").unwrap_err(), ValidationError::NoDigits);
    }

    #[test]
    fn rejects_unknown_brand() {
        // 13 nines: Luhn-fixable but no brand prefix matches
        let mut digits: Vec<u8> = vec![9; 12];
        let check = crate::luhn::generate_check_digit(&digits);
        digits.push(check);
        let number: String = digits.iter().map(|&d| (b'0' + d) as char).collect();
        assert_eq!(validate(&number).unwrap_err(), ValidationError::UnknownBrand);
    }

    #[test]
    fn luhn_only_check() {
        assert!(passes_luhn(VISA));
        assert!(passes_luhn("4111 1111 1111 1111"));
        assert!(!passes_luhn("4111111111111112"));
        // Pinned: no digits means invalid, not vacuously valid
        assert!(!passes_luhn(""));
        assert!(!passes_luhn("---"));
    }

    #[test]
    fn is_valid_consistent_with_validate() {
        for input in [VISA, AMEX, "", "garbage", "4111111111111112"] {
            assert_eq!(is_valid(input), validate(input).is_ok());
        }
    }
}
