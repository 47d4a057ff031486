//! Card brand classification.
//!
//! Detection runs two passes over the brand table in its fixed order:
//! first the full pattern (prefix and accepted length together), then a
//! prefix-only fallback so partial or unusual-length numbers still
//! classify. The first matching brand wins.

use crate::CardBrand;

/// Detects the card brand from a digit sequence.
///
/// Returns `None` when no brand matches; unrecognized numbers are not an
/// error.
///
/// # Example
///
/// ```
/// use idkit::detect::detect_brand;
/// use idkit::CardBrand;
///
/// let visa = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(detect_brand(&visa), Some(CardBrand::Visa));
///
/// let amex = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5];
/// assert_eq!(detect_brand(&amex), Some(CardBrand::Amex));
///
/// assert_eq!(detect_brand(&[9, 9, 9, 9]), None);
/// ```
pub fn detect_brand(digits: &[u8]) -> Option<CardBrand> {
    if digits.is_empty() {
        return None;
    }

    for brand in CardBrand::ALL {
        if brand.matches(digits) {
            return Some(brand);
        }
    }

    // Length didn't line up for any brand; fall back to prefix alone so
    // partial input still classifies.
    for brand in CardBrand::ALL {
        if brand.matches_prefix(digits) {
            return Some(brand);
        }
    }

    None
}

/// Detects the brand from a string, ignoring any non-digit characters.
pub fn detect_brand_str(input: &str) -> Option<CardBrand> {
    let digits: Vec<u8> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| c as u8 - b'0')
        .collect();
    detect_brand(&digits)
}
