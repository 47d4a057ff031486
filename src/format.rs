//! Display formatting for identifiers.
//!
//! Separators are inserted at fixed offsets:
//!
//! - **CPF**: `3-3-3-2` with `.`, `.`, `-` (`123.456.789-09`)
//! - **CNPJ**: `2-3-3-4-2` with `.`, `.`, `/`, `-` (`12.345.678/0001-95`)
//! - **Cards**: 4-6-5 for Amex-shaped numbers, 4-6-4 for 14-digit Diners,
//!   groups of four otherwise
//!
//! No validation happens here. Formatting applies to whatever digits are
//! present, including partial input while the user is still typing. Card
//! grouping is chosen from the number's *detected* brand, never from a
//! caller-supplied one.

use crate::detect::detect_brand;
use crate::CardBrand;

/// Removes everything except ASCII digits.
///
/// # Example
///
/// ```
/// use idkit::format::strip_non_digits;
///
/// assert_eq!(strip_non_digits("111.444.777-35"), "11144477735");
/// assert_eq!(strip_non_digits("4111 1111 1111 1111"), "4111111111111111");
/// ```
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Groups digits with per-group separators, stopping when the digits run
/// out. Digits beyond the pattern are appended unseparated.
fn group_digits(digits: &str, groups: &[usize], separators: &[char]) -> String {
    let mut result = String::with_capacity(digits.len() + separators.len());
    let mut rest = digits;

    for (i, &size) in groups.iter().enumerate() {
        if rest.is_empty() {
            break;
        }
        if i > 0 {
            if let Some(&sep) = separators.get(i - 1) {
                result.push(sep);
            }
        }
        let take = size.min(rest.len());
        result.push_str(&rest[..take]);
        rest = &rest[take..];
    }
    result.push_str(rest);

    result
}

/// Formats CPF digits as `###.###.###-##`.
///
/// Partial input is grouped as far as the digits go.
///
/// # Example
///
/// ```
/// use idkit::format::format_cpf;
///
/// assert_eq!(format_cpf("11144477735"), "111.444.777-35");
/// assert_eq!(format_cpf("11144"), "111.44");
/// ```
pub fn format_cpf(input: &str) -> String {
    let digits = strip_non_digits(input);
    group_digits(&digits, &[3, 3, 3, 2], &['.', '.', '-'])
}

/// Formats CNPJ digits as `##.###.###/####-##`.
///
/// # Example
///
/// ```
/// use idkit::format::format_cnpj;
///
/// assert_eq!(format_cnpj("00623904000173"), "00.623.904/0001-73");
/// ```
pub fn format_cnpj(input: &str) -> String {
    let digits = strip_non_digits(input);
    group_digits(&digits, &[2, 3, 3, 4, 2], &['.', '.', '/', '-'])
}

/// Formats a card number with space-separated groups.
///
/// The grouping follows the number's detected brand, so an Amex-prefixed
/// number gets 4-6-5 even if the caller believed it was something else.
///
/// # Example
///
/// ```
/// use idkit::format::format_card_number;
///
/// assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
/// ```
pub fn format_card_number(input: &str) -> String {
    format_with_separator(input, " ")
}

/// Formats a card number with a custom separator string.
///
/// # Example
///
/// ```
/// use idkit::format::format_with_separator;
///
/// assert_eq!(
///     format_with_separator("4111111111111111", "-"),
///     "4111-1111-1111-1111"
/// );
/// ```
pub fn format_with_separator(input: &str, separator: &str) -> String {
    let digits = strip_non_digits(input);
    if digits.is_empty() {
        return String::new();
    }

    let digit_values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
    let brand = detect_brand(&digit_values);
    let groups = card_grouping(brand, digits.len());

    let mut result = String::with_capacity(digits.len() + groups.len() * separator.len());
    let mut rest = digits.as_str();

    for (i, &size) in groups.iter().enumerate() {
        if rest.is_empty() {
            break;
        }
        if i > 0 {
            result.push_str(separator);
        }
        let take = size.min(rest.len());
        result.push_str(&rest[..take]);
        rest = &rest[take..];
    }
    if !rest.is_empty() {
        if !result.is_empty() {
            result.push_str(separator);
        }
        result.push_str(rest);
    }

    result
}

/// Digit grouping for a detected brand and length.
fn card_grouping(brand: Option<CardBrand>, length: usize) -> Vec<usize> {
    match brand {
        Some(CardBrand::Amex) => vec![4, 6, 5],
        Some(CardBrand::DinersClub) if length == 14 => vec![4, 6, 4],
        _ => {
            let mut groups = vec![4; length / 4];
            if length % 4 > 0 {
                groups.push(length % 4);
            }
            groups
        }
    }
}
