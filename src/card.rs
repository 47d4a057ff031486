//! Card brand table and validated card type.
//!
//! `CardBrand` is the classification table as a sum type: each variant
//! carries its accepted prefixes, accepted lengths, and CVV length, so
//! dispatch is exhaustive and checked by the compiler instead of scattered
//! string comparisons.

use serde::Serialize;
use std::fmt;
use zeroize::Zeroize;

/// Supported card networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardBrand {
    /// Visa - prefix 4, lengths 13, 16, 19
    Visa,
    /// Mastercard - prefixes 51-55, length 16
    Mastercard,
    /// American Express - prefixes 34, 37, length 15
    Amex,
    /// Discover - prefixes 6011, 644-649, 65, lengths 16-19
    Discover,
    /// JCB - prefix 35, lengths 16-19
    Jcb,
    /// Diners Club - prefixes 300-305, 36, 38, lengths 14-19
    DinersClub,
}

impl CardBrand {
    /// All brands in classification order. Detection tries each in turn
    /// and the first match wins, so more specific prefixes must not be
    /// shadowed by earlier entries.
    pub const ALL: [CardBrand; 6] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Discover,
        Self::Jcb,
        Self::DinersClub,
    ];

    /// Returns the accepted total lengths for this brand.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[13, 16, 19],
            Self::Mastercard => &[16],
            Self::Amex => &[15],
            Self::Discover => &[16, 17, 18, 19],
            Self::Jcb => &[16, 17, 18, 19],
            Self::DinersClub => &[14, 15, 16, 17, 18, 19],
        }
    }

    /// Returns the accepted issuer prefixes for this brand.
    #[inline]
    pub const fn prefixes(&self) -> &'static [&'static str] {
        match self {
            Self::Visa => &["4"],
            Self::Mastercard => &["51", "52", "53", "54", "55"],
            Self::Amex => &["34", "37"],
            Self::Discover => &["6011", "644", "645", "646", "647", "648", "649", "65"],
            Self::Jcb => &["35"],
            Self::DinersClub => &["300", "301", "302", "303", "304", "305", "36", "38"],
        }
    }

    /// Returns the CVV length for this brand (4 for Amex, 3 otherwise).
    #[inline]
    pub const fn cvv_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }

    /// Length used when generating numbers for this brand.
    #[inline]
    pub const fn default_length(&self) -> usize {
        match self {
            Self::Amex => 15,
            Self::DinersClub => 14,
            _ => 16,
        }
    }

    /// Returns true if the given length is accepted for this brand.
    #[inline]
    pub fn is_valid_length(&self, length: usize) -> bool {
        self.valid_lengths().iter().any(|&l| l as usize == length)
    }

    /// Full-pattern match: one of the brand's prefixes AND an accepted
    /// total length.
    pub fn matches(&self, digits: &[u8]) -> bool {
        self.matches_prefix(digits) && self.is_valid_length(digits.len())
    }

    /// Prefix-only match, used as a fallback for partial or odd-length
    /// input.
    pub fn matches_prefix(&self, digits: &[u8]) -> bool {
        self.prefixes().iter().any(|prefix| {
            prefix.len() <= digits.len()
                && prefix
                    .bytes()
                    .zip(digits.iter())
                    .all(|(p, &d)| p - b'0' == d)
        })
    }

    /// Returns a human-readable name for the brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// A card number that passed checksum, brand, and length validation.
///
/// Digits live in a fixed-size array that is zeroed on drop. Validated
/// input may be a real card number even though generated ones never are,
/// so `Debug` and `Display` only show the last four digits.
#[derive(Clone)]
pub struct ValidatedCard {
    brand: CardBrand,
    digits: [u8; MAX_CARD_DIGITS],
    digit_count: u8,
}

impl ValidatedCard {
    /// Internal constructor; use [`crate::validate`] to create instances.
    #[inline]
    pub(crate) fn new(brand: CardBrand, digits: [u8; MAX_CARD_DIGITS], digit_count: u8) -> Self {
        Self {
            brand,
            digits,
            digit_count,
        }
    }

    /// Returns the detected card brand.
    #[inline]
    pub const fn brand(&self) -> CardBrand {
        self.brand
    }

    /// Returns the number of digits in the card number.
    #[inline]
    pub const fn length(&self) -> usize {
        self.digit_count as usize
    }

    /// Returns the last four digits, safe for display.
    pub fn last_four(&self) -> String {
        let len = self.length();
        let start = len.saturating_sub(4);
        self.digits[start..len]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the full card number as a digit string.
    pub fn number(&self) -> String {
        self.digits[..self.length()]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the number grouped for display per the brand convention.
    pub fn formatted(&self) -> String {
        crate::format::format_card_number(&self.number())
    }

    /// Raw digit slice for internal use.
    #[inline]
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits[..self.length()]
    }

    fn masked(&self) -> String {
        format!("{}{}", "*".repeat(self.length().saturating_sub(4)), self.last_four())
    }
}

impl fmt::Debug for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCard")
            .field("brand", &self.brand)
            .field("number", &self.masked())
            .field("length", &self.digit_count)
            .finish()
    }
}

impl fmt::Display for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.brand, self.masked())
    }
}

impl Drop for ValidatedCard {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_lengths() {
        assert!(CardBrand::Visa.is_valid_length(13));
        assert!(CardBrand::Visa.is_valid_length(16));
        assert!(!CardBrand::Visa.is_valid_length(15));

        assert!(CardBrand::Amex.is_valid_length(15));
        assert!(!CardBrand::Amex.is_valid_length(16));

        assert!(CardBrand::DinersClub.is_valid_length(14));
    }

    #[test]
    fn brand_cvv_lengths() {
        assert_eq!(CardBrand::Amex.cvv_length(), 4);
        for brand in [
            CardBrand::Visa,
            CardBrand::Mastercard,
            CardBrand::Discover,
            CardBrand::Jcb,
            CardBrand::DinersClub,
        ] {
            assert_eq!(brand.cvv_length(), 3);
        }
    }

    #[test]
    fn brand_names() {
        assert_eq!(CardBrand::Visa.name(), "Visa");
        assert_eq!(CardBrand::Amex.name(), "American Express");
        assert_eq!(CardBrand::Mastercard.to_string(), "Mastercard");
    }

    #[test]
    fn prefix_matching() {
        let visa = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        assert!(CardBrand::Visa.matches_prefix(&visa));
        assert!(CardBrand::Visa.matches(&visa));
        assert!(!CardBrand::Mastercard.matches_prefix(&visa));

        // Prefix longer than the input never matches
        assert!(!CardBrand::Discover.matches_prefix(&[6, 0, 1]));
        assert!(CardBrand::Discover.matches_prefix(&[6, 5, 0]));
    }

    #[test]
    fn full_pattern_requires_length() {
        // Amex prefix with a 16-digit body fails the full pattern
        let mut digits = vec![3, 4];
        digits.extend(std::iter::repeat(0).take(14));
        assert!(CardBrand::Amex.matches_prefix(&digits));
        assert!(!CardBrand::Amex.matches(&digits));
    }

    #[test]
    fn last_four_and_masking() {
        let mut digits = [0u8; MAX_CARD_DIGITS];
        digits[..16].copy_from_slice(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
        let card = ValidatedCard::new(CardBrand::Visa, digits, 16);
        assert_eq!(card.last_four(), "1111");

        let debug = format!("{:?}", card);
        assert!(!debug.contains("4111111111111111"));
        assert!(debug.contains("****"));
    }

    #[test]
    fn card_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidatedCard>();
        assert_send_sync::<CardBrand>();
    }
}
