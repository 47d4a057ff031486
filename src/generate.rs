//! Synthetic test-card generation.
//!
//! Generated numbers are mathematically valid (they pass the Luhn check
//! and classify to the requested brand) but are not connected to any real
//! account. The randomness source is deliberately non-cryptographic:
//! these are test-data factories, not security primitives.
//!
//! # Example
//!
//! ```
//! use idkit::generate::generate_card;
//! use idkit::{is_valid, CardBrand};
//!
//! let card = generate_card(CardBrand::Visa);
//! assert!(is_valid(&card.number));
//! assert_eq!(card.brand, CardBrand::Visa);
//! assert_eq!(card.cvv.len(), 3);
//! ```

use crate::detect::detect_brand;
use crate::expiry::{random_expiry_with_rng, ExpiryDate};
use crate::format::format_card_number;
use crate::luhn;
use crate::CardBrand;
use rand::Rng;
use serde::Serialize;

/// Holder first names for generated cards.
const FIRST_NAMES: [&str; 50] = [
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy", "Matthew", "Betty", "Anthony",
    "Margaret", "Mark", "Sandra", "Donald", "Ashley", "Steven", "Kimberly", "Paul", "Emily",
    "Andrew", "Donna", "Joshua", "Michelle", "Kenneth", "Carol", "Kevin", "Amanda", "Brian",
    "Dorothy", "George", "Melissa", "Edward", "Deborah",
];

/// Holder last names for generated cards.
const LAST_NAMES: [&str; 50] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts",
];

/// A generated test card: number plus the companion fields a payment form
/// would ask for.
///
/// Serializes to the JSON export shape (use `serde_json::to_string_pretty`
/// for the 2-space-indented download format).
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedCard {
    /// Raw digit string.
    pub number: String,
    /// Number grouped for display per the brand convention.
    pub formatted: String,
    /// The brand the number was generated for.
    pub brand: CardBrand,
    /// CVV with the brand's length (4 digits for Amex, 3 otherwise).
    pub cvv: String,
    /// Future expiry date.
    pub expiry: ExpiryDate,
    /// Synthetic holder name, `First Last`.
    pub holder_name: String,
}

/// Generates a complete test card for the given brand.
pub fn generate_card(brand: CardBrand) -> GeneratedCard {
    generate_card_with_rng(brand, &mut rand::thread_rng())
}

/// Generates a complete test card using the provided RNG.
pub fn generate_card_with_rng<R: Rng>(brand: CardBrand, rng: &mut R) -> GeneratedCard {
    let number = generate_number_with_rng(brand, rng);
    let formatted = format_card_number(&number);
    let cvv = generate_cvv_with_rng(brand, rng);
    let expiry = random_expiry_with_rng(rng);
    let holder_name = generate_holder_name_with_rng(rng);

    GeneratedCard {
        number,
        formatted,
        brand,
        cvv,
        expiry,
        holder_name,
    }
}

/// Generates a valid card number for the given brand.
///
/// Draws one of the brand's prefixes at random, fills up to the brand's
/// generation length minus one with uniform digits, and appends the Luhn
/// check digit.
pub fn generate_number(brand: CardBrand) -> String {
    generate_number_with_rng(brand, &mut rand::thread_rng())
}

/// Generates a valid card number using the provided RNG.
pub fn generate_number_with_rng<R: Rng>(brand: CardBrand, rng: &mut R) -> String {
    let prefixes = brand.prefixes();
    let prefix = prefixes[rng.gen_range(0..prefixes.len())];
    generate_number_with_prefix(prefix, brand.default_length(), rng)
}

/// Generates a valid card number with an explicit prefix and length.
///
/// # Panics
///
/// Panics if `prefix` is not shorter than `length`.
pub fn generate_number_with_prefix<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> String {
    assert!(
        prefix.len() < length,
        "prefix length must be less than total length"
    );

    let mut digits: Vec<u8> = prefix
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    while digits.len() < length - 1 {
        digits.push(rng.gen_range(0..10));
    }

    let check_digit = luhn::generate_check_digit(&digits);
    digits.push(check_digit);

    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Generates a CVV with the brand's length.
pub fn generate_cvv(brand: CardBrand) -> String {
    generate_cvv_with_rng(brand, &mut rand::thread_rng())
}

/// Generates a CVV using the provided RNG.
pub fn generate_cvv_with_rng<R: Rng>(brand: CardBrand, rng: &mut R) -> String {
    (0..brand.cvv_length())
        .map(|_| (b'0' + rng.gen_range(0..10u8)) as char)
        .collect()
}

/// Draws a synthetic `First Last` holder name.
pub fn generate_holder_name_with_rng<R: Rng>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{} {}", first, last)
}

/// Checks that a generated number classifies back to its brand.
///
/// Internal sanity helper used by tests; always true for table-consistent
/// prefixes.
#[allow(dead_code)]
pub(crate) fn round_trips(brand: CardBrand, number: &str) -> bool {
    let digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
    detect_brand(&digits) == Some(brand)
}
