//! Property-based tests.
//!
//! These pin the invariants that must hold for all inputs: generators
//! only produce valid identifiers, validation is total, and formatting
//! round-trips through stripping.

use idkit::{
    cnpj, cpf, format, generate, is_valid, luhn, passes_luhn, token, validate, CardBrand,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn any_brand() -> impl Strategy<Value = CardBrand> {
    prop_oneof![
        Just(CardBrand::Visa),
        Just(CardBrand::Mastercard),
        Just(CardBrand::Amex),
        Just(CardBrand::Discover),
        Just(CardBrand::Jcb),
        Just(CardBrand::DinersClub),
    ]
}

fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

// =============================================================================
// CHECK-DIGIT GENERATOR PROPERTIES
// =============================================================================

proptest! {
    /// Every generated CPF validates.
    #[test]
    fn generated_cpfs_always_validate(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let document = cpf::generate_with_rng(&mut rng);
        prop_assert!(cpf::is_valid(&document.to_digit_string()));
        prop_assert!(cpf::is_valid(&document.formatted()));
    }

    /// Every generated CNPJ validates and carries the headquarters branch
    /// code after the 8 base digits.
    #[test]
    fn generated_cnpjs_always_validate(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let document = cnpj::generate_with_rng(&mut rng);
        prop_assert!(cnpj::is_valid(&document.to_digit_string()));
        prop_assert_eq!(&document.digits()[8..12], &[0, 0, 0, 1][..]);
    }

    /// CPF validation is total: no input panics.
    #[test]
    fn cpf_validation_never_panics(input in ".*") {
        let _ = cpf::is_valid(&input);
        let _ = cnpj::is_valid(&input);
    }
}

// =============================================================================
// LUHN PROPERTIES
// =============================================================================

proptest! {
    /// Appending the computed check digit always yields a valid sequence.
    #[test]
    fn check_digit_completes_any_prefix(prefix in digit_string(12)) {
        let digits: Vec<u8> = prefix.bytes().map(|b| b - b'0').collect();
        let check = luhn::generate_check_digit(&digits);
        prop_assert!(check < 10);
        let mut full = digits;
        full.push(check);
        prop_assert!(luhn::validate(&full));
    }

    /// Changing one digit always breaks the checksum.
    #[test]
    fn single_substitution_always_caught(
        brand in any_brand(),
        seed in any::<u64>(),
        pos_pick in any::<usize>(),
        delta in 1u8..=9,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let number = generate::generate_number_with_rng(brand, &mut rng);
        let mut digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
        let pos = pos_pick % digits.len();
        digits[pos] = (digits[pos] + delta) % 10;
        prop_assert!(!luhn::validate(&digits));
    }

    /// Card validation is total.
    #[test]
    fn card_validation_never_panics(input in ".*") {
        let _ = validate(&input);
        let _ = is_valid(&input);
        let _ = passes_luhn(&input);
    }
}

// =============================================================================
// CARD GENERATION PROPERTIES
// =============================================================================

proptest! {
    /// Generated cards validate, classify back to their brand, and carry
    /// consistent companion fields.
    #[test]
    fn generated_cards_hold_their_contract(brand in any_brand(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let card = generate::generate_card_with_rng(brand, &mut rng);

        prop_assert!(is_valid(&card.number), "invalid number {}", card.number);
        prop_assert_eq!(validate(&card.number).unwrap().brand(), brand);
        prop_assert_eq!(card.number.len(), brand.default_length());
        prop_assert_eq!(card.cvv.len(), brand.cvv_length());
        prop_assert!(!card.expiry.is_expired());
        prop_assert!(card.holder_name.contains(' '));
    }
}

// =============================================================================
// FORMATTING PROPERTIES
// =============================================================================

proptest! {
    /// Stripping a formatted CPF recovers the raw digits for ANY 11-digit
    /// string, valid or not: the formatter never validates.
    #[test]
    fn cpf_format_strip_roundtrip(digits in digit_string(11)) {
        prop_assert_eq!(format::strip_non_digits(&format::format_cpf(&digits)), digits);
    }

    /// Same for CNPJ.
    #[test]
    fn cnpj_format_strip_roundtrip(digits in digit_string(14)) {
        prop_assert_eq!(format::strip_non_digits(&format::format_cnpj(&digits)), digits);
    }

    /// And for card numbers of any plausible length.
    #[test]
    fn card_format_strip_roundtrip(digits in (13usize..=19).prop_flat_map(digit_string)) {
        prop_assert_eq!(
            format::strip_non_digits(&format::format_card_number(&digits)),
            digits
        );
    }

    /// Stripping keeps only ASCII digits.
    #[test]
    fn strip_outputs_only_digits(input in ".*") {
        let stripped = format::strip_non_digits(&input);
        prop_assert!(stripped.bytes().all(|b| b.is_ascii_digit()));
    }
}

// =============================================================================
// TOKEN PROPERTIES
// =============================================================================

proptest! {
    /// Minted tokens decode back to the same claims and verify under the
    /// minting secret, and only that secret.
    #[test]
    fn token_roundtrip(
        sub in "[a-zA-Z0-9_-]{1,24}",
        name in "[a-zA-Z ]{1,24}",
        exp_offset in 301i64..1_000_000,
        secret in "[a-zA-Z0-9]{1,32}",
    ) {
        let now = 1_700_000_000i64;
        let payload = serde_json::json!({
            "sub": sub,
            "name": name,
            "exp": now + exp_offset,
        });
        let minted = token::encode("{}", &payload.to_string(), &secret).unwrap();

        let decoded = token::decode_at(&minted, now);
        prop_assert!(decoded.is_well_formed());
        prop_assert_eq!(decoded.claims.sub(), Some(sub.as_str()));
        prop_assert!(!decoded.is_expired);
        prop_assert_eq!(decoded.time_to_expiry, Some(exp_offset));

        let report = token::verify_at(&minted, &secret, now);
        prop_assert!(report.is_valid(), "errors: {:?}", report.errors);

        let wrong = format!("{}x", secret);
        let report = token::verify_at(&minted, &wrong, now);
        prop_assert!(!report.signature_valid);
    }

    /// Decoding is total: any string yields a result, never a panic, and
    /// malformed input always carries at least one error.
    #[test]
    fn token_decode_never_panics(input in ".*") {
        let decoded = token::decode_at(&input, 0);
        if !decoded.is_well_formed() {
            prop_assert!(!decoded.errors.is_empty());
        }
        let _ = token::verify_at(&input, "secret", 0);
    }
}
