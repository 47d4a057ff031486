//! # idkit
//!
//! Identifier validation and test-data generation: Brazilian CPF and CNPJ
//! numbers, payment-card numbers (Luhn + brand classification), and
//! HS256 compact tokens.
//!
//! Every component is a self-contained, synchronous transformation:
//! strings and digits in, values out. There is no shared state between
//! calls and nothing is cached.
//!
//! ## Card numbers
//!
//! ```rust
//! use idkit::{validate, is_valid, CardBrand};
//!
//! let card = validate("4111-1111-1111-1111").unwrap();
//! assert_eq!(card.brand(), CardBrand::Visa);
//! assert_eq!(card.last_four(), "1111");
//! assert_eq!(card.formatted(), "4111 1111 1111 1111");
//!
//! assert!(is_valid("4111111111111111"));
//! assert!(!is_valid("4111111111111112"));
//! ```
//!
//! ## CPF and CNPJ
//!
//! ```rust
//! use idkit::{cpf, cnpj};
//!
//! assert!(cpf::is_valid("111.444.777-35"));
//! assert!(!cpf::is_valid("123.456.789-00"));
//! assert!(cnpj::is_valid("00.623.904/0001-73"));
//!
//! // Generated numbers are valid by construction
//! let document = cpf::generate();
//! assert!(cpf::is_valid(&document.to_digit_string()));
//! ```
//!
//! ## Test-card generation
//!
//! ```rust
//! use idkit::{generate::generate_card, is_valid, CardBrand};
//!
//! let card = generate_card(CardBrand::Amex);
//! assert!(is_valid(&card.number));
//! assert_eq!(card.cvv.len(), 4);
//! assert!(!card.expiry.is_expired());
//! ```
//!
//! ## Compact tokens
//!
//! ```rust
//! use idkit::token;
//!
//! let minted = token::encode(
//!     r#"{"alg":"HS256","typ":"JWT"}"#,
//!     r#"{"sub":"1234567890","name":"John Doe","iat":1516239022}"#,
//!     "your-256-bit-secret",
//! )
//! .unwrap();
//!
//! // Decoding is total: any string comes back as a result, never a panic
//! let decoded = token::decode(&minted);
//! assert!(decoded.is_well_formed());
//! assert_eq!(decoded.claims.sub(), Some("1234567890"));
//!
//! assert!(token::verify(&minted, "your-256-bit-secret").is_valid());
//! assert!(!token::verify(&minted, "wrong-secret").signature_valid);
//! ```
//!
//! ## Formatting
//!
//! ```rust
//! use idkit::format;
//!
//! assert_eq!(format::format_cpf("11144477735"), "111.444.777-35");
//! assert_eq!(format::format_cnpj("00623904000173"), "00.623.904/0001-73");
//! assert_eq!(format::format_card_number("378282246310005"), "3782 822463 10005");
//! ```
//!
//! ## Feature flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli`   | The `idkit` command-line tool |
//!
//! ## Scope notes
//!
//! Generated identifiers are synthetic test data: checksum-valid but not
//! assigned to anyone. The token codec is HS256-only and meant for
//! inspecting and minting development tokens, not as a hardened JOSE
//! implementation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod claims;
pub mod cnpj;
pub mod cpf;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod format;
pub mod generate;
pub mod luhn;
pub mod token;
pub mod validate;

// Re-export main types at crate root
pub use card::{CardBrand, ValidatedCard, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use claims::Claims;
pub use error::{DocumentError, ValidationError};
pub use expiry::ExpiryDate;
pub use generate::GeneratedCard;
pub use token::{DecodedToken, TokenError, TokenStatus, VerificationReport};
pub use validate::{is_valid, passes_luhn, validate};
