//! Command-line interface for idkit.
//!
//! # Usage
//!
//! ```bash
//! # Generate test identifiers
//! idkit cpf generate --count 5
//! idkit cnpj generate
//! idkit card generate --brand amex --output json
//!
//! # Validate user input
//! idkit cpf validate 111.444.777-35
//! idkit card validate 4111111111111111
//!
//! # Work with compact tokens
//! idkit token decode <token>
//! idkit token verify <token> --secret s3cret
//! idkit token sign --payload '{"sub":"42"}' --secret s3cret
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use idkit::{cnpj, cpf, detect, format, generate, token, validate, CardBrand};

#[derive(Parser)]
#[command(name = "idkit")]
#[command(
    author,
    version,
    about = "Identifier validation and test-data generation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// CPF generation and validation
    Cpf {
        #[command(subcommand)]
        action: DocumentAction,
    },

    /// CNPJ generation and validation
    Cnpj {
        #[command(subcommand)]
        action: DocumentAction,
    },

    /// Card number generation, validation, detection, and formatting
    Card {
        #[command(subcommand)]
        action: CardAction,
    },

    /// Compact token decode, verify, and sign
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand)]
enum DocumentAction {
    /// Generate valid test numbers
    Generate {
        /// Number of identifiers to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Print raw digits instead of the formatted form
        #[arg(short, long)]
        raw: bool,
    },

    /// Validate a number (formatted or raw digits)
    Validate {
        /// The identifier to check
        input: String,
    },
}

#[derive(Subcommand)]
enum CardAction {
    /// Generate complete test cards (number, CVV, expiry, holder)
    Generate {
        /// Card brand to generate
        #[arg(short, long, default_value = "visa")]
        brand: BrandArg,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate a card number
    Validate {
        /// Card number (spaces, dashes, and periods allowed)
        input: String,
    },

    /// Detect the brand of a (possibly partial) number
    Detect {
        /// Card number or prefix
        input: String,
    },

    /// Format a card number per its brand convention
    Format {
        /// Card number to format
        input: String,

        /// Separator between digit groups
        #[arg(short, long, default_value = " ")]
        separator: String,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Decode a token without verifying its signature
    Decode {
        /// The compact token
        token: String,
    },

    /// Verify a token's signature and temporal claims
    Verify {
        /// The compact token
        token: String,

        /// HMAC secret
        #[arg(short, long)]
        secret: String,
    },

    /// Mint an HS256 token from header and payload JSON
    Sign {
        /// Header JSON (defaults applied for alg and typ)
        #[arg(long, default_value = "{}")]
        header: String,

        /// Payload JSON
        #[arg(long)]
        payload: String,

        /// HMAC secret
        #[arg(short, long)]
        secret: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum BrandArg {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Jcb,
    DinersClub,
}

impl From<BrandArg> for CardBrand {
    fn from(arg: BrandArg) -> Self {
        match arg {
            BrandArg::Visa => CardBrand::Visa,
            BrandArg::Mastercard => CardBrand::Mastercard,
            BrandArg::Amex => CardBrand::Amex,
            BrandArg::Discover => CardBrand::Discover,
            BrandArg::Jcb => CardBrand::Jcb,
            BrandArg::DinersClub => CardBrand::DinersClub,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cpf { action } => match action {
            DocumentAction::Generate { count, raw } => {
                for _ in 0..count {
                    let document = cpf::generate();
                    if raw {
                        println!("{}", document.to_digit_string());
                    } else {
                        println!("{}", document.formatted());
                    }
                }
            }
            DocumentAction::Validate { input } => match cpf::validate(&input) {
                Ok(document) => {
                    println!("Valid: yes");
                    println!("Formatted: {}", document.formatted());
                }
                Err(e) => {
                    println!("Valid: no");
                    println!("Error: {}", e);
                    std::process::exit(1);
                }
            },
        },

        Commands::Cnpj { action } => match action {
            DocumentAction::Generate { count, raw } => {
                for _ in 0..count {
                    let document = cnpj::generate();
                    if raw {
                        println!("{}", document.to_digit_string());
                    } else {
                        println!("{}", document.formatted());
                    }
                }
            }
            DocumentAction::Validate { input } => match cnpj::validate(&input) {
                Ok(document) => {
                    println!("Valid: yes");
                    println!("Formatted: {}", document.formatted());
                }
                Err(e) => {
                    println!("Valid: no");
                    println!("Error: {}", e);
                    std::process::exit(1);
                }
            },
        },

        Commands::Card { action } => match action {
            CardAction::Generate {
                brand,
                count,
                output,
            } => cmd_card_generate(brand.into(), count, output),
            CardAction::Validate { input } => cmd_card_validate(&input),
            CardAction::Detect { input } => cmd_card_detect(&input),
            CardAction::Format { input, separator } => {
                println!("{}", format::format_with_separator(&input, &separator));
            }
        },

        Commands::Token { action } => match action {
            TokenAction::Decode { token } => cmd_token_decode(&token),
            TokenAction::Verify { token, secret } => cmd_token_verify(&token, &secret),
            TokenAction::Sign {
                header,
                payload,
                secret,
            } => match token::encode(&header, &payload, &secret) {
                Ok(minted) => println!("{}", minted),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            },
        },
    }
}

fn cmd_card_generate(brand: CardBrand, count: usize, output: OutputFormat) {
    match output {
        OutputFormat::Text => {
            for _ in 0..count {
                let card = generate::generate_card(brand);
                println!("Number: {}", card.formatted);
                println!("Brand: {}", card.brand.name());
                println!("CVV: {}", card.cvv);
                println!("Expiry: {}", card.expiry);
                println!("Holder: {}", card.holder_name);
                if count > 1 {
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            let cards: Vec<_> = (0..count).map(|_| generate::generate_card(brand)).collect();
            match serde_json::to_string_pretty(&cards) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn cmd_card_validate(input: &str) {
    match validate(input) {
        Ok(card) => {
            println!("Valid: yes");
            println!("Brand: {}", card.brand().name());
            println!("Last Four: {}", card.last_four());
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_card_detect(input: &str) {
    match detect::detect_brand_str(input) {
        Some(brand) => {
            println!("Detected Brand: {}", brand.name());
            println!("Valid Lengths: {:?}", brand.valid_lengths());
            println!("CVV Length: {}", brand.cvv_length());
        }
        None => {
            println!("Detected Brand: Unknown");
        }
    }
}

fn cmd_token_decode(input: &str) {
    let decoded = token::decode(input);
    match serde_json::to_string_pretty(&decoded) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
    if !decoded.is_well_formed() {
        std::process::exit(1);
    }
}

fn cmd_token_verify(input: &str, secret: &str) {
    let report = token::verify(input, secret);
    println!("Status: {:?}", report.status);
    println!("Signature Valid: {}", report.signature_valid);
    for error in &report.errors {
        println!("Error: {}", error);
    }
    for warning in &report.warnings {
        println!("Warning: {}", warning);
    }
    if !report.is_valid() {
        std::process::exit(1);
    }
}
