//! CLI tool for card validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a card number
//! stripe-card validate 4242424242424242
//!
//! # Validate a whole card against a fixed date
//! stripe-card --today 2024-06-15 validate 378282246310005 --cvc 1234 --exp-month 12 --exp-year 30
//!
//! # Detect the brand of a partial number
//! stripe-card detect 3782
//!
//! # Validate a CVC for a brand
//! stripe-card cvc 1234 --brand amex
//!
//! # Validate an expiration date
//! stripe-card expiry 12 35
//!
//! # Generate test card numbers
//! stripe-card generate --brand visa --count 5
//! ```
//!
//! Exit status is 0 when the input is valid and 1 when it is not. Set
//! `RUST_LOG=stripe_card=debug` to see library log events on stderr.

use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stripe_card::length::{max_card_number_length, max_cvc_length};
use stripe_card::{
    cvc, detect, expiry, generate, luhn, mask, validate_card, validate_card_number, CardBrand,
    CardFields, ValidationError,
};

#[derive(Parser)]
#[command(name = "stripe-card")]
#[command(author, version, about = "Payment card validation and classification tool")]
struct Cli {
    /// Date to check expiration against (YYYY-MM-DD), defaults to the local date
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a card number, or a whole card when CVC and expiration are given
    Validate {
        /// Card number (digits only)
        card_number: String,

        /// Card verification code
        #[arg(long, requires_all = ["exp_month", "exp_year"])]
        cvc: Option<String>,

        /// Expiration month (1-12)
        #[arg(long, requires_all = ["cvc", "exp_year"])]
        exp_month: Option<i32>,

        /// Expiration year (two or four digits)
        #[arg(long, requires_all = ["cvc", "exp_month"])]
        exp_year: Option<i32>,
    },

    /// Detect card brand from a (possibly partial) number
    Detect {
        /// Card number, spaces and dashes allowed
        card_number: String,
    },

    /// Check if a number passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Validate a CVC
    Cvc {
        /// CVC to validate
        cvc: String,

        /// Card brand (affects required length)
        #[arg(short, long)]
        brand: Option<BrandArg>,
    },

    /// Validate an expiration month and year
    Expiry {
        /// Expiration month (1-12)
        month: i32,

        /// Expiration year (two or four digits)
        year: i32,
    },

    /// Mask a card number down to its last four digits
    Mask {
        /// Card number to mask
        card_number: String,
    },

    /// Generate test card numbers (for testing only)
    Generate {
        /// Card brand to generate
        #[arg(short, long, default_value = "visa")]
        brand: BrandArg,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Zero-filled numbers instead of random digits
        #[arg(short, long)]
        deterministic: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum BrandArg {
    Amex,
    Discover,
    Jcb,
    DinersClub,
    Visa,
    Mastercard,
}

impl From<BrandArg> for CardBrand {
    fn from(arg: BrandArg) -> Self {
        match arg {
            BrandArg::Amex => CardBrand::AmericanExpress,
            BrandArg::Discover => CardBrand::Discover,
            BrandArg::Jcb => CardBrand::Jcb,
            BrandArg::DinersClub => CardBrand::DinersClub,
            BrandArg::Visa => CardBrand::Visa,
            BrandArg::Mastercard => CardBrand::MasterCard,
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

/// Result of a validity check, printed as text or JSON.
#[derive(Serialize, Default)]
struct Report {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<CardBrand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    masked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    months_until_expiry: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

#[derive(Serialize)]
struct ErrorReport {
    code: &'static str,
    param: &'static str,
    message: String,
}

impl From<&ValidationError> for ErrorReport {
    fn from(err: &ValidationError) -> Self {
        Self {
            code: err.code(),
            param: err.field().param(),
            message: err.to_string(),
        }
    }
}

#[derive(Serialize)]
struct DetectReport {
    brand: CardBrand,
    card_number_length: usize,
    cvc_length: usize,
}

#[derive(Serialize)]
struct GenerateReport {
    brand: CardBrand,
    numbers: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let today = cli.today.unwrap_or_else(expiry::today);
    tracing::debug!(%today, "using date for expiration checks");

    match cli.command {
        Commands::Validate {
            card_number,
            cvc,
            exp_month,
            exp_year,
        } => match (cvc, exp_month, exp_year) {
            (Some(cvc), Some(month), Some(year)) => {
                cmd_validate_card(&card_number, &cvc, month, year, today, cli.output)
            }
            _ => cmd_validate_number(&card_number, cli.output),
        },
        Commands::Detect { card_number } => cmd_detect(&card_number, cli.output),
        Commands::Luhn { card_number } => cmd_luhn(&card_number, cli.output),
        Commands::Cvc { cvc: input, brand } => cmd_cvc(
            &input,
            brand.map_or(CardBrand::Unknown, CardBrand::from),
            cli.output,
        ),
        Commands::Expiry { month, year } => cmd_expiry(month, year, today, cli.output),
        Commands::Mask { card_number } => cmd_mask(&card_number),
        Commands::Generate {
            brand,
            count,
            deterministic,
        } => cmd_generate(brand.into(), count, deterministic, cli.output),
    }
}

fn cmd_validate_number(card_number: &str, output: OutputFormat) -> ExitCode {
    let report = match validate_card_number(card_number) {
        Ok(brand) => Report {
            valid: true,
            brand: Some(brand),
            masked: Some(mask::mask_number(card_number)),
            ..Report::default()
        },
        Err(e) => Report {
            error: Some(ErrorReport::from(&e)),
            ..Report::default()
        },
    };
    print_report(&report, output)
}

fn cmd_validate_card(
    card_number: &str,
    cvc: &str,
    month: i32,
    year: i32,
    today: NaiveDate,
    output: OutputFormat,
) -> ExitCode {
    let fields = CardFields::new(card_number, cvc, month, year);
    let mut report = Report {
        brand: Some(fields.brand),
        masked: Some(mask::mask_number(card_number)),
        ..Report::default()
    };

    match validate_card(&fields, today) {
        Ok(()) => {
            report.valid = true;
            if let Ok(date) = expiry::validate_expiration(month, year, today) {
                report.expiration = Some(date.format_short());
            }
        }
        Err(e) => report.error = Some(ErrorReport::from(&e)),
    }
    print_report(&report, output)
}

fn cmd_detect(card_number: &str, output: OutputFormat) -> ExitCode {
    let brand = detect::classify(card_number);
    let report = DetectReport {
        brand,
        card_number_length: max_card_number_length(brand),
        cvc_length: max_cvc_length(brand),
    };

    match output {
        OutputFormat::Text => {
            println!("Detected Brand: {}", brand);
            println!("Card Number Length: {}", report.card_number_length);
            println!("CVC Length: {}", report.cvc_length);
        }
        OutputFormat::Json => {
            if let Err(code) = print_json(&report) {
                return code;
            }
        }
    }

    if brand.is_known() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_luhn(card_number: &str, output: OutputFormat) -> ExitCode {
    let valid = luhn::is_valid_luhn(card_number);
    match output {
        OutputFormat::Text => {
            println!("Luhn check: {}", if valid { "PASS" } else { "FAIL" });
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        OutputFormat::Json => print_report(
            &Report {
                valid,
                ..Report::default()
            },
            output,
        ),
    }
}

fn cmd_cvc(input: &str, brand: CardBrand, output: OutputFormat) -> ExitCode {
    let report = match cvc::validate_cvc(input, brand) {
        Ok(()) => Report {
            valid: true,
            brand: Some(brand),
            ..Report::default()
        },
        Err(e) => Report {
            brand: Some(brand),
            error: Some(ErrorReport::from(&e)),
            ..Report::default()
        },
    };
    print_report(&report, output)
}

fn cmd_expiry(month: i32, year: i32, today: NaiveDate, output: OutputFormat) -> ExitCode {
    let report = match expiry::validate_expiration(month, year, today) {
        Ok(date) => Report {
            valid: true,
            expiration: Some(date.format_long()),
            months_until_expiry: Some(date.months_until_expiry(today)),
            ..Report::default()
        },
        Err(e) => Report {
            error: Some(ErrorReport::from(&e)),
            ..Report::default()
        },
    };
    print_report(&report, output)
}

fn cmd_mask(card_number: &str) -> ExitCode {
    println!("{}", mask::mask_number(card_number));
    ExitCode::SUCCESS
}

fn cmd_generate(brand: CardBrand, count: usize, deterministic: bool, output: OutputFormat) -> ExitCode {
    let numbers = if deterministic {
        generate::generate_card_deterministic(brand)
            .map(|number| vec![number; count])
            .unwrap_or_default()
    } else {
        generate::generate_cards(brand, count)
    };
    tracing::debug!(%brand, count = numbers.len(), "generated test cards");

    match output {
        OutputFormat::Text => {
            for number in &numbers {
                println!("{}", number);
            }
        }
        OutputFormat::Json => {
            if let Err(code) = print_json(&GenerateReport { brand, numbers }) {
                return code;
            }
        }
    }
    ExitCode::SUCCESS
}

fn print_report(report: &Report, output: OutputFormat) -> ExitCode {
    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if report.valid { "yes" } else { "no" });
            if let Some(brand) = report.brand {
                println!("Brand: {}", brand);
            }
            if let Some(masked) = &report.masked {
                println!("Masked: {}", masked);
            }
            if let Some(expiration) = &report.expiration {
                println!("Expiration: {}", expiration);
            }
            if let Some(months) = report.months_until_expiry {
                println!("Months Until Expiry: {}", months);
            }
            if let Some(error) = &report.error {
                println!("Error: {} ({})", error.message, error.code);
            }
        }
        OutputFormat::Json => {
            if let Err(code) = print_json(report) {
                return code;
            }
        }
    }

    if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ExitCode> {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: failed to encode output: {}", e);
            Err(ExitCode::from(2))
        }
    }
}
