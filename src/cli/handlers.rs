// src/cli/handlers.rs
use thiserror::Error;

use crate::cli::Args;
use crate::core::sizing::{self, SizingError};
use crate::generators::PasswordGenerator;
use crate::models::{Alphabet, GenerationReport};
use crate::utils::format_report;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Sizing(#[from] SizingError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

// Handler for the one command this tool has: generate a password.
pub fn handle_generate(args: &Args) -> Result<()> {
    let alphabet = Alphabet::standard();

    // Validate and resolve sizing before anything is printed.
    let sizing = sizing::resolve(args.length, args.entropy, alphabet.len())?;
    log::debug!(
        "resolved sizing: {} characters, ~{} bits, ~{} bits/char",
        sizing.length,
        sizing.entropy_bits,
        sizing.bits_per_char
    );

    let mut generator = PasswordGenerator::new(args.seed.as_deref());
    if generator.is_deterministic() {
        log::warn!("seeded mode is deterministic; do not use its output as a real password");
    }

    let password = generator.generate(&alphabet, sizing.length);

    if args.json {
        let report = GenerationReport {
            password,
            length: sizing.length,
            entropy_bits: sizing.entropy_bits,
            bits_per_char: sizing.bits_per_char,
            alphabet_size: alphabet.len(),
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    println!("{password}");

    if args.verbose {
        for line in format_report(&sizing, alphabet.len()) {
            println!("{line}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn conflicting_sizing_flags_fail_before_generation() {
        let args = parse(&["rust_passgen", "-l", "20", "-e", "128"]);
        let err = handle_generate(&args).unwrap_err();
        assert!(matches!(err, CliError::Sizing(SizingError::ConflictingOptions)));
    }

    #[test]
    fn out_of_range_length_surfaces_as_a_sizing_error() {
        let args = parse(&["rust_passgen", "--length", "41"]);
        let err = handle_generate(&args).unwrap_err();
        assert!(matches!(err, CliError::Sizing(SizingError::InvalidLength(41))));
    }

    #[test]
    fn out_of_range_entropy_surfaces_as_a_sizing_error() {
        let args = parse(&["rust_passgen", "--entropy", "39"]);
        let err = handle_generate(&args).unwrap_err();
        assert!(matches!(err, CliError::Sizing(SizingError::InvalidEntropy(39))));
    }

    #[test]
    fn valid_invocations_succeed() {
        for argv in [
            vec!["rust_passgen"],
            vec!["rust_passgen", "-l", "7"],
            vec!["rust_passgen", "-e", "256"],
            vec!["rust_passgen", "-s", "seed", "--verbose"],
            vec!["rust_passgen", "--json"],
        ] {
            let args = parse(&argv);
            assert!(handle_generate(&args).is_ok(), "failed for {argv:?}");
        }
    }

    #[test]
    fn json_report_round_trips_with_the_resolved_sizing() {
        // Build the report the way the handler does and check the wire shape.
        let alphabet = Alphabet::standard();
        let sizing = sizing::resolve(Some(20), None, alphabet.len()).unwrap();
        let password = PasswordGenerator::new(Some("wire")).generate(&alphabet, sizing.length);

        let report = GenerationReport {
            password: password.clone(),
            length: sizing.length,
            entropy_bits: sizing.entropy_bits,
            bits_per_char: sizing.bits_per_char,
            alphabet_size: alphabet.len(),
        };

        let encoded = serde_json::to_string(&report).unwrap();
        let decoded: GenerationReport = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.password, password);
        assert_eq!(decoded.length, 20);
        assert_eq!(decoded.entropy_bits, 131);
        assert_eq!(decoded.bits_per_char, 7);
        assert_eq!(decoded.alphabet_size, 94);
    }
}
