// src/cli/mod.rs
use clap::Parser;

pub mod handlers;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate secure passwords", long_about = None)]
pub struct Args {
    /// Increase output verbosity
    #[arg(short, long)]
    pub verbose: bool,

    /// UNSAFE - seed for the generator (deterministic mode)
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Set custom password length (default = 15 characters)
    ///
    /// Mutually exclusive with --entropy.
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Set custom password entropy in bits (default = 96 bits)
    ///
    /// Mutually exclusive with --length.
    #[arg(short, long)]
    pub entropy: Option<u32>,

    /// Print the result as a single JSON object
    #[arg(long)]
    pub json: bool,
}
