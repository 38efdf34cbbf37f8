// src/main.rs
use std::process;

use clap::Parser;

mod cli;
mod core;
mod generators;
mod models;
mod utils;

use crate::cli::handlers::{self, CliError};
use crate::cli::Args;

fn main() {
    let args = Args::parse();

    // RUST_LOG raises diagnostic verbosity. Log output goes to stderr only,
    // so the password line on stdout stays clean for piping.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(e) = handlers::handle_generate(&args) {
        eprintln!("error: {e}");
        let code = match e {
            CliError::Sizing(_) => 2,
            _ => 1,
        };
        process::exit(code);
    }
}
