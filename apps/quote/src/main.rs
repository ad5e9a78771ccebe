//! # bakehouse-quote Entry Point
//!
//! ## Usage
//! ```bash
//! # Read the request from a file
//! bakehouse-quote --input request.json
//!
//! # Read from stdin, pretty-print the response
//! cat request.json | bakehouse-quote --pretty
//! ```
//!
//! Logs go to stderr (`RUST_LOG` controls the level); the JSON response
//! is the only thing written to stdout.

use std::process::ExitCode;

fn main() -> ExitCode {
    bakehouse_quote::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match bakehouse_quote::run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Quote failed");
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
