//! # bakehouse-quote: Pricing Quotes from the Command Line
//!
//! A thin shell around `bakehouse-core` used by support staff and catalog
//! editors to check what a variant selection costs.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize logging (stderr, RUST_LOG)                               │
//! │  2. Parse arguments (--input, --pretty)                                 │
//! │  3. Load configuration (BAKEHOUSE_* environment)                        │
//! │  4. Read request JSON (file or stdin)                                   │
//! │  5. Price it with bakehouse-core                                        │
//! │  6. Print response JSON (stdout)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod request;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::QuoteConfig;
use error::{QuoteError, QuoteResult};
use request::{handle, QuoteRequest};

const USAGE: &str = "usage: bakehouse-quote [--input <file>] [--pretty]";

/// Parsed command-line arguments.
#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    pub input: Option<PathBuf>,
    pub pretty: bool,
}

/// Parses command-line arguments (program name excluded).
pub fn parse_args(args: &[String]) -> QuoteResult<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--input" | "-i" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| QuoteError::Usage(format!("--input needs a path\n{}", USAGE)))?;
                parsed.input = Some(PathBuf::from(path));
                i += 1;
            }
            "--pretty" => parsed.pretty = true,
            "--help" | "-h" => return Err(QuoteError::Usage(USAGE.to_string())),
            other => {
                return Err(QuoteError::Usage(format!("unknown argument '{}'\n{}", other, USAGE)));
            }
        }
        i += 1;
    }

    Ok(parsed)
}

/// Prices a request given as a JSON string and renders the response.
pub fn quote_json(input: &str, config: &QuoteConfig) -> QuoteResult<String> {
    let request: QuoteRequest = serde_json::from_str(input)?;
    let response = handle(&request, config)?;

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    Ok(rendered)
}

/// Runs the app and returns the text to print on stdout.
pub fn run(args: &[String]) -> QuoteResult<String> {
    let cli = parse_args(args)?;

    let mut config = QuoteConfig::from_env();
    config.pretty |= cli.pretty;

    let input = match &cli.input {
        Some(path) => {
            info!(path = %path.display(), "Reading quote request");
            fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    quote_json(&input, &config)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bakehouse_core=trace` - Trace the core only
/// - Default: INFO, DEBUG for bakehouse crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bakehouse_core=debug,bakehouse_quote=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
