//! # Quote Error Type
//!
//! Unified error type for the quote app.
//!
//! ## Exit Codes
//! ```text
//! ┌───────────────────────┬──────┬──────────────────────────────────────────┐
//! │  Variant              │ Code │  Meaning                                 │
//! ├───────────────────────┼──────┼──────────────────────────────────────────┤
//! │  Usage                │  2   │  Bad command-line arguments              │
//! │  Io                   │  3   │  Input file or stdin unreadable          │
//! │  Json                 │  4   │  Request is not valid JSON               │
//! │  InvalidRequest       │  4   │  Request JSON has the wrong shape        │
//! │  Core                 │  5   │  Pricing rejected the input              │
//! └───────────────────────┴──────┴──────────────────────────────────────────┘
//! ```

use bakehouse_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("{0}")]
    Usage(String),

    #[error("Failed to read request: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl QuoteError {
    pub fn exit_code(&self) -> u8 {
        match self {
            QuoteError::Usage(_) => 2,
            QuoteError::Io(_) => 3,
            QuoteError::Json(_) | QuoteError::InvalidRequest(_) => 4,
            QuoteError::Core(_) => 5,
        }
    }
}

pub type QuoteResult<T> = Result<T, QuoteError>;
