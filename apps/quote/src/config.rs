//! # Quote Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--pretty`)
//! 2. Environment variables (`BAKEHOUSE_*`)
//! 3. Defaults (this file)

use serde::{Deserialize, Serialize};

/// Runtime configuration for the quote app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteConfig {
    /// Currency symbol used in the display strings.
    pub currency_symbol: String,

    /// Pretty-print the JSON response.
    pub pretty: bool,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        QuoteConfig {
            currency_symbol: "$".to_string(),
            pretty: false,
        }
    }
}

impl QuoteConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BAKEHOUSE_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `BAKEHOUSE_PRETTY`: `1` or `true` to pretty-print
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = QuoteConfig::default();

        if let Some(symbol) = lookup("BAKEHOUSE_CURRENCY_SYMBOL") {
            if !symbol.trim().is_empty() {
                config.currency_symbol = symbol.trim().to_string();
            }
        }

        if let Some(pretty) = lookup("BAKEHOUSE_PRETTY") {
            config.pretty = matches!(pretty.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = QuoteConfig::from_lookup(|_| None);
        assert_eq!(config, QuoteConfig::default());
        assert_eq!(config.currency_symbol, "$");
        assert!(!config.pretty);
    }

    #[test]
    fn test_overrides() {
        let config = QuoteConfig::from_lookup(lookup_from(&[
            ("BAKEHOUSE_CURRENCY_SYMBOL", "€"),
            ("BAKEHOUSE_PRETTY", "TRUE"),
        ]));
        assert_eq!(config.currency_symbol, "€");
        assert!(config.pretty);
    }

    #[test]
    fn test_blank_symbol_ignored() {
        let config = QuoteConfig::from_lookup(lookup_from(&[("BAKEHOUSE_CURRENCY_SYMBOL", "  ")]));
        assert_eq!(config.currency_symbol, "$");
    }
}
