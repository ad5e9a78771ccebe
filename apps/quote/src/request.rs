//! # Quote Requests
//!
//! JSON in, JSON out.
//!
//! ## Request
//! ```json
//! {
//!   "base_price": "5.00",
//!   "variants": [
//!     { "id": 1, "price_modifier": "8.00", "price_behavior": "override", "override_priority": 1 },
//!     { "id": 2, "price_modifier": "1.00", "price_behavior": "add" }
//!   ],
//!   "quantity": 2,
//!   "preview": { "candidate": { "id": 3, "price_modifier": "2.00" } }
//! }
//! ```
//!
//! `variants` is passed to the core untouched so that a non-array value
//! surfaces as the core's invalid-argument error.

use bakehouse_core::pricing::{normalize, parse_money, preview_variant_price, price_selection_json};
use bakehouse_core::validation::{validate_base_price, validate_quantity};
use bakehouse_core::{CoreError, Money, PriceBreakdown, RawPrice, RawVariant, VariantPreview};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::QuoteConfig;
use crate::error::{QuoteError, QuoteResult};

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub base_price: RawPrice,

    #[serde(default = "empty_selection")]
    pub variants: Value,

    #[serde(default)]
    pub quantity: Option<i64>,

    #[serde(default)]
    pub preview: Option<PreviewRequest>,
}

fn empty_selection() -> Value {
    Value::Array(Vec::new())
}

/// Preview one more candidate on top of the resolved (or given) price.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewRequest {
    /// Snapshot to preview against; defaults to the resolved unit price.
    #[serde(default)]
    pub running_price: Option<RawPrice>,

    pub candidate: RawVariant,
}

/// Human-readable strings for the storefront.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayPrices {
    pub base_price: String,
    pub final_unit_price: String,
    pub line_total: String,

    /// Signed hint shown beside the previewed option ("+$2.00").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_hint: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub breakdown: PriceBreakdown,
    pub quantity: i64,
    pub line_total: Money,

    /// Set when the final price is negative (bad catalog data).
    pub anomalous: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<VariantPreview>,

    pub display: DisplayPrices,
}

fn required_price(raw: &RawPrice, field: &str) -> QuoteResult<Money> {
    parse_money(raw).ok_or_else(|| {
        QuoteError::InvalidRequest(format!("{} must be a decimal amount, got {:?}", field, raw))
    })
}

/// Prices one request.
pub fn handle(request: &QuoteRequest, config: &QuoteConfig) -> QuoteResult<QuoteResponse> {
    let base_price = required_price(&request.base_price, "base_price")?;
    validate_base_price(base_price).map_err(CoreError::from)?;

    let quantity = request.quantity.unwrap_or(1);
    validate_quantity(quantity).map_err(CoreError::from)?;

    let breakdown = price_selection_json(base_price, &request.variants)?;
    let anomalous = breakdown.is_anomalous();
    if anomalous {
        warn!(
            base = %base_price,
            final_unit_price = %breakdown.final_unit_price,
            "Negative unit price, check catalog data"
        );
    }

    let preview = match &request.preview {
        Some(p) => {
            let running = match &p.running_price {
                Some(raw) => required_price(raw, "preview.running_price")?,
                None => breakdown.final_unit_price,
            };
            Some(preview_variant_price(running, &normalize(&p.candidate)))
        }
        None => None,
    };

    let line_total = breakdown
        .final_unit_price
        .checked_multiply_quantity(quantity)
        .ok_or_else(|| CoreError::AmountOutOfRange {
            context: format!("line total of {} x {}", breakdown.final_unit_price, quantity),
        })?;
    let symbol = config.currency_symbol.as_str();

    debug!(
        quantity,
        line_total = %line_total,
        has_preview = preview.is_some(),
        "Quote computed"
    );

    Ok(QuoteResponse {
        display: DisplayPrices {
            base_price: base_price.format_with(symbol),
            final_unit_price: breakdown.final_unit_price.format_with(symbol),
            line_total: line_total.format_with(symbol),
            preview_hint: preview.map(|p| p.addition_amount.format_signed(symbol)),
        },
        breakdown,
        quantity,
        line_total,
        anomalous,
        preview,
    })
}
