//! # Variant Price Resolver
//!
//! The single entry point screens use to price a variant selection.
//!
//! ## Call Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product screen                                                         │
//! │                                                                         │
//! │  API records ──► price_selection_json ──┐                               │
//! │                   (shape check)         │                               │
//! │  RawVariant[] ──► price_selection ──────┼──► normalize_all ──► resolve  │
//! │                                         │                     │         │
//! │                                         │          PriceBreakdown ◄─┘   │
//! │                                                                         │
//! │  Variant picker:                                                        │
//! │  running price + candidate ──► preview_variant_price ──► "+$2.50"       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is a pure function of its arguments. Nothing is
//! cached between calls, so one product's selection can never leak into
//! another's price.

pub mod normalize;
pub mod resolve;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{PriceBehavior, PriceBreakdown, RawVariant, VariantId, VariantOption, VariantPreview};

pub use normalize::{normalize, normalize_all, parse_money};
pub use resolve::resolve;

/// Prices a selection of backend variant records.
///
/// ## Example
/// ```rust
/// use bakehouse_core::money::Money;
/// use bakehouse_core::pricing::price_selection;
/// use bakehouse_core::types::{RawPrice, RawVariant};
///
/// let large = RawVariant {
///     id: "1".into(),
///     price_modifier: RawPrice::from("8.00"),
///     price_behavior: Some("override".to_string()),
///     override_priority: Some(1),
///     ..RawVariant::default()
/// };
///
/// let breakdown = price_selection(Money::from_cents(500), &[large]);
/// assert_eq!(breakdown.final_unit_price.cents(), 800);
/// ```
pub fn price_selection(base_price: Money, selected: &[RawVariant]) -> PriceBreakdown {
    resolve(base_price, &normalize_all(selected))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decodes an untyped JSON selection into raw variant records.
///
/// ## Errors
/// `CoreError::InvalidArgument` when `value` is not an array, or when an
/// element is not a variant object. Garbage inside a variant's fields is
/// not an error.
pub fn decode_selection(value: &Value) -> CoreResult<Vec<RawVariant>> {
    let items = value.as_array().ok_or_else(|| {
        CoreError::invalid_argument(format!(
            "selected variants must be an array, got {}",
            json_kind(value)
        ))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(CoreError::invalid_argument(format!(
                    "selected variant {} must be an object, got {}",
                    index,
                    json_kind(item)
                )));
            }
            RawVariant::deserialize(item).map_err(|e| {
                CoreError::invalid_argument(format!("selected variant {}: {}", index, e))
            })
        })
        .collect()
}

/// Prices an untyped JSON selection.
///
/// This is the boundary for callers holding data straight from the API.
///
/// ## Example
/// ```rust
/// use bakehouse_core::money::Money;
/// use bakehouse_core::pricing::price_selection_json;
/// use serde_json::json;
///
/// let selection = json!([
///     { "id": 1, "price_modifier": "1.50", "price_behavior": "add" },
///     { "id": 2, "price_modifier": "0.75", "price_behavior": "add" }
/// ]);
/// let breakdown = price_selection_json(Money::from_cents(500), &selection).unwrap();
/// assert_eq!(breakdown.final_unit_price.cents(), 725);
///
/// assert!(price_selection_json(Money::from_cents(500), &json!("oops")).is_err());
/// ```
pub fn price_selection_json(base_price: Money, selected: &Value) -> CoreResult<PriceBreakdown> {
    let raw = decode_selection(selected)?;
    Ok(price_selection(base_price, &raw))
}

/// Previews the effect of selecting `candidate` on top of the running price.
///
/// - Override: the candidate's modifier becomes the unit price;
///   `addition_amount` is the display delta against the snapshot.
/// - Additive: the modifier is added; `addition_amount` is the modifier.
///
/// ## Example
/// ```rust
/// use bakehouse_core::money::Money;
/// use bakehouse_core::pricing::preview_variant_price;
/// use bakehouse_core::types::{PriceBehavior, VariantOption};
///
/// let candles = VariantOption::new("9", "Extras", Money::from_cents(200), PriceBehavior::Additive);
/// let preview = preview_variant_price(Money::from_cents(725), &candles);
/// assert_eq!(preview.unit_price.cents(), 925);
/// assert_eq!(preview.addition_amount.cents(), 200);
/// ```
pub fn preview_variant_price(current_running_price: Money, candidate: &VariantOption) -> VariantPreview {
    match candidate.behavior {
        PriceBehavior::Override => VariantPreview {
            unit_price: candidate.price_modifier,
            behavior_applied: PriceBehavior::Override,
            addition_amount: candidate.price_modifier.saturating_sub(current_running_price),
        },
        PriceBehavior::Additive => VariantPreview {
            unit_price: current_running_price.saturating_add(candidate.price_modifier),
            behavior_applied: PriceBehavior::Additive,
            addition_amount: candidate.price_modifier,
        },
    }
}

/// Previews every candidate of a group against the same snapshot.
pub fn preview_candidates(
    current_running_price: Money,
    candidates: &[VariantOption],
) -> Vec<(VariantId, VariantPreview)> {
    candidates
        .iter()
        .map(|c| (c.id.clone(), preview_variant_price(current_running_price, c)))
        .collect()
}
