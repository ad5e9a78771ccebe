//! # Domain Types
//!
//! Variant records as they arrive from the storefront API, their canonical
//! form, and the results the pricing functions hand back.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐   normalize   ┌─────────────────┐                  │
//! │  │   RawVariant    │ ────────────► │  VariantOption  │                  │
//! │  │  ─────────────  │               │  ─────────────  │                  │
//! │  │  price: "1.50"  │               │  modifier: 150¢ │                  │
//! │  │  behavior: str? │               │  PriceBehavior  │                  │
//! │  └─────────────────┘               └────────┬────────┘                  │
//! │                                             │ resolve / preview         │
//! │                          ┌──────────────────┴──────────┐                │
//! │                          ▼                             ▼                │
//! │                 ┌─────────────────┐          ┌─────────────────┐        │
//! │                 │ PriceBreakdown  │          │ VariantPreview  │        │
//! │                 └─────────────────┘          └─────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `RawVariant` is deliberately loose: the backend sends prices as strings,
//! numbers or null and ids as numbers or strings. Nothing downstream of
//! [`crate::pricing::normalize`] sees those loose shapes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Price Behavior
// =============================================================================

/// How a variant's modifier combines with the running price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PriceBehavior {
    /// Replaces the running price entirely.
    Override,
    /// Adds to the running price.
    #[default]
    Additive,
}

impl PriceBehavior {
    /// Maps a backend behavior tag.
    ///
    /// Only the exact tag `"override"` selects [`PriceBehavior::Override`];
    /// anything else, including a missing tag, is additive.
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::types::PriceBehavior;
    ///
    /// assert_eq!(PriceBehavior::from_tag(Some("override")), PriceBehavior::Override);
    /// assert_eq!(PriceBehavior::from_tag(Some("add")), PriceBehavior::Additive);
    /// assert_eq!(PriceBehavior::from_tag(None), PriceBehavior::Additive);
    /// ```
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("override") => PriceBehavior::Override,
            _ => PriceBehavior::Additive,
        }
    }
}

// =============================================================================
// Stock Status
// =============================================================================

/// Inventory state of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Maps a backend stock tag. Unknown or missing tags count as in stock.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(str::trim) {
            Some("low_stock") => StockStatus::LowStock,
            Some("out_of_stock") => StockStatus::OutOfStock,
            _ => StockStatus::InStock,
        }
    }
}

// =============================================================================
// Variant Id
// =============================================================================

/// Identifier of a variant within its product.
///
/// The backend sends numeric ids for most products and string ids for
/// imported ones; both are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, TS)]
#[ts(export)]
pub struct VariantId(String);

impl VariantId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariantId {
    fn from(id: &str) -> Self {
        VariantId(id.to_string())
    }
}

impl From<String> for VariantId {
    fn from(id: String) -> Self {
        VariantId(id)
    }
}

impl From<i64> for VariantId {
    fn from(id: i64) -> Self {
        VariantId(id.to_string())
    }
}

/// Numbers and strings become the id's text; anything else leaves the id
/// empty rather than rejecting the record.
impl<'de> Deserialize<'de> for VariantId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => VariantId(s),
            Value::Number(n) => VariantId(n.to_string()),
            Value::Null => VariantId::default(),
            other => {
                warn!(raw = %other, "Ignoring malformed variant id");
                VariantId::default()
            }
        })
    }
}

// =============================================================================
// Raw Variant (wire shape)
// =============================================================================

/// A price field exactly as the backend sent it.
///
/// Deserialization of this type never fails: anything that is not a
/// number, a string or null lands in [`RawPrice::Other`] and later
/// normalizes to zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(serde_json::Number),
    Text(String),
    #[default]
    Missing,
    Other(serde_json::Value),
}

impl From<i64> for RawPrice {
    fn from(value: i64) -> Self {
        RawPrice::Number(value.into())
    }
}

impl From<&str> for RawPrice {
    fn from(value: &str) -> Self {
        RawPrice::Text(value.to_string())
    }
}

/// A variant record as returned by the storefront API.
///
/// Only the record's own shape is strict. A field holding the wrong kind
/// of value reads as absent, so one sloppy catalog entry cannot fail the
/// whole selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawVariant {
    #[serde(default)]
    pub id: VariantId,

    /// Group the variant belongs to ("Size", "Flavor").
    #[serde(default, alias = "variant_type", deserialize_with = "lenient_text")]
    pub group_name: Option<String>,

    /// Display name ("Large", "Chocolate").
    #[serde(default, alias = "value", deserialize_with = "lenient_text")]
    pub name: Option<String>,

    #[serde(default)]
    pub price_modifier: RawPrice,

    /// `"override"` or anything else (additive).
    #[serde(default, deserialize_with = "lenient_text")]
    pub price_behavior: Option<String>,

    /// Accepts `1`, `1.0` and `"1"`.
    #[serde(default, deserialize_with = "lenient_integer")]
    pub override_priority: Option<i64>,

    #[serde(default, deserialize_with = "lenient_integer")]
    pub available_quantity: Option<i64>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub stock_status: Option<String>,
}

/// Integral values below 2^53 survive a round trip through `f64`.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

fn integral_float(f: f64) -> Option<i64> {
    (f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT).then(|| f as i64)
}

/// Reads an integer from an integer, an integral float or a numeric string.
fn integer_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral_float)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral_float))
        }
        _ => None,
    }
}

fn lenient_integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        let parsed = integer_from_value(&v);
        if parsed.is_none() {
            warn!(raw = %v, "Ignoring non-integer variant field");
        }
        parsed
    }))
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => {
            warn!(raw = %other, "Ignoring non-text variant field");
            None
        }
    })
}

// =============================================================================
// Variant Option (canonical)
// =============================================================================

/// A selectable product variant in canonical, fully-typed form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VariantOption {
    pub id: VariantId,

    /// At most one variant per group may be selected.
    pub group_name: String,

    pub name: String,

    /// Meaning depends on `behavior`: a replacement price or an addition.
    pub price_modifier: Money,

    pub behavior: PriceBehavior,

    /// Lower wins among competing overrides; `None` resolves last.
    pub override_priority: Option<i64>,

    pub available_quantity: Option<i64>,

    pub stock_status: StockStatus,
}

impl VariantOption {
    /// Creates an in-stock variant with no override priority.
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::money::Money;
    /// use bakehouse_core::types::{PriceBehavior, VariantOption};
    ///
    /// let large = VariantOption::new("7", "Size", Money::from_cents(800), PriceBehavior::Override)
    ///     .with_priority(1);
    /// assert_eq!(large.override_priority, Some(1));
    /// ```
    pub fn new(
        id: impl Into<VariantId>,
        group_name: impl Into<String>,
        price_modifier: Money,
        behavior: PriceBehavior,
    ) -> Self {
        VariantOption {
            id: id.into(),
            group_name: group_name.into(),
            name: String::new(),
            price_modifier,
            behavior,
            override_priority: None,
            available_quantity: None,
            stock_status: StockStatus::InStock,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.override_priority = Some(priority);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_stock(mut self, status: StockStatus, available: Option<i64>) -> Self {
        self.stock_status = status;
        self.available_quantity = available;
        self
    }

    /// Checks if the variant can be picked in the UI.
    pub fn is_selectable(&self) -> bool {
        self.stock_status != StockStatus::OutOfStock && self.available_quantity != Some(0)
    }
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// One additive variant and what it added to the price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppliedModifier {
    pub variant_id: VariantId,
    pub group_name: String,
    pub contribution: Money,
}

/// Result of resolving a selection against a base price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBreakdown {
    /// The input base price, unchanged.
    pub base_price: Money,

    pub winning_override: Option<VariantOption>,

    /// Every additive variant, in selection order.
    pub additive_modifiers: Vec<AppliedModifier>,

    pub final_unit_price: Money,
}

impl PriceBreakdown {
    /// Sum of all additive contributions.
    pub fn additive_total(&self) -> Money {
        self.additive_modifiers.iter().map(|m| m.contribution).sum()
    }

    /// A negative unit price means the catalog data is wrong.
    pub fn is_anomalous(&self) -> bool {
        self.final_unit_price.is_negative()
    }
}

// =============================================================================
// Variant Preview
// =============================================================================

/// What selecting one more variant would do to the running price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VariantPreview {
    pub unit_price: Money,
    pub behavior_applied: PriceBehavior,

    /// For overrides this is only a display delta against the snapshot.
    pub addition_amount: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_behavior_default() {
        assert_eq!(PriceBehavior::default(), PriceBehavior::Additive);
        assert_eq!(PriceBehavior::from_tag(Some("OVERRIDE")), PriceBehavior::Additive);
        assert_eq!(PriceBehavior::from_tag(Some("")), PriceBehavior::Additive);
    }

    #[test]
    fn test_stock_status_from_tag() {
        assert_eq!(StockStatus::from_tag(Some("out_of_stock")), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_tag(Some("low_stock")), StockStatus::LowStock);
        assert_eq!(StockStatus::from_tag(Some("discontinued")), StockStatus::InStock);
        assert_eq!(StockStatus::from_tag(None), StockStatus::InStock);
    }

    #[test]
    fn test_variant_id_accepts_numbers_and_strings() {
        let numeric: VariantId = serde_json::from_value(json!(12)).unwrap();
        let text: VariantId = serde_json::from_value(json!("v-12")).unwrap();
        assert_eq!(numeric.as_str(), "12");
        assert_eq!(text.as_str(), "v-12");
        assert_eq!(serde_json::to_value(&numeric).unwrap(), json!("12"));
    }

    #[test]
    fn test_raw_variant_loose_price_field() {
        let raw: RawVariant = serde_json::from_value(json!({
            "id": 1,
            "variant_type": "Size",
            "price_modifier": "1.50",
            "price_behavior": "add"
        }))
        .unwrap();
        assert_eq!(raw.group_name.as_deref(), Some("Size"));
        assert_eq!(raw.price_modifier, RawPrice::Text("1.50".to_string()));

        let raw: RawVariant = serde_json::from_value(json!({ "id": 2, "price_modifier": 2.5 })).unwrap();
        assert!(matches!(raw.price_modifier, RawPrice::Number(_)));

        let raw: RawVariant = serde_json::from_value(json!({ "id": 3, "price_modifier": null })).unwrap();
        assert_eq!(raw.price_modifier, RawPrice::Missing);

        let raw: RawVariant = serde_json::from_value(json!({ "id": 4 })).unwrap();
        assert_eq!(raw.price_modifier, RawPrice::Missing);

        let raw: RawVariant = serde_json::from_value(json!({ "id": 5, "price_modifier": true })).unwrap();
        assert!(matches!(raw.price_modifier, RawPrice::Other(_)));
    }

    #[test]
    fn test_integer_from_value() {
        assert_eq!(integer_from_value(&json!(3)), Some(3));
        assert_eq!(integer_from_value(&json!(-2)), Some(-2));
        assert_eq!(integer_from_value(&json!(1.0)), Some(1));
        assert_eq!(integer_from_value(&json!(" 5 ")), Some(5));
        assert_eq!(integer_from_value(&json!("2.0")), Some(2));
        assert_eq!(integer_from_value(&json!(1.5)), None);
        assert_eq!(integer_from_value(&json!("first")), None);
        assert_eq!(integer_from_value(&json!(u64::MAX)), None);
        assert_eq!(integer_from_value(&json!([1])), None);
    }

    #[test]
    fn test_raw_variant_tolerates_mistyped_fields() {
        let raw: RawVariant = serde_json::from_value(json!({
            "id": 1.5,
            "group_name": 7,
            "name": ["Large"],
            "price_behavior": { "kind": "override" },
            "override_priority": "1",
            "available_quantity": 5.0,
            "stock_status": false
        }))
        .unwrap();
        assert_eq!(raw.id.as_str(), "1.5");
        assert_eq!(raw.group_name.as_deref(), Some("7"));
        assert_eq!(raw.name, None);
        assert_eq!(raw.price_behavior, None);
        assert_eq!(raw.override_priority, Some(1));
        assert_eq!(raw.available_quantity, Some(5));
        assert_eq!(raw.stock_status, None);

        let raw: RawVariant = serde_json::from_value(json!({
            "id": null,
            "override_priority": "soon",
            "available_quantity": null
        }))
        .unwrap();
        assert_eq!(raw.id, VariantId::default());
        assert_eq!(raw.override_priority, None);
        assert_eq!(raw.available_quantity, None);
    }

    #[test]
    fn test_is_selectable() {
        let v = VariantOption::new("1", "Size", Money::zero(), PriceBehavior::Additive);
        assert!(v.is_selectable());
        assert!(!v.clone().with_stock(StockStatus::OutOfStock, None).is_selectable());
        assert!(!v.clone().with_stock(StockStatus::InStock, Some(0)).is_selectable());
        assert!(v.with_stock(StockStatus::LowStock, Some(2)).is_selectable());
    }
}
