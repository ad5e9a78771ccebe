//! # Price Modifier Normalizer
//!
//! Converts loose backend records into [`VariantOption`]s.
//!
//! ## Degradation Rules
//! ```text
//! ┌──────────────────────────────┬──────────────────────────────────────────┐
//! │  price_modifier as sent      │  normalized modifier                     │
//! ├──────────────────────────────┼──────────────────────────────────────────┤
//! │  "1.50", " 1.50 ", "1.5e0"   │  150¢                                    │
//! │  2.5 / 3                     │  250¢ / 300¢                             │
//! │  null / absent / ""          │  0¢                                      │
//! │  "not-a-number", true, {...} │  0¢  (logged at warn)                    │
//! │  beyond ±$100,000,000.00     │  0¢  (logged at warn)                    │
//! └──────────────────────────────┴──────────────────────────────────────────┘
//! ```
//!
//! Normalization is total: a single bad catalog record must never break
//! pricing for the whole cart.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::warn;

use crate::money::Money;
use crate::types::{PriceBehavior, RawPrice, RawVariant, StockStatus, VariantOption};
use crate::MAX_PRICE_CENTS;

/// Parses a raw price field into money.
///
/// Returns `None` for missing, empty or unparseable values, and for
/// amounts whose magnitude exceeds [`MAX_PRICE_CENTS`]. Callers that
/// must not fail (the normalizer) treat `None` as zero; callers that need
/// a real price (a CLI reading a base price) reject it.
///
/// ## Example
/// ```rust
/// use bakehouse_core::money::Money;
/// use bakehouse_core::pricing::normalize::parse_money;
/// use bakehouse_core::types::RawPrice;
///
/// assert_eq!(parse_money(&RawPrice::from("8.00")), Some(Money::from_cents(800)));
/// assert_eq!(parse_money(&RawPrice::from("eight")), None);
/// ```
pub fn parse_money(raw: &RawPrice) -> Option<Money> {
    parse_decimal(raw)
        .and_then(Money::from_decimal)
        .filter(|money| money.within(MAX_PRICE_CENTS))
}

fn parse_decimal(raw: &RawPrice) -> Option<Decimal> {
    match raw {
        RawPrice::Number(n) => match n.as_i64() {
            Some(i) => Some(Decimal::from(i)),
            None => n.as_f64().and_then(Decimal::from_f64),
        },
        RawPrice::Text(s) => {
            let s = s.trim();
            Decimal::from_str(s)
                .or_else(|_| Decimal::from_scientific(s))
                .ok()
        }
        RawPrice::Missing | RawPrice::Other(_) => None,
    }
}

/// True when the field carried something that should have been a price.
fn is_malformed(raw: &RawPrice) -> bool {
    match raw {
        RawPrice::Missing => false,
        RawPrice::Text(s) if s.trim().is_empty() => false,
        other => parse_money(other).is_none(),
    }
}

/// Normalizes one backend record.
///
/// Identifying fields are copied through; the modifier becomes [`Money`]
/// (zero when it cannot be parsed) and the behavior tag becomes a
/// [`PriceBehavior`].
pub fn normalize(raw: &RawVariant) -> VariantOption {
    if is_malformed(&raw.price_modifier) {
        warn!(
            variant_id = %raw.id,
            raw = ?raw.price_modifier,
            "Unparseable price modifier, treating as zero"
        );
    }

    VariantOption {
        id: raw.id.clone(),
        group_name: raw.group_name.clone().unwrap_or_default(),
        name: raw.name.clone().unwrap_or_default(),
        price_modifier: parse_money(&raw.price_modifier).unwrap_or_default(),
        behavior: PriceBehavior::from_tag(raw.price_behavior.as_deref()),
        override_priority: raw.override_priority,
        available_quantity: raw.available_quantity,
        stock_status: StockStatus::from_tag(raw.stock_status.as_deref()),
    }
}

/// Normalizes a selection, preserving selection order.
pub fn normalize_all(raw: &[RawVariant]) -> Vec<VariantOption> {
    raw.iter().map(normalize).collect()
}
