//! # Override/Additive Resolver
//!
//! Computes a unit price from a base price and a selection of variants.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  selected (in selection order)                                          │
//! │       │                                                                 │
//! │       ├── Override ──► lowest priority number wins                      │
//! │       │                (absent = last, ties = first selected)           │
//! │       │                winner.modifier REPLACES base; losers ignored    │
//! │       │                                                                 │
//! │       └── Additive ──► every modifier added in full                     │
//! │                                                                         │
//! │  final = (winner.modifier or base) + Σ additive modifiers               │
//! │                                                                         │
//! │  No clamping: a negative final price is returned as-is so the caller   │
//! │  can flag the catalog record. Sums that leave the i64 range saturate.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

use crate::money::Money;
use crate::types::{AppliedModifier, PriceBehavior, PriceBreakdown, VariantOption};

/// Sort key for override candidates: explicit priorities before absent
/// ones, then ascending priority number.
fn override_rank(variant: &VariantOption) -> (bool, i64) {
    match variant.override_priority {
        Some(priority) => (false, priority),
        None => (true, 0),
    }
}

/// Picks the winning override.
///
/// `min_by_key` returns the first of several equal minima, which makes
/// ties resolve to the earliest selected variant.
fn winning_override<'a>(overrides: &[&'a VariantOption]) -> Option<&'a VariantOption> {
    overrides.iter().copied().min_by_key(|v| override_rank(v))
}

/// Resolves the final unit price for a selection.
///
/// The resolver assumes every variant is selectable; availability checks
/// belong to the caller (see [`crate::validation::validate_selection`]).
///
/// ## Example
/// ```rust
/// use bakehouse_core::money::Money;
/// use bakehouse_core::pricing::resolve::resolve;
/// use bakehouse_core::types::{PriceBehavior, VariantOption};
///
/// let large = VariantOption::new("1", "Size", Money::from_cents(800), PriceBehavior::Override)
///     .with_priority(1);
/// let candles = VariantOption::new("2", "Extras", Money::from_cents(100), PriceBehavior::Additive);
///
/// let breakdown = resolve(Money::from_cents(500), &[large, candles]);
/// assert_eq!(breakdown.final_unit_price.cents(), 900);
/// ```
pub fn resolve(base_price: Money, selected: &[VariantOption]) -> PriceBreakdown {
    let (overrides, additives): (Vec<&VariantOption>, Vec<&VariantOption>) = selected
        .iter()
        .partition(|v| v.behavior == PriceBehavior::Override);

    let winner = winning_override(&overrides);
    let mut running = winner.map_or(base_price, |w| w.price_modifier);

    let additive_modifiers: Vec<AppliedModifier> = additives
        .iter()
        .map(|v| AppliedModifier {
            variant_id: v.id.clone(),
            group_name: v.group_name.clone(),
            contribution: v.price_modifier,
        })
        .collect();

    let mut saturated = false;
    for modifier in &additive_modifiers {
        running = match running.checked_add(modifier.contribution) {
            Some(sum) => sum,
            None => {
                saturated = true;
                running.saturating_add(modifier.contribution)
            }
        };
    }

    if saturated {
        warn!(
            base = %base_price,
            final_unit_price = %running,
            "Variant modifiers overflowed, unit price saturated"
        );
    }

    debug!(
        base = %base_price,
        winning_override = ?winner.map(|w| w.id.as_str()),
        discarded_overrides = overrides.len().saturating_sub(1),
        additive_count = additive_modifiers.len(),
        final_unit_price = %running,
        "Resolved variant price"
    );

    PriceBreakdown {
        base_price,
        winning_override: winner.cloned(),
        additive_modifiers,
        final_unit_price: running,
    }
}
