//! # Validation Module
//!
//! Caller-side checks that run before a selection is priced.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Variant picker (mobile UI)                                   │
//! │  ├── Disables out-of-stock options                                     │
//! │  └── Replaces the selection within a group                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── One variant per group                                             │
//! │  ├── Every variant selectable                                          │
//! │  └── Sane base price and quantity                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: pricing::resolve (assumes all of the above)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The resolver never calls into this module; pricing an invalid selection
//! still produces exactly what the inputs say.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::VariantOption;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product base price.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free samples)
///
/// ## Example
/// ```rust
/// use bakehouse_core::money::Money;
/// use bakehouse_core::validation::validate_base_price;
///
/// assert!(validate_base_price(Money::from_cents(500)).is_ok());
/// assert!(validate_base_price(Money::zero()).is_ok());
/// assert!(validate_base_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_base_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "base_price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a variant selection before pricing.
///
/// ## Rules
/// - At most one variant per `group_name` (ungrouped variants are exempt)
/// - Every variant must be selectable
///
/// ## Example
/// ```rust
/// use bakehouse_core::money::Money;
/// use bakehouse_core::types::{PriceBehavior, VariantOption};
/// use bakehouse_core::validation::validate_selection;
///
/// let small = VariantOption::new("1", "Size", Money::from_cents(400), PriceBehavior::Override);
/// let large = VariantOption::new("2", "Size", Money::from_cents(800), PriceBehavior::Override);
///
/// assert!(validate_selection(&[small.clone()]).is_ok());
/// assert!(validate_selection(&[small, large]).is_err());
/// ```
pub fn validate_selection(selected: &[VariantOption]) -> CoreResult<()> {
    let mut groups = HashSet::new();

    for variant in selected {
        if !variant.is_selectable() {
            return Err(CoreError::VariantUnavailable {
                variant_id: variant.id.to_string(),
            });
        }

        if !variant.group_name.is_empty() && !groups.insert(variant.group_name.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "variant group".to_string(),
                value: variant.group_name.clone(),
            }
            .into());
        }
    }

    Ok(())
}
