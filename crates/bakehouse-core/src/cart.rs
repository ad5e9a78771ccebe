//! # Cart Lines
//!
//! Cart math built on the variant price resolver.
//!
//! ## Line Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Same product, same variants  ──► one line, quantities merge            │
//! │  Same product, other variants ──► separate lines                        │
//! │                                                                         │
//! │  "Sourdough / Large"   x2    $9.00   $18.00                             │
//! │  "Sourdough / Small"   x1    $4.00    $4.00                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unit prices are recomputed from the stored selection on every call;
//! the cart never holds a cached price that could drift from its variants.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing::resolve;
use crate::types::{PriceBreakdown, VariantOption};
use crate::validation::{validate_base_price, validate_quantity, validate_selection};
use crate::MAX_ITEM_QUANTITY;

/// A product with its selected variants and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,

    /// Base unit price before variants.
    pub base_price: Money,

    /// Selected variants, in selection order.
    pub variants: Vec<VariantOption>,

    pub quantity: i64,
}

impl CartLine {
    /// Creates a validated cart line.
    ///
    /// ## Errors
    /// - Negative base price or quantity outside 1..=999
    /// - Two variants from one group, or an unavailable variant
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        base_price: Money,
        variants: Vec<VariantOption>,
        quantity: i64,
    ) -> CoreResult<Self> {
        validate_base_price(base_price)?;
        validate_quantity(quantity)?;
        validate_selection(&variants)?;

        Ok(CartLine {
            product_id: product_id.into(),
            name: name.into(),
            base_price,
            variants,
            quantity,
        })
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        resolve(self.base_price, &self.variants)
    }

    pub fn unit_price(&self) -> Money {
        self.breakdown().final_unit_price
    }

    /// Unit price × quantity.
    ///
    /// ## Errors
    /// `CoreError::AmountOutOfRange` when the product overflows.
    pub fn line_total(&self) -> CoreResult<Money> {
        self.unit_price()
            .checked_multiply_quantity(self.quantity)
            .ok_or_else(|| out_of_range("line total"))
    }

    /// True when both lines describe the same product configuration.
    fn same_configuration(&self, other: &CartLine) -> bool {
        self.product_id == other.product_id
            && self.variants.len() == other.variants.len()
            && self
                .variants
                .iter()
                .zip(&other.variants)
                .all(|(a, b)| a.id == b.id)
    }
}

/// Sums the line totals of a set of cart lines.
pub fn cart_subtotal(lines: &[CartLine]) -> CoreResult<Money> {
    lines.iter().try_fold(Money::zero(), |subtotal, line| {
        subtotal
            .checked_add(line.line_total()?)
            .ok_or_else(|| out_of_range("cart subtotal"))
    })
}

/// The shopping cart.
///
/// ## Invariants
/// - No two lines share a product configuration
/// - Every quantity is within 1..=MAX_ITEM_QUANTITY
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a line, merging quantities with an identical configuration.
    pub fn add_line(&mut self, line: CartLine) -> CoreResult<()> {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.same_configuration(&line)) {
            let new_qty = existing.quantity + line.quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(ValidationError::OutOfRange {
                    field: "quantity".to_string(),
                    min: 1,
                    max: MAX_ITEM_QUANTITY,
                }
                .into());
            }
            existing.quantity = new_qty;
            return Ok(());
        }

        self.lines.push(line);
        Ok(())
    }

    /// Sets the quantity of a line; zero removes it.
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_line(index).map(|_| ());
        }
        validate_quantity(quantity)?;

        let line = self.lines.get_mut(index).ok_or_else(|| missing_line(index))?;
        line.quantity = quantity;
        Ok(())
    }

    pub fn remove_line(&mut self, index: usize) -> CoreResult<CartLine> {
        if index >= self.lines.len() {
            return Err(missing_line(index));
        }
        Ok(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> CoreResult<Money> {
        cart_subtotal(&self.lines)
    }
}

fn out_of_range(context: &str) -> CoreError {
    CoreError::AmountOutOfRange {
        context: context.to_string(),
    }
}

fn missing_line(index: usize) -> CoreError {
    CoreError::invalid_argument(format!("cart has no line {}", index))
}
