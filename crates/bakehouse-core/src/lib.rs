//! # bakehouse-core: Pure Business Logic for the Bakehouse Storefront
//!
//! This crate holds the pricing rules shared by every storefront screen:
//! product detail, cart and checkout all ask it what a selection costs.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bakehouse Storefront                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Mobile UI                                    │   │
//! │  │    Product ──► Variant picker ──► Cart ──► Checkout            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshot of selected variants          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bakehouse-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │   cart    │  │ shipping  │  │   │
//! │  │   │ RawVariant│  │ normalize │  │ CartLine  │  │   Zone    │  │   │
//! │  │   │ Breakdown │  │  resolve  │  │ subtotal  │  │   Quote   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CACHING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Variant records, breakdowns, previews
//! - [`money`] - Money type with integer arithmetic
//! - [`pricing`] - Normalizer, override/additive resolver, preview helper
//! - [`cart`] - Cart line totals built on the resolver
//! - [`shipping`] - Pickup/delivery fees and free-shipping thresholds
//! - [`validation`] - Caller-side checks before pricing
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bakehouse_core::money::Money;
//! use bakehouse_core::pricing::price_selection;
//! use bakehouse_core::types::{RawPrice, RawVariant};
//!
//! let sprinkles = RawVariant {
//!     id: "1".into(),
//!     price_modifier: RawPrice::Text("1.50".to_string()),
//!     price_behavior: Some("add".to_string()),
//!     ..RawVariant::default()
//! };
//!
//! let breakdown = price_selection(Money::from_cents(500), &[sprinkles]);
//! assert_eq!(breakdown.final_unit_price.cents(), 650);
//! ```

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod shipping;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

/// Maximum quantity of a single line in the cart.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Decimal places of the minor currency unit.
pub const MONEY_SCALE: u32 = 2;

/// Largest magnitude accepted for a catalog amount: $100,000,000.00.
///
/// Parsed amounts beyond it are treated as malformed, which keeps every
/// sum and line total well inside `i64`.
pub const MAX_PRICE_CENTS: i64 = 10_000_000_000;
