//! # Shipping Quotes
//!
//! Fulfilment fees for checkout: pickup at the bakery or delivery into a
//! shipping zone, with an optional free-shipping threshold per zone.
//!
//! ```text
//! subtotal $18.00, zone "Downtown" fee $3.50, free over $25.00
//!   ──► fee $3.50, "Add $7.00 more for free delivery"
//! subtotal $30.00, same zone
//!   ──► fee $0.00, free_shipping_applied
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentMethod {
    #[default]
    Pickup,
    Delivery,
}

/// A delivery area with its flat fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingZone {
    pub id: String,
    pub name: String,
    pub fee: Money,

    /// Subtotal at or above which delivery is free.
    #[serde(default)]
    pub free_shipping_threshold: Option<Money>,
}

/// Fee charged for fulfilment, with the free-shipping hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingQuote {
    pub fee: Money,
    pub free_shipping_applied: bool,

    /// How much more the customer must add to unlock free delivery.
    pub amount_to_free_shipping: Option<Money>,
}

impl ShippingQuote {
    fn free() -> Self {
        ShippingQuote {
            fee: Money::zero(),
            free_shipping_applied: false,
            amount_to_free_shipping: None,
        }
    }
}

/// Quotes the fulfilment fee for a cart subtotal.
///
/// ## Rules
/// - Pickup is always free
/// - Delivery needs a zone and charges its fee
/// - The fee is waived when `subtotal >= free_shipping_threshold`
///
/// ## Example
/// ```rust
/// use bakehouse_core::money::Money;
/// use bakehouse_core::shipping::{quote_shipping, FulfillmentMethod, ShippingZone};
///
/// let zone = ShippingZone {
///     id: "dt".to_string(),
///     name: "Downtown".to_string(),
///     fee: Money::from_cents(350),
///     free_shipping_threshold: Some(Money::from_cents(2500)),
/// };
///
/// let quote = quote_shipping(Money::from_cents(1800), FulfillmentMethod::Delivery, Some(&zone)).unwrap();
/// assert_eq!(quote.fee.cents(), 350);
/// assert_eq!(quote.amount_to_free_shipping, Some(Money::from_cents(700)));
/// ```
pub fn quote_shipping(
    subtotal: Money,
    method: FulfillmentMethod,
    zone: Option<&ShippingZone>,
) -> CoreResult<ShippingQuote> {
    let zone = match method {
        FulfillmentMethod::Pickup => return Ok(ShippingQuote::free()),
        FulfillmentMethod::Delivery => zone.ok_or(CoreError::ZoneRequired)?,
    };

    let quote = match zone.free_shipping_threshold {
        Some(threshold) if subtotal >= threshold => ShippingQuote {
            fee: Money::zero(),
            free_shipping_applied: true,
            amount_to_free_shipping: None,
        },
        Some(threshold) => ShippingQuote {
            fee: zone.fee,
            free_shipping_applied: false,
            amount_to_free_shipping: Some(threshold.saturating_sub(subtotal)),
        },
        None => ShippingQuote {
            fee: zone.fee,
            free_shipping_applied: false,
            amount_to_free_shipping: None,
        },
    };

    Ok(quote)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn downtown(threshold: Option<i64>) -> ShippingZone {
        ShippingZone {
            id: "dt".to_string(),
            name: "Downtown".to_string(),
            fee: Money::from_cents(350),
            free_shipping_threshold: threshold.map(Money::from_cents),
        }
    }

    #[test]
    fn test_pickup_is_free() {
        let q = quote_shipping(Money::from_cents(100), FulfillmentMethod::Pickup, None).unwrap();
        assert_eq!(q.fee, Money::zero());
        assert!(!q.free_shipping_applied);
    }

    #[test]
    fn test_delivery_requires_zone() {
        let err = quote_shipping(Money::from_cents(100), FulfillmentMethod::Delivery, None).unwrap_err();
        assert!(matches!(err, CoreError::ZoneRequired));
    }

    #[test]
    fn test_threshold_boundary() {
        let zone = downtown(Some(2500));

        let below = quote_shipping(Money::from_cents(2499), FulfillmentMethod::Delivery, Some(&zone)).unwrap();
        assert_eq!(below.fee.cents(), 350);
        assert_eq!(below.amount_to_free_shipping, Some(Money::from_cents(1)));

        let at = quote_shipping(Money::from_cents(2500), FulfillmentMethod::Delivery, Some(&zone)).unwrap();
        assert_eq!(at.fee, Money::zero());
        assert!(at.free_shipping_applied);
        assert_eq!(at.amount_to_free_shipping, None);
    }

    #[test]
    fn test_zone_without_threshold() {
        let zone = downtown(None);
        let q = quote_shipping(Money::from_cents(100_000), FulfillmentMethod::Delivery, Some(&zone)).unwrap();
        assert_eq!(q.fee.cents(), 350);
        assert_eq!(q.amount_to_free_shipping, None);
    }
}
