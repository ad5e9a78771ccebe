//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Cake 5.00 + sprinkles 1.10 + candles 1.20 in floating point:           │
//! │    5 + 1.1 + 1.2 = 7.300000000000001  ❌ WRONG!                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    500 + 110 + 120 = 730 cents, every time                              │
//! │                                                                         │
//! │  Catalog strings ("1.10") are parsed as decimals and quantised to      │
//! │  cents exactly once, at the normalization boundary.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bakehouse_core::money::Money;
//!
//! let price = Money::from_cents(725); // $7.25
//! let total = price + Money::from_cents(200);
//! assert_eq!(total.to_string(), "$9.25");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use ts_rs::TS;

use crate::MONEY_SCALE;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: a selection can legitimately resolve below zero when
///   catalog data is broken, and preview deltas are often negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  RawVariant.price_modifier ──► normalize ──► VariantOption.modifier    │
/// │                                                     │                   │
/// │  base price ─────────────────────────────► resolve ─┴─► final unit     │
/// │                                                           │             │
/// │                              CartLine.line_total ◄────────┘             │
/// │                              ShippingQuote.fee                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Quantises a decimal amount to whole cents.
    ///
    /// Midpoints round away from zero (`1.005` → `1.01`, `-1.005` → `-1.01`).
    /// Returns `None` when the amount does not fit in an `i64` cent count.
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::money::Money;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let amount = Decimal::from_str("1.50").unwrap();
    /// assert_eq!(Money::from_decimal(amount), Some(Money::from_cents(150)));
    /// ```
    pub fn from_decimal(amount: Decimal) -> Option<Self> {
        let rounded = amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        let cents = rounded.checked_mul(Decimal::ONE_HUNDRED)?;
        cents.to_i64().map(Money)
    }

    /// Returns the value as a 2-decimal-place amount, for presentation.
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, MONEY_SCALE)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity, or `None` when the product does not
    /// fit in an `i64` cent count.
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(725); // one large cake
    /// assert_eq!(unit_price.checked_multiply_quantity(3), Some(Money::from_cents(2175)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, clamping at the `i64` bounds.
    #[inline]
    pub const fn saturating_add(&self, other: Money) -> Self {
        Money(self.0.saturating_add(other.0))
    }

    /// Subtracts `other`, clamping at the `i64` bounds.
    #[inline]
    pub const fn saturating_sub(&self, other: Money) -> Self {
        Money(self.0.saturating_sub(other.0))
    }

    /// True when the magnitude is at most `limit_cents`.
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::money::Money;
    ///
    /// assert!(Money::from_cents(-500).within(500));
    /// assert!(!Money::from_cents(i64::MIN).within(i64::MAX));
    /// ```
    #[inline]
    pub const fn within(&self, limit_cents: i64) -> bool {
        self.0.unsigned_abs() <= limit_cents.unsigned_abs()
    }

    /// Formats the amount with the given currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(725).format_with("€"), "€7.25");
    /// assert_eq!(Money::from_cents(-100).format_with("€"), "-€1.00");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }

    /// Formats the amount as a variant hint with an explicit sign.
    ///
    /// Zero has no sign. Used next to selectable options in the picker.
    ///
    /// ## Example
    /// ```rust
    /// use bakehouse_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(250).format_signed("$"), "+$2.50");
    /// assert_eq!(Money::from_cents(-100).format_signed("$"), "-$1.00");
    /// assert_eq!(Money::zero().format_signed("$"), "$0.00");
    /// ```
    pub fn format_signed(&self, symbol: &str) -> String {
        if self.is_positive() {
            format!("+{}", self.format_with(symbol))
        } else {
            self.format_with(symbol)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with a dollar sign, for logs and debugging.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Summing saturates at the `i64` bounds rather than overflowing.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |total, m| total.saturating_add(m))
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(725)), "$7.25");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(-50)), "-$0.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_from_decimal_quantises_once() {
        assert_eq!(Money::from_decimal(dec!(1.50)), Some(Money::from_cents(150)));
        assert_eq!(Money::from_decimal(dec!(0.75)), Some(Money::from_cents(75)));
        assert_eq!(Money::from_decimal(dec!(8)), Some(Money::from_cents(800)));
        assert_eq!(Money::from_decimal(dec!(1.005)), Some(Money::from_cents(101)));
        assert_eq!(Money::from_decimal(dec!(-1.005)), Some(Money::from_cents(-101)));
        assert_eq!(Money::from_decimal(dec!(1.004)), Some(Money::from_cents(100)));
    }

    #[test]
    fn test_from_decimal_overflow() {
        assert_eq!(Money::from_decimal(Decimal::MAX), None);
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(Money::from_cents(925).to_decimal(), dec!(9.25));
        assert_eq!(Money::from_cents(-100).to_decimal(), dec!(-1.00));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_checked_and_saturating() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(max.saturating_add(Money::from_cents(1)), max);
        assert_eq!(Money::from_cents(i64::MIN).saturating_sub(Money::from_cents(1)).cents(), i64::MIN);

        assert_eq!(Money::from_cents(725).checked_multiply_quantity(3), Some(Money::from_cents(2175)));
        assert_eq!(Money::from_cents(1_000_000_000_000_000_000).checked_multiply_quantity(999), None);
    }

    #[test]
    fn test_sum() {
        let parts = [Money::from_cents(150), Money::from_cents(75), Money::from_cents(-25)];
        let by_ref: Money = parts.iter().sum();
        let by_value: Money = parts.into_iter().sum();
        assert_eq!(by_ref.cents(), 200);
        assert_eq!(by_value, by_ref);
        assert_eq!(std::iter::empty::<Money>().sum::<Money>(), Money::zero());

        let huge = [Money::from_cents(i64::MAX), Money::from_cents(1)];
        assert_eq!(huge.iter().sum::<Money>().cents(), i64::MAX);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().cents(), 100);
    }

    #[test]
    fn test_float_drift_avoided() {
        // 5.00 + 1.10 + 1.20 drifts in f64; integer cents do not
        let total = Money::from_cents(500) + Money::from_cents(110) + Money::from_cents(120);
        assert_eq!(total.cents(), 730);
        assert_eq!(total.to_string(), "$7.30");
    }

    #[test]
    fn test_serializes_as_plain_cents() {
        let json = serde_json::to_string(&Money::from_cents(725)).unwrap();
        assert_eq!(json, "725");
        let back: Money = serde_json::from_str("-100").unwrap();
        assert_eq!(back.cents(), -100);
    }
}
