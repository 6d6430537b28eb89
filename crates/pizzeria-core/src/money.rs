//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64 prices:                                                       │
//! │    1.10 + 2.20 = 3.3000000000000003  ❌ WRONG!                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    110 cents + 220 cents = 330 cents                                    │
//! │    Subtotals accumulate exactly; rounding happens once, at tax time     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizzeria_core::money::Money;
//!
//! let extra = Money::from_cents(100);          // 1.00
//! let three = extra.multiply_quantity(3);      // 3.00
//! let with_size = three + Money::from_cents(1500);
//! assert_eq!(with_size.cents(), 1800);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (euro cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: saturating arithmetic, so absurd prices or
///   quantities pin at the `i64` limits instead of panicking or wrapping
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money Flows
/// ```text
/// Product.unit_price ──► OrderLine.line_total ──► subtotal
///                                                   │
/// PizzaSize.surcharge ──────────────────────────────┤
///                                                   ▼
///                                      (subtotal + surcharge) × 1.21
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates the tax owed on this amount, rounded half-up to whole cents.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`. The +5000 rounds
    /// half a cent up.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Money;
    /// use pizzeria_core::types::TaxRate;
    ///
    /// let base = Money::from_cents(2000);         // 20.00
    /// let tax = base.calculate_tax(TaxRate::from_bps(2100));
    /// assert_eq!(tax.cents(), 420);                // 4.20
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 keeps the intermediate product from overflowing
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Returns this amount with tax added on top.
    ///
    /// ```rust
    /// use pizzeria_core::money::Money;
    /// use pizzeria_core::types::TaxRate;
    ///
    /// let gross = Money::from_cents(1800).with_tax(TaxRate::from_bps(2100));
    /// assert_eq!(gross.cents(), 2178);
    /// ```
    pub fn with_tax(&self, rate: TaxRate) -> Money {
        *self + self.calculate_tax(rate)
    }

    /// Multiplies a unit price by a quantity, saturating at the `i64` limits.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Formats the amount with a currency symbol.
    ///
    /// ```rust
    /// use pizzeria_core::money::{Money, SymbolPosition};
    ///
    /// let total = Money::from_cents(2178);
    /// assert_eq!(total.format_with("€", SymbolPosition::Suffix), "21.78€");
    /// assert_eq!(total.format_with("$", SymbolPosition::Prefix), "$21.78");
    /// ```
    pub fn format_with(&self, symbol: &str, position: SymbolPosition) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let amount = format!("{}.{:02}", self.units().abs(), self.cents_part());
        match position {
            SymbolPosition::Prefix => format!("{sign}{symbol}{amount}"),
            SymbolPosition::Suffix => format!("{sign}{amount}{symbol}"),
        }
    }
}

/// Where the currency symbol goes when an amount is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Prefix,
    /// European style: `21.78€`
    #[default]
    Suffix,
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering without a currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
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
        Money(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
