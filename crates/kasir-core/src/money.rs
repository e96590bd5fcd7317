//! # Money Module
//!
//! Provides the `Money` type for handling rupiah amounts safely.
//!
//! ## Whole Units Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RUPIAH HAS NO SUBUNIT IN PRACTICE                                      │
//! │                                                                         │
//! │  Prices, totals, payments and change are all whole rupiah:              │
//! │    22000 × 2 = 44000            → "Rp 44.000"                           │
//! │    50000 − 44000 = 6000         → "Rp 6.000"                            │
//! │                                                                         │
//! │  One i64 per amount. No floats, no fractional digits, ever.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::money::Money;
//!
//! let price = Money::from_rupiah(22000);
//! let line = price.checked_mul_quantity(2).unwrap();
//! assert_eq!(line.to_string(), "Rp 44.000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix printed in front of every amount.
pub const CURRENCY_PREFIX: &str = "Rp ";

/// Separator between groups of three digits.
pub const GROUP_SEPARATOR: char = '.';

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole rupiah.
///
/// ## Where Money is Used
/// ```text
/// MenuItem.unit_price ──► CartLine.line_total ──► Checkout.total
///                                                       │
///                         payment (typed by cashier) ───┤
///                                                       ▼
///                                    TenderOutcome { change | shortfall }
/// ```
///
/// Every amount the till prints goes through [`Money`]'s `Display`
/// implementation, so the summary and the receipt can never disagree on
/// formatting.
///
/// All arithmetic is checked (`checked_add`, `checked_sub`,
/// `checked_mul_quantity`). There are no `+`/`-` operators to overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupiah.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let price = Money::from_rupiah(5000);
    /// assert_eq!(price.rupiah(), 5000);
    /// ```
    #[inline]
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Money(rupiah)
    }

    /// Returns the value in whole rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let unit_price = Money::from_rupiah(6000);
    /// assert_eq!(unit_price.checked_mul_quantity(3), Some(Money::from_rupiah(18000)));
    /// assert_eq!(unit_price.checked_mul_quantity(i64::MAX), None);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Subtracts `other`, returning `None` on overflow.
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the amount the way Indonesian shops print prices.
///
/// ```text
/// 0        → Rp 0
/// 999      → Rp 999
/// 1000     → Rp 1.000
/// 1234567  → Rp 1.234.567
/// ```
///
/// Width and alignment flags are honoured, so `{:>10}` right-aligns the
/// whole `Rp ...` string in a receipt column.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(ch);
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        f.pad(&format!("{CURRENCY_PREFIX}{sign}{grouped}"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
