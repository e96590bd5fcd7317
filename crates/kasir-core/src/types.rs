//! # Domain Types
//!
//! Core domain types used throughout the till.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    ItemCode     │   │    MenuItem     │   │    CartLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  u32, > 0       │   │  code           │   │  item           │       │
//! │  │  typed by the   │   │  name           │   │  quantity       │       │
//! │  │  cashier        │   │  unit_price     │   │  line_total     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                               (see pricing module)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Item Code
// =============================================================================

/// The number a cashier types to pick a menu item.
///
/// Codes are positive. `0` is reserved as the checkout sentinel
/// ([`crate::CHECKOUT_CODE`]) and never names an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCode(u32);

impl ItemCode {
    #[inline]
    pub const fn new(code: u32) -> Self {
        ItemCode(code)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Converts raw cashier input into a code.
///
/// Anything that cannot be an item code (negative, too large) is reported
/// the same way as a code missing from the menu.
impl TryFrom<i64> for ItemCode {
    type Error = CoreError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        u32::try_from(raw)
            .map(ItemCode)
            .map_err(|_| CoreError::ItemNotFound(raw))
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A purchasable item on the menu.
///
/// Immutable once the catalog is built. Configuration files spell the
/// price field `price`:
///
/// ```toml
/// [[menu]]
/// code = 4
/// name = "Es Teh"
/// price = 6000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Code the cashier types.
    pub code: ItemCode,

    /// Display name shown on the menu, summary and receipt.
    pub name: String,

    /// Price of one unit.
    #[serde(rename = "price")]
    pub unit_price: Money,
}

impl MenuItem {
    pub fn new(code: u32, name: impl Into<String>, unit_price: i64) -> Self {
        MenuItem {
            code: ItemCode::new(code),
            name: name.into(),
            unit_price: Money::from_rupiah(unit_price),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
