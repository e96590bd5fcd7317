//! # Pricing Engine
//!
//! Turns a cart into priced lines, and a payment into change or shortfall.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Cart {1: 2, 4: 1} ──► compute_lines() ──► Checkout                     │
//! │                                              ├── Nasi Goreng x2 44.000  │
//! │                                              ├── Es Teh      x1  6.000  │
//! │                                              └── total          50.000  │
//! │                                                                         │
//! │  payment 40000 ──► evaluate_tender() ──► Insufficient { 10.000 }        │
//! │  payment 60000 ──► evaluate_tender() ──► Accepted { change 10.000 }     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Line Order
//! Lines come out in catalog definition order, whatever order the cashier
//! keyed the items in. Two identical carts always print identically.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::MenuItem;

// =============================================================================
// Cart Line
// =============================================================================

/// One priced line of a checkout. Derived from the cart, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: i64,
    /// `item.unit_price × quantity`
    pub line_total: Money,
}

// =============================================================================
// Checkout
// =============================================================================

/// The priced result of a finished selection.
///
/// There is no tax or discount layer, so the subtotal is the total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Checkout {
    pub lines: Vec<CartLine>,
    pub total: Money,
}

impl Checkout {
    /// Sum of line totals. Same as [`Checkout::total`] for a checkout built
    /// by [`compute_lines`].
    ///
    /// ## Errors
    /// `AmountOverflow` if the lines do not sum within `i64`.
    pub fn subtotal(&self) -> CoreResult<Money> {
        self.lines
            .iter()
            .try_fold(Money::zero(), |acc, line| acc.checked_add(line.line_total))
            .ok_or(CoreError::AmountOverflow)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Prices every cart entry and sums the result.
///
/// ## Errors
/// - `ItemNotFound` if the cart holds a code the catalog does not know
///   (a cart built against a different catalog)
/// - `AmountOverflow` if a line or the total does not fit
///
/// ## Example
/// ```rust
/// use kasir_core::{compute_lines, Cart, Catalog, ItemCode, Money};
///
/// let catalog = Catalog::standard();
/// let mut cart = Cart::new();
/// cart.add_item(&catalog, ItemCode::new(5), 3).unwrap(); // Air Mineral
/// cart.add_item(&catalog, ItemCode::new(1), 1).unwrap(); // Nasi Goreng
///
/// let checkout = compute_lines(&catalog, &cart).unwrap();
/// assert_eq!(checkout.lines[0].item.name, "Nasi Goreng");
/// assert_eq!(checkout.total, Money::from_rupiah(37000));
/// ```
pub fn compute_lines(catalog: &Catalog, cart: &Cart) -> CoreResult<Checkout> {
    let mut positioned = Vec::with_capacity(cart.item_count());

    for (code, quantity) in cart.entries() {
        let position = catalog
            .position(code)
            .ok_or(CoreError::ItemNotFound(i64::from(code.get())))?;
        let item = &catalog.items()[position];
        let line_total = item
            .unit_price
            .checked_mul_quantity(quantity)
            .ok_or(CoreError::AmountOverflow)?;

        positioned.push((
            position,
            CartLine {
                item: item.clone(),
                quantity,
                line_total,
            },
        ));
    }

    positioned.sort_by_key(|(position, _)| *position);
    let mut checkout = Checkout {
        lines: positioned.into_iter().map(|(_, line)| line).collect(),
        total: Money::zero(),
    };
    checkout.total = checkout.subtotal()?;

    Ok(checkout)
}

// =============================================================================
// Tender
// =============================================================================

/// What happens to one payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenderOutcome {
    /// Payment covers the total; the sale can close.
    Accepted { payment: Money, change: Money },
    /// Payment falls short by `shortfall`; ask again.
    Insufficient { shortfall: Money },
}

/// Compares one payment against the total.
///
/// Each call stands alone: a rejected payment is not remembered, and the
/// next attempt is judged on its own amount.
///
/// ## Errors
/// `AmountOverflow` when the shortfall is not representable (only for
/// absurdly negative payments).
///
/// ## Example
/// ```rust
/// use kasir_core::{evaluate_tender, Money, TenderOutcome};
///
/// let total = Money::from_rupiah(40000);
/// assert_eq!(
///     evaluate_tender(total, Money::from_rupiah(30000)).unwrap(),
///     TenderOutcome::Insufficient { shortfall: Money::from_rupiah(10000) }
/// );
/// ```
pub fn evaluate_tender(total: Money, payment: Money) -> CoreResult<TenderOutcome> {
    if payment < total {
        let shortfall = total.checked_sub(payment).ok_or(CoreError::AmountOverflow)?;
        return Ok(TenderOutcome::Insufficient { shortfall });
    }

    let change = payment.checked_sub(total).ok_or(CoreError::AmountOverflow)?;
    Ok(TenderOutcome::Accepted { payment, change })
}

// =============================================================================
// Unit Tests
// =============================================================================
