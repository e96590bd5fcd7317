//! # Cart
//!
//! Accumulates quantities per item code while the cashier keys in a sale.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Cashier input             Operation              Cart change           │
//! │  ─────────────             ─────────              ───────────           │
//! │                                                                         │
//! │  code 1, qty 2 ──────────► add_item() ──────────► {1: 2}                │
//! │  code 4, qty 1 ──────────► add_item() ──────────► {1: 2, 4: 1}          │
//! │  code 1, qty 3 ──────────► add_item() ──────────► {1: 5, 4: 1}          │
//! │  code 1, qty -1 ─────────► add_item() ──► Err ──► (unchanged)           │
//! │                                                                         │
//! │  NOTE: There is no remove. Entries only ever grow.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::ItemCode;
use crate::validation::validate_quantity;

/// The running selection of one sale.
///
/// ## Invariants
/// - Every key was resolved against the catalog when it was added
/// - Every quantity is > 0
/// - Pricing the whole cart never overflows `i64`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    quantities: BTreeMap<ItemCode, i64>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds `quantity` units of `code`, accumulating onto any earlier adds.
    ///
    /// Either the whole add succeeds or the cart is left exactly as it was.
    ///
    /// ## Returns
    /// - `Ok(new_quantity)` for that code
    /// - `Err(ItemNotFound)` if the code is not on the menu
    /// - `Err(InvalidQuantity)` if `quantity <= 0`
    /// - `Err(AmountOverflow)` if the cart could no longer be priced
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::{Cart, Catalog, ItemCode};
    ///
    /// let catalog = Catalog::standard();
    /// let mut cart = Cart::new();
    ///
    /// assert_eq!(cart.add_item(&catalog, ItemCode::new(4), 2).unwrap(), 2);
    /// assert_eq!(cart.add_item(&catalog, ItemCode::new(4), 3).unwrap(), 5);
    /// assert!(cart.add_item(&catalog, ItemCode::new(4), 0).is_err());
    /// assert_eq!(cart.quantity(ItemCode::new(4)), 5);
    /// ```
    pub fn add_item(
        &mut self,
        catalog: &Catalog,
        code: ItemCode,
        quantity: i64,
    ) -> CoreResult<i64> {
        validate_quantity(quantity).map_err(|_| CoreError::InvalidQuantity { quantity })?;
        catalog.lookup(code)?;

        let new_quantity = self
            .quantity(code)
            .checked_add(quantity)
            .ok_or(CoreError::AmountOverflow)?;
        self.projected_total(catalog, code, new_quantity)?;

        self.quantities.insert(code, new_quantity);
        Ok(new_quantity)
    }

    /// Accumulated quantity for `code` (0 if never added).
    pub fn quantity(&self, code: ItemCode) -> i64 {
        self.quantities.get(&code).copied().unwrap_or(0)
    }

    /// (code, quantity) pairs in ascending code order.
    pub fn entries(&self) -> impl Iterator<Item = (ItemCode, i64)> + '_ {
        self.quantities.iter().map(|(code, qty)| (*code, *qty))
    }

    /// Number of distinct items.
    pub fn item_count(&self) -> usize {
        self.quantities.len()
    }

    /// Total number of units across all items, saturating at `i64::MAX`.
    ///
    /// Free items can be added in quantities whose sum exceeds `i64`.
    pub fn total_quantity(&self) -> i64 {
        self.quantities
            .values()
            .fold(0, |units, qty| units.saturating_add(*qty))
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Cart total as it would be with `code` set to `quantity`.
    fn projected_total(
        &self,
        catalog: &Catalog,
        code: ItemCode,
        quantity: i64,
    ) -> CoreResult<Money> {
        let others = self.entries().filter(|(c, _)| *c != code);

        std::iter::once((code, quantity))
            .chain(others)
            .try_fold(Money::zero(), |total, (c, qty)| {
                let line = catalog
                    .lookup(c)?
                    .unit_price
                    .checked_mul_quantity(qty)
                    .ok_or(CoreError::AmountOverflow)?;
                total.checked_add(line).ok_or(CoreError::AmountOverflow)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MenuItem;

    #[test]
    fn test_cart_add_item() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();

        cart.add_item(&catalog, ItemCode::new(1), 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity(ItemCode::new(1)), 2);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_cart_add_same_item_accumulates() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();

        cart.add_item(&catalog, ItemCode::new(3), 2).unwrap();
        cart.add_item(&catalog, ItemCode::new(3), 7).unwrap();

        assert_eq!(cart.item_count(), 1); // Still one entry
        assert_eq!(cart.quantity(ItemCode::new(3)), 9);
    }

    #[test]
    fn test_cart_rejects_non_positive_quantity() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, ItemCode::new(2), 1).unwrap();
        let before = cart.clone();

        for qty in [0, -1, i64::MIN] {
            let err = cart.add_item(&catalog, ItemCode::new(2), qty).unwrap_err();
            assert!(matches!(err, CoreError::InvalidQuantity { quantity } if quantity == qty));
        }
        assert_eq!(cart, before);
    }

    #[test]
    fn test_cart_rejects_unknown_code() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();

        let err = cart.add_item(&catalog, ItemCode::new(6), 1).unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(6)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_rejects_overflowing_quantity() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_item(&catalog, ItemCode::new(1), 2).unwrap();

        let err = cart
            .add_item(&catalog, ItemCode::new(1), i64::MAX)
            .unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow));
        assert_eq!(cart.quantity(ItemCode::new(1)), 2);
    }

    #[test]
    fn test_cart_rejects_overflowing_total_across_lines() {
        let catalog = Catalog::new(vec![
            MenuItem::new(1, "Emas", i64::MAX / 2),
            MenuItem::new(2, "Perak", i64::MAX / 2),
        ])
        .unwrap();
        let mut cart = Cart::new();

        cart.add_item(&catalog, ItemCode::new(1), 1).unwrap();
        cart.add_item(&catalog, ItemCode::new(2), 1).unwrap();
        // Each line fits on its own, the sum does not
        let err = cart.add_item(&catalog, ItemCode::new(2), 1).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow));
        assert_eq!(cart.quantity(ItemCode::new(2)), 1);
    }

    #[test]
    fn test_free_items_never_overflow() {
        let catalog = Catalog::new(vec![MenuItem::new(1, "Kerupuk", 0)]).unwrap();
        let mut cart = Cart::new();

        cart.add_item(&catalog, ItemCode::new(1), i64::MAX).unwrap();
        assert!(cart.add_item(&catalog, ItemCode::new(1), 1).is_err());
    }

    #[test]
    fn test_total_quantity_saturates() {
        let catalog = Catalog::new(vec![
            MenuItem::new(1, "Kerupuk", 0),
            MenuItem::new(2, "Sambal", 0),
        ])
        .unwrap();
        let mut cart = Cart::new();

        cart.add_item(&catalog, ItemCode::new(1), i64::MAX).unwrap();
        cart.add_item(&catalog, ItemCode::new(2), i64::MAX).unwrap();
        assert_eq!(cart.total_quantity(), i64::MAX);
    }
}
