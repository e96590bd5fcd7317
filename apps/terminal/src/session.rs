//! # Session
//!
//! One customer, start to finish: pick items, see the summary, pay, get a
//! receipt.
//!
//! ## Session Flow
//! ```text
//! welcome
//!    │
//!    ▼
//! ┌─► menu ──► code? ──┬── not a number ──► "Input harus berupa angka."  ──┐
//! │                    ├── unknown ───────► "Kode item tidak ditemukan." ──┤
//! │                    ├── 0 ─────────────► leave loop                     │
//! │                    ▼                                                   │
//! │                  qty? ──┬── invalid ──► "Jumlah tidak valid." ─────────┤
//! │                         ▼                                              │
//! │                  cart.add_item() ──► "✔ 2 x Nasi Goreng ditambahkan" ──┤
//! └────────────────────────────────────────────────────────────────────────┘
//!
//! compute_lines() ──► summary
//!
//! ┌─► amount? ──┬── not a number ──► "Masukkan angka yang valid." ──┐
//! │             ├── short ─────────► "Uang tidak cukup. Kurang .." ──┤
//! │             ▼                                                    │
//! │          accepted ──► receipt ──► done                           │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bad input never ends a session. The only early exits are a closed input
//! stream and console I/O failures.

use std::io::{BufRead, Write};

use kasir_core::{
    compute_lines, evaluate_tender, Cart, Catalog, ItemCode, Money, TenderOutcome, CHECKOUT_CODE,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::clock::Clock;
use crate::config::TerminalConfig;
use crate::error::{SessionError, SessionResult};
use crate::prompt::Terminal;
use crate::receipt::{self, Receipt};

// =============================================================================
// Messages
// =============================================================================

pub const ITEM_PROMPT: &str = "Masukkan kode item (0 untuk Pembayaran): ";
pub const PAYMENT_PROMPT: &str = "Masukkan jumlah bayar: ";

pub const MSG_NOT_A_NUMBER: &str = "Input harus berupa angka.";
pub const MSG_ITEM_NOT_FOUND: &str = "Kode item tidak ditemukan.";
pub const MSG_INVALID_QUANTITY: &str = "Jumlah tidak valid.";
pub const MSG_INVALID_PAYMENT: &str = "Masukkan angka yang valid.";
pub const MSG_CANCELLED: &str = "Input ditutup. Transaksi dibatalkan.";

// =============================================================================
// Session
// =============================================================================

/// A single sale driven over a [`Terminal`].
pub struct Session<'a, R, W, C> {
    config: &'a TerminalConfig,
    catalog: &'a Catalog,
    terminal: Terminal<R, W>,
    clock: C,
}

impl<'a, R, W, C> Session<'a, R, W, C>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    pub fn new(
        config: &'a TerminalConfig,
        catalog: &'a Catalog,
        terminal: Terminal<R, W>,
        clock: C,
    ) -> Self {
        Session {
            config,
            catalog,
            terminal,
            clock,
        }
    }

    /// Runs the sale to completion and returns the printed receipt.
    ///
    /// ## Errors
    /// - `InputClosed`: input ended first; a cancellation notice is printed
    /// - `Io`: the console could not be read or written
    pub fn run(mut self) -> SessionResult<Receipt> {
        match self.transact() {
            Err(SessionError::InputClosed) => {
                warn!("Input closed before the sale finished, transaction cancelled");
                self.terminal.say("")?;
                self.terminal.say(MSG_CANCELLED)?;
                self.terminal.flush()?;
                Err(SessionError::InputClosed)
            }
            result => result,
        }
    }

    fn transact(&mut self) -> SessionResult<Receipt> {
        info!(items = self.catalog.len(), "Session started");
        receipt::write_welcome(self.terminal.output(), &self.config.terminal_name)?;

        let cart = self.select_items()?;
        let checkout = compute_lines(self.catalog, &cart)?;
        info!(
            lines = checkout.lines.len(),
            units = cart.total_quantity(),
            total = checkout.total.rupiah(),
            "Checkout"
        );
        drop(cart);

        receipt::write_summary(self.terminal.output(), &checkout)?;

        let (payment, change) = self.collect_payment(checkout.total)?;

        let printed = Receipt {
            transaction_id: Uuid::new_v4(),
            store_name: self.config.store_name.clone(),
            printed_at: self.clock.now(),
            lines: checkout.lines,
            total: checkout.total,
            payment,
            change,
        };

        self.terminal.say("")?;
        receipt::write_receipt(self.terminal.output(), &printed)?;
        self.terminal.flush()?;

        info!(
            transaction_id = %printed.transaction_id,
            total = printed.total.rupiah(),
            payment = printed.payment.rupiah(),
            change = printed.change.rupiah(),
            "Sale completed"
        );
        Ok(printed)
    }

    /// The selection loop. Returns the cart once the cashier enters `0`.
    fn select_items(&mut self) -> SessionResult<Cart> {
        let catalog = self.catalog;
        let mut cart = Cart::new();

        loop {
            receipt::write_menu(self.terminal.output(), catalog)?;

            let Some(raw_code) = self.terminal.ask_integer(ITEM_PROMPT)? else {
                self.terminal.say(MSG_NOT_A_NUMBER)?;
                continue;
            };

            if raw_code == CHECKOUT_CODE {
                return Ok(cart);
            }

            let item = match ItemCode::try_from(raw_code).and_then(|code| catalog.lookup(code)) {
                Ok(item) => item,
                Err(_) => {
                    debug!(code = raw_code, "Unknown item code");
                    self.terminal.say(MSG_ITEM_NOT_FOUND)?;
                    continue;
                }
            };

            let quantity_prompt = format!("Masukkan jumlah {}: ", item.name);
            let Some(quantity) = self.terminal.ask_integer(&quantity_prompt)? else {
                self.terminal.say(MSG_INVALID_QUANTITY)?;
                continue;
            };

            match cart.add_item(catalog, item.code, quantity) {
                Ok(accumulated) => {
                    debug!(code = %item.code, quantity, accumulated, "Item added");
                    self.terminal
                        .say(format_args!("✔ {} x {} ditambahkan", quantity, item.name))?;
                }
                Err(err) => {
                    debug!(code = %item.code, quantity, error = %err, "Item rejected");
                    self.terminal.say(MSG_INVALID_QUANTITY)?;
                }
            }
        }
    }

    /// The payment loop. Returns `(payment, change)` once a payment covers
    /// `total`. Rejected attempts leave nothing behind.
    fn collect_payment(&mut self, total: Money) -> SessionResult<(Money, Money)> {
        loop {
            let Some(raw_amount) = self.terminal.ask_integer(PAYMENT_PROMPT)? else {
                self.terminal.say(MSG_INVALID_PAYMENT)?;
                continue;
            };

            match evaluate_tender(total, Money::from_rupiah(raw_amount)) {
                Ok(TenderOutcome::Accepted { payment, change }) => return Ok((payment, change)),
                Ok(TenderOutcome::Insufficient { shortfall }) => {
                    debug!(payment = raw_amount, shortfall = shortfall.rupiah(), "Payment short");
                    self.terminal
                        .say(format_args!("Uang tidak cukup. Kurang {shortfall}"))?;
                }
                Err(err) => {
                    debug!(payment = raw_amount, error = %err, "Payment not computable");
                    self.terminal.say(MSG_INVALID_PAYMENT)?;
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{NaiveDate, NaiveDateTime};
    use kasir_core::MenuItem;
    use std::io::Cursor;

    fn printed_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 15)
            .and_then(|d| d.and_hms_opt(14, 3, 9))
            .unwrap()
    }

    /// Runs a whole session over `input`, returning the result and stdout.
    fn run_with(catalog: &Catalog, input: &str) -> (SessionResult<Receipt>, String) {
        let config = TerminalConfig::default();
        let mut output = Vec::new();
        let result = {
            let terminal = Terminal::new(Cursor::new(input.as_bytes().to_vec()), &mut output);
            Session::new(&config, catalog, terminal, FixedClock(printed_at())).run()
        };
        (result, String::from_utf8(output).unwrap())
    }

    fn run_standard(input: &str) -> (SessionResult<Receipt>, String) {
        run_with(&Catalog::standard(), input)
    }

    fn quantities(receipt: &Receipt) -> Vec<(&str, i64)> {
        receipt
            .lines
            .iter()
            .map(|line| (line.item.name.as_str(), line.quantity))
            .collect()
    }

    #[test]
    fn test_end_to_end_sale() {
        let (result, out) = run_standard("1\n2\n0\n50000\n");
        let receipt = result.unwrap();

        assert_eq!(receipt.total, Money::from_rupiah(44000));
        assert_eq!(receipt.payment, Money::from_rupiah(50000));
        assert_eq!(receipt.change, Money::from_rupiah(6000));
        assert_eq!(receipt.printed_at, printed_at());

        assert!(out.starts_with("=== Selamat Datang di ERPE ===\n\n-- MENU --\n"));
        assert!(out.contains("Masukkan jumlah Nasi Goreng: ✔ 2 x Nasi Goreng ditambahkan\n"));
        assert!(out.contains("Nasi Goreng x2 = Rp 44.000\nTOTAL: Rp 44.000\n"));
        assert!(out.contains("Tanggal : 15-Oct-2026 14:03:09\n"));
        assert!(out.contains("Total:                      Rp 44.000\n"));
        assert!(out.contains("Bayar:                      Rp 50.000\n"));
        assert!(out.contains("Kembalian:                   Rp 6.000\n"));
        assert!(out.ends_with("Terima kasih telah berbelanja\n======================================\n"));
    }

    #[test]
    fn test_payment_prompt_then_blank_line_before_receipt() {
        let (_, out) = run_standard("0\n0\n");
        assert!(out.contains(
            "TOTAL: Rp 0\nMasukkan jumlah bayar: \n======================================\n"
        ));
    }

    #[test]
    fn test_same_item_twice_accumulates() {
        let (result, _) = run_standard("4\n2\n4\n3\n0\n30000\n");
        let receipt = result.unwrap();

        assert_eq!(quantities(&receipt), [("Es Teh", 5)]);
        assert_eq!(receipt.total, Money::from_rupiah(30000));
        assert!(receipt.change.is_zero());
    }

    #[test]
    fn test_invalid_quantity_abandons_the_add() {
        let (result, out) = run_standard("2\n1\n2\n-1\n2\nabc\n2\n0\n0\n18000\n");
        let receipt = result.unwrap();

        assert_eq!(quantities(&receipt), [("Mie Goreng", 1)]);
        assert_eq!(out.matches(MSG_INVALID_QUANTITY).count(), 3);
        // Every abandoned add goes back to the menu, not to the quantity prompt
        assert_eq!(out.matches("-- MENU --").count(), 5);
    }

    #[test]
    fn test_non_numeric_and_unknown_codes_are_reported() {
        let (result, out) = run_standard("satu\n\n9\n-3\n5\n1\n0\n5000\n");
        let receipt = result.unwrap();

        assert_eq!(out.matches(MSG_NOT_A_NUMBER).count(), 2);
        assert_eq!(out.matches(MSG_ITEM_NOT_FOUND).count(), 2);
        assert_eq!(quantities(&receipt), [("Air Mineral", 1)]);
    }

    #[test]
    fn test_empty_cart_checks_out_at_zero() {
        let (result, out) = run_standard("0\n0\n");
        let receipt = result.unwrap();

        assert!(receipt.lines.is_empty());
        assert!(receipt.total.is_zero());
        assert!(out.contains("--- Ringkasan Pembelian ---\nTOTAL: Rp 0\n"));
    }

    #[test]
    fn test_insufficient_payment_retries_without_memory() {
        // total 40000 (Mie Goreng ×1 + Nasi Goreng ×1 = 18000 + 22000)
        let (result, out) = run_standard("2\n1\n1\n1\n0\n30000\n30000\nbanyak\n40000\n");
        let receipt = result.unwrap();

        // Two short attempts of 30000 are not added together
        assert_eq!(out.matches("Uang tidak cukup. Kurang Rp 10.000\n").count(), 2);
        assert_eq!(out.matches(MSG_INVALID_PAYMENT).count(), 1);
        assert_eq!(receipt.payment, Money::from_rupiah(40000));
        assert!(receipt.change.is_zero());
    }

    #[test]
    fn test_large_overpayment_is_accepted() {
        let (result, _) = run_standard("5\n1\n0\n9223372036854775807\n");
        let receipt = result.unwrap();
        assert_eq!(receipt.change, Money::from_rupiah(i64::MAX - 5000));
    }

    #[test]
    fn test_unrepresentable_shortfall_reprompts() {
        let (result, out) = run_standard("5\n1\n0\n-9223372036854775808\n5000\n");
        assert!(result.is_ok());
        assert_eq!(out.matches(MSG_INVALID_PAYMENT).count(), 1);
    }

    #[test]
    fn test_lines_print_in_catalog_order() {
        let (result, out) = run_standard("5\n1\n3\n1\n1\n1\n0\n100000\n");
        let receipt = result.unwrap();

        assert_eq!(
            quantities(&receipt),
            [("Nasi Goreng", 1), ("Ayam Goreng", 1), ("Air Mineral", 1)]
        );
        let nasi = out.find("Nasi Goreng x1").unwrap();
        let ayam = out.find("Ayam Goreng x1").unwrap();
        let air = out.find("Air Mineral x1").unwrap();
        assert!(nasi < ayam && ayam < air);
    }

    #[test]
    fn test_closed_input_during_selection_cancels() {
        let (result, out) = run_standard("1\n2\n");
        assert!(matches!(result, Err(SessionError::InputClosed)));
        assert!(out.ends_with(&format!("\n{MSG_CANCELLED}\n")));
        assert!(!out.contains("Ringkasan"));
    }

    #[test]
    fn test_closed_input_during_payment_cancels() {
        let (result, out) = run_standard("1\n1\n0\n100\n");
        assert!(matches!(result, Err(SessionError::InputClosed)));
        assert!(out.contains("Uang tidak cukup. Kurang Rp 21.900\n"));
        assert!(!out.contains("Terima kasih"));
    }

    #[test]
    fn test_configured_catalog_and_names() {
        let catalog = Catalog::new(vec![MenuItem::new(10, "Kopi Tubruk", 4000)]).unwrap();
        let config = TerminalConfig {
            store_name: "WARUNG BU SRI".to_string(),
            terminal_name: "KASIR-2".to_string(),
            menu: catalog.items().to_vec(),
        };
        let mut output = Vec::new();
        let result = {
            let terminal = Terminal::new(Cursor::new(b"1\n10\n3\n0\n12000\n".to_vec()), &mut output);
            Session::new(&config, &catalog, terminal, FixedClock(printed_at())).run()
        };
        let out = String::from_utf8(output).unwrap();

        assert_eq!(result.unwrap().total, Money::from_rupiah(12000));
        assert!(out.starts_with("=== Selamat Datang di KASIR-2 ===\n"));
        assert!(out.contains("10) Kopi Tubruk - Rp 4.000\n"));
        assert!(out.contains(MSG_ITEM_NOT_FOUND));
        assert!(out.contains("       WARUNG BU SRI\n"));
    }
}
