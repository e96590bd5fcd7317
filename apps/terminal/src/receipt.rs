//! # Console Rendering
//!
//! Everything the till prints that is more than a one-line message: the
//! greeting, the menu, the purchase summary and the receipt.
//!
//! ## Receipt Layout
//! ```text
//! ======================================   ◄── RECEIPT_WIDTH (38)
//!        TOKO MAKANAN SEDERHANA
//! ======================================
//! Tanggal : 15-Oct-2026 14:03:09           ◄── captured at print time
//! --------------------------------------
//! Item                 Jumlah      Total   ◄── 20 / 3 / 10 columns
//! --------------------------------------
//! Nasi Goreng            2  Rp 44.000      ◄── names cut at 20 chars
//! --------------------------------------
//! Total:                      Rp 44.000    ◄── 26 / 10 columns
//! Bayar:                      Rp 50.000
//! Kembalian:                   Rp 6.000
//! --------------------------------------
//! Terima kasih telah berbelanja
//! ======================================
//! ```
//!
//! All amounts go through `Money`'s `Display`, the one place currency
//! formatting lives.

use std::io::{self, Write};

use chrono::NaiveDateTime;
use kasir_core::{CartLine, Catalog, Checkout, Money};
use uuid::Uuid;

// =============================================================================
// Layout Constants
// =============================================================================

/// Width of every separator line.
pub const RECEIPT_WIDTH: usize = 38;

/// Item names longer than this are cut, never wrapped.
pub const NAME_WIDTH: usize = 20;

pub const QTY_WIDTH: usize = 3;

pub const AMOUNT_WIDTH: usize = 10;

/// Width of the label column in the Total/Bayar/Kembalian block.
pub const LABEL_WIDTH: usize = 26;

/// Receipt timestamp format, e.g. `15-Oct-2026 14:03:09`.
pub const DATE_FORMAT: &str = "%d-%b-%Y %H:%M:%S";

const STORE_NAME_INDENT: &str = "       ";

// =============================================================================
// Receipt
// =============================================================================

/// A finished sale, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Correlates the printed receipt with the log line for the sale.
    pub transaction_id: Uuid,
    pub store_name: String,
    /// When the receipt was printed (not when the session began).
    pub printed_at: NaiveDateTime,
    pub lines: Vec<CartLine>,
    pub total: Money,
    pub payment: Money,
    pub change: Money,
}

/// Writes the greeting shown once when the till starts.
pub fn write_welcome<W: Write>(out: &mut W, terminal_name: &str) -> io::Result<()> {
    writeln!(out, "=== Selamat Datang di {terminal_name} ===")
}

/// Writes the menu block shown before every item prompt.
pub fn write_menu<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "-- MENU --")?;
    for item in catalog.items() {
        writeln!(out, "{}) {} - {}", item.code, item.name, item.unit_price)?;
    }
    Ok(())
}

/// Writes the purchase summary shown when selection ends.
pub fn write_summary<W: Write>(out: &mut W, checkout: &Checkout) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Ringkasan Pembelian ---")?;
    for line in &checkout.lines {
        writeln!(out, "{} x{} = {}", line.item.name, line.quantity, line.line_total)?;
    }
    writeln!(out, "TOTAL: {}", checkout.total)
}

/// Writes the fixed-layout receipt.
pub fn write_receipt<W: Write>(out: &mut W, receipt: &Receipt) -> io::Result<()> {
    let banner = "=".repeat(RECEIPT_WIDTH);
    let rule = "-".repeat(RECEIPT_WIDTH);

    writeln!(out, "{banner}")?;
    writeln!(out, "{STORE_NAME_INDENT}{}", receipt.store_name)?;
    writeln!(out, "{banner}")?;
    writeln!(out, "Tanggal : {}", receipt.printed_at.format(DATE_FORMAT))?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{:<NAME_WIDTH$} {:>QTY_WIDTH$} {:>AMOUNT_WIDTH$}",
        "Item", "Jumlah", "Total"
    )?;
    writeln!(out, "{rule}")?;

    for line in &receipt.lines {
        writeln!(
            out,
            "{:<NAME_WIDTH$} {:>QTY_WIDTH$} {:>AMOUNT_WIDTH$}",
            truncate_name(&line.item.name, NAME_WIDTH),
            line.quantity,
            line.line_total
        )?;
    }

    writeln!(out, "{rule}")?;
    writeln!(out, "{:<LABEL_WIDTH$} {:>AMOUNT_WIDTH$}", "Total:", receipt.total)?;
    writeln!(out, "{:<LABEL_WIDTH$} {:>AMOUNT_WIDTH$}", "Bayar:", receipt.payment)?;
    writeln!(out, "{:<LABEL_WIDTH$} {:>AMOUNT_WIDTH$}", "Kembalian:", receipt.change)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Terima kasih telah berbelanja")?;
    writeln!(out, "{banner}")
}

/// Cuts `name` to at most `max_chars` characters.
pub fn truncate_name(name: &str, max_chars: usize) -> &str {
    match name.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &name[..byte_index],
        None => name,
    }
}
