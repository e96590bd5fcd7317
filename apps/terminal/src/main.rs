//! # Kasir Terminal Entry Point
//!
//! ```text
//! $ kasir
//! === Selamat Datang di ERPE ===
//!
//! -- MENU --
//! 1) Nasi Goreng - Rp 22.000
//! ...
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    kasir_terminal::run()
}
