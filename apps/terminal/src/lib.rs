//! # Kasir Terminal Library
//!
//! Console front end of the Kasir till. Everything here is I/O around
//! `kasir-core`: reading the cashier's lines, printing menus and receipts,
//! loading configuration, logging.
//!
//! ## Module Organization
//! ```text
//! kasir_terminal/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── TerminalConfig (file + env layers)
//! ├── session.rs      ◄─── Selection loop, payment loop
//! ├── prompt.rs       ◄─── Terminal: one prompt, one line
//! ├── receipt.rs      ◄─── Menu, summary and receipt rendering
//! ├── clock.rs        ◄─── Receipt timestamp source
//! └── error.rs        ◄─── SessionError, ConfigError
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod prompt;
pub mod receipt;
pub mod session;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use clock::{Clock, SystemClock};
pub use config::TerminalConfig;
pub use error::{ConfigError, SessionError, SessionResult};
pub use prompt::Terminal;
pub use receipt::Receipt;
pub use session::Session;

/// Runs one sale on the process console.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ──► stderr, RUST_LOG or "warn"                   │
/// │  2. Load Configuration ──► KASIR_CONFIG / kasir.toml / defaults         │
/// │  3. Build Catalog ───────► validated once, borrowed by the session      │
/// │  4. Run Session ─────────► stdin/stdout until the receipt is printed    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Exit Status
/// - `0` after a receipt
/// - `1` when input closes mid-sale (the session prints a notice)
/// - `Err` for configuration and console I/O failures
pub fn run() -> anyhow::Result<ExitCode> {
    init_tracing();

    let config = TerminalConfig::load().context("Could not load configuration")?;
    let catalog = config.catalog()?;
    info!(
        store = %config.store_name,
        terminal = %config.terminal_name,
        items = catalog.len(),
        "Starting Kasir terminal"
    );

    let terminal = Terminal::new(io::stdin().lock(), io::stdout().lock());
    let status = exit_status(Session::new(&config, &catalog, terminal, SystemClock).run())?;
    Ok(ExitCode::from(status))
}

/// Process status after a completed sale.
pub const EXIT_SALE_COMPLETED: u8 = 0;

/// Process status when input closed before the sale finished.
pub const EXIT_SALE_CANCELLED: u8 = 1;

/// Maps the outcome of a session to a process exit status.
///
/// A cancelled sale is an expected outcome, not an error. Console I/O
/// failures and domain errors are passed up with context.
pub fn exit_status<T>(outcome: SessionResult<T>) -> anyhow::Result<u8> {
    match outcome {
        Ok(_) => Ok(EXIT_SALE_COMPLETED),
        Err(SessionError::InputClosed) => Ok(EXIT_SALE_CANCELLED),
        Err(err) => Err(err).context("Session aborted"),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the receipt on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=kasir_terminal=debug` - every selection and payment attempt
/// - `RUST_LOG=info` - session start, checkout and completed sales
/// - Default: WARN (cancelled sessions only)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(true)
        .init();
}
