//! # Terminal Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the terminal                           │
//! │                                                                         │
//! │  Bad cashier input ──► message + re-prompt (never an Err here)         │
//! │                                                                         │
//! │  stdin closed ───────► SessionError::InputClosed ──► cancel, exit 1    │
//! │  console I/O failure ► SessionError::Io ───────────► anyhow, exit 1    │
//! │  bad config file ────► ConfigError ────────────────► anyhow, exit 1    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use kasir_core::CoreError;
use thiserror::Error;

/// Failures that end a session before a receipt is printed.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Standard input reached end-of-file while a prompt was waiting.
    ///
    /// ## When This Occurs
    /// - Ctrl-D at a prompt
    /// - Input piped from a file that runs out before payment
    #[error("Input stream closed before the transaction finished")]
    InputClosed,

    /// Reading stdin or writing stdout failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A domain failure that no prompt can recover from.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read or parsed, or a value has the wrong type.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The configured menu breaks a catalog rule.
    #[error("Invalid menu in configuration: {0}")]
    Catalog(#[source] CoreError),
}

/// Convenience alias for session results.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SessionError::InputClosed.to_string(),
            "Input stream closed before the transaction finished"
        );

        let err: SessionError = CoreError::AmountOverflow.into();
        assert_eq!(err.to_string(), "Amount is too large to compute");
    }
}
