//! # Common Error Types
//!
//! Consolidated error handling for the terminal application.
//!
//! Errors are categorized by their source:
//!
//! - **Chain**: RPC and contract errors (reads, submission, confirmation)
//! - **Wallet**: session errors (key loading, missing session)
//! - **State**: invalid state transitions
//! - **Validation**: user input errors (amount format, missing fields)

use thiserror::Error;

/// Application-wide error type for the terminal.
#[derive(Debug, Error)]
pub enum AppError {
    /// Chain access error: RPC transport, contract call, submission or
    /// confirmation failure.
    #[error("chain error: {0}")]
    Chain(String),

    /// Wallet/session error: keyfile not found, malformed key, no session.
    #[error("wallet error: {0}")]
    Wallet(String),

    /// Invalid application state transition.
    #[error("state error: {0}")]
    State(String),

    /// User input validation error.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenience alias used throughout the terminal crate.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<lib_ethereum::EthereumError> for AppError {
    fn from(err: lib_ethereum::EthereumError) -> Self {
        use lib_ethereum::EthereumError as E;
        match err {
            E::InvalidKey(_) | E::Io(_) => AppError::Wallet(err.to_string()),
            E::InvalidAmount(_) => AppError::Validation(err.to_string()),
            _ => AppError::Chain(err.to_string()),
        }
    }
}
