//! Error types for chain access.

use alloy::primitives::B256;
use thiserror::Error;

/// Errors produced by the chain library.
///
/// Transport, URL and hex failures are carried transparently from the
/// underlying crates; the remaining variants are domain conditions the
/// terminal reacts to individually (a rejected submission is retryable, a
/// confirmation timeout is terminal for that transaction).
#[derive(Debug, Error)]
pub enum EthereumError {
    /// Configuration error (missing or malformed value).
    #[error("configuration error: {0}")]
    Config(String),

    /// The signing key could not be parsed.
    #[error("invalid signing key: {0}")]
    InvalidKey(String),

    /// A user-entered amount could not be converted to wei.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A contract call returned fewer bytes than one ABI word.
    #[error("malformed call return: expected a 32-byte word, got {0} bytes")]
    MalformedCallReturn(usize),

    /// The transaction was mined but reverted.
    #[error("transaction {0} reverted")]
    TransactionReverted(B256),

    /// No receipt appeared within the configured confirmation window.
    #[error("transaction {hash} unconfirmed after {seconds}s")]
    ConfirmationTimeout { hash: B256, seconds: u64 },

    /// Keyfile I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Keyfile JSON error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Hex parsing error (addresses, hashes).
    #[error(transparent)]
    FromHex(#[from] alloy::primitives::hex::FromHexError),

    /// URL parsing error.
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),

    /// RPC transport error.
    #[error(transparent)]
    Rpc(#[from] alloy::rpc::json_rpc::RpcError<alloy::transports::TransportErrorKind>),
}
