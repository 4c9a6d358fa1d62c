//! # Application Events
//!
//! Results sent from background tasks to the main thread. Every variant is a
//! terminal observation; the event handler owns the state transitions.

use alloy::primitives::U256;
use lib_ethereum::ContractSnapshot;

/// Async task results sent to the main thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Batched countdown/price read finished.
    SnapshotResult(Result<ContractSnapshot, String>),
    /// Contract balance read finished (triggered by a snapshot change).
    BalanceResult(Result<U256, String>),
    /// Connected account balance read finished.
    AccountBalanceResult(Result<U256, String>),
    /// `tick()` submission finished; `Ok` carries the transaction hash.
    TickSubmitted(Result<String, String>),
    /// Confirmation wait for `hash` finished.
    TickConfirmed {
        hash: String,
        result: Result<(), String>,
    },
}
