//! # Service Traits
//!
//! The chain access trait the background tasks talk to. Keeping tasks behind
//! a trait lets the transaction lifecycle be exercised in tests with a mock
//! chain instead of a live RPC endpoint.

use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;
use lib_ethereum::{ChainSession, ContractSnapshot, EthereumError};

/// Chain operations used by the app's background tasks.
#[async_trait]
pub trait ChainService: Send + Sync {
    /// Read the countdown and current price as one batch.
    async fn fetch_snapshot(&self) -> Result<ContractSnapshot, EthereumError>;

    /// Balance of the counting-game contract, in wei.
    async fn fetch_contract_balance(&self) -> Result<U256, EthereumError>;

    /// Balance of an arbitrary account, in wei.
    async fn fetch_account_balance(&self, address: Address) -> Result<U256, EthereumError>;

    /// Submit a value-bearing `tick()` call; returns the transaction hash as
    /// soon as the node accepts the submission.
    async fn submit_tick(&self, session: &ChainSession, value: U256)
        -> Result<B256, EthereumError>;

    /// Wait for a submitted transaction to confirm, bounded by the
    /// configured timeout.
    async fn await_confirmation(&self, hash: B256) -> Result<(), EthereumError>;
}
