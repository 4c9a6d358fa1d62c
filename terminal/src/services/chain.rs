//! # Chain Client
//!
//! Concrete [`ChainService`] implementation over `lib-ethereum`. All RPC
//! work lives in the library; this wrapper only exists so the tasks depend
//! on the trait and tests can substitute a mock.

use std::sync::Arc;

use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;
use lib_ethereum::{ChainConfig, ChainSession, ContractSnapshot, EthereumClient, EthereumError};

use crate::core::ChainService;

/// Chain client for the configured network.
pub struct ChainClient {
    client: EthereumClient,
}

impl ChainClient {
    /// Connect to the configured RPC endpoint.
    pub fn new(config: Arc<ChainConfig>) -> Result<Self, EthereumError> {
        let client = EthereumClient::new(config)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ChainService for ChainClient {
    async fn fetch_snapshot(&self) -> Result<ContractSnapshot, EthereumError> {
        self.client.get_snapshot().await
    }

    async fn fetch_contract_balance(&self) -> Result<U256, EthereumError> {
        self.client.get_contract_balance().await
    }

    async fn fetch_account_balance(&self, address: Address) -> Result<U256, EthereumError> {
        self.client.get_account_balance(address).await
    }

    async fn submit_tick(
        &self,
        session: &ChainSession,
        value: U256,
    ) -> Result<B256, EthereumError> {
        self.client.submit_tick(session, value).await
    }

    async fn await_confirmation(&self, hash: B256) -> Result<(), EthereumError> {
        self.client.await_confirmation(hash).await
    }
}
