//! # Ethereum Client
//!
//! Read provider plus the submit/confirm path for the counting-game
//! contract. Reads share one [`RootProvider`]; the write path builds a
//! wallet-backed provider per call so nonce, gas and chain id are filled by
//! alloy and the signing key stays inside the [`ChainSession`].

use std::sync::Arc;

use alloy::primitives::{Address, B256, U256};
use alloy::providers::{Provider, ProviderBuilder, RootProvider};
use alloy::rpc::types::eth::{TransactionInput, TransactionRequest};
use alloy::transports::http::reqwest::Client;
use alloy::transports::http::Http;
use url::Url;

use crate::config::ChainConfig;
use crate::contract::{self, ContractSnapshot};
use crate::error::EthereumError;
use crate::session::ChainSession;

pub type HttpProvider = RootProvider<Http<Client>>;

/// HTTP client for the configured chain endpoint.
pub struct EthereumClient {
    config: Arc<ChainConfig>,
    provider: HttpProvider,
}

impl EthereumClient {
    /// Connect to the configured RPC endpoint.
    pub fn new(config: Arc<ChainConfig>) -> Result<Self, EthereumError> {
        let rpc_url = Url::parse(&config.rpc_url)?;
        let provider = ProviderBuilder::new().on_http(rpc_url);
        Ok(Self { config, provider })
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Issue one argument-less `uint256` read against the contract.
    async fn call_uint(&self, signature: &str) -> Result<U256, EthereumError> {
        let input = TransactionInput::new(contract::call_data(signature));
        let tx = TransactionRequest::default()
            .to(self.config.contract_address)
            .input(input);
        let data = self.provider.call(&tx).await?;
        contract::decode_uint(&data)
    }

    /// Read the countdown and the current price as one batch.
    ///
    /// Both calls are issued together and the snapshot is only produced once
    /// both have resolved, so a snapshot never mixes values from different
    /// refresh rounds.
    pub async fn get_snapshot(&self) -> Result<ContractSnapshot, EthereumError> {
        let (countdown, current_price) = tokio::join!(
            self.call_uint(contract::COUNTDOWN),
            self.call_uint(contract::CURRENT_PRICE),
        );

        let snapshot = ContractSnapshot {
            countdown: countdown?,
            current_price_wei: current_price?,
        };
        tracing::debug!(
            countdown = %snapshot.countdown,
            current_price_wei = %snapshot.current_price_wei,
            "contract snapshot refreshed"
        );
        Ok(snapshot)
    }

    /// Balance of the counting-game contract, in wei.
    pub async fn get_contract_balance(&self) -> Result<U256, EthereumError> {
        Ok(self.provider.get_balance(self.config.contract_address).await?)
    }

    /// Balance of an arbitrary account, in wei.
    pub async fn get_account_balance(&self, address: Address) -> Result<U256, EthereumError> {
        Ok(self.provider.get_balance(address).await?)
    }

    /// Submit a value-bearing `tick()` call.
    ///
    /// Returns as soon as the node accepts the transaction; confirmation is
    /// a separate step so the caller can surface the hash immediately.
    pub async fn submit_tick(
        &self,
        session: &ChainSession,
        value: U256,
    ) -> Result<B256, EthereumError> {
        let rpc_url = Url::parse(&self.config.rpc_url)?;
        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(session.wallet().clone())
            .on_http(rpc_url);

        let input = TransactionInput::new(contract::call_data(contract::TICK));
        let tx = TransactionRequest::default()
            .from(session.address())
            .to(self.config.contract_address)
            .value(value)
            .input(input);

        let pending = provider.send_transaction(tx).await?;
        let hash = *pending.tx_hash();

        tracing::info!(%hash, %value, from = %session.address(), "tick submitted");
        Ok(hash)
    }

    /// Wait for a submitted transaction to be confirmed.
    ///
    /// Polls for the receipt at the configured cadence under a hard timeout;
    /// a missing receipt past the window and a reverted receipt are both
    /// failures.
    pub async fn await_confirmation(&self, hash: B256) -> Result<(), EthereumError> {
        let poll = self.config.confirmation_poll;
        let window = self.config.confirmation_timeout;

        let wait = async {
            loop {
                if let Some(receipt) = self.provider.get_transaction_receipt(hash).await? {
                    if receipt.status() {
                        tracing::info!(%hash, "transaction confirmed");
                        return Ok(());
                    }
                    return Err(EthereumError::TransactionReverted(hash));
                }
                tokio::time::sleep(poll).await;
            }
        };

        match tokio::time::timeout(window, wait).await {
            Ok(result) => result,
            Err(_) => Err(EthereumError::ConfirmationTimeout {
                hash,
                seconds: window.as_secs(),
            }),
        }
    }
}
