//! # Chain Configuration
//!
//! Network, contract and timing parameters for the counting game. The config
//! is constructed once at startup, validated, and passed down by `Arc` to the
//! session and the background tasks; nothing in this crate reads the
//! environment after startup.

use std::env;
use std::time::Duration;

use alloy::primitives::Address;
use url::Url;

use crate::error::EthereumError;

/// Default network: Sepolia test network.
pub const DEFAULT_NETWORK: &str = "sepolia";
pub const DEFAULT_CHAIN_ID: u64 = 11_155_111;
pub const DEFAULT_RPC_URL: &str = "https://rpc.sepolia.org";

/// Counting-game contract deployment on Sepolia.
pub const DEFAULT_CONTRACT: &str = "0xEE15C3aFd46d442bDd155BD7E9807AAeeE2D1882";

const DEFAULT_SNAPSHOT_POLL_SECS: u64 = 12;
const DEFAULT_CONFIRMATION_POLL_SECS: u64 = 3;
const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 180;

/// Chain configuration for the terminal.
#[derive(Clone, Debug)]
pub struct ChainConfig {
    /// Human-readable network name, shown in the status bar.
    pub network: String,

    /// Expected chain id of the RPC endpoint.
    pub chain_id: u64,

    /// HTTP RPC endpoint URL.
    pub rpc_url: String,

    /// Address of the counting-game contract.
    pub contract_address: Address,

    /// Cadence of the watched countdown/price read.
    pub snapshot_poll: Duration,

    /// Cadence of receipt polling while a transaction confirms.
    pub confirmation_poll: Duration,

    /// Hard ceiling on the confirmation wait; past it the transaction is
    /// reported as failed instead of spinning forever.
    pub confirmation_timeout: Duration,
}

impl ChainConfig {
    /// Load configuration from environment variables, falling back to the
    /// embedded Sepolia deployment for everything that is unset.
    pub fn from_env() -> Result<Self, EthereumError> {
        let network =
            env::var("COUNTING_GAME_NETWORK").unwrap_or_else(|_| DEFAULT_NETWORK.to_string());

        let chain_id = env::var("COUNTING_GAME_CHAIN_ID")
            .unwrap_or_else(|_| DEFAULT_CHAIN_ID.to_string())
            .parse::<u64>()
            .map_err(|e| EthereumError::Config(format!("COUNTING_GAME_CHAIN_ID: {e}")))?;

        let rpc_url =
            env::var("COUNTING_GAME_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());

        let contract_address = env::var("COUNTING_GAME_CONTRACT")
            .unwrap_or_else(|_| DEFAULT_CONTRACT.to_string())
            .parse::<Address>()?;

        let snapshot_poll = duration_from_env("COUNTING_GAME_POLL_SECS", DEFAULT_SNAPSHOT_POLL_SECS)?;
        let confirmation_poll =
            duration_from_env("COUNTING_GAME_CONFIRM_POLL_SECS", DEFAULT_CONFIRMATION_POLL_SECS)?;
        let confirmation_timeout = duration_from_env(
            "COUNTING_GAME_CONFIRM_TIMEOUT_SECS",
            DEFAULT_CONFIRMATION_TIMEOUT_SECS,
        )?;

        Ok(Self {
            network,
            chain_id,
            rpc_url,
            contract_address,
            snapshot_poll,
            confirmation_poll,
            confirmation_timeout,
        })
    }

    /// Validate configuration values. Called once at startup to fail fast.
    pub fn validate(&self) -> Result<(), EthereumError> {
        Url::parse(&self.rpc_url)?;

        if self.chain_id == 0 {
            return Err(EthereumError::Config("chain id must be non-zero".to_string()));
        }

        if self.contract_address == Address::ZERO {
            return Err(EthereumError::Config(
                "contract address must not be the zero address".to_string(),
            ));
        }

        if self.snapshot_poll.is_zero()
            || self.confirmation_poll.is_zero()
            || self.confirmation_timeout.is_zero()
        {
            return Err(EthereumError::Config(
                "poll intervals and the confirmation timeout must be non-zero".to_string(),
            ));
        }

        if self.confirmation_timeout <= self.confirmation_poll {
            return Err(EthereumError::Config(
                "confirmation timeout must exceed the receipt poll interval".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK.to_string(),
            chain_id: DEFAULT_CHAIN_ID,
            rpc_url: DEFAULT_RPC_URL.to_string(),
            contract_address: DEFAULT_CONTRACT.parse().expect("embedded contract address"),
            snapshot_poll: Duration::from_secs(DEFAULT_SNAPSHOT_POLL_SECS),
            confirmation_poll: Duration::from_secs(DEFAULT_CONFIRMATION_POLL_SECS),
            confirmation_timeout: Duration::from_secs(DEFAULT_CONFIRMATION_TIMEOUT_SECS),
        }
    }
}

fn duration_from_env(var: &str, default_secs: u64) -> Result<Duration, EthereumError> {
    let secs = env::var(var)
        .unwrap_or_else(|_| default_secs.to_string())
        .parse::<u64>()
        .map_err(|e| EthereumError::Config(format!("{var}: {e}")))?;
    Ok(Duration::from_secs(secs))
}
