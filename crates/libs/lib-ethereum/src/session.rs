//! # Chain Session
//!
//! Holds the signing key for the connected account. A session is created when
//! a key is loaded from a keyfile or the environment and dropped on
//! disconnect; the terminal's render state only ever sees the address, never
//! the key material.

use std::fs;
use std::path::Path;

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy_signer_local::PrivateKeySigner;

use crate::error::EthereumError;

/// Environment variable holding a hex-encoded private key.
pub const KEY_ENV: &str = "COUNTING_GAME_KEY";

/// Where the session's signing key came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connector {
    /// Key loaded from a keyfile on disk.
    Keyfile,
    /// Key taken from the `COUNTING_GAME_KEY` environment variable.
    Environment,
}

impl Connector {
    pub fn label(&self) -> &'static str {
        match self {
            Connector::Keyfile => "keyfile",
            Connector::Environment => "environment",
        }
    }
}

/// A connected signing session.
#[derive(Clone)]
pub struct ChainSession {
    wallet: EthereumWallet,
    address: Address,
    connector: Connector,
}

impl ChainSession {
    /// Load a session from a keyfile.
    ///
    /// The file holds a hex private key, either bare or JSON-quoted (the
    /// format some wallet exporters write).
    pub fn from_keyfile<P: AsRef<Path>>(path: P) -> Result<Self, EthereumError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let key = if contents.trim_start().starts_with('"') {
            serde_json::from_str::<String>(contents.trim())?
        } else {
            contents.trim().to_string()
        };
        Self::from_hex_key(&key, Connector::Keyfile)
    }

    /// Load a session from the `COUNTING_GAME_KEY` environment variable.
    pub fn from_env() -> Result<Self, EthereumError> {
        let key = std::env::var(KEY_ENV)
            .map_err(|_| EthereumError::Config(format!("{KEY_ENV} is not set")))?;
        Self::from_hex_key(&key, Connector::Environment)
    }

    /// Build a session from a hex-encoded private key.
    pub fn from_hex_key(key: &str, connector: Connector) -> Result<Self, EthereumError> {
        let signer = key
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|e| EthereumError::InvalidKey(e.to_string()))?;
        let address = signer.address();
        let wallet = EthereumWallet::from(signer);

        tracing::info!(%address, connector = connector.label(), "chain session created");

        Ok(Self {
            wallet,
            address,
            connector,
        })
    }

    /// The wallet used to sign outgoing transactions.
    pub fn wallet(&self) -> &EthereumWallet {
        &self.wallet
    }

    /// Address of the connected account.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Where the key came from.
    pub fn connector(&self) -> Connector {
        self.connector
    }
}

impl std::fmt::Debug for ChainSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The wallet holds key material; only the address is printable.
        f.debug_struct("ChainSession")
            .field("address", &self.address)
            .field("connector", &self.connector)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known Anvil development account #0.
    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn hex_key_yields_expected_address() {
        let session = ChainSession::from_hex_key(TEST_KEY, Connector::Environment)
            .expect("valid development key");
        assert_eq!(session.address(), TEST_ADDRESS.parse::<Address>().unwrap());
        assert_eq!(session.connector(), Connector::Environment);
    }

    #[test]
    fn key_without_prefix_is_accepted() {
        let session = ChainSession::from_hex_key(&TEST_KEY[2..], Connector::Keyfile)
            .expect("bare hex key");
        assert_eq!(session.address(), TEST_ADDRESS.parse::<Address>().unwrap());
    }

    #[test]
    fn invalid_key_is_rejected() {
        assert!(ChainSession::from_hex_key("0xdeadbeef", Connector::Keyfile).is_err());
        assert!(ChainSession::from_hex_key("", Connector::Keyfile).is_err());
    }

    #[test]
    fn debug_output_hides_key_material() {
        let session =
            ChainSession::from_hex_key(TEST_KEY, Connector::Keyfile).expect("valid key");
        let debug = format!("{session:?}");
        assert!(debug.contains("address"));
        assert!(!debug.to_lowercase().contains(&TEST_KEY[2..10]));
    }
}
