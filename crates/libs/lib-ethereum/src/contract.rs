//! # Counting-Game Contract ABI
//!
//! The contract surface is three functions, none taking arguments:
//! `countdown() -> uint256`, `currentPrice() -> uint256` and
//! `tick() payable`. Calldata is therefore just the 4-byte selector, and
//! every read returns a single big-endian ABI word.

use alloy::primitives::{keccak256, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::error::EthereumError;

/// Solidity signatures of the contract functions.
pub const COUNTDOWN: &str = "countdown()";
pub const CURRENT_PRICE: &str = "currentPrice()";
pub const TICK: &str = "tick()";

/// Latest pair of on-chain values read from the contract. Replaced wholesale
/// on every refresh; there is no identity beyond "latest".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSnapshot {
    /// Remaining ticks until the game ends.
    pub countdown: U256,
    /// Price of one tick, in wei.
    pub current_price_wei: U256,
}

/// Derive the 4-byte function selector for a Solidity signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Build calldata for an argument-less function call.
pub fn call_data(signature: &str) -> Bytes {
    Bytes::copy_from_slice(&selector(signature))
}

/// Decode a single `uint256` return value from raw call output.
pub fn decode_uint(data: &[u8]) -> Result<U256, EthereumError> {
    if data.len() < 32 {
        return Err(EthereumError::MalformedCallReturn(data.len()));
    }
    let mut word = [0u8; 32];
    word.copy_from_slice(&data[..32]);
    Ok(U256::from_be_bytes(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_are_four_bytes_and_distinct() {
        let countdown = selector(COUNTDOWN);
        let price = selector(CURRENT_PRICE);
        let tick = selector(TICK);

        assert_ne!(countdown, price);
        assert_ne!(countdown, tick);
        assert_ne!(price, tick);
    }

    #[test]
    fn call_data_is_selector_only() {
        assert_eq!(call_data(TICK).len(), 4);
        assert_eq!(call_data(TICK).as_ref(), selector(TICK));
    }

    #[test]
    fn decode_uint_round_trips() {
        let value = U256::from(42u64);
        let word = value.to_be_bytes::<32>();
        assert_eq!(decode_uint(&word).expect("32-byte word"), value);
    }

    #[test]
    fn decode_uint_rejects_short_output() {
        assert!(decode_uint(&[0u8; 16]).is_err());
        assert!(decode_uint(&[]).is_err());
    }

    #[test]
    fn decode_uint_ignores_trailing_bytes() {
        let mut data = U256::from(7u64).to_be_bytes::<32>().to_vec();
        data.extend_from_slice(&[0xff; 8]);
        assert_eq!(decode_uint(&data).expect("padded word"), U256::from(7u64));
    }
}
