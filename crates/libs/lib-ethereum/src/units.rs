//! Decimal ETH <-> wei conversions for user-entered amounts and display.

use alloy::primitives::{
    utils::{format_ether, parse_ether},
    U256,
};

use crate::error::EthereumError;

/// Convert a user-entered decimal ETH amount into wei.
///
/// Rejects empty input and zero; the input field only guarantees the text is
/// numeric-ish, so the real validation happens here.
pub fn parse_eth(amount: &str) -> Result<U256, EthereumError> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(EthereumError::InvalidAmount("amount is empty".to_string()));
    }

    let wei = parse_ether(trimmed).map_err(|e| EthereumError::InvalidAmount(e.to_string()))?;
    if wei.is_zero() {
        return Err(EthereumError::InvalidAmount(
            "amount must be greater than zero".to_string(),
        ));
    }

    Ok(wei)
}

/// Format a wei value as a trimmed decimal ETH string.
///
/// `1e18` wei renders as `"1"`, not `"1.000000000000000000"`; callers append
/// the `" ETH"` suffix where they display it.
pub fn format_eth(wei: U256) -> String {
    let formatted = format_ether(wei);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
