//! # Contract Read Tasks
//!
//! The watched snapshot read and the balance refreshes derived from it.

use std::sync::Arc;
use std::time::Instant;

use alloy::primitives::Address;
use async_channel::Sender;
use parking_lot::RwLock;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::AppState;

/// Fetch the countdown/price snapshot.
///
/// Skips silently if a fetch is already in flight (prevents task pileup when
/// the node is slow) or no chain client is available.
pub(crate) fn fetch_snapshot(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let chain = {
        let mut state = state.write();
        if state.game.fetching_snapshot {
            return;
        }
        let Some(chain) = state.chain.clone() else {
            return;
        };
        state.game.fetching_snapshot = true;
        state.game.last_snapshot_poll = Some(Instant::now());
        chain
    }; // Lock released here

    spawn(async move {
        let result = chain.fetch_snapshot().await.map_err(|e| e.to_string());
        let _ = event_tx.send(AppEvent::SnapshotResult(result)).await;
    });
}

/// Fetch the contract's ETH balance. Triggered by the snapshot handler, one
/// refresh per snapshot change.
pub(crate) fn fetch_balance(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let chain = {
        let state = state.read();
        state.chain.clone()
    };
    let Some(chain) = chain else {
        return;
    };

    spawn(async move {
        let result = chain
            .fetch_contract_balance()
            .await
            .map_err(|e| e.to_string());
        let _ = event_tx.send(AppEvent::BalanceResult(result)).await;
    });
}

/// Fetch the connected account's ETH balance (wallet screen display).
pub(crate) fn fetch_account_balance(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    address: Address,
) {
    let chain = {
        let state = state.read();
        state.chain.clone()
    };
    let Some(chain) = chain else {
        return;
    };

    spawn(async move {
        let result = chain
            .fetch_account_balance(address)
            .await
            .map_err(|e| e.to_string());
        let _ = event_tx.send(AppEvent::AccountBalanceResult(result)).await;
    });
}
