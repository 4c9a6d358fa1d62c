//! # Wallet Handlers
//!
//! Session connect/disconnect. Key loading is synchronous (local file or
//! environment variable); only the follow-up balance read goes to a task.

use std::sync::Arc;

use async_channel::Sender;
use lib_ethereum::{session::KEY_ENV, ChainSession};
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NoticeLevel, WalletState};
use crate::app::tasks;

/// Handle the connect button. An empty keyfile path falls back to the
/// `COUNTING_GAME_KEY` environment variable.
pub(crate) fn handle_wallet_connect_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
) {
    let path = {
        let state = state.read();
        state.keyfile_input.trim().to_string()
    };

    let session = if path.is_empty() {
        ChainSession::from_env()
    } else {
        ChainSession::from_keyfile(&path)
    };

    match session {
        Ok(session) => {
            let address = session.address();
            {
                let mut state = state.write();
                state.wallet = Some(WalletState {
                    address: address.to_string(),
                    connector: session.connector().label().to_string(),
                    eth_balance: None,
                });
                state.session = Some(session);
                state.notify(NoticeLevel::Success, format!("Wallet connected: {address}"));
            } // Lock released before the balance task starts

            tasks::contract::fetch_account_balance(state, event_tx, address);
        }
        Err(e) => {
            let source = if path.is_empty() { KEY_ENV } else { "keyfile" };
            tracing::warn!(error = %e, source, "wallet connect failed");
            let mut state = state.write();
            state.notify(NoticeLevel::Error, format!("Failed to connect wallet: {e}"));
        }
    }
}

/// Handle the disconnect button. Drops the session and the wallet view.
pub(crate) fn handle_wallet_disconnect_click(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.session = None;
    state.wallet = None;
    tracing::info!("wallet disconnected");
}
