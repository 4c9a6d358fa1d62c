//! # Tick Transaction Task
//!
//! One spawned task drives the whole write lifecycle: submit, report the
//! hash, await confirmation, report the terminal state. Because the
//! confirmation wait only ever starts inside the task that observed its own
//! successful submission, exactly one wait exists per submission.

use std::sync::Arc;

use alloy::primitives::U256;
use async_channel::Sender;
use parking_lot::RwLock;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::AppState;

/// Submit a value-bearing `tick()` and follow it to a terminal state.
///
/// Preflight (session, guard, amount validation) has already happened in the
/// click handler; this task assumes the phase is `Submitting`.
pub(crate) fn submit_tick(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, value: U256) {
    let (chain, session) = {
        let state = state.read();
        let Some(chain) = state.chain.clone() else {
            return;
        };
        let Some(session) = state.session.clone() else {
            return;
        };
        (chain, session)
    };

    spawn(async move {
        let hash = match chain.submit_tick(&session, value).await {
            Ok(hash) => hash,
            Err(e) => {
                let _ = event_tx
                    .send(AppEvent::TickSubmitted(Err(e.to_string())))
                    .await;
                return;
            }
        };

        let hash_str = hash.to_string();
        let _ = event_tx
            .send(AppEvent::TickSubmitted(Ok(hash_str.clone())))
            .await;

        let result = chain
            .await_confirmation(hash)
            .await
            .map_err(|e| e.to_string());
        let _ = event_tx
            .send(AppEvent::TickConfirmed {
                hash: hash_str,
                result,
            })
            .await;
    });
}
