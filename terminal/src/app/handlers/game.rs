//! # Game Handlers
//!
//! The send-click handler: validation, the single-submission guard, and the
//! `Idle → Submitting` transition.

use std::sync::Arc;

use async_channel::Sender;
use lib_ethereum::units;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NoticeLevel, TickPhase};
use crate::app::tasks;

/// Handle a click on the send button.
///
/// A second submission while one is submitting or confirming is rejected at
/// the state layer; the disabled button is only a convenience on top.
pub(crate) fn handle_send_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let value = {
        let mut state = state.write();

        if state.session.is_none() {
            state.notify(NoticeLevel::Warning, "Connect a wallet before sending.");
            return;
        }

        if state.game.tick.in_flight() {
            state.notify(
                NoticeLevel::Warning,
                "A transaction is already in flight; wait for it to finish.",
            );
            return;
        }

        let value = match units::parse_eth(&state.game.amount) {
            Ok(value) => value,
            Err(e) => {
                state.notify(NoticeLevel::Error, e.to_string());
                return;
            }
        };

        state.game.tick = TickPhase::Submitting;
        value
    }; // Lock released before the task spawns

    tasks::tick::submit_tick(state, event_tx, value);
}
