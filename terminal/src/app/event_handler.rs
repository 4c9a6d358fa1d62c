//! # Event Handler
//!
//! Processes [`AppEvent`] messages from background tasks and applies the
//! corresponding state transitions. Write locks are taken per event and
//! released before anything else runs.

use crate::app::state::{BalanceView, NoticeLevel, TickPhase, TransactionItem, TxStatus};
use crate::app::{tasks, App, AppEvent};

/// Trait for the event handling implementation.
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::SnapshotResult(result) => self.handle_snapshot_result(result),
            AppEvent::BalanceResult(result) => self.handle_balance_result(result),
            AppEvent::AccountBalanceResult(result) => self.handle_account_balance_result(result),
            AppEvent::TickSubmitted(result) => self.handle_tick_submitted(result),
            AppEvent::TickConfirmed { hash, result } => self.handle_tick_confirmed(hash, result),
        }
    }
}

impl App {
    fn handle_snapshot_result(
        &mut self,
        result: Result<lib_ethereum::ContractSnapshot, String>,
    ) {
        let refreshed = {
            let mut state = self.state.write();
            state.game.fetching_snapshot = false;
            match result {
                Ok(snapshot) => {
                    tracing::debug!(
                        countdown = %snapshot.countdown,
                        current_price_wei = %snapshot.current_price_wei,
                        "snapshot updated"
                    );
                    state.game.snapshot = Some(snapshot);
                    state.game.snapshot_error = false;
                    true
                }
                Err(e) => {
                    tracing::warn!(error = %e, "snapshot read failed");
                    state.game.snapshot_error = true;
                    false
                }
            }
        };

        // Snapshot updated -> enqueue one balance refresh. This is the only
        // edge that triggers the derived balance read.
        if refreshed {
            tasks::contract::fetch_balance(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_balance_result(&mut self, result: Result<alloy::primitives::U256, String>) {
        let mut state = self.state.write();
        match result {
            Ok(wei) => {
                let view = BalanceView::from_wei(wei);
                tracing::debug!(balance = %view.formatted, "contract balance updated");
                state.game.balance = Some(view);
            }
            Err(e) => {
                // Keep showing the last known balance.
                tracing::warn!(error = %e, "contract balance read failed");
            }
        }
    }

    fn handle_account_balance_result(&mut self, result: Result<alloy::primitives::U256, String>) {
        let mut state = self.state.write();
        match result {
            Ok(wei) => {
                if let Some(wallet) = state.wallet.as_mut() {
                    wallet.eth_balance = Some(BalanceView::from_wei(wei));
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "account balance read failed");
            }
        }
    }

    fn handle_tick_submitted(&mut self, result: Result<String, String>) {
        let mut state = self.state.write();
        match result {
            Ok(hash) => {
                let amount = state.game.amount.clone();
                state.game.recent.insert(
                    0,
                    TransactionItem {
                        hash: hash.clone(),
                        amount: format!("{amount} ETH"),
                        status: TxStatus::Pending,
                        timestamp: chrono::Utc::now().timestamp(),
                    },
                );
                state.game.tick = TickPhase::Confirming { hash };
                state.notify(NoticeLevel::Success, "Transaction sent!");
            }
            Err(e) => {
                tracing::warn!(error = %e, "tick submission failed");
                state.game.tick = TickPhase::Idle;
                state.notify(NoticeLevel::Error, format!("Transaction failed: {e}"));
            }
        }
    }

    fn handle_tick_confirmed(&mut self, hash: String, result: Result<(), String>) {
        let mut state = self.state.write();
        state.game.tick = TickPhase::Idle;

        let status = match &result {
            Ok(()) => TxStatus::Confirmed,
            Err(_) => TxStatus::Failed,
        };
        if let Some(item) = state.game.recent.iter_mut().find(|t| t.hash == hash) {
            item.status = status;
        }

        match result {
            Ok(()) => {
                state.notify(
                    NoticeLevel::Success,
                    format!("Transaction {hash} is confirmed."),
                );
            }
            Err(e) => {
                tracing::warn!(%hash, error = %e, "confirmation failed");
                state.notify(NoticeLevel::Error, format!("Confirmation failed: {e}"));
            }
        }
    }
}
