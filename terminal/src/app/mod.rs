//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the UI layer, the background tasks and the
//! shared state.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                Main thread (egui)                      │
//! │   on_tick()  - drain events, schedule the watched read │
//! │   handle_*() - user actions (validated synchronously)  │
//! │   State: Arc<RwLock<AppState>> (locks held briefly)    │
//! └──────────────────────┬─────────────────────────────────┘
//!                        │ async_channel (unbounded)
//! ┌──────────────────────▼─────────────────────────────────┐
//! │                Tokio tasks                             │
//! │   fetch_snapshot / fetch_balance / submit_tick         │
//! │   results return as AppEvent messages                  │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! The snapshot read is "watched": `on_tick` re-schedules it whenever the
//! configured poll interval has elapsed, so the countdown and price refresh
//! without user action. Each new snapshot enqueues exactly one contract
//! balance refresh.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use lib_ethereum::ChainConfig;
use parking_lot::RwLock;

use crate::core::ChainService;
use crate::services::chain::ChainClient;

/// Main application orchestrator.
pub struct App {
    /// Thread-safe shared application state.
    pub state: Arc<RwLock<AppState>>,

    /// Receiver for async task results, polled non-blockingly in `on_tick`.
    pub event_rx: Receiver<AppEvent>,

    /// Sender cloned into every spawned task.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the application with a live chain client.
    pub fn new(config: Arc<ChainConfig>) -> Self {
        let chain: Option<Arc<dyn ChainService>> = match ChainClient::new(config.clone()) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::error!(error = %e, "failed to build chain client; reads disabled");
                None
            }
        };
        Self::with_chain(config, chain)
    }

    /// Create the application with an explicit chain service (tests inject a
    /// mock here).
    pub fn with_chain(config: Arc<ChainConfig>, chain: Option<Arc<dyn ChainService>>) -> Self {
        let state = AppState::new(config, chain);
        let (event_tx, event_rx) = unbounded();

        tracing::info!("app state initialized");

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Called every frame: drain async events, then re-schedule the watched
    /// snapshot read if the poll interval has elapsed.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }

        let due = {
            let state = self.state.read();
            state.chain.is_some()
                && !state.game.fetching_snapshot
                && state
                    .game
                    .last_snapshot_poll
                    .map(|at| at.elapsed() >= state.config.snapshot_poll)
                    .unwrap_or(true)
        };
        if due {
            tasks::contract::fetch_snapshot(self.state.clone(), self.event_tx.clone());
        }
    }

    /// Apply one async event result to the state.
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ========== GUI action methods, delegating to handlers ==========

    /// Navigate to the next screen in Tab order.
    pub fn next_screen(&mut self) {
        handlers::navigation::next_screen(self.state.clone());
    }

    /// Navigate to the previous screen in Tab order.
    pub fn previous_screen(&mut self) {
        handlers::navigation::previous_screen(self.state.clone());
    }

    /// Switch to a specific screen.
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), screen);
    }

    /// Connect a wallet from the typed keyfile path (or the key environment
    /// variable when the path is empty).
    pub fn handle_wallet_connect_click(&mut self) {
        handlers::wallet::handle_wallet_connect_click(self.state.clone(), self.event_tx.clone());
    }

    /// Disconnect the wallet session.
    pub fn handle_wallet_disconnect_click(&mut self) {
        handlers::wallet::handle_wallet_disconnect_click(self.state.clone());
    }

    /// Submit a tick with the typed amount.
    pub fn handle_send_click(&mut self) {
        handlers::game::handle_send_click(self.state.clone(), self.event_tx.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloy::primitives::{Address, B256, U256};
    use async_trait::async_trait;
    use lib_ethereum::{ChainSession, ContractSnapshot, EthereumError};

    // Well-known Anvil development account #0.
    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    const ONE_ETH_WEI: u128 = 1_000_000_000_000_000_000;

    fn test_app() -> App {
        App::with_chain(Arc::new(ChainConfig::default()), None)
    }

    fn snapshot(countdown: u64, price_wei: u128) -> ContractSnapshot {
        ContractSnapshot {
            countdown: U256::from(countdown),
            current_price_wei: U256::from(price_wei),
        }
    }

    fn connect_test_session(app: &App) {
        let session =
            ChainSession::from_hex_key(TEST_KEY, lib_ethereum::Connector::Environment)
                .expect("valid development key");
        let mut state = app.state.write();
        state.wallet = Some(WalletState {
            address: session.address().to_string(),
            connector: session.connector().label().to_string(),
            eth_balance: None,
        });
        state.session = Some(session);
    }

    /// Mock chain service for lifecycle tests.
    struct MockChain {
        hash: B256,
        fail_submit: bool,
        fail_confirm: bool,
    }

    impl MockChain {
        fn happy() -> Self {
            Self {
                hash: B256::repeat_byte(0xab),
                fail_submit: false,
                fail_confirm: false,
            }
        }
    }

    #[async_trait]
    impl crate::core::ChainService for MockChain {
        async fn fetch_snapshot(&self) -> Result<ContractSnapshot, EthereumError> {
            Ok(snapshot(42, ONE_ETH_WEI))
        }

        async fn fetch_contract_balance(&self) -> Result<U256, EthereumError> {
            Ok(U256::from(ONE_ETH_WEI))
        }

        async fn fetch_account_balance(&self, _address: Address) -> Result<U256, EthereumError> {
            Ok(U256::ZERO)
        }

        async fn submit_tick(
            &self,
            _session: &ChainSession,
            _value: U256,
        ) -> Result<B256, EthereumError> {
            if self.fail_submit {
                Err(EthereumError::Config("submission rejected".to_string()))
            } else {
                Ok(self.hash)
            }
        }

        async fn await_confirmation(&self, hash: B256) -> Result<(), EthereumError> {
            if self.fail_confirm {
                Err(EthereumError::ConfirmationTimeout { hash, seconds: 180 })
            } else {
                Ok(())
            }
        }
    }

    // ========== Screen tests ==========

    #[test]
    fn screen_all_returns_correct_order() {
        let screens = Screen::all();
        assert_eq!(screens.len(), 2);
        assert_eq!(screens[0], Screen::Game);
        assert_eq!(screens[1], Screen::Wallet);
    }

    #[test]
    fn screen_navigation_wraps_both_ways() {
        let mut app = test_app();
        assert_eq!(app.state.read().current_screen, Screen::Game);

        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Wallet);

        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Game);

        app.previous_screen();
        assert_eq!(app.state.read().current_screen, Screen::Wallet);
    }

    // ========== Initial state ==========

    #[test]
    fn initial_state_is_disconnected_and_pending() {
        let app = test_app();
        let state = app.state.read();

        assert_eq!(state.current_screen, Screen::Game);
        assert!(state.session.is_none());
        assert!(state.wallet.is_none());
        assert!(state.game.snapshot.is_none());
        assert!(!state.game.snapshot_error);
        assert_eq!(state.game.tick, TickPhase::Idle);
        assert!(state.game.countdown_display().is_none());
        assert!(state.game.price_display().is_none());
    }

    // ========== Snapshot events ==========

    #[test]
    fn snapshot_result_updates_display_values() {
        let mut app = test_app();

        app.handle_event(AppEvent::SnapshotResult(Ok(snapshot(42, ONE_ETH_WEI))));

        let state = app.state.read();
        assert_eq!(state.game.countdown_display(), Some("42".to_string()));
        assert_eq!(state.game.price_display(), Some("1 ETH".to_string()));
        assert!(!state.game.fetching_snapshot);
        assert!(!state.game.snapshot_error);
    }

    #[test]
    fn snapshot_error_forces_fallback_rendering() {
        let mut app = test_app();

        // A good snapshot first, then a failed refresh: the display must go
        // back to the fallback instead of rendering stale fields.
        app.handle_event(AppEvent::SnapshotResult(Ok(snapshot(42, ONE_ETH_WEI))));
        app.handle_event(AppEvent::SnapshotResult(Err("rpc unreachable".to_string())));

        let state = app.state.read();
        assert!(state.game.snapshot_error);
        assert!(state.game.countdown_display().is_none());
        assert!(state.game.price_display().is_none());
        assert!(!state.game.fetching_snapshot);
    }

    #[test]
    fn balance_result_formats_contract_balance() {
        let mut app = test_app();

        app.handle_event(AppEvent::BalanceResult(Ok(U256::from(
            1_500_000_000_000_000_000u128,
        ))));

        let state = app.state.read();
        let balance = state.game.balance.as_ref().expect("balance set");
        assert_eq!(balance.formatted, "1.5 ETH");
    }

    #[test]
    fn balance_error_keeps_last_known_value() {
        let mut app = test_app();

        app.handle_event(AppEvent::BalanceResult(Ok(U256::from(ONE_ETH_WEI))));
        app.handle_event(AppEvent::BalanceResult(Err("rpc unreachable".to_string())));

        let state = app.state.read();
        assert_eq!(
            state.game.balance.as_ref().map(|b| b.formatted.clone()),
            Some("1 ETH".to_string())
        );
    }

    // ========== Write lifecycle events ==========

    #[test]
    fn tick_submitted_moves_to_confirming_with_one_notification() {
        let mut app = test_app();

        app.handle_event(AppEvent::TickSubmitted(Ok("0xabc".to_string())));

        let state = app.state.read();
        assert_eq!(
            state.game.tick,
            TickPhase::Confirming {
                hash: "0xabc".to_string()
            }
        );
        assert!(state.game.send_in_flight());
        assert_eq!(state.pending_notifications.len(), 1);
        assert_eq!(state.pending_notifications[0].0, NoticeLevel::Success);
        assert_eq!(state.game.recent.len(), 1);
        assert_eq!(state.game.recent[0].status, TxStatus::Pending);
    }

    #[test]
    fn tick_submission_error_returns_to_idle_and_stays_retryable() {
        let mut app = test_app();

        {
            let mut state = app.state.write();
            state.game.tick = TickPhase::Submitting;
        }
        app.handle_event(AppEvent::TickSubmitted(Err("insufficient funds".to_string())));

        let state = app.state.read();
        assert_eq!(state.game.tick, TickPhase::Idle);
        assert!(!state.game.send_in_flight());
        assert_eq!(state.pending_notifications.len(), 1);
        assert_eq!(state.pending_notifications[0].0, NoticeLevel::Error);
        assert!(state.pending_notifications[0].1.contains("insufficient funds"));
        assert!(state.game.recent.is_empty());
    }

    #[test]
    fn tick_confirmed_reaches_terminal_state() {
        let mut app = test_app();

        app.handle_event(AppEvent::TickSubmitted(Ok("0xabc".to_string())));
        {
            let mut state = app.state.write();
            state.pending_notifications.clear();
        }
        app.handle_event(AppEvent::TickConfirmed {
            hash: "0xabc".to_string(),
            result: Ok(()),
        });

        let state = app.state.read();
        assert_eq!(state.game.tick, TickPhase::Idle);
        assert_eq!(state.pending_notifications.len(), 1);
        assert_eq!(state.pending_notifications[0].0, NoticeLevel::Success);
        assert!(state.pending_notifications[0].1.contains("0xabc"));
        assert_eq!(state.game.recent[0].status, TxStatus::Confirmed);
    }

    #[test]
    fn confirmation_failure_is_a_terminal_error_not_a_stuck_spinner() {
        let mut app = test_app();

        app.handle_event(AppEvent::TickSubmitted(Ok("0xabc".to_string())));
        {
            let mut state = app.state.write();
            state.pending_notifications.clear();
        }
        app.handle_event(AppEvent::TickConfirmed {
            hash: "0xabc".to_string(),
            result: Err("transaction 0xabc unconfirmed after 180s".to_string()),
        });

        let state = app.state.read();
        assert_eq!(state.game.tick, TickPhase::Idle);
        assert!(!state.game.send_in_flight());
        assert_eq!(state.pending_notifications[0].0, NoticeLevel::Error);
        assert_eq!(state.game.recent[0].status, TxStatus::Failed);
    }

    // ========== Send-click guards ==========

    #[test]
    fn send_without_session_is_rejected() {
        let mut app = test_app();
        {
            let mut state = app.state.write();
            state.game.amount = "0.1".to_string();
        }

        app.handle_send_click();

        let state = app.state.read();
        assert_eq!(state.game.tick, TickPhase::Idle);
        assert_eq!(state.pending_notifications.len(), 1);
        assert_eq!(state.pending_notifications[0].0, NoticeLevel::Warning);
    }

    #[test]
    fn second_send_while_in_flight_is_rejected() {
        let mut app = test_app();
        connect_test_session(&app);
        {
            let mut state = app.state.write();
            state.game.amount = "0.1".to_string();
            state.game.tick = TickPhase::Confirming {
                hash: "0xabc".to_string(),
            };
        }

        app.handle_send_click();

        let state = app.state.read();
        // Phase unchanged, no new submission started.
        assert_eq!(
            state.game.tick,
            TickPhase::Confirming {
                hash: "0xabc".to_string()
            }
        );
        assert_eq!(state.pending_notifications.len(), 1);
        assert_eq!(state.pending_notifications[0].0, NoticeLevel::Warning);
    }

    #[test]
    fn invalid_amount_is_rejected_before_submission() {
        let mut app = test_app();
        connect_test_session(&app);

        for bad in ["", "abc", "0"] {
            {
                let mut state = app.state.write();
                state.game.amount = bad.to_string();
                state.pending_notifications.clear();
            }
            app.handle_send_click();

            let state = app.state.read();
            assert_eq!(state.game.tick, TickPhase::Idle, "amount {bad:?}");
            assert_eq!(state.pending_notifications.len(), 1, "amount {bad:?}");
            assert_eq!(state.pending_notifications[0].0, NoticeLevel::Error);
        }
    }

    // ========== Full lifecycle against the mock chain ==========

    #[tokio::test]
    async fn send_click_submits_and_confirms_exactly_once() {
        let mut app = App::with_chain(
            Arc::new(ChainConfig::default()),
            Some(Arc::new(MockChain::happy())),
        );
        connect_test_session(&app);
        {
            let mut state = app.state.write();
            state.game.amount = "0.1".to_string();
        }

        app.handle_send_click();
        assert_eq!(app.state.read().game.tick, TickPhase::Submitting);

        // The task reports the hash, then the confirmation, in order.
        let submitted = app.event_rx.recv().await.expect("submission event");
        let hash = match submitted {
            AppEvent::TickSubmitted(Ok(ref hash)) => hash.clone(),
            other => panic!("expected TickSubmitted(Ok), got {other:?}"),
        };
        app.handle_event(submitted);
        assert_eq!(
            app.state.read().game.tick,
            TickPhase::Confirming { hash: hash.clone() }
        );

        let confirmed = app.event_rx.recv().await.expect("confirmation event");
        match &confirmed {
            AppEvent::TickConfirmed { hash: h, result } => {
                assert_eq!(h, &hash);
                assert!(result.is_ok());
            }
            other => panic!("expected TickConfirmed, got {other:?}"),
        }
        app.handle_event(confirmed);

        let state = app.state.read();
        assert_eq!(state.game.tick, TickPhase::Idle);
        // Exactly one success notification per lifecycle step.
        let successes = state
            .pending_notifications
            .iter()
            .filter(|(level, _)| *level == NoticeLevel::Success)
            .count();
        assert_eq!(successes, 2); // "sent" + "confirmed"
        assert_eq!(state.game.recent[0].status, TxStatus::Confirmed);
        assert!(app.event_rx.is_empty());
    }

    #[tokio::test]
    async fn failed_submission_reports_error_event() {
        let mut app = App::with_chain(
            Arc::new(ChainConfig::default()),
            Some(Arc::new(MockChain {
                fail_submit: true,
                ..MockChain::happy()
            })),
        );
        connect_test_session(&app);
        {
            let mut state = app.state.write();
            state.game.amount = "0.1".to_string();
        }

        app.handle_send_click();

        let event = app.event_rx.recv().await.expect("submission event");
        assert!(matches!(event, AppEvent::TickSubmitted(Err(_))));
        app.handle_event(event);

        let state = app.state.read();
        assert_eq!(state.game.tick, TickPhase::Idle);
        // No confirmation wait is started for a failed submission.
        assert!(app.event_rx.is_empty());
    }

    #[tokio::test]
    async fn on_tick_schedules_the_watched_read() {
        let mut app = App::with_chain(
            Arc::new(ChainConfig::default()),
            Some(Arc::new(MockChain::happy())),
        );

        app.on_tick();
        assert!(app.state.read().game.fetching_snapshot);

        let event = app.event_rx.recv().await.expect("snapshot event");
        assert!(matches!(event, AppEvent::SnapshotResult(Ok(_))));
        app.handle_event(event);

        let state = app.state.read();
        assert_eq!(state.game.countdown_display(), Some("42".to_string()));
        assert_eq!(state.game.price_display(), Some("1 ETH".to_string()));
    }

    #[tokio::test]
    async fn snapshot_update_enqueues_one_balance_refresh() {
        let mut app = App::with_chain(
            Arc::new(ChainConfig::default()),
            Some(Arc::new(MockChain::happy())),
        );

        app.handle_event(AppEvent::SnapshotResult(Ok(snapshot(42, ONE_ETH_WEI))));

        let event = app.event_rx.recv().await.expect("balance event");
        assert!(matches!(event, AppEvent::BalanceResult(Ok(_))));
        app.handle_event(event);

        let state = app.state.read();
        assert_eq!(
            state.game.balance.as_ref().map(|b| b.formatted.clone()),
            Some("1 ETH".to_string())
        );
        // One snapshot, one refresh.
        assert!(app.event_rx.is_empty());
    }

    #[test]
    fn snapshot_error_does_not_enqueue_a_balance_refresh() {
        let mut app = test_app();

        app.handle_event(AppEvent::SnapshotResult(Err("rpc unreachable".to_string())));

        assert!(app.event_rx.is_empty());
        assert!(app.state.read().game.balance.is_none());
    }

    // ========== Render-state hygiene ==========

    #[test]
    fn cloned_state_drops_the_session() {
        let app = test_app();
        connect_test_session(&app);

        let cloned = app.state.read().clone();
        assert!(cloned.session.is_none());
        assert!(cloned.wallet.is_some());
    }
}
