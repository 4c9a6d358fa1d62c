//! # Application State Types
//!
//! All state for the terminal: screens, the wallet session, the contract
//! snapshot, the derived balance view and the transaction state machine.

use std::sync::Arc;
use std::time::Instant;

use alloy::primitives::U256;
use lib_ethereum::{units, ChainConfig, ChainSession, ContractSnapshot};

use crate::core::ChainService;

/// Application screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Counting game: countdown, price, contract balance and the send form.
    Game,
    /// Wallet session management (connect/disconnect).
    Wallet,
}

impl Screen {
    /// All screens in Tab navigation order.
    pub fn all() -> &'static [Screen] {
        &[Screen::Game, Screen::Wallet]
    }

    /// Screen title for header display.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Game => "Counting Game",
            Screen::Wallet => "Wallet",
        }
    }
}

/// Severity of a queued toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Write-action state machine.
///
/// `Idle → Submitting → Confirming → Idle`; submission and confirmation
/// failures both return to `Idle` after queueing an error notification, so
/// no permanent loading state is reachable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TickPhase {
    #[default]
    Idle,
    /// Transaction handed to the node, waiting for the hash.
    Submitting,
    /// Hash received, waiting for the receipt.
    Confirming { hash: String },
}

impl TickPhase {
    /// True while a transaction is submitting or confirming. Gates both the
    /// send button and the state-machine guard against double submission.
    pub fn in_flight(&self) -> bool {
        !matches!(self, TickPhase::Idle)
    }
}

/// Formatted view of an on-chain balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceView {
    /// Raw amount in wei.
    pub wei: U256,
    /// Display string, e.g. `"1.5 ETH"`.
    pub formatted: String,
}

impl BalanceView {
    pub fn from_wei(wei: U256) -> Self {
        let formatted = format!("{} ETH", units::format_eth(wei));
        Self { wei, formatted }
    }
}

/// Terminal status of a tracked submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Pending,
    Confirmed,
    Failed,
}

impl TxStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TxStatus::Pending => "Pending",
            TxStatus::Confirmed => "Confirmed",
            TxStatus::Failed => "Failed",
        }
    }
}

/// Recent submission shown on the game screen. In-memory only.
#[derive(Debug, Clone)]
pub struct TransactionItem {
    pub hash: String,
    pub amount: String,
    pub status: TxStatus,
    pub timestamp: i64,
}

/// Game screen state: the read loop and the write lifecycle.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Amount to send with the tick, as typed (decimal ETH).
    pub amount: String,
    /// Latest contract snapshot, replaced wholesale on every refresh.
    pub snapshot: Option<ContractSnapshot>,
    /// Last snapshot read failed; the UI must fall back to the placeholder.
    pub snapshot_error: bool,
    /// A snapshot fetch is in flight (prevents task pileup).
    pub fetching_snapshot: bool,
    /// When the last snapshot fetch was started; `None` forces an immediate
    /// first read.
    pub last_snapshot_poll: Option<Instant>,
    /// Contract balance view, refreshed on every snapshot change.
    pub balance: Option<BalanceView>,
    /// Write-action state machine.
    pub tick: TickPhase,
    /// Recent submissions, newest first.
    pub recent: Vec<TransactionItem>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            amount: String::new(),
            snapshot: None,
            snapshot_error: false,
            fetching_snapshot: false,
            last_snapshot_poll: None,
            balance: None,
            tick: TickPhase::Idle,
            recent: Vec::new(),
        }
    }
}

impl GameState {
    /// Countdown display value, or `None` while the read is pending or has
    /// failed. Rendering through this accessor is what keeps the UI from
    /// touching snapshot fields in the error state.
    pub fn countdown_display(&self) -> Option<String> {
        if self.snapshot_error {
            return None;
        }
        self.snapshot.as_ref().map(|s| s.countdown.to_string())
    }

    /// Current price display value, e.g. `"1 ETH"`.
    pub fn price_display(&self) -> Option<String> {
        if self.snapshot_error {
            return None;
        }
        self.snapshot
            .as_ref()
            .map(|s| format!("{} ETH", units::format_eth(s.current_price_wei)))
    }

    /// True while the send control must be disabled.
    pub fn send_in_flight(&self) -> bool {
        self.tick.in_flight()
    }
}

/// Wallet display state. The session (with the signing key) lives separately
/// in [`AppState::session`] and never enters cloned render state.
#[derive(Debug, Clone)]
pub struct WalletState {
    pub address: String,
    pub connector: String,
    pub eth_balance: Option<BalanceView>,
}

/// Global application state.
pub struct AppState {
    /// Current active screen.
    pub current_screen: Screen,
    /// Chain configuration, constructed once at startup and passed down.
    pub config: Arc<ChainConfig>,
    /// Chain client used by background tasks.
    pub chain: Option<Arc<dyn ChainService>>,
    /// Connected signing session, if any.
    pub session: Option<ChainSession>,
    /// Wallet display info derived from the session.
    pub wallet: Option<WalletState>,
    /// Game screen state.
    pub game: GameState,
    /// Keyfile path typed on the wallet screen.
    pub keyfile_input: String,
    /// Notifications queued for the toast system, drained each frame.
    pub pending_notifications: Vec<(NoticeLevel, String)>,
}

impl AppState {
    pub fn new(config: Arc<ChainConfig>, chain: Option<Arc<dyn ChainService>>) -> Self {
        Self {
            current_screen: Screen::Game,
            config,
            chain,
            session: None,
            wallet: None,
            game: GameState::default(),
            keyfile_input: String::new(),
            pending_notifications: Vec::new(),
        }
    }

    /// Whether a signing session is connected.
    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    /// Queue a toast notification for the next frame.
    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.pending_notifications.push((level, message.into()));
    }
}

// Manual Clone: the session holds the signing key and rendering has no use
// for it, so clones (taken every frame for display) drop it.
impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            current_screen: self.current_screen,
            config: self.config.clone(),
            chain: self.chain.clone(),
            session: None,
            wallet: self.wallet.clone(),
            game: self.game.clone(),
            keyfile_input: self.keyfile_input.clone(),
            pending_notifications: self.pending_notifications.clone(),
        }
    }
}
