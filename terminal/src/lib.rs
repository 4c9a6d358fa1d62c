//! # ETH Counting Game Terminal - Library Root
//!
//! A native desktop front-end for the on-chain counting game: connect a
//! wallet, watch the contract's countdown and current price, and submit the
//! paid `tick()` transaction that decrements the counter.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  egui-notify   - Toast notifications                   │
//! │  Tokio         - Async runtime                         │
//! │  lib-ethereum  - Chain session + contract client       │
//! └────────────────────────────────────────────────────────┘
//!                        │ JSON-RPC over HTTP
//!                        ▼
//!              ┌─────────────────────┐
//!              │   Ethereum node     │
//!              │   (Sepolia)         │
//!              └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: application state, event channel and async tasks
//!   - `Arc<RwLock<AppState>>` shared between the frame loop and tasks
//!   - background results return as [`AppEvent`] messages, drained
//!     non-blockingly every frame in `on_tick()`
//! - **core**: error taxonomy and the [`core::service::ChainService`] trait
//!   the tasks talk to (mockable in tests)
//! - **services**: the concrete chain client over `lib-ethereum`
//! - **ui**: screens, widgets, theme
//! - **utils**: tokio runtime bridge for the GUI thread
//!
//! ## Transaction lifecycle
//!
//! `Idle → Submitting → Confirming{hash} → Idle`. The in-flight guard lives
//! in the state machine itself: a second send while one is submitting or
//! confirming is rejected, not queued. Confirmation waits are bounded by a
//! configured timeout, so a lost transaction surfaces as a failure instead
//! of an everlasting spinner.

pub mod app;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Screen};
pub use crate::core::{AppError, Result};
