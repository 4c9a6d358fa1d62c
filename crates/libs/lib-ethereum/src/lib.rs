//! # Ethereum Chain Library
//!
//! Chain access for the counting-game terminal: session (signer) management,
//! counter-contract reads, balance queries, and the submit/confirm lifecycle
//! of the paid `tick()` call.
//!
//! The terminal never talks to an RPC node directly; everything goes through
//! [`EthereumClient`] so the GUI layer only ever sees typed results and
//! [`EthereumError`] values.

pub mod config;
pub mod contract;
pub mod error;
pub mod session;
pub mod units;

mod client;

pub use client::{EthereumClient, HttpProvider};
pub use config::ChainConfig;
pub use contract::ContractSnapshot;
pub use error::EthereumError;
pub use session::{ChainSession, Connector};
