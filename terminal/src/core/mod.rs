//! Core types shared across the terminal: error taxonomy and service traits.

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ChainService;
