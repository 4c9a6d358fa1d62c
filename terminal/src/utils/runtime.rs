//! Global Tokio runtime for async chain operations.
//!
//! egui's frame loop runs on the main thread while the RPC work needs a
//! tokio runtime. `main` enters this runtime before starting the frame loop,
//! so `tokio::spawn` inside handlers and tasks lands here.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for chain operations")
});
