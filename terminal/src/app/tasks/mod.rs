//! Async background tasks. Each task reads what it needs from state under a
//! short lock, does its network work on the tokio runtime, and reports back
//! through the event channel.

pub(crate) mod contract;
pub(crate) mod tick;
