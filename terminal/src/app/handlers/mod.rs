//! User action handlers. Validation and state-machine guards run here,
//! synchronously, before any task is spawned.

pub(crate) mod game;
pub(crate) mod navigation;
pub(crate) mod wallet;
