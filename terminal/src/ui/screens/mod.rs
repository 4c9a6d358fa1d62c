//! Screen-specific rendering.

pub mod game;
pub mod wallet;
