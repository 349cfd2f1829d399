//! World Setup
//!
//! Colonist spawning for new games.

pub mod colonists;

pub use colonists::*;
