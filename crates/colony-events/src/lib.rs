//! Shared data types for the colony host and the inspiration panel.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod access;
pub mod inspiration;
pub mod notification;
pub mod timestamp;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

// Re-export timestamp types
pub use timestamp::{GameDate, GameTimestamp, Season, DAYS_PER_SEASON, TICKS_PER_DAY};

// Re-export inspiration types
pub use inspiration::{InspirationClass, InspirationDef, StartContext, WorkTag};

// Re-export notification types
pub use notification::{FeedbackCue, MessageKind, Notification};

// Re-export override access types
pub use access::{OverrideError, OverrideToken, OVERRIDE_API_VERSION};
