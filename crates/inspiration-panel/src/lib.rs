//! Inspiration panel: pick a colonist, pick an inspiration, grant or remove it.
//!
//! This crate holds the panel's logic with no rendering. It talks to the game
//! only through the traits in [`host`], so it runs the same against the real
//! ECS world or an in-memory stand-in.
//!
//! # Architecture
//!
//! ```text
//!  host registry ──▶ colonists ──┐
//!                                ├──▶ panel ──intent──▶ coordinator ──▶ host handler
//!  host catalog  ──▶ catalog ────┘                          │
//!                                                           └──▶ feedback (messages, cues)
//! ```
//!
//! # Modules
//!
//! - [`host`]: Traits the game implements
//! - [`catalog`]: Sorted inspiration snapshot and text filtering
//! - [`colonists`]: Colonist rows, re-queried every frame
//! - [`selection`]: Current colonist, inspiration, and filter text
//! - [`coordinator`]: Grant and remove orchestration with the override fallback
//! - [`panel`]: Open/close lifecycle, view model, and intent handling
//! - [`messages`]: Bounded on-screen message log
//! - [`config`]: TOML configuration

pub mod catalog;
pub mod colonists;
pub mod config;
pub mod coordinator;
pub mod host;
pub mod messages;
pub mod panel;
pub mod selection;

pub use catalog::InspirationCatalog;
pub use colonists::{colonist_rows, ColonistRow};
pub use config::{
    default_config_toml, ConfigError, FeedbackConfig, OverrideAccessConfig, PanelConfig,
    WindowConfig,
};
pub use coordinator::{ActionCoordinator, GrantOutcome, RemoveOutcome};
pub use host::{AdminOverride, ColonyHost, FeedbackSink, InspirationSource};
pub use messages::{LoggedMessage, MessageLog};
pub use panel::{
    ActionColumn, HandleOutcome, InspirationPanel, InspirationRow, PanelIntent, PanelView,
};
pub use selection::SelectionState;

use std::sync::Once;

static INIT: Once = Once::new();

/// One-time load hook. The host calls this while loading its modules;
/// repeated calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        tracing::info!("Inspiration panel loaded.");
    });
}

/// Whether [`init`] has run in this process.
pub fn is_initialized() -> bool {
    INIT.is_completed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert!(is_initialized());
    }
}
