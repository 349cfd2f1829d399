//! Bevy front end: renders the inspiration panel over a live colony.

pub mod colony;
pub mod feedback;
pub mod host;
pub mod panel;
pub mod plugin;

pub use host::WorldHost;
pub use plugin::InspirationVizPlugin;
