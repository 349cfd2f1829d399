//! Capabilities the game provides to the panel.

use colony_events::{
    FeedbackCue, GameTimestamp, InspirationDef, Notification, OverrideError, OverrideToken,
    StartContext,
};
use std::fmt::Debug;

/// The game world as seen by the panel.
pub trait ColonyHost {
    /// Non-owning colonist handle. May go stale between frames.
    type Colonist: Copy + Eq + Debug;

    /// Colonists on the active map the player can control.
    fn controllable_colonists(&self) -> Vec<Self::Colonist>;

    /// Whether a handle still refers to a controllable colonist.
    fn is_live(&self, colonist: Self::Colonist) -> bool;

    fn short_name(&self, colonist: Self::Colonist) -> String;

    fn full_name(&self, colonist: Self::Colonist) -> String;

    fn active_inspiration(&self, colonist: Self::Colonist) -> Option<InspirationDef>;

    /// Standard eligibility-checked start. Returns whether it started.
    fn try_start_inspiration(
        &mut self,
        colonist: Self::Colonist,
        def: &InspirationDef,
        context: Option<&StartContext>,
        force: bool,
    ) -> bool;

    fn end_inspiration(&mut self, colonist: Self::Colonist, def: &InspirationDef);

    /// The host's administrative override interface, if it exposes one.
    fn admin_override(&mut self) -> Option<&mut dyn AdminOverride<Self::Colonist>>;

    /// Current game time, used to stamp notifications.
    fn now(&self) -> GameTimestamp;
}

/// Enumerates every known inspiration definition.
pub trait InspirationSource {
    fn all_inspirations(&self) -> Vec<InspirationDef>;
}

/// Installs an inspiration while skipping eligibility checks.
pub trait AdminOverride<C> {
    fn api_version(&self) -> u32;

    /// Must leave the colonist unchanged when it returns an error.
    fn force_install(
        &mut self,
        token: &OverrideToken,
        colonist: C,
        def: &InspirationDef,
    ) -> Result<(), OverrideError>;
}

/// On-screen messages and UI sounds.
pub trait FeedbackSink {
    fn post(&mut self, notification: Notification);

    fn play(&mut self, cue: FeedbackCue);
}

impl InspirationSource for [InspirationDef] {
    fn all_inspirations(&self) -> Vec<InspirationDef> {
        self.to_vec()
    }
}

impl InspirationSource for Vec<InspirationDef> {
    fn all_inspirations(&self) -> Vec<InspirationDef> {
        self.clone()
    }
}
