//! Grant and remove orchestration.
//!
//! Granting first clears any active inspiration, then tries the host's
//! standard start with `force` set. If the host still refuses, the
//! coordinator falls back to the host's administrative override. If that is
//! missing, speaks another version, or fails, the grant fails closed: a
//! warning is logged and the user sees a rejection message. Nothing here
//! panics or returns an error to the caller.

use colony_events::{
    FeedbackCue, InspirationDef, MessageKind, Notification, OverrideError, OverrideToken,
    StartContext, OVERRIDE_API_VERSION,
};

use crate::host::{ColonyHost, FeedbackSink};

const GRANT_REASON: &str = "granted from the inspiration panel";

/// Result of a grant attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrantOutcome {
    /// The standard start accepted it
    Granted,
    /// Installed through the administrative override
    ForceGranted,
    /// Both paths failed
    Failed(OverrideError),
}

/// Result of a remove attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Carries the removed inspiration's label
    Removed(String),
    NotInspired,
}

/// Issues grant and remove commands against the host.
#[derive(Debug, Clone, Default)]
pub struct ActionCoordinator {
    token: Option<OverrideToken>,
}

impl ActionCoordinator {
    /// `token` unlocks the override fallback; without one, grants the host
    /// refuses fail closed.
    pub fn new(token: Option<OverrideToken>) -> Self {
        Self { token }
    }

    pub fn token(&self) -> Option<&OverrideToken> {
        self.token.as_ref()
    }

    pub fn set_token(&mut self, token: Option<OverrideToken>) {
        self.token = token;
    }

    pub fn grant<H, F>(
        &self,
        host: &mut H,
        feedback: &mut F,
        colonist: H::Colonist,
        def: &InspirationDef,
    ) -> GrantOutcome
    where
        H: ColonyHost + ?Sized,
        F: FeedbackSink + ?Sized,
    {
        let name = host.short_name(colonist);

        // The host allows one inspiration per colonist
        if let Some(current) = host.active_inspiration(colonist) {
            host.end_inspiration(colonist, &current);
        }

        let context = StartContext::with_reason(GRANT_REASON);
        if host.try_start_inspiration(colonist, def, Some(&context), true) {
            tracing::info!("Granted {} to {}", def.def_name, name);
            feedback.post(Notification::new(
                format!("Granted {} to {}!", def.display_label(), name),
                MessageKind::PositiveEvent,
                host.now(),
            ));
            feedback.play(FeedbackCue::Click);
            return GrantOutcome::Granted;
        }

        match self.force_install(host, colonist, def) {
            Ok(()) => {
                tracing::info!("Force granted {} to {}", def.def_name, name);
                feedback.post(Notification::new(
                    format!("Force granted {} to {}!", def.display_label(), name),
                    MessageKind::PositiveEvent,
                    host.now(),
                ));
                GrantOutcome::ForceGranted
            }
            Err(e) => {
                tracing::warn!("Could not force grant inspiration: {}", e);
                feedback.post(Notification::new(
                    format!(
                        "Could not grant inspiration to {}. They may not be eligible.",
                        name
                    ),
                    MessageKind::RejectInput,
                    host.now(),
                ));
                GrantOutcome::Failed(e)
            }
        }
    }

    fn force_install<H>(
        &self,
        host: &mut H,
        colonist: H::Colonist,
        def: &InspirationDef,
    ) -> Result<(), OverrideError>
    where
        H: ColonyHost + ?Sized,
    {
        let token = self.token.as_ref().ok_or(OverrideError::NoToken)?;
        let admin = host.admin_override().ok_or(OverrideError::Unavailable)?;

        let found = admin.api_version();
        if found != OVERRIDE_API_VERSION {
            return Err(OverrideError::VersionMismatch {
                expected: OVERRIDE_API_VERSION,
                found,
            });
        }

        admin.force_install(token, colonist, def)
    }

    pub fn remove<H, F>(
        &self,
        host: &mut H,
        feedback: &mut F,
        colonist: H::Colonist,
    ) -> RemoveOutcome
    where
        H: ColonyHost + ?Sized,
        F: FeedbackSink + ?Sized,
    {
        let Some(current) = host.active_inspiration(colonist) else {
            return RemoveOutcome::NotInspired;
        };

        // Captured before the host clears it
        let label = current.display_label().to_string();
        let name = host.short_name(colonist);
        host.end_inspiration(colonist, &current);

        tracing::info!("Removed {} from {}", current.def_name, name);
        feedback.post(Notification::new(
            format!("Removed {} from {}.", label, name),
            MessageKind::NeutralEvent,
            host.now(),
        ));
        feedback.play(FeedbackCue::Click);
        RemoveOutcome::Removed(label)
    }
}
