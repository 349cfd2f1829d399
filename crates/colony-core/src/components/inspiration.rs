//! Inspiration Components
//!
//! The active inspiration instance and the per-colonist handler that owns it.

use bevy_ecs::prelude::*;
use colony_events::{InspirationClass, InspirationDef, StartContext, TICKS_PER_DAY};

use super::colonist::WorkCapabilities;

/// How an active inspiration ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspirationKind {
    /// Consumed by the next matching action, or expires
    SingleUse,
    /// Active until it expires
    Timed,
}

/// An inspiration currently active on a colonist.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspiration {
    pub def: InspirationDef,
    pub kind: InspirationKind,
    pub started_tick: u64,
    pub age_ticks: u64,
    pub duration_ticks: u64,
}

impl Inspiration {
    /// Builds an instance from the definition's behaviour class.
    pub fn instantiate(def: &InspirationDef) -> Self {
        let kind = match def.class {
            InspirationClass::Creativity
            | InspirationClass::Trade
            | InspirationClass::Recruitment => InspirationKind::SingleUse,
            InspirationClass::FrenzyWork
            | InspirationClass::FrenzyShoot
            | InspirationClass::FrenzyGo => InspirationKind::Timed,
        };

        Self {
            def: def.clone(),
            kind,
            started_tick: 0,
            age_ticks: 0,
            duration_ticks: (def.base_duration_days.max(0.0) * TICKS_PER_DAY as f32) as u64,
        }
    }

    /// Binds the instance to the tick it starts on.
    pub fn post_start(&mut self, now: u64) {
        self.started_tick = now;
        self.age_ticks = 0;
    }

    pub fn is_expired(&self) -> bool {
        self.age_ticks >= self.duration_ticks
    }

    pub fn ticks_left(&self) -> u64 {
        self.duration_ticks.saturating_sub(self.age_ticks)
    }
}

/// Why a standard start was refused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartRejection {
    AlreadyInspired,
    MoodTooLow { mood: f32, required: f32 },
    IncapableOfWork(colony_events::WorkTag),
}

/// Eligibility inputs gathered from the colonist's other components.
#[derive(Debug, Clone, Copy)]
pub struct Eligibility<'a> {
    pub mood: f32,
    pub capabilities: &'a WorkCapabilities,
}

/// Owns a colonist's at-most-one active inspiration.
#[derive(Component, Debug, Clone, Default)]
pub struct InspirationHandler {
    current: Option<Inspiration>,
}

impl InspirationHandler {
    pub fn inspired(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Inspiration> {
        self.current.as_ref()
    }

    pub fn current_def(&self) -> Option<&InspirationDef> {
        self.current.as_ref().map(|i| &i.def)
    }

    /// Checks the standard eligibility rules. `force` skips the mood check
    /// but never the work-capability check.
    pub fn check_start(
        &self,
        def: &InspirationDef,
        force: bool,
        eligibility: Eligibility<'_>,
    ) -> Result<(), StartRejection> {
        if self.inspired() {
            return Err(StartRejection::AlreadyInspired);
        }
        if !force && eligibility.mood < def.min_mood {
            return Err(StartRejection::MoodTooLow {
                mood: eligibility.mood,
                required: def.min_mood,
            });
        }
        if let Some(work) = def.required_work {
            if !eligibility.capabilities.can_do(work) {
                return Err(StartRejection::IncapableOfWork(work));
            }
        }
        Ok(())
    }

    /// Standard entry point. Returns whether the inspiration started.
    pub fn try_start(
        &mut self,
        def: &InspirationDef,
        context: Option<&StartContext>,
        force: bool,
        eligibility: Eligibility<'_>,
        now: u64,
    ) -> bool {
        if let Err(rejection) = self.check_start(def, force, eligibility) {
            tracing::debug!("Inspiration {} refused: {:?}", def.def_name, rejection);
            return false;
        }

        let mut inspiration = Inspiration::instantiate(def);
        inspiration.post_start(now);
        self.current = Some(inspiration);

        match context.and_then(|c| c.reason.as_deref()) {
            Some(reason) => tracing::info!("Started inspiration {} ({})", def.def_name, reason),
            None => tracing::info!("Started inspiration {}", def.def_name),
        }
        true
    }

    /// Ends the current inspiration if it matches `def`.
    pub fn end(&mut self, def: &InspirationDef) -> bool {
        match &self.current {
            Some(current) if current.def.def_name == def.def_name => {
                self.current = None;
                tracing::info!("Ended inspiration {}", def.def_name);
                true
            }
            _ => false,
        }
    }

    /// Installs an already-started instance, replacing any current one.
    /// Only the administrative override path calls this.
    pub(crate) fn install(&mut self, inspiration: Inspiration) {
        self.current = Some(inspiration);
    }

    pub(crate) fn current_mut(&mut self) -> Option<&mut Inspiration> {
        self.current.as_mut()
    }

    pub(crate) fn clear(&mut self) -> Option<Inspiration> {
        self.current.take()
    }
}
