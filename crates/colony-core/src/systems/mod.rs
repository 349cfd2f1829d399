//! ECS Systems
//!
//! Clock and inspiration lifetime systems.

pub mod inspiration;

pub use inspiration::{advance_clock, tick_inspirations};

use bevy_ecs::prelude::*;

/// Builds the per-tick host schedule.
pub fn colony_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((advance_clock, tick_inspirations).chain());
    schedule
}
