//! Colony host engine.
//!
//! Owns colonists, the inspiration database, each colonist's inspiration
//! handler, and the administrative override capability.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

pub mod admin;
pub mod components;
pub mod database;
pub mod handler;
pub mod setup;
pub mod systems;

pub use admin::{force_install, AdminOverrides};
pub use components::*;
pub use database::{CatalogError, InspirationDatabase};
pub use handler::{
    active_inspiration, colonist_full_name, colonist_short_name, controllable_colonists,
    end_inspiration, is_controllable, try_start_inspiration,
};
pub use setup::{spawn_colonists, SpawnConfig};
pub use systems::{advance_clock, colony_schedule, tick_inspirations};

/// Seeded random number generator resource
#[derive(Resource)]
pub struct ColonyRng(pub SmallRng);
