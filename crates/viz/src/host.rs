//! Adapts the ECS world to the panel's host traits.

use bevy::prelude::*;
use colony_core::{AdminOverrides, GameClock, InspirationDatabase};
use colony_events::{
    GameTimestamp, InspirationDef, OverrideError, OverrideToken, StartContext,
};
use inspiration_panel::{AdminOverride, ColonyHost, InspirationSource};

/// Mutable view of the world for one frame of panel work.
pub struct WorldHost<'w> {
    world: &'w mut World,
}

impl<'w> WorldHost<'w> {
    pub fn new(world: &'w mut World) -> Self {
        Self { world }
    }
}

impl ColonyHost for WorldHost<'_> {
    type Colonist = Entity;

    fn controllable_colonists(&self) -> Vec<Entity> {
        colony_core::controllable_colonists(self.world)
    }

    fn is_live(&self, colonist: Entity) -> bool {
        colony_core::is_controllable(self.world, colonist)
    }

    fn short_name(&self, colonist: Entity) -> String {
        colony_core::colonist_short_name(self.world, colonist)
    }

    fn full_name(&self, colonist: Entity) -> String {
        colony_core::colonist_full_name(self.world, colonist)
    }

    fn active_inspiration(&self, colonist: Entity) -> Option<InspirationDef> {
        colony_core::active_inspiration(self.world, colonist).cloned()
    }

    fn try_start_inspiration(
        &mut self,
        colonist: Entity,
        def: &InspirationDef,
        context: Option<&StartContext>,
        force: bool,
    ) -> bool {
        colony_core::try_start_inspiration(self.world, colonist, def, context, force)
    }

    fn end_inspiration(&mut self, colonist: Entity, def: &InspirationDef) {
        colony_core::end_inspiration(self.world, colonist, def);
    }

    fn admin_override(&mut self) -> Option<&mut dyn AdminOverride<Entity>> {
        let enabled = self
            .world
            .get_resource::<AdminOverrides>()
            .is_some_and(|o| o.is_enabled());
        if enabled {
            Some(self)
        } else {
            None
        }
    }

    fn now(&self) -> GameTimestamp {
        self.world
            .get_resource::<GameClock>()
            .map(|c| c.timestamp())
            .unwrap_or_else(GameTimestamp::start)
    }
}

impl AdminOverride<Entity> for WorldHost<'_> {
    fn api_version(&self) -> u32 {
        self.world
            .get_resource::<AdminOverrides>()
            .map_or(0, |o| o.api_version())
    }

    fn force_install(
        &mut self,
        token: &OverrideToken,
        colonist: Entity,
        def: &InspirationDef,
    ) -> Result<(), OverrideError> {
        colony_core::force_install(self.world, token, colonist, def)
    }
}

impl InspirationSource for WorldHost<'_> {
    fn all_inspirations(&self) -> Vec<InspirationDef> {
        CatalogSource(self.world.get_resource::<InspirationDatabase>()).all_inspirations()
    }
}

/// Read-only catalog access for systems that only hold the database.
pub struct CatalogSource<'a>(pub Option<&'a InspirationDatabase>);

impl InspirationSource for CatalogSource<'_> {
    fn all_inspirations(&self) -> Vec<InspirationDef> {
        self.0.map(|db| db.all().to_vec()).unwrap_or_default()
    }
}
