//! Host colony: loads the catalog, spawns colonists and runs the tick systems.

use bevy::prelude::*;
use colony_core::{
    advance_clock, spawn_colonists, tick_inspirations, AdminOverrides, ColonyRng, GameClock,
    InspirationDatabase, SpawnConfig,
};
use inspiration_panel::OverrideAccessConfig;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;

use crate::host::CatalogSource;
use crate::panel::{PanelSettings, PanelState};

/// Plugin for the host colony.
pub struct ColonyPlugin;

impl Plugin for ColonyPlugin {
    fn build(&self, app: &mut App) {
        // ColonySetup should be inserted by main.rs before adding this plugin
        if !app.world().contains_resource::<ColonySetup>() {
            app.init_resource::<ColonySetup>();
        }

        app.init_resource::<GameClock>()
            .add_systems(Startup, setup_colony)
            .add_systems(FixedUpdate, (advance_clock, tick_inspirations).chain());
    }
}

/// Startup options from the command line.
#[derive(Resource, Debug, Clone)]
pub struct ColonySetup {
    /// Inspiration catalog file (TOML or JSON). Built-in defs when absent.
    pub catalog: Option<PathBuf>,
    pub colonists: usize,
    pub seed: u64,
    /// Open the panel on launch.
    pub open_panel: bool,
}

impl Default for ColonySetup {
    fn default() -> Self {
        Self {
            catalog: None,
            colonists: SpawnConfig::default().colonists,
            seed: 42,
            open_panel: false,
        }
    }
}

/// Load the inspiration catalog, falling back to the built-in set.
pub fn load_database(catalog: Option<&PathBuf>) -> InspirationDatabase {
    let Some(path) = catalog else {
        return InspirationDatabase::builtin();
    };
    match InspirationDatabase::from_file(path) {
        Ok(db) => {
            tracing::info!("Loaded {} inspirations from {}", db.len(), path.display());
            db
        }
        Err(e) => {
            tracing::error!("Failed to load catalog {}: {}, using built-in set", path.display(), e);
            InspirationDatabase::builtin()
        }
    }
}

/// Insert host resources, spawn colonists and hand the panel its override
/// token. Returns the spawned colonists.
pub fn build_colony(
    world: &mut World,
    setup: &ColonySetup,
    access: &OverrideAccessConfig,
) -> Vec<Entity> {
    world.insert_resource(load_database(setup.catalog.as_ref()));

    let mut rng = SmallRng::seed_from_u64(setup.seed);
    let spawn = SpawnConfig {
        colonists: setup.colonists,
        ..default()
    };
    let colonists = spawn_colonists(world, &mut rng, &spawn);
    world.insert_resource(ColonyRng(rng));

    let mut overrides = AdminOverrides::new(access.enabled, setup.seed.wrapping_add(1));
    let token = overrides.issue(&access.holder);
    if token.is_none() {
        tracing::warn!("Override access disabled, forced grants will fail");
    }
    world.insert_resource(overrides);

    if let Some(mut state) = world.get_resource_mut::<PanelState>() {
        state.0.coordinator_mut().set_token(token);
    }

    tracing::info!("Colony ready with {} colonists", colonists.len());
    colonists
}

fn setup_colony(world: &mut World) {
    let setup = world.get_resource::<ColonySetup>().cloned().unwrap_or_default();
    let access = world
        .get_resource::<PanelSettings>()
        .map(|s| s.0.override_access.clone())
        .unwrap_or_default();

    build_colony(world, &setup, &access);

    if setup.open_panel && world.contains_resource::<PanelState>() {
        world.resource_scope(|world, mut state: Mut<PanelState>| {
            state.0.open(&CatalogSource(world.get_resource::<InspirationDatabase>()));
        });
    }
}
