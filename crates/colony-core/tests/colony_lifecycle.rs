//! Colony lifecycle tests
//!
//! Spawning, granting and expiring inspirations through the public world API.

use bevy_ecs::prelude::*;
use colony_core::{
    active_inspiration, colony_schedule, controllable_colonists, force_install, spawn_colonists,
    try_start_inspiration, AdminOverrides, ColonistName, GameClock, InspirationDatabase,
    SpawnConfig,
};
use colony_events::{InspirationClass, InspirationDef, OverrideError, StartContext};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::Write;

fn world_with_colony(seed: u64) -> (World, Vec<Entity>) {
    let mut world = World::new();
    world.insert_resource(GameClock::default());
    world.insert_resource(InspirationDatabase::builtin());
    let mut rng = SmallRng::seed_from_u64(seed);
    let colonists = spawn_colonists(&mut world, &mut rng, &SpawnConfig::default());
    (world, colonists)
}

/// Same seed, same colony
#[test]
fn test_spawn_is_deterministic() {
    let (world1, colonists1) = world_with_colony(42);
    let (world2, colonists2) = world_with_colony(42);

    let names = |world: &World, colonists: &[Entity]| -> Vec<String> {
        colonists
            .iter()
            .filter_map(|e| world.get::<ColonistName>(*e).map(|n| n.full()))
            .collect()
    };
    assert_eq!(names(&world1, &colonists1), names(&world2, &colonists2));
    assert_eq!(controllable_colonists(&world1), colonists1);
}

#[test]
fn test_timed_inspiration_runs_out() {
    let (mut world, colonists) = world_with_colony(7);
    let colonist = colonists[0];
    let def = InspirationDef::new("Quick_Frenzy", "quick frenzy")
        .with_class(InspirationClass::FrenzyGo)
        .with_duration_days(0.5);

    let context = StartContext::with_reason("lifecycle test");
    assert!(try_start_inspiration(&mut world, colonist, &def, Some(&context), true));
    assert!(active_inspiration(&world, colonist).is_some());

    let mut schedule = colony_schedule();
    for _ in 0..1249 {
        schedule.run(&mut world);
    }
    assert!(active_inspiration(&world, colonist).is_some());

    schedule.run(&mut world);
    assert!(active_inspiration(&world, colonist).is_none());
    assert_eq!(world.resource::<GameClock>().tick, 1250);
}

#[test]
fn test_revoked_token_cannot_force() {
    let (mut world, colonists) = world_with_colony(3);
    let mut overrides = AdminOverrides::new(true, 9);
    let token = overrides.issue("lifecycle").expect("overrides enabled");
    world.insert_resource(overrides);

    let def = InspirationDatabase::builtin()
        .get("Frenzy_Work")
        .cloned()
        .expect("builtin def");
    assert_eq!(force_install(&mut world, &token, colonists[1], &def), Ok(()));

    assert!(world.resource_mut::<AdminOverrides>().revoke(&token));
    let result = force_install(&mut world, &token, colonists[2], &def);
    assert_eq!(result, Err(OverrideError::InvalidToken("lifecycle".into())));
    assert!(active_inspiration(&world, colonists[2]).is_none());
}

#[test]
fn test_catalog_from_json_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    write!(
        file,
        r#"[{{"def_name": "Sculpting", "label": "sculpting", "class": "creativity"}}]"#
    )
    .expect("write catalog");

    let db = InspirationDatabase::from_file(file.path()).expect("catalog loads");
    assert_eq!(db.len(), 1);
    assert_eq!(
        db.get("Sculpting").map(|d| d.label_cap()),
        Some("Sculpting".to_string())
    );
}

#[test]
fn test_catalog_rejects_unknown_extension() {
    let file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("create temp file");
    assert!(InspirationDatabase::from_file(file.path()).is_err());
}
