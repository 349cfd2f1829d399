//! World-level colonist queries and the standard inspiration entry points.
//!
//! These look colonists up by entity so callers outside the schedule (the
//! debug panel) can read and mutate them between frames.

use bevy_ecs::prelude::*;
use colony_events::{InspirationDef, StartContext};

use crate::components::{
    Colonist, ColonistName, Downed, Eligibility, GameClock, InspirationHandler, KindLabel, Mood,
    PlayerControlled, Spawned, WorkCapabilities,
};

/// Colonists on the current map the player can control, in spawn order.
pub fn controllable_colonists(world: &World) -> Vec<Entity> {
    let mut colonists: Vec<Entity> = world
        .iter_entities()
        .filter(|e| {
            e.contains::<Colonist>()
                && e.contains::<Spawned>()
                && e.contains::<PlayerControlled>()
                && !e.contains::<Downed>()
        })
        .map(|e| e.id())
        .collect();
    colonists.sort();
    colonists
}

/// Whether `colonist` still exists and is controllable.
pub fn is_controllable(world: &World, colonist: Entity) -> bool {
    world.get_entity(colonist).is_some_and(|e| {
        e.contains::<Colonist>()
            && e.contains::<Spawned>()
            && e.contains::<PlayerControlled>()
            && !e.contains::<Downed>()
    })
}

/// Short name, falling back to the capitalized kind label.
pub fn colonist_short_name(world: &World, colonist: Entity) -> String {
    match world.get::<ColonistName>(colonist) {
        Some(name) => name.short().to_string(),
        None => kind_label_cap(world, colonist),
    }
}

/// Full name, falling back to the capitalized kind label.
pub fn colonist_full_name(world: &World, colonist: Entity) -> String {
    match world.get::<ColonistName>(colonist) {
        Some(name) => name.full(),
        None => kind_label_cap(world, colonist),
    }
}

fn kind_label_cap(world: &World, colonist: Entity) -> String {
    world
        .get::<KindLabel>(colonist)
        .cloned()
        .unwrap_or_default()
        .label_cap()
}

/// Definition of the colonist's active inspiration, if any.
pub fn active_inspiration(world: &World, colonist: Entity) -> Option<&InspirationDef> {
    world
        .get::<InspirationHandler>(colonist)
        .and_then(|h| h.current_def())
}

/// Runs the handler's standard, eligibility-checked start.
pub fn try_start_inspiration(
    world: &mut World,
    colonist: Entity,
    def: &InspirationDef,
    context: Option<&StartContext>,
    force: bool,
) -> bool {
    let now = world.get_resource::<GameClock>().map_or(0, |c| c.tick);
    let mood = world.get::<Mood>(colonist).copied().unwrap_or_default();
    let capabilities = world
        .get::<WorkCapabilities>(colonist)
        .cloned()
        .unwrap_or_default();

    let Some(mut handler) = world.get_mut::<InspirationHandler>(colonist) else {
        tracing::warn!("Colonist {:?} has no inspiration handler", colonist);
        return false;
    };

    let eligibility = Eligibility {
        mood: mood.0,
        capabilities: &capabilities,
    };
    handler.try_start(def, context, force, eligibility, now)
}

/// Ends the colonist's inspiration if it matches `def`.
pub fn end_inspiration(world: &mut World, colonist: Entity, def: &InspirationDef) -> bool {
    world
        .get_mut::<InspirationHandler>(colonist)
        .is_some_and(|mut h| h.end(def))
}

#[cfg(test)]
mod tests {
    use super::*;
    use colony_events::WorkTag;

    fn spawn_colonist(world: &mut World, first: &str) -> Entity {
        world
            .spawn((
                Colonist,
                ColonistName::new(first, "Doe"),
                Spawned,
                PlayerControlled,
                Mood(0.8),
                WorkCapabilities::default(),
                InspirationHandler::default(),
            ))
            .id()
    }

    #[test]
    fn test_controllable_filter() {
        let mut world = World::new();
        let a = spawn_colonist(&mut world, "Ada");
        let b = spawn_colonist(&mut world, "Bo");
        world.entity_mut(b).insert(Downed);
        let visitor = world.spawn((Colonist, Spawned)).id();
        let away = world.spawn((Colonist, PlayerControlled)).id();

        assert_eq!(controllable_colonists(&world), vec![a]);
        assert!(is_controllable(&world, a));
        assert!(!is_controllable(&world, b));
        assert!(!is_controllable(&world, visitor));
        assert!(!is_controllable(&world, away));

        world.despawn(a);
        assert!(!is_controllable(&world, a));
        assert!(controllable_colonists(&world).is_empty());
    }

    #[test]
    fn test_name_fallback() {
        let mut world = World::new();
        let named = spawn_colonist(&mut world, "Ada");
        let unnamed = world.spawn((Colonist, KindLabel("drifter".to_string()))).id();
        let bare = world.spawn(Colonist).id();

        assert_eq!(colonist_short_name(&world, named), "Ada");
        assert_eq!(colonist_full_name(&world, named), "Ada Doe");
        assert_eq!(colonist_short_name(&world, unnamed), "Drifter");
        assert_eq!(colonist_full_name(&world, bare), "Colonist");
    }

    #[test]
    fn test_standard_start_uses_components() {
        let mut world = World::new();
        world.insert_resource(GameClock { tick: 500 });
        let colonist = spawn_colonist(&mut world, "Ada");
        world
            .entity_mut(colonist)
            .insert(WorkCapabilities::incapable_of([WorkTag::Violent]));

        let shoot = InspirationDef::new("Frenzy_Shoot", "frenzy: shoot")
            .with_required_work(WorkTag::Violent);
        assert!(!try_start_inspiration(&mut world, colonist, &shoot, None, true));
        assert!(active_inspiration(&world, colonist).is_none());

        let go = InspirationDef::new("Frenzy_Go", "frenzy: go");
        let context = StartContext::with_reason("test");
        assert!(try_start_inspiration(&mut world, colonist, &go, Some(&context), false));
        assert_eq!(active_inspiration(&world, colonist), Some(&go));

        assert!(end_inspiration(&mut world, colonist, &go));
        assert!(active_inspiration(&world, colonist).is_none());
    }

    #[test]
    fn test_missing_handler() {
        let mut world = World::new();
        let colonist = world.spawn(Colonist).id();
        let def = InspirationDef::new("a", "a");

        assert!(!try_start_inspiration(&mut world, colonist, &def, None, true));
        assert!(!end_inspiration(&mut world, colonist, &def));
    }
}
