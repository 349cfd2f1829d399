//! Inspiration Lifetime
//!
//! Ages active inspirations once per tick and ends the ones that ran out.

use bevy_ecs::prelude::*;

use crate::components::{ColonistName, GameClock, InspirationHandler};

/// Advances the game clock by one tick.
pub fn advance_clock(mut clock: ResMut<GameClock>) {
    clock.advance();
}

/// Ages every active inspiration and clears expired ones.
pub fn tick_inspirations(
    mut handlers: Query<(Entity, Option<&ColonistName>, &mut InspirationHandler)>,
) {
    for (entity, name, mut handler) in handlers.iter_mut() {
        // Avoid flagging change detection on colonists with nothing active
        if !handler.inspired() {
            continue;
        }

        let expired = match handler.current_mut() {
            Some(inspiration) => {
                inspiration.age_ticks += 1;
                inspiration.is_expired()
            }
            None => false,
        };

        if expired {
            if let Some(ended) = handler.clear() {
                match name {
                    Some(name) => tracing::info!(
                        "{}'s {} ran out",
                        name.short(),
                        ended.def.display_label()
                    ),
                    None => tracing::info!("{:?}'s {} ran out", entity, ended.def.display_label()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Colonist, Eligibility, WorkCapabilities};
    use crate::systems::colony_schedule;
    use colony_events::{InspirationDef, TICKS_PER_DAY};

    #[test]
    fn test_clock_advances() {
        let mut world = World::new();
        world.insert_resource(GameClock::default());

        let mut schedule = colony_schedule();
        schedule.run(&mut world);
        schedule.run(&mut world);

        assert_eq!(world.resource::<GameClock>().tick, 2);
    }

    #[test]
    fn test_inspiration_expires() {
        let mut world = World::new();
        world.insert_resource(GameClock::default());

        let def = InspirationDef::new("Frenzy_Go", "frenzy: go").with_duration_days(0.001);
        let duration = (0.001 * TICKS_PER_DAY as f32) as u64;
        assert!(duration > 0);

        let mut handler = InspirationHandler::default();
        let capabilities = WorkCapabilities::default();
        let eligibility = Eligibility { mood: 1.0, capabilities: &capabilities };
        assert!(handler.try_start(&def, None, false, eligibility, 0));

        let colonist = world
            .spawn((Colonist, ColonistName::new("Ada", "Doe"), handler))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(tick_inspirations);

        for _ in 0..duration - 1 {
            schedule.run(&mut world);
        }
        assert!(world.get::<InspirationHandler>(colonist).unwrap().inspired());

        schedule.run(&mut world);
        assert!(!world.get::<InspirationHandler>(colonist).unwrap().inspired());
    }
}
