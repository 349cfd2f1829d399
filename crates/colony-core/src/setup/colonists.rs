//! Colonist Spawning
//!
//! Spawns a starting colony with randomized moods and work incapabilities,
//! plus a few visitors the player cannot control.

use bevy_ecs::prelude::*;
use colony_events::WorkTag;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::{
    Colonist, ColonistName, InspirationHandler, KindLabel, Mood, PlayerControlled, Spawned,
    WorkCapabilities,
};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Bram", "Cass", "Dov", "Edda", "Fenn", "Gale", "Hal", "Ines", "Jory", "Kit", "Lio",
    "Mara", "Nils", "Oona", "Pell", "Quin", "Rhea", "Sol", "Tam",
];

const LAST_NAMES: &[&str] = &[
    "Ashby", "Brandt", "Corrow", "Dunmore", "Ellis", "Farrow", "Grange", "Holt", "Ivers",
    "Kettle", "Lowe", "Marsh", "Nettle", "Orrin", "Pike", "Reyes",
];

const NICKNAMES: &[&str] = &["Sparks", "Doc", "Tiny", "Ace", "Moth", "Red"];

/// Work tags a colonist may be randomly incapable of
const INCAPABLE_CANDIDATES: &[WorkTag] = &[
    WorkTag::Social,
    WorkTag::Artistic,
    WorkTag::Violent,
    WorkTag::ManualDumb,
    WorkTag::Intellectual,
];

/// Configuration for colonist spawning
pub struct SpawnConfig {
    pub colonists: usize,
    pub visitors: usize,
    /// Chance per candidate tag that a colonist is incapable of it
    pub incapable_chance: f64,
    /// Chance a colonist goes by a nickname
    pub nickname_chance: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            colonists: 6,
            visitors: 2,
            incapable_chance: 0.15,
            nickname_chance: 0.25,
        }
    }
}

fn generate_name(rng: &mut SmallRng, nickname_chance: f64) -> ColonistName {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Ada");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Ashby");
    let name = ColonistName::new(first, last);
    if rng.gen_bool(nickname_chance) {
        match NICKNAMES.choose(rng) {
            Some(nick) => name.with_nick(*nick),
            None => name,
        }
    } else {
        name
    }
}

fn generate_capabilities(rng: &mut SmallRng, incapable_chance: f64) -> WorkCapabilities {
    WorkCapabilities::incapable_of(
        INCAPABLE_CANDIDATES
            .iter()
            .copied()
            .filter(|_| rng.gen_bool(incapable_chance)),
    )
}

/// Spawns player colonists followed by visitors. Returns the colonists only.
pub fn spawn_colonists(world: &mut World, rng: &mut SmallRng, config: &SpawnConfig) -> Vec<Entity> {
    let mut colonists = Vec::with_capacity(config.colonists);

    for _ in 0..config.colonists {
        let entity = world
            .spawn((
                Colonist,
                generate_name(rng, config.nickname_chance),
                KindLabel::default(),
                Spawned,
                PlayerControlled,
                Mood(rng.gen_range(0.2..1.0)),
                generate_capabilities(rng, config.incapable_chance),
                InspirationHandler::default(),
            ))
            .id();
        colonists.push(entity);
    }

    for _ in 0..config.visitors {
        world.spawn((
            Colonist,
            generate_name(rng, 0.0),
            KindLabel("visitor".to_string()),
            Spawned,
            Mood(rng.gen_range(0.2..1.0)),
            WorkCapabilities::default(),
            InspirationHandler::default(),
        ));
    }

    tracing::info!(
        "Spawned {} colonists and {} visitors",
        config.colonists,
        config.visitors
    );
    colonists
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::controllable_colonists;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_counts() {
        let mut world = World::new();
        let mut rng = SmallRng::seed_from_u64(42);
        let spawned = spawn_colonists(&mut world, &mut rng, &SpawnConfig::default());

        assert_eq!(spawned.len(), 6);
        assert_eq!(controllable_colonists(&world), spawned);

        let total = world.query::<&Colonist>().iter(&world).count();
        assert_eq!(total, 8);
    }

    #[test]
    fn test_spawn_deterministic() {
        let names = |seed| {
            let mut world = World::new();
            let mut rng = SmallRng::seed_from_u64(seed);
            let spawned = spawn_colonists(&mut world, &mut rng, &SpawnConfig::default());
            spawned
                .iter()
                .map(|e| world.get::<ColonistName>(*e).unwrap().full())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(7), names(7));
    }
}
