//! Administrative Override
//!
//! A deliberate, token-gated entry point that installs an inspiration while
//! skipping every eligibility check. Debug tooling uses it when the standard
//! start refuses.

use bevy_ecs::prelude::*;
use colony_events::{InspirationDef, OverrideError, OverrideToken, OVERRIDE_API_VERSION};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

use crate::components::{GameClock, Inspiration, InspirationHandler};

/// Resource issuing and validating override tokens.
#[derive(Resource)]
pub struct AdminOverrides {
    enabled: bool,
    issued: HashMap<u64, String>,
    rng: SmallRng,
}

impl AdminOverrides {
    pub fn new(enabled: bool, seed: u64) -> Self {
        Self {
            enabled,
            issued: HashMap::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Version of the override interface this host implements.
    pub fn api_version(&self) -> u32 {
        OVERRIDE_API_VERSION
    }

    /// Mints a token for `holder`. Returns `None` when overrides are disabled.
    pub fn issue(&mut self, holder: &str) -> Option<OverrideToken> {
        if !self.enabled {
            tracing::warn!("Refusing override token for {}: overrides disabled", holder);
            return None;
        }
        let mut secret: u64 = self.rng.gen();
        while self.issued.contains_key(&secret) {
            secret = self.rng.gen();
        }
        self.issued.insert(secret, holder.to_string());
        tracing::info!("Issued override token to {}", holder);
        Some(OverrideToken::issue(holder, secret))
    }

    pub fn revoke(&mut self, token: &OverrideToken) -> bool {
        self.issued.remove(&token.secret()).is_some()
    }

    pub fn validate(&self, token: &OverrideToken) -> Result<(), OverrideError> {
        if !self.enabled {
            return Err(OverrideError::Unavailable);
        }
        match self.issued.get(&token.secret()) {
            Some(holder) if holder == token.holder() => Ok(()),
            _ => Err(OverrideError::InvalidToken(token.holder().to_string())),
        }
    }
}

/// Installs `def` on `colonist`, bypassing eligibility.
///
/// Every check runs before the handler is touched, so on error the
/// colonist's inspiration slot is unchanged.
pub fn force_install(
    world: &mut World,
    token: &OverrideToken,
    colonist: Entity,
    def: &InspirationDef,
) -> Result<(), OverrideError> {
    world
        .get_resource::<AdminOverrides>()
        .ok_or(OverrideError::Unavailable)?
        .validate(token)?;

    let now = world.get_resource::<GameClock>().map_or(0, |c| c.tick);
    let mut entity = world
        .get_entity_mut(colonist)
        .ok_or(OverrideError::ColonistGone)?;
    let mut handler = entity
        .get_mut::<InspirationHandler>()
        .ok_or(OverrideError::NoHandler)?;

    let mut inspiration = Inspiration::instantiate(def);
    inspiration.post_start(now);
    handler.install(inspiration);

    tracing::info!(
        "Force-installed inspiration {} on {:?} for {}",
        def.def_name,
        colonist,
        token.holder()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Colonist;

    #[test]
    fn test_issue_and_validate() {
        let mut overrides = AdminOverrides::new(true, 1);
        let token = overrides.issue("panel").unwrap();
        assert!(overrides.validate(&token).is_ok());

        let forged = OverrideToken::issue("panel", token.secret().wrapping_add(1));
        assert_eq!(
            overrides.validate(&forged),
            Err(OverrideError::InvalidToken("panel".to_string()))
        );

        let wrong_holder = OverrideToken::issue("someone_else", token.secret());
        assert!(overrides.validate(&wrong_holder).is_err());

        assert!(overrides.revoke(&token));
        assert!(overrides.validate(&token).is_err());
    }

    #[test]
    fn test_disabled_overrides() {
        let mut overrides = AdminOverrides::new(false, 1);
        assert!(overrides.issue("panel").is_none());
        let token = OverrideToken::issue("panel", 0);
        assert_eq!(overrides.validate(&token), Err(OverrideError::Unavailable));
    }

    #[test]
    fn test_force_install_replaces_and_ignores_eligibility() {
        let mut world = World::new();
        let mut overrides = AdminOverrides::new(true, 9);
        let token = overrides.issue("panel").unwrap();
        world.insert_resource(overrides);
        world.insert_resource(GameClock { tick: 77 });
        let colonist = world.spawn((Colonist, InspirationHandler::default())).id();

        let def = InspirationDef::new("Frenzy_Shoot", "frenzy: shoot")
            .with_required_work(colony_events::WorkTag::Violent);
        force_install(&mut world, &token, colonist, &def).unwrap();

        let handler = world.get::<InspirationHandler>(colonist).unwrap();
        assert_eq!(handler.current_def(), Some(&def));
        assert_eq!(handler.current().unwrap().started_tick, 77);
    }

    #[test]
    fn test_force_install_failures_leave_slot_untouched() {
        let mut world = World::new();
        let def = InspirationDef::new("a", "a");
        let colonist = world.spawn((Colonist, InspirationHandler::default())).id();
        let stray = OverrideToken::issue("panel", 3);

        // No override resource at all
        assert_eq!(
            force_install(&mut world, &stray, colonist, &def),
            Err(OverrideError::Unavailable)
        );

        let mut overrides = AdminOverrides::new(true, 2);
        let token = overrides.issue("panel").unwrap();
        world.insert_resource(overrides);

        let no_handler = world.spawn(Colonist).id();
        assert_eq!(
            force_install(&mut world, &token, no_handler, &def),
            Err(OverrideError::NoHandler)
        );

        world.despawn(colonist);
        assert_eq!(
            force_install(&mut world, &token, colonist, &def),
            Err(OverrideError::ColonistGone)
        );
    }
}
