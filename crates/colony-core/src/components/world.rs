//! World Resources

use bevy_ecs::prelude::*;
use colony_events::GameTimestamp;

/// Game clock, advanced once per simulation tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameClock {
    pub tick: u64,
}

impl GameClock {
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    pub fn timestamp(&self) -> GameTimestamp {
        GameTimestamp::from_tick(self.tick)
    }
}
