//! Colonist Components

use bevy_ecs::prelude::*;
use colony_events::inspiration::capitalize_first;
use colony_events::WorkTag;
use serde::{Deserialize, Serialize};

/// Marker component identifying an entity as a colonist
#[derive(Component, Debug, Clone, Default)]
pub struct Colonist;

/// Present while the colonist is on the current map
#[derive(Component, Debug, Clone, Default)]
pub struct Spawned;

/// The player can give orders to this colonist
#[derive(Component, Debug, Clone, Default)]
pub struct PlayerControlled;

/// Incapacitated colonists cannot be controlled
#[derive(Component, Debug, Clone, Default)]
pub struct Downed;

/// Colonist name. Unnamed colonists fall back to their [`KindLabel`].
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonistName {
    pub first: String,
    pub nick: Option<String>,
    pub last: String,
}

impl ColonistName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            nick: None,
            last: last.into(),
        }
    }

    pub fn with_nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = Some(nick.into());
        self
    }

    /// Nickname, or first name when there is none.
    pub fn short(&self) -> &str {
        self.nick.as_deref().unwrap_or(&self.first)
    }

    pub fn full(&self) -> String {
        match &self.nick {
            Some(nick) => format!("{} '{}' {}", self.first, nick, self.last),
            None => format!("{} {}", self.first, self.last),
        }
    }
}

/// What kind of creature this is, e.g. "colonist"
#[derive(Component, Debug, Clone, PartialEq)]
pub struct KindLabel(pub String);

impl KindLabel {
    pub fn label_cap(&self) -> String {
        capitalize_first(&self.0)
    }
}

impl Default for KindLabel {
    fn default() -> Self {
        Self("colonist".to_string())
    }
}

/// Current mood, 0.0 (broken) to 1.0 (elated)
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Mood(pub f32);

impl Default for Mood {
    fn default() -> Self {
        Self(0.5)
    }
}

/// Kinds of work this colonist refuses to do
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct WorkCapabilities {
    pub disabled: Vec<WorkTag>,
}

impl WorkCapabilities {
    pub fn incapable_of(tags: impl IntoIterator<Item = WorkTag>) -> Self {
        Self {
            disabled: tags.into_iter().collect(),
        }
    }

    pub fn can_do(&self, tag: WorkTag) -> bool {
        !self.disabled.contains(&tag)
    }
}
