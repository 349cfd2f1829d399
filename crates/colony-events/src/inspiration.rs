//! Inspiration Definitions
//!
//! Immutable catalog entries describing a temporary inspiration that the host
//! can start on a colonist.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of work a colonist may be incapable of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkTag {
    Social,
    Crafting,
    Artistic,
    Violent,
    ManualDumb,
    Intellectual,
}

impl fmt::Display for WorkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkTag::Social => write!(f, "social"),
            WorkTag::Crafting => write!(f, "crafting"),
            WorkTag::Artistic => write!(f, "artistic"),
            WorkTag::Violent => write!(f, "violent"),
            WorkTag::ManualDumb => write!(f, "manual_dumb"),
            WorkTag::Intellectual => write!(f, "intellectual"),
        }
    }
}

/// Behaviour class used by the host to instantiate an active inspiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InspirationClass {
    /// Next crafted or built item gets a quality boost
    #[default]
    Creativity,
    /// Better prices with the next trader
    Trade,
    /// Next recruitment attempt is guaranteed
    Recruitment,
    /// Greatly increased work speed
    FrenzyWork,
    /// Greatly increased aiming speed
    FrenzyShoot,
    /// Greatly increased movement speed
    FrenzyGo,
}

/// A catalog entry for one inspiration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspirationDef {
    /// Unique identifier
    pub def_name: String,
    /// Display label, lowercase by convention
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub class: InspirationClass,
    /// How long the inspiration lasts once started
    #[serde(default = "default_duration_days")]
    pub base_duration_days: f32,
    /// Work the colonist must be capable of to receive this inspiration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_work: Option<WorkTag>,
    /// Minimum mood for the standard (unforced) start to succeed
    #[serde(default = "default_min_mood")]
    pub min_mood: f32,
}

fn default_duration_days() -> f32 {
    2.0
}

fn default_min_mood() -> f32 {
    0.5
}

impl InspirationDef {
    pub fn new(def_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            def_name: def_name.into(),
            label: Some(label.into()),
            description: None,
            class: InspirationClass::default(),
            base_duration_days: default_duration_days(),
            required_work: None,
            min_mood: default_min_mood(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_class(mut self, class: InspirationClass) -> Self {
        self.class = class;
        self
    }

    pub fn with_required_work(mut self, work: WorkTag) -> Self {
        self.required_work = Some(work);
        self
    }

    pub fn with_duration_days(mut self, days: f32) -> Self {
        self.base_duration_days = days;
        self
    }

    /// Label if present, otherwise the identifier.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.def_name)
    }

    /// Label with its first character upper-cased; identifier when unlabelled.
    pub fn label_cap(&self) -> String {
        match self.label.as_deref() {
            Some(label) => capitalize_first(label),
            None => self.def_name.clone(),
        }
    }

    /// Description, treating an empty string as absent.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Upper-cases the first character of `s`.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Optional context passed to the host when starting an inspiration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartContext {
    /// Why the inspiration was started, shown in the host's log
    pub reason: Option<String>,
}

impl StartContext {
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}
