//! User-facing feedback: on-screen messages and audio cues.

use serde::{Deserialize, Serialize};

use crate::timestamp::GameTimestamp;

/// Styling of an on-screen message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    PositiveEvent,
    NeutralEvent,
    RejectInput,
}

/// A short message posted to the on-screen log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
    pub kind: MessageKind,
    pub timestamp: GameTimestamp,
}

impl Notification {
    pub fn new(text: impl Into<String>, kind: MessageKind, timestamp: GameTimestamp) -> Self {
        Self {
            text: text.into(),
            kind,
            timestamp,
        }
    }
}

/// Short UI sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCue {
    Click,
}
