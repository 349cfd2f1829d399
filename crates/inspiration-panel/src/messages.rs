//! On-screen message log.
//!
//! Holds the most recent notifications with the real time they were posted.
//! Old entries fall off the front when the log is full or when they outlive
//! the configured lifetime.

use colony_events::Notification;
use std::collections::VecDeque;

use crate::config::FeedbackConfig;

/// Seconds over which a message fades before it expires
const FADE_SECS: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LoggedMessage {
    pub notification: Notification,
    /// Real time in seconds
    pub posted_at: f64,
}

#[derive(Debug, Clone)]
pub struct MessageLog {
    entries: VecDeque<LoggedMessage>,
    capacity: usize,
    lifetime_secs: f64,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::from_config(&FeedbackConfig::default())
    }
}

impl MessageLog {
    pub fn new(capacity: usize, lifetime_secs: f64) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            lifetime_secs,
        }
    }

    pub fn from_config(config: &FeedbackConfig) -> Self {
        Self::new(config.max_messages, config.message_lifetime_secs)
    }

    pub fn push(&mut self, notification: Notification, now: f64) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LoggedMessage {
            notification,
            posted_at: now,
        });
    }

    /// Drops messages older than the lifetime.
    pub fn prune(&mut self, now: f64) {
        let lifetime = self.lifetime_secs;
        self.entries.retain(|m| now - m.posted_at < lifetime);
    }

    /// Opacity for a message: 1.0 until the last second of its life.
    pub fn opacity(&self, message: &LoggedMessage, now: f64) -> f32 {
        let remaining = self.lifetime_secs - (now - message.posted_at);
        (remaining / FADE_SECS).clamp(0.0, 1.0) as f32
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LoggedMessage> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colony_events::{GameTimestamp, MessageKind};

    fn note(text: &str) -> Notification {
        Notification::new(text, MessageKind::NeutralEvent, GameTimestamp::start())
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = MessageLog::new(2, 10.0);
        log.push(note("a"), 0.0);
        log.push(note("b"), 0.0);
        log.push(note("c"), 0.0);

        let texts: Vec<&str> = log.iter().map(|m| m.notification.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let mut log = MessageLog::new(0, 10.0);
        log.push(note("a"), 0.0);
        log.push(note("b"), 0.0);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_prune_expired() {
        let mut log = MessageLog::new(8, 5.0);
        log.push(note("old"), 0.0);
        log.push(note("new"), 3.0);

        log.prune(4.9);
        assert_eq!(log.len(), 2);

        log.prune(5.0);
        assert_eq!(log.len(), 1);
        assert_eq!(log.iter().next().unwrap().notification.text, "new");
    }

    #[test]
    fn test_opacity_fades_at_end() {
        let mut log = MessageLog::new(8, 5.0);
        log.push(note("a"), 0.0);
        let message = log.iter().next().unwrap().clone();

        assert_eq!(log.opacity(&message, 1.0), 1.0);
        assert!((log.opacity(&message, 4.5) - 0.5).abs() < 1e-6);
        assert_eq!(log.opacity(&message, 6.0), 0.0);
    }
}
