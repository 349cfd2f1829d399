//! Panel-local selection state. Reset on every open, never persisted.

use colony_events::InspirationDef;

#[derive(Debug, Clone)]
pub struct SelectionState<C> {
    pub colonist: Option<C>,
    pub inspiration: Option<InspirationDef>,
    pub filter_text: String,
}

impl<C> Default for SelectionState<C> {
    fn default() -> Self {
        Self {
            colonist: None,
            inspiration: None,
            filter_text: String::new(),
        }
    }
}

impl<C> SelectionState<C> {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Granting needs both a colonist and an inspiration.
    pub fn can_grant(&self) -> bool {
        self.colonist.is_some() && self.inspiration.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_grant_requires_both() {
        let mut state = SelectionState::<u32>::default();
        assert!(!state.can_grant());

        state.colonist = Some(1);
        assert!(!state.can_grant());

        state.inspiration = Some(InspirationDef::new("a", "a"));
        assert!(state.can_grant());

        state.colonist = None;
        assert!(!state.can_grant());
    }

    #[test]
    fn test_reset() {
        let mut state = SelectionState {
            colonist: Some(3u32),
            inspiration: Some(InspirationDef::new("a", "a")),
            filter_text: "fre".to_string(),
        };
        state.reset();
        assert!(state.colonist.is_none());
        assert!(state.inspiration.is_none());
        assert!(state.filter_text.is_empty());
    }
}
