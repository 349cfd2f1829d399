//! Inspiration catalog snapshot and filtering.
//!
//! The snapshot is taken once per panel open. Filtering only selects which
//! entries are shown and never reorders or mutates the snapshot.

use colony_events::InspirationDef;
use std::cmp::Ordering;

use crate::host::InspirationSource;

/// Sorted snapshot of every known inspiration.
#[derive(Debug, Clone, Default)]
pub struct InspirationCatalog {
    entries: Vec<InspirationDef>,
}

impl InspirationCatalog {
    /// Captures and sorts the host's catalog.
    pub fn snapshot<S: InspirationSource + ?Sized>(source: &S) -> Self {
        Self::from_defs(source.all_inspirations())
    }

    pub fn from_defs(mut entries: Vec<InspirationDef>) -> Self {
        entries.sort_by(compare_defs);
        Self { entries }
    }

    pub fn entries(&self) -> &[InspirationDef] {
        &self.entries
    }

    /// Entries whose label or identifier contains `text`, ignoring case.
    /// Empty text yields the whole snapshot.
    pub fn filter(&self, text: &str) -> Vec<&InspirationDef> {
        if text.is_empty() {
            return self.entries.iter().collect();
        }
        let needle = text.to_lowercase();
        self.entries
            .iter()
            .filter(|def| matches_filter(def, &needle))
            .collect()
    }

    pub fn get(&self, def_name: &str) -> Option<&InspirationDef> {
        self.entries.iter().find(|d| d.def_name == def_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Case-sensitive order on label-or-identifier, identifier as tiebreak.
pub fn compare_defs(a: &InspirationDef, b: &InspirationDef) -> Ordering {
    a.display_label()
        .cmp(b.display_label())
        .then_with(|| a.def_name.cmp(&b.def_name))
}

/// `needle` must already be lowercase.
fn matches_filter(def: &InspirationDef, needle: &str) -> bool {
    let label_hit = def
        .label
        .as_deref()
        .is_some_and(|l| l.to_lowercase().contains(needle));
    label_hit || def.def_name.to_lowercase().contains(needle)
}
