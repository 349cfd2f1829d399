//! Panel lifecycle, view model, and intent handling.
//!
//! Each frame the renderer calls [`InspirationPanel::refresh`], draws
//! [`InspirationPanel::view`], and feeds whatever the user did back through
//! [`InspirationPanel::handle`].

use colony_events::FeedbackCue;

use crate::catalog::InspirationCatalog;
use crate::colonists::{colonist_rows, ColonistRow};
use crate::coordinator::{ActionCoordinator, GrantOutcome, RemoveOutcome};
use crate::host::{ColonyHost, FeedbackSink, InspirationSource};
use crate::selection::SelectionState;

const NONE_SELECTED: &str = "None selected";

/// Something the user did this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelIntent<C> {
    SelectColonist(C),
    /// Carries the def_name
    SelectInspiration(String),
    SetFilter(String),
    Grant,
    RemoveCurrent,
    Close,
}

/// What handling an intent did.
#[derive(Debug, Clone, PartialEq)]
pub enum HandleOutcome {
    /// Selection or filter changed, or the panel closed
    Updated,
    /// The intent was inert (missing selection, unknown def)
    Ignored,
    Grant(GrantOutcome),
    Remove(RemoveOutcome),
}

/// One row in the inspiration column.
#[derive(Debug, Clone, PartialEq)]
pub struct InspirationRow {
    pub def_name: String,
    pub label: String,
    pub selected: bool,
}

/// The third column: selection summary and action buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionColumn {
    pub colonist_name: String,
    /// Label of the selected colonist's active inspiration
    pub current_inspiration: Option<String>,
    pub inspiration_name: String,
    pub description: Option<String>,
    pub can_grant: bool,
    pub can_remove: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView<C> {
    pub colonists: Vec<ColonistRow<C>>,
    pub inspirations: Vec<InspirationRow>,
    pub filter_text: String,
    pub action: ActionColumn,
}

/// The three-column grant panel.
#[derive(Debug, Clone)]
pub struct InspirationPanel<C> {
    open: bool,
    catalog: InspirationCatalog,
    selection: SelectionState<C>,
    coordinator: ActionCoordinator,
}

impl<C: Copy + Eq + std::fmt::Debug> InspirationPanel<C> {
    pub fn new(coordinator: ActionCoordinator) -> Self {
        Self {
            open: false,
            catalog: InspirationCatalog::default(),
            selection: SelectionState::default(),
            coordinator,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the panel: snapshots the catalog and clears all selections.
    pub fn open<S: InspirationSource + ?Sized>(&mut self, source: &S) {
        self.catalog = InspirationCatalog::snapshot(source);
        self.selection.reset();
        self.open = true;
        tracing::debug!("Inspiration panel opened with {} definitions", self.catalog.len());
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle<S: InspirationSource + ?Sized>(&mut self, source: &S) {
        if self.open {
            self.close();
        } else {
            self.open(source);
        }
    }

    pub fn catalog(&self) -> &InspirationCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState<C> {
        &self.selection
    }

    pub fn coordinator_mut(&mut self) -> &mut ActionCoordinator {
        &mut self.coordinator
    }

    /// Drops a selected colonist that died, left, or lost player control
    /// since the last frame.
    pub fn refresh<H: ColonyHost<Colonist = C> + ?Sized>(&mut self, host: &H) {
        if let Some(colonist) = self.selection.colonist {
            if !host.is_live(colonist) {
                tracing::debug!("Selected colonist {:?} is gone, clearing selection", colonist);
                self.selection.colonist = None;
            }
        }
    }

    pub fn view<H: ColonyHost<Colonist = C> + ?Sized>(&self, host: &H) -> PanelView<C> {
        let selected_def = self.selection.inspiration.as_ref();

        let inspirations = self
            .catalog
            .filter(&self.selection.filter_text)
            .into_iter()
            .map(|def| InspirationRow {
                def_name: def.def_name.clone(),
                label: def.label_cap(),
                selected: selected_def.is_some_and(|s| s.def_name == def.def_name),
            })
            .collect();

        // A colonist that went stale since the last refresh counts as unselected
        let colonist = self.selection.colonist.filter(|c| host.is_live(*c));
        let current = colonist.and_then(|c| host.active_inspiration(c));

        let action = ActionColumn {
            colonist_name: colonist
                .map(|c| host.full_name(c))
                .unwrap_or_else(|| NONE_SELECTED.to_string()),
            current_inspiration: current.as_ref().map(|d| d.display_label().to_string()),
            inspiration_name: selected_def
                .map(|d| d.label_cap())
                .unwrap_or_else(|| NONE_SELECTED.to_string()),
            description: selected_def
                .and_then(|d| d.description())
                .map(str::to_string),
            can_grant: colonist.is_some() && self.selection.can_grant(),
            can_remove: current.is_some(),
        };

        PanelView {
            colonists: colonist_rows(host, colonist),
            inspirations,
            filter_text: self.selection.filter_text.clone(),
            action,
        }
    }

    /// Applies one intent. A closed panel ignores everything but `Close`,
    /// and a stale colonist selection is dropped before acting.
    pub fn handle<H, F>(
        &mut self,
        intent: PanelIntent<C>,
        host: &mut H,
        feedback: &mut F,
    ) -> HandleOutcome
    where
        H: ColonyHost<Colonist = C> + ?Sized,
        F: FeedbackSink + ?Sized,
    {
        if !self.open && !matches!(intent, PanelIntent::Close) {
            return HandleOutcome::Ignored;
        }
        self.refresh(&*host);

        match intent {
            PanelIntent::SelectColonist(colonist) => {
                if !host.is_live(colonist) {
                    return HandleOutcome::Ignored;
                }
                self.selection.colonist = Some(colonist);
                feedback.play(FeedbackCue::Click);
                HandleOutcome::Updated
            }
            PanelIntent::SelectInspiration(def_name) => match self.catalog.get(&def_name) {
                Some(def) => {
                    self.selection.inspiration = Some(def.clone());
                    feedback.play(FeedbackCue::Click);
                    HandleOutcome::Updated
                }
                None => {
                    tracing::debug!("Ignoring selection of unknown inspiration {}", def_name);
                    HandleOutcome::Ignored
                }
            },
            PanelIntent::SetFilter(text) => {
                self.selection.filter_text = text;
                HandleOutcome::Updated
            }
            PanelIntent::Grant => {
                let (Some(colonist), Some(def)) =
                    (self.selection.colonist, self.selection.inspiration.as_ref())
                else {
                    return HandleOutcome::Ignored;
                };
                HandleOutcome::Grant(self.coordinator.grant(host, feedback, colonist, def))
            }
            PanelIntent::RemoveCurrent => {
                let Some(colonist) = self.selection.colonist else {
                    return HandleOutcome::Ignored;
                };
                match self.coordinator.remove(host, feedback, colonist) {
                    RemoveOutcome::NotInspired => HandleOutcome::Ignored,
                    removed => HandleOutcome::Remove(removed),
                }
            }
            PanelIntent::Close => {
                self.close();
                HandleOutcome::Updated
            }
        }
    }
}
