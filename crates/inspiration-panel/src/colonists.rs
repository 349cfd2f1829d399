//! Colonist list. Re-queried from the host every frame since colonists come
//! and go between frames.

use crate::host::ColonyHost;

/// One row in the colonist column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColonistRow<C> {
    pub colonist: C,
    /// Short name, followed by the active inspiration in parentheses
    pub label: String,
    pub selected: bool,
}

/// Builds the colonist column for the current frame.
pub fn colonist_rows<H: ColonyHost + ?Sized>(
    host: &H,
    selected: Option<H::Colonist>,
) -> Vec<ColonistRow<H::Colonist>> {
    host.controllable_colonists()
        .into_iter()
        .map(|colonist| ColonistRow {
            colonist,
            label: colonist_label(host, colonist),
            selected: selected == Some(colonist),
        })
        .collect()
}

pub fn colonist_label<H: ColonyHost + ?Sized>(host: &H, colonist: H::Colonist) -> String {
    let name = host.short_name(colonist);
    match host.active_inspiration(colonist) {
        Some(def) => format!("{} ({})", name, def.display_label()),
        None => name,
    }
}
