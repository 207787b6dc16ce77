//! Works out which currency a selection change added or removed.

use std::fmt;

use crate::catalog::Catalog;
use crate::currency_entity::CurrencyEntity;
use crate::selection::SelectionSet;

/// A single select or deselect notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionDelta {
    Added(CurrencyEntity),
    Removed(CurrencyEntity),
}

impl SelectionDelta {
    pub fn currency(&self) -> &CurrencyEntity {
        match self {
            Self::Added(c) | Self::Removed(c) => c,
        }
    }
}

/// Everything one `set_selection` call has to tell the outside world.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionChange {
    /// Payload for `on_change`: selected currencies in catalog order.
    pub selected: Vec<CurrencyEntity>,
    /// Payloads for `on_select` / `on_deselect`, in the order they fire.
    pub deltas: Vec<SelectionDelta>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Addition,
    Removal,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Addition => f.write_str("addition"),
            Self::Removal => f.write_str("removal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    #[error("{kind} detected but no catalog currency changed membership")]
    NoChangedEntity { kind: ChangeKind },
}

/// How a selection change is classified into select/deselect notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum DiffPolicy {
    /// Compares id sets: every newly present currency is `Added`, every newly
    /// absent one is `Removed`.
    #[default]
    #[strum(to_string = "set", serialize = "set-difference")]
    SetDifference,

    /// Longer selection means addition, anything else means removal. The
    /// reported currency is the first catalog entry missing from the old
    /// (addition) or new (removal) selection, even when that is not the one
    /// the user clicked.
    #[strum(to_string = "length", serialize = "length-heuristic")]
    LengthHeuristic,
}

impl DiffPolicy {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Computes the select/deselect notifications for `previous -> next`.
    pub fn deltas(
        &self,
        previous: &SelectionSet,
        next: &SelectionSet,
        catalog: &Catalog,
    ) -> Result<Vec<SelectionDelta>, DiffError> {
        match self {
            Self::SetDifference => Ok(set_difference(previous, next, catalog)),
            Self::LengthHeuristic => length_heuristic(previous, next, catalog).map(|d| vec![d]),
        }
    }
}

fn set_difference(previous: &SelectionSet, next: &SelectionSet, catalog: &Catalog) -> Vec<SelectionDelta> {
    let added = catalog
        .iter()
        .filter(|c| next.contains(&c.id) && !previous.contains(&c.id))
        .cloned()
        .map(SelectionDelta::Added);
    let removed = catalog
        .iter()
        .filter(|c| previous.contains(&c.id) && !next.contains(&c.id))
        .cloned()
        .map(SelectionDelta::Removed);
    added.chain(removed).collect()
}

fn length_heuristic(
    previous: &SelectionSet,
    next: &SelectionSet,
    catalog: &Catalog,
) -> Result<SelectionDelta, DiffError> {
    if next.len() > previous.len() {
        catalog
            .first_absent_from(previous)
            .cloned()
            .map(SelectionDelta::Added)
            .ok_or(DiffError::NoChangedEntity { kind: ChangeKind::Addition })
    } else {
        catalog
            .first_absent_from(next)
            .cloned()
            .map(SelectionDelta::Removed)
            .ok_or(DiffError::NoChangedEntity { kind: ChangeKind::Removal })
    }
}
