//! Selection state: the ordered set of selected ids and the store that owns it.

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;

use crate::catalog::Catalog;
use crate::diff::DiffPolicy;
use crate::diff::SelectionChange;

/// Ordered ids of the currently selected currencies.
///
/// Order is the order the user picked them in, which is the order the
/// selected chips are shown in. Duplicates are not removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet(Vec<String>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|selected| selected == id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// A copy with `id` appended.
    pub fn with(&self, id: &str) -> Self {
        let mut ids = self.0.clone();
        ids.push(id.to_string());
        Self(ids)
    }

    /// A copy with every occurrence of `id` filtered out.
    pub fn without(&self, id: &str) -> Self {
        Self(self.0.iter().filter(|selected| *selected != id).cloned().collect())
    }

    /// What a checkbox click on `id` produces: add when absent, remove when present.
    pub fn toggled(&self, id: &str) -> Self {
        if self.contains(id) {
            self.without(id)
        } else {
            self.with(id)
        }
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> From<Vec<S>> for SelectionSet {
    fn from(ids: Vec<S>) -> Self {
        ids.into_iter().collect()
    }
}

/// Owns the current [`SelectionSet`] of one selector instance.
///
/// `set_selection` is the only way to change it. Every call runs the diff
/// exactly once and hands back what the callbacks should receive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionStore {
    selection: SelectionSet,
    policy: DiffPolicy,
}

impl SelectionStore {
    pub fn new(policy: DiffPolicy) -> Self {
        Self {
            selection: SelectionSet::default(),
            policy,
        }
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn policy(&self) -> DiffPolicy {
        self.policy
    }

    /// Replaces the whole selection with `next` and reports the change.
    ///
    /// Ids are not checked against `catalog`. An unknown id simply
    /// contributes nothing to the change payload.
    pub fn set_selection(&mut self, next: SelectionSet, catalog: &Catalog) -> SelectionChange {
        let previous = std::mem::replace(&mut self.selection, next);
        let selected = catalog.selected_in(&self.selection);

        let deltas = match self.policy.deltas(&previous, &self.selection, catalog) {
            Ok(deltas) => deltas,
            Err(e) => {
                warn!("Skipping select/deselect notification: {}", e);
                Vec::new()
            }
        };

        debug!(
            "selection {} -> {} ids, {} delta(s)",
            previous.len(),
            self.selection.len(),
            deltas.len()
        );

        SelectionChange { selected, deltas }
    }

    /// Checkbox click on `id`.
    pub fn toggle(&mut self, id: &str, catalog: &Catalog) -> SelectionChange {
        let next = self.selection.toggled(id);
        self.set_selection(next, catalog)
    }

    /// Chip removal control on `id`.
    pub fn remove(&mut self, id: &str, catalog: &Catalog) -> SelectionChange {
        let next = self.selection.without(id);
        self.set_selection(next, catalog)
    }
}
