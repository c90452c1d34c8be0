//! Multi-row selection state.

use crate::record::TableRecord;
use std::collections::HashSet;
use std::hash::Hash;

/// Set of selected row ids.
///
/// Ids are kept even after their rows leave the table's data; readers that
/// need rows go through [`SelectionSet::filter`], which silently skips
/// ids that no longer match a row.
#[derive(Debug, Clone)]
pub struct SelectionSet<Id> {
    ids: HashSet<Id>,
}

impl<Id: Eq + Hash> PartialEq for SelectionSet<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids
    }
}

impl<Id: Eq + Hash> Eq for SelectionSet<Id> {}

impl<Id> Default for SelectionSet<Id> {
    fn default() -> Self {
        Self {
            ids: HashSet::new(),
        }
    }
}

impl<Id: Clone + Eq + Hash> SelectionSet<Id> {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns `true` if it is now selected.
    pub fn toggle(&mut self, id: &Id) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Replace the selection with `ids`.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = Id>) {
        self.ids = ids.into_iter().collect();
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids (including ids whose rows are gone).
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over selected ids in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = &Id> {
        self.ids.iter()
    }

    /// Header checkbox state for a table holding `row_count` rows.
    ///
    /// This compares counts only, so stale ids can make it disagree with
    /// what is visibly checked.
    #[must_use]
    pub fn is_all_selected(&self, row_count: usize) -> bool {
        row_count > 0 && self.ids.len() == row_count
    }

    /// Rows of `data` whose id is selected, in data order.
    #[must_use]
    pub fn filter<'a, T>(&self, data: &'a [T]) -> Vec<&'a T>
    where
        T: TableRecord<Id = Id>,
    {
        data.iter().filter(|row| self.contains(&row.id())).collect()
    }
}
