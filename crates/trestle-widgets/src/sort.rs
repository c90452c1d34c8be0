//! Single-column sort state.

use crate::record::{CellValue, TableRecord};
use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The column currently sorted and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSort {
    /// Column key
    pub column: String,
    /// Direction
    pub direction: SortDirection,
}

/// Sort state of a table: unset, or exactly one active column.
///
/// A direction only exists together with a column, so "sorted in some
/// direction but by nothing" cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<ActiveSort>,
}

impl SortState {
    /// Create an unsorted state.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// React to a header click on `column`.
    ///
    /// Clicking the active column flips its direction. Clicking any other
    /// column makes it active in ascending order. Returns the new direction.
    pub fn toggle(&mut self, column: &str) -> SortDirection {
        let direction = match &self.active {
            Some(active) if active.column == column => active.direction.reversed(),
            _ => SortDirection::Ascending,
        };
        self.active = Some(ActiveSort {
            column: column.to_string(),
            direction,
        });
        direction
    }

    /// Set the sort explicitly.
    pub fn set(&mut self, column: impl Into<String>, direction: SortDirection) {
        self.active = Some(ActiveSort {
            column: column.into(),
            direction,
        });
    }

    /// The active sort, if any.
    #[must_use]
    pub const fn active(&self) -> Option<&ActiveSort> {
        self.active.as_ref()
    }

    /// Key of the sorted column.
    #[must_use]
    pub fn column(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.column.as_str())
    }

    /// Direction of the sorted column.
    #[must_use]
    pub fn direction(&self) -> Option<SortDirection> {
        self.active.as_ref().map(|a| a.direction)
    }

    /// Direction if `column` is the sorted column.
    #[must_use]
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        self.active
            .as_ref()
            .filter(|a| a.column == column)
            .map(|a| a.direction)
    }

    /// Produce an ordered view of `data` without touching it.
    ///
    /// The sort is stable: rows whose values compare equal keep their
    /// relative order in both directions.
    #[must_use]
    pub fn apply<'a, T: TableRecord>(&self, data: &'a [T]) -> Vec<&'a T> {
        let Some(active) = &self.active else {
            return data.iter().collect();
        };

        let mut keyed: Vec<(CellValue, &T)> = data
            .iter()
            .map(|row| (row.field(&active.column), row))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| match active.direction {
            SortDirection::Ascending => a.compare(b),
            SortDirection::Descending => b.compare(a),
        });
        keyed.into_iter().map(|(_, row)| row).collect()
    }
}
