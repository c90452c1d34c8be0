//! Row records and cell values.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// A row of host data displayed by a [`DataTable`](crate::DataTable).
///
/// Rows are identified by [`TableRecord::id`], never by structural equality:
/// two rows with identical fields but different ids are different rows.
///
/// # Examples
///
/// ```
/// use trestle_widgets::{CellValue, TableRecord};
///
/// struct Fruit {
///     id: u32,
///     name: &'static str,
/// }
///
/// impl TableRecord for Fruit {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.id
///     }
///
///     fn field(&self, key: &str) -> CellValue {
///         match key {
///             "name" => self.name.into(),
///             _ => CellValue::Empty,
///         }
///     }
/// }
///
/// let apple = Fruit { id: 1, name: "Apple" };
/// assert_eq!(apple.field("name").display(), "Apple");
/// ```
pub trait TableRecord {
    /// Unique row identifier.
    type Id: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    /// The row's identifier.
    fn id(&self) -> Self::Id;

    /// The raw value stored under a column key. Unknown keys yield
    /// [`CellValue::Empty`].
    fn field(&self, key: &str) -> CellValue;
}

/// A raw field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Empty cell
    Empty,
}

impl CellValue {
    /// Get display text for the cell.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format!("{n}"),
            Self::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
            Self::Empty => String::new(),
        }
    }

    /// Order two values of a column.
    ///
    /// Values of the same kind use their natural order: text by code point,
    /// numbers numerically, `false` before `true`. Anything else (mixed kinds,
    /// `Empty`, NaN) compares equal, so a stable sort leaves those rows in
    /// their original relative order.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<V: Into<Self>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}
