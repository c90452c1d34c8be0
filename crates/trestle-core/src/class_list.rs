//! Class list composition for markup output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered, de-duplicated list of presentation classes.
///
/// Classes are opaque tokens owned by the host stylesheet. Adding a string
/// splits it on whitespace, so `"px-6 py-3"` contributes two classes.
///
/// # Examples
///
/// ```
/// use trestle_core::ClassList;
///
/// let disabled = true;
/// let classes = ClassList::new()
///     .with("w-full border")
///     .with_if(!disabled, "border-red-500")
///     .with_if(disabled, "cursor-not-allowed");
/// assert_eq!(classes.to_string(), "w-full border cursor-not-allowed");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Create an empty class list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append every whitespace-separated class in `classes`.
    pub fn add(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            if !self.contains(class) {
                self.0.push(class.to_string());
            }
        }
    }

    /// Builder form of [`ClassList::add`].
    #[must_use]
    pub fn with(mut self, classes: &str) -> Self {
        self.add(classes);
        self
    }

    /// Append `classes` only when `condition` holds.
    #[must_use]
    pub fn with_if(self, condition: bool, classes: &str) -> Self {
        if condition {
            self.with(classes)
        } else {
            self
        }
    }

    /// Append an optional caller override.
    #[must_use]
    pub fn with_opt(self, classes: Option<&str>) -> Self {
        match classes {
            Some(classes) => self.with(classes),
            None => self,
        }
    }

    /// Check whether a single class is present.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no classes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        Self::new().with(classes)
    }
}
