//! Unique element ids for linking markup (e.g. `<label for>` to `<input id>`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique element identifier.
///
/// Ids are allocated from a monotonically increasing counter and are never
/// reused, so two widgets alive at the same time never share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(String);

impl ElementId {
    /// Allocate a fresh id with the given prefix, e.g. `field-7`.
    #[must_use]
    pub fn unique(prefix: &str) -> Self {
        let n = NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("{prefix}-{n}"))
    }

    /// Use a caller-chosen id verbatim.
    #[must_use]
    pub fn fixed(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
