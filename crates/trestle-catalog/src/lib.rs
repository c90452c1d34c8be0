//! Usage catalog for Trestle widgets.
//!
//! Each component has default args, arg controls and a list of named
//! stories. A story renders by merging component args, story args and
//! caller overrides, then building the widget from the merged args.
//!
//! ```
//! use trestle_catalog::Catalog;
//!
//! let catalog = Catalog::standard();
//! let node = catalog
//!     .render("components-inputfield--small", Some("helperText: Hi"))
//!     .unwrap();
//! assert!(node.to_html().contains("Small Input"));
//! ```

pub mod args;
pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod story;

pub use args::{FieldArgs, TableArgs};
pub use catalog::{parse_overrides, Catalog, StoryRef, SORTING_HINT};
pub use error::{CatalogError, Result};
pub use fixtures::{mock_users, user_columns, Role, User};
pub use story::{story_id, ArgType, Component, ComponentKind, Control, Decorator, Story};
