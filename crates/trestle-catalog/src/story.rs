//! Stories, arg controls and arg merging.

use crate::error::{CatalogError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;
use trestle_core::Node;

/// How an arg is edited, and which values it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "options", rename_all = "lowercase")]
pub enum Control {
    /// `true` or `false`
    Boolean,
    /// Any string; `null` unsets the arg
    Text,
    /// One of a fixed list of strings
    Select(&'static [&'static str]),
}

impl Control {
    /// Check that `value` is acceptable for the arg `arg`.
    pub fn validate(self, arg: &str, value: &Value) -> Result<()> {
        match (self, value) {
            (Self::Boolean, Value::Bool(_)) | (Self::Text, Value::String(_) | Value::Null) => Ok(()),
            (Self::Select(options), Value::String(s)) if options.contains(&s.as_str()) => Ok(()),
            (Self::Select(options), Value::String(_)) => Err(CatalogError::InvalidOption {
                arg: arg.to_string(),
                value: value.to_string(),
                options: options.iter().map(ToString::to_string).collect(),
            }),
            (Self::Boolean, _) => Err(invalid_type(arg, "a boolean", value)),
            (Self::Text, _) => Err(invalid_type(arg, "a string", value)),
            (Self::Select(_), _) => Err(invalid_type(arg, "a string", value)),
        }
    }
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn invalid_type(arg: &str, expected: &'static str, value: &Value) -> CatalogError {
    CatalogError::InvalidType {
        arg: arg.to_string(),
        expected,
        value: value.to_string(),
    }
}

/// A controlled arg of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArgType {
    /// Arg key
    pub name: &'static str,
    /// Accepted values
    pub control: Control,
}

impl ArgType {
    #[must_use]
    pub const fn new(name: &'static str, control: Control) -> Self {
        Self { name, control }
    }
}

/// Wraps a story's rendered widget, e.g. to add explanatory text around it.
pub type Decorator = fn(Node) -> Node;

/// A named set of args for a component.
#[derive(Debug, Clone)]
pub struct Story {
    /// Story name, e.g. `WithSorting`
    pub name: &'static str,
    /// Args layered over the component defaults
    pub args: Map<String, Value>,
    /// Optional wrapper around the rendered widget
    pub decorator: Option<Decorator>,
}

impl Story {
    /// Create a story. Non-object `args` count as no args.
    #[must_use]
    pub fn new(name: &'static str, args: Value) -> Self {
        Self {
            name,
            args: into_object(args),
            decorator: None,
        }
    }

    /// Wrap the rendered widget with `decorator`.
    #[must_use]
    pub fn decorate(mut self, decorator: Decorator) -> Self {
        self.decorator = Some(decorator);
        self
    }
}

/// Widget a component renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComponentKind {
    /// Renders a `DataTable` of users
    DataTable,
    /// Renders a `Field`
    InputField,
}

/// A component entry: default args, controls and stories.
#[derive(Debug, Clone)]
pub struct Component {
    /// Catalog title, e.g. `Components/DataTable`
    pub title: &'static str,
    /// Widget the stories render
    pub kind: ComponentKind,
    /// Controlled args, validated on every merge
    pub arg_types: Vec<ArgType>,
    /// Default args for every story
    pub args: Map<String, Value>,
    /// Stories in display order
    pub stories: Vec<Story>,
}

impl Component {
    /// Create a component with default args. Non-object `args` count as no args.
    #[must_use]
    pub fn new(title: &'static str, kind: ComponentKind, args: Value) -> Self {
        Self {
            title,
            kind,
            arg_types: Vec::new(),
            args: into_object(args),
            stories: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg_type(mut self, name: &'static str, control: Control) -> Self {
        self.arg_types.push(ArgType::new(name, control));
        self
    }

    #[must_use]
    pub fn story(mut self, story: Story) -> Self {
        self.stories.push(story);
        self
    }

    /// Id of the story named `name`.
    #[must_use]
    pub fn story_id(&self, name: &str) -> String {
        story_id(self.title, name)
    }

    /// Merge args for `story`: component args, then story args, then
    /// `overrides`, each later layer replacing whole values of earlier ones.
    /// Every controlled arg in the result is validated against its control.
    pub fn merge_args(&self, story: &Story, overrides: &Map<String, Value>) -> Result<Value> {
        let mut merged = self.args.clone();
        for layer in [&story.args, overrides] {
            for (key, value) in layer {
                merged.insert(key.clone(), value.clone());
            }
        }
        for arg_type in &self.arg_types {
            if let Some(value) = merged.get(arg_type.name) {
                arg_type.control.validate(arg_type.name, value)?;
            }
        }
        trace!(title = self.title, story = story.name, keys = merged.len(), "merged args");
        Ok(Value::Object(merged))
    }
}

/// Kebab-case story id: `"Components/DataTable"` + `"WithSorting"` gives
/// `"components-datatable--with-sorting"`.
#[must_use]
pub fn story_id(title: &str, name: &str) -> String {
    format!("{}--{}", kebab(title, false), kebab(name, true))
}

fn kebab(text: &str, split_words: bool) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev_lower = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if split_words && c.is_uppercase() && prev_lower {
                out.push('-');
            }
            out.extend(c.to_lowercase());
            prev_lower = c.is_lowercase() || c.is_numeric();
        } else {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            prev_lower = false;
        }
    }
    out.trim_end_matches('-').to_string()
}
