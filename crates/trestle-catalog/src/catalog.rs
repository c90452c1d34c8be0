//! The story catalog: lookup, arg resolution and rendering.

use crate::args::{FieldArgs, TableArgs};
use crate::error::{CatalogError, Result};
use crate::fixtures::mock_users_json;
use crate::story::{Component, ComponentKind, Control, Story};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::debug;
use trestle_core::{Element, Node, Widget};

const VARIANTS: &[&str] = &["filled", "outlined", "ghost"];
const SIZES: &[&str] = &["sm", "md", "lg"];

/// Hint shown above the table in the sorting story.
pub const SORTING_HINT: &str = "Click on column headers to sort the data.";

/// Listing entry for one story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryRef<'a> {
    /// Kebab-case story id used by `render`
    pub id: String,
    /// Component title
    pub title: &'a str,
    /// Story name
    pub name: &'a str,
}

/// Collection of components and their stories.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    components: Vec<Component>,
}

impl Catalog {
    /// Empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The data table and input field components with all their stories.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .component(data_table_component())
            .component(input_field_component())
    }

    #[must_use]
    pub fn component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Every story, in catalog order.
    #[must_use]
    pub fn stories(&self) -> Vec<StoryRef<'_>> {
        self.components
            .iter()
            .flat_map(|c| {
                c.stories.iter().map(move |s| StoryRef {
                    id: c.story_id(s.name),
                    title: c.title,
                    name: s.name,
                })
            })
            .collect()
    }

    fn lookup(&self, id: &str) -> Result<(&Component, &Story)> {
        self.components
            .iter()
            .find_map(|c| {
                c.stories
                    .iter()
                    .find(|s| c.story_id(s.name) == id)
                    .map(|s| (c, s))
            })
            .ok_or_else(|| CatalogError::UnknownStory(id.to_string()))
    }

    /// Args of story `id` with optional YAML/JSON `overrides` applied.
    pub fn resolve_args(&self, id: &str, overrides: Option<&str>) -> Result<Value> {
        let (component, story) = self.lookup(id)?;
        let overrides = match overrides {
            Some(text) => parse_overrides(text)?,
            None => Map::new(),
        };
        let args = component.merge_args(story, &overrides)?;
        debug!(story = id, overrides = overrides.len(), "resolved args");
        Ok(args)
    }

    /// Render story `id` to a markup tree.
    pub fn render(&self, id: &str, overrides: Option<&str>) -> Result<Node> {
        let (component, story) = self.lookup(id)?;
        let args = self.resolve_args(id, overrides)?;
        let invalid = |source: serde_json::Error| CatalogError::InvalidArgs {
            story: id.to_string(),
            source,
        };

        let node = match component.kind {
            ComponentKind::DataTable => serde_json::from_value::<TableArgs>(args)
                .map_err(invalid)?
                .build()
                .view(),
            ComponentKind::InputField => serde_json::from_value::<FieldArgs>(args)
                .map_err(invalid)?
                .build()
                .view(),
        };

        Ok(match story.decorator {
            Some(decorate) => decorate(node),
            None => node,
        })
    }
}

/// Parse a YAML (or JSON) mapping of arg overrides. Blank text means none.
pub fn parse_overrides(text: &str) -> Result<Map<String, Value>> {
    if text.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_yaml_ng::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(CatalogError::InvalidType {
            arg: "overrides".to_string(),
            expected: "a mapping",
            value: other.to_string(),
        }),
    }
}

fn with_sorting_hint(table: Node) -> Node {
    Element::new("div")
        .child(
            Element::new("p")
                .class("mb-2 text-sm text-gray-600")
                .child(SORTING_HINT),
        )
        .child(table)
        .into()
}

fn data_table_component() -> Component {
    let users = mock_users_json();
    Component::new(
        "Components/DataTable",
        ComponentKind::DataTable,
        json!({
            "data": users,
            "loading": false,
            "selectable": false,
        }),
    )
    .arg_type("loading", Control::Boolean)
    .arg_type("selectable", Control::Boolean)
    .story(Story::new("Default", json!({ "data": users })))
    .story(Story::new(
        "Selectable",
        json!({ "selectable": true, "data": users }),
    ))
    .story(Story::new("Loading", json!({ "loading": true, "data": [] })))
    .story(Story::new("Empty", json!({ "data": [] })))
    .story(Story::new("WithSorting", json!({ "data": users })).decorate(with_sorting_hint))
}

fn input_field_component() -> Component {
    Component::new(
        "Components/InputField",
        ComponentKind::InputField,
        json!({
            "label": "Email Address",
            "placeholder": "you@example.com",
            "disabled": false,
            "invalid": false,
        }),
    )
    .arg_type("variant", Control::Select(VARIANTS))
    .arg_type("size", Control::Select(SIZES))
    .arg_type("disabled", Control::Boolean)
    .arg_type("invalid", Control::Boolean)
    .arg_type("label", Control::Text)
    .arg_type("placeholder", Control::Text)
    .arg_type("helperText", Control::Text)
    .arg_type("errorMessage", Control::Text)
    .story(Story::new("Outlined", json!({ "variant": "outlined" })))
    .story(Story::new("Filled", json!({ "variant": "filled" })))
    .story(Story::new("Ghost", json!({ "variant": "ghost" })))
    .story(Story::new("Small", json!({ "size": "sm", "label": "Small Input" })))
    .story(Story::new("Medium", json!({ "size": "md", "label": "Medium Input" })))
    .story(Story::new("Large", json!({ "size": "lg", "label": "Large Input" })))
    .story(Story::new(
        "WithHelperText",
        json!({ "helperText": "This is a helpful message." }),
    ))
    .story(Story::new(
        "Invalid",
        json!({ "invalid": true, "errorMessage": "This field is required." }),
    ))
    .story(Story::new(
        "Disabled",
        json!({ "label": "Disabled Input", "disabled": true, "value": "Cannot edit this" }),
    ))
}
