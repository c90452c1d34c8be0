//! Markup tree produced by `Widget::view`.
//!
//! A [`Node`] is the host-independent description of what a widget shows:
//! elements with attributes and classes, and text. Web hosts mount it
//! (or its [`Node::to_html`] serialization); tests query it directly.

use crate::class_list::ClassList;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    /// An element with tag, attributes, classes and children
    Element(Element),
    /// A text run
    Text {
        /// Text content (unescaped)
        text: String,
    },
    /// Several sibling nodes without a wrapping element
    Fragment {
        /// Sibling nodes
        children: Vec<Node>,
    },
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create a fragment from sibling nodes.
    #[must_use]
    pub fn fragment(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Fragment {
            children: children.into_iter().collect(),
        }
    }

    /// Get the element if this node is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Child nodes (empty for text).
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(el) => &el.children,
            Self::Fragment { children } => children,
            Self::Text { .. } => &[],
        }
    }

    /// Concatenated text of this node and all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text { text } => out.push_str(text),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    /// All elements in document order (pre-order) matching `pred`.
    #[must_use]
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(pred, &mut found);
        found
    }

    fn walk<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if let Self::Element(el) = self {
            if pred(el) {
                found.push(el);
            }
        }
        for child in self.children() {
            child.walk(pred, found);
        }
    }

    /// First element in document order matching `pred`.
    #[must_use]
    pub fn find<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
        self.find_all(pred).into_iter().next()
    }

    /// All elements with the given tag.
    #[must_use]
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(&|el| el.tag == tag)
    }

    /// All elements carrying the given class.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(&|el| el.classes.contains(class))
    }

    /// All elements whose attribute `name` equals `value`.
    #[must_use]
    pub fn find_by_attr(&self, name: &str, value: &str) -> Vec<&Element> {
        self.find_all(&|el| el.get_attr(name) == Some(value))
    }

    /// Serialize to HTML. Text and attribute values are escaped.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text { text } => out.push_str(&escape(text)),
            Self::Fragment { children } => {
                for child in children {
                    child.write_html(out);
                }
            }
            Self::Element(el) => el.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

/// A single attribute. `value: None` is a boolean attribute (`checked`, `disabled`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name
    pub name: String,
    /// Attribute value, `None` for boolean attributes
    pub value: Option<String>,
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Element {
    /// Tag name
    pub tag: String,
    /// Attributes in insertion order
    pub attrs: Vec<Attribute>,
    /// Presentation classes
    pub classes: ClassList,
    /// Children
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Append classes.
    #[must_use]
    pub fn class(mut self, classes: &str) -> Self {
        self.classes.add(classes);
        self
    }

    /// Replace the class list.
    #[must_use]
    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    /// Set an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, Some(value.into()));
        self
    }

    /// Set a boolean attribute when `on` holds.
    #[must_use]
    pub fn flag(mut self, name: &str, on: bool) -> Self {
        if on {
            self.set(name, None);
        }
        self
    }

    fn set(&mut self, name: &str, value: Option<String>) {
        if let Some(existing) = self.attrs.iter_mut().find(|a| a.name == name) {
            existing.value = value;
        } else {
            self.attrs.push(Attribute {
                name: name.to_string(),
                value,
            });
        }
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child when present.
    #[must_use]
    pub fn child_opt(mut self, child: Option<impl Into<Node>>) -> Self {
        if let Some(child) = child {
            self.children.push(child.into());
        }
        self
    }

    /// Append several children.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Get an attribute value. Boolean attributes read as `""`.
    #[must_use]
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_deref().unwrap_or(""))
    }

    /// Get a valued attribute. Boolean attributes read as `None`.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_deref())
    }

    /// Check whether an attribute (valued or boolean) is present.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Check whether a class is present.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Concatenated text of all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.to_string()));
        }
        for attr in &self.attrs {
            match &attr.value {
                Some(value) => {
                    let _ = write!(out, " {}=\"{}\"", attr.name, escape(value));
                }
                None => {
                    let _ = write!(out, " {}", attr.name);
                }
            }
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
