//! `Field` widget: a styled, controlled single-line text input.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use tracing::{debug, trace};
use trestle_core::{
    palette,
    widget::{AccessibleRole, LayoutResult, TextStyle},
    Canvas, ClassList, Color, Constraints, Element, ElementId, Event, FontWeight, Key, Node,
    Point, Rect, Size, TypeId, Widget,
};

/// Placeholder shown when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "Enter text...";

const BASE_CLASSES: &str =
    "w-full transition-all duration-200 ease-in-out border rounded-md focus:outline-none focus:ring-2";
const INVALID_CLASSES: &str = "border-red-500 focus:ring-red-500 text-red-700 placeholder-red-400";
const DISABLED_CLASSES: &str =
    "disabled:bg-gray-200 disabled:cursor-not-allowed disabled:text-gray-500";
const WRAPPER_CLASSES: &str = "w-full";
const LABEL_CLASSES: &str = "block text-sm font-medium text-gray-700 mb-1";
const HELPER_CLASSES: &str = "mt-1 text-xs text-gray-500";
const ERROR_CLASSES: &str = "mt-1 text-xs text-red-600";

const LABEL_HEIGHT: f32 = 24.0;
const MESSAGE_HEIGHT: f32 = 20.0;
const MIN_WIDTH: f32 = 200.0;

/// Callback invoked with the candidate value on every input.
pub type ChangeCallback = Box<dyn FnMut(&str) + Send + Sync>;

/// Visual style of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldVariant {
    /// Gray fill, no visible border
    Filled,
    /// White background with a gray border
    #[default]
    Outlined,
    /// Transparent until hovered or focused
    Ghost,
}

impl FieldVariant {
    /// Presentation classes for this variant.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Filled => {
                "bg-gray-100 border-gray-100 focus:bg-white focus:ring-blue-500 focus:border-blue-500"
            }
            Self::Outlined => "bg-white border-gray-300 focus:ring-blue-500 focus:border-blue-500",
            Self::Ghost => {
                "bg-transparent border-transparent hover:bg-gray-100 focus:bg-white focus:ring-blue-500 focus:border-blue-500"
            }
        }
    }

    const fn background(self) -> Color {
        match self {
            Self::Filled => palette::GRAY_100,
            Self::Outlined => Color::WHITE,
            Self::Ghost => Color::TRANSPARENT,
        }
    }

    const fn border(self) -> Color {
        match self {
            Self::Filled => palette::GRAY_100,
            Self::Outlined => palette::GRAY_300,
            Self::Ghost => Color::TRANSPARENT,
        }
    }
}

/// Size of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldSize {
    #[serde(rename = "sm")]
    Small,
    #[default]
    #[serde(rename = "md")]
    Medium,
    #[serde(rename = "lg")]
    Large,
}

impl FieldSize {
    /// Presentation classes for this size.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Small => "px-2 py-1 text-sm",
            Self::Medium => "px-3 py-2 text-base",
            Self::Large => "px-4 py-3 text-lg",
        }
    }

    /// Font size in pixels.
    #[must_use]
    pub const fn font_size(self) -> f32 {
        match self {
            Self::Small => 14.0,
            Self::Medium => 16.0,
            Self::Large => 18.0,
        }
    }

    /// Horizontal and vertical padding in pixels.
    #[must_use]
    pub const fn padding(self) -> (f32, f32) {
        match self {
            Self::Small => (8.0, 4.0),
            Self::Medium => (12.0, 8.0),
            Self::Large => (16.0, 12.0),
        }
    }

    fn input_height(self) -> f32 {
        let (_, py) = self.padding();
        // line height is 1.5x the font size
        2.0f32.mul_add(py, self.font_size() * 1.5)
    }
}

/// Message shown under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMessage<'a> {
    /// Neutral hint
    Helper(&'a str),
    /// Error, announced as an alert
    Error(&'a str),
}

/// Message emitted on input with the value the field would have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChanged {
    /// Candidate value
    pub value: String,
}

/// `Field` widget for labelled text entry.
///
/// The field is controlled: it never edits its own value. Input events
/// compute the candidate value, pass it to `on_change` and return a
/// [`FieldChanged`] message; the host decides whether to call
/// [`Field::set_value`].
pub struct Field {
    value: String,
    on_change: Option<ChangeCallback>,
    label: Option<String>,
    placeholder: String,
    helper_text: Option<String>,
    error_message: Option<String>,
    disabled: bool,
    invalid: bool,
    variant: FieldVariant,
    size: FieldSize,
    class: Option<String>,
    id: ElementId,
    test_id_value: Option<String>,
    focused: bool,
    bounds: Rect,
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("label", &self.label)
            .field("disabled", &self.disabled)
            .field("invalid", &self.invalid)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl Field {
    /// Create a new field with a fresh element id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: String::new(),
            on_change: None,
            label: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            variant: FieldVariant::default(),
            size: FieldSize::default(),
            class: None,
            id: ElementId::unique("field"),
            test_id_value: None,
            focused: false,
            bounds: Rect::default(),
        }
    }

    /// Set the displayed value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the change callback.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(&str) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set helper text.
    #[must_use]
    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Set the error message.
    #[must_use]
    pub fn error_message(mut self, text: impl Into<String>) -> Self {
        self.error_message = Some(text.into());
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set invalid state.
    #[must_use]
    pub const fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Set the variant.
    #[must_use]
    pub const fn variant(mut self, variant: FieldVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size.
    #[must_use]
    pub const fn size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    /// Add input classes after the built-in ones.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Use a specific element id instead of a generated one.
    #[must_use]
    pub fn element_id(mut self, id: ElementId) -> Self {
        self.id = id;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Replace the displayed value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Toggle the invalid state.
    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    /// Replace the error message.
    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }

    /// Get current value.
    #[must_use]
    pub fn get_value(&self) -> &str {
        &self.value
    }

    /// Get the label, if one is shown.
    #[must_use]
    pub fn get_label(&self) -> Option<&str> {
        non_empty(self.label.as_deref())
    }

    /// Get placeholder.
    #[must_use]
    pub fn get_placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Get the variant.
    #[must_use]
    pub const fn get_variant(&self) -> FieldVariant {
        self.variant
    }

    /// Get the size.
    #[must_use]
    pub const fn get_size(&self) -> FieldSize {
        self.size
    }

    /// Get the element id shared by the label and the input.
    #[must_use]
    pub const fn get_id(&self) -> &ElementId {
        &self.id
    }

    /// Check if disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Raw invalid flag, as reported through `aria-invalid`.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Whether invalid styling applies. Disabled fields never look invalid.
    #[must_use]
    pub const fn is_invalid_styled(&self) -> bool {
        self.invalid && !self.disabled
    }

    /// Check if focused.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// The message under the input. An error message hides helper text.
    #[must_use]
    pub fn message(&self) -> Option<FieldMessage<'_>> {
        non_empty(self.error_message.as_deref())
            .map(FieldMessage::Error)
            .or_else(|| non_empty(self.helper_text.as_deref()).map(FieldMessage::Helper))
    }

    /// Classes applied to the input element.
    #[must_use]
    pub fn classes(&self) -> ClassList {
        ClassList::from(BASE_CLASSES)
            .with(self.size.classes())
            .with(self.variant.classes())
            .with_if(self.is_invalid_styled(), INVALID_CLASSES)
            .with(DISABLED_CLASSES)
            .with_opt(self.class.as_deref())
    }

    fn emit_change(&mut self, value: String) -> Option<Box<dyn Any + Send>> {
        debug!(field = %self.id, len = value.len(), "field input");
        if let Some(callback) = self.on_change.as_mut() {
            callback(&value);
        }
        Some(Box::new(FieldChanged { value }))
    }

    // ===== Geometry =====

    fn label_height(&self) -> f32 {
        if self.get_label().is_some() {
            LABEL_HEIGHT
        } else {
            0.0
        }
    }

    fn message_height(&self) -> f32 {
        if self.message().is_some() {
            MESSAGE_HEIGHT
        } else {
            0.0
        }
    }

    /// Bounds of the input box within the laid-out field.
    #[must_use]
    pub fn input_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y + self.label_height(),
            self.bounds.width,
            self.size.input_height(),
        )
    }

    fn colors(&self) -> (Color, Color, Color) {
        let background = if self.disabled {
            palette::GRAY_200
        } else {
            self.variant.background()
        };
        let border = if self.is_invalid_styled() {
            palette::RED_500
        } else if self.focused {
            palette::BLUE_500
        } else {
            self.variant.border()
        };
        let text = if self.disabled {
            palette::GRAY_500
        } else if self.is_invalid_styled() {
            palette::RED_700
        } else {
            palette::GRAY_800
        };
        (background, border, text)
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

impl Widget for Field {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let height = self.label_height() + self.size.input_height() + self.message_height();
        let width = MIN_WIDTH.max(constraints.min_width);
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(label) = self.get_label() {
            let style = TextStyle::sized(14.0, palette::GRAY_700).weight(FontWeight::Medium);
            canvas.draw_text(label, self.bounds.origin(), &style);
        }

        let input = self.input_rect();
        let (background, border, text_color) = self.colors();
        canvas.fill_rounded_rect(input, 6.0, background);
        canvas.stroke_rect(input, border, 1.0);

        let (px, py) = self.size.padding();
        let text_at = Point::new(input.x + px, input.y + py);
        if self.value.is_empty() {
            let color = if self.is_invalid_styled() {
                palette::RED_400
            } else {
                palette::GRAY_400
            };
            let style = TextStyle::sized(self.size.font_size(), color);
            canvas.draw_text(&self.placeholder, text_at, &style);
        } else {
            let style = TextStyle::sized(self.size.font_size(), text_color);
            canvas.draw_text(&self.value, text_at, &style);
        }

        let message_at = Point::new(input.x, input.bottom() + 4.0);
        match self.message() {
            Some(FieldMessage::Error(text)) => {
                canvas.draw_text(text, message_at, &TextStyle::sized(12.0, palette::RED_600));
            }
            Some(FieldMessage::Helper(text)) => {
                canvas.draw_text(text, message_at, &TextStyle::sized(12.0, palette::GRAY_500));
            }
            None => {}
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            trace!(field = %self.id, "event ignored, field disabled");
            return None;
        }

        match event {
            Event::MouseDown { position, .. } => {
                self.focused = self.input_rect().contains_point(position);
            }
            Event::FocusIn => {
                self.focused = true;
            }
            Event::FocusOut => {
                self.focused = false;
            }
            Event::TextInput { text } if self.focused && !text.is_empty() => {
                let candidate = format!("{}{text}", self.value);
                return self.emit_change(candidate);
            }
            Event::KeyDown {
                key: Key::Backspace,
            } if self.focused && !self.value.is_empty() => {
                let mut candidate = self.value.clone();
                candidate.pop();
                return self.emit_change(candidate);
            }
            _ => {}
        }

        None
    }

    fn view(&self) -> Node {
        let input = Element::new("input")
            .attr("id", self.id.as_str())
            .attr("type", "text")
            .attr("value", self.value.as_str())
            .attr("placeholder", self.placeholder.as_str())
            .flag("disabled", self.disabled)
            .attr("aria-invalid", self.invalid.to_string())
            .classes(self.classes());
        let input = match &self.test_id_value {
            Some(id) => input.attr("data-testid", id.as_str()),
            None => input,
        };

        let label = self.get_label().map(|text| {
            Element::new("label")
                .attr("for", self.id.as_str())
                .class(LABEL_CLASSES)
                .child(text)
        });

        let message = self.message().map(|message| match message {
            FieldMessage::Helper(text) => Element::new("p").class(HELPER_CLASSES).child(text),
            FieldMessage::Error(text) => Element::new("p")
                .class(ERROR_CLASSES)
                .attr("role", "alert")
                .child(text),
        });

        Element::new("div")
            .class(WRAPPER_CLASSES)
            .child_opt(label)
            .child(input)
            .child_opt(message)
            .into()
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.get_label()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::TextInput
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
