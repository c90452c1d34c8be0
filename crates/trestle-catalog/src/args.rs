//! Typed story args and widget construction from them.
//!
//! Arg keys are camelCase (`helperText`, `errorMessage`) so catalogs and
//! overrides written for web tooling can be reused unchanged.

use crate::fixtures::{user_columns, User};
use serde::{Deserialize, Serialize};
use tracing::info;
use trestle_widgets::{DataTable, Field, FieldSize, FieldVariant};

/// Args of the data table component.
///
/// Columns are fixed by the component and are not an arg.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TableArgs {
    /// Rows to display
    pub data: Vec<User>,
    /// Show loading placeholders
    pub loading: bool,
    /// Show row checkboxes
    pub selectable: bool,
    /// Extra wrapper classes
    pub class_name: Option<String>,
}

impl TableArgs {
    /// Build the table these args describe.
    #[must_use]
    pub fn build(self) -> DataTable<User> {
        let table = DataTable::new()
            .columns(user_columns())
            .data(self.data)
            .loading(self.loading)
            .selectable(self.selectable)
            .accessible_name("Users")
            .on_row_select(|rows: &[User]| {
                let ids: Vec<u32> = rows.iter().map(|u| u.id).collect();
                info!(?ids, "onRowSelect");
            });
        match self.class_name {
            Some(class) => table.class(class),
            None => table,
        }
    }
}

/// Args of the input field component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FieldArgs {
    /// Current input value
    pub value: Option<String>,
    /// Label above the input
    pub label: Option<String>,
    /// Placeholder text
    pub placeholder: Option<String>,
    /// Hint below the input
    pub helper_text: Option<String>,
    /// Error below the input, shown instead of the hint
    pub error_message: Option<String>,
    /// Disable editing
    pub disabled: bool,
    /// Mark the value as invalid
    pub invalid: bool,
    /// Visual variant (`filled`, `outlined`, `ghost`)
    pub variant: Option<FieldVariant>,
    /// Size (`sm`, `md`, `lg`)
    pub size: Option<FieldSize>,
    /// Extra input classes
    pub class_name: Option<String>,
}

impl FieldArgs {
    /// Build the field these args describe. Unset args keep the field defaults.
    #[must_use]
    pub fn build(self) -> Field {
        let mut field = Field::new()
            .disabled(self.disabled)
            .invalid(self.invalid)
            .on_change(|value: &str| info!(value, "onChange"));
        if let Some(value) = self.value {
            field = field.value(value);
        }
        if let Some(label) = self.label {
            field = field.label(label);
        }
        if let Some(placeholder) = self.placeholder {
            field = field.placeholder(placeholder);
        }
        if let Some(text) = self.helper_text {
            field = field.helper_text(text);
        }
        if let Some(text) = self.error_message {
            field = field.error_message(text);
        }
        if let Some(variant) = self.variant {
            field = field.variant(variant);
        }
        if let Some(size) = self.size {
            field = field.size(size);
        }
        if let Some(class) = self.class_name {
            field = field.class(class);
        }
        field
    }
}
