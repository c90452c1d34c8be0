//! Mock users shown by the table stories.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use trestle_core::{Element, Node};
use trestle_widgets::{CellValue, TableColumn, TableRecord};

const BADGE_CLASSES: &str = "px-2 inline-flex text-xs leading-5 font-semibold rounded-full";

/// Role of a mock user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Full access
    Admin,
    /// Regular account
    User,
    /// Can edit content
    Editor,
}

impl Role {
    /// Role name as displayed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
            Self::Editor => "Editor",
        }
    }

    /// Badge colors for this role.
    #[must_use]
    pub const fn badge_classes(self) -> &'static str {
        match self {
            Self::Admin => "bg-green-100 text-green-800",
            Self::Editor => "bg-blue-100 text-blue-800",
            Self::User => "bg-gray-100 text-gray-800",
        }
    }

    /// Colored badge showing the role.
    #[must_use]
    pub fn badge(self) -> Node {
        Element::new("span")
            .class(BADGE_CLASSES)
            .class(self.badge_classes())
            .child(self.as_str())
            .into()
    }
}

/// A mock user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique row id
    pub id: u32,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Account role, shown as a badge
    pub role: Role,
    /// Age in years
    pub age: u32,
}

impl User {
    fn new(id: u32, name: &str, email: &str, role: Role, age: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            age,
        }
    }
}

impl TableRecord for User {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => self.role.as_str().into(),
            "age" => self.age.into(),
            _ => CellValue::Empty,
        }
    }
}

/// The five mock users.
#[must_use]
pub fn mock_users() -> Vec<User> {
    vec![
        User::new(1, "Jane Cooper", "jane.cooper@example.com", Role::Admin, 28),
        User::new(2, "Cody Fisher", "cody.fisher@example.com", Role::User, 45),
        User::new(3, "Esther Howard", "esther.howard@example.com", Role::Editor, 32),
        User::new(4, "Jenny Wilson", "jenny.wilson@example.com", Role::User, 25),
        User::new(5, "Kristin Watson", "kristin.watson@example.com", Role::Admin, 36),
    ]
}

/// Mock users as a story arg value.
#[must_use]
pub fn mock_users_json() -> Value {
    json!(mock_users())
}

/// Name, Email, Role (as a badge) and Age columns.
#[must_use]
pub fn user_columns() -> Vec<TableColumn<User>> {
    vec![
        TableColumn::new("name", "Name"),
        TableColumn::new("email", "Email").width(240.0),
        TableColumn::new("role", "Role")
            .width(100.0)
            .render(|user: &User| user.role.badge()),
        TableColumn::new("age", "Age").width(80.0),
    ]
}
