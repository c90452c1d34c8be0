//! Error types for catalog lookups and arg resolution.

use thiserror::Error;

/// Error resolving or rendering a story.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No story has this id
    #[error("unknown story: {0}")]
    UnknownStory(String),

    /// Override text is not valid YAML (or JSON)
    #[error("invalid overrides: {0}")]
    InvalidOverrides(#[from] serde_yaml_ng::Error),

    /// Merged args do not fit the component
    #[error("invalid args for {story}: {source}")]
    InvalidArgs {
        /// Story id
        story: String,
        /// Deserialization failure
        #[source]
        source: serde_json::Error,
    },

    /// Value outside a select control's options
    #[error("invalid value for '{arg}': {value} is not one of {}", .options.join(", "))]
    InvalidOption {
        /// Arg name
        arg: String,
        /// Rejected value
        value: String,
        /// Allowed values
        options: Vec<String>,
    },

    /// Value of the wrong type for its control
    #[error("invalid value for '{arg}': expected {expected}, got {value}")]
    InvalidType {
        /// Arg name
        arg: String,
        /// Expected kind
        expected: &'static str,
        /// Rejected value
        value: String,
    },
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
