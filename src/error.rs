//! Crate-wide error type.

use std::path::PathBuf;

/// Errors raised while building widgets, editing forms, or loading site config.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A carousel needs at least one item to loop over.
    #[error("carousel requires at least one item")]
    EmptyCarousel,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Counter targets must be finite numbers.
    #[error("counter target must be finite, got {0}")]
    NonFiniteTarget(f64),

    /// The field name is not part of the form's schema.
    #[error("form `{form}` has no field named `{field}`")]
    UnknownField { form: &'static str, field: String },

    /// The value is not one of the field's allowed options.
    #[error("`{value}` is not a valid option for field `{field}`")]
    UnknownOption { field: &'static str, value: String },

    /// The edit does not match the field's kind (e.g. text into a checkbox group).
    #[error("field `{field}` does not accept {attempted}")]
    FieldKind {
        field: &'static str,
        attempted: &'static str,
    },

    /// Required fields were left empty; the form is unchanged.
    #[error("missing required fields: {}", missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    /// Reading a site configuration file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The site configuration is not valid TOML for [`SiteConfig`](crate::config::SiteConfig).
    #[error("failed to parse site config: {0}")]
    Config(#[from] toml::de::Error),

    /// A submission could not be serialized for the local log.
    #[error("failed to serialize submission: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
