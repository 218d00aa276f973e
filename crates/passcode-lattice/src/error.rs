//! Error types for the widget crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a [`PasswordStyle`](crate::widget::password::PasswordStyle).
#[derive(Debug, Error)]
pub enum StyleError {
    /// The style file could not be read.
    #[error("failed to read style file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The style source is not valid TOML or has unknown keys.
    #[error("invalid style TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A colour value is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid colour for `{field}`: {value:?}")]
    InvalidColor { field: &'static str, value: String },

    /// A geometric value is negative or not finite.
    #[error("invalid value for `{field}`: {value} (must be finite and non-negative)")]
    InvalidGeometry { field: &'static str, value: f32 },
}

/// Result type for style loading.
pub type StyleResult<T> = std::result::Result<T, StyleError>;
