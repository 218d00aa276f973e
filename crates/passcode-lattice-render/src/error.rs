//! Error types for the rendering crate.

use std::path::PathBuf;

/// Result type alias for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while preparing rendering resources.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The font data could not be parsed.
    #[error("Failed to parse font: {0}")]
    FontParse(String),

    /// File I/O error.
    #[error("Failed to read font '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
