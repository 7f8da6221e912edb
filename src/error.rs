//! Error types for catalog lookups, selections and rendering.

use std::path::PathBuf;

use crate::style::IconStyle;

/// Result type alias for icon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving, decoding or rendering icons.
///
/// A query that matches nothing is not an error: bulk queries return an
/// empty list instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No catalog entry exists for the requested name in the given style.
    #[error("no icon named '{name}' in style {style}")]
    IconNotFound { style: IconStyle, name: String },

    /// A style tag did not match any known style.
    #[error("unknown icon style '{0}'")]
    UnknownStyle(String),

    /// A selection string was not of the form `<Style>.<Name>`.
    #[error("malformed selection '{0}': expected '<Style>.<Name>'")]
    MalformedSelection(String),

    /// The SVG produced for an icon could not be parsed or rasterised.
    #[error("failed to render '{name}': {message}")]
    Svg { name: String, message: String },

    /// A raster size, scale or sheet layout is out of range.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A tint colour was not a valid hex code.
    #[error("invalid colour '{value}': {source}")]
    InvalidColor {
        value: String,
        #[source]
        source: palette::rgb::FromHexError,
    },

    /// Configuration could not be (de)serialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// File I/O error.
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The background query worker is no longer running.
    #[error("query worker disconnected")]
    WorkerDisconnected,
}

impl Error {
    /// Create an icon-not-found error.
    pub fn icon_not_found(style: IconStyle, name: impl Into<String>) -> Self {
        Self::IconNotFound {
            style,
            name: name.into(),
        }
    }

    /// Create an SVG rendering error.
    pub fn svg(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Svg {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-dimensions error.
    pub fn invalid_dimensions(message: impl Into<String>) -> Self {
        Self::InvalidDimensions(message.into())
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
