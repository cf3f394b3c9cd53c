//! Error types for sondagens-dxf

use std::io;
use thiserror::Error;

/// Main error type for drawing generation
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while writing output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Two input groups requested the same layer name
    #[error("Duplicate layer name in input: {0:?}")]
    DuplicateLayer(String),

    /// A group carried an empty or blank layer name
    #[error("Invalid layer name: {0:?}")]
    InvalidLayerName(String),

    /// An explicitly requested color is not part of the palette
    #[error("Color {color} requested for layer {layer:?} is outside the palette")]
    ColorOutsidePalette {
        /// Layer that carried the request
        layer: String,
        /// The rejected ACI code
        color: u8,
    },

    /// A palette was constructed with no colors
    #[error("Palette must contain at least one color")]
    EmptyPalette,

    /// A color code outside the valid ACI range (1-255)
    #[error("Invalid ACI color code: {0}")]
    InvalidColor(u8),

    /// Table operation failed (duplicate entry, missing entry)
    #[error("Table error: {0}")]
    Table(String),

    /// Encoding error while producing the output string
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for sondagens-dxf operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}
