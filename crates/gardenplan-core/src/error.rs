//! Error handling for the garden plan editor
//!
//! The scene engine has very few failure paths. Most "errors" in the editor are
//! no-op conditions (copy with nothing selected, paste with an empty clipboard)
//! and are not represented here. What is represented:
//! - Geometry errors (a resize gesture carrying an unusable scale factor)
//! - Color errors (parsing hex color strings)
//! - Export errors (rasterization or document encoding failed)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Axis of a resize gesture scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleAxis {
    X,
    Y,
}

impl std::fmt::Display for ScaleAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Geometry error type
///
/// Raised by the transform resolver before any minimum-size clamp is applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Scale factor is zero, negative, NaN or infinite
    #[error("Invalid {axis} scale factor: {value}")]
    InvalidScale {
        /// The axis the factor belongs to.
        axis: ScaleAxis,
        /// The rejected value.
        value: f64,
    },
}

/// Color error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not of the form `#rrggbb` or `#rgb`
    #[error("Invalid hex color '{0}'")]
    InvalidHex(String),
}

/// Export error type
///
/// Export failures are never retried or swallowed by the editor; they are
/// returned to whoever triggered the export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The drawing surface could not produce a bitmap
    #[error("Rasterization failed: {0}")]
    Rasterize(String),

    /// The rasterized bitmap is empty
    #[error("Rasterized bitmap is empty ({width}x{height})")]
    EmptyBitmap {
        /// Bitmap width in pixels.
        width: u32,
        /// Bitmap height in pixels.
        height: u32,
    },

    /// The document could not be encoded
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// I/O error while writing the document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main error type for the editor
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Color error
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, Error>;
