//! Error types for document element extraction and formatting.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while partitioning, formatting, or writing elements.
#[derive(Error, Debug)]
pub enum Error {
    /// An element does not carry a required field.
    #[error("Element {index} is missing required field `{field}`")]
    MissingField {
        /// Zero-based position of the offending element.
        index: usize,
        /// Name of the absent field (`type` or `text`).
        field: &'static str,
    },

    /// The input is not an ordered collection of element records.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file format is not supported or could not be detected.
    #[error("Unsupported or unrecognized file format: {0}")]
    UnsupportedFormat(String),

    /// The PDF could not be decoded.
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// Elements could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl Error {
    /// Build a `MissingField` error for the element at `index`.
    pub fn missing_field(index: usize, field: &'static str) -> Self {
        Self::MissingField { index, field }
    }
}
