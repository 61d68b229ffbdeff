//! Error types for the rlyt library

use std::io;
use thiserror::Error;

/// Main error type for archive decoding and encoding
#[derive(Debug, Error)]
pub enum LayoutError {
    /// IO error occurred during stream operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The archive does not start with the expected signature
    #[error("Bad magic: expected {expected:?}, found {found:?}")]
    BadMagic { expected: String, found: String },

    /// The stream ended in the middle of a field
    #[error("Truncated input: needed {wanted} byte(s) at offset {offset:#X}")]
    Truncated { offset: u64, wanted: usize },

    /// A scope bracket without a matching partner
    #[error("Unbalanced scope: '{tag}' at offset {offset:#X}")]
    UnbalancedScope { tag: String, offset: u64 },

    /// An index or object that cannot be found in its table
    #[error("Unresolved reference: {0}")]
    UnresolvedReference(String),

    /// Structurally invalid content
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Invalid UTF-16 label, or a name with characters that have no
    /// single-byte form
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

impl LayoutError {
    /// Whether the failsafe reader may recover from this error by skipping
    /// the section that produced it.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LayoutError::Truncated { .. }
                | LayoutError::UnresolvedReference(_)
                | LayoutError::InvalidFormat(_)
                | LayoutError::Encoding(_)
        )
    }
}

/// Result type alias for rlyt operations
pub type Result<T> = std::result::Result<T, LayoutError>;

impl From<String> for LayoutError {
    fn from(s: String) -> Self {
        LayoutError::Custom(s)
    }
}

impl From<&str> for LayoutError {
    fn from(s: &str) -> Self {
        LayoutError::Custom(s.to_string())
    }
}
