//! # Error Types

/// Errors from wordgrid operations.
#[derive(Debug, thiserror::Error)]
pub enum WordgridError {
    /// Dictionary size exceeds the capacity of the target id type.
    #[error("dictionary size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The dictionary size that exceeded the capacity.
        size: usize,
    },

    /// A sequence produced no tokens where the policy requires at least one.
    #[error("sequence {index} produced no tokens; term frequency is undefined")]
    EmptySequence {
        /// The index of the offending sequence in its batch.
        index: usize,
    },

    /// Dictionary or policy data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Parse error (base64, integer, header, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Structured (JSON) codec error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Compact binary codec error.
    #[error("binary error: {0}")]
    Binary(#[from] bincode::Error),
}

/// Result type for wordgrid operations.
pub type WGResult<T> = core::result::Result<T, WordgridError>;
