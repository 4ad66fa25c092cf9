//! # Error Types

use crate::special::SpecialRole;

/// Errors from tokenbook operations.
///
/// All variants are construction-time failures; lookups are total and never
/// error.
#[derive(Debug, thiserror::Error)]
pub enum TokenbookError {
    /// A reserved special-token string collides with a source-listing line.
    #[error("special {role} token already exists in the vocabulary: {token:?}")]
    DuplicateSpecialToken {
        /// The reserved role whose string collided.
        role: SpecialRole,
        /// The colliding token string.
        token: String,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// The source listing could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for tokenbook operations.
pub type Result<T> = core::result::Result<T, TokenbookError>;
