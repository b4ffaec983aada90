//! Error types for platform key operations.

/// Errors that can occur when decomposing a platform key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// The key has the wrong number of dimensions for the requested arity.
    #[error("platform key '{key}' has {found} dimension(s), expected {expected}")]
    Arity {
        /// The offending key text.
        key: String,
        /// Number of dimensions the arity requires.
        expected: usize,
        /// Number of dimensions actually present.
        found: usize,
    },

    /// One of the dimensions is empty.
    #[error("platform key '{key}' has an empty dimension")]
    EmptyDimension {
        /// The offending key text.
        key: String,
    },
}

/// Result type for key operations.
pub type Result<T> = std::result::Result<T, KeyError>;
