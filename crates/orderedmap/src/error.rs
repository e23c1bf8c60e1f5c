//! Error types for orderedmap

use std::fmt;

/// Result type alias for orderedmap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the checked accessors `fetch` and `assign`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key is the null/empty sentinel of its type
    NullKey,

    /// Key not present in the map
    KeyNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NullKey => write!(f, "Key is null or empty"),
            Error::KeyNotFound => write!(f, "Key not found"),
        }
    }
}

impl std::error::Error for Error {}
