//! Error type for the few operations that can fail loudly.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// `get_or_fail` on an absent value.
    #[error("No such element")]
    EmptyValue,
    #[error("key not found: {key}")]
    KeyNotFound { key: String },
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Indexed write or delete against a value that holds no entries.
    #[error("{kind} value does not support item assignment")]
    NotAContainer { kind: &'static str },
    #[error("{kind} value cannot be indexed with this key type")]
    InvalidKey { kind: &'static str },
    #[error("no attribute named `{name}`")]
    UnknownAttribute { name: String },
    #[error("{kind} value has no length")]
    Unsized { kind: &'static str },
    #[cfg(feature = "json")]
    #[error("attribute conversion failed: {0}")]
    Conversion(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error only reports that something was not there.
    pub fn is_miss(&self) -> bool {
        matches!(
            self,
            Error::EmptyValue
                | Error::KeyNotFound { .. }
                | Error::IndexOutOfRange { .. }
                | Error::UnknownAttribute { .. }
        )
    }
}

pub type Result<T> = core::result::Result<T, Error>;
