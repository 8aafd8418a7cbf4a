//! Session store capability
//!
//! A string key/value store scoped to one browser tab session. The backend
//! is chosen once at startup; services hold an `Rc<dyn SessionStore>` and
//! handle failures themselves, keeping their in-memory state.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

/// Errors from session store operations
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No storage is available in this environment
    #[error("session storage unavailable")]
    Unavailable,
    /// The store refused the write
    #[error("session storage quota exceeded")]
    QuotaExceeded,
    /// A stored value could not be decoded
    #[error("corrupt value under {key}: {reason}")]
    Corrupt {
        /// Key holding the value
        key: String,
        /// Decoder message
        reason: String,
    },
    /// Backend-specific failure
    #[error("session storage error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a corrupt value error
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::Corrupt {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a backend error with message
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// String key/value store
pub trait SessionStore {
    /// Read a value
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a value; deleting a missing key succeeds
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(StoreError::Unavailable.to_string(), "session storage unavailable");
        assert_eq!(
            StoreError::corrupt("views", "expected array").to_string(),
            "corrupt value under views: expected array"
        );
        assert_eq!(StoreError::backend("denied").to_string(), "session storage error: denied");
    }
}
