use std::fmt;

/// Error type for shared-store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The host store handle is absent (permission/configuration fault).
    Unavailable,
    /// Serialization/deserialization error.
    Serde(String),
    /// Storage-level error reported by the host store.
    Storage(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "shared store is not accessible"),
            StoreError::Serde(msg) => write!(f, "collection serialization error: {}", msg),
            StoreError::Storage(msg) => write!(f, "storage error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
