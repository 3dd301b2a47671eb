pub mod keyring;
pub mod memory;

use std::fmt;

/// Outcome of a single backend primitive call. `Other` carries the opaque
/// platform-defined code verbatim for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    Success,
    NotFound,
    Duplicate,
    Other(i32),
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationStatus::Success => write!(f, "success"),
            OperationStatus::NotFound => write!(f, "item not found"),
            OperationStatus::Duplicate => write!(f, "duplicate item"),
            OperationStatus::Other(code) => write!(f, "platform code {}", code),
        }
    }
}

/// Record returned by a successful `query`. The value data is optional
/// because a platform entry can exist with a missing or unreadable payload;
/// the core maps that case to `UnexpectedTokenData` rather than crashing.
#[derive(Debug, Clone)]
pub struct SecretRecord {
    pub account: String,
    pub value_data: Option<Vec<u8>>,
}

/// Abstract capability over the platform secret vault. The core interacts
/// with storage only through these three primitives; statuses are the error
/// channel, mapped to the application taxonomy by the caller.
pub trait SecureBackend {
    /// Persist a new payload under `key`. Must not overwrite: an occupied
    /// key reports `Duplicate`.
    fn add(&self, key: &str, payload: &[u8]) -> OperationStatus;

    /// Look up the single record stored under `key` (limit-one semantics —
    /// at most one item can exist per key).
    fn query(&self, key: &str) -> (OperationStatus, Option<SecretRecord>);

    /// Remove whatever is stored under `key`, identified by key alone.
    /// Reports `NotFound` when the key is empty.
    fn remove(&self, key: &str) -> OperationStatus;
}
