//! Error types for store operations.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
///
/// The taxonomy is deliberately small: backends classify exactly one
/// condition themselves (the absence of an entry becomes [`NotFound`]) and
/// wrap everything else in [`Backend`] with the engine's own diagnostic
/// preserved. No retries happen below this layer; retry policy belongs to
/// the caller.
///
/// [`NotFound`]: StoreError::NotFound
/// [`Backend`]: StoreError::Backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entry exists for the requested key.
    ///
    /// Returned by `get` only. Absence is an expected, non-fatal state;
    /// callers must be able to tell it apart from operation failure.
    #[error("key not found")]
    NotFound,

    /// A session with the backend could not be established.
    #[error("connection error: {message}")]
    Connection {
        /// Description of the connection failure.
        message: String,
    },

    /// Schema bootstrap failed for a reason other than "already exists".
    #[error("schema error: {message}")]
    Schema {
        /// Description of the bootstrap failure.
        message: String,
    },

    /// Any other backend-reported failure, preserved verbatim.
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The store handle has been closed.
    #[error("store is closed")]
    Closed,

    /// No driver is registered under the requested name.
    #[error("unknown backend: {name}")]
    UnknownBackend {
        /// The name that was looked up.
        name: String,
    },
}

impl StoreError {
    /// Creates a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a schema error.
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Wraps a backend-reported failure, keeping it as the error source.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }

    /// Wraps an opaque backend failure described only by a message.
    pub fn backend_message(message: impl Into<String>) -> Self {
        Self::Backend(message.into().into())
    }

    /// Returns `true` if this is the absence sentinel.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
