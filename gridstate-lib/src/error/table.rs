//! Controller-level error types

use super::RemoteError;

/// Errors reported by table controller operations.
///
/// None of these are fatal: a not-found id is a no-op, and a failed remote
/// call leaves the dataset untouched. The worst case is a stale render,
/// recoverable by reloading data or resetting filters.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// No record with the given id exists in the dataset.
    #[error("No record with id '{id}'")]
    NotFound { id: String },

    /// The backend answered `success: false`.
    ///
    /// The message is the backend's user-facing text, passed through for
    /// notification and never branched on.
    #[error("Operation rejected by backend{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Rejected { message: Option<String> },

    /// The call to the backend failed in transport.
    #[error("Remote call failed: {0}")]
    Remote(#[from] RemoteError),
}

impl TableError {
    /// Creates a new not-found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Returns the backend's pass-through message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` if this is a not-found result.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
