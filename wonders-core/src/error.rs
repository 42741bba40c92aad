use thiserror::Error;

/// Failures reported by the external identity/document-store backend.
///
/// The catalog, localization, search, and map layers never produce
/// errors; lookup misses resolve through fallback chains or empty
/// results instead. Only favorites writes and subscriptions can fail,
/// and the manager logs and drops those failures rather than
/// propagating them into display flows.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("write rejected: {0}")]
    WriteRejected(String),
}

pub type Result<T> = std::result::Result<T, BackendError>;
