use arca_types::{ArtifactId, Digest};

/// Errors from artifact store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An artifact with the same digest already exists.
    ///
    /// Raised by `insert` when it loses the check-then-insert race (or when
    /// the caller skipped the lookup). The caller must re-read the winning
    /// record via `find_by_digest`; this error never reaches end users.
    #[error("artifact with digest {digest} already exists")]
    DigestConflict { digest: Digest },

    /// The requested artifact was not found.
    #[error("artifact not found: {0}")]
    NotFound(ArtifactId),

    /// The storage backend is unreachable or failing.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
