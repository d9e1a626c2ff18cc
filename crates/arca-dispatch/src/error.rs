use arca_types::ArtifactId;

use arca_engine::EngineError;
use arca_store::StoreError;

/// Errors surfaced to callers of upload and classification operations.
///
/// Every operation in this crate returns one of these; nothing panics for a
/// bad request. `StoreError::DigestConflict` has no variant here on
/// purpose: it is recovered internally by re-reading the winner and must
/// never reach a caller.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Malformed or missing payload or input list. Client fault, no side
    /// effect.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The referenced artifact ID does not exist.
    #[error("artifact not found: {0}")]
    NotFound(ArtifactId),

    /// The artifact bytes cannot be deserialized by the engine. The
    /// artifact (if stored) is retained.
    #[error("corrupt artifact: {0}")]
    CorruptArtifact(String),

    /// The engine's prediction call failed; the engine's message is
    /// attached.
    #[error("engine error: {0}")]
    Engine(String),

    /// The store is unreachable. Fatal for the current request, not
    /// retried here.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// Result alias for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

impl From<StoreError> for DispatchError {
    fn from(err: StoreError) -> Self {
        match err {
            // A conflict leaking through here means a caller skipped the
            // re-read fallback; treat it as a storage fault rather than
            // inventing a client-facing meaning for it.
            StoreError::DigestConflict { .. } => Self::StorageUnavailable(err.to_string()),
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::Unavailable(msg) => Self::StorageUnavailable(msg),
            StoreError::Io(e) => Self::StorageUnavailable(e.to_string()),
        }
    }
}

impl From<EngineError> for DispatchError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::CorruptArtifact(msg) => Self::CorruptArtifact(msg),
            EngineError::Prediction(msg) => Self::Engine(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_not_found() {
        let err: DispatchError = StoreError::NotFound(ArtifactId::new(5)).into();
        assert!(matches!(err, DispatchError::NotFound(id) if id == ArtifactId::new(5)));
    }

    #[test]
    fn engine_corrupt_maps_to_corrupt_artifact() {
        let err: DispatchError = EngineError::CorruptArtifact("bad json".into()).into();
        assert!(matches!(err, DispatchError::CorruptArtifact(_)));
    }

    #[test]
    fn engine_prediction_maps_to_engine() {
        let err: DispatchError = EngineError::Prediction("boom".into()).into();
        assert!(matches!(err, DispatchError::Engine(msg) if msg == "boom"));
    }
}
