use thiserror::Error;

/// Errors from engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The artifact bytes could not be deserialized into a model.
    #[error("corrupt artifact: {0}")]
    CorruptArtifact(String),

    /// The prediction call itself failed inside the engine.
    #[error("prediction failed: {0}")]
    Prediction(String),
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
