use crate::error::EngineResult;
use crate::prediction::Prediction;

/// External classification capability.
///
/// All implementations must satisfy these invariants:
/// - `load` either produces a usable model or fails with
///   `EngineError::CorruptArtifact`; it never panics on malformed bytes.
/// - Loading does not mutate the bytes or any shared state.
pub trait ClassificationEngine: Send + Sync {
    /// Deserialize artifact bytes into a loaded model.
    fn load(&self, bytes: &[u8]) -> EngineResult<Box<dyn LoadedModel>>;
}

/// A model materialized from artifact bytes, ready to predict.
///
/// `predict` is order-preserving: it returns exactly one prediction per
/// input, in input order. Internal failures surface as
/// `EngineError::Prediction` with the engine's message, never as a panic.
pub trait LoadedModel: Send + std::fmt::Debug {
    /// Classify each input text, in order.
    fn predict(&self, inputs: &[String]) -> EngineResult<Vec<Prediction>>;
}
