use std::sync::Arc;

use serde::{Deserialize, Serialize};

use arca_engine::{ClassificationEngine, Prediction};
use arca_store::ArtifactStore;
use arca_types::ArtifactId;

use crate::error::{DispatchError, DispatchResult};

/// Where the artifact bytes for a classification request come from.
#[derive(Clone, Debug)]
pub enum ArtifactSource {
    /// A previously uploaded artifact, resolved through the store.
    Stored(ArtifactId),
    /// One-shot inline bytes; bypasses the store entirely and is never
    /// persisted.
    Inline(Vec<u8>),
}

/// Classification input payload: a bare text or a sequence of texts.
///
/// A bare text is normalized to a one-element sequence, so
/// `classify(id, "x")` and `classify(id, ["x"])` behave identically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextInputs {
    One(String),
    Many(Vec<String>),
}

impl TextInputs {
    /// Normalize into a non-empty sequence.
    pub fn into_sequence(self) -> DispatchResult<Vec<String>> {
        let inputs = match self {
            Self::One(text) => vec![text],
            Self::Many(texts) => texts,
        };
        if inputs.is_empty() {
            return Err(DispatchError::InvalidInput(
                "inputs must be a non-empty sequence of text items".into(),
            ));
        }
        Ok(inputs)
    }
}

impl From<&str> for TextInputs {
    fn from(text: &str) -> Self {
        Self::One(text.to_string())
    }
}

impl From<Vec<String>> for TextInputs {
    fn from(texts: Vec<String>) -> Self {
        Self::Many(texts)
    }
}

/// Routes classification requests to the right artifact and engine.
///
/// A pure read + external-compute operation: no stored state is mutated,
/// and every engine failure is mapped into the `DispatchError` taxonomy
/// rather than propagating as an unhandled fault.
pub struct ClassificationDispatcher {
    store: Arc<dyn ArtifactStore>,
    engine: Arc<dyn ClassificationEngine>,
}

impl ClassificationDispatcher {
    pub fn new(store: Arc<dyn ArtifactStore>, engine: Arc<dyn ClassificationEngine>) -> Self {
        Self { store, engine }
    }

    /// Resolve the artifact, load it through the engine, and classify each
    /// input in order.
    pub fn classify(
        &self,
        source: ArtifactSource,
        inputs: TextInputs,
    ) -> DispatchResult<Vec<Prediction>> {
        let inputs = inputs.into_sequence()?;
        let bytes = self.resolve(source)?;

        let model = self.engine.load(&bytes)?;
        let predictions = model.predict(&inputs)?;
        if predictions.len() != inputs.len() {
            return Err(DispatchError::Engine(format!(
                "engine returned {} results for {} inputs",
                predictions.len(),
                inputs.len()
            )));
        }
        Ok(predictions)
    }

    fn resolve(&self, source: ArtifactSource) -> DispatchResult<Vec<u8>> {
        match source {
            ArtifactSource::Stored(id) => {
                let artifact = self
                    .store
                    .find_by_id(id)?
                    .ok_or(DispatchError::NotFound(id))?;
                tracing::debug!(%id, size = artifact.size(), "resolved stored artifact");
                Ok(artifact.bytes)
            }
            ArtifactSource::Inline(bytes) => {
                if bytes.is_empty() {
                    return Err(DispatchError::InvalidInput("empty artifact payload".into()));
                }
                Ok(bytes)
            }
        }
    }
}
