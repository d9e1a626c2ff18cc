use base64::prelude::{Engine as _, BASE64_STANDARD};
use serde::{Deserialize, Serialize};

use arca_dispatch::TextInputs;
use arca_engine::Prediction;
use arca_types::{ArtifactId, Digest};

/// API version served under `/v1`.
pub const API_VERSION: u32 = 1;

/// Response to `POST /v1/artifacts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub id: ArtifactId,
    pub digest: Digest,
    /// `true` when this upload stored new content, `false` when the
    /// content already existed (the upload is an idempotent no-op).
    pub created: bool,
}

/// Response to `POST /v1/artifacts/check`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResponse {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ArtifactId>,
    /// Digest of the submitted bytes, echoed whether or not they exist.
    pub digest: Digest,
}

/// Request body for `POST /v1/artifacts/{id}/classify`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// A bare string or an array of strings.
    pub inputs: TextInputs,
}

/// Successful classification response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub status: String,
    pub results: Vec<Prediction>,
}

impl ClassifyResponse {
    pub fn success(results: Vec<Prediction>) -> Self {
        Self {
            status: "success".into(),
            results,
        }
    }
}

/// Request body for `POST /v1/predict`: one-shot classification of inline
/// artifact bytes, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Base64-encoded artifact bytes.
    pub artifact: String,
    pub inputs: TextInputs,
}

impl PredictRequest {
    /// Build a request from raw artifact bytes.
    pub fn from_bytes(bytes: &[u8], inputs: TextInputs) -> Self {
        Self {
            artifact: BASE64_STANDARD.encode(bytes),
            inputs,
        }
    }

    /// Decode the inline artifact bytes.
    pub fn decode_artifact(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64_STANDARD.decode(&self.artifact)
    }
}

/// Structured error body for every failed request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            message: message.into(),
        }
    }
}

/// Response to `GET /v1/health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
        }
    }
}

/// Response to `GET /v1/info`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub api_version: u32,
    pub artifact_count: usize,
}
