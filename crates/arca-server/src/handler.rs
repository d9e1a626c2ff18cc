use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use arca_crypto::ArtifactHasher;
use arca_dispatch::ArtifactSource;
use arca_protocol::{
    CheckResponse, ClassifyRequest, ClassifyResponse, HealthResponse, InfoResponse,
    PredictRequest, UploadResponse, API_VERSION,
};
use arca_types::ArtifactId;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// Informational label for the artifact, typically the original
    /// filename. Not part of identity.
    pub label: Option<String>,
}

/// `POST /v1/artifacts` — store raw artifact bytes, deduplicated.
///
/// 201 when new content was stored, 200 when the content already existed.
pub async fn upload_handler(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let outcome = state.coordinator.submit(body.to_vec(), params.label)?;
    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(UploadResponse {
            id: outcome.artifact.id,
            digest: outcome.artifact.digest,
            created: outcome.created,
        }),
    ))
}

/// `POST /v1/artifacts/check` — digest-only existence lookup, no insert.
pub async fn check_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CheckResponse>), ApiError> {
    let digest = ArtifactHasher::ARTIFACT.digest(&body);
    match state.coordinator.check(&body)? {
        Some(found) => Ok((
            StatusCode::OK,
            Json(CheckResponse {
                exists: true,
                id: Some(found.id),
                digest,
            }),
        )),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(CheckResponse {
                exists: false,
                id: None,
                digest,
            }),
        )),
    }
}

/// `POST /v1/artifacts/{id}/classify` — classify against a stored artifact.
pub async fn classify_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let results = state
        .dispatcher
        .classify(ArtifactSource::Stored(ArtifactId::new(id)), request.inputs)?;
    Ok(Json(ClassifyResponse::success(results)))
}

/// `POST /v1/predict` — one-shot classification of inline bytes; nothing is
/// persisted.
pub async fn predict_handler(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let bytes = request
        .decode_artifact()
        .map_err(|e| ApiError::bad_request(format!("artifact is not valid base64: {e}")))?;
    let results = state
        .dispatcher
        .classify(ArtifactSource::Inline(bytes), request.inputs)?;
    Ok(Json(ClassifyResponse::success(results)))
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> Result<Json<InfoResponse>, ApiError> {
    let artifact_count = state
        .store
        .count()
        .map_err(arca_dispatch::DispatchError::from)?;
    Ok(Json(InfoResponse {
        name: "arca-server".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        api_version: API_VERSION,
        artifact_count,
    }))
}
