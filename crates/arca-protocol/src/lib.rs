//! Wire types for the Arca HTTP API.
//!
//! Typed request and response bodies shared by the server and any client.
//! Validation happens at deserialization: the schema is explicit, so a
//! malformed payload is rejected before it reaches dispatch logic.

pub mod message;

pub use message::{
    CheckResponse, ClassifyRequest, ClassifyResponse, ErrorResponse, HealthResponse, InfoResponse,
    PredictRequest, UploadResponse, API_VERSION,
};
