//! Upload coordination and classification dispatch for Arca.
//!
//! This crate ties the leaves together. [`UploadCoordinator`] makes uploads
//! idempotent: it hashes incoming bytes, consults the store, and either
//! confirms "already exists" or inserts and assigns an ID — with the losing
//! side of a concurrent identical upload falling back to the winner.
//! [`ClassificationDispatcher`] resolves an artifact (stored ID or inline
//! bytes), hands it to the [`ClassificationEngine`](arca_engine::ClassificationEngine),
//! and maps every failure into the [`DispatchError`] taxonomy — nothing
//! crosses this boundary as a panic.

pub mod classify;
pub mod error;
pub mod upload;

pub use classify::{ArtifactSource, ClassificationDispatcher, TextInputs};
pub use error::{DispatchError, DispatchResult};
pub use upload::{UploadCoordinator, UploadOutcome};
