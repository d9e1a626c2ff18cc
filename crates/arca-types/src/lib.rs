//! Foundation types for Arca.
//!
//! This crate provides the identity types used throughout the Arca system.
//! Every other Arca crate depends on `arca-types`.
//!
//! # Key Types
//!
//! - [`Digest`] — Content-addressed fingerprint of an artifact's bytes (BLAKE3 hash)
//! - [`ArtifactId`] — Stable identifier assigned to a stored artifact, never reused

pub mod digest;
pub mod error;
pub mod id;

pub use digest::Digest;
pub use error::TypeError;
pub use id::ArtifactId;
