//! Content hashing for Arca.
//!
//! A single concern lives here: turning an artifact's raw bytes into its
//! content identity, deterministically and without any secret key. The
//! digest is the sole basis for deduplication, so this crate is the one
//! place where the hash construction is defined.

pub mod hasher;

pub use hasher::ArtifactHasher;
