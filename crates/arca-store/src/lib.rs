//! Content-addressed artifact storage for Arca.
//!
//! Every uploaded model artifact is stored as an immutable record keyed two
//! ways: by its [`ArtifactId`](arca_types::ArtifactId) (the handle callers
//! use) and by its content [`Digest`](arca_types::Digest) (the identity that
//! enforces deduplication).
//!
//! # Design Rules
//!
//! 1. Artifacts are immutable once inserted; the store is append-only.
//! 2. At most one record per distinct digest: same digest implies same ID.
//! 3. The digest check and the insert are a single atomic unit. A racing
//!    insert of the same digest loses with [`StoreError::DigestConflict`]
//!    and must read back the winner.
//! 4. Concurrent reads are always safe (records are immutable).
//! 5. The store never interprets artifact contents.
//!
//! # Storage Backends
//!
//! All backends implement the [`ArtifactStore`] trait:
//!
//! - [`InMemoryArtifactStore`] — `HashMap`-based store for tests and embedding

pub mod artifact;
pub mod error;
pub mod memory;
pub mod registry;
pub mod traits;

pub use artifact::{Artifact, ArtifactRef};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryArtifactStore;
pub use registry::IdAllocator;
pub use traits::ArtifactStore;
