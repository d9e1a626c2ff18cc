use arca_types::{ArtifactId, Digest};

use crate::artifact::Artifact;
use crate::error::StoreResult;

/// Durable mapping from digest to artifact record.
///
/// All implementations must satisfy these invariants:
/// - Artifacts are immutable once inserted; lookups never mutate records.
/// - At most one record per distinct digest: `a.digest == b.digest`
///   implies `a.id == b.id`.
/// - The digest-uniqueness check and the insert form one atomic unit. Two
///   callers inserting the same digest concurrently must not both create a
///   record: the loser gets `StoreError::DigestConflict` and reads back the
///   winner.
/// - The store never interprets artifact contents.
/// - All backend errors are propagated, never silently ignored.
pub trait ArtifactStore: Send + Sync {
    /// Look up an artifact by its content digest.
    ///
    /// Returns `Ok(None)` if no artifact with that digest exists.
    fn find_by_digest(&self, digest: &Digest) -> StoreResult<Option<Artifact>>;

    /// Look up an artifact by its assigned ID.
    ///
    /// Returns `Ok(None)` if the ID has never been assigned.
    fn find_by_id(&self, id: ArtifactId) -> StoreResult<Option<Artifact>>;

    /// Insert a new artifact, assigning it a fresh ID.
    ///
    /// The caller has already computed `digest` from `bytes` and confirmed
    /// via `find_by_digest` that it is absent. If a record with the same
    /// digest exists anyway (a concurrent insert won the race), this fails
    /// with `StoreError::DigestConflict` and stores nothing.
    fn insert(
        &self,
        bytes: Vec<u8>,
        digest: Digest,
        label: Option<String>,
    ) -> StoreResult<Artifact>;

    /// Number of artifacts currently stored.
    fn count(&self) -> StoreResult<usize>;
}
