use std::collections::HashMap;
use std::sync::RwLock;

use arca_types::{ArtifactId, Digest};

use crate::artifact::Artifact;
use crate::error::{StoreError, StoreResult};
use crate::registry::IdAllocator;
use crate::traits::ArtifactStore;

/// In-memory, HashMap-based artifact store.
///
/// Intended for tests and embedding. Records are held behind a single
/// `RwLock` guarding both indexes, so the digest-uniqueness check and the
/// insert happen under one write lock and can never interleave with a
/// racing insert. Records are cloned on read.
pub struct InMemoryArtifactStore {
    inner: RwLock<Indexes>,
    ids: IdAllocator,
}

#[derive(Default)]
struct Indexes {
    by_id: HashMap<ArtifactId, Artifact>,
    by_digest: HashMap<Digest, ArtifactId>,
}

impl InMemoryArtifactStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Indexes::default()),
            ids: IdAllocator::new(),
        }
    }

    /// Number of artifacts currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").by_id.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().expect("lock poisoned").by_id.is_empty()
    }

    /// Total payload bytes across all stored artifacts.
    pub fn total_bytes(&self) -> u64 {
        self.inner
            .read()
            .expect("lock poisoned")
            .by_id
            .values()
            .map(|a| a.size())
            .sum()
    }

    /// Return all artifact IDs, sorted.
    pub fn all_ids(&self) -> Vec<ArtifactId> {
        let inner = self.inner.read().expect("lock poisoned");
        let mut ids: Vec<ArtifactId> = inner.by_id.keys().copied().collect();
        ids.sort();
        ids
    }
}

impl Default for InMemoryArtifactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactStore for InMemoryArtifactStore {
    fn find_by_digest(&self, digest: &Digest) -> StoreResult<Option<Artifact>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner
            .by_digest
            .get(digest)
            .and_then(|id| inner.by_id.get(id))
            .cloned())
    }

    fn find_by_id(&self, id: ArtifactId) -> StoreResult<Option<Artifact>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner.by_id.get(&id).cloned())
    }

    fn insert(
        &self,
        bytes: Vec<u8>,
        digest: Digest,
        label: Option<String>,
    ) -> StoreResult<Artifact> {
        let mut inner = self.inner.write().expect("lock poisoned");
        // Uniqueness check and insert under the same write lock: a racing
        // insert of the same digest cannot slip between the two.
        if inner.by_digest.contains_key(&digest) {
            return Err(StoreError::DigestConflict { digest });
        }
        let id = self.ids.next_id();
        let artifact = Artifact::new(id, digest, bytes, label);
        inner.by_digest.insert(digest, id);
        inner.by_id.insert(id, artifact.clone());
        tracing::debug!(%id, digest = %digest.short_hex(), size = artifact.size(), "artifact inserted");
        Ok(artifact)
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.len())
    }
}

impl std::fmt::Debug for InMemoryArtifactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryArtifactStore")
            .field("artifact_count", &self.len())
            .finish()
    }
}
