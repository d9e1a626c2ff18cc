use std::sync::Arc;

use arca_crypto::ArtifactHasher;
use arca_store::{ArtifactRef, ArtifactStore, StoreError};

use crate::error::{DispatchError, DispatchResult};

/// Outcome of an upload: the artifact's identity plus whether this call
/// created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadOutcome {
    pub artifact: ArtifactRef,
    pub created: bool,
}

/// Orchestrates idempotent artifact uploads.
///
/// Submitting the same bytes N times, concurrently or sequentially, yields
/// exactly one stored artifact and N references to it, with at most one
/// `created=true` among the outcomes.
pub struct UploadCoordinator {
    store: Arc<dyn ArtifactStore>,
}

impl UploadCoordinator {
    pub fn new(store: Arc<dyn ArtifactStore>) -> Self {
        Self { store }
    }

    /// Store `bytes` if its content is novel; otherwise return the existing
    /// record.
    ///
    /// An insert that loses a race to a concurrent identical upload falls
    /// back to the winner's record with `created=false`.
    pub fn submit(
        &self,
        bytes: Vec<u8>,
        label: Option<String>,
    ) -> DispatchResult<UploadOutcome> {
        if bytes.is_empty() {
            return Err(DispatchError::InvalidInput("empty artifact payload".into()));
        }
        let digest = ArtifactHasher::ARTIFACT.digest(&bytes);

        if let Some(existing) = self.store.find_by_digest(&digest)? {
            tracing::debug!(id = %existing.id, digest = %digest.short_hex(), "upload deduplicated");
            return Ok(UploadOutcome {
                artifact: existing.to_ref(),
                created: false,
            });
        }

        match self.store.insert(bytes, digest, label) {
            Ok(artifact) => {
                tracing::info!(id = %artifact.id, digest = %digest.short_hex(), size = artifact.size(), "artifact created");
                Ok(UploadOutcome {
                    artifact: artifact.to_ref(),
                    created: true,
                })
            }
            Err(StoreError::DigestConflict { .. }) => {
                // Lost the race to an identical concurrent upload; the
                // winner's record is authoritative.
                let winner = self.store.find_by_digest(&digest)?.ok_or_else(|| {
                    DispatchError::StorageUnavailable(
                        "conflicting artifact vanished during insert".into(),
                    )
                })?;
                tracing::debug!(id = %winner.id, digest = %digest.short_hex(), "upload lost insert race, reusing winner");
                Ok(UploadOutcome {
                    artifact: winner.to_ref(),
                    created: false,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Digest-only existence check. Never inserts.
    pub fn check(&self, bytes: &[u8]) -> DispatchResult<Option<ArtifactRef>> {
        if bytes.is_empty() {
            return Err(DispatchError::InvalidInput("empty artifact payload".into()));
        }
        let digest = ArtifactHasher::ARTIFACT.digest(bytes);
        Ok(self.store.find_by_digest(&digest)?.map(|a| a.to_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arca_store::InMemoryArtifactStore;

    fn coordinator() -> (Arc<InMemoryArtifactStore>, UploadCoordinator) {
        let store = Arc::new(InMemoryArtifactStore::new());
        let coordinator = UploadCoordinator::new(store.clone());
        (store, coordinator)
    }

    #[test]
    fn first_upload_creates() {
        let (store, coordinator) = coordinator();
        let outcome = coordinator
            .submit(b"model".to_vec(), Some("m.bin".into()))
            .unwrap();
        assert!(outcome.created);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn repeat_upload_is_idempotent() {
        let (store, coordinator) = coordinator();
        let first = coordinator.submit(b"model".to_vec(), None).unwrap();
        let second = coordinator.submit(b"model".to_vec(), None).unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.artifact.id, second.artifact.id);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn label_does_not_affect_identity() {
        let (_, coordinator) = coordinator();
        let first = coordinator
            .submit(b"same".to_vec(), Some("a.bin".into()))
            .unwrap();
        let second = coordinator
            .submit(b"same".to_vec(), Some("b.bin".into()))
            .unwrap();
        assert_eq!(first.artifact.id, second.artifact.id);
        assert!(!second.created);
    }

    #[test]
    fn distinct_content_gets_distinct_ids() {
        let (_, coordinator) = coordinator();
        let a = coordinator.submit(b"aaa".to_vec(), None).unwrap();
        let b = coordinator.submit(b"bbb".to_vec(), None).unwrap();
        assert_ne!(a.artifact.id, b.artifact.id);
        assert!(a.created && b.created);
    }

    #[test]
    fn empty_payload_is_rejected() {
        let (store, coordinator) = coordinator();
        let err = coordinator.submit(Vec::new(), None).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidInput(_)));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn concurrent_identical_uploads_create_once() {
        use std::thread;

        let store = Arc::new(InMemoryArtifactStore::new());
        let coordinator = Arc::new(UploadCoordinator::new(
            store.clone() as Arc<dyn ArtifactStore>
        ));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let coordinator = Arc::clone(&coordinator);
                thread::spawn(move || coordinator.submit(b"contended".to_vec(), None).unwrap())
            })
            .collect();

        let outcomes: Vec<UploadOutcome> = handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic"))
            .collect();

        let created: usize = outcomes.iter().filter(|o| o.created).count();
        assert_eq!(created, 1, "exactly one submit may create");
        assert_eq!(store.len(), 1);

        let id = outcomes[0].artifact.id;
        assert!(outcomes.iter().all(|o| o.artifact.id == id));
    }

    #[test]
    fn check_reports_existing_without_inserting() {
        let (store, coordinator) = coordinator();
        assert!(coordinator.check(b"model").unwrap().is_none());
        assert_eq!(store.len(), 0);

        let uploaded = coordinator.submit(b"model".to_vec(), None).unwrap();
        let found = coordinator.check(b"model").unwrap().expect("should exist");
        assert_eq!(found.id, uploaded.artifact.id);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn check_rejects_empty_payload() {
        let (_, coordinator) = coordinator();
        assert!(matches!(
            coordinator.check(b"").unwrap_err(),
            DispatchError::InvalidInput(_)
        ));
    }
}
