use serde::{Deserialize, Serialize};

use arca_types::{ArtifactId, Digest};

/// A stored model artifact: immutable payload plus identity metadata.
///
/// The `digest` is a pure function of `bytes`, computed once by the caller
/// at insert time and never recomputed. The `label` (typically the original
/// upload filename) is informational only and takes no part in identity:
/// two uploads of identical bytes resolve to the same artifact regardless
/// of label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// Stable identifier, assigned once at insert.
    pub id: ArtifactId,
    /// Content digest of `bytes`.
    pub digest: Digest,
    /// The raw artifact payload.
    pub bytes: Vec<u8>,
    /// Optional informational label (e.g. original filename).
    pub label: Option<String>,
}

impl Artifact {
    /// Create a new artifact record.
    pub fn new(id: ArtifactId, digest: Digest, bytes: Vec<u8>, label: Option<String>) -> Self {
        Self {
            id,
            digest,
            bytes,
            label,
        }
    }

    /// Payload size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// A lightweight reference to this artifact (identity without payload).
    pub fn to_ref(&self) -> ArtifactRef {
        ArtifactRef {
            id: self.id,
            digest: self.digest,
        }
    }
}

/// Identity of a stored artifact, without the payload.
///
/// This is what upload and check operations hand back to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef {
    pub id: ArtifactId,
    pub digest: Digest,
}
