use arca_types::Digest;

/// Domain-separated BLAKE3 content hasher.
///
/// Each hasher carries a domain tag (e.g. `"arca-artifact-v1"`) that is
/// prepended to every hash computation. This prevents cross-context hash
/// collisions: an artifact digest and any other hash of identical bytes
/// will never collide, and the tag doubles as a format version should the
/// construction ever need to change.
pub struct ArtifactHasher {
    domain: &'static str,
}

impl ArtifactHasher {
    /// Hasher for model artifact payloads.
    pub const ARTIFACT: Self = Self {
        domain: "arca-artifact-v1",
    };

    /// Create a hasher with a custom domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// Hash raw bytes with domain separation.
    ///
    /// Deterministic and total: any byte sequence, including the empty one,
    /// produces a digest.
    pub fn digest(&self, data: &[u8]) -> Digest {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        Digest::from_hash(*hasher.finalize().as_bytes())
    }

    /// Verify that data produces the expected digest.
    pub fn verify(&self, data: &[u8], expected: &Digest) -> bool {
        self.digest(data) == *expected
    }

    /// Raw BLAKE3 hash without domain separation (for low-level use).
    pub fn raw_hash(data: &[u8]) -> [u8; 32] {
        *blake3::hash(data).as_bytes()
    }

    /// The domain tag used by this hasher.
    pub fn domain(&self) -> &str {
        self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn digest_is_deterministic() {
        let data = b"serialized model";
        let d1 = ArtifactHasher::ARTIFACT.digest(data);
        let d2 = ArtifactHasher::ARTIFACT.digest(data);
        assert_eq!(d1, d2);
    }

    #[test]
    fn empty_payload_digests() {
        let d = ArtifactHasher::ARTIFACT.digest(b"");
        assert_eq!(d, ArtifactHasher::ARTIFACT.digest(b""));
    }

    #[test]
    fn different_domains_produce_different_digests() {
        let data = b"same content";
        let artifact = ArtifactHasher::ARTIFACT.digest(data);
        let custom = ArtifactHasher::new("arca-other-v1").digest(data);
        assert_ne!(artifact, custom);
    }

    #[test]
    fn verify_correct_data() {
        let data = b"test data";
        let d = ArtifactHasher::ARTIFACT.digest(data);
        assert!(ArtifactHasher::ARTIFACT.verify(data, &d));
    }

    #[test]
    fn verify_incorrect_data() {
        let d = ArtifactHasher::ARTIFACT.digest(b"original");
        assert!(!ArtifactHasher::ARTIFACT.verify(b"tampered", &d));
    }

    #[test]
    fn raw_hash_differs_from_domain_hash() {
        let raw = ArtifactHasher::raw_hash(b"test");
        let domain = ArtifactHasher::ARTIFACT.digest(b"test");
        assert_ne!(&raw, domain.as_bytes());
    }

    proptest! {
        #[test]
        fn no_collisions_between_distinct_inputs(a: Vec<u8>, b: Vec<u8>) {
            prop_assume!(a != b);
            prop_assert_ne!(
                ArtifactHasher::ARTIFACT.digest(&a),
                ArtifactHasher::ARTIFACT.digest(&b)
            );
        }
    }
}
