use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a stored artifact.
///
/// An `ArtifactId` is assigned exactly once, at the first successful insert
/// of a novel digest, and is never reused or mutated. It is the handle that
/// classification requests use to refer back to previously uploaded content.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(u64);

impl ArtifactId {
    /// Wrap a raw identifier value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw identifier value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArtifactId({})", self.0)
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ArtifactId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ArtifactId> for u64 {
    fn from(id: ArtifactId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_roundtrip() {
        let id = ArtifactId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(u64::from(id), 42);
        assert_eq!(ArtifactId::from(42u64), id);
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(format!("{}", ArtifactId::new(7)), "7");
    }

    #[test]
    fn serde_is_transparent() {
        let id = ArtifactId::new(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");
        let parsed: ArtifactId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn ordering_is_consistent() {
        assert!(ArtifactId::new(1) < ArtifactId::new(2));
    }
}
