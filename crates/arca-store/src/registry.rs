use std::sync::atomic::{AtomicU64, Ordering};

use arca_types::ArtifactId;

/// Monotonic, collision-free artifact ID source.
///
/// IDs start at 1 and only ever move forward; an allocated ID is never
/// handed out twice, even under concurrent allocation. The allocator is
/// consumed by a store's insert path, which is the only place IDs are
/// minted.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Create an allocator starting at ID 1.
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Create an allocator that resumes after the given ID.
    ///
    /// Used by durable backends that recover the high-water mark at open.
    pub fn resuming_after(last: ArtifactId) -> Self {
        Self {
            next: AtomicU64::new(last.value() + 1),
        }
    }

    /// Allocate the next ID.
    pub fn next_id(&self) -> ArtifactId {
        ArtifactId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
