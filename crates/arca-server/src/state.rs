use std::sync::Arc;

use arca_dispatch::{ClassificationDispatcher, UploadCoordinator};
use arca_engine::ClassificationEngine;
use arca_store::ArtifactStore;

/// Shared handles behind every request handler.
///
/// Built once at service start from an injected store and engine; there are
/// no process-wide singletons. The store is the only shared mutable state.
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<UploadCoordinator>,
    pub dispatcher: Arc<ClassificationDispatcher>,
    pub store: Arc<dyn ArtifactStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ArtifactStore>, engine: Arc<dyn ClassificationEngine>) -> Self {
        Self {
            coordinator: Arc::new(UploadCoordinator::new(store.clone())),
            dispatcher: Arc::new(ClassificationDispatcher::new(store.clone(), engine)),
            store,
        }
    }
}
