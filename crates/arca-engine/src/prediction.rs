use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One classification result for one input text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The winning label.
    pub label: String,
    /// Per-label scores, normalized to sum to 1 when any label scored.
    /// A `BTreeMap` keeps serialized output deterministic.
    pub scores: BTreeMap<String, f64>,
}

impl Prediction {
    /// A prediction with a single certain label.
    pub fn certain(label: impl Into<String>) -> Self {
        let label = label.into();
        let mut scores = BTreeMap::new();
        scores.insert(label.clone(), 1.0);
        Self { label, scores }
    }
}
