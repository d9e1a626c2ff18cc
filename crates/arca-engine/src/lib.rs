//! Classification engine seam for Arca.
//!
//! The actual classification algorithm is an external collaborator: Arca
//! hashes, stores, and routes artifact bytes, but never interprets them.
//! This crate defines the boundary — [`ClassificationEngine`] deserializes
//! artifact bytes into a [`LoadedModel`], which turns text inputs into
//! labeled predictions.
//!
//! [`JsonRuleEngine`] is the in-tree reference implementation (JSON
//! rule-set artifacts with keyword scoring), used by tests, the CLI, and
//! embedders that have no heavier engine to plug in.

pub mod error;
pub mod prediction;
pub mod rules;
pub mod traits;

pub use error::{EngineError, EngineResult};
pub use prediction::Prediction;
pub use rules::{JsonRuleEngine, Rule, RuleSet, RULES_FORMAT};
pub use traits::{ClassificationEngine, LoadedModel};
