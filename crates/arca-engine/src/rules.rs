use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::prediction::Prediction;
use crate::traits::{ClassificationEngine, LoadedModel};

/// Artifact format tag expected by [`JsonRuleEngine`].
pub const RULES_FORMAT: &str = "arca-rules-v1";

/// A keyword rule-set model: the artifact format of the reference engine.
///
/// Artifacts are JSON documents:
///
/// ```json
/// {
///   "format": "arca-rules-v1",
///   "default_label": "other",
///   "rules": [
///     { "label": "spam", "keywords": ["buy", "free", "winner"] },
///     { "label": "ham",  "keywords": ["meeting", "invoice"] }
///   ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub format: String,
    pub default_label: String,
    pub rules: Vec<Rule>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub label: String,
    pub keywords: Vec<String>,
}

impl RuleSet {
    /// Serialize to the artifact byte format.
    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("rule-set serialization cannot fail")
    }
}

/// Reference classification engine over JSON rule-set artifacts.
///
/// Scores each input by counting case-insensitive keyword hits per rule and
/// normalizing the counts into a per-label distribution. Inputs that match
/// no rule fall back to the rule-set's default label.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRuleEngine;

impl JsonRuleEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ClassificationEngine for JsonRuleEngine {
    fn load(&self, bytes: &[u8]) -> EngineResult<Box<dyn LoadedModel>> {
        let rules: RuleSet = serde_json::from_slice(bytes)
            .map_err(|e| EngineError::CorruptArtifact(e.to_string()))?;
        if rules.format != RULES_FORMAT {
            return Err(EngineError::CorruptArtifact(format!(
                "unsupported rule-set format {:?}",
                rules.format
            )));
        }
        if rules.rules.iter().any(|r| r.label.is_empty()) {
            return Err(EngineError::CorruptArtifact("rule with empty label".into()));
        }
        Ok(Box::new(LoadedRules { rules }))
    }
}

#[derive(Debug)]
struct LoadedRules {
    rules: RuleSet,
}

impl LoadedModel for LoadedRules {
    fn predict(&self, inputs: &[String]) -> EngineResult<Vec<Prediction>> {
        inputs.iter().map(|input| self.classify_one(input)).collect()
    }
}

impl LoadedRules {
    fn classify_one(&self, input: &str) -> EngineResult<Prediction> {
        let haystack = input.to_lowercase();
        let mut hits: BTreeMap<&str, usize> = BTreeMap::new();
        for rule in &self.rules.rules {
            let count = rule
                .keywords
                .iter()
                .filter(|kw| !kw.is_empty() && haystack.contains(&kw.to_lowercase()))
                .count();
            if count > 0 {
                *hits.entry(rule.label.as_str()).or_default() += count;
            }
        }

        if hits.is_empty() {
            return Ok(Prediction::certain(self.rules.default_label.clone()));
        }

        let total: usize = hits.values().sum();
        let scores: BTreeMap<String, f64> = hits
            .iter()
            .map(|(label, count)| (label.to_string(), *count as f64 / total as f64))
            .collect();
        // Ties break toward the lexicographically first label (BTreeMap order).
        let label = hits
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(label, _)| label.to_string())
            .ok_or_else(|| EngineError::Prediction("empty score table".into()))?;
        Ok(Prediction { label, scores })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rules() -> RuleSet {
        RuleSet {
            format: RULES_FORMAT.into(),
            default_label: "other".into(),
            rules: vec![
                Rule {
                    label: "spam".into(),
                    keywords: vec!["buy".into(), "free".into(), "winner".into()],
                },
                Rule {
                    label: "ham".into(),
                    keywords: vec!["meeting".into(), "invoice".into()],
                },
            ],
        }
    }

    #[test]
    fn load_valid_ruleset() {
        let bytes = sample_rules().to_bytes();
        assert!(JsonRuleEngine::new().load(&bytes).is_ok());
    }

    #[test]
    fn load_rejects_junk_bytes() {
        let err = JsonRuleEngine::new().load(b"\x00\x01not json").unwrap_err();
        assert!(matches!(err, EngineError::CorruptArtifact(_)));
    }

    #[test]
    fn load_rejects_wrong_format_tag() {
        let mut rules = sample_rules();
        rules.format = "something-else".into();
        let err = JsonRuleEngine::new().load(&rules.to_bytes()).unwrap_err();
        assert!(matches!(err, EngineError::CorruptArtifact(_)));
    }

    #[test]
    fn load_rejects_empty_label() {
        let mut rules = sample_rules();
        rules.rules[0].label.clear();
        assert!(JsonRuleEngine::new().load(&rules.to_bytes()).is_err());
    }

    #[test]
    fn predict_is_order_preserving() {
        let model = JsonRuleEngine::new().load(&sample_rules().to_bytes()).unwrap();
        let inputs = vec![
            "free money, buy now".to_string(),
            "quarterly meeting invoice".to_string(),
            "unrelated text".to_string(),
        ];
        let predictions = model.predict(&inputs).unwrap();
        assert_eq!(predictions.len(), 3);
        assert_eq!(predictions[0].label, "spam");
        assert_eq!(predictions[1].label, "ham");
        assert_eq!(predictions[2].label, "other");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let model = JsonRuleEngine::new().load(&sample_rules().to_bytes()).unwrap();
        let predictions = model.predict(&["FREE WINNER".to_string()]).unwrap();
        assert_eq!(predictions[0].label, "spam");
    }

    #[test]
    fn scores_are_normalized() {
        let model = JsonRuleEngine::new().load(&sample_rules().to_bytes()).unwrap();
        let predictions = model
            .predict(&["buy free meeting".to_string()])
            .unwrap();
        let total: f64 = predictions[0].scores.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(predictions[0].label, "spam");
        assert!(predictions[0].scores["spam"] > predictions[0].scores["ham"]);
    }

    #[test]
    fn unmatched_input_uses_default_label() {
        let model = JsonRuleEngine::new().load(&sample_rules().to_bytes()).unwrap();
        let predictions = model.predict(&["zzz".to_string()]).unwrap();
        assert_eq!(predictions[0].label, "other");
        assert_eq!(predictions[0].scores["other"], 1.0);
    }

    #[test]
    fn empty_input_slice_predicts_nothing() {
        let model = JsonRuleEngine::new().load(&sample_rules().to_bytes()).unwrap();
        assert!(model.predict(&[]).unwrap().is_empty());
    }
}
