//! Knowledge-base configuration schema.
//!
//! The on-disk format is TOML with `[[diagnoses]]`, `[[symptoms]]`, and
//! `[[rules]]` array-of-table sections. The schema is deliberately dumb:
//! it carries whatever the file says, and all semantic validation happens
//! in `KnowledgeBase::from_config`.

use serde::{Deserialize, Serialize};

/// Raw, unvalidated knowledge-base configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// The frame of discernment: one entry per diagnosis hypothesis.
    pub diagnoses: Vec<DiagnosisEntry>,
    /// Catalog of observable symptoms.
    pub symptoms: Vec<SymptomEntry>,
    /// One rule per symptom: the diagnoses it supports and its density.
    pub rules: Vec<RuleEntry>,
}

/// A diagnosis catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisEntry {
    pub code: String,
    pub name: String,
    /// Optional long-form description for the collaborator's info pages.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional treatment advice attached to findings.
    #[serde(default)]
    pub treatment: Option<String>,
}

/// A symptom catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub code: String,
    pub description: String,
}

/// A knowledge rule: `symptom` supports `diagnoses` with confidence `density`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEntry {
    pub symptom: String,
    pub diagnoses: Vec<String>,
    pub density: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let toml_src = r#"
            [[diagnoses]]
            code = "P01"
            name = "Pseudomonas infection"
            treatment = "Antibiotic treatment."

            [[symptoms]]
            code = "G01"
            description = "Skin ulcers"

            [[rules]]
            symptom = "G01"
            diagnoses = ["P01"]
            density = 0.82
        "#;
        let config: KnowledgeConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.diagnoses.len(), 1);
        assert_eq!(config.symptoms.len(), 1);
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].density, 0.82);
        assert_eq!(config.diagnoses[0].treatment.as_deref(), Some("Antibiotic treatment."));
        assert!(config.diagnoses[0].description.is_none());
    }

    #[test]
    fn test_empty_sections_default() {
        let config: KnowledgeConfig = toml::from_str("").unwrap();
        assert!(config.diagnoses.is_empty());
        assert!(config.symptoms.is_empty());
        assert!(config.rules.is_empty());
    }
}
