//! The validated, immutable knowledge base.
//!
//! Loaded once at startup, read-only afterwards; safe to share across
//! concurrent diagnosis runs. Every malformed entry is rejected here so
//! the engine never has to re-check rule shape at inference time.

use std::path::Path;

use smallvec::SmallVec;

use crate::config::{KnowledgeConfig, RuleEntry};
use crate::errors::KnowledgeError;
use crate::types::collections::FxHashMap;
use crate::types::identifiers::{DiagnosisCode, SymptomCode};

/// A validated knowledge rule: the diagnoses a symptom supports, plus the
/// expert-assigned density (confidence weight) in (0, 1].
///
/// The diagnosis list is sorted and deduplicated at construction; fields
/// stay private so that invariant cannot be broken after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeRule {
    diagnoses: SmallVec<[DiagnosisCode; 4]>,
    density: f64,
}

impl KnowledgeRule {
    /// The supported diagnoses, sorted by code.
    pub fn diagnoses(&self) -> &[DiagnosisCode] {
        &self.diagnoses
    }

    /// The density weight in (0, 1].
    pub fn density(&self) -> f64 {
        self.density
    }
}

/// Diagnosis catalog entry: display name plus optional collaborator text.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiagnosisInfo {
    pub code: DiagnosisCode,
    pub name: String,
    pub description: Option<String>,
    pub treatment: Option<String>,
}

/// Symptom catalog entry.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SymptomInfo {
    pub code: SymptomCode,
    pub description: String,
}

/// The static knowledge base: catalogs plus one rule per symptom.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    diagnoses: FxHashMap<DiagnosisCode, DiagnosisInfo>,
    symptoms: FxHashMap<SymptomCode, SymptomInfo>,
    rules: FxHashMap<SymptomCode, KnowledgeRule>,
    /// The frame of discernment, sorted by code.
    frame: Vec<DiagnosisCode>,
}

impl KnowledgeBase {
    /// Validate a raw config into a knowledge base.
    pub fn from_config(config: KnowledgeConfig) -> Result<Self, KnowledgeError> {
        let mut diagnoses = FxHashMap::default();
        let mut frame = Vec::with_capacity(config.diagnoses.len());
        for entry in config.diagnoses {
            let code = DiagnosisCode::new(entry.code.clone());
            let info = DiagnosisInfo {
                code: code.clone(),
                name: entry.name,
                description: entry.description,
                treatment: entry.treatment,
            };
            if diagnoses.insert(code.clone(), info).is_some() {
                return Err(KnowledgeError::DuplicateCode { code: entry.code });
            }
            frame.push(code);
        }
        frame.sort();

        let mut symptoms = FxHashMap::default();
        for entry in config.symptoms {
            let code = SymptomCode::new(entry.code.clone());
            let info = SymptomInfo {
                code: code.clone(),
                description: entry.description,
            };
            if symptoms.insert(code, info).is_some() {
                return Err(KnowledgeError::DuplicateCode { code: entry.code });
            }
        }

        let mut rules = FxHashMap::default();
        for entry in &config.rules {
            let (symptom, rule) = validate_rule(entry, &symptoms, &diagnoses)?;
            if rules.insert(symptom, rule).is_some() {
                return Err(KnowledgeError::DuplicateCode {
                    code: entry.symptom.clone(),
                });
            }
        }

        tracing::debug!(
            diagnoses = diagnoses.len(),
            symptoms = symptoms.len(),
            rules = rules.len(),
            "knowledge base validated"
        );
        Ok(Self {
            diagnoses,
            symptoms,
            rules,
            frame,
        })
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, KnowledgeError> {
        let config: KnowledgeConfig =
            toml::from_str(source).map_err(|e| KnowledgeError::ParseError {
                message: e.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Read and validate a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| KnowledgeError::IoError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    /// Look up the rule for a symptom. `None` means the symptom is unknown
    /// to this knowledge base (the engine skips it, it is not an error).
    pub fn rule_for(&self, symptom: &SymptomCode) -> Option<&KnowledgeRule> {
        self.rules.get(symptom)
    }

    /// The frame of discernment Θ, sorted by code.
    pub fn frame(&self) -> &[DiagnosisCode] {
        &self.frame
    }

    pub fn diagnosis(&self, code: &DiagnosisCode) -> Option<&DiagnosisInfo> {
        self.diagnoses.get(code)
    }

    pub fn symptom(&self, code: &SymptomCode) -> Option<&SymptomInfo> {
        self.symptoms.get(code)
    }

    /// All symptom codes in sorted order, for stable collaborator rendering.
    pub fn symptom_codes(&self) -> Vec<SymptomCode> {
        let mut codes: Vec<SymptomCode> = self.symptoms.keys().cloned().collect();
        codes.sort();
        codes
    }

    pub fn diagnosis_count(&self) -> usize {
        self.diagnoses.len()
    }

    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

/// Check one rule entry against the catalogs and canonicalize it.
fn validate_rule(
    entry: &RuleEntry,
    symptoms: &FxHashMap<SymptomCode, SymptomInfo>,
    diagnoses: &FxHashMap<DiagnosisCode, DiagnosisInfo>,
) -> Result<(SymptomCode, KnowledgeRule), KnowledgeError> {
    let symptom = SymptomCode::new(entry.symptom.clone());
    if !symptoms.contains_key(&symptom) {
        return Err(KnowledgeError::UnknownSymptom {
            symptom: entry.symptom.clone(),
        });
    }

    if entry.diagnoses.is_empty() {
        return Err(KnowledgeError::EmptyDiagnosisSet {
            symptom: entry.symptom.clone(),
        });
    }

    // NaN fails both comparisons and is rejected here too.
    if !(entry.density > 0.0 && entry.density <= 1.0) {
        return Err(KnowledgeError::DensityOutOfRange {
            symptom: entry.symptom.clone(),
            density: entry.density,
        });
    }

    let mut codes: SmallVec<[DiagnosisCode; 4]> = SmallVec::new();
    for raw in &entry.diagnoses {
        let code = DiagnosisCode::new(raw.clone());
        if !diagnoses.contains_key(&code) {
            return Err(KnowledgeError::UnknownDiagnosis {
                symptom: entry.symptom.clone(),
                diagnosis: raw.clone(),
            });
        }
        codes.push(code);
    }
    codes.sort();
    codes.dedup();

    Ok((
        symptom,
        KnowledgeRule {
            diagnoses: codes,
            density: entry.density,
        },
    ))
}
