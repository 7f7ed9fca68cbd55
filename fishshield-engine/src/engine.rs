//! The end-to-end diagnosis pipeline.

use fishshield_core::errors::error_code::{self, FishShieldErrorCode};
use fishshield_core::{KnowledgeBase, SymptomCode};

use crate::mass::combine::{combine_all, CombinationError};
use crate::mass::focal::FocalSet;
use crate::mass::function::MassFunction;
use crate::report::{sort_findings, DiagnosisReport, Finding, Severity};

/// Errors raised by a diagnosis run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// The evidence list was empty, or every symptom in it was unknown
    /// to the knowledge base. Distinct from total ignorance: there is
    /// nothing to infer from, not an inference of "don't know".
    #[error("No usable evidence: input was empty or contained only unknown symptoms")]
    NoUsableEvidence,

    #[error(transparent)]
    Combination(#[from] CombinationError),
}

impl FishShieldErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoUsableEvidence => error_code::ENGINE_NO_USABLE_EVIDENCE,
            Self::Combination(e) => e.error_code(),
        }
    }
}

/// The diagnosis engine: a stateless view over a read-only knowledge
/// base. Cheap to construct per run; safe to use from any number of
/// threads concurrently.
pub struct DiagnosisEngine<'kb> {
    kb: &'kb KnowledgeBase,
}

impl<'kb> DiagnosisEngine<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    /// Run one diagnosis over an ordered list of observed symptoms.
    ///
    /// Unknown symptoms are skipped (logged, recorded in the report),
    /// the remaining elementary mass functions are fused left-to-right
    /// in input order, and every diagnosis in the frame is queried for
    /// belief, plausibility, and ignorance.
    pub fn diagnose(&self, symptoms: &[SymptomCode]) -> Result<DiagnosisReport, EngineError> {
        let mut used = Vec::with_capacity(symptoms.len());
        let mut skipped = Vec::new();
        let mut masses = Vec::with_capacity(symptoms.len());

        for symptom in symptoms {
            match self.kb.rule_for(symptom) {
                Some(rule) => {
                    used.push(symptom.clone());
                    masses.push(MassFunction::from_rule(rule));
                }
                None => {
                    tracing::warn!(symptom = %symptom, "unknown symptom skipped");
                    skipped.push(symptom.clone());
                }
            }
        }

        let combined = combine_all(masses)?.ok_or(EngineError::NoUsableEvidence)?;
        let findings = self.rank(&combined);

        tracing::debug!(
            used = used.len(),
            skipped = skipped.len(),
            findings = findings.len(),
            "diagnosis complete"
        );

        Ok(DiagnosisReport {
            used,
            skipped,
            combined,
            findings,
        })
    }

    /// Query every diagnosis in the frame against the combined function
    /// and keep the positive-belief ones, ranked by descending belief.
    fn rank(&self, combined: &MassFunction) -> Vec<Finding> {
        let mut findings = Vec::new();
        for code in self.kb.frame() {
            let query = FocalSet::singleton(code.clone());
            let belief = combined.belief(&query);
            if belief <= 0.0 {
                continue;
            }
            let plausibility = combined.plausibility(&query);
            let info = self.kb.diagnosis(code);
            findings.push(Finding {
                diagnosis: code.clone(),
                name: info
                    .map(|i| i.name.clone())
                    .unwrap_or_else(|| code.to_string()),
                belief,
                plausibility,
                ignorance: plausibility - belief,
                severity: Severity::from_belief_pct(belief * 100.0),
                treatment: info.and_then(|i| i.treatment.clone()),
            });
        }
        sort_findings(&mut findings);
        findings
    }
}
