//! Ranked findings and severity classification.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use fishshield_core::{DiagnosisCode, SymptomCode};

use crate::mass::function::MassFunction;

/// Severity band derived from belief percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// belief ≤ 40%
    Mild,
    /// 40% < belief ≤ 60%
    Moderate,
    /// 60% < belief ≤ 80%
    Severe,
    /// belief > 80%
    Critical,
}

impl Severity {
    /// Classify a belief percentage. Boundaries are inclusive on the
    /// lower band: exactly 40 is Mild, 60 Moderate, 80 Severe.
    pub fn from_belief_pct(pct: f64) -> Self {
        if pct <= 40.0 {
            Self::Mild
        } else if pct <= 60.0 {
            Self::Moderate
        } else if pct <= 80.0 {
            Self::Severe
        } else {
            Self::Critical
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mild => write!(f, "mild"),
            Self::Moderate => write!(f, "moderate"),
            Self::Severe => write!(f, "severe"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// One ranked finding: a diagnosis with positive belief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub diagnosis: DiagnosisCode,
    /// Display name from the diagnosis catalog.
    pub name: String,
    pub belief: f64,
    pub plausibility: f64,
    pub ignorance: f64,
    pub severity: Severity,
    /// Treatment advice from the catalog, when available.
    pub treatment: Option<String>,
}

/// The result of one diagnosis run.
///
/// `findings` is sorted by descending belief (diagnosis code breaks
/// ties, so the order is total and stable). Diagnoses with zero belief
/// are excluded; an empty list with a non-empty mass function means the
/// evidence committed to nothing more specific than Θ.
#[derive(Debug, Clone)]
pub struct DiagnosisReport {
    /// Symptoms that contributed a mass function, in input order.
    pub used: Vec<SymptomCode>,
    /// Unknown symptoms skipped during fusion, in input order.
    pub skipped: Vec<SymptomCode>,
    /// The combined mass function, owned by this report.
    pub combined: MassFunction,
    pub findings: Vec<Finding>,
}

impl DiagnosisReport {
    /// Whether any diagnosis was detected. `false` means total
    /// ignorance: every focal set with positive mass was Θ.
    pub fn detected(&self) -> bool {
        !self.findings.is_empty()
    }

    /// The strongest finding, if any.
    pub fn top(&self) -> Option<&Finding> {
        self.findings.first()
    }
}

/// Sort findings by descending belief, diagnosis code as tiebreak.
pub(crate) fn sort_findings(findings: &mut [Finding]) {
    findings.sort_by(|a, b| {
        b.belief
            .partial_cmp(&a.belief)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.diagnosis.cmp(&b.diagnosis))
    });
}
