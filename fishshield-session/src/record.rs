//! Timestamped diagnosis records at presentation precision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fishshield_core::{DiagnosisCode, SymptomCode};
use fishshield_engine::{DiagnosisReport, Finding, Severity};

/// Render a [0, 1] value as a two-decimal percentage string.
pub fn format_pct(value: f64) -> String {
    format!("{:.2}", value * 100.0)
}

/// One table row of a recorded diagnosis, rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub diagnosis: DiagnosisCode,
    pub name: String,
    /// Belief as a two-decimal percentage, e.g. "87.00".
    pub belief_pct: String,
    pub plausibility_pct: String,
    pub ignorance_pct: String,
    pub severity: Severity,
    pub treatment: Option<String>,
}

impl ReportRow {
    pub fn from_finding(finding: &Finding) -> Self {
        Self {
            diagnosis: finding.diagnosis.clone(),
            name: finding.name.clone(),
            belief_pct: format_pct(finding.belief),
            plausibility_pct: format_pct(finding.plausibility),
            ignorance_pct: format_pct(finding.ignorance),
            severity: finding.severity,
            treatment: finding.treatment.clone(),
        }
    }
}

/// One recorded diagnosis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    pub recorded_at: DateTime<Utc>,
    /// Symptoms that contributed to the fusion, in input order.
    pub symptoms: Vec<SymptomCode>,
    /// Unknown symptoms the engine skipped.
    pub skipped: Vec<SymptomCode>,
    /// Ranked rows; empty when no diagnosis was detected.
    pub rows: Vec<ReportRow>,
}

impl DiagnosisRecord {
    /// Snapshot a report at the current time.
    pub fn from_report(report: &DiagnosisReport) -> Self {
        Self::from_report_at(report, Utc::now())
    }

    /// Snapshot a report with an explicit timestamp (deterministic tests,
    /// callers with their own clock).
    pub fn from_report_at(report: &DiagnosisReport, recorded_at: DateTime<Utc>) -> Self {
        Self {
            recorded_at,
            symptoms: report.used.clone(),
            skipped: report.skipped.clone(),
            rows: report.findings.iter().map(ReportRow::from_finding).collect(),
        }
    }

    /// Whether this run detected any diagnosis.
    pub fn detected(&self) -> bool {
        !self.rows.is_empty()
    }
}
