//! The append-only diagnosis log.

use serde::{Deserialize, Serialize};

use fishshield_engine::DiagnosisReport;

use crate::record::DiagnosisRecord;

/// Caller-owned history of diagnosis runs.
///
/// Strictly append-only: records can be added and read, never edited or
/// removed. The collaborator owns the instance and threads it through
/// the presentation boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosisLog {
    entries: Vec<DiagnosisRecord>,
}

impl DiagnosisLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn record(&mut self, record: DiagnosisRecord) {
        self.entries.push(record);
    }

    /// Snapshot and append a report; returns the stored record.
    pub fn record_report(&mut self, report: &DiagnosisReport) -> &DiagnosisRecord {
        self.entries.push(DiagnosisRecord::from_report(report));
        self.entries.last().expect("just pushed")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent record.
    pub fn latest(&self) -> Option<&DiagnosisRecord> {
        self.entries.last()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosisRecord> {
        self.entries.iter()
    }

    /// Records newest-first, the order history pages render in.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &DiagnosisRecord> {
        self.entries.iter().rev()
    }
}
