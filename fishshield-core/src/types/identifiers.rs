//! Identifier newtypes for the diagnosis domain.
//!
//! Diagnosis and symptom codes are opaque, user-facing strings
//! (e.g. "P01", "G07"). Newtypes keep the two id spaces from mixing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Code identifying one diagnosis hypothesis in the frame of discernment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosisCode(String);

impl DiagnosisCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiagnosisCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DiagnosisCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

/// Code identifying one observable symptom (evidence item).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomCode(String);

impl SymptomCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymptomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SymptomCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}
