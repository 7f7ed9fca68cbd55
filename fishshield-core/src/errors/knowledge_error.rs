//! Knowledge-base validation and loading errors.
//!
//! Malformed rules are rejected here, at load time. The engine may
//! assume any `KnowledgeBase` it receives is valid.

use super::error_code::{self, FishShieldErrorCode};

/// Errors that can occur while loading or validating a knowledge base.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Density {density} for symptom {symptom} is outside (0, 1]")]
    DensityOutOfRange { symptom: String, density: f64 },

    #[error("Rule for symptom {symptom} has an empty diagnosis set")]
    EmptyDiagnosisSet { symptom: String },

    #[error("Rule for symptom {symptom} references uncataloged diagnosis {diagnosis}")]
    UnknownDiagnosis { symptom: String, diagnosis: String },

    #[error("Rule references symptom {symptom} missing from the symptom catalog")]
    UnknownSymptom { symptom: String },

    #[error("Duplicate code {code} in knowledge base")]
    DuplicateCode { code: String },

    #[error("Failed to parse knowledge config: {message}")]
    ParseError { message: String },

    #[error("Failed to read knowledge config at {path}: {message}")]
    IoError { path: String, message: String },
}

impl FishShieldErrorCode for KnowledgeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DensityOutOfRange { .. } => error_code::KNOWLEDGE_DENSITY_OUT_OF_RANGE,
            Self::EmptyDiagnosisSet { .. } => error_code::KNOWLEDGE_EMPTY_DIAGNOSIS_SET,
            Self::UnknownDiagnosis { .. } => error_code::KNOWLEDGE_UNKNOWN_DIAGNOSIS,
            Self::UnknownSymptom { .. } => error_code::KNOWLEDGE_UNKNOWN_SYMPTOM,
            Self::DuplicateCode { .. } => error_code::KNOWLEDGE_DUPLICATE_CODE,
            Self::ParseError { .. } => error_code::KNOWLEDGE_PARSE_ERROR,
            Self::IoError { .. } => error_code::KNOWLEDGE_IO_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_and_code() {
        let err = KnowledgeError::DensityOutOfRange {
            symptom: "G01".to_string(),
            density: 1.5,
        };
        assert_eq!(err.error_code(), "KNOWLEDGE_DENSITY_OUT_OF_RANGE");
        assert_eq!(
            err.to_string(),
            "Density 1.5 for symptom G01 is outside (0, 1]"
        );
    }

    #[test]
    fn test_every_variant_has_a_code() {
        let errors = [
            KnowledgeError::DensityOutOfRange { symptom: "G01".into(), density: 0.0 },
            KnowledgeError::EmptyDiagnosisSet { symptom: "G01".into() },
            KnowledgeError::UnknownDiagnosis { symptom: "G01".into(), diagnosis: "P99".into() },
            KnowledgeError::UnknownSymptom { symptom: "G99".into() },
            KnowledgeError::DuplicateCode { code: "G01".into() },
            KnowledgeError::ParseError { message: "bad toml".into() },
            KnowledgeError::IoError { path: "kb.toml".into(), message: "not found".into() },
        ];
        let codes: Vec<&str> = errors.iter().map(|e| e.error_code()).collect();
        assert_eq!(codes.len(), 7);
        assert!(codes.iter().all(|c| c.starts_with("KNOWLEDGE_")));
    }
}
