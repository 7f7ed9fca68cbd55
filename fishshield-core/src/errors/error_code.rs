//! Stable machine-readable error codes.
//!
//! Codes are part of the public contract: collaborators match on them,
//! so they never change once shipped.

/// Trait implemented by every FishShield error type to expose a stable code.
pub trait FishShieldErrorCode {
    fn error_code(&self) -> &'static str;
}

// Knowledge-base (load-time) errors.
pub const KNOWLEDGE_DENSITY_OUT_OF_RANGE: &str = "KNOWLEDGE_DENSITY_OUT_OF_RANGE";
pub const KNOWLEDGE_EMPTY_DIAGNOSIS_SET: &str = "KNOWLEDGE_EMPTY_DIAGNOSIS_SET";
pub const KNOWLEDGE_UNKNOWN_DIAGNOSIS: &str = "KNOWLEDGE_UNKNOWN_DIAGNOSIS";
pub const KNOWLEDGE_UNKNOWN_SYMPTOM: &str = "KNOWLEDGE_UNKNOWN_SYMPTOM";
pub const KNOWLEDGE_DUPLICATE_CODE: &str = "KNOWLEDGE_DUPLICATE_CODE";
pub const KNOWLEDGE_PARSE_ERROR: &str = "KNOWLEDGE_PARSE_ERROR";
pub const KNOWLEDGE_IO_ERROR: &str = "KNOWLEDGE_IO_ERROR";

// Engine (inference-time) errors.
pub const ENGINE_TOTAL_CONFLICT: &str = "ENGINE_TOTAL_CONFLICT";
pub const ENGINE_NO_USABLE_EVIDENCE: &str = "ENGINE_NO_USABLE_EVIDENCE";
