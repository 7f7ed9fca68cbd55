//! # fishshield-core
//!
//! Foundation crate for the FishShield diagnosis engine.
//! Defines identifiers, errors, config, the validated knowledge base,
//! and the tracing bootstrap. Every other crate in the workspace
//! depends on this.

pub mod builtin;
pub mod config;
pub mod errors;
pub mod knowledge;
pub mod telemetry;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::KnowledgeConfig;
pub use errors::error_code::FishShieldErrorCode;
pub use errors::knowledge_error::KnowledgeError;
pub use knowledge::{DiagnosisInfo, KnowledgeBase, KnowledgeRule, SymptomInfo};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::identifiers::{DiagnosisCode, SymptomCode};
