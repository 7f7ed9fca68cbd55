//! Configuration schemas.

pub mod knowledge_config;

pub use knowledge_config::{DiagnosisEntry, KnowledgeConfig, RuleEntry, SymptomEntry};
