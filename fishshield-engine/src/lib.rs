//! # fishshield-engine
//!
//! The Dempster-Shafer evidence combination engine.
//! Builds one elementary mass function per observed symptom, fuses them
//! with Dempster's rule of combination, and derives ranked, severity-
//! classified findings from belief/plausibility queries.
//!
//! The engine is purely functional: no shared mutable state, no I/O.
//! Each diagnosis run is independent and safe to execute concurrently
//! against the same (read-only) knowledge base.

pub mod belief;
pub mod engine;
pub mod mass;
pub mod report;

// Re-export the most commonly used types at the crate root.
pub use engine::{DiagnosisEngine, EngineError};
pub use mass::combine::{combine, combine_all, CombinationError};
pub use mass::focal::FocalSet;
pub use mass::function::MassFunction;
pub use report::{DiagnosisReport, Finding, Severity};
