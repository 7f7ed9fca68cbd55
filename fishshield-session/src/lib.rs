//! # fishshield-session
//!
//! Session-scoped diagnosis history.
//!
//! The log is an explicit, caller-owned, append-only data structure that
//! the presentation collaborator passes in and out — never ambient global
//! state. It lives for the process lifetime only; rows serialize via
//! serde so a collaborator may externalize them if it wants to.
//!
//! This is also the only place where numbers get rounded: report rows
//! render percentages at two decimals, while the engine's report keeps
//! full f64 precision.

pub mod log;
pub mod record;

pub use log::DiagnosisLog;
pub use record::{format_pct, DiagnosisRecord, ReportRow};
