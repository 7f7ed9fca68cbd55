//! Error taxonomy for the FishShield workspace.

pub mod error_code;
pub mod knowledge_error;

pub use error_code::FishShieldErrorCode;
pub use knowledge_error::KnowledgeError;
