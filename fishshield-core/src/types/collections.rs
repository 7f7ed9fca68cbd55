//! Collection aliases used across the workspace.
//!
//! FxHash is a non-cryptographic hasher; all keys here are short
//! internal codes, never attacker-controlled input.

pub use rustc_hash::{FxHashMap, FxHashSet};
