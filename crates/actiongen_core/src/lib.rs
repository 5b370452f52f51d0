//! Provide the canonical naming conventions and target-language vocabulary for the actiongen generator.
//!
//! This crate is intentionally small and dependency-free. Every string the generator matches on or emits by
//! convention lives here, so the stringly-typed parts of the system stay auditable in one place.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no generator-specific types.
//! - [`conventions`] holds the runtime type names and naming rules of the action-dispatch pattern.
//! - [`dart`] holds the target-language tokens used when rendering generated source.

pub mod conventions;
pub mod dart;
