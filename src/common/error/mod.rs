//! Unified error types for outline2xmind.
//!
//! This module provides a single error type covering filesystem access,
//! source decoding, and archive writing.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
