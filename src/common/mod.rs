//! Common types and utilities shared across the outline and XMind modules.

// Submodule declarations
pub mod error;
pub mod id;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use id::generate_id;
pub use xml::escape_xml;
