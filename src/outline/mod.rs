//! Outline text parsing.
//!
//! The outline syntax is a small heading/bullet convention:
//!
//! ```text
//! Title: Project Plan
//! # Research
//! ## Sources
//! - Papers
//!   - Surveys
//! * Notes
//! ```
//!
//! `#` to `####` headings map to levels 1 to 4, `- ` bullets to level
//! `indent / 2 + 2` and `* ` bullets to level `indent / 2 + 3`. Each node
//! nests under the nearest preceding node with a strictly smaller level.
//! Lines matching none of these rules are dropped.

/// Outline tree types
mod node;
/// Line classification and tree construction
mod parser;

pub use node::{Document, OutlineNode};
pub use parser::{
    DEFAULT_TITLE, OutlineParser, ParseOptions, TITLE_PREFIX, classify_line, parse,
};
