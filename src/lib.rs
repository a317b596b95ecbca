//! outline2xmind - convert outline text into XMind mind maps
//!
//! The input is a plain-text outline: an optional `Title:` line, `#` to
//! `####` headings, and `- ` / `* ` bullets whose indentation sets their
//! depth. The output is an XMind 2.0 map: `content.xml` with nested topics
//! and `meta.xml` with creation metadata, either packaged as a `.xmind`
//! archive or written side by side in batch mode.
//!
//! # Example - Parsing and serializing
//!
//! ```
//! use outline2xmind::outline::parse;
//! use outline2xmind::xmind::serialize;
//!
//! let doc = parse("Title: Demo\n# A\n- B\n- C\n");
//! assert_eq!(doc.title, "Demo");
//! assert_eq!(doc.roots[0].children.len(), 2);
//!
//! let xml = String::from_utf8(serialize(&doc.title, &doc.roots)).unwrap();
//! assert!(xml.contains("<topics type=\"attached\">"));
//! ```
//!
//! # Example - Archive mode
//!
//! ```no_run
//! # fn main() -> outline2xmind::Result<()> {
//! outline2xmind::convert::convert_file("plan.md", "plan.xmind")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Batch mode
//!
//! ```no_run
//! use outline2xmind::batch::{BatchConfig, run_batch};
//!
//! # fn main() -> outline2xmind::Result<()> {
//! let report = run_batch(&BatchConfig::default())?;
//! println!("{} converted, {} failed", report.converted.len(), report.failed.len());
//! # Ok(())
//! # }
//! ```

/// Errors, identifiers, and XML escaping shared by all modules
pub mod common;

/// Outline text parsing into a topic tree
pub mod outline;

/// XMind content.xml/meta.xml generation and packaging
pub mod xmind;

/// End-to-end conversion helpers
pub mod convert;

/// Folder-wide conversion with per-document error isolation
pub mod batch;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use outline::{Document, OutlineNode, parse};
pub use xmind::{make_metadata, pack, serialize};
