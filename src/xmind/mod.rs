//! XMind 2.0 document generation.
//!
//! An XMind file is a ZIP archive with two XML parts:
//!
//! - `content.xml`: the map itself, a `sheet` holding one root `topic` whose
//!   nested `children/topics[@type=attached]` mirror the outline tree
//! - `meta.xml`: creation time and creator name
//!
//! [`serialize`] and [`make_metadata`] produce the parts in memory;
//! [`pack`] bundles them into an archive on disk.

/// Schema constants
pub mod constants;
/// content.xml generation
mod content;
/// meta.xml generation
mod meta;
/// Package writing
mod writer;

pub use content::{serialize, serialize_document};
pub use meta::{CREATE_TIME_FORMAT, make_metadata, make_metadata_at, make_metadata_with_creator};
pub use writer::{PackageWriter, pack};
