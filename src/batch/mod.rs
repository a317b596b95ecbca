//! Batch mode: convert every outline in a folder.
//!
//! Each input file `<name>.md` produces `<output>/<name>/content.xml` and
//! `<output>/<name>/meta.xml`. Documents are processed one at a time and a
//! failure on one is logged and skipped without touching the others. The
//! first run against a missing input folder only creates it.

mod config;
mod driver;

pub use config::{BatchConfig, DEFAULT_EXTENSION, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
pub use driver::{BatchReport, process_document, run_batch};
