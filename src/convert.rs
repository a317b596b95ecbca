//! End-to-end conversion helpers.
//!
//! These chain the parser, the serializer, the metadata generator and, in
//! archive mode, the packager.

use crate::common::{Error, Result};
use crate::outline::{Document, OutlineParser};
use crate::xmind::constants::DEFAULT_CREATOR;
use crate::xmind::{make_metadata_with_creator, pack, serialize_document};
use std::fs;
use std::path::Path;

/// The two serialized parts of one map.
#[derive(Debug, Clone)]
pub struct XmindParts {
    /// content.xml bytes
    pub content: Vec<u8>,
    /// meta.xml bytes
    pub meta: Vec<u8>,
}

impl XmindParts {
    /// Serialize a parsed document together with fresh metadata.
    pub fn from_document(doc: &Document, creator: &str) -> Self {
        Self {
            content: serialize_document(doc),
            meta: make_metadata_with_creator(creator),
        }
    }
}

/// Read an outline file as UTF-8.
///
/// A missing or unreadable file yields [`Error::Io`]; bytes that are not
/// valid UTF-8 yield [`Error::Encoding`] naming the file.
pub fn read_outline(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|source| Error::Encoding {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse outline text and serialize both parts with default options.
///
/// ```rust
/// use outline2xmind::convert::convert_str;
///
/// let parts = convert_str("Title: Demo\n# A\n");
/// let content = String::from_utf8(parts.content).unwrap();
/// assert!(content.contains("<title>Demo</title>"));
/// ```
pub fn convert_str(text: &str) -> XmindParts {
    let doc = OutlineParser::default().parse(text);
    XmindParts::from_document(&doc, DEFAULT_CREATOR)
}

/// Convert one outline file into an `.xmind` archive (archive mode).
///
/// Errors are not isolated here: reading, staging, and packaging failures
/// all propagate to the caller.
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();
    log::info!("Converting {} -> {}", input.display(), output.display());

    let text = read_outline(input)?;
    let parts = convert_str(&text);
    pack(&parts.content, &parts.meta, output)?;

    log::info!("Wrote {}", output.display());
    Ok(())
}
