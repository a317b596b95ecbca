//! content.xml generation.
//!
//! This module provides the `ContentWriter` struct which walks an outline
//! forest and emits the nested `xmap-content` document. Every topic element
//! gets an identifier and millisecond timestamp generated at the moment it is
//! written; parse-time node identifiers are never reused, so two runs over the
//! same tree differ only in `id` and `timestamp` values.

use super::constants::{
    AUX_NAMESPACES, NS_CONTENT, STRUCTURE_UNBALANCED, TAG_CHILDREN, TAG_SHEET, TAG_TITLE,
    TAG_TOPIC, TAG_TOPICS, TAG_XMAP_CONTENT, TOPICS_ATTACHED, XML_DECLARATION, XMAP_VERSION,
};
use crate::common::{escape_xml, generate_id};
use crate::outline::{Document, OutlineNode};

/// Indentation unit for pretty printing
const INDENT: &str = "  ";

/// Serialize a title and forest into a UTF-8 content.xml buffer.
///
/// ```rust
/// use outline2xmind::outline::parse;
/// use outline2xmind::xmind::serialize;
///
/// let doc = parse("Title: Demo\n# A & B\n");
/// let xml = String::from_utf8(serialize(&doc.title, &doc.roots)).unwrap();
/// assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
/// assert!(xml.contains("<title>A &amp; B</title>"));
/// ```
pub fn serialize(title: &str, roots: &[OutlineNode]) -> Vec<u8> {
    let mut writer = ContentWriter::new();
    writer.write_map(title, roots);
    writer.finish()
}

/// Serialize a parsed document.
#[inline]
pub fn serialize_document(doc: &Document) -> Vec<u8> {
    serialize(&doc.title, &doc.roots)
}

/// Current time in milliseconds since the Unix epoch, as attribute text.
fn timestamp_millis() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// Low-level writer for content.xml.
///
/// Elements are written straight into a string buffer with two-space
/// indentation. Text and attribute values are escaped on the way in.
pub(crate) struct ContentWriter {
    /// The output buffer
    buffer: String,
    /// Current nesting depth
    depth: usize,
}

impl ContentWriter {
    pub fn new() -> Self {
        let mut buffer = String::with_capacity(4096);
        buffer.push_str(XML_DECLARATION);
        buffer.push('\n');
        Self { buffer, depth: 0 }
    }

    /// Write the whole map: root element, sheet, root topic, and the forest.
    pub fn write_map(&mut self, title: &str, roots: &[OutlineNode]) {
        let mut root_attrs: Vec<(String, &str)> = vec![("xmlns".to_string(), NS_CONTENT)];
        root_attrs.extend(
            AUX_NAMESPACES
                .iter()
                .map(|(prefix, uri)| (format!("xmlns:{prefix}"), *uri)),
        );
        root_attrs.push(("version".to_string(), XMAP_VERSION));
        let root_attrs: Vec<(&str, &str)> =
            root_attrs.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        self.open(TAG_XMAP_CONTENT, &root_attrs);

        let sheet_id = generate_id();
        let sheet_ts = timestamp_millis();
        self.open(TAG_SHEET, &[("id", sheet_id.as_str()), ("timestamp", sheet_ts.as_str())]);

        let topic_id = generate_id();
        let topic_ts = timestamp_millis();
        self.open(
            TAG_TOPIC,
            &[
                ("id", topic_id.as_str()),
                ("structure-class", STRUCTURE_UNBALANCED),
                ("timestamp", topic_ts.as_str()),
            ],
        );
        self.text_element(TAG_TITLE, title);
        self.write_children(roots);
        self.close(TAG_TOPIC);

        self.close(TAG_SHEET);
        self.close(TAG_XMAP_CONTENT);
    }

    /// Write one node's topic and, recursively, its descendants.
    fn write_topic(&mut self, node: &OutlineNode) {
        let id = generate_id();
        let ts = timestamp_millis();
        self.open(TAG_TOPIC, &[("id", id.as_str()), ("timestamp", ts.as_str())]);
        self.text_element(TAG_TITLE, &node.text);
        self.write_children(&node.children);
        self.close(TAG_TOPIC);
    }

    /// Write the `children/topics[@type=attached]` wrapper, or nothing for leaves.
    fn write_children(&mut self, children: &[OutlineNode]) {
        if children.is_empty() {
            return;
        }
        self.open(TAG_CHILDREN, &[]);
        self.open(TAG_TOPICS, &[("type", TOPICS_ATTACHED)]);
        for child in children {
            self.write_topic(child);
        }
        self.close(TAG_TOPICS);
        self.close(TAG_CHILDREN);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(INDENT);
        }
    }

    fn write_start_tag(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.write_indent();
        self.buffer.push('<');
        self.buffer.push_str(name);
        for (key, value) in attrs {
            self.buffer.push(' ');
            self.buffer.push_str(key);
            self.buffer.push_str("=\"");
            self.buffer.push_str(&escape_xml(value));
            self.buffer.push('"');
        }
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.write_start_tag(name, attrs);
        self.buffer.push_str(">\n");
        self.depth += 1;
    }

    fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.write_indent();
        self.buffer.push_str("</");
        self.buffer.push_str(name);
        self.buffer.push_str(">\n");
    }

    /// Inline element holding only text; empty text collapses to `<name/>`.
    fn text_element(&mut self, name: &str, text: &str) {
        self.write_start_tag(name, &[]);
        if text.is_empty() {
            self.buffer.push_str("/>\n");
            return;
        }
        self.buffer.push('>');
        self.buffer.push_str(&escape_xml(text));
        self.buffer.push_str("</");
        self.buffer.push_str(name);
        self.buffer.push_str(">\n");
    }

    pub fn finish(self) -> Vec<u8> {
        self.buffer.into_bytes()
    }
}
