//! XMind 2.0 schema constants, part names, and the archive extension.

/// Schema version written on both root elements
pub const XMAP_VERSION: &str = "2.0";

// ============================================================================
// NAMESPACES
// ============================================================================

/// Default namespace of content.xml
pub const NS_CONTENT: &str = "urn:xmind:xmap:xmlns:content:2.0";

/// Default namespace of meta.xml
pub const NS_META: &str = "urn:xmind:xmap:xmlns:meta:2.0";

/// Auxiliary namespaces declared on `xmap-content`, in declaration order.
///
/// None of them is used by emitted elements; XMind expects them present.
pub const AUX_NAMESPACES: [(&str, &str); 4] = [
    ("fo", "http://www.w3.org/1999/XSL/Format"),
    ("svg", "http://www.w3.org/2000/svg"),
    ("xhtml", "http://www.w3.org/1999/xhtml"),
    ("xlink", "http://www.w3.org/1999/xlink"),
];

// ============================================================================
// ELEMENTS AND ATTRIBUTE VALUES
// ============================================================================

pub const TAG_XMAP_CONTENT: &str = "xmap-content";
pub const TAG_SHEET: &str = "sheet";
pub const TAG_TOPIC: &str = "topic";
pub const TAG_TITLE: &str = "title";
pub const TAG_CHILDREN: &str = "children";
pub const TAG_TOPICS: &str = "topics";
pub const TAG_META: &str = "meta";

/// Structure class of the root topic: unbalanced map layout
pub const STRUCTURE_UNBALANCED: &str = "org.xmind.ui.map.unbalanced";

/// `type` of the topics wrapper holding ordinary nested children
pub const TOPICS_ATTACHED: &str = "attached";

/// Creator name written to meta.xml
pub const DEFAULT_CREATOR: &str = "GitHub Action";

// ============================================================================
// PACKAGE PARTS
// ============================================================================

/// Archive entry holding the map
pub const CONTENT_XML: &str = "content.xml";

/// Archive entry holding creation metadata
pub const META_XML: &str = "meta.xml";

/// File extension of packaged maps, without the dot
pub const XMIND_EXTENSION: &str = "xmind";

/// XML declaration prefixed to every part
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
