//! Outline parser.
//!
//! Converts outline text into a [`Document`]: a title plus an ordered forest
//! of [`OutlineNode`]s. Parsing is best effort and never fails; lines that
//! match no rule are skipped.

use super::node::{Document, OutlineNode};

/// Literal that introduces the title line.
pub const TITLE_PREFIX: &str = "Title:";

/// Title used when the outline has no title line.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Heading markers in match priority order, with their levels.
const HEADING_MARKERS: [(&str, usize); 4] = [("#### ", 4), ("### ", 3), ("## ", 2), ("# ", 1)];

/// Bullet markers with the level they start at before indentation is added.
const BULLET_MARKERS: [(&str, usize); 2] = [("- ", 2), ("* ", 3)];

/// Options controlling title detection.
///
/// # Examples
///
/// ```rust
/// use outline2xmind::outline::{OutlineParser, ParseOptions};
///
/// let parser = OutlineParser::new(ParseOptions::new().with_default_title("Mind Map"));
/// let doc = parser.parse("# Only a heading");
/// assert_eq!(doc.title, "Mind Map");
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Case-sensitive prefix of the title line, including the colon
    pub title_prefix: String,
    /// Title used when no title line is present
    pub default_title: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            title_prefix: TITLE_PREFIX.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ParseOptions {
    /// Create options with the default title prefix and placeholder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix that marks the title line.
    #[inline]
    pub fn with_title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.title_prefix = prefix.into();
        self
    }

    /// Set the placeholder title.
    #[inline]
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }
}

/// Classify a single non-title line.
///
/// Returns the level and the content for headings and bullets, `None` for
/// anything else. Headings must start at column zero; bullets may be
/// indented, and every leading whitespace character counts as one column.
///
/// ```rust
/// use outline2xmind::outline::classify_line;
///
/// assert_eq!(classify_line("## Goals"), Some((2, "Goals")));
/// assert_eq!(classify_line("    - deep"), Some((4, "deep")));
/// assert_eq!(classify_line("  * star"), Some((4, "star")));
/// assert_eq!(classify_line("plain prose"), None);
/// ```
pub fn classify_line(line: &str) -> Option<(usize, &str)> {
    for (marker, level) in HEADING_MARKERS {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some((level, rest.trim()));
        }
    }

    let body = line.trim_start();
    let indent = line[..line.len() - body.len()].chars().count();
    for (marker, base) in BULLET_MARKERS {
        if let Some(rest) = body.strip_prefix(marker) {
            return Some((indent / 2 + base, rest.trim()));
        }
    }

    None
}

/// Parse outline text with the default options.
///
/// ```rust
/// use outline2xmind::outline::parse;
///
/// let doc = parse("Title: Demo\n# A\n- B\n- C\n");
/// assert_eq!(doc.title, "Demo");
/// assert_eq!(doc.roots.len(), 1);
/// assert_eq!(doc.roots[0].children.len(), 2);
/// ```
pub fn parse(text: &str) -> Document {
    OutlineParser::default().parse(text)
}

/// Outline parser holding its options.
#[derive(Debug, Clone, Default)]
pub struct OutlineParser {
    options: ParseOptions,
}

impl OutlineParser {
    /// Create a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse outline text into a document.
    ///
    /// Blank lines are skipped before classification. A title line sets the
    /// title from its trimmed remainder; when several are present the last
    /// one wins.
    pub fn parse(&self, text: &str) -> Document {
        let mut title: Option<String> = None;
        let mut builder = TreeBuilder::default();

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(rest) = line.strip_prefix(self.options.title_prefix.as_str()) {
                title = Some(rest.trim().to_string());
                continue;
            }

            if let Some((level, content)) = classify_line(line) {
                builder.push(OutlineNode::new(content, level));
            }
        }

        Document {
            title: title.unwrap_or_else(|| self.options.default_title.clone()),
            roots: builder.finish(),
        }
    }
}

/// Level-ordered stack of open nodes.
///
/// Open nodes stay owned by the stack until a node of equal or lower level
/// closes them; a closed node is appended to the entry below it, or to the
/// root list when the stack is empty. Children are closed in source order,
/// so sibling order is preserved without any back references.
#[derive(Debug, Default)]
struct TreeBuilder {
    stack: Vec<OutlineNode>,
    roots: Vec<OutlineNode>,
}

impl TreeBuilder {
    fn push(&mut self, node: OutlineNode) {
        while self.stack.last().is_some_and(|top| top.level >= node.level) {
            self.close_top();
        }
        self.stack.push(node);
    }

    fn close_top(&mut self) {
        if let Some(done) = self.stack.pop() {
            match self.stack.last_mut() {
                Some(parent) => parent.children.push(done),
                None => self.roots.push(done),
            }
        }
    }

    fn finish(mut self) -> Vec<OutlineNode> {
        while !self.stack.is_empty() {
            self.close_top();
        }
        self.roots
    }
}
