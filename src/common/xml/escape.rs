use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

/// Entity replacements for the five markup characters.
const MARKUP_ENTITIES: [(&str, &str); 5] = [
    ("&", "&amp;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("\"", "&quot;"),
    ("'", "&apos;"),
];

/// Stand-in for characters XML 1.0 does not allow anywhere in a document
const REPLACEMENT: &str = "\u{FFFD}";

/// Characters outside the XML 1.0 `Char` production that a Rust `str` can hold.
fn forbidden_chars() -> impl Iterator<Item = char> {
    ('\u{0}'..'\u{20}')
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .chain(['\u{FFFE}', '\u{FFFF}'])
}

/// Pattern/replacement table shared by the automaton and `replace_all`.
struct Escaper {
    automaton: AhoCorasick,
    replacements: Vec<String>,
}

// Built once on first use, shared across threads
static XML_ESCAPER: Lazy<Escaper> = Lazy::new(|| {
    let mut patterns: Vec<String> = Vec::new();
    let mut replacements: Vec<String> = Vec::new();
    for (raw, entity) in MARKUP_ENTITIES {
        patterns.push(raw.to_string());
        replacements.push(entity.to_string());
    }
    for c in forbidden_chars() {
        patterns.push(c.to_string());
        replacements.push(REPLACEMENT.to_string());
    }

    Escaper {
        automaton: AhoCorasick::new(&patterns).expect("Failed to build XML escaper"),
        replacements,
    }
});

/// Make text safe for an XML text node or attribute value.
///
/// The five markup characters become entities, and control characters that
/// XML 1.0 forbids (everything below U+0020 except tab, LF and CR, plus
/// U+FFFE and U+FFFF) become U+FFFD, so the output stays well-formed for any
/// input.
///
/// # Examples
///
/// ```
/// use outline2xmind::common::xml::escape_xml;
/// assert_eq!(escape_xml("A & B <tag>"), "A &amp; B &lt;tag&gt;");
/// assert_eq!(escape_xml("it's \"quoted\""), "it&apos;s &quot;quoted&quot;");
/// assert_eq!(escape_xml("bell\u{7}"), "bell\u{FFFD}");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER
        .automaton
        .replace_all(s, XML_ESCAPER.replacements.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_leaves_no_raw_specials() {
        let escaped = escape_xml(r#"<a href="x">Tom & Jerry's</a>"#);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        assert_eq!(escaped.matches('&').count(), escaped.matches(';').count());
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(escape_xml("Plain text 123 ünïcödé"), "Plain text 123 ünïcödé");
    }

    #[test]
    fn test_forbidden_control_chars_are_replaced() {
        assert_eq!(escape_xml("a\u{1}b"), "a\u{FFFD}b");
        assert_eq!(escape_xml("\u{0}\u{1b}\u{1f}"), "\u{FFFD}\u{FFFD}\u{FFFD}");
        assert_eq!(escape_xml("x\u{FFFE}y\u{FFFF}"), "x\u{FFFD}y\u{FFFD}");
        assert_eq!(escape_xml("<\u{2}>"), "&lt;\u{FFFD}&gt;");
    }

    #[test]
    fn test_allowed_whitespace_is_kept() {
        assert_eq!(escape_xml("a\tb\nc\rd"), "a\tb\nc\rd");
    }

    #[test]
    fn test_forbidden_set() {
        let forbidden: Vec<char> = forbidden_chars().collect();
        assert_eq!(forbidden.len(), 31);
        assert!(!forbidden.contains(&'\t'));
        assert!(!forbidden.contains(&' '));
    }
}
