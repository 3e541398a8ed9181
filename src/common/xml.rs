//! Helpers for building XML part payloads.
//!
//! The writer emits XML by pushing straight into `String` buffers; these
//! helpers cover the two hot spots, entity escaping and integer attribute
//! values, without pulling a serialization framework onto the write path.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use slidesmith::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Append `s` to `buf`, escaping XML special characters.
///
/// Skips the replacement pass entirely when the text contains none of the
/// five metacharacters, which is the common case for slide content.
#[inline]
pub fn push_escaped(buf: &mut String, s: &str) {
    if XML_ESCAPER.find(s).is_some() {
        buf.push_str(&escape_xml(s));
    } else {
        buf.push_str(s);
    }
}

/// Append a decimal integer to `buf`.
#[inline]
pub fn push_int(buf: &mut String, value: i64) {
    let mut scratch = itoa::Buffer::new();
    buf.push_str(scratch.format(value));
}

/// Append ` name="value"` with an integer value to `buf`.
#[inline]
pub fn push_int_attr(buf: &mut String, name: &str, value: i64) {
    buf.push(' ');
    buf.push_str(name);
    buf.push_str("=\"");
    push_int(buf, value);
    buf.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("plain text"), "plain text");
        assert_eq!(escape_xml("R&D"), "R&amp;D");
        assert_eq!(escape_xml("a < b > c"), "a &lt; b &gt; c");
        assert_eq!(escape_xml("'quoted' \"twice\""), "&apos;quoted&apos; &quot;twice&quot;");
    }

    #[test]
    fn test_push_escaped() {
        let mut buf = String::from("<a:t>");
        push_escaped(&mut buf, "Q3 & Q4");
        buf.push_str("</a:t>");
        assert_eq!(buf, "<a:t>Q3 &amp; Q4</a:t>");

        let mut buf = String::new();
        push_escaped(&mut buf, "no specials here");
        assert_eq!(buf, "no specials here");
    }

    #[test]
    fn test_push_int() {
        let mut buf = String::new();
        push_int(&mut buf, 9_144_000);
        assert_eq!(buf, "9144000");

        let mut buf = String::new();
        push_int(&mut buf, -42);
        assert_eq!(buf, "-42");
    }

    #[test]
    fn test_push_int_attr() {
        let mut buf = String::from("<a:off");
        push_int_attr(&mut buf, "x", 457_200);
        push_int_attr(&mut buf, "y", 274_320);
        buf.push_str("/>");
        assert_eq!(buf, "<a:off x=\"457200\" y=\"274320\"/>");
    }
}
