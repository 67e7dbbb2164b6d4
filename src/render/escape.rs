//! HTML escaping and output clean-up helpers.

use regex::Regex;
use std::sync::OnceLock;

/// Line-break placeholder emitted for forced line breaks and empty blocks.
pub const LINE_BREAK: &str = "<br />";

const LINE_SEPARATOR: char = '\u{2028}';
const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// Escape markup-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);
    push_escaped(&mut result, text, false);
    result
}

/// Escape text content, turning each embedded line or paragraph separator
/// into exactly one line-break placeholder.
pub fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);
    push_escaped(&mut result, text, true);
    result
}

fn push_escaped(out: &mut String, text: &str, breaks: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' | LINE_SEPARATOR | PARAGRAPH_SEPARATOR if breaks => out.push_str(LINE_BREAK),
            _ => out.push(c),
        }
    }
}

/// Append ` name="value"` with the value escaped.
pub fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value, false);
    out.push('"');
}

/// Remove line breaks at the very start of the output.
pub fn strip_leading_line_breaks(html: &str) -> &str {
    static LEADING_BREAKS: OnceLock<Regex> = OnceLock::new();
    let re = LEADING_BREAKS.get_or_init(|| Regex::new(r"\A[\r\n]+").expect("valid regex"));
    match re.find(html) {
        Some(m) => &html[m.end()..],
        None => html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
        assert_eq!(escape_html("line\nbreak"), "line\nbreak");
    }

    #[test]
    fn test_escape_text_separators() {
        assert_eq!(escape_text("a\nb"), "a<br />b");
        assert_eq!(escape_text("a\u{2028}b"), "a<br />b");
        assert_eq!(escape_text("a\u{2029}b"), "a<br />b");
        assert_eq!(escape_text("a\n\nb"), "a<br /><br />b");
    }

    #[test]
    fn test_push_attribute() {
        let mut out = String::from("<img");
        push_attribute(&mut out, "src", "a\"b.png");
        assert_eq!(out, "<img src=\"a&quot;b.png\"");
    }

    #[test]
    fn test_strip_leading_line_breaks() {
        assert_eq!(strip_leading_line_breaks("\n\r\n<p>x</p>\n"), "<p>x</p>\n");
        assert_eq!(strip_leading_line_breaks("<p>x</p>"), "<p>x</p>");
        assert_eq!(strip_leading_line_breaks(""), "");
    }
}
