//! Scoped HTML emission
//!
//! `Markup::element` opens a tag, runs the body closure, and closes the tag
//! when the closure returns, whatever it returns. Text and attribute values
//! are escaped on the way in; `raw` and `fragment` are the only unescaped
//! entry points.

const INDENT: &str = "  ";

#[derive(Debug, Default)]
pub struct Markup {
    buf: String,
    depth: usize,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `<tag attrs>`, the body, then `</tag>`, each on its own line.
    pub fn element<R>(
        &mut self,
        tag: &str,
        attrs: &[(&str, &str)],
        body: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.push_line(&open_tag(tag, attrs));
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        self.push_line(&format!("</{tag}>"));
        result
    }

    /// Emit `<tag attrs>text</tag>` on one line.
    pub fn line(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        let line = format!("{}{}</{tag}>", open_tag(tag, attrs), escape(text));
        self.push_line(&line);
    }

    /// Emit a self-closing tag such as `<br />`.
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        let mut line = format!("<{tag}");
        push_attrs(&mut line, attrs);
        line.push_str(" />");
        self.push_line(&line);
    }

    /// Emit one line verbatim at the current indentation.
    pub fn raw(&mut self, line: &str) {
        self.push_line(line);
    }

    /// Emit pre-rendered markup, re-indented to the current depth.
    pub fn fragment(&mut self, markup: &str) {
        for line in markup.lines() {
            self.push_line(line);
        }
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn push_line(&mut self, line: &str) {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(line);
        self.buf.push('\n');
    }
}

/// Escape text for use in element content and double-quoted attributes.
///
/// Line breaks become character references so escaped text always stays on
/// one output line and survives re-indentation unchanged.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}

fn open_tag(tag: &str, attrs: &[(&str, &str)]) -> String {
    let mut out = format!("<{tag}");
    push_attrs(&mut out, attrs);
    out.push('>');
    out
}

fn push_attrs(out: &mut String, attrs: &[(&str, &str)]) {
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_nested_elements_when_finishing_then_indents_and_closes() {
        let mut markup = Markup::new();
        markup.element("div", &[("id", "root")], |m| {
            m.line("h2", &[], "root");
            m.void("br", &[]);
        });

        assert_eq!(
            markup.finish(),
            "<div id=\"root\">\n  <h2>root</h2>\n  <br />\n</div>\n"
        );
    }

    #[test]
    fn given_body_error_when_emitting_element_then_tag_is_still_closed() {
        let mut markup = Markup::new();
        let result: Result<(), &str> = markup.element("table", &[], |m| {
            m.raw("<tbody>");
            Err("failed midway")
        });

        assert!(result.is_err());
        assert!(markup.finish().ends_with("</table>\n"));
    }

    #[test]
    fn given_special_characters_when_emitting_then_escapes_text_and_attributes() {
        let mut markup = Markup::new();
        markup.line("a", &[("href", "#a\"b")], "x < y & z");

        assert_eq!(
            markup.finish(),
            "<a href=\"#a&quot;b\">x &lt; y &amp; z</a>\n"
        );
    }

    #[test]
    fn given_multiline_text_when_emitting_then_line_breaks_are_references() {
        let mut markup = Markup::new();
        markup.element("tr", &[], |m| m.line("td", &[], "a\r\nb"));

        assert_eq!(markup.finish(), "<tr>\n  <td>a&#13;&#10;b</td>\n</tr>\n");
    }

    #[test]
    fn given_fragment_when_nested_then_each_line_is_reindented() {
        let mut markup = Markup::new();
        markup.element("body", &[], |m| m.fragment("<div>\n  <hr />\n</div>\n"));

        assert_eq!(
            markup.finish(),
            "<body>\n  <div>\n    <hr />\n  </div>\n</body>\n"
        );
    }
}
