//! Fragment writers: plain text, HTML and JSON.

use std::fmt::Write as _;

use crate::class;
use crate::error::RenderResult;
use crate::fragment::{Element, Fragment, Tag};

const INDENT: usize = 2;

impl Fragment {
    /// Plain text: blocks on their own lines, category items indented under
    /// their title, a blank line before each category.
    pub fn to_text(&self) -> String {
        let mut writer = TextWriter::default();
        writer.write(self);
        writer.flush();
        writer.out
    }

    /// HTML with class markers preserved and text escaped. Links carry
    /// their destination in `data-target`.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_html(self, &mut out);
        out
    }

    /// Pretty-printed JSON of the tree.
    pub fn to_json(&self) -> RenderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Default)]
struct TextWriter {
    out: String,
    line: String,
    indent: usize,
}

impl TextWriter {
    fn write(&mut self, fragment: &Fragment) {
        match fragment {
            Fragment::Empty => {}
            Fragment::Text { text } => self.line.push_str(text),
            Fragment::Markdown(markdown) => {
                self.flush();
                for line in markdown.source.lines() {
                    self.line.push_str(line);
                    self.flush();
                }
            }
            Fragment::Element(element) => match element.tag {
                Tag::Inline | Tag::Link => {
                    for child in &element.children {
                        self.write(child);
                    }
                }
                Tag::Block if element.class == Some(class::DOC_CATEGORY) => {
                    self.write_category(element)
                }
                Tag::Block => {
                    self.flush();
                    for child in &element.children {
                        self.write(child);
                    }
                    self.flush();
                }
            },
        }
    }

    fn write_category(&mut self, element: &Element) {
        self.flush();
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
        for child in &element.children {
            let nested = child.class() != Some(class::DOC_CATEGORY_TITLE);
            if nested {
                self.indent += INDENT;
            }
            self.write(child);
            self.flush();
            if nested {
                self.indent -= INDENT;
            }
        }
    }

    fn flush(&mut self) {
        if self.line.trim().is_empty() {
            self.line.clear();
            return;
        }
        for _ in 0..self.indent {
            self.out.push(' ');
        }
        self.out.push_str(self.line.trim_end());
        self.out.push('\n');
        self.line.clear();
    }
}

fn write_html(fragment: &Fragment, out: &mut String) {
    match fragment {
        Fragment::Empty => {}
        Fragment::Text { text } => escape_into(text, out),
        Fragment::Markdown(markdown) => {
            let _ = write!(out, "<div class=\"{}\">", markdown.class);
            escape_into(&markdown.source, out);
            out.push_str("</div>");
        }
        Fragment::Element(element) => {
            let name = match element.tag {
                Tag::Block => "div",
                Tag::Inline => "span",
                Tag::Link => "a",
            };
            out.push('<');
            out.push_str(name);
            if let Some(class) = element.class {
                let _ = write!(out, " class=\"{}\"", class);
            }
            if let Some(key) = &element.key {
                out.push_str(" data-key=\"");
                escape_into(key, out);
                out.push('"');
            }
            if let Some(target) = &element.target {
                out.push_str(" data-target=\"");
                escape_into(target, out);
                out.push('"');
            }
            out.push('>');
            for child in &element.children {
                write_html(child, out);
            }
            let _ = write!(out, "</{}>", name);
        }
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
