//! Display fragment trees.
//!
//! Renderers produce a small DOM-like tree: blocks, inline spans, links to
//! other documentation pages, markdown passages and text. The view layer
//! decides how to present it; `output` has text and HTML writers.

use serde::Serialize;

/// How an element participates in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Starts on its own line.
    Block,
    /// Flows with surrounding text.
    Inline,
    /// Inline, navigates to `Element::target` when activated.
    Link,
}

/// An element with an optional class marker and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
    /// Stable identity among siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Link destination: a type name or a `Type.field` coordinate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Fragment>,
}

/// A markdown passage, left for the view layer to convert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Markdown {
    pub class: &'static str,
    pub source: String,
}

/// A node of the display tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Fragment {
    /// Renders nothing.
    Empty,
    Text { text: String },
    Element(Element),
    Markdown(Markdown),
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text { text: text.into() }
    }

    pub fn markdown(class: &'static str, source: impl Into<String>) -> Self {
        Fragment::Markdown(Markdown {
            class,
            source: source.into(),
        })
    }

    fn element(tag: Tag, class: Option<&'static str>, children: Vec<Fragment>) -> Self {
        Fragment::Element(Element {
            tag,
            class,
            key: None,
            target: None,
            children,
        })
    }

    /// A block with an optional class marker.
    pub fn block(class: Option<&'static str>, children: Vec<Fragment>) -> Self {
        Self::element(Tag::Block, class, children)
    }

    /// An inline span with an optional class marker.
    pub fn inline(class: Option<&'static str>, children: Vec<Fragment>) -> Self {
        Self::element(Tag::Inline, class, children)
    }

    /// A link labelled `label` pointing at `target`.
    pub fn link(class: &'static str, target: impl Into<String>, label: impl Into<String>) -> Self {
        Fragment::Element(Element {
            tag: Tag::Link,
            class: Some(class),
            key: None,
            target: Some(target.into()),
            children: vec![Fragment::text(label)],
        })
    }

    /// Attach a sibling key; no effect on non-elements.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        if let Fragment::Element(element) = &mut self {
            element.key = Some(key.into());
        }
        self
    }

    /// Returns true for `Fragment::Empty`.
    pub fn is_empty(&self) -> bool {
        matches!(self, Fragment::Empty)
    }

    /// Get the element if this fragment is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Fragment::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The class marker of an element or markdown passage.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Fragment::Element(element) => element.class,
            Fragment::Markdown(markdown) => Some(markdown.class),
            _ => None,
        }
    }

    /// Direct children of an element.
    pub fn children(&self) -> &[Fragment] {
        match self {
            Fragment::Element(element) => &element.children,
            _ => &[],
        }
    }

    /// Concatenated text of the subtree, markdown sources included.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Fragment::Empty => {}
            Fragment::Text { text } => out.push_str(text),
            Fragment::Markdown(markdown) => out.push_str(&markdown.source),
            Fragment::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Every fragment in the subtree carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Fragment> {
        let mut out = Vec::new();
        self.collect_class(class, &mut out);
        out
    }

    fn collect_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Fragment>) {
        if self.class() == Some(class) {
            out.push(self);
        }
        for child in self.children() {
            child.collect_class(class, out);
        }
    }

    /// Number of fragments in the subtree carrying `class`.
    pub fn count_class(&self, class: &str) -> usize {
        self.find_by_class(class).len()
    }
}
