//! The document tree shared by the parser and the renderer.
//!
//! A parsed document is a [`Node::Group`] whose children are, in source
//! order, paragraphs, preview blocks and horizontal rules:
//!
//! ```text
//! Group
//! ├── Paragraph
//! │   ├── Text "He said "
//! │   ├── Slant "never"
//! │   ├── MDash
//! │   └── Text "twice."
//! ├── HLine
//! └── Preview "caption"
//!     └── Paragraph ...
//! ```
//!
//! Payloads are raw bytes: the parser never decodes its input, so a document
//! in any ASCII-compatible encoding survives a parse/render cycle untouched.
//!
//! ## Building trees by hand
//!
//! ```rust
//! use fictex::{Node, Span};
//!
//! let doc = Node::group(vec![Node::paragraph(vec![
//!     Node::text("a "),
//!     Span::Bold.node("bold"),
//!     Node::NDash,
//! ])]);
//! assert_eq!(doc.children()[0].children().len(), 3);
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A node of the document tree.
///
/// Payload-bearing variants (`Text`, `Bold`, `Slant`, `Underline`) are never
/// empty when produced by the parser; only a preview caption may be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Transparent container; the document root.
    Group(Vec<Node>),
    /// A literal run of text.
    Text(Vec<u8>),
    /// A run of inline nodes.
    Paragraph(Vec<Node>),
    Bold(Vec<u8>),
    Slant(Vec<u8>),
    Underline(Vec<u8>),
    NDash,
    MDash,
    HLine,
    /// A collapsible block: a one-line caption and a body of paragraphs and rules.
    Preview {
        caption: Vec<u8>,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn group(children: Vec<Node>) -> Self {
        Node::Group(children)
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(children)
    }

    pub fn text(text: impl Into<Vec<u8>>) -> Self {
        Node::Text(text.into())
    }

    pub fn preview(caption: impl Into<Vec<u8>>, children: Vec<Node>) -> Self {
        Node::Preview {
            caption: caption.into(),
            children,
        }
    }

    /// Name of the variant, as used by the tree dump and the JSON export.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Node::Group(_) => "Group",
            Node::Text(_) => "Text",
            Node::Paragraph(_) => "Paragraph",
            Node::Bold(_) => "Bold",
            Node::Slant(_) => "Slant",
            Node::Underline(_) => "Underline",
            Node::NDash => "NDash",
            Node::MDash => "MDash",
            Node::HLine => "HLine",
            Node::Preview { .. } => "Preview",
        }
    }

    /// The byte payload: the text of a run or span, or a preview caption.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fictex::Node;
    ///
    /// assert_eq!(Node::text("hi").payload(), Some(&b"hi"[..]));
    /// assert_eq!(Node::HLine.payload(), None);
    /// ```
    #[must_use]
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Node::Text(text)
            | Node::Bold(text)
            | Node::Slant(text)
            | Node::Underline(text)
            | Node::Preview { caption: text, .. } => Some(text.as_slice()),
            _ => None,
        }
    }

    /// Child nodes; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Group(children)
            | Node::Paragraph(children)
            | Node::Preview { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "| ".repeat(depth);
        writeln!(f, "{indent}+ {}:", self.kind())?;
        if let Some(text) = self.payload().filter(|text| !text.is_empty()) {
            writeln!(f, "{indent}| + {:?}", String::from_utf8_lossy(text))?;
        }
        for child in self.children() {
            child.fmt_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Renders an indented dump of the tree, one node per line.
///
/// ```rust
/// use fictex::Node;
///
/// let doc = Node::group(vec![Node::paragraph(vec![Node::text("a")])]);
/// assert_eq!(
///     doc.to_string(),
///     "+ Group:\n| + Paragraph:\n| | + Text:\n| | | + \"a\"\n"
/// );
/// ```
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let payload = self.payload().filter(|text| !text.is_empty());
        let children = self.children();

        let len = 1 + usize::from(payload.is_some()) + usize::from(!children.is_empty());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", self.kind())?;
        if let Some(text) = payload {
            map.serialize_entry("text", &String::from_utf8_lossy(text))?;
        }
        if !children.is_empty() {
            map.serialize_entry("children", children)?;
        }
        map.end()
    }
}

/// The three inline span styles and their marker bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Span {
    Bold,
    Slant,
    Underline,
}

impl Span {
    /// Maps a marker byte (`*`, `/`, `_`) to its span style.
    #[must_use]
    pub const fn from_marker(marker: u8) -> Option<Span> {
        match marker {
            b'*' => Some(Span::Bold),
            b'/' => Some(Span::Slant),
            b'_' => Some(Span::Underline),
            _ => None,
        }
    }

    #[must_use]
    pub const fn marker(self) -> u8 {
        match self {
            Span::Bold => b'*',
            Span::Slant => b'/',
            Span::Underline => b'_',
        }
    }

    /// Wraps a payload in the node variant for this style.
    pub fn node(self, text: impl Into<Vec<u8>>) -> Node {
        let text = text.into();
        match self {
            Span::Bold => Node::Bold(text),
            Span::Slant => Node::Slant(text),
            Span::Underline => Node::Underline(text),
        }
    }
}
