//! # fictex
//!
//! A parser and configurable renderer for fictex, a small plain-text markup
//! language for writing fiction.
//!
//! ## What is fictex?
//!
//! fictex is the markup behind a web story editor: authors type plain text
//! with a handful of conventions, and get a live HTML preview plus a
//! normalized canonical form for storage.
//!
//! ## Key Features
//!
//! - **Forgiving**: every input parses; malformed markup degrades to literal text
//! - **Typographic dashes**: `--` and `---` become en and em dashes, `----` a rule
//! - **Inline styles**: `*bold*`, `/slant/`, `_underline_`, gated on word boundaries
//! - **Preview blocks**: `<<caption ... >>` folds with a short caption and a full body
//! - **Configurable output**: one tree walker, any bracket strings, optional escaping
//! - **Single pass**: linear time, two bytes of lookahead, no backtracking
//!
//! ## Quick Start
//!
//! ```rust
//! use fictex::{parse_str, to_html, to_text};
//!
//! let doc = parse_str("It was a *dark*\nnight---or so they said.").unwrap();
//!
//! assert_eq!(
//!     to_html(&doc).unwrap(),
//!     "<p>\nIt was a <b>dark</b> night&#8212;or so they said.\n</p>\n"
//! );
//! assert_eq!(
//!     to_text(&doc).unwrap(),
//!     "\n    It was a *dark* night---or so they said.\n"
//! );
//! ```
//!
//! ### Recovering from errors
//!
//! The only malformed input the parser reports is a preview block that is
//! never closed. The error still carries everything parsed so far:
//!
//! ```rust
//! use fictex::{parse_str, to_html};
//!
//! let tree = match parse_str("<<Chapter 2\nDraft...") {
//!     Ok(tree) => tree,
//!     Err(err) => {
//!         assert!(err.error().is_unterminated());
//!         err.into_partial()
//!     }
//! };
//! assert!(to_html(&tree).unwrap().contains("Draft..."));
//! ```
//!
//! ## Markup reference
//!
//! See the [`syntax`] module for the full language description.

pub mod config;
pub mod cursor;
pub mod error;
pub mod node;
pub mod parser;
pub mod render;
pub mod syntax;

pub use config::{Brackets, Config, Escape};
pub use error::{Error, ParseError, Result};
pub use node::{Node, Span};
pub use parser::Parser;
pub use render::Renderer;

use std::io::{self, BufReader};

/// Parses a fictex document from a reader.
///
/// # Examples
///
/// ```rust
/// use fictex::{parse, Node};
/// use std::io::Cursor;
///
/// let doc = parse(Cursor::new(b"----")).unwrap();
/// assert_eq!(doc, Node::group(vec![Node::HLine]));
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] if a preview block is left open or the reader
/// fails. The error owns the tree parsed up to that point.
pub fn parse<R>(reader: R) -> std::result::Result<Node, ParseError>
where
    R: io::Read,
{
    Parser::new(BufReader::new(reader)).parse_document()
}

/// Parses a fictex document held in memory.
///
/// # Errors
///
/// Returns a [`ParseError`] if a preview block is left open.
pub fn parse_bytes(bytes: &[u8]) -> std::result::Result<Node, ParseError> {
    Parser::new(bytes).parse_document()
}

/// Parses a fictex document from a string.
///
/// # Examples
///
/// ```rust
/// use fictex::{parse_str, Node};
///
/// let doc = parse_str("a\nb\n\nc\nd").unwrap();
/// assert_eq!(
///     doc,
///     Node::group(vec![
///         Node::paragraph(vec![Node::text("a b")]),
///         Node::paragraph(vec![Node::text("c d")]),
///     ])
/// );
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] if a preview block is left open.
pub fn parse_str(s: &str) -> std::result::Result<Node, ParseError> {
    parse_bytes(s.as_bytes())
}

/// Renders a tree to a writer.
///
/// # Errors
///
/// Returns [`Error::Sink`] on the first failed write.
pub fn render_to_writer<W>(writer: W, node: &Node, config: &Config) -> Result<()>
where
    W: io::Write,
{
    Renderer::new(writer, config).render(node)
}

/// Renders a tree to a byte vector.
///
/// # Errors
///
/// Writing to a `Vec` does not fail; the `Result` mirrors [`render_to_writer`].
pub fn render_to_vec(node: &Node, config: &Config) -> Result<Vec<u8>> {
    let mut renderer = Renderer::new(Vec::with_capacity(256), config);
    renderer.render(node)?;
    Ok(renderer.into_inner())
}

/// Renders a tree to a `String`.
///
/// # Errors
///
/// Returns [`Error::Utf8`] if the output is not valid UTF-8, which can only
/// happen when the parsed source was not.
pub fn render_to_string(node: &Node, config: &Config) -> Result<String> {
    Ok(String::from_utf8(render_to_vec(node, config)?)?)
}

/// Renders a tree as normalized fictex markup ([`Config::text`]).
///
/// # Errors
///
/// See [`render_to_string`].
pub fn to_text(node: &Node) -> Result<String> {
    render_to_string(node, &Config::text())
}

/// Renders a tree as HTML ([`Config::html`]).
///
/// # Examples
///
/// ```rust
/// use fictex::{parse_str, to_html};
///
/// let doc = parse_str("<<short\nlong\n>>").unwrap();
/// assert_eq!(
///     to_html(&doc).unwrap(),
///     "<!-- Fold: \"short\" -->\n<p>\nlong\n</p>\n<!-- /Fold -->\n"
/// );
/// ```
///
/// # Errors
///
/// See [`render_to_string`].
pub fn to_html(node: &Node) -> Result<String> {
    render_to_string(node, &Config::html())
}
