//! fictex rendering.
//!
//! This module provides the [`Renderer`] that walks a [`Node`] tree and
//! writes it out under a [`Config`].
//!
//! ## Overview
//!
//! - `Group` is transparent: only its children are written
//! - `Paragraph`, `Preview` and the three span styles are wrapped in the
//!   configured brackets
//! - `NDash`, `MDash` and `HLine` are replaced by the configured strings,
//!   which are never escaped
//! - Every literal payload goes through the configured [`Escape`](crate::Escape)
//!
//! Rendering never modifies the tree, so one tree can be rendered any number
//! of times, from any number of threads.
//!
//! ## Direct Renderer Usage
//!
//! ```rust
//! use fictex::{parse_str, Config, Renderer};
//!
//! let doc = parse_str("Fish & chips").unwrap();
//! let config = Config::html();
//!
//! let mut renderer = Renderer::new(Vec::new(), &config);
//! renderer.render(&doc).unwrap();
//! assert_eq!(renderer.into_inner(), b"<p>\nFish &amp; chips\n</p>\n");
//! ```

use crate::config::{Brackets, CAPTION_PLACEHOLDER};
use crate::{Config, Error, Node, Result};
use std::borrow::Cow;
use std::io::Write;

/// Writes a tree to `W` according to a [`Config`].
pub struct Renderer<'c, W> {
    out: W,
    config: &'c Config,
}

impl<'c, W: Write> Renderer<'c, W> {
    pub fn new(out: W, config: &'c Config) -> Self {
        Renderer { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders `node` and everything below it.
    ///
    /// The first failed write aborts the walk; whatever was written before
    /// it stays written.
    pub fn render(&mut self, node: &Node) -> Result<()> {
        let config = self.config;
        match node {
            Node::Group(children) => self.render_all(children),
            Node::Text(text) => self.write_escaped(text),
            Node::Bold(text) => self.write_wrapped(&config.bold, text),
            Node::Slant(text) => self.write_wrapped(&config.slant, text),
            Node::Underline(text) => self.write_wrapped(&config.underline, text),
            Node::Paragraph(children) => {
                self.write(config.paragraph.open().as_bytes())?;
                self.render_all(children)?;
                self.write(config.paragraph.close().as_bytes())
            }
            Node::NDash => self.write(config.ndash.as_bytes()),
            Node::MDash => self.write(config.mdash.as_bytes()),
            Node::HLine => self.write(config.hline.as_bytes()),
            Node::Preview { caption, children } => {
                self.write_preview_open(caption)?;
                self.render_all(children)?;
                self.write(config.preview.close().as_bytes())
            }
        }
    }

    fn render_all(&mut self, nodes: &[Node]) -> Result<()> {
        for node in nodes {
            self.render(node)?;
        }
        Ok(())
    }

    fn write_wrapped(&mut self, brackets: &Brackets, text: &[u8]) -> Result<()> {
        self.write(brackets.open().as_bytes())?;
        self.write_escaped(text)?;
        self.write(brackets.close().as_bytes())
    }

    fn write_preview_open(&mut self, caption: &[u8]) -> Result<()> {
        let template = self.config.preview.open();
        match template.split_once(CAPTION_PLACEHOLDER) {
            Some((before, after)) => {
                self.write(before.as_bytes())?;
                self.write_escaped(caption)?;
                self.write(after.as_bytes())
            }
            None => self.write(template.as_bytes()),
        }
    }

    fn write_escaped(&mut self, text: &[u8]) -> Result<()> {
        let escaped = self.config.escape.apply(text);
        self.write(&escaped)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.out.write_all(bytes).map_err(Error::Sink)
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` as HTML entities.
///
/// Borrows the input when nothing needs escaping.
///
/// # Examples
///
/// ```rust
/// use fictex::render::escape_html;
///
/// assert_eq!(&*escape_html(b"a<b & 'c'"), b"a&lt;b &amp; &#39;c&#39;");
/// ```
pub fn escape_html(text: &[u8]) -> Cow<'_, [u8]> {
    fn entity(byte: u8) -> Option<&'static str> {
        match byte {
            b'&' => Some("&amp;"),
            b'<' => Some("&lt;"),
            b'>' => Some("&gt;"),
            b'"' => Some("&#34;"),
            b'\'' => Some("&#39;"),
            _ => None,
        }
    }

    let Some(first) = text.iter().position(|&b| entity(b).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut escaped = Vec::with_capacity(text.len() + 16);
    escaped.extend_from_slice(&text[..first]);
    for &byte in &text[first..] {
        match entity(byte) {
            Some(replacement) => escaped.extend_from_slice(replacement.as_bytes()),
            None => escaped.push(byte),
        }
    }
    Cow::Owned(escaped)
}
