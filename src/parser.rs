//! fictex parsing.
//!
//! This module provides the [`Parser`] that turns fictex markup into a
//! [`Node`] tree.
//!
//! ## Overview
//!
//! - **Single pass**: every byte is read once, with at most one byte of
//!   pushback and two bytes of lookahead; nothing is ever re-scanned
//! - **Block scope**: paragraphs, `<<caption ... >>` preview blocks and
//!   `----` rules
//! - **Inline scope**: plain runs, `*bold*`, `/slant/`, `_underline_` spans
//!   and the dash ladder (`-`, `--`, `---`)
//! - **Recovery**: malformed spans degrade to literal text; an unterminated
//!   preview is reported but its content is kept
//!
//! ## Usage
//!
//! Most callers should use [`parse_str`](crate::parse_str) and friends:
//!
//! ```rust
//! use fictex::{parse_str, Node, Span};
//!
//! let doc = parse_str("It was /very/ dark.").unwrap();
//! assert_eq!(
//!     doc,
//!     Node::group(vec![Node::paragraph(vec![
//!         Node::text("It was "),
//!         Span::Slant.node("very"),
//!         Node::text(" dark."),
//!     ])])
//! );
//! ```

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::node::{Node, Span};
use crate::{Error, Result};
use std::io::BufRead;

/// Where a paragraph is being scanned.
///
/// Inside a preview body a `>>` ends the paragraph so the block can close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Document,
    PreviewBody,
}

/// The fictex parser.
///
/// Created via [`Parser::new`] over any [`BufRead`] source; consumed by
/// [`Parser::parse_document`].
pub struct Parser<R> {
    cursor: Cursor<R>,
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R) -> Self {
        Parser {
            cursor: Cursor::new(reader),
        }
    }

    /// Parses the whole input into a `Group` root.
    ///
    /// On failure the error owns the partially built root.
    pub fn parse_document(mut self) -> std::result::Result<Node, ParseError> {
        let mut blocks = Vec::new();
        match self.document(&mut blocks) {
            Ok(()) => Ok(Node::Group(blocks)),
            Err(error) => Err(ParseError::new(error, Node::Group(blocks))),
        }
    }

    fn document(&mut self, out: &mut Vec<Node>) -> Result<()> {
        while let Some(c) = self.cursor.next_byte()? {
            match c {
                b' ' | b'\t' | b'\n' => continue,
                b'<' if self.cursor.peek_is(b"<")? => {
                    self.cursor.next_byte()?;
                    self.preview(out)?;
                }
                _ => self.block(c, Scope::Document, out)?,
            }
        }
        Ok(())
    }

    /// Scans one block starting at `first`, which has already been read.
    ///
    /// A leading run of four or more dashes is a rule and is appended as a
    /// block of its own; any other leading dash run seeds a paragraph.
    fn block(&mut self, first: u8, scope: Scope, out: &mut Vec<Node>) -> Result<()> {
        let mut inlines = Vec::new();
        if first == b'-' {
            match self.dash_run()? {
                Node::HLine => {
                    out.push(Node::HLine);
                    return Ok(());
                }
                node => inlines.push(node),
            }
        } else {
            self.cursor.unread();
        }

        let word_start = inlines.is_empty();
        let result = self.paragraph(&mut inlines, word_start, scope);
        if !inlines.is_empty() {
            out.push(Node::Paragraph(inlines));
        }
        result
    }

    /// Scans a preview block; the opening `<<` has already been consumed.
    ///
    /// The preview node is appended even when the input ends before `>>`.
    fn preview(&mut self, out: &mut Vec<Node>) -> Result<()> {
        let (caption, terminated) = self.cursor.read_line()?;
        let mut body = Vec::new();
        let result = if terminated {
            self.preview_body(&mut body)
        } else {
            Err(Error::UnterminatedPreview)
        };
        out.push(Node::Preview {
            caption,
            children: body,
        });
        result
    }

    fn preview_body(&mut self, out: &mut Vec<Node>) -> Result<()> {
        loop {
            if self.cursor.peek_is(b">>")? {
                self.cursor.next_byte()?;
                self.cursor.next_byte()?;
                return Ok(());
            }
            match self.cursor.next_byte()? {
                None => return Err(Error::UnterminatedPreview),
                Some(b' ' | b'\t' | b'\n') => continue,
                Some(c) => self.block(c, Scope::PreviewBody, out)?,
            }
        }
    }

    /// Appends inline nodes to `inlines` until the paragraph ends.
    ///
    /// The paragraph ends at a blank line, at end of input, or, inside a
    /// preview body, in front of `>>`. `word_start` says whether the next
    /// byte begins a word, which is what lets a marker open a span.
    pub fn paragraph(
        &mut self,
        inlines: &mut Vec<Node>,
        mut word_start: bool,
        scope: Scope,
    ) -> Result<()> {
        loop {
            if scope == Scope::PreviewBody && self.cursor.peek_is(b">>")? {
                break;
            }
            let Some(c) = self.cursor.next_byte()? else {
                break;
            };
            let node = match c {
                b'\n' => {
                    if self.at_paragraph_break(scope)? {
                        break;
                    }
                    Node::Text(vec![b' '])
                }
                b'-' => self.dash_run()?,
                _ => match Span::from_marker(c) {
                    Some(span) if word_start => self.span(span)?,
                    _ => {
                        self.cursor.unread();
                        self.plain_run(scope)?
                    }
                },
            };
            word_start = push_inline(inlines, node);
        }
        Ok(())
    }

    /// Resolves a dash run; the first `-` has already been consumed.
    pub fn dash_run(&mut self) -> Result<Node> {
        let mut count = 1;
        while let Some(c) = self.cursor.next_byte()? {
            if c != b'-' {
                self.cursor.unread();
                break;
            }
            count += 1;
        }
        Ok(match count {
            1 => Node::Text(vec![b'-']),
            2 => Node::NDash,
            3 => Node::MDash,
            _ => Node::HLine,
        })
    }

    /// Scans a formatted span; the opening marker has already been consumed.
    ///
    /// The span closes at its marker followed by whitespace or end of input,
    /// and end of input also closes a span left open. A doubled marker is one
    /// literal marker. Anything else that interrupts the span (another
    /// marker, a dash, a line break) turns it back into literal text,
    /// opening marker included; the interrupting byte is left for the caller.
    pub fn span(&mut self, span: Span) -> Result<Node> {
        let marker = span.marker();
        let mut text = Vec::new();

        while let Some(c) = self.cursor.next_byte()? {
            if c == marker {
                let next = self.cursor.peek(1)?.first().copied();
                match next {
                    None | Some(b' ' | b'\t' | b'\n') => return Ok(close_span(span, text)),
                    Some(b) if b == marker => {
                        self.cursor.next_byte()?;
                        text.push(marker);
                    }
                    Some(_) => text.push(marker),
                }
                continue;
            }
            match c {
                b'-' | b'\n' | b'/' | b'*' | b'_' => {
                    self.cursor.unread();
                    let mut literal = Vec::with_capacity(text.len() + 1);
                    literal.push(marker);
                    literal.extend_from_slice(&text);
                    return Ok(Node::Text(literal));
                }
                _ => text.push(c),
            }
        }
        Ok(close_span(span, text))
    }

    /// Scans literal text up to and including the next space or tab.
    ///
    /// A dash is left for the caller, and so is a `>>` inside a preview body.
    /// A line break that continues the paragraph becomes a single space; one
    /// that ends it is left unread.
    pub fn plain_run(&mut self, scope: Scope) -> Result<Node> {
        let mut text = Vec::new();
        while let Some(c) = self.cursor.next_byte()? {
            match c {
                b'-' => {
                    self.cursor.unread();
                    break;
                }
                b'\n' => {
                    if self.at_paragraph_break(scope)? {
                        self.cursor.unread();
                    } else {
                        text.push(b' ');
                    }
                    break;
                }
                b' ' | b'\t' => {
                    text.push(c);
                    break;
                }
                b'>' if scope == Scope::PreviewBody && self.cursor.peek_is(b">")? => {
                    self.cursor.unread();
                    break;
                }
                _ => text.push(c),
            }
        }
        Ok(Node::Text(text))
    }

    /// Called just after a `\n`: does the paragraph end here?
    fn at_paragraph_break(&mut self, scope: Scope) -> Result<bool> {
        let ahead = self.cursor.peek(2)?;
        Ok(match ahead.first() {
            None | Some(b'\n') => true,
            Some(_) => scope == Scope::PreviewBody && ahead == b">>",
        })
    }
}

fn close_span(span: Span, text: Vec<u8>) -> Node {
    if text.is_empty() {
        Node::Text(vec![span.marker()])
    } else {
        span.node(text)
    }
}

fn ends_with_space(text: &[u8]) -> bool {
    matches!(text.last(), Some(b' ' | b'\t'))
}

/// Appends an inline node, merging adjacent text runs.
///
/// Returns whether the next byte starts a word.
fn push_inline(inlines: &mut Vec<Node>, node: Node) -> bool {
    match node {
        Node::Text(text) => {
            let word_start = ends_with_space(&text);
            match inlines.last_mut() {
                Some(Node::Text(prev)) => prev.extend_from_slice(&text),
                _ if text.is_empty() => {}
                _ => inlines.push(Node::Text(text)),
            }
            word_start
        }
        node => {
            inlines.push(node);
            false
        }
    }
}
