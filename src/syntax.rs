//! fictex Markup Reference
//!
//! This module documents the markup language as implemented by this library.
//!
//! # Overview
//!
//! fictex is a small plain-text markup for prose. It knows about paragraphs,
//! three inline styles, typographic dashes, horizontal rules and collapsible
//! preview blocks, and nothing else. Every byte sequence is a valid document:
//! malformed markup falls back to literal text instead of failing.
//!
//! # Blocks
//!
//! ## Paragraphs
//!
//! Paragraphs are separated by a blank line. Single line breaks inside a
//! paragraph are reflowed into one space:
//!
//! ```text
//! The night was
//! dark.
//!
//! A new paragraph.
//! ```
//!
//! parses as two paragraphs, `"The night was dark."` and `"A new paragraph."`.
//! Leading spaces, tabs and newlines between blocks are ignored.
//!
//! ## Horizontal rules
//!
//! A run of four or more dashes at the start of a block is a rule of its own:
//!
//! ```text
//! End of part one.
//!
//! ----
//!
//! Part two.
//! ```
//!
//! ## Preview blocks
//!
//! `<<` at the start of a block opens a preview (a fold). The rest of that
//! line is the caption; the following paragraphs and rules are the body,
//! up to a closing `>>`:
//!
//! ```text
//! <<In which our hero wakes up
//! The alarm rang.
//!
//! He ignored it.
//! >>
//! ```
//!
//! Previews do not nest: `<<` inside a body is ordinary text. A `>>` ends the
//! body paragraph it appears in, even mid-word (`<<c\nfoo>>` closes after
//! `foo`), unless it falls inside an open span. Input that ends before `>>`
//! is an [`UnterminatedPreview`](crate::Error::UnterminatedPreview) error,
//! but the caption and the body read so far are still returned.
//!
//! # Inline markup
//!
//! ## Dashes
//!
//! | Source  | Node          |
//! |---------|---------------|
//! | `-`     | literal `-`   |
//! | `--`    | `NDash`       |
//! | `---`   | `MDash`       |
//! | `----`+ | `HLine`       |
//!
//! The ladder is the same everywhere: `a----b` inside a paragraph produces a
//! rule between the two text runs.
//!
//! ## Spans
//!
//! | Marker | Style       | Example          |
//! |--------|-------------|------------------|
//! | `*`    | `Bold`      | `*loud*`         |
//! | `/`    | `Slant`     | `/quiet/`        |
//! | `_`    | `Underline` | `_underlined_`   |
//!
//! **Rules**:
//! - A marker opens a span only at the start of a word: at the start of a
//!   paragraph or after a space or tab. `a/b` is plain text.
//! - A span closes at its marker followed by a space, tab, line break or the
//!   end of input. A marker followed by anything else is literal:
//!   `/either/or/ this` is a slanted `either/or`.
//! - A doubled marker is one literal marker: `/a//b/` is a slanted `a/b`, and
//!   `a // b` is the plain text `a / b`.
//! - A span left open at the end of input still counts:
//!   `This line /ends slanted` ends in a slanted `ends slanted`.
//! - A span interrupted by a different marker, a dash, or a line break is
//!   plain text, opening marker included: `/ab*cd` is the text `/ab*cd`.
//! - Spans do not nest.
//!
//! # Rendering
//!
//! The plain-text preset writes paragraphs indented by four spaces and
//! surrounded by newlines, so that parsing its output gives back the same
//! tree:
//!
//! ```rust
//! use fictex::{parse_str, to_text};
//!
//! let doc = parse_str("He said -- /quietly/ -- no.").unwrap();
//! let text = to_text(&doc).unwrap();
//! assert_eq!(text, "\n    He said -- /quietly/ -- no.\n");
//! assert_eq!(parse_str(&text).unwrap(), doc);
//! ```
//!
//! Two constructs do not survive this cycle. A span whose payload contains
//! its own marker is written without the doubling, so the marker closes it
//! early on the next parse. A rule inside a paragraph, as in `a----b`, is
//! written on a line of its own, and the line breaks around it come back as
//! spaces:
//!
//! ```rust
//! use fictex::{parse_str, to_text, Node};
//!
//! let doc = parse_str("a----b").unwrap();
//! let text = to_text(&doc).unwrap();
//! assert_eq!(text, "\n    a\n-----\nb\n");
//! assert_eq!(
//!     parse_str(&text).unwrap(),
//!     Node::group(vec![Node::paragraph(vec![
//!         Node::text("a "),
//!         Node::HLine,
//!         Node::text(" b"),
//!     ])])
//! );
//! ```
