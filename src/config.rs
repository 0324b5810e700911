//! Renderer configuration.
//!
//! A [`Config`] says what to write around and in place of each kind of
//! node. Two presets cover the common cases:
//!
//! - [`Config::text`]: normalized fictex markup, no escaping
//! - [`Config::html`]: HTML tags, HTML-escaped text, comment fold markers
//!
//! ## Examples
//!
//! ```rust
//! use fictex::{Config, Escape};
//!
//! // Markdown-flavoured output built on the text preset
//! let config = Config::text()
//!     .with_bold("**", "**")
//!     .with_slant("_", "_")
//!     .with_underline("", "")
//!     .with_paragraph("", "\n\n");
//!
//! // HTML with typographic dashes spelled out
//! let config = Config::html().with_ndash("&ndash;").with_mdash("&mdash;");
//! assert!(matches!(config.escape, Escape::Html));
//! ```
//!
//! Configs are plain values and derive serde, so they can be loaded from
//! any serde format:
//!
//! ```rust
//! use fictex::Config;
//!
//! let json = serde_json::to_string(&Config::html()).unwrap();
//! let back: Config = serde_json::from_str(&json).unwrap();
//! assert_eq!(back.bold.open(), "<b>");
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Placeholder replaced by the escaped caption in the preview open bracket.
pub const CAPTION_PLACEHOLDER: &str = "{caption}";

/// Strings written before and after a node's content.
///
/// Serialized as a two-element array: `["<b>", "</b>"]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brackets(pub String, pub String);

impl Brackets {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Brackets(open.into(), close.into())
    }

    #[must_use]
    pub fn open(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn close(&self) -> &str {
        &self.1
    }
}

/// A custom escaping function: returns the payload unchanged or a rewritten copy.
pub type EscapeFn = for<'a> fn(&'a [u8]) -> Cow<'a, [u8]>;

/// How literal payloads (text, span content, captions) are escaped.
///
/// Dash and rule substitutions are never escaped.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Escape {
    /// Write payloads as they are.
    #[default]
    None,
    /// Escape `& < > " '` as HTML entities.
    Html,
    /// Use a caller-supplied function. Not serializable.
    #[serde(skip)]
    Custom(EscapeFn),
}

impl Escape {
    pub fn apply<'a>(&self, text: &'a [u8]) -> Cow<'a, [u8]> {
        match self {
            Escape::None => Cow::Borrowed(text),
            Escape::Html => crate::render::escape_html(text),
            Escape::Custom(escape) => escape(text),
        }
    }
}

impl fmt::Debug for Escape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Escape::None => f.write_str("None"),
            Escape::Html => f.write_str("Html"),
            Escape::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Configuration for the [`Renderer`](crate::Renderer).
///
/// The preview open bracket is a template: [`CAPTION_PLACEHOLDER`] is
/// replaced by the escaped caption.
///
/// # Examples
///
/// ```rust
/// use fictex::Config;
///
/// let config = Config::text();
/// assert_eq!(config.ndash, "--");
/// assert_eq!(config.paragraph.open(), "\n    ");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub bold: Brackets,
    pub slant: Brackets,
    pub underline: Brackets,
    pub paragraph: Brackets,
    pub preview: Brackets,

    pub ndash: String,
    pub mdash: String,
    pub hline: String,

    #[serde(default)]
    pub escape: Escape,
}

impl Default for Config {
    fn default() -> Self {
        Config::text()
    }
}

impl Config {
    /// Normalized fictex markup.
    ///
    /// Rendering a parsed document with this config and parsing the result
    /// again yields the same tree, as long as no span needs a doubled marker
    /// and no rule sits inside a paragraph. An inline rule is written on a
    /// line of its own, so the reparsed paragraph gains a space on each side
    /// of it.
    #[must_use]
    pub fn text() -> Self {
        Config {
            bold: Brackets::new("*", "*"),
            slant: Brackets::new("/", "/"),
            underline: Brackets::new("_", "_"),
            paragraph: Brackets::new("\n    ", "\n"),
            preview: Brackets::new("\n<<{caption}\n", ">>\n"),
            ndash: "--".to_string(),
            mdash: "---".to_string(),
            hline: "\n-----\n".to_string(),
            escape: Escape::None,
        }
    }

    /// HTML output for the live preview.
    #[must_use]
    pub fn html() -> Self {
        Config {
            bold: Brackets::new("<b>", "</b>"),
            slant: Brackets::new("<i>", "</i>"),
            underline: Brackets::new("<u>", "</u>"),
            paragraph: Brackets::new("<p>\n", "\n</p>\n"),
            preview: Brackets::new("<!-- Fold: \"{caption}\" -->\n", "<!-- /Fold -->\n"),
            ndash: "&#8211;".to_string(),
            mdash: "&#8212;".to_string(),
            hline: "<hr />\n".to_string(),
            escape: Escape::Html,
        }
    }

    #[must_use]
    pub fn with_bold(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.bold = Brackets::new(open, close);
        self
    }

    #[must_use]
    pub fn with_slant(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.slant = Brackets::new(open, close);
        self
    }

    #[must_use]
    pub fn with_underline(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.underline = Brackets::new(open, close);
        self
    }

    #[must_use]
    pub fn with_paragraph(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.paragraph = Brackets::new(open, close);
        self
    }

    /// Sets the preview brackets; `open` may contain [`CAPTION_PLACEHOLDER`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fictex::{parse_str, render_to_string, Config};
    ///
    /// let config = Config::html().with_preview("<details><summary>{caption}</summary>\n", "</details>\n");
    /// let doc = parse_str("<<Chapter 1\nIt begins.\n>>").unwrap();
    /// assert_eq!(
    ///     render_to_string(&doc, &config).unwrap(),
    ///     "<details><summary>Chapter 1</summary>\n<p>\nIt begins.\n</p>\n</details>\n"
    /// );
    /// ```
    #[must_use]
    pub fn with_preview(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.preview = Brackets::new(open, close);
        self
    }

    #[must_use]
    pub fn with_ndash(mut self, ndash: impl Into<String>) -> Self {
        self.ndash = ndash.into();
        self
    }

    #[must_use]
    pub fn with_mdash(mut self, mdash: impl Into<String>) -> Self {
        self.mdash = mdash.into();
        self
    }

    #[must_use]
    pub fn with_hline(mut self, hline: impl Into<String>) -> Self {
        self.hline = hline.into();
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: Escape) -> Self {
        self.escape = escape;
        self
    }
}
