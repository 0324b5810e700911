//! Error types for parsing and rendering fictex documents.
//!
//! ## Error Categories
//!
//! - **Unterminated constructs**: a `<<` preview block still open at end of input
//! - **Source errors**: the reader backing the parser failed
//! - **Sink errors**: the writer receiving rendered output failed
//!
//! Parsing never throws away work: a failed parse returns a [`ParseError`]
//! that still owns the tree built up to the failure.
//!
//! ## Examples
//!
//! ```rust
//! use fictex::{parse_str, Error};
//!
//! let err = parse_str("<<caption\nbody").unwrap_err();
//! assert!(matches!(err.error(), Error::UnterminatedPreview));
//! assert_eq!(err.partial().children().len(), 1);
//! ```

use crate::Node;
use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Everything that can go wrong while parsing or rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// End of input was reached inside an open `<<` block.
    #[error("unterminated preview block: end of input before closing '>>'")]
    UnterminatedPreview,

    /// The reader feeding the parser failed.
    #[error("failed to read source: {0}")]
    Source(#[source] io::Error),

    /// The writer receiving rendered output failed.
    #[error("failed to write output: {0}")]
    Sink(#[source] io::Error),

    /// Rendered output was requested as a `String` but is not UTF-8.
    #[error("rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

impl Error {
    /// Returns true for errors caused by a malformed document rather than I/O.
    pub fn is_unterminated(&self) -> bool {
        matches!(self, Error::UnterminatedPreview)
    }
}

/// A failed parse, together with the tree recovered before the failure.
///
/// The partial tree is always a `Group` document root and is safe to render.
///
/// # Examples
///
/// ```rust
/// use fictex::{parse_str, to_text};
///
/// let err = parse_str("<<short\nlong").unwrap_err();
/// let (error, tree) = err.into_parts();
/// assert!(error.is_unterminated());
/// assert_eq!(to_text(&tree).unwrap(), "\n<<short\n\n    long\n>>\n");
/// ```
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ParseError {
    error: Error,
    tree: Node,
}

impl ParseError {
    pub(crate) fn new(error: Error, tree: Node) -> Self {
        ParseError { error, tree }
    }

    /// The underlying error.
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// The best-effort tree built before the error.
    pub fn partial(&self) -> &Node {
        &self.tree
    }

    pub fn into_partial(self) -> Node {
        self.tree
    }

    pub fn into_parts(self) -> (Error, Node) {
        (self.error, self.tree)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        err.error
    }
}

pub type Result<T> = std::result::Result<T, Error>;
