//! Byte reader with one byte of pushback and a short lookahead window.
//!
//! The parser only ever needs to look two bytes ahead (`<<`, `>>`) and to
//! give back the single byte it just read, so the cursor keeps a small queue
//! in front of a [`BufRead`] source instead of buffering whole documents.
//!
//! End of input is not an error: [`Cursor::next_byte`] returns `Ok(None)`,
//! and each call site decides what running out of bytes means.

use crate::{Error, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead};

pub struct Cursor<R> {
    inner: R,
    lookahead: VecDeque<u8>,
    last: Option<u8>,
}

impl<R: BufRead> Cursor<R> {
    pub fn new(inner: R) -> Self {
        Cursor {
            inner,
            lookahead: VecDeque::with_capacity(4),
            last: None,
        }
    }

    /// Reads the next byte, or `None` at end of input.
    pub fn next_byte(&mut self) -> Result<Option<u8>> {
        let byte = match self.lookahead.pop_front() {
            Some(byte) => Some(byte),
            None => self.read_source()?,
        };
        self.last = byte;
        Ok(byte)
    }

    /// Pushes back the byte returned by the previous [`next_byte`](Self::next_byte).
    ///
    /// Only one level of pushback exists; a second call before the next read
    /// does nothing.
    pub fn unread(&mut self) {
        debug_assert!(self.last.is_some(), "unread without a byte to give back");
        if let Some(byte) = self.last.take() {
            self.lookahead.push_front(byte);
        }
    }

    /// Returns up to `n` upcoming bytes without consuming them.
    ///
    /// A slice shorter than `n` means the input ends before `n` bytes.
    pub fn peek(&mut self, n: usize) -> Result<&[u8]> {
        while self.lookahead.len() < n {
            match self.read_source()? {
                Some(byte) => self.lookahead.push_back(byte),
                None => break,
            }
        }
        let available = n.min(self.lookahead.len());
        Ok(&self.lookahead.make_contiguous()[..available])
    }

    /// Returns true if the upcoming bytes are exactly `expected`.
    pub fn peek_is(&mut self, expected: &[u8]) -> Result<bool> {
        Ok(self.peek(expected.len())? == expected)
    }

    /// Reads the rest of the current line, without its `\n`.
    ///
    /// The flag is false when the input ended before a line terminator.
    pub fn read_line(&mut self) -> Result<(Vec<u8>, bool)> {
        let mut line = Vec::new();
        self.last = None;

        while let Some(byte) = self.lookahead.pop_front() {
            if byte == b'\n' {
                return Ok((line, true));
            }
            line.push(byte);
        }

        // read_until keeps refilling the source buffer until it finds the
        // terminator, so long lines arrive concatenated.
        self.inner
            .read_until(b'\n', &mut line)
            .map_err(Error::Source)?;
        let terminated = line.last() == Some(&b'\n');
        if terminated {
            line.pop();
        }
        Ok((line, terminated))
    }

    fn read_source(&mut self) -> Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => {
                    let byte = buf.first().copied();
                    if byte.is_some() {
                        self.inner.consume(1);
                    }
                    return Ok(byte);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Source(e)),
            }
        }
    }
}
