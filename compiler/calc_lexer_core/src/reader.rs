//! Bounds-checked cursor over the characters of a string.
//!
//! Every read either returns exactly what was asked for or fails with
//! [`ReaderError::OutOfRange`] without moving the cursor. The cursor may
//! sit one past the last character (`position() == len()`), which is the
//! end-of-input state that `next()`/`read()` reach by consuming everything.

use thiserror::Error;

/// Contract violation reported by [`StringReader`].
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ReaderError {
    /// A read, peek, or reposition reached past the end of input.
    #[error("position {position} is out of range for input of length {length}")]
    OutOfRange { position: usize, length: usize },
    /// An argument did not meet the operation's contract.
    #[error("invalid argument {argument:?}: expected exactly one character")]
    InvalidArgument { argument: String },
}

/// Cursor over the characters of an input string.
#[derive(Clone, Debug)]
pub struct StringReader {
    chars: Vec<char>,
    pos: usize,
}

impl StringReader {
    /// Create a reader positioned at the first character.
    pub fn new(text: &str) -> Self {
        StringReader {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    /// Total number of characters in the input.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Current character offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor to `position`.
    ///
    /// Accepts `0..=len()`. Setting exactly `len()` places the cursor at end
    /// of input, the same state reached by consuming every character.
    pub fn set_position(&mut self, position: usize) -> Result<(), ReaderError> {
        if position > self.chars.len() {
            return Err(self.out_of_range(position));
        }
        self.pos = position;
        Ok(())
    }

    /// Number of characters left before end of input.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.chars.len() - self.pos
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Return the character at the cursor and advance by one.
    #[allow(
        clippy::should_implement_trait,
        reason = "fallible read, not an iterator: end of input is an error"
    )]
    pub fn next(&mut self) -> Result<char, ReaderError> {
        let c = self.peek()?;
        self.pos += 1;
        Ok(c)
    }

    /// Return the character at the cursor without advancing.
    pub fn peek(&self) -> Result<char, ReaderError> {
        self.chars
            .get(self.pos)
            .copied()
            .ok_or_else(|| self.out_of_range(self.pos + 1))
    }

    /// Return the next `n` characters without advancing.
    pub fn peek_n(&self, n: usize) -> Result<&[char], ReaderError> {
        let end = self.checked_end(n)?;
        Ok(&self.chars[self.pos..end])
    }

    /// Return and consume the next `n` characters.
    pub fn read(&mut self, n: usize) -> Result<&[char], ReaderError> {
        let start = self.pos;
        let end = self.checked_end(n)?;
        self.pos = end;
        Ok(&self.chars[start..end])
    }

    /// Consume characters up to and including the first `delimiter`.
    ///
    /// If the delimiter never occurs, consumes to end of input. `delimiter`
    /// must be exactly one character; anything else is rejected before the
    /// cursor moves.
    pub fn read_until(&mut self, delimiter: &str) -> Result<&[char], ReaderError> {
        let mut chars = delimiter.chars();
        let (Some(target), None) = (chars.next(), chars.next()) else {
            return Err(ReaderError::InvalidArgument {
                argument: delimiter.to_owned(),
            });
        };

        let start = self.pos;
        let end = self.chars[start..]
            .iter()
            .position(|&c| c == target)
            .map_or(self.chars.len(), |offset| start + offset + 1);
        self.pos = end;
        Ok(&self.chars[start..end])
    }

    /// Advance past consecutive space characters.
    ///
    /// Returns the number of spaces skipped. Only `' '` counts; tabs and
    /// newlines are left for the lexer to reject.
    pub fn skip_whitespace(&mut self) -> usize {
        let skipped = self.chars[self.pos..]
            .iter()
            .take_while(|&&c| c == ' ')
            .count();
        self.pos += skipped;
        skipped
    }

    /// Collect the characters in `start..end` into a `String`.
    ///
    /// Out-of-order or out-of-bounds ranges are contract violations.
    pub fn slice(&self, start: usize, end: usize) -> Result<String, ReaderError> {
        if end > self.chars.len() {
            return Err(self.out_of_range(end));
        }
        if start > end {
            return Err(self.out_of_range(start));
        }
        Ok(self.chars[start..end].iter().collect())
    }

    fn checked_end(&self, n: usize) -> Result<usize, ReaderError> {
        let end = self.pos.saturating_add(n);
        if end > self.chars.len() {
            return Err(self.out_of_range(end));
        }
        Ok(end)
    }

    #[cold]
    fn out_of_range(&self, position: usize) -> ReaderError {
        ReaderError::OutOfRange {
            position,
            length: self.chars.len(),
        }
    }
}
