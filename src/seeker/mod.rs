//! The [`Seeker`] cursor: a copyable window over borrowed text.
//!
//! Every "consuming" operation narrows the window; the text underneath is never
//! copied or modified. Extractions hand back a derived `Seeker` that shares the
//! parent's origin, so [`Seeker::offset`] always reports positions relative to
//! the buffer the root cursor was built from.

use std::fmt;
use std::io::{self, Write};

use memchr::memmem;

use crate::classify::{floor_char_boundary, whitespace_run};

mod extract;
mod markup;
pub mod number;

/// Where an operation leaves the invoking cursor after a successful match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MoveMode {
    /// Leave the cursor untouched.
    #[default]
    Keep,
    /// Narrow the cursor to start at the match.
    Before,
    /// Narrow the cursor to start just past the match.
    After,
}

/// A byte count. Never confused with a single delimiter `char`.
///
/// Counts landing inside a multi-byte code point are rounded down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Len(pub usize);

/// A set of terminator characters, as opposed to a literal to match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnyOf<'s>(pub &'s str);

/// Zero-copy cursor over `&'a str`.
///
/// Copying is free and produces an independent cursor. A failed extraction
/// yields `None`; [`Seeker::empty`] (also `Default`) is the empty sentinel for
/// callers that prefer not to branch.
#[derive(Clone, Copy, Default)]
pub struct Seeker<'a> {
    src: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Seeker<'a> {
    /// Root cursor over the whole of `src`.
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            start: 0,
            end: src.len(),
        }
    }

    pub const fn empty() -> Self {
        Self {
            src: "",
            start: 0,
            end: 0,
        }
    }

    /// Cursor over `from..to` of the current view, same origin.
    #[inline]
    pub(crate) fn derive(&self, from: usize, to: usize) -> Seeker<'a> {
        debug_assert!(from <= to && self.start + to <= self.end);
        Seeker {
            src: self.src,
            start: self.start + from,
            end: self.start + to,
        }
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.start = (self.start + n).min(self.end);
    }

    /// Apply `mode` given the match start (`before`) and end (`after`), both relative
    /// to the current view.
    #[inline]
    pub(crate) fn reposition(&mut self, mode: MoveMode, before: usize, after: usize) {
        match mode {
            MoveMode::Keep => {}
            MoveMode::Before => self.advance(before),
            MoveMode::After => self.advance(after),
        }
    }

    #[inline]
    pub(crate) fn find(&self, needle: &str) -> Option<usize> {
        memmem::find(self.as_str().as_bytes(), needle.as_bytes())
    }

    /// The unconsumed remainder, borrowed from the original buffer.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        &self.src[self.start..self.end]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Bytes between the origin and the start of the view.
    #[inline]
    pub fn offset(&self) -> usize {
        self.start
    }

    /// Same as [`Seeker::offset`].
    #[inline]
    pub fn original_position(&self) -> usize {
        self.offset()
    }

    /// Offset one past the last byte of the view.
    #[inline]
    pub fn end_offset(&self) -> usize {
        self.end
    }

    /// Write the view to `w` without allocating.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(self.as_str().as_bytes())
    }

    /// Consume `literal` if the view starts with it.
    pub fn expect(&mut self, literal: &str) -> bool {
        if self.starts_with(literal) {
            self.advance(literal.len());
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn starts_with(&self, literal: &str) -> bool {
        self.as_str().starts_with(literal)
    }

    /// Find the first `literal` and reposition per `mode`. The view is unchanged
    /// when `literal` does not occur.
    pub fn seek_to(&mut self, literal: &str, mode: MoveMode) -> bool {
        match self.find(literal) {
            Some(at) => {
                self.reposition(mode, at, at + literal.len());
                true
            }
            None => false,
        }
    }

    /// Drop up to `n` bytes from the front of the view.
    pub fn skip(&mut self, n: Len) {
        let n = floor_char_boundary(self.as_str(), n.0);
        self.advance(n);
    }

    /// Consume leading spaces, tabs, newlines and carriage returns.
    pub fn skip_whitespace(&mut self) {
        let n = whitespace_run(self.as_str());
        self.advance(n);
    }

    /// Parse a leading unsigned decimal and advance past what the scan consumed.
    ///
    /// The cursor moves even when the value overflows; it does not move when no
    /// digit is present.
    pub fn take_unsigned(&mut self) -> Option<u64> {
        let scan = number::scan_unsigned(self.as_str());
        self.advance(scan.consumed);
        scan.value
    }

    pub fn take_unsigned_or(&mut self, default: u64) -> u64 {
        self.take_unsigned().unwrap_or(default)
    }

    /// Signed counterpart of [`Seeker::take_unsigned`]; accepts `+` or `-`.
    pub fn take_signed(&mut self) -> Option<i64> {
        let scan = number::scan_signed(self.as_str());
        self.advance(scan.consumed);
        scan.value
    }

    pub fn take_signed_or(&mut self, default: i64) -> i64 {
        self.take_signed().unwrap_or(default)
    }
}

impl<'a> From<&'a str> for Seeker<'a> {
    fn from(src: &'a str) -> Self {
        Seeker::new(src)
    }
}

impl AsRef<str> for Seeker<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Seeker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Seeker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seeker")
            .field("offset", &self.start)
            .field("view", &self.as_str())
            .finish()
    }
}

impl PartialEq<str> for Seeker<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Seeker<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
