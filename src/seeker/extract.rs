use memchr::{memchr, memchr2, memchr3, memmem};

use super::{AnyOf, Len, MoveMode, Seeker};
use crate::classify::floor_char_boundary;

/// Position and byte width of the first char of `s` found in `set`.
fn find_any_of(s: &str, set: &str) -> Option<(usize, usize)> {
    if set.is_ascii() {
        // ASCII bytes never occur inside a multi-byte sequence
        let bytes = s.as_bytes();
        let at = match set.as_bytes() {
            [] => None,
            [a] => memchr(*a, bytes),
            [a, b] => memchr2(*a, *b, bytes),
            [a, b, c] => memchr3(*a, *b, *c, bytes),
            many => bytes.iter().position(|b| many.contains(b)),
        }?;
        return Some((at, 1));
    }
    s.char_indices()
        .find(|(_, c)| set.contains(*c))
        .map(|(i, c)| (i, c.len_utf8()))
}

/// `s` starts with `open`. Returns the end (exclusive) of the `close` that brings
/// the depth back to zero.
fn balanced_end(s: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 1usize;
    let first = open.len_utf8();
    if open.is_ascii() && close.is_ascii() {
        let (o, c) = (open as u8, close as u8);
        let bytes = s.as_bytes();
        let mut i = first;
        while let Some(p) = memchr2(o, c, &bytes[i..]) {
            let at = i + p;
            i = at + 1;
            if bytes[at] == o {
                depth += 1;
            } else {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
        }
        return None;
    }
    for (i, ch) in s[first..].char_indices() {
        if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                return Some(first + i + ch.len_utf8());
            }
        }
    }
    None
}

impl<'a> Seeker<'a> {
    /// Text strictly between the first `from` and the first `to` after it.
    ///
    /// `Before` moves to the start of `from`, `After` past the end of `to`.
    pub fn extract_between(
        &mut self,
        from: &str,
        to: &str,
        mode: MoveMode,
    ) -> Option<Seeker<'a>> {
        let bytes = self.as_str().as_bytes();
        let at = memmem::find(bytes, from.as_bytes())?;
        let body = at + from.len();
        let body_end = body + memmem::find(&bytes[body..], to.as_bytes())?;
        let out = self.derive(body, body_end);
        self.reposition(mode, at, body_end + to.len());
        Some(out)
    }

    /// Everything up to (excluding) the first `to`.
    ///
    /// `Before` moves onto `to`, `After` past it.
    pub fn extract_until(&mut self, to: &str, mode: MoveMode) -> Option<Seeker<'a>> {
        let end = self.find(to)?;
        let out = self.derive(0, end);
        self.reposition(mode, end, end + to.len());
        Some(out)
    }

    /// Everything up to the first char in `set`. Only `After` moves the cursor,
    /// past the terminator; `Before` is a no-op.
    pub fn extract_until_any_of(
        &mut self,
        set: AnyOf<'_>,
        mode: MoveMode,
    ) -> Option<Seeker<'a>> {
        let (end, width) = find_any_of(self.as_str(), set.0)?;
        let out = self.derive(0, end);
        if mode == MoveMode::After {
            self.advance(end + width);
        }
        Some(out)
    }

    /// From the first `open` through its matching `close`, nested pairs included.
    ///
    /// Fails on unterminated nesting. `open == close` never closes.
    pub fn extract_balanced(
        &mut self,
        open: char,
        close: char,
        mode: MoveMode,
    ) -> Option<Seeker<'a>> {
        let view = self.as_str();
        let start = view.find(open)?;
        let end = start + balanced_end(&view[start..], open, close)?;
        let out = self.derive(start, end);
        self.reposition(mode, start, end);
        Some(out)
    }

    /// The next `len` bytes, truncated to what remains. Never fails.
    pub fn extract_fixed(&mut self, len: Len, mode: MoveMode) -> Seeker<'a> {
        let n = floor_char_boundary(self.as_str(), len.0);
        let out = self.derive(0, n);
        self.reposition(mode, 0, n);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_of_ascii_paths() {
        assert_eq!(find_any_of("abc,def", ","), Some((3, 1)));
        assert_eq!(find_any_of("abc]def", ",]"), Some((3, 1)));
        assert_eq!(find_any_of("ab}c", ",]}"), Some((2, 1)));
        assert_eq!(find_any_of("ab c", ", \r\n]}"), Some((2, 1)));
        assert_eq!(find_any_of("abc", ""), None);
    }

    #[test]
    fn any_of_non_ascii_set() {
        assert_eq!(find_any_of("a→b", "→"), Some((1, 3)));
        assert_eq!(find_any_of("aé;", ";é"), Some((1, 2)));
    }

    #[test]
    fn balanced_end_both_paths() {
        assert_eq!(balanced_end("{a{b}c}d", '{', '}'), Some(7));
        assert_eq!(balanced_end("{a{b}c", '{', '}'), None);
        assert_eq!(balanced_end("«a«b»»x", '«', '»'), Some(10));
        assert_eq!(balanced_end("|a|", '|', '|'), None);
    }
}
