/// Whitespace skipped by `skip_whitespace`: space, tab, LF, CR.
#[inline]
pub fn is_whitespace_byte(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r' | b' ')
}

/// Whitespace a numeric prefix may start with: `is_whitespace_byte` plus
/// vertical tab and form feed.
#[inline]
pub fn is_numeric_pad_byte(b: u8) -> bool {
    is_whitespace_byte(b) || matches!(b, b'\x0B' | b'\x0C')
}

/// Terminators of an unquoted JSON scalar (number, boolean, null).
pub const JSON_SCALAR_END: &str = ", \r\n]}";

/// Byte length of the leading whitespace run of `s`.
#[inline]
pub fn whitespace_run(s: &str) -> usize {
    leading_run(s, is_whitespace_byte)
}

/// Byte length of the leading run of `s` whose bytes satisfy `pred`.
#[inline]
pub fn leading_run(s: &str, pred: fn(u8) -> bool) -> usize {
    s.as_bytes()
        .iter()
        .position(|&b| !pred(b))
        .unwrap_or(s.len())
}

/// Largest char boundary of `s` that is `<= idx`.
#[inline]
pub fn floor_char_boundary(s: &str, idx: usize) -> usize {
    if idx >= s.len() {
        return s.len();
    }
    let mut i = idx;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
