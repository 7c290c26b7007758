//! Pure decimal scanners behind [`Seeker::take_unsigned`](super::Seeker::take_unsigned)
//! and [`Seeker::take_signed`](super::Seeker::take_signed).
//!
//! Grammar: optional leading whitespace (vertical tab and form feed included),
//! optional sign, one or more ASCII digits.
//! The outcome travels in the return value; there is no shared status.

use crate::classify::{is_numeric_pad_byte, leading_run};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberScan<T> {
    /// `None` when no digit was found or the value overflowed.
    pub value: Option<T>,
    /// Bytes the scan consumed; zero when no digit was found.
    pub consumed: usize,
}

impl<T> NumberScan<T> {
    fn rejected() -> Self {
        Self {
            value: None,
            consumed: 0,
        }
    }
}

#[inline]
fn digits_end(bytes: &[u8], from: usize) -> usize {
    from + bytes[from..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

/// Scan an unsigned 64-bit decimal. Only `+` is accepted as a sign.
pub fn scan_unsigned(s: &str) -> NumberScan<u64> {
    let bytes = s.as_bytes();
    let mut i = leading_run(s, is_numeric_pad_byte);
    if bytes.get(i) == Some(&b'+') {
        i += 1;
    }
    let end = digits_end(bytes, i);
    if end == i {
        return NumberScan::rejected();
    }
    let value = bytes[i..end]
        .iter()
        .try_fold(0u64, |acc, &b| acc.checked_mul(10)?.checked_add(u64::from(b - b'0')));
    NumberScan {
        value,
        consumed: end,
    }
}

/// Scan a signed 64-bit decimal, `i64::MIN` included.
pub fn scan_signed(s: &str) -> NumberScan<i64> {
    let bytes = s.as_bytes();
    let mut i = leading_run(s, is_numeric_pad_byte);
    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };
    let end = digits_end(bytes, i);
    if end == i {
        return NumberScan::rejected();
    }
    // Accumulate toward the sign so i64::MIN does not overflow on the way.
    let value = bytes[i..end].iter().try_fold(0i64, |acc, &b| {
        let d = i64::from(b - b'0');
        let acc = acc.checked_mul(10)?;
        if negative {
            acc.checked_sub(d)
        } else {
            acc.checked_add(d)
        }
    });
    NumberScan {
        value,
        consumed: end,
    }
}
