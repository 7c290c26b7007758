use crate::error::{QueryError, QueryErrorKind};
use crate::options::OutputFormat;
use crate::query::Match;
use std::io::Write;

pub type QResult<T> = Result<T, QueryError>;

/// Sink for rendered query output. `emit_matches` writes through it, so the same
/// rendering serves both in-memory strings and buffered writers.
pub trait Emitter {
    fn emit_str(&mut self, s: &str) -> QResult<()>;
    fn emit_char(&mut self, c: char) -> QResult<()> {
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        self.emit_str(s)
    }
}

/// Appends everything to a caller-owned `String`.
pub struct StringEmitter<'a> {
    out: &'a mut String,
}

impl<'a> StringEmitter<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Self { out }
    }
}

impl<'a> Emitter for StringEmitter<'a> {
    fn emit_str(&mut self, s: &str) -> QResult<()> {
        self.out.push_str(s);
        Ok(())
    }
}

/// Buffers output and hands it to `w` whenever `cap` bytes have accumulated.
/// Call `flush_all` when done.
pub struct WriterEmitter<'a, W: Write + ?Sized> {
    w: &'a mut W,
    buf: Vec<u8>,
    cap: usize,
}

impl<'a, W: Write + ?Sized> WriterEmitter<'a, W> {
    pub fn with_capacity(w: &'a mut W, cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            w,
            buf: Vec::with_capacity(cap),
            cap,
        }
    }

    pub fn flush_all(&mut self) -> QResult<()> {
        if !self.buf.is_empty() {
            self.w
                .write_all(&self.buf)
                .map_err(|e| QueryError::new(QueryErrorKind::Io(e.to_string()), 0))?;
            self.buf.clear();
        }
        Ok(())
    }
}

impl<'a, W: Write + ?Sized> Emitter for WriterEmitter<'a, W> {
    fn emit_str(&mut self, s: &str) -> QResult<()> {
        self.buf.extend_from_slice(s.as_bytes());
        if self.buf.len() >= self.cap {
            self.flush_all()?;
        }
        Ok(())
    }
}

/// Render `matches` in `format`.
pub fn emit_matches<E: Emitter + ?Sized>(
    out: &mut E,
    matches: &[Match<'_>],
    format: OutputFormat,
) -> QResult<()> {
    match format {
        OutputFormat::Text => {
            for m in matches {
                out.emit_str(m.text)?;
                out.emit_char('\n')?;
            }
            Ok(())
        }
        OutputFormat::Offsets => {
            for m in matches {
                out.emit_str(&format!("{}:{}\t", m.offset, m.length))?;
                out.emit_str(m.text)?;
                out.emit_char('\n')?;
            }
            Ok(())
        }
        OutputFormat::Json => emit_json(out, matches),
    }
}

#[cfg(feature = "serde")]
fn emit_json<E: Emitter + ?Sized>(out: &mut E, matches: &[Match<'_>]) -> QResult<()> {
    let s = serde_json::to_string(matches)
        .map_err(|e| QueryError::new(QueryErrorKind::Io(e.to_string()), 0))?;
    out.emit_str(&s)?;
    out.emit_char('\n')
}

#[cfg(not(feature = "serde"))]
fn emit_json<E: Emitter + ?Sized>(_out: &mut E, _matches: &[Match<'_>]) -> QResult<()> {
    Err(QueryError::new(QueryErrorKind::UnsupportedFormat("json"), 0))
}
