//! JSON and XML helpers built purely from the positioning and extraction
//! primitives. Matching is textual: no escapes, entities or namespaces.

use memchr::{memchr, memmem};

use super::{AnyOf, MoveMode, Seeker};
use crate::classify::JSON_SCALAR_END;

impl<'a> Seeker<'a> {
    /// Value of the first `"name": ...` pair in the view; the receiver is not moved.
    ///
    /// Strings come back without their quotes and end at the next `"` (escaped
    /// quotes are not recognised). Arrays and objects come back whole, brackets
    /// included. Anything else runs up to the first of `, \r\n]}`.
    pub fn json_property(&self, name: &str) -> Option<Seeker<'a>> {
        let mut copy = *self;
        if !copy.seek_to(&format!("\"{name}\""), MoveMode::After) {
            return None;
        }
        copy.skip_whitespace();
        if !copy.expect(":") {
            return None;
        }
        copy.skip_whitespace();
        if copy.expect("\"") {
            return copy.extract_until("\"", MoveMode::Keep);
        }
        if copy.starts_with("[") {
            return copy.extract_balanced('[', ']', MoveMode::Keep);
        }
        if copy.starts_with("{") {
            return copy.extract_balanced('{', '}', MoveMode::Keep);
        }
        copy.extract_until_any_of(AnyOf(JSON_SCALAR_END), MoveMode::Keep)
    }

    /// The whole `<name ...>...</name>` element.
    ///
    /// `<name` is matched as a prefix, so `name` also finds `<names>`; the closing
    /// tag is the first `</name>` after it. Self-closing and nested same-name tags
    /// are not handled.
    pub fn xml_tag(&mut self, name: &str, mode: MoveMode) -> Option<Seeker<'a>> {
        let open = format!("<{name}");
        let close = format!("</{name}>");
        let bytes = self.as_str().as_bytes();
        let start = memmem::find(bytes, open.as_bytes())?;
        let from = start + open.len();
        let end = from + memmem::find(&bytes[from..], close.as_bytes())? + close.len();
        let out = self.derive(start, end);
        self.reposition(mode, start, end);
        Some(out)
    }

    /// Content of the element found by [`Seeker::xml_tag`]: after the first `>`,
    /// up to the last `</name>`. `mode` applies to the whole element.
    pub fn xml_tag_body(&mut self, name: &str, mode: MoveMode) -> Option<Seeker<'a>> {
        let tag = self.xml_tag(name, mode)?;
        let bytes = tag.as_str().as_bytes();
        let body = memchr(b'>', bytes)? + 1;
        let close = format!("</{name}>");
        let body_end = memmem::rfind(bytes, close.as_bytes())?;
        if body_end < body {
            return None;
        }
        Some(tag.derive(body, body_end))
    }

    /// Double-quoted value following the first occurrence of `name`; the receiver
    /// is not moved.
    ///
    /// `name` is found anywhere in the view, so `id` also matches inside
    /// `data-id`. A missing `=` is tolerated.
    pub fn xml_attr(&self, name: &str) -> Option<Seeker<'a>> {
        let mut copy = *self;
        if !copy.seek_to(name, MoveMode::After) {
            return None;
        }
        copy.skip_whitespace();
        copy.expect("=");
        copy.skip_whitespace();
        copy.extract_between("\"", "\"", MoveMode::Keep)
    }
}
