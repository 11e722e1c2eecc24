// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Escaping for VRML quoted string fields.
//!
//! `"` and `\` get a `\` in front; every other byte is written unchanged,
//! control characters included.

use std::borrow::Cow;
use std::io::{self, Write};

fn needs_escape(c: char) -> bool {
    c == '"' || c == '\\'
}

/// Escape `s` for use between double quotes. Borrows when nothing changes.
pub fn escape_string(s: &str) -> Cow<'_, str> {
    if !s.contains(needs_escape) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        if needs_escape(c) {
            out.push('\\');
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Write `s` escaped to `out`.
pub fn write_escaped<W: Write + ?Sized>(out: &mut W, s: &str) -> io::Result<()> {
    let mut rest = s;
    while let Some(pos) = rest.find(needs_escape) {
        out.write_all(rest[..pos].as_bytes())?;
        out.write_all(b"\\")?;
        out.write_all(rest[pos..=pos].as_bytes())?;
        rest = &rest[pos + 1..];
    }
    out.write_all(rest.as_bytes())
}
