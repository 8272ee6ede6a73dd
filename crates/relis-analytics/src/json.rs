//! Record dumps in the reference report's JSON style: two-space indent and
//! every non-ASCII character written as a `\uXXXX` escape.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::Serializer;

/// Pretty formatter that escapes non-ASCII text, UTF-16 surrogate pairs
/// for characters outside the BMP, lowercase hex.
pub struct AsciiPrettyFormatter {
    inner: PrettyFormatter<'static>,
}

impl AsciiPrettyFormatter {
    pub fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Default for AsciiPrettyFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for AsciiPrettyFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..idx])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}

/// Serialize `value` as indented, ASCII-only JSON.
pub fn to_ascii_pretty<T: ?Sized + Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::new());
    value.serialize(&mut serializer)?;
    // Only ASCII bytes are ever written.
    Ok(buf.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escapes_non_ascii() {
        let out = to_ascii_pretty(&json!({"Answer": "día"})).unwrap();
        assert_eq!(out, "{\n  \"Answer\": \"d\\u00eda\"\n}");
    }

    #[test]
    fn test_surrogate_pairs_and_keys() {
        let out = to_ascii_pretty(&json!({"clé": "ok 😀"})).unwrap();
        assert!(out.contains("\"cl\\u00e9\": \"ok \\ud83d\\ude00\""));
    }

    #[test]
    fn test_layout_matches_pretty() {
        let value = json!({"a": [1, 2.5, null], "b": {}, "c": [], "d": "tab\tquote\""});
        assert_eq!(to_ascii_pretty(&value).unwrap(), serde_json::to_string_pretty(&value).unwrap());
    }
}
