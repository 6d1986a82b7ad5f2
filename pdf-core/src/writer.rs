use std::collections::BTreeMap;
use std::io::Write;

use crate::error::Result;
use crate::fonts::win_ansi_byte;
use crate::objects::{ObjId, PdfObject};

/// Serializes PDF objects to any `Write` target, remembering where
/// each object starts so the cross-reference table can be built at
/// the end.
pub struct PdfWriter<W: Write> {
    writer: W,
    offset: usize,
    offsets: BTreeMap<u32, usize>,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W) -> Self {
        PdfWriter {
            writer,
            offset: 0,
            offsets: BTreeMap::new(),
        }
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.offset += data.len();
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_bytes(s.as_bytes())
    }

    /// Write the `%PDF-1.7` header followed by a comment of four
    /// high-bit bytes so transfer tools treat the file as binary.
    pub fn write_header(&mut self) -> Result<()> {
        self.write_str("%PDF-1.7\n")?;
        self.write_bytes(b"%\xe2\xe3\xcf\xd3\n")
    }

    /// Write an indirect object and record its offset for the xref.
    pub fn write_object(&mut self, id: ObjId, obj: &PdfObject) -> Result<()> {
        self.offsets.insert(id.0, self.offset);
        self.write_str(&format!("{} {} obj\n", id.0, id.1))?;
        self.write_value(obj)?;
        self.write_str("\nendobj\n")
    }

    fn write_value(&mut self, obj: &PdfObject) -> Result<()> {
        match obj {
            PdfObject::Integer(n) => self.write_str(&n.to_string()),
            PdfObject::Real(f) => self.write_str(&format_real(*f)),
            PdfObject::Name(name) => {
                self.write_str("/")?;
                self.write_str(name)
            }
            PdfObject::LiteralString(s) => {
                self.write_str("(")?;
                self.write_bytes(&encode_text(s))?;
                self.write_str(")")
            }
            PdfObject::Array(items) => {
                self.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.write_str(" ")?;
                    }
                    self.write_value(item)?;
                }
                self.write_str("]")
            }
            PdfObject::Dictionary(entries) => {
                self.write_str("<<")?;
                self.write_entries(entries)?;
                self.write_str(" >>")
            }
            PdfObject::Stream { dict, data } => {
                self.write_str("<<")?;
                self.write_entries(dict)?;
                self.write_str(&format!(" /Length {} >>\nstream\n", data.len()))?;
                self.write_bytes(data)?;
                self.write_str("\nendstream")
            }
            PdfObject::Reference(id) => self.write_str(&format!("{} {} R", id.0, id.1)),
        }
    }

    fn write_entries(&mut self, entries: &[(String, PdfObject)]) -> Result<()> {
        for (key, val) in entries {
            self.write_str(" /")?;
            self.write_str(key)?;
            self.write_str(" ")?;
            self.write_value(val)?;
        }
        Ok(())
    }

    /// Current byte offset in the output.
    pub fn current_offset(&self) -> usize {
        self.offset
    }

    /// Write the xref table, trailer, startxref and `%%EOF`.
    pub fn write_xref_and_trailer(&mut self, root_id: ObjId, info_id: Option<ObjId>) -> Result<()> {
        let xref_offset = self.offset;
        let size = self.offsets.keys().next_back().map_or(1, |&max| max + 1);

        self.write_str(&format!("xref\n0 {}\n", size))?;
        // Every entry is exactly 20 bytes, hence the "\r\n" terminator.
        self.write_bytes(b"0000000000 65535 f\r\n")?;
        for obj_num in 1..size {
            let entry = match self.offsets.get(&obj_num) {
                Some(&off) => format!("{:010} 00000 n\r\n", off),
                None => "0000000000 00000 f\r\n".to_string(),
            };
            self.write_str(&entry)?;
        }

        self.write_str("trailer\n")?;
        self.write_str(&format!("<< /Size {} /Root {} {} R", size, root_id.0, root_id.1))?;
        if let Some(info) = info_id {
            self.write_str(&format!(" /Info {} {} R", info.0, info.1))?;
        }
        self.write_str(" >>\n")?;
        self.write_str(&format!("startxref\n{}\n%%EOF\n", xref_offset))?;
        self.writer.flush()?;
        Ok(())
    }

    /// Return the inner writer, consuming this PdfWriter.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Escape the characters that are special inside a PDF literal string.
pub fn escape_pdf_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '(' => result.push_str("\\("),
            ')' => result.push_str("\\)"),
            '\r' => result.push_str("\\r"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape `s` and encode it as WinAnsi bytes, the encoding declared
/// for the builtin fonts.
pub fn encode_text(s: &str) -> Vec<u8> {
    escape_pdf_string(s).chars().map(win_ansi_byte).collect()
}

/// Format a float for PDF output: no exponent, no trailing zeros.
pub(crate) fn format_real(f: f64) -> String {
    if f == f.trunc() && f.abs() < 1e15 {
        format!("{:.1}", f)
    } else {
        let s = format!("{:.6}", f);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Format a coordinate for content streams: integers print without a
/// fractional part, everything else with at most 4 decimals.
pub(crate) fn format_coord(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.4}", v);
        let s = s.trim_end_matches('0').trim_end_matches('.');
        if s == "-0" { "0".to_string() } else { s.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_real_values() {
        assert_eq!(format_real(595.28), "595.28");
        assert_eq!(format_real(842.0), "842.0");
        assert_eq!(format_real(0.0), "0.0");
    }

    #[test]
    fn format_coord_values() {
        assert_eq!(format_coord(72.0), "72");
        assert_eq!(format_coord(28.34645669), "28.3465");
        assert_eq!(format_coord(12.5), "12.5");
        assert_eq!(format_coord(-0.00001), "0");
    }

    #[test]
    fn encode_text_maps_latin1_and_replaces_the_rest() {
        assert_eq!(encode_text("Ca(f)\u{e9}"), b"Ca\\(f\\)\xe9".to_vec());
        assert_eq!(encode_text("\u{2713} ok"), b"? ok".to_vec());
        assert_eq!(encode_text("a\u{85}b"), b"a?b".to_vec());
    }

    #[test]
    fn gaps_in_object_numbers_become_free_entries() {
        let mut buf = Vec::new();
        let mut w = PdfWriter::new(&mut buf);
        w.write_header().unwrap();
        w.write_object(ObjId(1, 0), &PdfObject::name("Catalog")).unwrap();
        w.write_object(ObjId(3, 0), &PdfObject::Integer(7)).unwrap();
        w.write_xref_and_trailer(ObjId(1, 0), None).unwrap();

        let output = String::from_utf8_lossy(&buf);
        assert!(output.contains("xref\n0 4\n"));
        assert!(output.contains("0000000000 00000 f\r\n"));
        assert!(output.contains("/Size 4"));
    }
}
