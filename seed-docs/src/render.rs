use std::io::Write;

use pdf_core::{BuiltinFont, CellMove, Layout, PageSize, PdfDocument, TextAlign, TextStyle, Unit};

use crate::content::{Block, SeedDocument, ITEM_INDENT};

/// Height of every text cell, in millimetres.
pub const LINE_HEIGHT: f64 = 10.0;
/// Height of a `Block::Gap`, in millimetres.
pub const GAP_HEIGHT: f64 = 5.0;

const CREATOR: &str = "seed-docs";

const TITLE_STYLE: TextStyle = TextStyle {
    font: BuiltinFont::HelveticaBold,
    font_size: 16.0,
};
const HEADING_STYLE: TextStyle = TextStyle {
    font: BuiltinFont::HelveticaBold,
    font_size: 12.0,
};
const BODY_STYLE: TextStyle = TextStyle {
    font: BuiltinFont::Helvetica,
    font_size: 12.0,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub compress: bool,
}

/// Render `doc` into an in-memory PDF.
pub fn render(doc: &SeedDocument, options: &RenderOptions) -> pdf_core::Result<Vec<u8>> {
    render_to(doc, options, Vec::new())
}

/// Render `doc` into `writer` and hand the writer back.
///
/// Pages are A4 with lengths in millimetres. Titles and headings are
/// single full-width cells; body lines and list items go through
/// `multi_cell` so text wider than the page wraps instead of running
/// off the edge.
pub fn render_to<W: Write>(
    doc: &SeedDocument,
    options: &RenderOptions,
    writer: W,
) -> pdf_core::Result<W> {
    let mut pdf = PdfDocument::new(writer)?;
    pdf.set_compression(options.compress);
    if let Some(title) = doc.title() {
        pdf.set_info("Title", title);
    }
    pdf.set_info("Creator", CREATOR);

    let mut layout = Layout::new(PageSize::A4, Unit::Mm);
    layout.add_page(&mut pdf)?;

    for block in doc.blocks {
        match *block {
            Block::Title(text) => {
                layout.set_font(TITLE_STYLE);
                layout.cell(
                    &mut pdf,
                    0.0,
                    LINE_HEIGHT,
                    text,
                    TextAlign::Left,
                    CellMove::NextLine,
                )?;
            }
            Block::Heading(text) => {
                layout.set_font(HEADING_STYLE);
                layout.cell(
                    &mut pdf,
                    0.0,
                    LINE_HEIGHT,
                    text,
                    TextAlign::Left,
                    CellMove::NextLine,
                )?;
            }
            Block::Line(text) => {
                layout.set_font(BODY_STYLE);
                layout.multi_cell(&mut pdf, 0.0, LINE_HEIGHT, text, TextAlign::Left)?;
            }
            Block::Items(items) => {
                layout.set_font(BODY_STYLE);
                for item in items {
                    let line = format!("{ITEM_INDENT}{item}");
                    layout.multi_cell(&mut pdf, 0.0, LINE_HEIGHT, &line, TextAlign::Left)?;
                }
            }
            Block::Gap => layout.ln(GAP_HEIGHT),
        }
    }

    pdf.end_document()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{EJEMPLO, IPV4};

    fn text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn ipv4_fits_on_one_page() {
        let out = text(&render(&IPV4, &RenderOptions::default()).unwrap());
        assert!(out.contains("/Count 1"));
        assert!(out.contains("/Title (IPv4 Addressing and Subnetting)"));
        assert!(out.contains("/Creator (seed-docs)"));
    }

    #[test]
    fn title_is_bold_16_and_body_regular_12() {
        let out = text(&render(&EJEMPLO, &RenderOptions::default()).unwrap());
        assert!(out.contains("/F2 16 Tf"));
        assert!(out.contains("/F2 12 Tf"));
        assert!(out.contains("/F1 12 Tf"));
        assert!(out.contains("/BaseFont /Helvetica-Bold"));
    }

    #[test]
    fn lines_appear_in_document_order() {
        let out = text(&render(&IPV4, &RenderOptions::default()).unwrap());
        let mut last = 0;
        for line in IPV4.text_lines() {
            let needle = format!("({}) Tj", line);
            let pos = out[last..]
                .find(&needle)
                .unwrap_or_else(|| panic!("{:?} missing or out of order", line));
            last += pos + needle.len();
        }
    }

    #[test]
    fn compression_hides_plain_text() {
        let options = RenderOptions { compress: true };
        let out = text(&render(&IPV4, &options).unwrap());
        assert!(out.contains("/Filter /FlateDecode"));
        assert!(!out.contains("(Example: 192.168.1.1) Tj"));
    }
}
