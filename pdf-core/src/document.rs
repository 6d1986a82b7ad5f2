use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use tracing::debug;

use crate::error::{PdfError, Result};
use crate::fonts::{BuiltinFont, TextStyle};
use crate::objects::{ObjId, PdfObject};
use crate::writer::{encode_text, format_coord, PdfWriter};

const CATALOG_OBJ: ObjId = ObjId(1, 0);
const PAGES_OBJ: ObjId = ObjId(2, 0);
const FIRST_FREE_OBJ_NUM: u32 = 3;

/// High-level API for building PDF documents.
///
/// Generic over `Write` so it works with files (`BufWriter<File>`),
/// in-memory buffers (`Vec<u8>`), or any other writer.
///
/// Pages are written incrementally: `end_page()` flushes the page's
/// content stream and dictionary to the writer. A font object is
/// written the first time a page uses that font, so documents only
/// reference the fonts they draw with.
///
/// Nothing time-dependent is written, so the same calls always
/// produce the same bytes.
pub struct PdfDocument<W: Write> {
    writer: PdfWriter<W>,
    info: Vec<(String, String)>,
    page_obj_ids: Vec<ObjId>,
    font_obj_ids: BTreeMap<BuiltinFont, ObjId>,
    current_page: Option<PageBuilder>,
    next_obj_num: u32,
    compress: bool,
}

struct PageBuilder {
    width: f64,
    height: f64,
    content_ops: Vec<u8>,
    fonts: BTreeSet<BuiltinFont>,
}

impl PdfDocument<BufWriter<File>> {
    /// Create a new PDF document that writes to a file.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> PdfDocument<W> {
    /// Create a new PDF document that writes to the given writer.
    /// The header is written immediately.
    pub fn new(writer: W) -> Result<Self> {
        let mut pdf_writer = PdfWriter::new(writer);
        pdf_writer.write_header()?;
        Ok(PdfDocument {
            writer: pdf_writer,
            info: Vec::new(),
            page_obj_ids: Vec::new(),
            font_obj_ids: BTreeMap::new(),
            current_page: None,
            next_obj_num: FIRST_FREE_OBJ_NUM,
            compress: false,
        })
    }

    /// Set a document info entry (e.g. "Creator", "Title").
    pub fn set_info(&mut self, key: &str, value: &str) -> &mut Self {
        self.info.push((key.to_string(), value.to_string()));
        self
    }

    /// Compress page content streams with zlib (`/FlateDecode`).
    /// Affects pages ended after the call.
    pub fn set_compression(&mut self, enabled: bool) -> &mut Self {
        self.compress = enabled;
        self
    }

    pub fn has_open_page(&self) -> bool {
        self.current_page.is_some()
    }

    /// Number of pages flushed so far.
    pub fn page_count(&self) -> usize {
        self.page_obj_ids.len()
    }

    /// Begin a new page with the given dimensions in points.
    /// An open page is closed first.
    pub fn begin_page(&mut self, width: f64, height: f64) -> Result<&mut Self> {
        if self.current_page.is_some() {
            self.end_page()?;
        }
        self.current_page = Some(PageBuilder {
            width,
            height,
            content_ops: Vec::new(),
            fonts: BTreeSet::new(),
        });
        Ok(self)
    }

    /// Place text at (x, y) in 12pt Helvetica.
    /// Coordinates use PDF's default bottom-left origin.
    pub fn place_text(&mut self, text: &str, x: f64, y: f64) -> Result<&mut Self> {
        self.place_text_styled(text, x, y, &TextStyle::default())
    }

    /// Place text at (x, y) with the given style. `y` is the baseline.
    pub fn place_text_styled(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        style: &TextStyle,
    ) -> Result<&mut Self> {
        let page = self.current_page.as_mut().ok_or(PdfError::NoOpenPage)?;
        let ops = &mut page.content_ops;
        ops.extend_from_slice(
            format!(
                "BT\n/{} {} Tf\n{} {} Td\n(",
                style.font.pdf_name(),
                format_coord(style.font_size),
                format_coord(x),
                format_coord(y),
            )
            .as_bytes(),
        );
        ops.extend_from_slice(&encode_text(text));
        ops.extend_from_slice(b") Tj\nET\n");
        page.fonts.insert(style.font);
        Ok(self)
    }

    fn alloc_obj_id(&mut self) -> ObjId {
        let id = ObjId(self.next_obj_num, 0);
        self.next_obj_num += 1;
        id
    }

    /// Object id for `font`, writing its font dictionary on first use.
    fn font_obj_id(&mut self, font: BuiltinFont) -> Result<ObjId> {
        if let Some(&id) = self.font_obj_ids.get(&font) {
            return Ok(id);
        }
        let id = self.alloc_obj_id();
        let dict = PdfObject::dict(vec![
            ("Type", PdfObject::name("Font")),
            ("Subtype", PdfObject::name("Type1")),
            ("BaseFont", PdfObject::name(font.pdf_base_name())),
            ("Encoding", PdfObject::name("WinAnsiEncoding")),
        ]);
        self.writer.write_object(id, &dict)?;
        self.font_obj_ids.insert(font, id);
        Ok(id)
    }

    /// End the current page: write its content stream and page
    /// dictionary, then drop the buffered content.
    pub fn end_page(&mut self) -> Result<()> {
        let page = self.current_page.take().ok_or(PdfError::NoOpenPage)?;

        let mut font_entries = Vec::with_capacity(page.fonts.len());
        for &font in &page.fonts {
            let id = self.font_obj_id(font)?;
            font_entries.push((font.pdf_name(), PdfObject::Reference(id)));
        }

        let content_id = self.alloc_obj_id();
        let page_id = self.alloc_obj_id();

        let raw_len = page.content_ops.len();
        let content_stream = if self.compress {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&page.content_ops)?;
            PdfObject::stream(
                vec![("Filter", PdfObject::name("FlateDecode"))],
                encoder.finish()?,
            )
        } else {
            PdfObject::stream(vec![], page.content_ops)
        };
        self.writer.write_object(content_id, &content_stream)?;

        let page_dict = PdfObject::dict(vec![
            ("Type", PdfObject::name("Page")),
            ("Parent", PdfObject::Reference(PAGES_OBJ)),
            (
                "MediaBox",
                PdfObject::array(vec![
                    PdfObject::Integer(0),
                    PdfObject::Integer(0),
                    PdfObject::Real(page.width),
                    PdfObject::Real(page.height),
                ]),
            ),
            ("Contents", PdfObject::Reference(content_id)),
            (
                "Resources",
                PdfObject::dict(vec![("Font", PdfObject::dict(font_entries))]),
            ),
        ]);
        self.writer.write_object(page_id, &page_dict)?;

        self.page_obj_ids.push(page_id);
        debug!(
            page = self.page_obj_ids.len(),
            content_bytes = raw_len,
            compressed = self.compress,
            "flushed PDF page"
        );
        Ok(())
    }

    /// Finish the document: info dictionary, page tree, catalog,
    /// xref table and trailer. Returns the underlying writer.
    pub fn end_document(mut self) -> Result<W> {
        if self.current_page.is_some() {
            self.end_page()?;
        }

        let info_id = if self.info.is_empty() {
            None
        } else {
            let id = self.alloc_obj_id();
            let entries: Vec<(&str, PdfObject)> = self
                .info
                .iter()
                .map(|(k, v)| (k.as_str(), PdfObject::literal_string(v)))
                .collect();
            self.writer.write_object(id, &PdfObject::dict(entries))?;
            Some(id)
        };

        let kids: Vec<PdfObject> = self
            .page_obj_ids
            .iter()
            .map(|&id| PdfObject::Reference(id))
            .collect();
        let pages = PdfObject::dict(vec![
            ("Type", PdfObject::name("Pages")),
            ("Kids", PdfObject::Array(kids)),
            ("Count", PdfObject::Integer(self.page_obj_ids.len() as i64)),
        ]);
        self.writer.write_object(PAGES_OBJ, &pages)?;

        let catalog = PdfObject::dict(vec![
            ("Type", PdfObject::name("Catalog")),
            ("Pages", PdfObject::Reference(PAGES_OBJ)),
        ]);
        self.writer.write_object(CATALOG_OBJ, &catalog)?;

        self.writer.write_xref_and_trailer(CATALOG_OBJ, info_id)?;
        Ok(self.writer.into_inner())
    }
}
