//! Cursor-based cell layout.
//!
//! `Layout` tracks a cursor in user units with a top-left origin and
//! places text as a sequence of cells: fixed-height rectangles drawn
//! one after another, moving down the page. Geometry follows the
//! classic cell model used by simple report generators, so a cell of
//! height 10 mm holds one 12pt line and `ln(5)` opens a 5 mm gap.

use std::io::Write;

use crate::document::PdfDocument;
use crate::error::{PdfError, Result};
use crate::fonts::{FontMetrics, TextStyle};

/// Unit used for every length passed to a `Layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Pt,
    Mm,
    Cm,
    In,
}

impl Unit {
    /// Points per unit.
    pub fn scale(self) -> f64 {
        match self {
            Unit::Pt => 1.0,
            Unit::Mm => 72.0 / 25.4,
            Unit::Cm => 72.0 / 2.54,
            Unit::In => 72.0,
        }
    }
}

/// Page dimensions in points, portrait.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Custom { width: f64, height: f64 },
}

impl PageSize {
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Custom { width, height } => (width, height),
        }
    }
}

/// Horizontal placement of text inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Where the cursor goes after a cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMove {
    /// To the right edge of the cell, same line.
    Right,
    /// To the left margin of the next line.
    NextLine,
    /// Straight below the cell, same x.
    Below,
}

/// Default margin: 1 cm expressed in points.
const DEFAULT_MARGIN_PT: f64 = 28.35;

pub struct Layout {
    k: f64,
    size_pt: (f64, f64),
    width: f64,
    height: f64,
    left_margin: f64,
    top_margin: f64,
    right_margin: f64,
    bottom_margin: f64,
    cell_padding: f64,
    x: f64,
    y: f64,
    style: TextStyle,
    auto_page_break: bool,
}

impl Layout {
    /// A layout for pages of `size`, measured in `unit`. Margins are
    /// 1 cm on the left, top and right, 2 cm at the bottom, and text
    /// is inset 1 mm from the cell edge. Auto page break is on.
    pub fn new(size: PageSize, unit: Unit) -> Self {
        let k = unit.scale();
        let (w_pt, h_pt) = size.dimensions();
        let margin = DEFAULT_MARGIN_PT / k;
        Layout {
            k,
            size_pt: (w_pt, h_pt),
            width: w_pt / k,
            height: h_pt / k,
            left_margin: margin,
            top_margin: margin,
            right_margin: margin,
            bottom_margin: margin * 2.0,
            cell_padding: margin / 10.0,
            x: margin,
            y: margin,
            style: TextStyle::default(),
            auto_page_break: true,
        }
    }

    pub fn set_margins(&mut self, left: f64, top: f64, right: f64) -> &mut Self {
        self.left_margin = left;
        self.top_margin = top;
        self.right_margin = right;
        self
    }

    /// Enable or disable automatic page breaks; `bottom` is the
    /// distance from the page bottom that triggers one.
    pub fn set_auto_page_break(&mut self, enabled: bool, bottom: f64) -> &mut Self {
        self.auto_page_break = enabled;
        self.bottom_margin = bottom;
        self
    }

    pub fn set_font(&mut self, style: TextStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> TextStyle {
        self.style
    }

    pub fn set_xy(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn left_margin(&self) -> f64 {
        self.left_margin
    }

    /// Page width in user units.
    pub fn page_width(&self) -> f64 {
        self.width
    }

    /// Page height in user units.
    pub fn page_height(&self) -> f64 {
        self.height
    }

    /// The y beyond which a cell no longer fits on the page.
    pub fn page_break_trigger(&self) -> f64 {
        self.height - self.bottom_margin
    }

    /// Begin a new page and move the cursor to the top-left margin.
    pub fn add_page<W: Write>(&mut self, doc: &mut PdfDocument<W>) -> Result<()> {
        let (w_pt, h_pt) = self.size_pt;
        doc.begin_page(w_pt, h_pt)?;
        self.x = self.left_margin;
        self.y = self.top_margin;
        Ok(())
    }

    /// Draw one line of text in a `w` × `h` cell at the cursor.
    /// A width of 0 stretches the cell to the right margin.
    pub fn cell<W: Write>(
        &mut self,
        doc: &mut PdfDocument<W>,
        w: f64,
        h: f64,
        text: &str,
        align: TextAlign,
        after: CellMove,
    ) -> Result<()> {
        if !doc.has_open_page() {
            return Err(PdfError::NoOpenPage);
        }
        if self.auto_page_break && self.y + h > self.page_break_trigger() {
            let x = self.x;
            self.add_page(doc)?;
            self.x = x;
        }

        let w = if w == 0.0 {
            self.width - self.right_margin - self.x
        } else {
            w
        };

        if !text.is_empty() {
            let text_w =
                FontMetrics::measure_text(text, self.style.font, self.style.font_size) / self.k;
            let dx = match align {
                TextAlign::Left => self.cell_padding,
                TextAlign::Center => (w - text_w) / 2.0,
                TextAlign::Right => w - self.cell_padding - text_w,
            };
            let font_size = self.style.font_size / self.k;
            let baseline = self.y + 0.5 * h + 0.3 * font_size;
            doc.place_text_styled(
                text,
                (self.x + dx) * self.k,
                (self.height - baseline) * self.k,
                &self.style,
            )?;
        }

        match after {
            CellMove::Right => self.x += w,
            CellMove::NextLine => {
                self.x = self.left_margin;
                self.y += h;
            }
            CellMove::Below => self.y += h,
        }
        Ok(())
    }

    /// Draw `text` as a stack of `h`-high cells, wrapping it to the
    /// cell width. Explicit `\n` always starts a new line. The cursor
    /// ends at the left margin below the last line.
    pub fn multi_cell<W: Write>(
        &mut self,
        doc: &mut PdfDocument<W>,
        w: f64,
        h: f64,
        text: &str,
        align: TextAlign,
    ) -> Result<()> {
        let w = if w == 0.0 {
            self.width - self.right_margin - self.x
        } else {
            w
        };
        let max_width_pt = (w - 2.0 * self.cell_padding) * self.k;
        for line in wrap_text(text, &self.style, max_width_pt) {
            self.cell(doc, w, h, &line, align, CellMove::Below)?;
        }
        self.x = self.left_margin;
        Ok(())
    }

    /// Move to the left margin and down by `h`.
    pub fn ln(&mut self, h: f64) {
        self.x = self.left_margin;
        self.y += h;
    }
}

/// Break `text` into lines no wider than `max_width` points.
///
/// Lines break at the last space that fits (the space is dropped);
/// a run with no usable space is broken between characters. Leading
/// spaces are kept, so indented lines stay indented.
pub fn wrap_text(text: &str, style: &TextStyle, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let chars: Vec<char> = paragraph.trim_end_matches('\r').chars().collect();
        let mut start = 0;
        let mut last_space: Option<usize> = None;
        let mut width = 0.0;
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if c == ' ' {
                last_space = Some(i);
            }
            width += f64::from(FontMetrics::char_width(style.font, c)) * style.font_size / 1000.0;
            if width > max_width && i > start {
                match last_space {
                    Some(s) if s > start => {
                        lines.push(chars[start..s].iter().collect());
                        start = s + 1;
                    }
                    _ => {
                        lines.push(chars[start..i].iter().collect());
                        start = i;
                    }
                }
                i = start;
                last_space = None;
                width = 0.0;
                continue;
            }
            i += 1;
        }
        lines.push(chars[start..].iter().collect());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::BuiltinFont;

    #[test]
    fn a4_in_millimetres() {
        let layout = Layout::new(PageSize::A4, Unit::Mm);
        assert!((layout.page_width() - 210.0).abs() < 0.01);
        assert!((layout.page_height() - 297.0).abs() < 0.01);
        assert!((layout.left_margin() - 10.0).abs() < 0.01);
        assert!((layout.page_break_trigger() - 277.0).abs() < 0.02);
    }

    #[test]
    fn wrap_keeps_short_lines_intact() {
        let style = TextStyle::default();
        let lines = wrap_text("  Class A: 255.0.0.0", &style, 500.0);
        assert_eq!(lines, vec!["  Class A: 255.0.0.0".to_string()]);
    }

    #[test]
    fn wrap_breaks_at_spaces() {
        let style = TextStyle::new(BuiltinFont::Courier, 10.0);
        // Courier 10pt: 6pt per character, so 60pt holds 10 characters.
        let lines = wrap_text("alpha beta gamma", &style, 60.0);
        assert_eq!(lines, vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn wrap_breaks_long_words_between_characters() {
        let style = TextStyle::new(BuiltinFont::Courier, 10.0);
        let lines = wrap_text("abcdefghijkl", &style, 30.0);
        assert_eq!(lines, vec!["abcde", "fghij", "kl"]);
    }

    #[test]
    fn wrap_honours_explicit_newlines() {
        let style = TextStyle::default();
        let lines = wrap_text("one\n\ntwo", &style, 500.0);
        assert_eq!(lines, vec!["one", "", "two"]);
    }
}
