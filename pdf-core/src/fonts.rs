/// The standard PDF fonts this crate can place. They are guaranteed
/// to be available in every viewer, so nothing is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

impl BuiltinFont {
    /// Resource name used in content streams (e.g. "F1").
    /// Fixed per variant so every page agrees on it.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "F1",
            BuiltinFont::HelveticaBold => "F2",
            BuiltinFont::HelveticaOblique => "F3",
            BuiltinFont::HelveticaBoldOblique => "F4",
            BuiltinFont::Courier => "F5",
            BuiltinFont::CourierBold => "F6",
            BuiltinFont::CourierOblique => "F7",
            BuiltinFont::CourierBoldOblique => "F8",
        }
    }

    /// The `/BaseFont` name, e.g. "Helvetica-Bold".
    pub fn pdf_base_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            BuiltinFont::Courier => "Courier",
            BuiltinFont::CourierBold => "Courier-Bold",
            BuiltinFont::CourierOblique => "Courier-Oblique",
            BuiltinFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    /// Resolve a family name and a style string the way classic
    /// cell-based PDF generators do: `"Arial"` is an alias for
    /// Helvetica, family names are case-insensitive, and the style
    /// is any combination of `B` and `I` (`U` is accepted and ignored).
    ///
    /// ```
    /// use pdf_core::BuiltinFont;
    /// assert_eq!(BuiltinFont::from_family("Arial", "B"), Some(BuiltinFont::HelveticaBold));
    /// assert_eq!(BuiltinFont::from_family("courier", ""), Some(BuiltinFont::Courier));
    /// assert_eq!(BuiltinFont::from_family("Comic Sans", ""), None);
    /// ```
    pub fn from_family(family: &str, style: &str) -> Option<BuiltinFont> {
        let style = style.to_ascii_uppercase();
        if style.chars().any(|c| !matches!(c, 'B' | 'I' | 'U')) {
            return None;
        }
        let bold = style.contains('B');
        let italic = style.contains('I');
        let helvetica = match family.to_ascii_lowercase().as_str() {
            "arial" | "helvetica" => true,
            "courier" => false,
            _ => return None,
        };
        Some(match (helvetica, bold, italic) {
            (true, false, false) => BuiltinFont::Helvetica,
            (true, true, false) => BuiltinFont::HelveticaBold,
            (true, false, true) => BuiltinFont::HelveticaOblique,
            (true, true, true) => BuiltinFont::HelveticaBoldOblique,
            (false, false, false) => BuiltinFont::Courier,
            (false, true, false) => BuiltinFont::CourierBold,
            (false, false, true) => BuiltinFont::CourierOblique,
            (false, true, true) => BuiltinFont::CourierBoldOblique,
        })
    }
}

/// Helvetica widths for ASCII 32..=126, in 1/1000 em (Adobe AFM).
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold widths for ASCII 32..=126, in 1/1000 em (Adobe AFM).
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Helvetica widths for Latin-1 0xA0..=0xFF, in 1/1000 em (Adobe AFM).
#[rustfmt::skip]
const HELVETICA_LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

/// Helvetica-Bold widths for Latin-1 0xA0..=0xFF, in 1/1000 em (Adobe AFM).
#[rustfmt::skip]
const HELVETICA_BOLD_LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// Courier is monospaced.
const COURIER_WIDTH: u16 = 600;

/// Width used for control characters, which have no glyph.
const DEFAULT_WIDTH: u16 = 278;

/// Font metrics for the builtin fonts.
pub struct FontMetrics;

impl FontMetrics {
    /// Width of a character in 1/1000 em units, measured as the
    /// WinAnsi byte it is written as (see `win_ansi_byte`).
    pub fn char_width(font: BuiltinFont, ch: char) -> u16 {
        let (ascii, latin1): (&[u16; 95], &[u16; 96]) = match font {
            BuiltinFont::Courier
            | BuiltinFont::CourierBold
            | BuiltinFont::CourierOblique
            | BuiltinFont::CourierBoldOblique => return COURIER_WIDTH,
            // Obliques share the upright metrics.
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => {
                (&HELVETICA_WIDTHS, &HELVETICA_LATIN1_WIDTHS)
            }
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
                (&HELVETICA_BOLD_WIDTHS, &HELVETICA_BOLD_LATIN1_WIDTHS)
            }
        };
        match win_ansi_byte(ch) {
            code @ 32..=126 => ascii[usize::from(code - 32)],
            code @ 0xA0..=0xFF => latin1[usize::from(code - 0xA0)],
            _ => DEFAULT_WIDTH,
        }
    }

    /// Width of `text` in points.
    pub fn measure_text(text: &str, font: BuiltinFont, font_size: f64) -> f64 {
        let total: u32 = text
            .chars()
            .map(|ch| u32::from(Self::char_width(font, ch)))
            .sum();
        f64::from(total) * font_size / 1000.0
    }
}

/// The byte `ch` is written as under `/WinAnsiEncoding`.
///
/// Latin-1 maps to itself. U+0080..=U+009F would land on WinAnsi's
/// extra glyphs (`€`, `…`, ...) rather than the intended characters,
/// so they become `?`, as does everything above U+00FF.
pub fn win_ansi_byte(ch: char) -> u8 {
    match u32::from(ch) {
        0x80..=0x9F => b'?',
        code => u8::try_from(code).unwrap_or(b'?'),
    }
}

/// Font and size applied to placed text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: BuiltinFont,
    /// Size in points.
    pub font_size: f64,
}

impl TextStyle {
    pub fn new(font: BuiltinFont, font_size: f64) -> Self {
        TextStyle { font, font_size }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font: BuiltinFont::Helvetica,
            font_size: 12.0,
        }
    }
}
