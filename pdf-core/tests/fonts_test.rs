use pdf_core::{BuiltinFont, FontMetrics};

const ALL_FONTS: [BuiltinFont; 8] = [
    BuiltinFont::Helvetica,
    BuiltinFont::HelveticaBold,
    BuiltinFont::HelveticaOblique,
    BuiltinFont::HelveticaBoldOblique,
    BuiltinFont::Courier,
    BuiltinFont::CourierBold,
    BuiltinFont::CourierOblique,
    BuiltinFont::CourierBoldOblique,
];

#[test]
fn resource_names_are_unique() {
    let mut names: Vec<&str> = ALL_FONTS.iter().map(|f| f.pdf_name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ALL_FONTS.len());
}

#[test]
fn arial_resolves_to_helvetica_family() {
    assert_eq!(BuiltinFont::from_family("Arial", ""), Some(BuiltinFont::Helvetica));
    assert_eq!(BuiltinFont::from_family("Arial", "B"), Some(BuiltinFont::HelveticaBold));
    assert_eq!(BuiltinFont::from_family("Arial", "I"), Some(BuiltinFont::HelveticaOblique));
    assert_eq!(BuiltinFont::from_family("Arial", "BIU"), Some(BuiltinFont::HelveticaBoldOblique));
}

#[test]
fn every_font_round_trips_through_base_name_family() {
    for font in ALL_FONTS {
        let base = font.pdf_base_name();
        let family = base.split('-').next().unwrap();
        let style = match base.split('-').nth(1) {
            None => "",
            Some("Bold") => "B",
            Some("Oblique") => "I",
            Some("BoldOblique") => "BI",
            Some(other) => panic!("unexpected style {}", other),
        };
        assert_eq!(BuiltinFont::from_family(family, style), Some(font));
    }
}

#[test]
fn measure_known_strings() {
    // H(722) e(556) l(222) l(222) o(556) = 2278 at 12pt.
    let w = FontMetrics::measure_text("Hello", BuiltinFont::Helvetica, 12.0);
    assert!((w - 27.336).abs() < 1e-9);
    // Digits are 556 in both weights.
    let regular = FontMetrics::measure_text("192.168.1.1", BuiltinFont::Helvetica, 12.0);
    let bold = FontMetrics::measure_text("192.168.1.1", BuiltinFont::HelveticaBold, 12.0);
    assert!((regular - bold).abs() < 1e-9);
}

#[test]
fn text_measures_as_the_bytes_it_is_encoded_to() {
    let text = "Direcci\u{f3}n \u{2713} \u{85}";
    assert_eq!(pdf_core::writer::encode_text(text), b"Direcci\xf3n ? ?".to_vec());
    for font in [BuiltinFont::Helvetica, BuiltinFont::HelveticaBold] {
        assert_eq!(
            FontMetrics::measure_text(text, font, 12.0),
            FontMetrics::measure_text("Direcci\u{f3}n ? ?", font, 12.0)
        );
    }
}
