use crate::units::Pt;

/// The standard PDF fonts the declaration can be set in without embedding anything.
///
/// Widths come from the Adobe core font metrics (1000 units per em) and are the same
/// numbers every PDF viewer uses to lay the built-in Helvetica out, so measured text
/// matches rendered text exactly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

/// Advance widths for the printable ASCII range, starting at the space (32)
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

const BULLET_WIDTH: u16 = 350;

/// WinAnsiEncoding code for U+2022 BULLET
const WIN_ANSI_BULLET: u8 = 0x95;

impl StandardFont {
    /// The base font name written into the PDF
    pub fn pdf_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self {
            StandardFont::Helvetica => &HELVETICA_WIDTHS,
            StandardFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Width of anything outside the table; that of the question mark, which is also
    /// what unencodable characters are rendered as
    fn missing_width(&self) -> u16 {
        self.widths()[('?' as usize) - 32]
    }

    /// Advance width of a single character in 1/1000 em
    pub fn char_width(&self, ch: char) -> u16 {
        match ch {
            ' '..='~' => self.widths()[(ch as usize) - 32],
            '\u{2022}' => BULLET_WIDTH,
            _ => self.missing_width(),
        }
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text.chars().map(|ch| self.char_width(ch) as u32).sum();
        size * (units as f32 / 1000.0)
    }

    /// Encode text as WinAnsiEncoding bytes. Latin-1 maps onto itself; anything else
    /// the encoding cannot express becomes `?`.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                ' '..='~' | '\u{a0}'..='\u{ff}' => bytes.push(ch as u8),
                '\u{2022}' => bytes.push(WIN_ANSI_BULLET),
                _ => {
                    log::warn!("{} cannot encode {ch:?}, substituting '?'", self.pdf_name());
                    bytes.push(b'?');
                }
            }
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helvetica_widths_match_the_core_metrics() {
        let font = StandardFont::Helvetica;
        assert_eq!(font.char_width(' '), 278);
        assert_eq!(font.char_width('A'), 667);
        assert_eq!(font.char_width('W'), 944);
        assert_eq!(font.char_width('i'), 222);
        assert_eq!(font.char_width('~'), 584);
        assert_eq!(font.char_width('\u{2022}'), 350);
    }

    #[test]
    fn bold_is_wider() {
        let text = "Undertaking Under FEMA, 1999";
        let regular = StandardFont::Helvetica.width_of_text(text, Pt(10.0));
        let bold = StandardFont::HelveticaBold.width_of_text(text, Pt(10.0));
        assert!(bold > regular);
    }

    #[test]
    fn width_scales_with_size() {
        let w = StandardFont::Helvetica.width_of_text("00", Pt(10.0));
        assert!((w.0 - 11.12).abs() < 1e-4);
    }

    #[test]
    fn encodes_bullets_and_replaces_the_unencodable() {
        let bytes = StandardFont::Helvetica.encode("\u{2022} caf\u{e9} \u{20b9}");
        assert_eq!(bytes, vec![0x95, b' ', b'c', b'a', b'f', 0xe9, b' ', b'?']);
    }
}
