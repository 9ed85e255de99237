use super::field::FieldValue;
use crate::surface::{DrawingSurface, TextAlign};
use crate::units::Mm;

/// How far below the baseline underlines are drawn
pub const UNDERLINE_OFFSET: Mm = Mm(0.5);

/// Surround an answer with the two spaces of breathing room its underline extends over
pub fn pad(text: &str) -> String {
    format!("  {text}  ")
}

/// Draw a rule of `width` just below the baseline `y`, starting at `x`
pub fn underline<S: DrawingSurface + ?Sized>(surface: &mut S, x: Mm, y: Mm, width: Mm) {
    let y = y + UNDERLINE_OFFSET;
    surface.draw_line((x, y), (x + width, y));
}

/// Draw a fill-in value at `(x, y)` and return how wide it came out, so more text can
/// follow it on the same line.
///
/// Answers are padded and underlined across their padded width; placeholders are drawn
/// as they are, their underscores being the rule.
pub fn draw_underlined<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    text: &str,
    x: Mm,
    y: Mm,
    is_filled: bool,
) -> Mm {
    if is_filled {
        let padded = pad(text);
        surface.draw_text(&padded, x, y, TextAlign::Left);
        let width = surface.measure_width(&padded);
        underline(surface, x, y, width);
        width
    } else {
        surface.draw_text(text, x, y, TextAlign::Left);
        surface.measure_width(text)
    }
}

/// [`draw_underlined`] for a formatted field
pub fn draw_field<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    field: &FieldValue,
    x: Mm,
    y: Mm,
) -> Mm {
    draw_underlined(surface, &field.text, x, y, field.is_filled)
}
