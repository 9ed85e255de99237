//! The drawing surface the layout routines paint onto.
//!
//! Layout never talks to the PDF object model directly. It measures and draws
//! through [`DrawingSurface`], in millimetres from the top-left corner of the page
//! with `y` addressing the text baseline and growing downward. [`PdfCanvas`] turns
//! those calls into a [`Document`](crate::Document); [`RecordingSurface`] keeps them
//! as a list of [`DrawOp`]s so layouts can be inspected.

mod pdf;
mod recording;

pub use pdf::*;
pub use recording::*;

use crate::font::FontStyle;
use crate::units::{Mm, Pt};

/// Horizontal anchoring of a drawn string relative to its `x` coordinate
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// Font size every surface starts out with
pub const DEFAULT_FONT_SIZE: Pt = Pt(10.0);

pub trait DrawingSurface {
    /// Rendered width of `text` in the current font and size
    fn measure_width(&self, text: &str) -> Mm;

    /// Draw `text` with its baseline at `y`
    fn draw_text(&mut self, text: &str, x: Mm, y: Mm, align: TextAlign);

    fn draw_line(&mut self, from: (Mm, Mm), to: (Mm, Mm));

    /// Stroke a rectangle whose top-left corner is at `(x, y)`
    fn draw_rect(&mut self, x: Mm, y: Mm, width: Mm, height: Mm);

    /// Close the current page and continue drawing on a fresh one
    fn new_page(&mut self);

    fn set_font(&mut self, style: FontStyle);

    fn set_font_size(&mut self, size: Pt);

    /// Split `text` into lines no wider than `max_width` in the current font
    fn wrap_text(&self, text: &str, max_width: Mm) -> Vec<String> {
        crate::layout::wrap_to_width(self, text, max_width)
    }
}
