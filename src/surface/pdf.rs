use super::{DrawingSurface, TextAlign, DEFAULT_FONT_SIZE};
use crate::document::Document;
use crate::font::{Font, FontStyle, StandardFont};
use crate::page::{LineLayout, Page, RectLayout, SpanFont, SpanLayout, A4};
use crate::units::{Mm, Pt};
use id_arena::Id;

/// A [`DrawingSurface`] that lays content out onto A4 pages of a [`Document`]
pub struct PdfCanvas {
    document: Document,
    page: Page,
    regular: Id<Font>,
    bold: Id<Font>,
    style: FontStyle,
    size: Pt,
}

impl PdfCanvas {
    /// Start a canvas with one open page, set in the given regular and bold fonts
    pub fn new(regular: Font, bold: Font) -> PdfCanvas {
        let mut document = Document::default();
        let regular = document.add_font(regular);
        let bold = document.add_font(bold);

        PdfCanvas {
            document,
            page: Page::new(A4),
            regular,
            bold,
            style: FontStyle::Normal,
            size: DEFAULT_FONT_SIZE,
        }
    }

    /// A canvas set in the built-in Helvetica pair
    pub fn helvetica() -> PdfCanvas {
        PdfCanvas::new(
            StandardFont::Helvetica.into(),
            StandardFont::HelveticaBold.into(),
        )
    }

    /// Pages drawn so far, including the open one
    pub fn page_count(&self) -> usize {
        self.document.pages.len() + 1
    }

    /// Close the open page and hand over the finished document
    pub fn finish(self) -> Document {
        let PdfCanvas {
            mut document, page, ..
        } = self;
        document.add_page(page);
        document
    }

    fn font_id(&self) -> Id<Font> {
        match self.style {
            FontStyle::Normal => self.regular,
            FontStyle::Bold => self.bold,
        }
    }

    /// Convert top-down millimetres into bottom-up PDF points
    fn to_page(&self, x: Mm, y: Mm) -> (Pt, Pt) {
        let x: Pt = x.into();
        let y: Pt = y.into();
        (x, self.page.height() - y)
    }
}

impl DrawingSurface for PdfCanvas {
    fn measure_width(&self, text: &str) -> Mm {
        self.document.fonts[self.font_id()]
            .width_of_text(text, self.size)
            .into()
    }

    fn draw_text(&mut self, text: &str, x: Mm, y: Mm, align: TextAlign) {
        let x = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - self.measure_width(text) / 2.0,
        };
        let span = SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                id: self.font_id(),
                size: self.size,
            },
            coords: self.to_page(x, y),
        };
        self.page.add_span(span);
    }

    fn draw_line(&mut self, from: (Mm, Mm), to: (Mm, Mm)) {
        let line = LineLayout {
            from: self.to_page(from.0, from.1),
            to: self.to_page(to.0, to.1),
        };
        self.page.add_line(line);
    }

    fn draw_rect(&mut self, x: Mm, y: Mm, width: Mm, height: Mm) {
        // PDF rectangles grow up from their lower-left corner
        let rect = RectLayout {
            origin: self.to_page(x, y + height),
            size: (width.into(), height.into()),
        };
        self.page.add_rect(rect);
    }

    fn new_page(&mut self) {
        let finished = std::mem::replace(&mut self.page, Page::new(A4));
        self.document.add_page(finished);
        log::debug!("started page {}", self.page_count());
    }

    fn set_font(&mut self, style: FontStyle) {
        self.style = style;
    }

    fn set_font_size(&mut self, size: Pt) {
        self.size = size;
    }
}
