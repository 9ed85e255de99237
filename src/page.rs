use crate::font::Font;
use crate::refs::{ObjectReferences, RefType};
use crate::units::{Mm, Pt};
use id_arena::{Arena, Id};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Str};

/// The stroke width used for underlines, checkbox outlines and check marks
pub const LINE_WIDTH: Mm = Mm(0.200025);

/// A4 in points
pub const A4: (Pt, Pt) = (Pt(595.2756), Pt(841.8898));

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A run of text anchored at its baseline start, in PDF page coordinates
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub coords: (Pt, Pt),
}

/// A stroked line segment, in PDF page coordinates
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
}

/// A stroked rectangle given by its lower-left corner and size, in PDF page coordinates
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RectLayout {
    pub origin: (Pt, Pt),
    pub size: (Pt, Pt),
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(SpanLayout),
    Line(LineLayout),
    Rect(RectLayout),
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Everything drawn on the page, in drawing order
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: (Pt, Pt)) -> Page {
        Page {
            media_box: Rect {
                x1: 0.0,
                y1: 0.0,
                x2: size.0.into(),
                y2: size.1.into(),
            },
            contents: Vec::default(),
        }
    }

    pub fn height(&self) -> Pt {
        Pt(self.media_box.y2 - self.media_box.y1)
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(span));
    }

    pub fn add_line(&mut self, line: LineLayout) {
        self.contents.push(PageContents::Line(line));
    }

    pub fn add_rect(&mut self, rect: RectLayout) {
        self.contents.push(PageContents::Rect(rect));
    }

    fn render(&self, fonts: &Arena<Font>) -> Vec<u8> {
        let mut content = Content::new();
        let line_width: Pt = LINE_WIDTH.into();
        content.set_line_width(line_width.into());

        for item in self.contents.iter() {
            match item {
                PageContents::Text(span) => {
                    let font_name = format!("F{}", span.font.id.index());
                    let encoded = fonts[span.font.id].encode(&span.text);
                    content.begin_text();
                    content.set_font(Name(font_name.as_bytes()), span.font.size.into());
                    content.next_line(span.coords.0.into(), span.coords.1.into());
                    content.show(Str(encoded.as_slice()));
                    content.end_text();
                }
                PageContents::Line(line) => {
                    content.move_to(line.from.0.into(), line.from.1.into());
                    content.line_to(line.to.0.into(), line.to.1.into());
                    content.stroke();
                }
                PageContents::Rect(rect) => {
                    content.rect(
                        rect.origin.0.into(),
                        rect.origin.1.into(),
                        rect.size.0.into(),
                        rect.size.1.into(),
                    );
                    content.stroke();
                }
            }
        }

        content.finish().to_vec()
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) {
        // page refs are generated up front by the document so the page tree can list them
        let Some(id) = refs.get(RefType::Page(page_index)) else {
            unreachable!("page {page_index} has no reference");
        };
        let Some(page_tree) = refs.get(RefType::PageTree) else {
            unreachable!("page tree has no reference");
        };
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box);
        page.parent(page_tree);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(font_id.index())) {
                resource_fonts.pair(Name(format!("F{}", font_id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();
        page.finish();

        let rendered = self.render(fonts);
        log::debug!(
            "page {} rendered: {} items, {} content bytes",
            page_index + 1,
            self.contents.len(),
            rendered.len()
        );
        writer.stream(content_id, rendered.as_slice());
    }
}
