use super::{DrawingSurface, TextAlign, DEFAULT_FONT_SIZE};
use crate::font::{FontStyle, StandardFont};
use crate::units::{Mm, Pt};

/// A single drawing call captured by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x: Mm,
        y: Mm,
        align: TextAlign,
        style: FontStyle,
        size: Pt,
    },
    Line {
        from: (Mm, Mm),
        to: (Mm, Mm),
    },
    Rect {
        x: Mm,
        y: Mm,
        width: Mm,
        height: Mm,
    },
}

/// How a [`RecordingSurface`] measures text
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Metrics {
    /// The same Helvetica metrics the PDF backend lays out with
    Helvetica,
    /// Every character advances by the same amount, regardless of font and size
    Monospace(Mm),
}

/// A [`DrawingSurface`] that draws nothing and remembers everything, page by page
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pages: Vec<Vec<DrawOp>>,
    metrics: Metrics,
    style: FontStyle,
    size: Pt,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        RecordingSurface::new()
    }
}

impl RecordingSurface {
    /// A surface measuring with Helvetica, with one open page
    pub fn new() -> RecordingSurface {
        RecordingSurface::with_metrics(Metrics::Helvetica)
    }

    /// A surface where every character is `advance` wide
    pub fn monospace(advance: Mm) -> RecordingSurface {
        RecordingSurface::with_metrics(Metrics::Monospace(advance))
    }

    pub fn with_metrics(metrics: Metrics) -> RecordingSurface {
        RecordingSurface {
            pages: vec![Vec::new()],
            metrics,
            style: FontStyle::Normal,
            size: DEFAULT_FONT_SIZE,
        }
    }

    pub fn pages(&self) -> &[Vec<DrawOp>] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every operation on every page, in drawing order
    pub fn ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.pages.iter().flatten()
    }

    /// The strings drawn on a page, in drawing order
    pub fn texts_on(&self, page: usize) -> Vec<&str> {
        self.pages
            .get(page)
            .into_iter()
            .flatten()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, op: DrawOp) {
        // a surface always has an open page
        if let Some(page) = self.pages.last_mut() {
            page.push(op);
        }
    }
}

impl DrawingSurface for RecordingSurface {
    fn measure_width(&self, text: &str) -> Mm {
        match self.metrics {
            Metrics::Helvetica => {
                let font = match self.style {
                    FontStyle::Normal => StandardFont::Helvetica,
                    FontStyle::Bold => StandardFont::HelveticaBold,
                };
                font.width_of_text(text, self.size).into()
            }
            Metrics::Monospace(advance) => advance * text.chars().count() as f64,
        }
    }

    fn draw_text(&mut self, text: &str, x: Mm, y: Mm, align: TextAlign) {
        self.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            align,
            style: self.style,
            size: self.size,
        });
    }

    fn draw_line(&mut self, from: (Mm, Mm), to: (Mm, Mm)) {
        self.push(DrawOp::Line { from, to });
    }

    fn draw_rect(&mut self, x: Mm, y: Mm, width: Mm, height: Mm) {
        self.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn set_font(&mut self, style: FontStyle) {
        self.style = style;
    }

    fn set_font_size(&mut self, size: Pt) {
        self.size = size;
    }
}
