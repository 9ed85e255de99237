use super::justify::justify_line;
use super::margins::Margins;
use crate::surface::{DrawingSurface, TextAlign};
use crate::units::Mm;

/// Vertical distance between consecutive lines of body text
pub const LINE_HEIGHT: Mm = Mm(7.0);

/// The vertical position of the next baseline on the current page.
///
/// Only ever moves down the page, except when a wrapped paragraph runs past the
/// bottom margin: then the surface gets a new page and the cursor returns to the
/// top margin.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    y: Mm,
    margins: Margins,
}

impl Cursor {
    /// A cursor at the top margin of a fresh page
    pub fn new(margins: Margins) -> Cursor {
        Cursor {
            y: margins.top,
            margins,
        }
    }

    pub fn y(&self) -> Mm {
        self.y
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    /// Move down by `by`
    pub fn advance(&mut self, by: Mm) {
        debug_assert!(by >= Mm(0.0), "the cursor only moves down the page");
        self.y += by;
    }

    /// Move down by one [`LINE_HEIGHT`]
    pub fn next_line(&mut self) {
        self.advance(LINE_HEIGHT);
    }

    /// Whether the cursor has moved past the last baseline wrapped text may use
    pub fn is_past_bottom(&self) -> bool {
        self.y > self.margins.last_baseline()
    }

    /// Start a new page and return to the top margin if the cursor is past the bottom.
    /// Returns whether a page break happened.
    pub fn break_page_if_needed<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.is_past_bottom() {
            return false;
        }
        log::debug!("cursor at {:?} passed the bottom margin, breaking page", self.y);
        surface.new_page();
        self.y = self.margins.top;
        true
    }
}

/// Lay out a paragraph wrapped to `width` at `x`, one [`LINE_HEIGHT`] per line,
/// starting at the cursor.
///
/// Every line but the last is justified to the full width; the last is left-aligned.
/// Before each line the cursor is checked against the bottom margin, so long
/// paragraphs continue at the top of as many new pages as they need. Returns the
/// number of lines drawn.
pub fn layout_paragraph<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    cursor: &mut Cursor,
    text: &str,
    x: Mm,
    width: Mm,
) -> usize {
    let lines = surface.wrap_text(text, width);
    let last = lines.len().saturating_sub(1);

    for (index, line) in lines.iter().enumerate() {
        cursor.break_page_if_needed(surface);
        if index < last {
            justify_line(surface, line, x, cursor.y(), width);
        } else {
            surface.draw_text(line, x, cursor.y(), TextAlign::Left);
        }
        cursor.next_line();
    }

    lines.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};

    fn baselines(page: &[DrawOp]) -> Vec<Mm> {
        page.iter()
            .filter_map(|op| match op {
                DrawOp::Text { y, .. } => Some(*y),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn cursor_starts_at_the_top_margin() {
        let mut cursor = Cursor::new(Margins::declaration());
        assert_eq!(cursor.y(), Mm(20.0));
        cursor.next_line();
        cursor.advance(Mm(10.0));
        assert_eq!(cursor.y(), Mm(37.0));
    }

    #[test]
    fn no_break_at_exactly_the_last_baseline() {
        let mut surface = RecordingSurface::new();
        let mut cursor = Cursor::new(Margins::declaration());
        cursor.advance(Mm(250.0));
        assert!(!cursor.break_page_if_needed(&mut surface));
        cursor.advance(Mm(0.5));
        assert!(cursor.break_page_if_needed(&mut surface));
        assert_eq!(cursor.y(), Mm(20.0));
        assert_eq!(surface.page_count(), 2);
    }

    #[test]
    fn short_paragraphs_justify_all_but_the_last_line() {
        let mut surface = RecordingSurface::monospace(Mm(1.0));
        let mut cursor = Cursor::new(Margins::declaration());
        let text = "aa bb cc dd ee";
        let drawn = layout_paragraph(&mut surface, &mut cursor, text, Mm(20.0), Mm(6.0));

        // "aa bb" / "cc dd" / "ee"
        assert_eq!(drawn, 3);
        assert_eq!(cursor.y(), Mm(41.0));
        let texts = surface.texts_on(0);
        assert_eq!(texts, vec!["aa", "bb", "cc", "dd", "ee"]);

        let positions: Vec<Mm> = surface
            .ops()
            .filter_map(|op| match op {
                DrawOp::Text { x, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(positions, vec![Mm(20.0), Mm(24.0), Mm(20.0), Mm(24.0), Mm(20.0)]);
    }

    #[test]
    fn long_paragraphs_continue_on_new_pages() {
        let mut surface = RecordingSurface::new();
        let mut cursor = Cursor::new(Margins::declaration());
        cursor.advance(Mm(200.0));

        let text = lipsum::lipsum(1200);
        let drawn = layout_paragraph(&mut surface, &mut cursor, &text, Mm(20.0), Mm(170.0));

        assert!(surface.page_count() >= 3, "only {} pages", surface.page_count());
        let mut lines_seen = 0;
        for (index, page) in surface.pages().iter().enumerate() {
            let ys = baselines(page);
            assert!(!ys.is_empty(), "page {index} is empty");
            if index > 0 {
                assert_eq!(ys[0], Mm(20.0), "page {index} does not start at the top margin");
            }
            for y in ys.iter() {
                assert!(*y >= Mm(20.0) && *y <= Mm(270.0), "line at {y:?} on page {index}");
            }
            let mut distinct = ys.clone();
            distinct.dedup();
            lines_seen += distinct.len();
        }
        assert_eq!(lines_seen, drawn);
    }
}
