use crate::units::Mm;

/// Width of an A4 page
pub const PAGE_WIDTH: Mm = Mm(210.0);
/// Height of an A4 page
pub const PAGE_HEIGHT: Mm = Mm(297.0);

/// Margins are guidelines for the layout routines. Nothing stops content from being
/// drawn outside them; the fixed page scripts rely on fitting inside, and wrapped
/// paragraphs use the bottom margin to decide when to break onto a new page.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Mm,
    pub right: Mm,
    pub bottom: Mm,
    pub left: Mm,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Mm, right: Mm, bottom: Mm, left: Mm) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Mm>>(value: D) -> Margins {
        let value: Mm = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// The margins the declaration is laid out in: text runs from 20mm to 190mm across,
    /// starts 20mm from the top, and wrapped text stops at 270mm down
    pub fn declaration() -> Margins {
        Margins::trbl(Mm(20.0), Mm(20.0), PAGE_HEIGHT - Mm(270.0), Mm(20.0))
    }

    /// Horizontal space between the left and right margins of an A4 page
    pub fn content_width(&self) -> Mm {
        PAGE_WIDTH - self.left - self.right
    }

    /// Lowest baseline a wrapped line may still be started at
    pub fn last_baseline(&self) -> Mm {
        PAGE_HEIGHT - self.bottom
    }
}
