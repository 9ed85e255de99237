//! Layout primitives for fixed-form documents.
//!
//! Everything here draws through a [`DrawingSurface`](crate::surface::DrawingSurface)
//! and works in millimetres from the top-left of the page:
//!
//! - [`FieldValue`] and [`format_date`] turn raw answers into printable values
//! - [`justify_line`] spreads a line's words across a column
//! - [`wrap_to_width`] breaks a paragraph into lines that fit a column
//! - [`draw_underlined`] prints a fill-in value over a rule
//! - [`draw_checkbox`] prints an option's box, crossed or not
//! - [`Cursor`] and [`layout_paragraph`] walk down a page, breaking onto new
//!   pages when a wrapped paragraph runs past the bottom [`Margins`]
//!
//! # Example
//!
//! ```
//! use esop_declaration::layout::{layout_paragraph, Cursor, Margins};
//! use esop_declaration::surface::RecordingSurface;
//! use esop_declaration::Mm;
//!
//! let mut surface = RecordingSurface::new();
//! let mut cursor = Cursor::new(Margins::declaration());
//! let lines = layout_paragraph(
//!     &mut surface,
//!     &mut cursor,
//!     "Any unused forex amount should be repatriated.",
//!     Mm(20.0),
//!     Mm(170.0),
//! );
//! assert_eq!(lines, 1);
//! assert_eq!(cursor.y(), Mm(27.0));
//! ```

mod checkbox;
mod cursor;
mod field;
mod justify;
mod margins;
mod underline;
mod wrap;

pub use checkbox::*;
pub use cursor::*;
pub use field::*;
pub use justify::*;
pub use margins::*;
pub use underline::*;
pub use wrap::*;
