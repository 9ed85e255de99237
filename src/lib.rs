//! Lays out and renders the customer declaration for ESOP / portfolio investment
//! inward wire remittances as a two-page A4 PDF.
//!
//! ```no_run
//! use esop_declaration::{render, DeclarationRecord, RenderOptions};
//!
//! let record: DeclarationRecord = r#"{ "yourName": "Jane Doe", "purposes": ["P0021"] }"#.parse()?;
//! let rendered = render(&record, &RenderOptions::new())?;
//! std::fs::write(&rendered.file_name, &rendered.pdf)?;
//! # Ok::<(), esop_declaration::DeclarationError>(())
//! ```

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Layout primitives: fields, justification, wrapping, underlines, checkboxes and the
/// vertical cursor
pub mod layout;

/// The drawing capabilities layout needs, with a PDF and a recording implementation
pub mod surface;

/// The declaration itself
pub mod declaration;
pub use declaration::{
    assemble, file_name, render, DeclarationRecord, RenderOptions, RenderedDeclaration,
};

mod page;
pub use page::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
