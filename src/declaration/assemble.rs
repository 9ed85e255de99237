use super::page_one::{compose_first_page, SUBTITLE, TITLE};
use super::page_two::compose_second_page;
use super::record::DeclarationRecord;
use crate::font::Font;
use crate::info::Info;
use crate::surface::{DrawingSurface, PdfCanvas};
use crate::DeclarationError;
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;

/// What every generated file name starts with
pub const FILE_NAME_PREFIX: &str = "ESOP_Declaration";

/// Lay the whole declaration out onto `surface`: the first page script on the
/// surface's current page, then the second page script on a new one.
///
/// The second page's paragraphs may break onto further pages. Returns the file name
/// the document should be saved under, dated `date`.
pub fn assemble<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    record: &DeclarationRecord,
    date: NaiveDate,
) -> String {
    compose_first_page(surface, record);
    surface.new_page();
    compose_second_page(surface, record);
    file_name(record, date)
}

/// `ESOP_Declaration_<name>_<YYYY-MM-DD>.pdf`, where every run of whitespace in the
/// declarant's name becomes one underscore and a missing name reads `Blank`
pub fn file_name(record: &DeclarationRecord, date: NaiveDate) -> String {
    let name = match record.declarant() {
        Some(name) => name_segment(name),
        None => "Blank".to_string(),
    };
    format!("{FILE_NAME_PREFIX}_{name}_{}.pdf", date.format("%Y-%m-%d"))
}

fn name_segment(name: &str) -> String {
    let mut segment = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                segment.push('_');
            }
            in_whitespace = true;
        } else {
            segment.push(c);
            in_whitespace = false;
        }
    }
    segment
}

/// How a declaration is turned into a PDF
#[derive(Debug, Default, Clone)]
pub struct RenderOptions {
    /// TrueType font for regular text; must be given together with `bold_font`
    pub regular_font: Option<PathBuf>,
    /// TrueType font for bold text; must be given together with `regular_font`
    pub bold_font: Option<PathBuf>,
    /// Date for the file name instead of today's UTC date
    pub date: Option<NaiveDate>,
}

impl RenderOptions {
    pub fn new() -> RenderOptions {
        RenderOptions::default()
    }

    /// Typeset in the given TrueType pair instead of the built-in Helvetica
    pub fn fonts<P: Into<PathBuf>>(mut self, regular: P, bold: P) -> Self {
        self.regular_font = Some(regular.into());
        self.bold_font = Some(bold.into());
        self
    }

    /// Date the file name with `date`
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    fn file_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Utc::now().date_naive())
    }

    fn canvas(&self) -> Result<PdfCanvas, DeclarationError> {
        match (&self.regular_font, &self.bold_font) {
            (None, None) => Ok(PdfCanvas::helvetica()),
            (Some(regular), Some(bold)) => {
                log::info!("typesetting in {} and {}", regular.display(), bold.display());
                let regular = Font::load(std::fs::read(regular)?)?;
                let bold = Font::load(std::fs::read(bold)?)?;
                Ok(PdfCanvas::new(regular, bold))
            }
            _ => Err(DeclarationError::IncompleteFontPair),
        }
    }
}

/// A finished declaration, ready to be saved
#[derive(Debug, Clone)]
pub struct RenderedDeclaration {
    /// Suggested name to save the PDF under
    pub file_name: String,
    pub page_count: usize,
    /// The PDF file itself
    pub pdf: Vec<u8>,
}

/// Render a declaration to PDF
pub fn render(
    record: &DeclarationRecord,
    options: &RenderOptions,
) -> Result<RenderedDeclaration, DeclarationError> {
    let mut canvas = options.canvas()?;
    let file_name = assemble(&mut canvas, record, options.file_date());
    let page_count = canvas.page_count();

    let mut info = Info::new();
    info.title(TITLE).subject(SUBTITLE);
    if let Some(name) = record.declarant() {
        info.author(name);
    }
    for code in record.purposes.iter() {
        info.keyword(code);
    }

    let mut document = canvas.finish();
    document.set_info(info);

    let mut pdf = Vec::new();
    document.write(&mut pdf)?;
    log::info!("rendered {file_name}: {page_count} pages, {} bytes", pdf.len());

    Ok(RenderedDeclaration {
        file_name,
        page_count,
        pdf,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use pretty_assertions::assert_eq;

    fn named(name: &str) -> DeclarationRecord {
        DeclarationRecord {
            your_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date")
    }

    #[test]
    fn file_names_collapse_whitespace_runs() {
        assert_eq!(
            file_name(&named("Jane Doe"), date()),
            "ESOP_Declaration_Jane_Doe_2024-03-05.pdf"
        );
        assert_eq!(
            file_name(&named(" Jane \t  van  Doe "), date()),
            "ESOP_Declaration__Jane_van_Doe__2024-03-05.pdf"
        );
    }

    #[test]
    fn nameless_files_are_blank() {
        assert_eq!(
            file_name(&DeclarationRecord::default(), date()),
            "ESOP_Declaration_Blank_2024-03-05.pdf"
        );
        assert_eq!(
            file_name(&named(""), date()),
            "ESOP_Declaration_Blank_2024-03-05.pdf"
        );
    }

    #[test]
    fn assembles_two_pages() {
        let mut surface = RecordingSurface::new();
        let name = assemble(&mut surface, &named("Jane Doe"), date());
        assert_eq!(name, "ESOP_Declaration_Jane_Doe_2024-03-05.pdf");
        assert_eq!(surface.page_count(), 2);
    }

    #[test]
    fn half_a_font_pair_is_an_error() {
        let options = RenderOptions {
            regular_font: Some("Regular.ttf".into()),
            ..Default::default()
        };
        let result = render(&DeclarationRecord::default(), &options);
        assert!(matches!(result, Err(DeclarationError::IncompleteFontPair)));
    }

    #[test]
    fn missing_font_files_are_io_errors() {
        let options = RenderOptions::new().fonts("/nonexistent/Regular.ttf", "/nonexistent/Bold.ttf");
        let result = render(&DeclarationRecord::default(), &options);
        assert!(matches!(result, Err(DeclarationError::Io(_))));
    }
}
