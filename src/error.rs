use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum DeclarationError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse a configured font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("malformed declaration record: {0}")]
    /// The declaration record could not be deserialized
    Json(#[from] serde_json::Error),

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    /// A date supplied as configuration (not as form content) could not be parsed
    InvalidDate(String),

    #[error("font {0:?} has no unicode cmap table")]
    /// An embedded font cannot map characters to glyphs at all
    MissingCmap(String),

    #[error("font cannot encode {0:?} and has no '?' glyph to fall back on")]
    /// An embedded font has no usable fallback glyph
    MissingGlyph(char),

    #[error("a regular and a bold font must be configured together")]
    /// Only one half of the embedded font pair was configured
    IncompleteFontPair,
}
