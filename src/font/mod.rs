//! Fonts the declaration can be typeset in.
//!
//! By default the document uses the built-in Helvetica pair, which needs no font
//! files and is what the form has always been printed in. A TrueType regular/bold
//! pair can be configured instead (for names outside Latin-1, say); those are
//! embedded in their entirety as CID-keyed fonts.

mod standard;
pub use standard::*;

use crate::{
    refs::{ObjectReferences, RefType},
    units::Pt,
    DeclarationError,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Rect, Ref, Str,
};
use std::collections::BTreeMap;

/// The two weights the form is set in
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
}

/// A font that can be measured and written into the PDF
pub enum Font {
    /// One of the standard PDF fonts, referenced by name only
    Standard(StandardFont),
    /// A parsed TrueType / OpenType face, embedded in full
    TrueType(OwnedFace),
}

impl Font {
    /// Load a TrueType font from raw bytes, returning an error if the font could not be
    /// parsed or cannot encode text at all
    pub fn load(bytes: Vec<u8>) -> Result<Font, DeclarationError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        let font = Font::TrueType(face);

        if let Font::TrueType(face) = &font {
            if face.as_face_ref().tables().cmap.is_none() {
                return Err(DeclarationError::MissingCmap(font.name()));
            }
            if face.as_face_ref().glyph_index('?').is_none() {
                return Err(DeclarationError::MissingGlyph('?'));
            }
        }

        Ok(font)
    }

    /// The PostScript name of the font, used for `BaseFont`
    pub fn name(&self) -> String {
        match self {
            Font::Standard(standard) => standard.pdf_name().to_string(),
            Font::TrueType(face) => face
                .as_face_ref()
                .names()
                .into_iter()
                .find(|name| {
                    name.name_id == owned_ttf_parser::name_id::POST_SCRIPT_NAME
                        && name.is_unicode()
                })
                .and_then(|name| name.to_string())
                .unwrap_or_else(|| "EmbeddedFont".to_string()),
        }
    }

    /// Calculate the width of a given string of text given the font size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        match self {
            Font::Standard(standard) => standard.width_of_text(text, size),
            Font::TrueType(face) => {
                let face = face.as_face_ref();
                let scaling = size / face.units_per_em() as f32;
                text.chars()
                    .map(|ch| {
                        let gid = face.glyph_index(ch).or_else(|| face.glyph_index('?'));
                        let advance = gid
                            .and_then(|gid| face.glyph_hor_advance(gid))
                            .unwrap_or_default();
                        scaling * advance as f32
                    })
                    .sum()
            }
        }
    }

    /// Encode text into the bytes a `Tj` operator expects for this font: WinAnsi
    /// codes for standard fonts, big-endian glyph ids for embedded ones
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Font::Standard(standard) => standard.encode(text),
            Font::TrueType(face) => {
                let face = face.as_face_ref();
                let fallback = face.glyph_index('?').map(|g| g.0).unwrap_or_default();
                let mut bytes = Vec::with_capacity(text.len() * 2);
                for ch in text.chars() {
                    let gid = face.glyph_index(ch).map(|g| g.0).unwrap_or_else(|| {
                        log::warn!("embedded font has no glyph for {ch:?}, substituting '?'");
                        fallback
                    });
                    bytes.extend_from_slice(&gid.to_be_bytes());
                }
                bytes
            }
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let font_id = refs.gen(RefType::Font(font_index));

        match self {
            Font::Standard(standard) => {
                writer
                    .type1_font(font_id)
                    .base_font(Name(standard.pdf_name().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            Font::TrueType(face) => {
                let glyphs = glyph_map(face);
                let cid_font_id = write_cid(face, &self.name(), &glyphs, refs, font_index, writer);
                let to_unicode_id = write_to_unicode(&glyphs, refs, font_index, writer);

                let mut font = writer.type0_font(font_id);
                font.base_font(Name(self.name().as_bytes()));
                font.encoding_predefined(Name(b"Identity-H"));
                font.descendant_font(cid_font_id);
                font.to_unicode(to_unicode_id);
            }
        }
    }
}

/// Every glyph reachable through a unicode cmap subtable, with the first character
/// that maps onto it
fn glyph_map(face: &OwnedFace) -> BTreeMap<u16, char> {
    let mut map: BTreeMap<u16, char> = BTreeMap::new();
    let Some(cmap) = face.as_face_ref().tables().cmap else {
        return map;
    };

    for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
        subtable.codepoints(|codepoint: u32| {
            if let Ok(ch) = char::try_from(codepoint) {
                if let Some(gid) = subtable.glyph_index(codepoint).filter(|gid| gid.0 > 0) {
                    map.entry(gid.0).or_insert(ch);
                }
            }
        });
    }

    map
}

fn write_cid(
    face: &OwnedFace,
    name: &str,
    glyphs: &BTreeMap<u16, char>,
    refs: &mut ObjectReferences,
    font_index: usize,
    writer: &mut Pdf,
) -> Ref {
    let descriptor_id = write_descriptor(face, name, refs, font_index, writer);
    let id = refs.gen(RefType::CidFont(font_index));

    let face_ref = face.as_face_ref();
    let scaling = 1000.0 / face_ref.units_per_em() as f32;
    let width_of = |gid: u16| {
        face_ref
            .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
            .unwrap_or_default() as f32
            * scaling
    };

    let mut cid_font = writer.cid_font(id);
    cid_font.subtype(CidFontType::Type2);
    cid_font.base_font(Name(name.as_bytes()));
    cid_font.system_info(SystemInfo {
        registry: Str(b"Adobe"),
        ordering: Str(b"Identity"),
        supplement: 0,
    });
    cid_font.font_descriptor(descriptor_id);
    cid_font.default_width(width_of(0));

    // glyph ids are sorted, so runs of consecutive ids share one width array
    let mut widths = cid_font.widths();
    let mut run_start: Option<u16> = None;
    let mut run: Vec<f32> = Vec::new();
    for &gid in glyphs.keys() {
        match run_start {
            Some(start) if start as usize + run.len() == gid as usize => run.push(width_of(gid)),
            Some(start) => {
                widths.consecutive(start, run.drain(..));
                run_start = Some(gid);
                run.push(width_of(gid));
            }
            None => {
                run_start = Some(gid);
                run.push(width_of(gid));
            }
        }
    }
    if let Some(start) = run_start {
        widths.consecutive(start, run.drain(..));
    }
    widths.finish();

    cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

    id
}

fn write_descriptor(
    face: &OwnedFace,
    name: &str,
    refs: &mut ObjectReferences,
    font_index: usize,
    writer: &mut Pdf,
) -> Ref {
    let data_id = refs.gen(RefType::FontData(font_index));
    writer
        .stream(data_id, face.as_slice())
        .pair(Name(b"Length1"), face.as_slice().len() as i32);

    let face_ref = face.as_face_ref();
    let scaling = 1000.0 / face_ref.units_per_em() as f32;
    let bbox = face_ref.global_bounding_box();

    let mut flags = FontFlags::NON_SYMBOLIC;
    if face_ref.is_monospaced() {
        flags.set(FontFlags::FIXED_PITCH, true);
    }
    if face_ref.is_italic() {
        flags.set(FontFlags::ITALIC, true);
    }

    let id = refs.gen(RefType::FontDescriptor(font_index));
    let mut descriptor = writer.font_descriptor(id);
    descriptor.name(Name(name.as_bytes()));
    descriptor.flags(flags);
    descriptor.bbox(Rect {
        x1: bbox.x_min as f32 * scaling,
        y1: bbox.y_min as f32 * scaling,
        x2: bbox.x_max as f32 * scaling,
        y2: bbox.y_max as f32 * scaling,
    });
    descriptor.italic_angle(0.0);
    descriptor.ascent(face_ref.ascender() as f32 * scaling);
    descriptor.descent(face_ref.descender() as f32 * scaling);
    descriptor.cap_height(
        face_ref
            .capital_height()
            .unwrap_or_else(|| face_ref.ascender()) as f32
            * scaling,
    );
    // TODO: derive the stem width from the OS/2 weight class instead of a fixed guess
    descriptor.stem_v(80.0);
    descriptor.font_file2(data_id);

    id
}

fn write_to_unicode(
    glyphs: &BTreeMap<u16, char>,
    refs: &mut ObjectReferences,
    font_index: usize,
    writer: &mut Pdf,
) -> Ref {
    let id = refs.gen(RefType::ToUnicode(font_index));

    let mut map = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n\
         <0000> <FFFF>\n\
         endcodespacerange\n",
    );

    // bfchar blocks hold at most 100 entries
    let entries: Vec<(&u16, &char)> = glyphs.iter().collect();
    for block in entries.chunks(100) {
        map.push_str(&format!("{} beginbfchar\n", block.len()));
        for (gid, ch) in block {
            let mut utf16 = [0u16; 2];
            let units: String = ch
                .encode_utf16(&mut utf16)
                .iter()
                .map(|unit| format!("{unit:04x}"))
                .collect();
            map.push_str(&format!("<{gid:04x}> <{units}>\n"));
        }
        map.push_str("endbfchar\n");
    }
    map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
        map.as_bytes(),
        miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
    );
    writer
        .stream(id, compressed.as_slice())
        .filter(Filter::FlateDecode);

    id
}

impl From<StandardFont> for Font {
    fn from(standard: StandardFont) -> Font {
        Font::Standard(standard)
    }
}
