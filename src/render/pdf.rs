use crate::dimensions::Unit;
use crate::dimensions::units::{FontSize, Px};
use crate::font::common::{GlyphId, ResolvedGlyph};
use super::{Cursor, GlyphSink, Payload};

/// A glyph of PDF output. The PDF writer embeds the font file and shows the glyph by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfGlyph {
    /// x-coordinate of the glyph origin
    pub x : Unit<Px>,
    /// y-coordinate of the glyph origin, Y upwards
    pub y : Unit<Px>,
    /// the font file, cf [`FontFile::identity`](crate::font::common::FontFile::identity)
    pub font : String,
    /// font size
    pub size : Unit<FontSize>,
    /// index of the glyph in the font
    pub glyph : GlyphId,
}

/// Collects [`PdfGlyph`]s
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfSink {
    glyphs : Vec<PdfGlyph>,
}

impl GlyphSink for PdfSink {
    fn set_canvas_size(&mut self, _width : Unit<Px>, _height : Unit<Px>) {}

    fn draw(&mut self, pos : Cursor, glyph : &ResolvedGlyph, size : Unit<FontSize>) {
        self.glyphs.push(PdfGlyph {
            x : pos.x,
            y : pos.y,
            font : glyph.file.identity(),
            size,
            glyph : glyph.glyph.gid,
        });
    }

    fn finish(&mut self) -> Payload {
        Payload::Pdf(std::mem::take(&mut self.glyphs))
    }
}
