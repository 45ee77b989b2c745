
use crate::dimensions::Unit;
use crate::dimensions::units::{FontSize, Px};
use crate::font::common::ResolvedGlyph;
use super::{Cursor, GlyphSink, Payload};

/// Writes one `findfont`/`glyphshow` block per glyph:
///
/// ```text
/// /DejaVuSerif findfont
/// 12 scalefont
/// setfont
/// 3.000000 4.500000 moveto
/// /x glyphshow
/// ```
///
/// Glyphs are named by their PostScript name, or `uniXXXX` if the font has no name for them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostScriptSink {
    text : String,
}

/// How PostScript output refers to a glyph
pub fn glyph_name(glyph : &ResolvedGlyph) -> String {
    match glyph.glyph.name {
        Some(ref name) if !name.is_empty() => name.clone(),
        _ => {
            warn!("glyph for {:?} in {} has no PostScript name", glyph.codepoint, glyph.file.postscript_name);
            format!("uni{:04X}", glyph.codepoint as u32)
        },
    }
}

impl GlyphSink for PostScriptSink {
    fn set_canvas_size(&mut self, _width : Unit<Px>, _height : Unit<Px>) {}

    fn draw(&mut self, pos : Cursor, glyph : &ResolvedGlyph, size : Unit<FontSize>) {
        self.text.push_str(&format!(
            "/{font} findfont\n{size} scalefont\nsetfont\n{x:.6} {y:.6} moveto\n/{glyph} glyphshow\n",
            font  = glyph.file.postscript_name,
            size  = size,
            x     = pos.x.to_unitless(),
            y     = pos.y.to_unitless(),
            glyph = glyph_name(glyph),
        ));
    }

    fn finish(&mut self) -> Payload {
        Payload::PostScript(std::mem::take(&mut self.text))
    }
}
