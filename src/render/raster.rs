use crate::dimensions::Unit;
use crate::dimensions::units::{FontSize, Px};
use crate::font::common::{GlyphId, ResolvedGlyph};
use super::{Cursor, GlyphSink, Payload};

/// A glyph placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterGlyph {
    /// column of the left edge of the glyph's origin
    pub x : i64,
    /// row of the top of the glyph's ink
    pub y : i64,
    /// the font file, cf [`FontFile::identity`](crate::font::common::FontFile::identity)
    pub font : String,
    /// the glyph to rasterize
    pub glyph : GlyphId,
    /// the character the glyph stands for
    pub codepoint : char,
    /// size to rasterize the glyph at
    pub size : Unit<FontSize>,
}

/// A canvas of whole pixels and what should be drawn on it, with rows counted downwards from the top.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RasterCanvas {
    /// number of columns
    pub width : u32,
    /// number of rows
    pub height : u32,
    /// glyphs in drawing order
    pub glyphs : Vec<RasterGlyph>,
}

/// Records glyph placements for a rasterizer.
///
/// The layout's Y axis points upwards while rows are counted downwards, so a glyph whose origin is at `(ox, oy)`
/// has the top of its ink at row `height - oy - ymax`. Coordinates are truncated to whole pixels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RasterSink {
    height : Unit<Px>,
    canvas : RasterCanvas,
}

fn truncate(x : Unit<Px>) -> i64 {
    x.to_unitless().trunc() as i64
}

impl GlyphSink for RasterSink {
    fn set_canvas_size(&mut self, width : Unit<Px>, height : Unit<Px>) {
        self.height = height;
        // `as` saturates: negative sizes give an empty canvas
        self.canvas.width  = width.to_unitless() as u32;
        self.canvas.height = height.to_unitless() as u32;
    }

    fn draw(&mut self, pos : Cursor, glyph : &ResolvedGlyph, size : Unit<FontSize>) {
        self.canvas.glyphs.push(RasterGlyph {
            x : truncate(pos.x),
            y : truncate(self.height - pos.y - glyph.metrics.bbox.y_max),
            font : glyph.file.identity(),
            glyph : glyph.glyph.gid,
            codepoint : glyph.codepoint,
            size,
        });
    }

    fn finish(&mut self) -> Payload {
        self.height = Unit::ZERO;
        Payload::Raster(std::mem::take(&mut self.canvas))
    }
}
