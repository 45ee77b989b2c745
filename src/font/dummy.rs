use crate::dimensions::Unit;
use crate::dimensions::units::{Dpi, FontSize, Px};
use crate::error::FontResult;
use crate::parser::symbols::SymbolKey;
use crate::render::{Cursor, GlyphSink, OutputKind, OutputSink, Payload};
use super::{FontFace, FontMetricsProvider, GlyphMetrics, UsedGlyphs};

/// Every glyph measures zero and nothing gets drawn ; the payload is an empty one of the requested kind.
///
/// Layout through this provider only places spaces, which makes it handy to look at what the parser
/// and the layout tree do without any font around.
#[derive(Debug, Clone, PartialEq)]
pub struct DummyProvider {
    sink : OutputSink,
}

impl DummyProvider {
    /// A provider whose payload is of kind `output`
    pub fn new(output : OutputKind) -> Self {
        Self { sink : OutputSink::new(output) }
    }
}

impl FontMetricsProvider for DummyProvider {
    fn metrics(&mut self, _face : FontFace, _symbol : &SymbolKey, _size : Unit<FontSize>, _dpi : Unit<Dpi>) -> FontResult<GlyphMetrics> {
        Ok(GlyphMetrics::ZERO)
    }

    fn render(&mut self, _pos : Cursor, _face : FontFace, _symbol : &SymbolKey, _size : Unit<FontSize>, _dpi : Unit<Dpi>) -> FontResult<()> {
        Ok(())
    }

    fn set_canvas_size(&mut self, width : Unit<Px>, height : Unit<Px>) {
        self.sink.set_canvas_size(width, height)
    }

    fn used_glyphs(&self) -> UsedGlyphs {
        UsedGlyphs::new()
    }

    fn finish(&mut self) -> Payload {
        self.sink.finish()
    }
}
