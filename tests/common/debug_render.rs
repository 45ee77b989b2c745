use mathtext::dimensions::Unit;
use mathtext::dimensions::units::{Dpi, FontSize, Px};
use mathtext::error::FontResult;
use mathtext::font::{FontFace, FontMetricsProvider, FontSource, GlyphMetrics, UsedGlyphs};
use mathtext::font::common::GlyphCache;
use mathtext::parser::symbols::SymbolKey;
use mathtext::render::{Cursor, Payload};

/// A drawn symbol, with coordinates rounded to 1/1000 px so that records compare exactly
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    pub symbol : String,
    pub face   : FontFace,
    pub pos    : (f64, f64),
    pub size   : f64,
}

fn round(x : f64) -> f64 {
    (x * 1000.).round() / 1000.
}

/// Records what the layout draws, measuring glyphs with a [`GlyphCache`]
pub struct DebugRender<S> {
    cache : GlyphCache<S>,
    pub canvas : (f64, f64),
    pub commands : Vec<DrawCmd>,
}

impl<S : FontSource> DebugRender<S> {
    pub fn new(source : S) -> Self {
        Self { cache : GlyphCache::new(source), canvas : (0., 0.), commands : Vec::new() }
    }

    /// Commands of the symbols, i.e. without the spaces of text runs
    pub fn visible(&self) -> Vec<&DrawCmd> {
        self.commands.iter().filter(|command| command.symbol != " ").collect()
    }
}

impl<S : FontSource> FontMetricsProvider for DebugRender<S> {
    fn metrics(&mut self, face : FontFace, symbol : &SymbolKey, size : Unit<FontSize>, dpi : Unit<Dpi>) -> FontResult<GlyphMetrics> {
        self.cache.metrics(face, symbol, size, dpi)
    }

    fn kerning(&mut self, face : FontFace, left : &SymbolKey, right : &SymbolKey, size : Unit<FontSize>, dpi : Unit<Dpi>) -> FontResult<Unit<Px>> {
        self.cache.kerning(face, left, right, size, dpi)
    }

    fn render(&mut self, pos : Cursor, face : FontFace, symbol : &SymbolKey, size : Unit<FontSize>, dpi : Unit<Dpi>) -> FontResult<()> {
        self.cache.resolve_for_drawing(face, symbol, size, dpi)?;
        self.commands.push(DrawCmd {
            symbol : symbol.to_string(),
            face,
            pos  : (round(pos.x.to_unitless()), round(pos.y.to_unitless())),
            size : round(size.to_unitless()),
        });
        Ok(())
    }

    fn set_canvas_size(&mut self, width : Unit<Px>, height : Unit<Px>) {
        self.canvas = (width.to_unitless(), height.to_unitless());
    }

    fn used_glyphs(&self) -> UsedGlyphs {
        self.cache.used_glyphs().clone()
    }

    fn finish(&mut self) -> Payload {
        self.cache.take_used_glyphs();
        Payload::Svg(Vec::new())
    }
}
