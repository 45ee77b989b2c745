//! Turning a laid out formula into an output payload.
//!
//! The layout engine draws through a [`FontMetricsProvider`]. The provider of this crate, [`GlyphProvider`], resolves
//! glyphs with a [`GlyphCache`] and hands every drawn glyph to a [`GlyphSink`]. There is one sink per [`OutputKind`]:
//!
//!  - [`raster::RasterSink`]: glyph placements on a pixel canvas, Y downwards.
//!  - [`postscript::PostScriptSink`]: PostScript operators that select fonts and show glyphs.
//!  - [`svg::SvgSink`]: a list of glyphs with their family and metrics.
//!  - [`pdf::PdfSink`]: a list of glyphs with the font file and glyph index.
//!
//! The [`driver::MathTextRenderer`] ties everything together and caches the results.

/// Glyph placements on a pixel canvas
#[deny(missing_docs)]
pub mod raster;
/// PostScript operator text
#[deny(missing_docs)]
pub mod postscript;
/// Glyph list for SVG output
#[deny(missing_docs)]
pub mod svg;
/// Glyph list for PDF output
#[deny(missing_docs)]
pub mod pdf;
/// Cache of rendered formulas and its eviction policies
#[deny(missing_docs)]
pub mod cache;
/// The renderer: parse, lay out, measure, draw, cache.
#[deny(missing_docs)]
pub mod driver;

use std::fmt;

use crate::dimensions::Unit;
use crate::dimensions::units::{Dpi, FontSize, Px};
use crate::error::FontResult;
use crate::font::common::{GlyphCache, ResolvedGlyph};
use crate::font::dummy::DummyProvider;
use crate::font::{FontDescription, FontFace, FontLocator, FontMetricsProvider, FontSource, GlyphMetrics, UsedGlyphs};
use crate::parser::symbols::SymbolKey;

use self::pdf::{PdfGlyph, PdfSink};
use self::postscript::PostScriptSink;
use self::raster::{RasterCanvas, RasterSink};
use self::svg::{SvgGlyph, SvgSink};

/// A position on the canvas, in device pixels, Y upwards from the bottom of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cursor {
    /// x-coordinate
    pub x: Unit<Px>,
    /// y-coordinate (NB: `cursor1.y` < `cursor2.y` means `cursor1` is below `cursor2` on the canvas)
    pub y: Unit<Px>,
}

impl Cursor {
    /// Creates a cursor at `(x, y)`
    pub fn new(x : Unit<Px>, y : Unit<Px>) -> Cursor {
        Cursor { x, y }
    }

    /// Adds `dx` and `dy` to the x- and y- coordinates resp. of the cursor
    pub fn translate(self, dx: Unit<Px>, dy: Unit<Px>) -> Cursor {
        Cursor {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Moves cursor by `dx` in the direction +X
    pub fn right(self, dx: Unit<Px>) -> Cursor {
        self.translate(dx, Unit::ZERO)
    }

    /// Moves cursor by `dy` in the direction +Y
    pub fn up(self, dy: Unit<Px>) -> Cursor {
        self.translate(Unit::ZERO, dy)
    }
}


/// The output formats a formula can be rendered to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// glyph placements on a pixel canvas
    Raster,
    /// PostScript operators
    PostScript,
    /// glyph list for SVG
    Svg,
    /// glyph list for PDF
    Pdf,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputKind::Raster     => "raster",
            OutputKind::PostScript => "postscript",
            OutputKind::Svg        => "svg",
            OutputKind::Pdf        => "pdf",
        })
    }
}

/// What a rendered formula looks like for each [`OutputKind`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// cf [`raster::RasterSink`]
    Raster(RasterCanvas),
    /// cf [`postscript::PostScriptSink`]
    PostScript(String),
    /// cf [`svg::SvgSink`]
    Svg(Vec<SvgGlyph>),
    /// cf [`pdf::PdfSink`]
    Pdf(Vec<PdfGlyph>),
}

impl Payload {
    /// The kind of output this payload is for
    pub fn kind(&self) -> OutputKind {
        match self {
            Payload::Raster(_)     => OutputKind::Raster,
            Payload::PostScript(_) => OutputKind::PostScript,
            Payload::Svg(_)        => OutputKind::Svg,
            Payload::Pdf(_)        => OutputKind::Pdf,
        }
    }
}

/// A rendered formula
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// width of the canvas, ink plus margins
    pub width : Unit<Px>,
    /// height of the canvas, ink plus margins
    pub height : Unit<Px>,
    /// the drawn glyphs
    pub payload : Payload,
    /// for each font file, the characters drawn from it
    pub used_glyphs : UsedGlyphs,
}


/// Receives the glyphs of a formula, in drawing order, and builds an output payload from them.
pub trait GlyphSink {
    /// Dimensions the canvas ; called once before any glyph is drawn.
    fn set_canvas_size(&mut self, width : Unit<Px>, height : Unit<Px>);
    /// Records `glyph`, drawn at `size` with its origin at `pos`.
    fn draw(&mut self, pos : Cursor, glyph : &ResolvedGlyph, size : Unit<FontSize>);
    /// Hands over the payload, leaving the sink empty.
    fn finish(&mut self) -> Payload;
}

/// The sink of each [`OutputKind`], chosen at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum OutputSink {
    /// cf [`raster::RasterSink`]
    Raster(RasterSink),
    /// cf [`postscript::PostScriptSink`]
    PostScript(PostScriptSink),
    /// cf [`svg::SvgSink`]
    Svg(SvgSink),
    /// cf [`pdf::PdfSink`]
    Pdf(PdfSink),
}

impl OutputSink {
    /// An empty sink for `kind`
    pub fn new(kind : OutputKind) -> Self {
        match kind {
            OutputKind::Raster     => OutputSink::Raster(RasterSink::default()),
            OutputKind::PostScript => OutputSink::PostScript(PostScriptSink::default()),
            OutputKind::Svg        => OutputSink::Svg(SvgSink::default()),
            OutputKind::Pdf        => OutputSink::Pdf(PdfSink::default()),
        }
    }

    fn as_sink(&mut self) -> &mut dyn GlyphSink {
        match self {
            OutputSink::Raster(sink)     => sink,
            OutputSink::PostScript(sink) => sink,
            OutputSink::Svg(sink)        => sink,
            OutputSink::Pdf(sink)        => sink,
        }
    }
}

impl GlyphSink for OutputSink {
    fn set_canvas_size(&mut self, width : Unit<Px>, height : Unit<Px>) {
        self.as_sink().set_canvas_size(width, height)
    }

    fn draw(&mut self, pos : Cursor, glyph : &ResolvedGlyph, size : Unit<FontSize>) {
        self.as_sink().draw(pos, glyph, size)
    }

    fn finish(&mut self) -> Payload {
        self.as_sink().finish()
    }
}


/// The font metrics provider of this crate: glyphs come from a [`FontSource`], drawing goes to a [`GlyphSink`].
pub struct GlyphProvider<S, K = OutputSink> {
    cache : GlyphCache<S>,
    sink : K,
}

impl<S : FontSource, K : GlyphSink> GlyphProvider<S, K> {
    /// Creates a provider drawing glyphs of `source` into `sink`
    pub fn new(source : S, sink : K) -> Self {
        Self { cache : GlyphCache::new(source), sink }
    }

    /// The glyph cache, e.g. to inspect the font source
    pub fn glyph_cache(&self) -> &GlyphCache<S> {
        &self.cache
    }
}

impl<S : FontSource, K : GlyphSink> FontMetricsProvider for GlyphProvider<S, K> {
    fn metrics(&mut self, face : FontFace, symbol : &SymbolKey, size : Unit<FontSize>, dpi : Unit<Dpi>) -> FontResult<GlyphMetrics> {
        self.cache.metrics(face, symbol, size, dpi)
    }

    fn kerning(&mut self, face : FontFace, left : &SymbolKey, right : &SymbolKey, size : Unit<FontSize>, dpi : Unit<Dpi>) -> FontResult<Unit<Px>> {
        self.cache.kerning(face, left, right, size, dpi)
    }

    fn render(&mut self, pos : Cursor, face : FontFace, symbol : &SymbolKey, size : Unit<FontSize>, dpi : Unit<Dpi>) -> FontResult<()> {
        let glyph = self.cache.resolve_for_drawing(face, symbol, size, dpi)?;
        self.sink.draw(pos, glyph, size);
        Ok(())
    }

    fn set_canvas_size(&mut self, width : Unit<Px>, height : Unit<Px>) {
        self.sink.set_canvas_size(width, height)
    }

    fn used_glyphs(&self) -> UsedGlyphs {
        self.cache.used_glyphs().clone()
    }

    fn finish(&mut self) -> Payload {
        self.cache.take_used_glyphs();
        self.sink.finish()
    }
}


/// Creates the provider that renders one formula.
pub trait ProviderFactory {
    /// The provider created
    type Provider : FontMetricsProvider;

    /// A fresh provider drawing to `output` with the fonts matching `font`
    fn bind(&self, output : OutputKind, font : &FontDescription) -> FontResult<Self::Provider>;
}

/// Creates [`GlyphProvider`]s over the fonts found by a [`FontLocator`]
#[derive(Debug, Clone)]
pub struct FontProviders<L> {
    locator : L,
}

impl<L : FontLocator> FontProviders<L> {
    /// Providers over the fonts of `locator`
    pub fn new(locator : L) -> Self {
        Self { locator }
    }
}

impl<L : FontLocator> ProviderFactory for FontProviders<L> {
    type Provider = GlyphProvider<L::Source>;

    fn bind(&self, output : OutputKind, font : &FontDescription) -> FontResult<Self::Provider> {
        let source = self.locator.locate(font)?;
        Ok(GlyphProvider::new(source, OutputSink::new(output)))
    }
}

/// Creates [`DummyProvider`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyFactory;

impl ProviderFactory for DummyFactory {
    type Provider = DummyProvider;

    fn bind(&self, output : OutputKind, _font : &FontDescription) -> FontResult<Self::Provider> {
        Ok(DummyProvider::new(output))
    }
}


/// Glyphs to feed the sinks in tests
#[cfg(test)]
pub(crate) mod testing {
    use crate::dimensions::Unit;
    use crate::font::GlyphMetrics;
    use crate::font::common::{FontFile, Glyph, GlyphId, ResolvedGlyph};
    use crate::geometry::BBox;

    /// A glyph 6px wide, from y = -1 to `y_max`, of a font with 100 units per pixel
    pub fn glyph(codepoint : char, y_max : f64) -> ResolvedGlyph {
        let bbox = BBox::new(Unit::ZERO, Unit::new(-1.), Unit::new(6.), Unit::new(y_max));
        ResolvedGlyph {
            file : FontFile { postscript_name: "Test-Roman".into(), family_name: "Test".into(), path: None },
            codepoint,
            glyph : Glyph { gid: GlyphId(7), name: Some("x".into()), advance: Unit::new(600.), bbox: BBox::new(Unit::ZERO, Unit::new(-100.), Unit::new(600.), Unit::new(y_max * 100.)) },
            metrics : GlyphMetrics { advance: Unit::new(6.), width: bbox.width(), height: bbox.total_height(), bbox },
            scale : Unit::new(0.01),
        }
    }
}
