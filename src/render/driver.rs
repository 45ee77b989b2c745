use std::rc::Rc;

use crate::dimensions::Unit;
use crate::dimensions::units::{Dpi, Px};
use crate::error::Error;
use crate::font::{FontDescription, FontFace, FontMetricsProvider};
use crate::geometry::BBox;
use crate::layout::LayoutTree;
use crate::layout::constants::CANVAS_MARGIN;
use crate::parser::parse;
use super::cache::{CacheKey, EvictionPolicy, RenderCache, Unbounded};
use super::{OutputKind, ProviderFactory, RenderOutput};

/// Renders formulas to one [`OutputKind`], caching the results.
///
/// ```
/// use mathtext::render::{DummyFactory, OutputKind, Payload};
/// use mathtext::render::driver::MathTextRenderer;
/// use mathtext::font::FontDescription;
///
/// let mut renderer = MathTextRenderer::new(DummyFactory, OutputKind::PostScript);
/// let output = renderer.render(r"$x\hspace{1}y$", 72., &FontDescription::default(), 0.).unwrap();
/// assert_eq!(output.payload, Payload::PostScript(String::new()));
/// assert_eq!(output.width.to_unitless(), 12. + 2.);
/// ```
pub struct MathTextRenderer<F, P = Unbounded> {
    factory : F,
    output : OutputKind,
    cache : RenderCache<P>,
}

impl<F : ProviderFactory> MathTextRenderer<F, Unbounded> {
    /// A renderer that keeps every formula it renders
    pub fn new(factory : F, output : OutputKind) -> Self {
        Self::with_eviction_policy(factory, output, Unbounded)
    }
}

impl<F : ProviderFactory, P : EvictionPolicy> MathTextRenderer<F, P> {
    /// A renderer whose cache is bounded by `policy`
    pub fn with_eviction_policy(factory : F, output : OutputKind, policy : P) -> Self {
        Self {
            factory,
            output,
            cache : RenderCache::new(policy),
        }
    }

    /// The kind of output produced
    pub fn output_kind(&self) -> OutputKind {
        self.output
    }

    /// The formulas rendered so far
    pub fn cache(&self) -> &RenderCache<P> {
        &self.cache
    }

    /// Renders `text` at `dpi` with `font`.
    ///
    /// The canvas is the ink of the formula plus a margin of [`CANVAS_MARGIN`]. The `angle` only distinguishes cache
    /// entries: rotating the output is up to the caller. Rendering the same formula twice returns the same output.
    pub fn render(&mut self, text : &str, dpi : f64, font : &FontDescription, angle : f64) -> Result<Rc<RenderOutput>, Error> {
        let dpi : Unit<Dpi> = Unit::new(dpi);
        let key = CacheKey::new(text, dpi, font, angle);
        if let Some(output) = self.cache.get(&key) {
            debug!("cache hit for {:?}", text);
            return Ok(output);
        }
        debug!("cache miss for {:?}, rendering to {}", text, self.output);

        let mut provider = self.factory.bind(self.output, font)?;
        let output = Rc::new(layout_and_render(&mut provider, text, dpi, font)?);
        self.cache.insert(key, output.clone());
        Ok(output)
    }
}

/// Lays `text` out and draws it through `provider`, on a canvas fitted to its ink.
pub fn layout_and_render<P>(provider : &mut P, text : &str, dpi : Unit<Dpi>, font : &FontDescription) -> Result<RenderOutput, Error>
where P : FontMetricsProvider + ?Sized
{
    let mut tree = LayoutTree::from_syntax(&parse(text)?);
    tree.determine_font(FontFace::Default);
    tree.set_size_info(provider, font.size, dpi)?;

    tree.set_origin(Unit::ZERO, Unit::ZERO);
    let ink : BBox<Px> = tree.ink_bbox().unwrap_or_else(|| BBox::single_point(Unit::ZERO, Unit::ZERO));
    let width  = ink.width() + CANVAS_MARGIN;
    let height = ink.total_height() + CANVAS_MARGIN;
    debug!("canvas of {:?} is {} x {}", text, width, height);

    tree.set_origin(Unit::ZERO, height - ink.y_max);
    provider.set_canvas_size(width, height);
    tree.render(provider)?;

    let used_glyphs = provider.used_glyphs();
    let payload = provider.finish();
    Ok(RenderOutput { width, height, payload, used_glyphs })
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::MathTextRenderer;
    use crate::error::{Error, FontResult};
    use crate::font::FontDescription;
    use crate::font::dummy::DummyProvider;
    use crate::parser::error::ParseErrorKind;
    use crate::render::cache::MaxEntries;
    use crate::render::{OutputKind, Payload, ProviderFactory};

    /// Counts how many providers get bound, i.e. how many formulas are actually rendered
    #[derive(Default)]
    struct Counting {
        binds : Rc<Cell<usize>>,
    }

    impl ProviderFactory for Counting {
        type Provider = DummyProvider;

        fn bind(&self, output : OutputKind, _font : &FontDescription) -> FontResult<DummyProvider> {
            self.binds.set(self.binds.get() + 1);
            Ok(DummyProvider::new(output))
        }
    }

    #[test]
    fn cache_hits() {
        let factory = Counting::default();
        let binds = factory.binds.clone();
        let mut renderer = MathTextRenderer::new(factory, OutputKind::Raster);
        let font = FontDescription::default();

        let first = renderer.render("$x^2$", 100., &font, 0.).unwrap();
        let second = renderer.render("$x^2$", 100., &font, 0.).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(binds.get(), 1);

        renderer.render("$x^2$", 100., &font, 90.).unwrap();
        renderer.render("$x^2$", 200., &font, 0.).unwrap();
        let mut bigger = font.clone();
        bigger.size = crate::dimensions::Unit::new(20.);
        renderer.render("$x^2$", 100., &bigger, 0.).unwrap();
        assert_eq!(binds.get(), 4);
        assert_eq!(renderer.cache().len(), 4);
    }

    #[test]
    fn bounded_cache() {
        let factory = Counting::default();
        let binds = factory.binds.clone();
        let mut renderer = MathTextRenderer::with_eviction_policy(factory, OutputKind::Svg, MaxEntries(1));
        let font = FontDescription::default();

        renderer.render("a", 72., &font, 0.).unwrap();
        renderer.render("b", 72., &font, 0.).unwrap();
        renderer.render("a", 72., &font, 0.).unwrap();
        assert_eq!(binds.get(), 3);
        assert_eq!(renderer.cache().len(), 1);
    }

    #[test]
    fn errors_are_not_cached() {
        let mut renderer = MathTextRenderer::new(Counting::default(), OutputKind::Pdf);
        let font = FontDescription::default();
        match renderer.render(r"$x_i_j$", 72., &font, 0.) {
            Err(Error::Parse(error)) => assert!(matches!(error.kind, ParseErrorKind::DuplicateScript(_))),
            result => panic!("unexpected result {:?}", result),
        }
        assert!(renderer.cache().is_empty());
    }

    #[test]
    fn canvas_of_dummy_metrics() {
        // only the spaces have ink
        let mut renderer = MathTextRenderer::new(Counting::default(), OutputKind::Raster);
        let output = renderer.render(r"$\hspace{2.0}$", 144., &FontDescription::default(), 0.).unwrap();
        assert!((output.width.to_unitless() - (48. + 2.)).abs() < 1e-9);
        assert!((output.height.to_unitless() - 2.).abs() < 1e-9);
        match output.payload {
            Payload::Raster(ref canvas) => {
                assert_eq!((canvas.width, canvas.height), (50, 2));
                assert!(canvas.glyphs.is_empty());
            },
            ref payload => panic!("unexpected payload {:?}", payload),
        }
        assert!(output.used_glyphs.is_empty());
    }
}
