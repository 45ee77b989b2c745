#![allow(dead_code)]
pub mod debug_render;

use std::cell::Cell;
use std::rc::Rc;

use mathtext::dimensions::Unit;
use mathtext::dimensions::units::{Em, FUnit, Ratio};
use mathtext::error::{FontError, FontResult};
use mathtext::font::{FontDescription, FontFace, FontLocator, FontSource, FontStyle, FontWeight};
use mathtext::font::common::{FontFile, Glyph, GlyphId};
use mathtext::geometry::BBox;
use mathtext::render::{FontProviders, OutputKind, ProviderFactory};

pub const UNITS_PER_EM : f64 = 1000.;
pub const ADVANCE : f64 = 600.;
pub const SPACE_ADVANCE : f64 = 300.;
pub const ASCENT : f64 = 700.;
pub const DESCENT : f64 = -200.;
pub const KERN_AV : f64 = -100.;

/// A made-up font: every glyph is 600 units wide with ink from x = 50 to 550, and rises 700 units above the baseline.
/// `g`, `p`, `q` and `y` go 200 units below. The space has no ink. `A` followed by `V` is kerned by -100 units.
/// The typewriter face only has ASCII glyphs ; letters and digits have a PostScript name, other glyphs don't.
#[derive(Debug, Clone, Copy)]
pub struct TestFont {
    pub default : FontFace,
}

impl TestFont {
    fn face(&self, face : FontFace) -> FontFace {
        if face == FontFace::Default { self.default } else { face }
    }
}

impl FontSource for TestFont {
    fn font_file(&self, face : FontFace) -> FontResult<FontFile> {
        Ok(FontFile {
            postscript_name : format!("TestFont-{}", self.face(face)),
            family_name : String::from("TestFont"),
            path : None,
        })
    }

    fn glyph(&self, face : FontFace, codepoint : char) -> FontResult<Glyph> {
        if self.face(face) == FontFace::Tt && !codepoint.is_ascii() {
            return Err(FontError::UnknownSymbol { face, codepoint });
        }
        let gid = GlyphId(codepoint as u32 as u16);
        let name = codepoint.is_ascii_alphanumeric().then(|| codepoint.to_string());
        if codepoint == ' ' {
            return Ok(Glyph { gid, name: Some("space".into()), advance: Unit::new(SPACE_ADVANCE), bbox: BBox::single_point(Unit::ZERO, Unit::ZERO) });
        }
        let y_min = if "gpqy".contains(codepoint) { DESCENT } else { 0. };
        Ok(Glyph {
            gid,
            name,
            advance : Unit::new(ADVANCE),
            bbox : BBox::new(Unit::new(50.), Unit::new(y_min), Unit::new(550.), Unit::new(ASCENT)),
        })
    }

    fn em_per_funit(&self, _face : FontFace) -> FontResult<Unit<Ratio<Em, FUnit>>> {
        Ok(Unit::new(UNITS_PER_EM.recip()))
    }

    fn kerning(&self, _face : FontFace, left : GlyphId, right : GlyphId) -> Option<Unit<FUnit>> {
        (left == GlyphId('A' as u16) && right == GlyphId('V' as u16)).then(|| Unit::new(KERN_AV))
    }
}

/// Finds a [`TestFont`] for every description
#[derive(Debug, Clone, Copy, Default)]
pub struct TestFonts;

impl FontLocator for TestFonts {
    type Source = TestFont;

    fn locate(&self, description : &FontDescription) -> FontResult<TestFont> {
        let default = match (description.family.as_str(), description.style, description.weight) {
            ("monospace", _, _)      => FontFace::Tt,
            (_, _, FontWeight::Bold) => FontFace::Bf,
            (_, FontStyle::Normal, _) => FontFace::Rm,
            _                        => FontFace::It,
        };
        Ok(TestFont { default })
    }
}

pub fn providers() -> FontProviders<TestFonts> {
    FontProviders::new(TestFonts)
}

/// Counts the providers bound, i.e. the formulas actually rendered
pub struct Counting<F> {
    pub inner : F,
    pub binds : Rc<Cell<usize>>,
}

impl<F> Counting<F> {
    pub fn new(inner : F) -> Self {
        Self { inner, binds : Rc::new(Cell::new(0)) }
    }
}

impl<F : ProviderFactory> ProviderFactory for Counting<F> {
    type Provider = F::Provider;

    fn bind(&self, output : OutputKind, font : &FontDescription) -> FontResult<F::Provider> {
        self.binds.set(self.binds.get() + 1);
        self.inner.bind(output, font)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Size of a font unit in pixels at `size` points and `dpi`
pub fn px_per_funit(size : f64, dpi : f64) -> f64 {
    size * dpi / 72. / UNITS_PER_EM
}

pub fn assert_close(actual : f64, expected : f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
}
