//! Fonts, as seen by the layout engine.
//!
//! Layout never touches a font file. It asks a [`FontMetricsProvider`] for the [`GlyphMetrics`] of a symbol in a
//! given [`FontFace`] and size, and later asks the same provider to draw that symbol somewhere.
//!
//! The provider used by the renderer, [`GlyphProvider`](crate::render::GlyphProvider), is built from two parts:
//!
//!  - a [`FontSource`], which knows the font files: glyph lookup, advances and ink boxes in font units, kerning.
//!    A [`FontLocator`] picks the source that matches a [`FontDescription`].
//!  - a [`GlyphSink`](crate::render::GlyphSink), which records drawn glyphs in an output-specific form.

/// Contains types and utilities related to fonts, in particular the [`GlyphCache`](common::GlyphCache) shared by providers.
#[deny(missing_docs)]
pub mod common;
/// A provider that returns zero metrics, to exercise the parser and the layout without fonts.
#[deny(missing_docs)]
pub mod dummy;
/// Implementations of [`FontSource`] for font parsing crates, like 'ttf-parser'.
#[deny(missing_docs)]
pub mod backend;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::dimensions::Unit;
use crate::dimensions::units::{Dpi, Em, FUnit, FontSize, Px, Ratio};
use crate::error::FontResult;
use crate::geometry::BBox;
use crate::parser::symbols::SymbolKey;
use crate::render::{Cursor, Payload};
use self::common::{FontFile, Glyph, GlyphId};

/// The typefaces a formula can switch between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FontFace {
    /// roman, `\rm`
    Rm,
    /// italic, `\it`, the face of math
    It,
    /// typewriter, `\tt`
    Tt,
    /// calligraphic, `\cal`
    Cal,
    /// sans-serif, `\sf`
    Sf,
    /// bold, `\bf`
    Bf,
    /// the face chosen from the [`FontDescription`], used for text outside of math
    Default,
}

impl FontFace {
    /// Every face that a font command can select
    pub const NAMED : [FontFace; 6] = [FontFace::Rm, FontFace::It, FontFace::Tt, FontFace::Cal, FontFace::Sf, FontFace::Bf];

    /// Looks up a face from a font command name, e.g. `rm`
    pub fn from_name(name : &str) -> Option<Self> {
        Self::NAMED.iter().copied().find(|face| face.name() == name)
    }

    /// Name of the font command selecting this face
    pub fn name(&self) -> &'static str {
        match self {
            FontFace::Rm      => "rm",
            FontFace::It      => "it",
            FontFace::Tt      => "tt",
            FontFace::Cal     => "cal",
            FontFace::Sf      => "sf",
            FontFace::Bf      => "bf",
            FontFace::Default => "default",
        }
    }
}

impl fmt::Display for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// Slant of the requested font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// upright
    #[default]
    Normal,
    /// italic
    Italic,
    /// slanted roman
    Oblique,
}

/// Weight of the requested font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// regular
    #[default]
    Normal,
    /// bold
    Bold,
}

/// The font asked for by the caller of the renderer: family, style, weight and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontDescription {
    /// a family name or one of the generic families `serif`, `sans-serif`, `monospace`, `cursive`, `fantasy`
    pub family : String,
    /// slant
    pub style : FontStyle,
    /// weight
    pub weight : FontWeight,
    /// size in points per em
    pub size : Unit<FontSize>,
}

impl Default for FontDescription {
    fn default() -> Self {
        Self {
            family : String::from("serif"),
            style  : FontStyle::Normal,
            weight : FontWeight::Normal,
            size   : Unit::new(12.),
        }
    }
}

/// A hashable summary of a [`FontDescription`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontKey {
    family : String,
    style : FontStyle,
    weight : FontWeight,
    size_bits : u64,
}

impl FontDescription {
    /// The key identifying this description in caches. Two descriptions with the same key render identically.
    pub fn cache_key(&self) -> FontKey {
        FontKey {
            family    : self.family.clone(),
            style     : self.style,
            weight    : self.weight,
            size_bits : self.size.key_bits(),
        }
    }
}


/// Measurements of a glyph at a given size and resolution.
/// See the [FreeType glyph conventions](https://freetype.org/freetype2/docs/tutorial/step2.html) for a picture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlyphMetrics {
    /// horizontal distance from this glyph's origin to the next one's
    pub advance : Unit<Px>,
    /// width of the ink rectangle
    pub width : Unit<Px>,
    /// height of the ink rectangle
    pub height : Unit<Px>,
    /// ink rectangle, relative to the glyph origin, Y upwards
    pub bbox : BBox<Px>,
}

impl GlyphMetrics {
    /// A glyph with no ink and no advance
    pub const ZERO : Self = Self {
        advance : Unit::ZERO,
        width   : Unit::ZERO,
        height  : Unit::ZERO,
        bbox    : BBox { x_min: Unit::ZERO, x_max: Unit::ZERO, y_min: Unit::ZERO, y_max: Unit::ZERO },
    };
}

/// For each font file (by identity, cf [`FontFile::identity`]), the characters drawn from it.
pub type UsedGlyphs = BTreeMap<String, BTreeSet<char>>;


/// What the layout engine needs from fonts: measuring symbols and drawing them.
///
/// Calls come in two phases: during layout, only [`metrics`](FontMetricsProvider::metrics) and
/// [`kerning`](FontMetricsProvider::kerning) are called ; then the canvas size is set and every symbol is
/// [`render`](FontMetricsProvider::render)ed at its final position. Positions are in device pixels, Y upwards from
/// the bottom of the canvas.
pub trait FontMetricsProvider {
    /// Measures `symbol` in `face` at the given size and resolution
    fn metrics(&mut self, face : FontFace, symbol : &SymbolKey, size : Unit<FontSize>, dpi : Unit<Dpi>) -> FontResult<GlyphMetrics>;

    /// Extra horizontal space between `left` and `right` when they follow each other, usually negative
    fn kerning(&mut self, _face : FontFace, _left : &SymbolKey, _right : &SymbolKey, _size : Unit<FontSize>, _dpi : Unit<Dpi>) -> FontResult<Unit<Px>> {
        Ok(Unit::ZERO)
    }

    /// Draws `symbol` with its origin at `pos`
    fn render(&mut self, pos : Cursor, face : FontFace, symbol : &SymbolKey, size : Unit<FontSize>, dpi : Unit<Dpi>) -> FontResult<()>;

    /// Dimensions the output before anything is rendered
    fn set_canvas_size(&mut self, width : Unit<Px>, height : Unit<Px>);

    /// The characters drawn so far, per font file
    fn used_glyphs(&self) -> UsedGlyphs;

    /// Hands over what was rendered, leaving the provider empty
    fn finish(&mut self) -> Payload;
}


/// Access to the font files behind the faces of a formula.
///
/// [`FontFace::Default`] must be accepted and mapped to whichever face the source was built for.
pub trait FontSource {
    /// The file a face is drawn from
    fn font_file(&self, face : FontFace) -> FontResult<FontFile>;

    /// Looks up the glyph of `codepoint` ; fails with [`FontError::UnknownSymbol`](crate::error::FontError::UnknownSymbol) if the face has none.
    fn glyph(&self, face : FontFace, codepoint : char) -> FontResult<Glyph>;

    /// Size of a font unit, i.e. `1 / units_per_em`
    fn em_per_funit(&self, face : FontFace) -> FontResult<Unit<Ratio<Em, FUnit>>>;

    /// Pair kerning between two glyphs of the same face, if the font has any
    fn kerning(&self, _face : FontFace, _left : GlyphId, _right : GlyphId) -> Option<Unit<FUnit>> {
        None
    }
}

/// Finds the fonts matching a description, e.g. by querying the system's font manager.
pub trait FontLocator {
    /// The font source produced
    type Source : FontSource;

    /// Builds the font source for `description`
    fn locate(&self, description : &FontDescription) -> FontResult<Self::Source>;
}


#[cfg(test)]
mod tests {
    use super::{FontDescription, FontFace, FontStyle, FontWeight, GlyphMetrics};
    use crate::dimensions::Unit;
    use crate::geometry::BBox;

    #[test]
    fn face_names() {
        for face in FontFace::NAMED {
            eprintln!("{}", face);
            assert_eq!(FontFace::from_name(face.name()), Some(face));
        }
        assert_eq!(FontFace::from_name("default"), None);
        assert_eq!(FontFace::from_name("mathrm"), None);
    }

    #[test]
    fn description_keys() {
        let default = FontDescription::default();
        let mut bigger = default.clone();
        bigger.size = Unit::new(14.);
        let mut bold = default.clone();
        bold.weight = FontWeight::Bold;

        assert_eq!(default.cache_key(), FontDescription::default().cache_key());
        assert_ne!(default.cache_key(), bigger.cache_key());
        assert_ne!(default.cache_key(), bold.cache_key());
    }

    #[test]
    fn glyph_metrics() {
        assert_eq!(GlyphMetrics::default(), GlyphMetrics::ZERO);

        let metrics = GlyphMetrics {
            advance : Unit::new(7.2),
            width   : Unit::new(6.),
            height  : Unit::new(10.8),
            bbox    : BBox::new(Unit::new(0.6), Unit::new(-2.4), Unit::new(6.6), Unit::new(8.4)),
        };
        let yaml = serde_yaml::to_string(&metrics).unwrap();
        let back : GlyphMetrics = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, metrics);
    }

    #[test]
    fn description_from_yaml() {
        let description : FontDescription = serde_yaml::from_str("family: monospace\nstyle: italic\nsize: 10\n").unwrap();
        assert_eq!(description.family, "monospace");
        assert_eq!(description.style, FontStyle::Italic);
        assert_eq!(description.weight, FontWeight::Normal);
        assert_eq!(description.size, Unit::new(10.));
    }
}
