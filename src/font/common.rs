use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::PathBuf;

use crate::dimensions::Unit;
use crate::dimensions::units::{Dpi, FUnit, FontSize, Px, Ratio};
use crate::error::{FontError, FontResult};
use crate::geometry::BBox;
use crate::parser::symbols::{unicode_index, SymbolKey};
use super::{FontFace, FontSource, GlyphMetrics, UsedGlyphs};

/// The id of a glyph (represented as u16)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct GlyphId(pub u16);

impl From<u16> for GlyphId {
    fn from(x: u16) -> Self { Self(x) }
}

impl From<GlyphId> for u16 {
    fn from(gid: GlyphId) -> Self { gid.0 }
}

#[cfg(feature="ttfparser-fontparser")]
impl From<ttf_parser::GlyphId> for GlyphId {
    #[inline]
    fn from(glyph_id: ttf_parser::GlyphId) -> Self {
        Self(glyph_id.0)
    }
}

#[cfg(feature="ttfparser-fontparser")]
impl From<GlyphId> for ttf_parser::GlyphId {
    fn from(gid: GlyphId) -> Self {
        ttf_parser::GlyphId(gid.0)
    }
}


/// A glyph as stored in the font file, in font units.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// index in the font
    pub gid : GlyphId,
    /// PostScript name of the glyph, if the font has a table of names
    pub name : Option<String>,
    /// horizontal advance
    pub advance : Unit<FUnit>,
    /// ink box, Y upwards
    pub bbox : BBox<FUnit>,
}

/// A font file, as reported to the output sinks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontFile {
    /// name under which PostScript output selects the font
    pub postscript_name : String,
    /// family name, used by SVG output
    pub family_name : String,
    /// where the font was loaded from, if it came from disk
    pub path : Option<PathBuf>,
}

impl FontFile {
    /// How the font is named in the used-glyph summary and in PDF output: its path if known, its PostScript name otherwise.
    pub fn identity(&self) -> String {
        match self.path {
            Some(ref path) => path.display().to_string(),
            None           => self.postscript_name.clone(),
        }
    }
}


/// Everything the output sinks need to know to draw a symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGlyph {
    /// the file the glyph comes from
    pub file : FontFile,
    /// the code point the symbol maps to
    pub codepoint : char,
    /// the glyph in font units
    pub glyph : Glyph,
    /// the glyph in device pixels
    pub metrics : GlyphMetrics,
    /// the factor between the two
    pub scale : Unit<Ratio<Px, FUnit>>,
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GlyphKey {
    face : FontFace,
    symbol : SymbolKey,
    size_bits : u64,
    dpi_bits : u64,
}

impl GlyphKey {
    fn new(face : FontFace, symbol : &SymbolKey, size : Unit<FontSize>, dpi : Unit<Dpi>) -> Self {
        Self {
            face,
            symbol : symbol.clone(),
            size_bits : size.key_bits(),
            dpi_bits : dpi.key_bits(),
        }
    }
}

/// Resolves symbols against a [`FontSource`], remembering what was resolved and what was drawn.
///
/// A symbol is resolved by mapping its key to a code point (cf [`unicode_index`]), looking up the glyph in the face
/// and scaling its measures from font units to device pixels: `px = funit / units_per_em * size * dpi / 72`.
pub struct GlyphCache<S> {
    source : S,
    glyphs : HashMap<GlyphKey, ResolvedGlyph>,
    used : UsedGlyphs,
}

impl<S : FontSource> GlyphCache<S> {
    /// An empty cache over `source`
    pub fn new(source : S) -> Self {
        Self {
            source,
            glyphs : HashMap::new(),
            used : UsedGlyphs::new(),
        }
    }

    /// The underlying font source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Factor from font units of `face` to device pixels
    pub fn px_per_funit(&self, face : FontFace, size : Unit<FontSize>, dpi : Unit<Dpi>) -> FontResult<Unit<Ratio<Px, FUnit>>> {
        let em_per_funit = self.source.em_per_funit(face)?;
        Ok(em_per_funit * size.lift::<FUnit>() * dpi.pt_to_px().lift::<FUnit>())
    }

    /// Finds the glyph of `symbol` in `face` and its measures at the given size and resolution
    pub fn resolve(&mut self, face : FontFace, symbol : &SymbolKey, size : Unit<FontSize>, dpi : Unit<Dpi>) -> FontResult<&ResolvedGlyph> {
        let scale = self.px_per_funit(face, size, dpi)?;
        let Self { source, glyphs, .. } = self;

        match glyphs.entry(GlyphKey::new(face, symbol, size, dpi)) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry)   => {
                trace!("resolving {} in face {} at {} x {}", symbol, face, size, dpi);
                let codepoint = unicode_index(symbol).ok_or_else(|| FontError::InvalidSymbol(symbol.clone()))?;
                let glyph = source.glyph(face, codepoint)?;
                let file = source.font_file(face)?;
                let bbox : BBox<Px> = glyph.bbox.scale(scale);
                let metrics = GlyphMetrics {
                    advance : glyph.advance * scale,
                    width   : bbox.width(),
                    height  : bbox.total_height(),
                    bbox,
                };
                Ok(entry.insert(ResolvedGlyph { file, codepoint, glyph, metrics, scale }))
            },
        }
    }

    /// Shorthand for the metrics of a [`resolve`](GlyphCache::resolve)d symbol
    pub fn metrics(&mut self, face : FontFace, symbol : &SymbolKey, size : Unit<FontSize>, dpi : Unit<Dpi>) -> FontResult<GlyphMetrics> {
        Ok(self.resolve(face, symbol, size, dpi)?.metrics)
    }

    /// Pair kerning in device pixels, zero if the font has none for this pair
    pub fn kerning(&mut self, face : FontFace, left : &SymbolKey, right : &SymbolKey, size : Unit<FontSize>, dpi : Unit<Dpi>) -> FontResult<Unit<Px>> {
        let left  = self.resolve(face, left,  size, dpi)?.glyph.gid;
        let right = self.resolve(face, right, size, dpi)?;
        let (right, scale) = (right.glyph.gid, right.scale);
        Ok(match self.source.kerning(face, left, right) {
            Some(kern) => kern * scale,
            None       => Unit::ZERO,
        })
    }

    /// Like [`resolve`](GlyphCache::resolve), and records the character as used for drawing
    pub fn resolve_for_drawing(&mut self, face : FontFace, symbol : &SymbolKey, size : Unit<FontSize>, dpi : Unit<Dpi>) -> FontResult<&ResolvedGlyph> {
        let (identity, codepoint) = {
            let glyph = self.resolve(face, symbol, size, dpi)?;
            (glyph.file.identity(), glyph.codepoint)
        };
        self.used.entry(identity).or_default().insert(codepoint);
        let key = GlyphKey::new(face, symbol, size, dpi);
        self.glyphs.get(&key).ok_or_else(|| FontError::InvalidSymbol(symbol.clone()))
    }

    /// The characters drawn so far, per font file
    pub fn used_glyphs(&self) -> &UsedGlyphs {
        &self.used
    }

    /// Forgets the characters drawn so far, keeping the resolved glyphs
    pub fn take_used_glyphs(&mut self) -> UsedGlyphs {
        std::mem::take(&mut self.used)
    }
}


#[cfg(test)]
mod tests {
    use super::{FontFile, Glyph, GlyphCache, GlyphId};
    use crate::dimensions::Unit;
    use crate::dimensions::units::{Em, FUnit, Ratio};
    use crate::error::{FontError, FontResult};
    use crate::font::{FontFace, FontSource};
    use crate::geometry::BBox;
    use crate::parser::symbols::SymbolKey;

    struct Blocks;

    impl FontSource for Blocks {
        fn font_file(&self, face : FontFace) -> FontResult<FontFile> {
            Ok(FontFile { postscript_name: format!("Blocks-{}", face), family_name: "Blocks".into(), path: None })
        }

        fn glyph(&self, face : FontFace, codepoint : char) -> FontResult<Glyph> {
            if !codepoint.is_ascii() {
                return Err(FontError::UnknownSymbol { face, codepoint });
            }
            Ok(Glyph {
                gid : GlyphId(codepoint as u16),
                name : None,
                advance : Unit::new(500.),
                bbox : BBox::new(Unit::new(0.), Unit::new(-100.), Unit::new(400.), Unit::new(700.)),
            })
        }

        fn em_per_funit(&self, _face : FontFace) -> FontResult<Unit<Ratio<Em, FUnit>>> {
            Ok(Unit::new(1. / 1000.))
        }

        fn kerning(&self, _face : FontFace, left : GlyphId, right : GlyphId) -> Option<Unit<FUnit>> {
            (left == GlyphId('A' as u16) && right == GlyphId('V' as u16)).then(|| Unit::new(-80.))
        }
    }

    #[test]
    fn scaling() {
        let mut cache = GlyphCache::new(Blocks);
        // 10pt at 144dpi: 1000 funits = 20px
        let metrics = cache.metrics(FontFace::Rm, &SymbolKey::from('x'), Unit::new(10.), Unit::new(144.)).unwrap();
        let close = |a : Unit<_>, b : f64| (a.to_unitless() - b).abs() < 1e-9;
        assert!(close(metrics.advance, 10.));
        assert!(close(metrics.width, 8.));
        assert!(close(metrics.height, 16.));
        assert!(close(metrics.bbox.y_min, -2.));
    }

    #[test]
    fn kerning_pairs() {
        let mut cache = GlyphCache::new(Blocks);
        let (a, v) = (SymbolKey::from('A'), SymbolKey::from('V'));
        let kern = cache.kerning(FontFace::Rm, &a, &v, Unit::new(12.), Unit::new(72.)).unwrap();
        assert!((kern.to_unitless() + 0.96).abs() < 1e-9);
        let kern = cache.kerning(FontFace::Rm, &v, &a, Unit::new(12.), Unit::new(72.)).unwrap();
        assert_eq!(kern, Unit::ZERO);
    }

    #[test]
    fn unknown_symbols() {
        let mut cache = GlyphCache::new(Blocks);
        let size = Unit::new(12.);
        let dpi = Unit::new(72.);
        assert_eq!(
            cache.metrics(FontFace::It, &SymbolKey::from_name("notasymbol"), size, dpi),
            Err(FontError::InvalidSymbol(SymbolKey::from_name("notasymbol")))
        );
        assert_eq!(
            cache.metrics(FontFace::It, &SymbolKey::from_name("alpha"), size, dpi),
            Err(FontError::UnknownSymbol { face: FontFace::It, codepoint: '\u{3B1}' })
        );
    }

    #[test]
    fn used_glyphs() {
        let mut cache = GlyphCache::new(Blocks);
        let size = Unit::new(12.);
        let dpi = Unit::new(72.);
        cache.metrics(FontFace::Rm, &SymbolKey::from('q'), size, dpi).unwrap();
        assert!(cache.used_glyphs().is_empty());

        cache.resolve_for_drawing(FontFace::Rm, &SymbolKey::from('x'), size, dpi).unwrap();
        cache.resolve_for_drawing(FontFace::Rm, &SymbolKey::from('x'), size, dpi).unwrap();
        cache.resolve_for_drawing(FontFace::Tt, &SymbolKey::from_name("infty"), size, dpi).unwrap_err();
        cache.resolve_for_drawing(FontFace::Tt, &SymbolKey::from('y'), size, dpi).unwrap();

        let used = cache.take_used_glyphs();
        assert_eq!(used.len(), 2);
        assert_eq!(used["Blocks-rm"].iter().collect::<String>(), "x");
        assert_eq!(used["Blocks-tt"].iter().collect::<String>(), "y");
        assert!(cache.used_glyphs().is_empty());
    }
}
