use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

use ::ttf_parser::{name_id, Face};

use crate::dimensions::Unit;
use crate::dimensions::units::{Em, FUnit, Ratio};
use crate::error::{FontError, FontResult};
use crate::font::{FontDescription, FontFace, FontLocator, FontSource, FontStyle, FontWeight};
use crate::font::common::{FontFile, Glyph, GlyphId};
use crate::geometry::BBox;

#[derive(Clone)]
struct LoadedFace<'a> {
    face : Face<'a>,
    file : FontFile,
}

/// The font files of each face, parsed with 'ttf-parser'.
///
/// The set is cheap to clone: faces are shared between the sources it creates.
///
/// ```no_run
/// # use mathtext::font::FontFace;
/// # use mathtext::font::backend::ttf_parser::TtfFontSet;
/// let roman  = std::fs::read("fonts/cmr10.ttf").unwrap();
/// let italic = std::fs::read("fonts/cmmi10.ttf").unwrap();
/// let fonts = TtfFontSet::default()
///     .with_face(FontFace::Rm, &roman, Some("fonts/cmr10.ttf".into())).unwrap()
///     .with_face(FontFace::It, &italic, Some("fonts/cmmi10.ttf".into())).unwrap();
/// ```
#[derive(Clone, Default)]
pub struct TtfFontSet<'a> {
    faces : Rc<BTreeMap<FontFace, LoadedFace<'a>>>,
}

impl<'a> TtfFontSet<'a> {
    /// Registers `data` as the font file of `face`, replacing any previous one.
    /// Fails if `data` can't be parsed or if `face` is [`FontFace::Default`], which is chosen by [`locate`](FontLocator::locate).
    pub fn with_face(mut self, face : FontFace, data : &'a [u8], path : Option<PathBuf>) -> FontResult<Self> {
        if face == FontFace::Default {
            return Err(FontError::MissingFace(face));
        }
        let parsed = Face::parse(data, 0).map_err(|e| FontError::MalformedFont(e.to_string()))?;
        let file = font_file(&parsed, path);
        debug!("{} is drawn from {}", face, file.identity());

        Rc::make_mut(&mut self.faces).insert(face, LoadedFace { face: parsed, file });
        Ok(self)
    }

    /// The faces with a font file
    pub fn faces(&self) -> impl Iterator<Item = FontFace> + '_ {
        self.faces.keys().copied()
    }
}

/// The face that draws text outside of math for a given description
pub fn default_face(description : &FontDescription) -> FontFace {
    match description.family.as_str() {
        "monospace"          => return FontFace::Tt,
        "sans-serif"         => return FontFace::Sf,
        "cursive" | "fantasy" => return FontFace::Cal,
        _ => (),
    }
    match (description.style, description.weight) {
        (_, FontWeight::Bold)                       => FontFace::Bf,
        (FontStyle::Italic | FontStyle::Oblique, _) => FontFace::It,
        _                                           => FontFace::Rm,
    }
}

impl<'a> FontLocator for TtfFontSet<'a> {
    type Source = TtfFontSource<'a>;

    fn locate(&self, description : &FontDescription) -> FontResult<TtfFontSource<'a>> {
        let mut default = default_face(description);
        if !self.faces.contains_key(&default) {
            warn!("no font file for {}, falling back to {}", default, FontFace::Rm);
            default = FontFace::Rm;
        }
        if !self.faces.contains_key(&default) {
            return Err(FontError::MissingFace(default));
        }
        Ok(TtfFontSource { faces : self.faces.clone(), default })
    }
}


/// A [`FontSource`] over a [`TtfFontSet`], with [`FontFace::Default`] bound to one of its faces
#[derive(Clone)]
pub struct TtfFontSource<'a> {
    faces : Rc<BTreeMap<FontFace, LoadedFace<'a>>>,
    default : FontFace,
}

impl<'a> TtfFontSource<'a> {
    /// The face [`FontFace::Default`] stands for
    pub fn default_face(&self) -> FontFace {
        self.default
    }

    fn loaded(&self, face : FontFace) -> FontResult<&LoadedFace<'a>> {
        let face = if face == FontFace::Default { self.default } else { face };
        self.faces.get(&face).ok_or(FontError::MissingFace(face))
    }
}

impl<'a> FontSource for TtfFontSource<'a> {
    fn font_file(&self, face : FontFace) -> FontResult<FontFile> {
        Ok(self.loaded(face)?.file.clone())
    }

    fn glyph(&self, face : FontFace, codepoint : char) -> FontResult<Glyph> {
        let font = &self.loaded(face)?.face;
        let gid = font.glyph_index(codepoint).ok_or(FontError::UnknownSymbol { face, codepoint })?;
        let advance = font.glyph_hor_advance(gid).unwrap_or_default();
        // blank glyphs, like the space, have no outline
        let bbox = match font.glyph_bounding_box(gid) {
            Some(rect) => BBox::new(
                Unit::<FUnit>::new(rect.x_min.into()),
                Unit::<FUnit>::new(rect.y_min.into()),
                Unit::<FUnit>::new(rect.x_max.into()),
                Unit::<FUnit>::new(rect.y_max.into()),
            ),
            None => BBox::single_point(Unit::ZERO, Unit::ZERO),
        };
        Ok(Glyph {
            gid : gid.into(),
            name : font.glyph_name(gid).map(String::from),
            advance : Unit::<FUnit>::new(advance.into()),
            bbox,
        })
    }

    fn em_per_funit(&self, face : FontFace) -> FontResult<Unit<Ratio<Em, FUnit>>> {
        let units_per_em = self.loaded(face)?.face.units_per_em();
        Ok(Unit::<Ratio<Em, FUnit>>::new(f64::from(units_per_em).recip()))
    }

    fn kerning(&self, face : FontFace, left : GlyphId, right : GlyphId) -> Option<Unit<FUnit>> {
        let kern = self.loaded(face).ok()?.face.tables().kern?;
        kern.subtables
            .into_iter()
            .filter(|subtable| subtable.horizontal && !subtable.variable)
            .find_map(|subtable| subtable.glyphs_kerning(left.into(), right.into()))
            .map(|value| Unit::<FUnit>::new(value.into()))
    }
}


fn font_file(face : &Face<'_>, path : Option<PathBuf>) -> FontFile {
    let name = |id : u16| face.names()
        .into_iter()
        .filter(|name| name.name_id == id)
        .find_map(|name| name.to_string());
    let postscript_name = name(name_id::POST_SCRIPT_NAME).unwrap_or_else(|| String::from("Unnamed"));
    let family_name = name(name_id::FAMILY).unwrap_or_else(|| postscript_name.clone());
    FontFile { postscript_name, family_name, path }
}
