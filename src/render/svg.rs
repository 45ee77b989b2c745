use crate::dimensions::Unit;
use crate::dimensions::units::{FontSize, Px};
use crate::font::GlyphMetrics;
use crate::font::common::ResolvedGlyph;
use super::{Cursor, GlyphSink, Payload};

/// A glyph of SVG output, written as a `<text>` element by the SVG writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgGlyph {
    /// font family
    pub family : String,
    /// font size
    pub size : Unit<FontSize>,
    /// the character drawn
    pub text : char,
    /// x-coordinate of the glyph origin
    pub x : Unit<Px>,
    /// y-coordinate of the glyph origin, Y upwards
    pub y : Unit<Px>,
    /// measures of the glyph
    pub metrics : GlyphMetrics,
}

/// Collects [`SvgGlyph`]s
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SvgSink {
    glyphs : Vec<SvgGlyph>,
}

impl GlyphSink for SvgSink {
    fn set_canvas_size(&mut self, _width : Unit<Px>, _height : Unit<Px>) {}

    fn draw(&mut self, pos : Cursor, glyph : &ResolvedGlyph, size : Unit<FontSize>) {
        self.glyphs.push(SvgGlyph {
            family : glyph.file.family_name.clone(),
            size,
            text : glyph.codepoint,
            x : pos.x,
            y : pos.y,
            metrics : glyph.metrics,
        });
    }

    fn finish(&mut self) -> Payload {
        Payload::Svg(std::mem::take(&mut self.glyphs))
    }
}


#[cfg(test)]
mod tests {
    use super::{SvgGlyph, SvgSink};
    use crate::dimensions::Unit;
    use crate::render::{Cursor, GlyphSink, Payload};
    use crate::render::testing::glyph;

    #[test]
    fn glyph_list() {
        let mut sink = SvgSink::default();
        let x = glyph('x', 5.);
        sink.set_canvas_size(Unit::new(20.), Unit::new(20.));
        sink.draw(Cursor::new(Unit::new(1.), Unit::new(2.)), &x, Unit::new(12.));

        let expected = SvgGlyph {
            family : "Test".into(),
            size : Unit::new(12.),
            text : 'x',
            x : Unit::new(1.),
            y : Unit::new(2.),
            metrics : x.metrics,
        };
        assert_eq!(sink.finish(), Payload::Svg(vec![expected]));
        assert_eq!(sink.finish(), Payload::Svg(vec![]));
    }
}
