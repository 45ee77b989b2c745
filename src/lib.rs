/*! # A renderer for the math subset of TeX, with pluggable font metrics.

This library takes a string mixing plain text with `$...$` math segments (e.g. `area $\pi r^2$`), lays it out and hands
every glyph to an output: a list of glyph placements on a pixel canvas, PostScript operators, or glyph lists for SVG and PDF.

## Basic usage

To render a formula, you need two ingredients: something that knows the fonts, i.e. a
[`ProviderFactory`](crate::render::ProviderFactory), and the kind of output you want.
The [`MathTextRenderer`](crate::render::driver::MathTextRenderer) then renders and caches formulas:

```
use mathtext::font::FontDescription;
use mathtext::render::{DummyFactory, OutputKind};
use mathtext::render::driver::MathTextRenderer;

let mut renderer = MathTextRenderer::new(DummyFactory, OutputKind::Svg);
let output = renderer.render(r"$x_i^2 + \alpha$", 100., &FontDescription::default(), 0.).expect("Error in rendering");
println!("{} x {} px", output.width, output.height);
```

[`DummyFactory`](crate::render::DummyFactory) measures every glyph as zero, which is only useful to check syntax. Actual
fonts come from a [`FontLocator`](crate::font::FontLocator), e.g. with the `ttfparser-fontparser` feature:

```ignore
let roman  = std::fs::read("cmr10.ttf").expect("Couldn't load font");
let italic = std::fs::read("cmmi10.ttf").expect("Couldn't load font");
let fonts = mathtext::font::backend::ttf_parser::TtfFontSet::default()
    .with_face(FontFace::Rm, &roman, None)?
    .with_face(FontFace::It, &italic, None)?;
let mut renderer = MathTextRenderer::new(FontProviders::new(fonts), OutputKind::PostScript);
```

## More complex cases

The call to [`MathTextRenderer::render`](crate::render::driver::MathTextRenderer::render) is a wrapper around three steps,
which can be run by hand:

  1. Parsing the string into a [`SyntaxNode`](crate::parser::SyntaxNode) tree, cf [`parse`](crate::parser::parse).
  2. Building a [`LayoutTree`](crate::layout::LayoutTree) and resolving it: fonts, sizes and positions, cf [`layout`].
     This step asks a [`FontMetricsProvider`](crate::font::FontMetricsProvider) for the metrics of each symbol.
  3. Drawing the symbols through the same provider, cf [`LayoutTree::render`](crate::layout::LayoutTree::render).

```
use mathtext::dimensions::Unit;
use mathtext::font::{FontFace, dummy::DummyProvider};
use mathtext::layout::LayoutTree;
use mathtext::render::OutputKind;

let syntax = mathtext::parser::parse(r"$\sum_{i}^{n} i$").expect("Parse error");
let mut tree = LayoutTree::from_syntax(&syntax);
let mut provider = DummyProvider::new(OutputKind::Raster);
tree.determine_font(FontFace::Default);
tree.set_size_info(&mut provider, Unit::new(12.), Unit::new(72.)).expect("Font error");
tree.set_origin(Unit::ZERO, Unit::ZERO);
let bbox = tree.ink_bbox();
```

## Implementing providers

Layout only talks to the [`FontMetricsProvider`](crate::font::FontMetricsProvider) trait. The provider of this crate,
[`GlyphProvider`](crate::render::GlyphProvider), splits the work in two:

 - a [`FontSource`](crate::font::FontSource) gives glyphs, advances, ink boxes and kerning in font units ;
 - a [`GlyphSink`](crate::render::GlyphSink) records the drawn glyphs in an output-specific form.
*/
#![warn(missing_docs)]

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate log;

#[deny(missing_docs)]
pub mod error;
#[deny(missing_docs)]
pub mod dimensions;
#[deny(missing_docs)]
pub mod geometry;
#[deny(missing_docs)]
pub mod layout;
pub mod parser;
#[deny(missing_docs)]
pub mod render;

pub mod font;

use crate::dimensions::Unit;
use crate::dimensions::units::Dpi;
use crate::font::{FontDescription, FontMetricsProvider};
use crate::render::RenderOutput;

/// Renders `formula` once through `provider`, at one pixel per point and without caching.
pub fn render<P : FontMetricsProvider + ?Sized>(formula : &str, provider : &mut P, font : &FontDescription) -> Result<RenderOutput, crate::error::Error> {
    render::driver::layout_and_render(provider, formula, Unit::<Dpi>::POINT_RESOLUTION, font)
}

#[cfg(test)]
mod tests {
    use crate::font::FontDescription;
    use crate::font::dummy::DummyProvider;
    use crate::render::{OutputKind, Payload};

    /// Every printable ASCII character but `$` and `\` must go through in text, and the operators and alphanumerics in math.
    #[test]
    fn all_printable_ascii_characters_must_work() {
        let printable = (0x21u8 ..= 0x7E).map(char::from).filter(|c| !matches!(c, '$' | '\\'));

        for character in printable {
            let mut formulas = vec![character.to_string()];
            if character.is_ascii_alphanumeric() || "+-*/<>=:,.;!@%&[]()".contains(character) {
                formulas.push(format!("${}$", character));
                formulas.push(format!(r"$\mathrm{{{}}}$", character));
            }
            for formula in formulas {
                eprintln!("{}", formula);
                let mut provider = DummyProvider::new(OutputKind::PostScript);
                let output = super::render(&formula, &mut provider, &FontDescription::default()).unwrap();
                assert_eq!(output.payload, Payload::PostScript(String::new()));
            }
        }
    }
}
