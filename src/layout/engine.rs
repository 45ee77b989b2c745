use crate::dimensions::Unit;
use crate::dimensions::units::{Dpi, FontSize, Px};
use crate::error::LayoutResult;
use crate::font::{FontFace, FontMetricsProvider};
use crate::geometry::{enclosing, BBox};
use crate::parser::symbols::SymbolKey;
use crate::render::Cursor;
use super::constants::SCRIPT_SCALE;
use super::{ElementKind, GroupKind, LayoutTree, NodeId, Slot};

// The elements of a group are walked in a loop rather than through their right slot,
// so that long runs of text don't turn into deep recursion.

impl LayoutTree {
    /// Assigns a face to every symbol.
    ///
    /// The expression and every `{..}` group open a scope that starts with the face of the enclosing scope,
    /// `$..$` opens a scope that starts in italic, and a font marker changes the face of the current scope.
    /// Symbols with a hard-coded face keep it.
    pub fn determine_font(&mut self, default : FontFace) {
        trace!("determining fonts, default {}", default);
        let mut stack = vec![default];
        self.determine_font_of(self.root, &mut stack);
    }

    fn determine_font_of(&mut self, id : NodeId, stack : &mut Vec<FontFace>) {
        let current = stack.last().copied().unwrap_or(FontFace::Default);
        let element = self.get_mut(id);
        match element.kind {
            ElementKind::FontMarker(face) => {
                if let Some(top) = stack.last_mut() {
                    *top = face;
                }
                element.font = Some(face);
                return;
            },
            ElementKind::Symbol(ref symbol) | ElementKind::Accent(ref symbol) => {
                element.font = Some(symbol.hardcoded.unwrap_or(current));
            },
            ElementKind::Space { .. } => (),
            ElementKind::Group { kind, ref elements } => {
                element.font = Some(current);
                let elements = elements.clone();
                let scope = match kind {
                    GroupKind::Group | GroupKind::Expression => Some(current),
                    GroupKind::Math    => Some(FontFace::It),
                    GroupKind::NonMath => None,
                };
                if let Some(face) = scope {
                    stack.push(face);
                }
                for child in elements {
                    self.determine_font_of(child, stack);
                }
                if scope.is_some() {
                    stack.pop();
                }
            },
        }

        let neighbors = self.get(id).neighbors;
        for (_, neighbor) in neighbors.iter(&Slot::ATTACHED) {
            self.determine_font_of(neighbor, stack);
        }
    }


    /// Propagates the font size and the resolution, and measures every symbol.
    ///
    /// An element's own scale applies first ; scripts get [`SCRIPT_SCALE`] of their base's size, the other neighbours
    /// the same size as their base.
    pub fn set_size_info<P>(&mut self, provider : &mut P, font_size : Unit<FontSize>, dpi : Unit<Dpi>) -> LayoutResult<()>
    where P : FontMetricsProvider + ?Sized
    {
        trace!("sizing at {}pt, {}dpi", font_size, dpi);
        self.set_size_of(provider, self.root, font_size, dpi)?;
        self.measure_kerning(provider)
    }

    fn set_size_of<P>(&mut self, provider : &mut P, id : NodeId, font_size : Unit<FontSize>, dpi : Unit<Dpi>) -> LayoutResult<()>
    where P : FontMetricsProvider + ?Sized
    {
        let element = self.get_mut(id);
        let size = font_size.scale(element.config.scale);
        element.font_size = size;
        element.dpi = dpi;
        let face = element.font.unwrap_or(FontFace::Default);

        match element.kind {
            ElementKind::Symbol(ref mut symbol) | ElementKind::Accent(ref mut symbol) => {
                symbol.metrics = provider.metrics(face, &symbol.key, size, dpi)?;
            },
            ElementKind::Group { ref elements, .. } => {
                // each element of the group passes its size on to its right neighbour
                let elements = elements.clone();
                let mut size = size;
                for child in elements {
                    self.set_size_of(provider, child, size, dpi)?;
                    size = self.get(child).font_size;
                }
            },
            ElementKind::Space { .. } | ElementKind::FontMarker(_) => (),
        }

        let neighbors = self.get(id).neighbors;
        for (slot, neighbor) in neighbors.iter(&Slot::ATTACHED) {
            let neighbor_size = if slot.is_script() { size.scale(SCRIPT_SCALE) } else { size };
            self.set_size_of(provider, neighbor, neighbor_size, dpi)?;
        }
        Ok(())
    }

    /// Kerning between a symbol and the symbol on its right, or a space if a space element follows it.
    fn measure_kerning<P>(&mut self, provider : &mut P) -> LayoutResult<()>
    where P : FontMetricsProvider + ?Sized
    {
        for index in 0 .. self.elements.len() {
            let element = &self.elements[index];
            let (symbol, right) = match (element.symbol(), element.neighbors.right) {
                (Some(symbol), Some(right)) => (symbol, right),
                _ => continue,
            };
            let right_key = match self.get(right).kind {
                ElementKind::Symbol(ref symbol) | ElementKind::Accent(ref symbol) => symbol.key.clone(),
                ElementKind::Space { .. } => SymbolKey::from(' '),
                _ => continue,
            };
            let face = element.font.unwrap_or(FontFace::Default);
            let kern = provider.kerning(face, &symbol.key, &right_key, element.font_size, element.dpi)?;

            if let ElementKind::Symbol(ref mut symbol) | ElementKind::Accent(ref mut symbol) = self.elements[index].kind {
                symbol.kern = kern;
            }
        }
        Ok(())
    }


    /// Places the tree with the origin of the root at `(x, y)`.
    ///
    /// Stacked elements and scripts are laid out on their own first, so that their extent is known when they are
    /// placed around their base. Running this twice gives the same positions.
    pub fn set_origin(&mut self, x : Unit<Px>, y : Unit<Px>) {
        trace!("placing origin at ({}, {})", x, y);
        self.set_origin_of(self.root, x, y);
    }

    fn set_origin_of(&mut self, id : NodeId, ox : Unit<Px>, oy : Unit<Px>) {
        let element = self.get_mut(id);
        element.ox = ox;
        element.oy = oy;

        if let Some(elements) = element.group_elements().map(<[NodeId]>::to_vec) {
            let mut x = ox;
            for child in elements {
                self.set_origin_of(child, x, oy);
                x = self.right_origin(child);
            }
        }

        let pady = self.pady(id);
        let neighbors = self.get(id).neighbors;
        for (slot, neighbor) in neighbors.iter(&Slot::ATTACHED) {
            self.set_origin_of(neighbor, Unit::ZERO, Unit::ZERO);
            let (nx, ny) = match slot {
                Slot::Above => (
                    self.centerx(id) - self.width(neighbor).scale(0.5),
                    self.ymax(id) + pady - self.ymax(neighbor) + self.height(neighbor),
                ),
                Slot::Below => (
                    self.centerx(id) - self.width(neighbor).scale(0.5),
                    self.ymin(id) - pady - self.height(neighbor),
                ),
                Slot::Superscript => (self.xmax(id), self.ymax(id) - pady),
                Slot::Subscript   => (self.xmax(id), oy - self.height(neighbor).scale(0.5)),
                Slot::Right       => continue,
            };
            self.translate(neighbor, nx, ny);
        }
    }

    /// Where the right neighbour of `id` goes: after its advance, and after the advance of its scripts.
    fn right_origin(&self, id : NodeId) -> Unit<Px> {
        let element = self.get(id);
        let mut x = element.ox + self.advance(id);
        for (_, script) in element.neighbors.iter(&[Slot::Subscript, Slot::Superscript]) {
            x = x.max(self.get(script).ox + self.advance(script));
        }
        x
    }

    /// Moves `id` and everything that hangs off it
    fn translate(&mut self, id : NodeId, dx : Unit<Px>, dy : Unit<Px>) {
        let element = self.get_mut(id);
        element.ox += dx;
        element.oy += dy;

        let elements = element.group_elements().map(<[NodeId]>::to_vec).unwrap_or_default();
        for child in elements {
            self.translate(child, dx, dy);
        }
        let neighbors = self.get(id).neighbors;
        for (_, neighbor) in neighbors.iter(&Slot::ATTACHED) {
            self.translate(neighbor, dx, dy);
        }
    }


    /// Draws every symbol: a symbol first, then the elements around it in slot order.
    pub fn render<P>(&self, provider : &mut P) -> LayoutResult<()>
    where P : FontMetricsProvider + ?Sized
    {
        trace!("rendering {} elements", self.len());
        self.render_of(provider, self.root)
    }

    fn render_of<P>(&self, provider : &mut P, id : NodeId) -> LayoutResult<()>
    where P : FontMetricsProvider + ?Sized
    {
        let element = self.get(id);
        match element.kind {
            ElementKind::Symbol(ref symbol) | ElementKind::Accent(ref symbol) => {
                let face = element.font.unwrap_or(FontFace::Default);
                provider.render(Cursor::new(element.ox, element.oy), face, &symbol.key, element.font_size, element.dpi)?;
            },
            ElementKind::Group { ref elements, .. } => {
                for &child in elements {
                    self.render_of(provider, child)?;
                }
            },
            ElementKind::Space { .. } | ElementKind::FontMarker(_) => (),
        }

        for (_, neighbor) in element.neighbors.iter(&Slot::ATTACHED) {
            self.render_of(provider, neighbor)?;
        }
        Ok(())
    }


    // ------------------------------- GEOMETRY -------------------------------------

    /// Vertical padding in device pixels
    pub fn pady(&self, id : NodeId) -> Unit<Px> {
        let element = self.get(id);
        element.config.pady * element.dpi.pt_to_px()
    }

    /// Horizontal padding in device pixels
    pub fn padx(&self, id : NodeId) -> Unit<Px> {
        let element = self.get(id);
        element.config.padx * element.dpi.pt_to_px()
    }

    /// The inked elements of a group, i.e. all but its font markers. Empty for other elements.
    fn inked_elements(&self, id : NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.get(id).group_elements().unwrap_or(&[])
            .iter()
            .copied()
            .filter(move |&child| self.get(child).is_inked())
    }

    /// Horizontal distance from the origin of `id` to the origin of its right neighbour, before scripts
    pub fn advance(&self, id : NodeId) -> Unit<Px> {
        let element = self.get(id);
        match element.kind {
            ElementKind::Symbol(ref symbol) | ElementKind::Accent(ref symbol) => symbol.metrics.advance + symbol.kern,
            ElementKind::Space { width, .. } => width * element.font_size * element.dpi.pt_to_px(),
            ElementKind::FontMarker(_) => Unit::ZERO,
            ElementKind::Group { ref elements, .. } => {
                match (elements.first(), self.inked_elements(id).last()) {
                    (Some(&first), Some(last)) => self.xmax(last) - self.get(first).ox,
                    _ => Unit::ZERO,
                }
            },
        }
    }

    /// Width of the ink
    pub fn width(&self, id : NodeId) -> Unit<Px> {
        match self.get(id).kind {
            ElementKind::Symbol(ref symbol) | ElementKind::Accent(ref symbol) => symbol.metrics.width,
            _ => self.xmax(id) - self.xmin(id),
        }
    }

    /// Height of the ink
    pub fn height(&self, id : NodeId) -> Unit<Px> {
        let element = self.get(id);
        match element.kind {
            ElementKind::Symbol(ref symbol) | ElementKind::Accent(ref symbol) => symbol.metrics.height,
            ElementKind::Space { height, .. } => height * element.font_size * element.dpi.pt_to_px(),
            _ => self.ymax(id) - self.ymin(id),
        }
    }

    /// Ink box of `id`, in absolute coordinates. A group's box encloses its inked elements, not their neighbours.
    pub fn bbox(&self, id : NodeId) -> BBox<Px> {
        let element = self.get(id);
        match element.kind {
            ElementKind::Symbol(ref symbol) | ElementKind::Accent(ref symbol) =>
                symbol.metrics.bbox.translate(element.ox, element.oy),
            ElementKind::Space { .. } =>
                BBox::from_dims(element.ox, element.oy, self.advance(id), self.height(id)),
            ElementKind::FontMarker(_) =>
                BBox::single_point(element.ox, element.oy),
            ElementKind::Group { .. } =>
                enclosing(self.inked_elements(id).map(|child| self.bbox(child)))
                    .unwrap_or_else(|| BBox::single_point(element.ox, element.oy)),
        }
    }

    /// Left edge of the ink
    pub fn xmin(&self, id : NodeId) -> Unit<Px> {
        self.bbox(id).x_min
    }

    /// Right edge of the ink
    pub fn xmax(&self, id : NodeId) -> Unit<Px> {
        self.bbox(id).x_max
    }

    /// Bottom of the ink
    pub fn ymin(&self, id : NodeId) -> Unit<Px> {
        self.bbox(id).y_min
    }

    /// Top of the ink
    pub fn ymax(&self, id : NodeId) -> Unit<Px> {
        self.bbox(id).y_max
    }

    /// Horizontal center of the ink
    pub fn centerx(&self, id : NodeId) -> Unit<Px> {
        let bbox = self.bbox(id);
        (bbox.x_min + bbox.x_max).scale(0.5)
    }

    /// Vertical center of the ink
    pub fn centery(&self, id : NodeId) -> Unit<Px> {
        let bbox = self.bbox(id);
        (bbox.y_min + bbox.y_max).scale(0.5)
    }

    /// The box enclosing every symbol, accent and space of the tree, `None` for a tree without any.
    pub fn ink_bbox(&self) -> Option<BBox<Px>> {
        enclosing(
            self.iter()
                .filter(|(_, element)| element.is_leaf())
                .map(|(id, _)| self.bbox(id))
        )
    }
}


#[cfg(test)]
mod tests {
    use crate::dimensions::Unit;
    use crate::dimensions::units::{Dpi, FontSize, Px};
    use crate::error::FontResult;
    use crate::font::{FontFace, FontMetricsProvider, GlyphMetrics, UsedGlyphs};
    use crate::geometry::BBox;
    use crate::layout::{ElementKind, LayoutTree, NodeId, Slot};
    use crate::parser::parse;
    use crate::parser::symbols::SymbolKey;
    use crate::render::{Cursor, OutputKind, OutputSink, GlyphSink, Payload};

    /// Every glyph is half an em wide and 0.7 em high ; `g` and `p` go 0.2 em below the baseline.
    struct Monospace {
        drawn : Vec<(SymbolKey, FontFace, Cursor)>,
        sink : OutputSink,
    }

    impl Monospace {
        fn new() -> Self {
            Self { drawn : Vec::new(), sink : OutputSink::new(OutputKind::Svg) }
        }
    }

    impl FontMetricsProvider for Monospace {
        fn metrics(&mut self, _face : FontFace, symbol : &SymbolKey, size : Unit<FontSize>, dpi : Unit<Dpi>) -> FontResult<GlyphMetrics> {
            let em = size.to_unitless() * dpi.to_unitless() / 72.;
            let depth = match symbol.as_char() {
                Some('g') | Some('p') => -0.2 * em,
                _ => 0.,
            };
            let bbox = BBox::new(Unit::ZERO, Unit::new(depth), Unit::new(0.5 * em), Unit::new(0.7 * em));
            Ok(GlyphMetrics { advance: Unit::new(0.5 * em), width: bbox.width(), height: bbox.total_height(), bbox })
        }

        fn render(&mut self, pos : Cursor, face : FontFace, symbol : &SymbolKey, _size : Unit<FontSize>, _dpi : Unit<Dpi>) -> FontResult<()> {
            self.drawn.push((symbol.clone(), face, pos));
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

    fn laid_out(input : &str, dpi : f64) -> LayoutTree {
        let mut tree = LayoutTree::from_syntax(&parse(input).unwrap());
        tree.determine_font(FontFace::Default);
        tree.set_size_info(&mut Monospace::new(), Unit::new(12.), Unit::new(dpi)).unwrap();
        tree.set_origin(Unit::ZERO, Unit::ZERO);
        tree
    }

    fn math_elements(tree : &LayoutTree) -> Vec<NodeId> {
        let math = tree.get(tree.root()).group_elements().unwrap()[1];
        tree.get(math).group_elements().unwrap().to_vec()
    }

    fn find(tree : &LayoutTree, c : char) -> NodeId {
        tree.iter()
            .find(|(_, element)| element.symbol().map(|symbol| symbol.key == SymbolKey::from(c)).unwrap_or(false))
            .map(|(id, _)| id)
            .unwrap()
    }

    fn close(a : Unit<Px>, b : f64) -> bool {
        (a.to_unitless() - b).abs() < 1e-9
    }

    #[test]
    fn fonts_in_scope() {
        let tree = laid_out(r"a$x \rm y {\it z} w \mathbf{v} \sin {\rm q}^b$", 72.);
        let cases = [
            ('a', FontFace::Default),
            ('x', FontFace::It),
            ('y', FontFace::Rm),
            ('z', FontFace::It),
            ('w', FontFace::Rm),
            ('v', FontFace::Bf),
            ('s', FontFace::Rm),
            ('q', FontFace::Rm),
            // the scope around the group
            ('b', FontFace::Rm),
        ];
        for (c, face) in cases {
            eprintln!("{}", c);
            assert_eq!(tree.get(find(&tree, c)).font, Some(face));
        }

        let tree = laid_out(r"$\angstrom$", 72.);
        let under = math_elements(&tree)[0];
        let over = tree.neighbor(under, Slot::Above).unwrap();
        assert_eq!(tree.get(under).font, Some(FontFace::Rm));
        assert_eq!(tree.get(over).font, Some(FontFace::It));
    }

    #[test]
    fn sizes() {
        let tree = laid_out("$x^2_{i^j}$", 72.);
        let x = math_elements(&tree)[0];
        let two = tree.neighbor(x, Slot::Superscript).unwrap();
        let j = find(&tree, 'j');
        assert_eq!(tree.get(x).font_size, Unit::new(12.));
        assert!((tree.get(two).font_size.to_unitless() - 8.4).abs() < 1e-9);
        assert!((tree.get(j).font_size.to_unitless() - 12. * 0.7 * 0.7).abs() < 1e-9);

        let tree = laid_out(r"$\angstrom$", 72.);
        let under = math_elements(&tree)[0];
        let over = tree.neighbor(under, Slot::Above).unwrap();
        assert_eq!(tree.get(over).font_size, Unit::new(6.));
    }

    #[test]
    fn spaces() {
        let tree = laid_out(r"$\hspace{2.0}$", 144.);
        let space = math_elements(&tree)[0];
        assert!(matches!(tree.get(space).kind, ElementKind::Space { .. }));
        assert!(close(tree.advance(space), 2. * 12. * 144. / 72.));
        assert!(close(tree.height(space), 0.));

        let tree = laid_out(r"$a\ b\/c$", 72.);
        let elements = math_elements(&tree);
        assert!(close(tree.advance(elements[1]), 0.3 * 12.));
        assert!(close(tree.advance(elements[3]), 0.1 * 12.));
    }

    #[test]
    fn scripts_placement() {
        let tree = laid_out("$x_i^j y$", 72.);
        let elements = math_elements(&tree);
        let (x, y) = (elements[0], elements[1]);
        let i = tree.neighbor(x, Slot::Subscript).unwrap();
        let j = tree.neighbor(x, Slot::Superscript).unwrap();

        // x is 6px wide and 8.4px high at 12pt
        let x0 = tree.get(x).ox.to_unitless();
        assert!(close(tree.get(i).ox, x0 + 6.));
        assert!(close(tree.get(i).oy, -0.5 * tree.height(i).to_unitless()));
        assert!(close(tree.get(j).ox, x0 + 6.));
        assert!(close(tree.get(j).oy, 8.4 - 2.));

        // y comes after the scripts
        let script_end = tree.get(i).ox + tree.advance(i);
        assert!(close(tree.get(y).ox, script_end.to_unitless()));
        assert!(close(tree.get(y).oy, 0.));
    }

    #[test]
    fn stacking() {
        let tree = laid_out(r"$\over{x}{p}$", 72.);
        let first = math_elements(&tree)[0];
        let second = tree.neighbor(first, Slot::Above).unwrap();
        // the ink of `p` starts 2pt above the ink of `x`
        assert!(close(tree.ymin(second), tree.ymax(first).to_unitless() + 2.));
        assert!(close(tree.centerx(second), tree.centerx(first).to_unitless()));

        let tree = laid_out(r"$\under{x}{p}$", 72.);
        let first = math_elements(&tree)[0];
        let second = tree.neighbor(first, Slot::Below).unwrap();
        let p_height = 0.9 * 12.;
        assert!(close(tree.get(second).oy, tree.ymin(first).to_unitless() - 2. - p_height));

        let tree = laid_out(r"$\hat x$", 72.);
        let x = math_elements(&tree)[0];
        let hat = tree.neighbor(x, Slot::Above).unwrap();
        assert!(close(tree.ymin(hat), tree.ymax(x).to_unitless() + 1.));
    }

    #[test]
    fn origin_is_idempotent() {
        let mut tree = laid_out(r"ab $\sum_{i=0}^{n} \over{a_1}{b^2} \hat{x}_{\sin}$ cd", 100.);
        let origins = |tree : &LayoutTree| tree.iter().map(|(_, element)| (element.ox, element.oy)).collect::<Vec<_>>();
        let first = origins(&tree);

        tree.set_origin(Unit::ZERO, Unit::ZERO);
        assert_eq!(origins(&tree), first);

        tree.set_origin(Unit::new(10.), Unit::new(-3.));
        tree.set_origin(Unit::ZERO, Unit::ZERO);
        for ((x1, y1), (x2, y2)) in origins(&tree).into_iter().zip(first) {
            assert!(close(x1, x2.to_unitless()) && close(y1, y2.to_unitless()));
        }
    }

    #[test]
    fn font_markers_have_no_ink() {
        let tree = laid_out(r"$x{\rm}y {z\it}$", 72.);
        let elements = math_elements(&tree);
        let z_group = elements[3];
        let z = find(&tree, 'z');
        assert_eq!(tree.bbox(z_group), tree.bbox(z));
        assert!(close(tree.advance(z_group), tree.advance(z).to_unitless()));
        // the empty-looking group doesn't move y
        assert!(close(tree.get(elements[2]).ox, tree.get(elements[0]).ox.to_unitless() + 6.));
    }

    #[test]
    fn ink_and_rendering() {
        let mut tree = laid_out("$x^2$", 72.);
        let bbox = tree.ink_bbox().unwrap();
        eprintln!("{:?}", bbox);
        assert!(bbox.width() > Unit::ZERO && bbox.width().is_finite());
        assert!(bbox.total_height() > Unit::ZERO && bbox.total_height().is_finite());

        tree.set_origin(Unit::new(1.), Unit::new(2.));
        let mut provider = Monospace::new();
        tree.render(&mut provider).unwrap();
        let drawn : Vec<char> = provider.drawn.iter().filter_map(|(key, _, _)| key.as_char()).collect();
        assert_eq!(drawn, [' ', 'x', '2', ' ']);
        let (_, face, pos) = &provider.drawn[1];
        assert_eq!(*face, FontFace::It);
        assert!(close(pos.x, 1. + 0.5 * 12.) && close(pos.y, 2.));
    }

    #[test]
    fn render_order() {
        let tree = laid_out(r"$\hat x_i y$", 72.);
        let mut provider = Monospace::new();
        tree.render(&mut provider).unwrap();
        let drawn : Vec<String> = provider.drawn.iter().map(|(key, _, _)| key.to_string()).collect();
        assert_eq!(drawn, [" ", "x", r"\circumflexaccent", "i", "y", " "]);
    }
}
