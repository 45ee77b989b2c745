//! Converting a [`SyntaxNode`](crate::parser::nodes::SyntaxNode) tree to a [`LayoutTree`] of elements ready to be measured and rendered.
//!
//! Unlike TeX, there are no horizontal and vertical boxes here. Every element has five neighbour slots
//! (cf [`Slot`]): the elements of a group follow each other through their `right` slot, while accents,
//! stacked symbols and scripts hang off the `above`, `below`, `subscript` and `superscript` slots of
//! their base.
//!
//! A tree is resolved in passes, each running top-down once (cf [`engine`]):
//!
//!  1. [`LayoutTree::determine_font`] picks the face of every symbol from the font commands in scope.
//!  2. [`LayoutTree::set_size_info`] propagates the font size and fetches glyph metrics.
//!  3. [`LayoutTree::set_origin`] places every element, in device pixels with Y upwards.
//!  4. [`LayoutTree::render`] draws every symbol through the font metrics provider.

pub mod constants;
/// Building a layout tree from a syntax tree
pub mod builder;
/// The resolution passes and the geometry of elements
pub mod engine;

use crate::dimensions::Unit;
use crate::dimensions::units::{Dpi, Em, FontSize, Pt, Px};
use crate::font::{FontFace, GlyphMetrics};
use crate::parser::symbols::SymbolKey;
use self::constants::{DEFAULT_FONT_SIZE, DEFAULT_PAD};

/// Index of an element in its [`LayoutTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the element in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// The neighbour slots of an element, in the order they are placed and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// stacked on top, centered: accents, `\over`, limits of `\sum`
    Above,
    /// stacked below, centered: `\under`, limits of `\sum`
    Below,
    /// lower right corner
    Subscript,
    /// upper right corner
    Superscript,
    /// the next element of the group
    Right,
}

impl Slot {
    /// Every slot, in placement order. The right neighbour comes last, since its position depends on the scripts.
    pub const ALL : [Slot; 5] = [Slot::Above, Slot::Below, Slot::Subscript, Slot::Superscript, Slot::Right];

    /// Every slot but [`Slot::Right`]: the elements that hang off their base
    pub const ATTACHED : [Slot; 4] = [Slot::Above, Slot::Below, Slot::Subscript, Slot::Superscript];

    /// Do elements in this slot shrink, cf [`SCRIPT_SCALE`](constants::SCRIPT_SCALE)
    pub fn is_script(self) -> bool {
        matches!(self, Slot::Subscript | Slot::Superscript)
    }
}

/// The elements around an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    /// cf [`Slot::Above`]
    pub above : Option<NodeId>,
    /// cf [`Slot::Below`]
    pub below : Option<NodeId>,
    /// cf [`Slot::Subscript`]
    pub subscript : Option<NodeId>,
    /// cf [`Slot::Superscript`]
    pub superscript : Option<NodeId>,
    /// cf [`Slot::Right`]
    pub right : Option<NodeId>,
}

impl Neighbors {
    /// The element in `slot`
    pub fn get(&self, slot : Slot) -> Option<NodeId> {
        match slot {
            Slot::Above       => self.above,
            Slot::Below       => self.below,
            Slot::Subscript   => self.subscript,
            Slot::Superscript => self.superscript,
            Slot::Right       => self.right,
        }
    }

    fn slot_mut(&mut self, slot : Slot) -> &mut Option<NodeId> {
        match slot {
            Slot::Above       => &mut self.above,
            Slot::Below       => &mut self.below,
            Slot::Subscript   => &mut self.subscript,
            Slot::Superscript => &mut self.superscript,
            Slot::Right       => &mut self.right,
        }
    }

    /// Puts `id` in `slot`, returning the element it replaces
    pub fn set(&mut self, slot : Slot, id : NodeId) -> Option<NodeId> {
        self.slot_mut(slot).replace(id)
    }

    /// Occupied slots among `slots`, in the order given
    pub fn iter(self, slots : &[Slot]) -> impl Iterator<Item = (Slot, NodeId)> + '_ {
        slots.iter().filter_map(move |&slot| Some((slot, self.get(slot)?)))
    }
}

/// Padding and scale of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementConfig {
    /// horizontal padding
    pub padx : Unit<Pt>,
    /// vertical padding, between the element and what is stacked on it
    pub pady : Unit<Pt>,
    /// size of the element relative to the size it is given
    pub scale : f64,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            padx : DEFAULT_PAD,
            pady : DEFAULT_PAD,
            scale : 1.0,
        }
    }
}

/// A glyph of the layout
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolElement {
    /// what to draw
    pub key : SymbolKey,
    /// a face that overrides the font commands in scope
    pub hardcoded : Option<FontFace>,
    /// measures, once [`set_size_info`](LayoutTree::set_size_info) has run
    pub metrics : GlyphMetrics,
    /// kerning against the right neighbour
    pub kern : Unit<Px>,
}

impl SymbolElement {
    /// An unmeasured symbol
    pub fn new(key : SymbolKey, hardcoded : Option<FontFace>) -> Self {
        Self { key, hardcoded, metrics : GlyphMetrics::ZERO, kern : Unit::ZERO }
    }
}

/// What kind of scope a group is, which decides the font its elements start with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// `{..}`: starts with the font of the enclosing scope
    Group,
    /// `$..$`: starts in italic
    Math,
    /// text outside of math: shares the scope of the expression
    NonMath,
    /// the whole formula
    Expression,
}

/// What an element is
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// a glyph
    Symbol(SymbolElement),
    /// a glyph placed on top of another one
    Accent(SymbolElement),
    /// blank space, sized relative to the font size
    Space {
        /// horizontal advance
        width : Unit<Em>,
        /// ink height
        height : Unit<Em>,
    },
    /// changes the face of the elements that follow in the group
    FontMarker(FontFace),
    /// a sequence of elements, chained through their right slot
    Group {
        /// the scope the group opens
        kind : GroupKind,
        /// the elements, left to right
        elements : Vec<NodeId>,
    },
}

/// A node of the layout tree
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// what the element is
    pub kind : ElementKind,
    /// the elements around it
    pub neighbors : Neighbors,
    /// padding and scale
    pub config : ElementConfig,
    /// face, once [`determine_font`](LayoutTree::determine_font) has run
    pub font : Option<FontFace>,
    /// font size, once [`set_size_info`](LayoutTree::set_size_info) has run
    pub font_size : Unit<FontSize>,
    /// resolution, once [`set_size_info`](LayoutTree::set_size_info) has run
    pub dpi : Unit<Dpi>,
    /// x-coordinate of the origin
    pub ox : Unit<Px>,
    /// y-coordinate of the origin (baseline), Y upwards
    pub oy : Unit<Px>,
}

impl Element {
    /// A fresh element with default configuration
    pub fn new(kind : ElementKind) -> Self {
        Self {
            kind,
            neighbors : Neighbors::default(),
            config : ElementConfig::default(),
            font : None,
            font_size : DEFAULT_FONT_SIZE,
            dpi : Unit::<Dpi>::POINT_RESOLUTION,
            ox : Unit::ZERO,
            oy : Unit::ZERO,
        }
    }

    /// The symbol, for symbols and accents
    pub fn symbol(&self) -> Option<&SymbolElement> {
        match self.kind {
            ElementKind::Symbol(ref symbol) | ElementKind::Accent(ref symbol) => Some(symbol),
            _ => None,
        }
    }

    /// The elements of a group
    pub fn group_elements(&self) -> Option<&[NodeId]> {
        match self.kind {
            ElementKind::Group { ref elements, .. } => Some(elements),
            _ => None,
        }
    }

    /// Does the element draw ink, i.e. take part in the geometry of its group
    pub fn is_inked(&self) -> bool {
        !matches!(self.kind, ElementKind::FontMarker(_))
    }

    /// Is the element a symbol, an accent or a space
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, ElementKind::Symbol(_) | ElementKind::Accent(_) | ElementKind::Space { .. })
    }
}

/// An arena of [`Element`]s. Each element is owned by exactly one group or one neighbour slot, except the root.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTree {
    elements : Vec<Element>,
    root : NodeId,
}

impl LayoutTree {
    /// The root element, the expression
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The element `id`
    pub fn get(&self, id : NodeId) -> &Element {
        &self.elements[id.0]
    }

    fn get_mut(&mut self, id : NodeId) -> &mut Element {
        &mut self.elements[id.0]
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Is the tree empty (it never is, there's always a root)
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Every element with its id, in creation order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Element)> {
        self.elements.iter().enumerate().map(|(index, element)| (NodeId(index), element))
    }

    /// The element in `slot` of `id`
    pub fn neighbor(&self, id : NodeId, slot : Slot) -> Option<NodeId> {
        self.get(id).neighbors.get(slot)
    }
}


#[cfg(test)]
mod tests {
    use super::{Neighbors, NodeId, Slot};

    #[test]
    fn neighbor_slots() {
        let mut neighbors = Neighbors::default();
        assert_eq!(neighbors.set(Slot::Right, NodeId(3)), None);
        assert_eq!(neighbors.set(Slot::Subscript, NodeId(1)), None);
        assert_eq!(neighbors.set(Slot::Above, NodeId(2)), None);
        assert_eq!(neighbors.set(Slot::Subscript, NodeId(4)), Some(NodeId(1)));

        let all : Vec<_> = neighbors.iter(&Slot::ALL).collect();
        assert_eq!(all, [(Slot::Above, NodeId(2)), (Slot::Subscript, NodeId(4)), (Slot::Right, NodeId(3))]);
        let attached : Vec<_> = neighbors.iter(&Slot::ATTACHED).map(|(_, id)| id).collect();
        assert_eq!(attached, [NodeId(2), NodeId(4)]);
        assert!(Slot::Superscript.is_script() && !Slot::Below.is_script());
    }
}
