use crate::dimensions::Unit;
use crate::parser::nodes::{Relation, ScriptPlacement, SyntaxNode};
use super::constants::ACCENT_PAD;
use super::{Element, ElementKind, GroupKind, LayoutTree, NodeId, Slot, SymbolElement};

impl LayoutTree {
    /// Builds the layout tree of a syntax tree.
    ///
    ///  - groups chain their elements through the right slot.
    ///  - an accent goes above its base, whose vertical padding shrinks to [`ACCENT_PAD`].
    ///  - `\over` and `\under` put their second argument above or below the first.
    ///  - scripts go to the subscript and superscript slots, or below and above for symbols like `\sum`.
    pub fn from_syntax(node : &SyntaxNode) -> LayoutTree {
        let mut tree = LayoutTree { elements : Vec::new(), root : NodeId(0) };
        tree.root = tree.build(node);
        tree
    }

    fn push(&mut self, element : Element) -> NodeId {
        self.elements.push(element);
        NodeId(self.elements.len() - 1)
    }

    fn attach(&mut self, base : NodeId, slot : Slot, id : NodeId) {
        let previous = self.get_mut(base).neighbors.set(slot, id);
        debug_assert!(previous.is_none(), "slot {:?} of {:?} is taken", slot, base);
    }

    fn build(&mut self, node : &SyntaxNode) -> NodeId {
        match node {
            SyntaxNode::Symbol(symbol) => {
                let mut element = Element::new(ElementKind::Symbol(SymbolElement::new(symbol.key.clone(), symbol.font)));
                element.config.scale = symbol.scale;
                self.push(element)
            },
            SyntaxNode::Space(space) => self.push(Element::new(ElementKind::Space {
                width  : Unit::new(space.width),
                height : Unit::new(space.height),
            })),
            SyntaxNode::FontMarker(face) => self.push(Element::new(ElementKind::FontMarker(*face))),
            SyntaxNode::Group(nodes)        => self.build_group(GroupKind::Group, nodes),
            SyntaxNode::MathGroup(nodes)    => self.build_group(GroupKind::Math, nodes),
            SyntaxNode::NonMathGroup(nodes) => self.build_group(GroupKind::NonMath, nodes),
            SyntaxNode::Expression(nodes)   => self.build_group(GroupKind::Expression, nodes),
            SyntaxNode::Accent(accent) => {
                let base = self.build(&accent.base);
                let mark = self.push(Element::new(ElementKind::Accent(SymbolElement::new(accent.accent.clone(), None))));
                self.attach(base, Slot::Above, mark);
                self.get_mut(base).config.pady = ACCENT_PAD;
                base
            },
            SyntaxNode::Composite(composite) => {
                let first  = self.build(&composite.first);
                let second = self.build(&composite.second);
                let slot = match composite.relation {
                    Relation::Over  => Slot::Above,
                    Relation::Under => Slot::Below,
                };
                self.attach(first, slot, second);
                if let Some(pad) = composite.pad {
                    self.get_mut(first).config.pady = Unit::new(pad);
                }
                first
            },
            SyntaxNode::Scripts(scripts) => {
                let base = self.build(&scripts.base);
                let (sub_slot, sup_slot) = match scripts.placement {
                    ScriptPlacement::Corner   => (Slot::Subscript, Slot::Superscript),
                    ScriptPlacement::Straddle => (Slot::Below, Slot::Above),
                };
                if let Some(ref subscript) = scripts.subscript {
                    let id = self.build(subscript);
                    self.attach(base, sub_slot, id);
                }
                if let Some(ref superscript) = scripts.superscript {
                    let id = self.build(superscript);
                    self.attach(base, sup_slot, id);
                }
                base
            },
        }
    }

    fn build_group(&mut self, kind : GroupKind, nodes : &[SyntaxNode]) -> NodeId {
        let elements : Vec<NodeId> = nodes.iter().map(|node| self.build(node)).collect();
        for pair in elements.windows(2) {
            self.attach(pair[0], Slot::Right, pair[1]);
        }
        self.push(Element::new(ElementKind::Group { kind, elements }))
    }
}
