//! The syntax tree produced by the parser

use super::symbols::SymbolKey;
use crate::font::FontFace;

/// A node of the syntax tree
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxNode {
    /// A single glyph
    Symbol(Symbol),
    /// Blank space
    Space(Space),
    /// Changes the font of the siblings that follow, e.g. `\rm`
    FontMarker(FontFace),
    /// A `{..}` scope, the expansion of a function name like `\sin` or of a font command like `\mathrm{..}`
    Group(Vec<SyntaxNode>),
    /// The content of a `$..$` segment
    MathGroup(Vec<SyntaxNode>),
    /// Literal text outside of `$..$`
    NonMathGroup(Vec<SyntaxNode>),
    /// An accent drawn on top of its base, e.g. `\hat x`
    Accent(Accent),
    /// Two nodes stacked vertically, e.g. `\over{A}{B}` or `\angstrom`
    Composite(Composite),
    /// A base with a subscript and/or a superscript
    Scripts(Scripts),
    /// The root of the tree: alternating non-math and math segments
    Expression(Vec<SyntaxNode>),
}

/// A glyph to draw
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// what glyph
    pub key : SymbolKey,
    /// a face that ignores the current font
    pub font : Option<FontFace>,
    /// size relative to the surrounding font size
    pub scale : f64,
}

impl Symbol {
    /// A symbol in the current font at the current size
    pub fn new(key : impl Into<SymbolKey>) -> Self {
        Self { key: key.into(), font: None, scale: 1.0 }
    }
}

/// Blank space, sized as a fraction of the font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Space {
    /// in em
    pub width : f64,
    /// in em
    pub height : f64,
}

impl Space {
    /// A space of zero height
    pub fn horizontal(width : f64) -> Self {
        Self { width, height: 0. }
    }
}

/// An accent and the symbol it sits on
#[derive(Debug, Clone, PartialEq)]
pub struct Accent {
    /// name of the accent glyph (e.g. `circumflexaccent`)
    pub accent : SymbolKey,
    /// the accented node
    pub base : Box<SyntaxNode>,
}

/// Where the second node of a [`Composite`] goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `second` is drawn above `first`
    Over,
    /// `second` is drawn below `first`
    Under,
}

/// Two nodes stacked vertically
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    /// above or below
    pub relation : Relation,
    /// the node that takes part in the horizontal flow
    pub first : Box<SyntaxNode>,
    /// the stacked node
    pub second : Box<SyntaxNode>,
    /// vertical padding of `first` in points, if not the default one
    pub pad : Option<f64>,
}

/// How the scripts are placed around the base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptPlacement {
    /// At the right corners: `x_i^j`
    Corner,
    /// Below and above: `\sum_{i}^{n}`
    Straddle,
}

/// A base with scripts. At least one of the scripts is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Scripts {
    /// what the scripts are attached to
    pub base : Box<SyntaxNode>,
    /// `_`
    pub subscript : Option<Box<SyntaxNode>>,
    /// `^`
    pub superscript : Option<Box<SyntaxNode>>,
    /// corner or straddle
    pub placement : ScriptPlacement,
}

impl SyntaxNode {
    /// Children of a group-like node, `None` for other nodes
    pub fn group_elements(&self) -> Option<&[SyntaxNode]> {
        match self {
            SyntaxNode::Group(nodes)
            | SyntaxNode::MathGroup(nodes)
            | SyntaxNode::NonMathGroup(nodes)
            | SyntaxNode::Expression(nodes) => Some(nodes),
            _ => None,
        }
    }

    /// The symbol, if the node is a plain symbol
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            SyntaxNode::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }
}
