//! Parses strings mixing text and `$..$` math into a [`SyntaxNode`] tree
//!
//! Defines the [`parse`] function, a shorthand for `Parser::new(input).parse()`.
//!
//! The input is a literal text run, followed by any number of `$ math $ text` pairs.
//! Inside math, whitespace is insignificant and the items are:
//!
//!  - spacing: `\ `, `\/` and `\hspace{N}` (N in em, i.e. as a fraction of the font size)
//!  - font changes: `\rm \it \tt \cal \sf \bf` and their LaTeX2e group forms `\mathrm{..}`, `\mathcal{..}`, ...
//!  - placeables, optionally followed by a subscript `_` and/or a superscript `^` in any order:
//!    symbols, `{..}` groups, accents (`\hat x`), function names (`\sin`), `\over{..}{..}` and `\under{..}{..}`.


#[deny(missing_docs)]
pub mod nodes;
#[deny(missing_docs)]
pub mod symbols;
pub mod unicode;
pub mod lexer;
pub mod error;

use std::fmt::Display;

pub use self::nodes::SyntaxNode;
use self::error::{ParseError, ParseErrorKind, ParseResult, ScriptKind};
use self::lexer::Lexer;
use self::nodes::{Accent, Composite, Relation, ScriptPlacement, Scripts, Space, Symbol};
use self::symbols::{accent_symbol, char_over_char, is_function, is_known_symbol, latex2e_font, straddles_scripts, SymbolKey};
use crate::font::FontFace;
use crate::layout::constants::{SMALL_SPACE, THIN_SPACE};


/// Any character that ends a sequence of math items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDelimiter {
    /// A closing bracket `}`
    CloseBracket,
    /// The `$` closing a math segment
    Dollar,
    /// End of input
    Eof
}

impl ParseDelimiter {
    fn expect(&self, expected: ParseDelimiter) -> Result<(), ParseErrorKind> {
        match (*self, expected) {
            (found, expected) if found == expected   => Ok(()),
            (ParseDelimiter::Eof, ParseDelimiter::Dollar) => Err(ParseErrorKind::UnclosedMath),
            _ => Err(ParseErrorKind::UnexpectedDelimiter),
        }
    }
}

impl Display for ParseDelimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseDelimiter::CloseBracket => f.write_str("}"),
            ParseDelimiter::Dollar       => f.write_str("$"),
            ParseDelimiter::Eof          => f.write_str("end of input"),
        }
    }
}

/// A parser, holding the input that remains to be parsed.
/// The lifetime `'i` is for the borrow of the input.
pub struct Parser<'i> {
    lexer : Lexer<'i>,
}

impl<'i> Parser<'i> {
    /// Creates a new parser from an input string.
    pub fn new(input : & 'i str) -> Self {
        Self { lexer: Lexer::new(input) }
    }

    /// Parses the input provided into an [`SyntaxNode::Expression`]. This is the main API entry point for parsing.
    pub fn parse(mut self) -> ParseResult<SyntaxNode> {
        self.parse_expression()
    }

    fn error(&self, kind : ParseErrorKind) -> ParseError {
        ParseError::new(self.lexer.offset(), kind)
    }

    fn parse_expression(&mut self) -> ParseResult<SyntaxNode> {
        let mut segments = vec![self.parse_non_math()];

        while !self.lexer.is_empty() {
            let open = self.lexer.offset();
            // text runs only stop at an unescaped `$`
            self.lexer.try_parse_char('$');
            segments.push(self.parse_math(open)?);
            segments.push(self.parse_non_math());
        }

        Ok(SyntaxNode::Expression(segments))
    }

    /// Every character of the run becomes a symbol, followed by a space so that the math after it doesn't stick to the text.
    fn parse_non_math(&mut self) -> SyntaxNode {
        let text = self.lexer.text_run().replace(r"\$", "$");
        let symbols = text
            .chars()
            .chain(std::iter::once(' '))
            .map(|c| SyntaxNode::Symbol(Symbol::new(c)))
            .collect();
        SyntaxNode::NonMathGroup(symbols)
    }

    /// Assuming the opening `$` has just been parsed at offset `open`, parses math up to the closing `$`.
    fn parse_math(&mut self, open : usize) -> ParseResult<SyntaxNode> {
        let (nodes, delimiter) = self.parse_sequence()?;
        delimiter.expect(ParseDelimiter::Dollar).map_err(|kind| self.delimiter_error(open, delimiter, kind))?;
        if nodes.is_empty() {
            return Err(ParseError::new(open, ParseErrorKind::EmptyMath));
        }
        Ok(SyntaxNode::MathGroup(nodes))
    }

    /// An unclosed scope is reported where it was opened, a stray delimiter where it was found.
    fn delimiter_error(&self, open : usize, found : ParseDelimiter, kind : ParseErrorKind) -> ParseError {
        match found {
            ParseDelimiter::Eof => ParseError::new(open, kind),
            _ => ParseError::new(self.lexer.offset() - 1, kind),
        }
    }

    /// Parses math items until a delimiter is met. The delimiter is consumed.
    fn parse_sequence(&mut self) -> ParseResult<(Vec<SyntaxNode>, ParseDelimiter)> {
        let mut nodes = Vec::new();
        loop {
            self.lexer.consume_whitespace();
            if let Some(delimiter) = self.end_of_parse() {
                return Ok((nodes, delimiter));
            }
            nodes.push(self.parse_item()?);
        }
    }

    /// Check if parser has reached the end of a sequence of items.
    fn end_of_parse(&mut self) -> Option<ParseDelimiter> {
        if self.lexer.is_empty() {
            Some(ParseDelimiter::Eof)
        }
        else if self.lexer.try_parse_char('}').is_some() {
            Some(ParseDelimiter::CloseBracket)
        }
        else if self.lexer.try_parse_char('$').is_some() {
            Some(ParseDelimiter::Dollar)
        }
        else {
            None
        }
    }

    fn parse_item(&mut self) -> ParseResult<SyntaxNode> {
        // spacing and font changes take no scripts
        if let Some(space) = self.parse_space() {
            return space.map(SyntaxNode::Space);
        }
        if let Some(font) = self.parse_font() {
            return font;
        }
        self.parse_scripts()
    }

    /// Parses `\ `, `\/` or `\hspace{N}`.
    /// If unable to, it does not advance input.
    fn parse_space(&mut self) -> Option<ParseResult<Space>> {
        let saved = self.lexer;
        let width = match self.lexer.control_sequence()? {
            " "      => return Some(Ok(Space::horizontal(SMALL_SPACE))),
            "/"      => return Some(Ok(Space::horizontal(THIN_SPACE))),
            "hspace" => self.parse_number_argument(),
            _ => {
                self.lexer = saved; // rewind, the control sequence is something else
                return None;
            }
        };
        Some(width.map(Space::horizontal))
    }

    /// Parses `{N}` where N is a decimal number
    fn parse_number_argument(&mut self) -> ParseResult<f64> {
        self.lexer.consume_whitespace();
        self.lexer.try_parse_char('{').ok_or_else(|| self.error(ParseErrorKind::ExpectedGroup))?;
        self.lexer.consume_whitespace();

        let number_start = self.lexer.offset();
        let number = match self.lexer.number() {
            Some(number) => number,
            None if self.lexer.peek() == Some('}') => return Err(self.error(ParseErrorKind::EmptyGroup)),
            None => return Err(self.error(ParseErrorKind::InvalidNumber)),
        };

        self.lexer.consume_whitespace();
        self.lexer.try_parse_char('}').ok_or_else(|| self.error(ParseErrorKind::InvalidNumber))?;

        number.parse::<f64>().map_err(|_| ParseError::new(number_start, ParseErrorKind::InvalidNumber))
    }

    /// Parses `\rm`-like font changes and `\mathrm{..}`-like font groups.
    /// If unable to, it does not advance input.
    fn parse_font(&mut self) -> Option<ParseResult<SyntaxNode>> {
        let saved = self.lexer;
        let name = self.lexer.control_sequence()?;

        if let Some(face) = FontFace::from_name(name) {
            return Some(Ok(SyntaxNode::FontMarker(face)));
        }
        if let Some(face) = latex2e_font(name) {
            return Some(self.parse_required_group().map(|nodes| {
                let mut group = Vec::with_capacity(nodes.len() + 1);
                group.push(SyntaxNode::FontMarker(face));
                group.extend(nodes);
                SyntaxNode::Group(group)
            }));
        }

        self.lexer = saved;
        None
    }

    /// Parses a placeable and the scripts that follow it.
    /// Scripts may come in any order, but at most one of each kind.
    fn parse_scripts(&mut self) -> ParseResult<SyntaxNode> {
        let base = match self.lexer.peek() {
            Some('_') | Some('^') => SyntaxNode::Space(Space::horizontal(0.)),
            _ => self.parse_placeable()?,
        };

        let mut subscript   = None;
        let mut superscript = None;
        loop {
            self.lexer.consume_whitespace();
            let script_start = self.lexer.offset();
            let (kind, slot) =
                if self.lexer.try_parse_char('_').is_some() {
                    (ScriptKind::Subscript, &mut subscript)
                }
                else if self.lexer.try_parse_char('^').is_some() {
                    (ScriptKind::Superscript, &mut superscript)
                }
                else {
                    break;
                };

            if slot.is_some() {
                return Err(ParseError::new(script_start, ParseErrorKind::DuplicateScript(kind)));
            }
            *slot = Some(Box::new(self.parse_placeable()?));
        }

        if subscript.is_none() && superscript.is_none() {
            return Ok(base);
        }

        let placement = match base.as_symbol() {
            Some(symbol) if symbol.font.is_none() && straddles_scripts(&symbol.key) => ScriptPlacement::Straddle,
            _ => ScriptPlacement::Corner,
        };

        Ok(SyntaxNode::Scripts(Scripts {
            base : Box::new(base),
            subscript,
            superscript,
            placement,
        }))
    }

    /// Parses a symbol, a group or a command producing something drawable
    fn parse_placeable(&mut self) -> ParseResult<SyntaxNode> {
        self.lexer.consume_whitespace();
        let start = self.lexer.offset();

        if let Some(name) = self.lexer.control_sequence() {
            return self.parse_command(name, start);
        }
        if let Some(group) = self.parse_group() {
            return group.map(SyntaxNode::Group);
        }
        self.parse_char_symbol().map(SyntaxNode::Symbol)
    }

    /// Having read the command `\name` starting at `start`, parses the rest of the construct
    fn parse_command(&mut self, name : &str, start : usize) -> ParseResult<SyntaxNode> {
        if let Some(accent) = accent_symbol(name) {
            return self.parse_accent(accent);
        }

        if is_function(name) {
            let mut letters = vec![SyntaxNode::FontMarker(FontFace::Rm)];
            letters.extend(name.chars().map(|c| SyntaxNode::Symbol(Symbol::new(c))));
            return Ok(SyntaxNode::Group(letters));
        }

        let relation = match name {
            "over"  => Some(Relation::Over),
            "under" => Some(Relation::Under),
            _ => None,
        };
        if let Some(relation) = relation {
            let first  = self.parse_required_group()?;
            let second = self.parse_required_group()?;
            return Ok(SyntaxNode::Composite(Composite {
                relation,
                first  : Box::new(SyntaxNode::Group(first)),
                second : Box::new(SyntaxNode::Group(second)),
                pad    : None,
            }));
        }

        if let Some(stack) = char_over_char(name) {
            let under = Symbol { key: stack.under.key, font: stack.under.font, scale: stack.under.scale };
            let over  = Symbol { key: stack.over.key,  font: stack.over.font,  scale: stack.over.scale };
            return Ok(SyntaxNode::Composite(Composite {
                relation : Relation::Over,
                first    : Box::new(SyntaxNode::Symbol(under)),
                second   : Box::new(SyntaxNode::Symbol(over)),
                pad      : Some(stack.pad),
            }));
        }

        self.named_symbol(name, start).map(SyntaxNode::Symbol)
    }

    /// A command standing for a single symbol: `\$` or a name from the symbol tables
    fn named_symbol(&self, name : &str, start : usize) -> ParseResult<Symbol> {
        if name == "$" {
            Ok(Symbol::new('$'))
        }
        else if is_known_symbol(name) {
            Ok(Symbol::new(SymbolKey::from_name(name)))
        }
        else if name == "hspace" || FontFace::from_name(name).is_some() || latex2e_font(name).is_some() {
            // spacing and font changes can't be a script or an accent's base
            Err(ParseError::new(start, ParseErrorKind::ExpectedPlaceable))
        }
        else {
            Err(ParseError::new(start, ParseErrorKind::InvalidSymbol(name.into())))
        }
    }

    /// Parses a single-character symbol
    fn parse_char_symbol(&mut self) -> ParseResult<Symbol> {
        match self.lexer.peek() {
            None | Some('$') | Some('}') | Some('_') | Some('^') => Err(self.error(ParseErrorKind::ExpectedPlaceable)),
            Some(c) if is_symbol_char(c) => {
                self.lexer.next_char();
                Ok(Symbol::new(c))
            },
            Some(c) => Err(self.error(ParseErrorKind::UnexpectedCharacter(c))),
        }
    }

    /// Assuming an accent command has just been parsed, parses its base: a single symbol, optionally in braces.
    fn parse_accent(&mut self, accent : &str) -> ParseResult<SyntaxNode> {
        self.lexer.consume_whitespace();
        let open = self.lexer.offset();
        let braced = self.lexer.try_parse_char('{').is_some();
        self.lexer.consume_whitespace();

        let start = self.lexer.offset();
        let base = match self.lexer.control_sequence() {
            Some(name) => self.named_symbol(name, start)?,
            None       => self.parse_char_symbol()?,
        };

        if braced {
            self.lexer.consume_whitespace();
            self.lexer.try_parse_char('}').ok_or_else(|| ParseError::new(open, ParseErrorKind::UnexpectedDelimiter))?;
        }

        Ok(SyntaxNode::Accent(Accent {
            accent : SymbolKey::from_name(accent),
            base   : Box::new(SyntaxNode::Symbol(base)),
        }))
    }

    /// Parses a `{..}` group if there is one.
    /// If there is none, it does not advance input.
    fn parse_group(&mut self) -> Option<ParseResult<Vec<SyntaxNode>>> {
        let open = self.lexer.offset();
        self.lexer.try_parse_char('{')?;

        Some((|| {
            let (nodes, delimiter) = self.parse_sequence()?;
            delimiter.expect(ParseDelimiter::CloseBracket).map_err(|kind| self.delimiter_error(open, delimiter, kind))?;
            if nodes.is_empty() {
                return Err(ParseError::new(open, ParseErrorKind::EmptyGroup));
            }
            Ok(nodes)
        })())
    }

    /// Parses the `{..}` argument of a command
    fn parse_required_group(&mut self) -> ParseResult<Vec<SyntaxNode>> {
        self.lexer.consume_whitespace();
        self.parse_group().unwrap_or_else(|| Err(self.error(ParseErrorKind::ExpectedGroup)))
    }
}

/// Characters that stand for themselves in math
fn is_symbol_char(c : char) -> bool {
    c.is_ascii_alphanumeric() || "+-*/<>=:,.;!@%&[]()".contains(c)
}


/// This function is the API entry point for parsing.
pub fn parse(input: &str) -> ParseResult<SyntaxNode> {
    Parser::new(input).parse()
}



// --------------
//     TESTS
// --------------
