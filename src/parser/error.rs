//! Errors in parsing

use std::fmt;


/// Result type for the [`ParseError`]
pub type ParseResult<T> = ::std::result::Result<T, ParseError>;


/// Which of the two script slots of a base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    /// `_`
    Subscript,
    /// `^`
    Superscript,
}

/// Syntax error in the formula provided, with the byte offset in the input where it was detected
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// byte offset in the input string
    pub offset : usize,
    /// what went wrong
    pub kind : ParseErrorKind,
}

/// The different kinds of syntax errors
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// There is more than one subscript or more than one superscript attached to the same base (e.g. `x_i_j`).
    DuplicateScript(ScriptKind),
    /// There is no command, accent, function or named symbol with this name
    InvalidSymbol(Box<str>),
    /// This character cannot appear here (e.g. `#` in math mode)
    UnexpectedCharacter(char),
    /// A symbol, a group or a command was expected, e.g. after `_` or at the end of input
    ExpectedPlaceable,
    /// A command needs a `{..}` argument but can't find one (e.g. `\mathrm x`).
    ExpectedGroup,
    /// A command argument that must hold something is empty, e.g. `\hspace{}`
    EmptyGroup,
    /// `$$` with nothing inside
    EmptyMath,
    /// A `$` was opened but never closed
    UnclosedMath,
    /// A `}` without a corresponding `{`, or a `{` without a corresponding `}`
    UnexpectedDelimiter,
    /// The argument of `\hspace{..}` is not a decimal number
    InvalidNumber,
}

impl ParseError {
    /// Creates an error of the given kind at `offset`
    pub fn new(offset : usize, kind : ParseErrorKind) -> Self {
        Self { offset, kind }
    }
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScriptKind::Subscript   => f.write_str("subscript"),
            ScriptKind::Superscript => f.write_str("superscript"),
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::ParseErrorKind::*;
        match *self {
            DuplicateScript(script) =>
                write!(f, "double {}", script),
            InvalidSymbol(ref name) =>
                write!(f, "unknown symbol: \\{}", name),
            UnexpectedCharacter(c) =>
                write!(f, "unexpected character '{}'", c),
            ExpectedPlaceable =>
                write!(f, "expected a symbol or a group"),
            ExpectedGroup =>
                write!(f, "expected an open group '{{'"),
            EmptyGroup =>
                write!(f, "the group may not be empty"),
            EmptyMath =>
                write!(f, "empty math expression"),
            UnclosedMath =>
                write!(f, "missing closing '$'"),
            UnexpectedDelimiter =>
                write!(f, "unmatched group delimiter"),
            InvalidNumber =>
                write!(f, "expected a decimal number"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (at offset {})", self.kind, self.offset)
    }
}

impl std::error::Error for ParseError {}
