//! Defines different error types related to various phases of rendering a formula.
//!   - [`FontError`] : errors that have to do with the font provided (unknown symbol name, no such glyph in the face).
//!   - [`ParseError`] : syntax error in the formula provided (duplicate script, unknown command).
//!   - [`LayoutError`] : errors during the layout phase ; currently, these can only be font errors.

use std::fmt;

use crate::font::FontFace;
use crate::parser::symbols::SymbolKey;
pub use crate::parser::error::{ParseError, ParseResult};

/// Result type for the [`FontError`]
pub type FontResult<T> = ::std::result::Result<T, FontError>;
/// Result type for the [`LayoutError`]
pub type LayoutResult<T> = ::std::result::Result<T, LayoutError>;

/// Errors having to do with the fonts behind a metrics provider
#[derive(Debug, Clone, PartialEq)]
pub enum FontError {
    /// The symbol is neither a literal code point, nor a TeX name, nor a Type1 glyph name.
    InvalidSymbol(SymbolKey),
    /// The symbol resolved to a code point the face has no glyph for.
    UnknownSymbol {
        /// face that was asked
        face : FontFace,
        /// code point that was looked up
        codepoint : char,
    },
    /// No font file is registered for this face.
    MissingFace(FontFace),
    /// The font file could not be read.
    MalformedFont(String),
}

/// Errors during the layout phase ; currently, these can only be font errors.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// a font error
    Font(FontError)
}

impl From<FontError> for LayoutError {
    fn from(e: FontError) -> Self {
        LayoutError::Font(e)
    }
}

/// A generic error type covering any error that may happen during the process.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// a parse error
    Parse(ParseError),
    /// a layout error (including font errors)
    Layout(LayoutError)
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<LayoutError> for Error {
    fn from(e: LayoutError) -> Self {
        Error::Layout(e)
    }
}

impl From<FontError> for Error {
    fn from(e: FontError) -> Self {
        Error::Layout(LayoutError::Font(e))
    }
}


impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::FontError::*;
        match *self {
            InvalidSymbol(ref key) =>
                write!(f, "'{}' is not a recognized symbol", key),
            UnknownSymbol { face, codepoint } =>
                write!(f, "font {:?} has no glyph for {:?} (U+{:04X})", face, codepoint, codepoint as u32),
            MissingFace(face) =>
                write!(f, "no font file for face {:?}", face),
            MalformedFont(ref reason) =>
                write!(f, "malformed font: {}", reason),
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LayoutError::Font(ref e) => write!(f, "font error: {}", e),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Parse(ref e)  => write!(f, "parse error: {}", e),
            Error::Layout(ref e) => write!(f, "layout error: {}", e),
        }
    }
}

impl std::error::Error for FontError {}
impl std::error::Error for LayoutError {}
impl std::error::Error for Error {}
