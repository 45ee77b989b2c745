//! Symbols and the named commands of the grammar: accents, function names, font commands and stacked symbols.

use std::fmt;

use super::unicode::{tex_to_unicode, type1_to_unicode};
use crate::font::FontFace;

/// What a symbol element draws: either a literal character or a name resolved through the name tables
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SymbolKey {
    /// A literal code point, e.g. `x` or `+`
    Char(char),
    /// A TeX command name without the backslash (e.g. `alpha`), or a Type1 glyph name (e.g. `degree`)
    Name(Box<str>),
}

impl SymbolKey {
    /// Creates a named symbol key
    pub fn from_name(name : &str) -> Self {
        SymbolKey::Name(name.into())
    }

    /// The literal code point, if the key is one
    pub fn as_char(&self) -> Option<char> {
        match *self {
            SymbolKey::Char(c) => Some(c),
            SymbolKey::Name(_) => None,
        }
    }

    /// The name, if the key is one
    pub fn as_name(&self) -> Option<&str> {
        match self {
            SymbolKey::Char(_)    => None,
            SymbolKey::Name(name) => Some(name),
        }
    }
}

impl From<char> for SymbolKey {
    fn from(c : char) -> Self {
        SymbolKey::Char(c)
    }
}

impl fmt::Display for SymbolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKey::Char(c)    => write!(f, "{}", c),
            SymbolKey::Name(name) => write!(f, "\\{}", name),
        }
    }
}

/// Resolves a symbol key to a code point.
/// Tries, in order: the literal character, the TeX name table, the Type1 name table.
pub fn unicode_index(key : &SymbolKey) -> Option<char> {
    match key {
        SymbolKey::Char(c)    => Some(*c),
        SymbolKey::Name(name) => tex_to_unicode(name).or_else(|| type1_to_unicode(name)),
    }
}

/// Is this the name of a symbol that can be drawn
pub fn is_known_symbol(name : &str) -> bool {
    tex_to_unicode(name).is_some() || type1_to_unicode(name).is_some()
}


/// Given an accent command (e.g. `hat` or `"`), returns the name of the glyph drawn above the base
pub fn accent_symbol(name : &str) -> Option<&'static str> {
    let symbol = match name {
        "hat"   | "^"  => "circumflexaccent",
        "breve"        => "combiningbreve",
        "bar"          => "combiningoverline",
        "grave" | "`"  => "combininggraveaccent",
        "acute" | "'"  => "combiningacuteaccent",
        "ddot"  | "\"" => "combiningdiaeresis",
        "tilde" | "~"  => "combiningtilde",
        "dot"   | "."  => "combiningdotabove",
        "vec"          => "combiningrightarrowabove",
        "check"        => "combiningcaron",
        _ => return None,
    };
    Some(symbol)
}

/// Names typeset upright as a word, e.g. `\sin`
const FUNCTIONS : &[&str] = &[
    "arccos", "csc", "ker", "min", "arcsin", "deg", "lg", "Pr", "arctan", "det", "lim", "sec",
    "arg", "dim", "liminf", "sin", "cos", "exp", "limsup", "sinh", "cosh", "gcd", "ln", "sup",
    "cot", "hom", "log", "tan", "coth", "inf", "max", "tanh",
];

/// Is `name` a function name like `sin` or `lim`
pub fn is_function(name : &str) -> bool {
    FUNCTIONS.contains(&name)
}

/// Symbols whose scripts are placed below and above instead of at the corners
const STRADDLE_SYMBOLS : &[&str] = &["sum", "int", "prod", "coprod"];

/// Are the scripts of the symbol placed below and above it, like `\sum_{i}^{n}`
pub fn straddles_scripts(key : &SymbolKey) -> bool {
    key.as_name().map_or(false, |name| STRADDLE_SYMBOLS.contains(&name))
}

/// Font of a LaTeX2e font command, e.g. `\mathrm{..}`
pub fn latex2e_font(name : &str) -> Option<FontFace> {
    name.strip_prefix("math").and_then(FontFace::from_name)
}


/// One of the two symbols of a [`CharOverChar`]
#[derive(Debug, Clone, PartialEq)]
pub struct StackedSymbol {
    /// Face that overrides the current font, if any
    pub font : Option<FontFace>,
    /// The symbol drawn
    pub key : SymbolKey,
    /// Size relative to the surrounding font size
    pub scale : f64,
}

/// A symbol made of a character with another one on top of it, e.g. `\angstrom`
#[derive(Debug, Clone, PartialEq)]
pub struct CharOverChar {
    /// Bottom symbol, the one that carries the scripts
    pub under : StackedSymbol,
    /// Top symbol
    pub over : StackedSymbol,
    /// Vertical space between the two, in points
    pub pad : f64,
}

/// Looks up the stacked symbols a command expands to
pub fn char_over_char(name : &str) -> Option<CharOverChar> {
    match name {
        "angstrom" => Some(CharOverChar {
            under : StackedSymbol { font: Some(FontFace::Rm), key: SymbolKey::Char('A'), scale: 1.0 },
            over  : StackedSymbol { font: None, key: SymbolKey::from_name("circ"), scale: 0.5 },
            pad   : 0.0,
        }),
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_order() {
        let cases = [
            (SymbolKey::Char('x'),             Some('x')),
            (SymbolKey::from_name("pi"),       Some('π')),
            // a TeX name wins over a Type1 name
            (SymbolKey::from_name("Omega"),    Some('\u{3A9}')),
            (SymbolKey::from_name("degree"),   Some('°')),
            (SymbolKey::from_name("notaname"), None),
        ];
        for (key, expected) in cases {
            eprintln!("{}", key);
            assert_eq!(unicode_index(&key), expected);
        }
    }

    #[test]
    fn accents_resolve() {
        for name in ["hat", "breve", "bar", "grave", "acute", "ddot", "tilde", "dot", "vec", "check",
                     "\"", "`", "'", "~", ".", "^"] {
            eprintln!("\\{}", name);
            let symbol = accent_symbol(name).unwrap();
            assert!(is_known_symbol(symbol));
        }
        assert_eq!(accent_symbol("\""), accent_symbol("ddot"));
        assert_eq!(accent_symbol("hat"), Some("circumflexaccent"));
        assert_eq!(accent_symbol("alpha"), None);
    }

    #[test]
    fn named_commands() {
        assert!(is_function("sin"));
        assert!(is_function("Pr"));
        assert!(!is_function("alpha"));

        assert!(straddles_scripts(&SymbolKey::from_name("sum")));
        assert!(!straddles_scripts(&SymbolKey::Char('s')));
        assert!(!straddles_scripts(&SymbolKey::from_name("alpha")));

        assert_eq!(latex2e_font("mathcal"), Some(FontFace::Cal));
        assert_eq!(latex2e_font("cal"),     None);
        assert_eq!(latex2e_font("mathfoo"), None);
    }

    #[test]
    fn angstrom_stack() {
        let stack = char_over_char("angstrom").unwrap();
        assert_eq!(stack.under.key, SymbolKey::Char('A'));
        assert_eq!(stack.under.font, Some(FontFace::Rm));
        assert_eq!(stack.over.scale, 0.5);
        assert_eq!(unicode_index(&stack.over.key), Some('\u{2218}'));
        assert!(char_over_char("alpha").is_none());
    }
}
