//! Low-level scanning of the input for the parser
use std::fmt;


/// The main structure for reading the input string piece by piece.
/// It is `Copy`, so that saving a lexer and restoring it is how the parser backtracks.
#[derive(Clone, Copy, Debug)]
pub struct Lexer<'a> {
    source : & 'a str,
    input  : & 'a str,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer pointing at the beginning of `input`
    pub fn new(input: &'a str) -> Lexer<'a> {
        Self { source: input, input }
    }

    /// Returns the part of the input that hasn't been consumed yet
    pub fn input(&self) -> & 'a str {
        self.input
    }

    /// Byte offset of the current position in the original input
    pub fn offset(&self) -> usize {
        self.source.len() - self.input.len()
    }

    /// Has all the input been consumed
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// The next character, without consuming it
    pub fn peek(&self) -> Option<char> {
        self.input.chars().next()
    }

    /// Consumes and returns the next character
    pub fn next_char(&mut self) -> Option<char> {
        let mut chars = self.input.chars();
        let c = chars.next()?;
        self.input = chars.as_str();
        Some(c)
    }

    /// Advances through the input so that the first character pointed to
    /// is not a whitespace
    pub fn consume_whitespace(&mut self) {
        self.input = self.input.trim_start();
    }

    /// Consumes the next character if it is `c`
    pub fn try_parse_char(&mut self, c : char) -> Option<()> {
        self.input = self.input.strip_prefix(c)?;
        Some(())
    }

    /// Attempts parsing a control sequence like `\bla`, returning `bla`.
    /// A command is either a single non-letter character (`\$`, `\ `) or a run of ASCII letters.
    pub fn control_sequence(&mut self) -> Option<& 'a str> {
        let mut chars = self.input.chars();
        if chars.next() != Some('\\') {
            return None;
        }

        let start_command = chars.as_str();

        // A \ at the end of input is an empty command, rejected by the parser as unknown
        let character = match chars.next() {
            Some(c) => c,
            None    => {
                self.input = start_command;
                return Some("");
            }
        };

        // If the first character is non-alphabetic, that is the command and we return it
        if !character.is_ascii_alphabetic() {
            let suffix = chars.as_str();
            self.input = suffix;
            return Some(diff_slices(start_command, suffix));
        }

        // Otherwise, we keep looping while characters are ASCII alphabetic
        let end_command = start_command.trim_start_matches(|c : char| c.is_ascii_alphabetic());
        self.input = end_command;

        Some(diff_slices(start_command, end_command))
    }

    /// Reads a decimal number `digits[.[digits]]`
    pub fn number(&mut self) -> Option<& 'a str> {
        let start = self.input;
        let after_int = start.trim_start_matches(|c : char| c.is_ascii_digit());
        if after_int.len() == start.len() {
            return None;
        }
        let end = match after_int.strip_prefix('.') {
            Some(after_dot) => after_dot.trim_start_matches(|c : char| c.is_ascii_digit()),
            None            => after_int,
        };
        self.input = end;
        Some(diff_slices(start, end))
    }

    /// Reads literal text up to the next `$` that isn't escaped as `\$`.
    /// The escapes are left in the returned slice.
    pub fn text_run(&mut self) -> & 'a str {
        let start = self.input;
        let mut chars = start.char_indices().peekable();
        let mut end = start.len();
        while let Some((index, c)) = chars.next() {
            match c {
                '\\' if chars.peek().map(|&(_, next)| next) == Some('$') => { chars.next(); },
                '$' => { end = index; break; },
                _ => (),
            }
        }
        self.input = &start[end ..];
        &start[.. end]
    }
}

impl<'a> fmt::Display for Lexer<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} at offset {}", self.input, self.offset())
    }
}

/// Assuming `slice2` is a suffix of `slice1`,
/// returns the prefix of `slice1` that ends just before the first character of `slice2`
fn diff_slices<'a>(slice : & 'a str, suffix : & 'a str) -> & 'a str {
    &slice[.. (slice.len() - suffix.len())]
}
