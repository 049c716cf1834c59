//! Character level scanning shared by all grammars.

use std::str::Chars;

use crate::ParseError;

/// A position in the input text.
///
/// The cursor holds a single character of look-ahead: the current character,
/// or `None` once the input is exhausted. Line and column counters are kept
/// for diagnostics only.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    chars: Chars<'a>,
    current: Option<char>,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let mut chars = text.chars();
        let current = chars.next();
        Self {
            chars,
            current,
            line: 1,
            column: 1,
        }
    }

    /// The current character, or `None` at the end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.current
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the (line, column) of the current character.
    pub(crate) fn position(&self) -> (u32, u32) {
        (self.line, self.column)
    }

    /// Moves to the next character.
    #[inline]
    pub(crate) fn advance(&mut self) {
        match self.current {
            Some('\n') => {
                self.line = self.line.saturating_add(1);
                self.column = 1;
            }
            Some(_) => self.column = self.column.saturating_add(1),
            None => return,
        }
        self.current = self.chars.next();
    }

    /// Returns the numeric value of the current character if it is an ASCII
    /// decimal digit.
    #[inline]
    pub(crate) fn digit(&self) -> Option<i32> {
        self.current.and_then(|ch| ch.to_digit(10)).map(|d| d as i32)
    }

    /// Returns true if the current character may begin a number.
    #[inline]
    pub(crate) fn starts_number(&self) -> bool {
        matches!(self.current, Some('+' | '-' | '.' | '0'..='9'))
    }

    pub(crate) fn skip_spaces(&mut self) {
        while self.current.is_some_and(is_space) {
            self.advance();
        }
    }

    /// Skips whitespace, at most one comma, and any whitespace following it.
    ///
    /// Returns true if a comma was consumed, in which case the grammar
    /// requires another operand to follow.
    pub(crate) fn skip_comma_spaces(&mut self) -> bool {
        self.skip_spaces();
        if self.current != Some(',') {
            return false;
        }
        self.advance();
        self.skip_spaces();
        true
    }

    /// Skips to the start of the next subpath (a moveto command) or the end
    /// of input.
    pub(crate) fn skip_subpath(&mut self) {
        while !matches!(self.current, None | Some('m' | 'M')) {
            self.advance();
        }
    }

    /// Builds an error describing the current character as unexpected.
    pub(crate) fn unexpected(&self) -> ParseError {
        let (line, column) = self.position();
        match self.current {
            Some(found) => ParseError::UnexpectedCharacter {
                found,
                line,
                column,
            },
            None => ParseError::UnexpectedEnd { line, column },
        }
    }
}

/// SVG whitespace: space, tab, carriage return and line feed.
#[inline]
pub(crate) fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}
