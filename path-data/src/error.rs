//! Error types reported while parsing.

use thiserror::Error;

use crate::limits::Limits;

/// Error signalled by a handler when it rejects an otherwise well formed
/// event.
///
/// Handler errors are treated exactly like grammar errors: they are
/// recorded, and the parser skips ahead to the next recovery point.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HandlerError(String);

impl HandlerError {
    /// Creates a new handler error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Returns the message describing this error.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Errors that may occur when parsing path data, points or number lists.
///
/// Line and column numbers are one-based and count characters, not bytes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that is not a valid continuation of the grammar.
    #[error("unexpected character '{}' at {line}:{column}", found.escape_default())]
    UnexpectedCharacter { found: char, line: u32, column: u32 },
    /// The input ended where the grammar required more tokens.
    #[error("unexpected end of input at {line}:{column}")]
    UnexpectedEnd { line: u32, column: u32 },
    /// An arc flag was something other than a literal `0` or `1`.
    #[error("invalid arc flag {} at {line}:{column} (expected '0' or '1')", DisplayFlag(*found))]
    InvalidFlag {
        found: Option<char>,
        line: u32,
        column: u32,
    },
    /// The handler rejected an event.
    #[error("handler error: {0}")]
    Handler(#[from] HandlerError),
    /// The input exceeded the configured length limit.
    #[error("input length {len} exceeds the limit of {limit} bytes")]
    InputTooLong { len: usize, limit: usize },
}

struct DisplayFlag(Option<char>);

impl std::fmt::Display for DisplayFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(ch) => write!(f, "'{}'", ch.escape_default()),
            None => f.write_str("<end of input>"),
        }
    }
}

/// Errors collected during a single parse, bounded by [`Limits`].
#[derive(Clone, Default, Debug)]
pub(crate) struct Diagnostics {
    limits: Limits,
    errors: Vec<ParseError>,
}

impl Diagnostics {
    pub(crate) fn new(limits: Limits) -> Self {
        Self {
            limits,
            errors: Vec::new(),
        }
    }

    pub(crate) fn limits(&self) -> Limits {
        self.limits
    }

    pub(crate) fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    /// Clears errors from a previous parse and checks the input length.
    pub(crate) fn begin(&mut self, input: &str) -> Result<(), ParseError> {
        self.errors.clear();
        self.limits.check_input_len(input.len())
    }

    pub(crate) fn report(&mut self, error: ParseError) {
        log::warn!("{error}");
        self.errors.push(error);
    }

    /// Returns true when no further errors should be recovered from.
    pub(crate) fn is_saturated(&self) -> bool {
        self.errors.len() >= self.limits.max_errors
    }

    pub(crate) fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
