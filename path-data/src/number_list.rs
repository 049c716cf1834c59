//! Parsing for whitespace and comma separated lists of numbers, such as the
//! `viewBox` attribute.

use crate::{
    cursor::Cursor, error::Diagnostics, number::parse_float, Limits, NumberListHandler,
    ParseError,
};

/// Parses the given list of numbers and emits each value to the specified
/// handler.
///
/// Returns `true` if the list was free of errors.
///
/// ```
/// let mut values: Vec<f32> = Vec::new();
/// assert!(path_data::parse_number_list("0 0, 100 50.5", &mut values));
/// assert_eq!(values, [0.0, 0.0, 100.0, 50.5]);
/// ```
pub fn parse_number_list(list: &str, handler: &mut impl NumberListHandler) -> bool {
    NumberListParser::new(handler).parse(list)
}

/// Parser for a list of numbers.
///
/// As with [`PointsParser`](crate::PointsParser), the first error ends the
/// list.
pub struct NumberListParser<'a, H> {
    handler: &'a mut H,
    diagnostics: Diagnostics,
}

impl<'a, H> NumberListParser<'a, H>
where
    H: NumberListHandler,
{
    pub fn new(handler: &'a mut H) -> Self {
        Self {
            handler,
            diagnostics: Diagnostics::new(Limits::default()),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.diagnostics.set_limits(limits);
        self
    }

    pub fn limits(&self) -> Limits {
        self.diagnostics.limits()
    }

    pub fn handler(&self) -> &H {
        self.handler
    }

    pub fn set_handler(&mut self, handler: &'a mut H) {
        self.handler = handler;
    }

    /// Returns the errors encountered by the most recent parse.
    pub fn errors(&self) -> &[ParseError] {
        self.diagnostics.errors()
    }

    /// Parses the given list of numbers.
    ///
    /// Returns `true` if no errors were encountered.
    pub fn parse(&mut self, list: &str) -> bool {
        let started = self.diagnostics.begin(list);
        if let Err(e) = self.handler.start_number_list() {
            self.diagnostics.report(e.into());
        }
        let result = started.and_then(|_| self.parse_numbers(&mut Cursor::new(list)));
        if let Err(e) = result {
            self.diagnostics.report(e);
        }
        if let Err(e) = self.handler.end_number_list() {
            self.diagnostics.report(e.into());
        }
        log::trace!(
            "parsed {} bytes of numbers with {} error(s)",
            list.len(),
            self.errors().len()
        );
        self.diagnostics.is_empty()
    }

    fn parse_numbers(&mut self, cursor: &mut Cursor) -> Result<(), ParseError> {
        cursor.skip_spaces();
        while !cursor.is_at_end() {
            let value = parse_float(cursor)?;
            self.handler.number(value)?;
            cursor.skip_comma_spaces();
        }
        Ok(())
    }
}
