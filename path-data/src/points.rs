//! Parsing for the `points` attribute of `polyline` and `polygon` elements.

use crate::{
    cursor::Cursor, error::Diagnostics, number::parse_float, Limits, ParseError, PointsHandler,
};

/// Parses the given list of points and emits each coordinate pair to the
/// specified handler.
///
/// Returns `true` if the list was free of errors.
pub fn parse_points(points: &str, handler: &mut impl PointsHandler) -> bool {
    PointsParser::new(handler).parse(points)
}

/// Parser for a list of coordinate pairs.
///
/// Unlike path data there is no recovery point in a list of points, so the
/// first error ends the list. Points emitted before the error are kept and
/// [`end_points`](PointsHandler::end_points) is still invoked.
pub struct PointsParser<'a, H> {
    handler: &'a mut H,
    diagnostics: Diagnostics,
}

impl<'a, H> PointsParser<'a, H>
where
    H: PointsHandler,
{
    /// Creates a new parser that emits points to the given handler.
    pub fn new(handler: &'a mut H) -> Self {
        Self {
            handler,
            diagnostics: Diagnostics::new(Limits::default()),
        }
    }

    /// Sets the resource limits for subsequent parses.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.diagnostics.set_limits(limits);
        self
    }

    pub fn limits(&self) -> Limits {
        self.diagnostics.limits()
    }

    /// Returns the handler receiving points.
    pub fn handler(&self) -> &H {
        self.handler
    }

    /// Replaces the handler that receives points from subsequent parses.
    pub fn set_handler(&mut self, handler: &'a mut H) {
        self.handler = handler;
    }

    /// Returns the errors encountered by the most recent parse.
    pub fn errors(&self) -> &[ParseError] {
        self.diagnostics.errors()
    }

    /// Parses the given list of points.
    ///
    /// Returns `true` if no errors were encountered.
    pub fn parse(&mut self, points: &str) -> bool {
        let started = self.diagnostics.begin(points);
        if let Err(e) = self.handler.start_points() {
            self.diagnostics.report(e.into());
        }
        let result = started.and_then(|_| self.parse_pairs(&mut Cursor::new(points)));
        if let Err(e) = result {
            self.diagnostics.report(e);
        }
        if let Err(e) = self.handler.end_points() {
            self.diagnostics.report(e.into());
        }
        log::trace!(
            "parsed {} bytes of points with {} error(s)",
            points.len(),
            self.errors().len()
        );
        self.diagnostics.is_empty()
    }

    fn parse_pairs(&mut self, cursor: &mut Cursor) -> Result<(), ParseError> {
        cursor.skip_spaces();
        while !cursor.is_at_end() {
            let x = parse_float(cursor)?;
            cursor.skip_comma_spaces();
            let y = parse_float(cursor)?;
            self.handler.point(x, y)?;
            cursor.skip_comma_spaces();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{HandlerError, Point};

    fn parse(points: &str) -> (bool, Vec<Point>, Vec<ParseError>) {
        let mut handler = Vec::new();
        let mut parser = PointsParser::new(&mut handler);
        let ok = parser.parse(points);
        let errors = parser.errors().to_vec();
        (ok, handler, errors)
    }

    fn points(coords: &[(f32, f32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn separators() {
        let expected = points(&[(10.0, 20.0), (30.0, 40.0)]);
        for text in [
            "10,20 30,40",
            "10 20 30 40",
            " 10 , 20 , 30 , 40 ",
            "10,20,30,40",
            "\n10\t20\r\n30 40\n",
            "10 20,30 40",
        ] {
            let (ok, result, _) = parse(text);
            assert!(ok, "{text}");
            assert_eq!(result, expected, "{text}");
        }
    }

    #[test]
    fn compact() {
        let (ok, result, _) = parse("1-2.5.5-1e1+3 4");
        assert!(ok);
        assert_eq!(result, points(&[(1.0, -2.5), (0.5, -10.0), (3.0, 4.0)]));
    }

    #[test]
    fn empty() {
        assert_eq!(parse(""), (true, vec![], vec![]));
        assert_eq!(parse("   \n "), (true, vec![], vec![]));
    }

    #[test]
    fn odd_coordinate_count() {
        let (ok, result, errors) = parse("10,20 30");
        assert!(!ok);
        assert_eq!(result, points(&[(10.0, 20.0)]));
        assert_eq!(errors, [ParseError::UnexpectedEnd { line: 1, column: 9 }]);
    }

    #[test]
    fn first_error_ends_list() {
        let (ok, result, errors) = parse("1,2 3,x 5,6");
        assert!(!ok);
        assert_eq!(result, points(&[(1.0, 2.0)]));
        assert_eq!(
            errors,
            [ParseError::UnexpectedCharacter {
                found: 'x',
                line: 1,
                column: 7
            }]
        );
    }

    #[test]
    fn trailing_comma_is_accepted() {
        let (ok, result, _) = parse("1,2,");
        assert!(ok);
        assert_eq!(result, points(&[(1.0, 2.0)]));
    }

    #[derive(Default)]
    struct Bounded {
        count: usize,
        started: bool,
        ended: bool,
    }

    impl PointsHandler for Bounded {
        fn start_points(&mut self) -> Result<(), HandlerError> {
            self.started = true;
            Ok(())
        }

        fn point(&mut self, _x: f32, _y: f32) -> Result<(), HandlerError> {
            if self.count == 2 {
                return Err(HandlerError::new("too many points"));
            }
            self.count += 1;
            Ok(())
        }

        fn end_points(&mut self) -> Result<(), HandlerError> {
            self.ended = true;
            Ok(())
        }
    }

    #[test]
    fn handler_error() {
        let mut handler = Bounded::default();
        let mut parser = PointsParser::new(&mut handler);
        assert!(!parser.parse("1 2 3 4 5 6 7 8"));
        assert_eq!(
            parser.errors(),
            [ParseError::Handler(HandlerError::new("too many points"))]
        );
        assert_eq!(parser.handler().count, 2);
        assert!(handler.started && handler.ended);
    }

    #[test]
    fn input_length_limit() {
        let mut handler = Bounded::default();
        let mut parser = PointsParser::new(&mut handler).with_limits(Limits {
            max_input_len: 3,
            ..Default::default()
        });
        assert!(!parser.parse("1 2 3 4"));
        assert_eq!(
            parser.errors(),
            [ParseError::InputTooLong { len: 7, limit: 3 }]
        );
        assert_eq!(handler.count, 0);
        assert!(handler.started && handler.ended);
    }
}
