//! Parsing for SVG path data.
//!
//! See <https://www.w3.org/TR/SVG11/paths.html#PathDataBNF>

use crate::{
    cursor::{is_space, Cursor},
    error::Diagnostics,
    number::parse_float,
    HandlerError, Limits, ParseError, PathHandler,
};

/// Parses the given path data and emits the resulting commands to the
/// specified handler.
///
/// Returns `true` if the path data was free of errors. See [`PathParser`]
/// for details on error recovery and for access to the errors themselves.
pub fn parse_path(d: &str, handler: &mut impl PathHandler) -> bool {
    PathParser::new(handler).parse(d)
}

/// Parser for the `d` attribute of a `path` element.
///
/// The parser streams commands to the handler as they are read. When a
/// command is malformed (or the handler rejects it) the error is recorded,
/// the remainder of the current subpath is skipped and parsing resumes at the
/// next moveto command. The handler always receives matching
/// [`start_path`](PathHandler::start_path) and
/// [`end_path`](PathHandler::end_path) calls.
pub struct PathParser<'a, H> {
    handler: &'a mut H,
    diagnostics: Diagnostics,
}

impl<'a, H> PathParser<'a, H>
where
    H: PathHandler,
{
    /// Creates a new parser that emits commands to the given handler.
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

    /// Returns the handler receiving commands.
    pub fn handler(&self) -> &H {
        self.handler
    }

    /// Replaces the handler that receives commands from subsequent parses.
    pub fn set_handler(&mut self, handler: &'a mut H) {
        self.handler = handler;
    }

    /// Returns the errors encountered by the most recent parse.
    pub fn errors(&self) -> &[ParseError] {
        self.diagnostics.errors()
    }

    /// Parses the given path data.
    ///
    /// Returns `true` if no errors were encountered.
    pub fn parse(&mut self, d: &str) -> bool {
        let started = self.diagnostics.begin(d);
        if let Err(e) = self.handler.start_path() {
            self.diagnostics.report(e.into());
        }
        match started {
            Ok(()) => self.parse_commands(&mut Cursor::new(d)),
            Err(e) => self.diagnostics.report(e),
        }
        if let Err(e) = self.handler.end_path() {
            self.diagnostics.report(e.into());
        }
        log::trace!(
            "parsed {} bytes of path data with {} error(s)",
            d.len(),
            self.errors().len()
        );
        self.diagnostics.is_empty()
    }

    fn parse_commands(&mut self, cursor: &mut Cursor) {
        loop {
            let result = match cursor.current() {
                None => break,
                Some(ch) if is_space(ch) => {
                    cursor.advance();
                    continue;
                }
                Some(ch) => match Operator::from_letter(ch) {
                    Some(operator) => self.parse_command(cursor, operator, ch.is_ascii_lowercase()),
                    None => Err(cursor.unexpected()),
                },
            };
            if let Err(e) = result {
                self.diagnostics.report(e);
                if self.diagnostics.is_saturated() {
                    log::warn!("too many errors in path data, ignoring the remainder");
                    break;
                }
                let (line, column) = cursor.position();
                cursor.skip_subpath();
                let (to_line, to_column) = cursor.position();
                log::debug!("skipped subpath from {line}:{column} to {to_line}:{to_column}");
            }
        }
    }

    /// Parses a command letter and all of its operand groups.
    fn parse_command(
        &mut self,
        cursor: &mut Cursor,
        operator: Operator,
        relative: bool,
    ) -> Result<(), ParseError> {
        use Operator::*;
        let handler = &mut *self.handler;
        cursor.advance();
        if operator == ClosePath {
            return Ok(handler.close_path()?);
        }
        cursor.skip_spaces();
        match (operator, relative) {
            (MoveTo, _) => {
                let [x, y] = parse_args::<2>(cursor)?;
                if relative {
                    handler.moveto_rel(x, y)?;
                } else {
                    handler.moveto_abs(x, y)?;
                }
                // Additional coordinate pairs are implicit lineto commands
                let expect_number = cursor.skip_comma_spaces();
                if relative {
                    parse_groups::<_, 2>(cursor, handler, expect_number, |h, [x, y]| {
                        h.lineto_rel(x, y)
                    })
                } else {
                    parse_groups::<_, 2>(cursor, handler, expect_number, |h, [x, y]| {
                        h.lineto_abs(x, y)
                    })
                }
            }
            (LineTo, true) => parse_groups::<_, 2>(cursor, handler, true, |h, [x, y]| {
                h.lineto_rel(x, y)
            }),
            (LineTo, false) => parse_groups::<_, 2>(cursor, handler, true, |h, [x, y]| {
                h.lineto_abs(x, y)
            }),
            (HorizontalLineTo, true) => parse_groups::<_, 1>(cursor, handler, true, |h, [x]| {
                h.lineto_horizontal_rel(x)
            }),
            (HorizontalLineTo, false) => parse_groups::<_, 1>(cursor, handler, true, |h, [x]| {
                h.lineto_horizontal_abs(x)
            }),
            (VerticalLineTo, true) => parse_groups::<_, 1>(cursor, handler, true, |h, [y]| {
                h.lineto_vertical_rel(y)
            }),
            (VerticalLineTo, false) => parse_groups::<_, 1>(cursor, handler, true, |h, [y]| {
                h.lineto_vertical_abs(y)
            }),
            (CurveTo, true) => parse_groups::<_, 6>(cursor, handler, true, |h, [x1, y1, x2, y2, x, y]| {
                h.curveto_cubic_rel(x1, y1, x2, y2, x, y)
            }),
            (CurveTo, false) => parse_groups::<_, 6>(cursor, handler, true, |h, [x1, y1, x2, y2, x, y]| {
                h.curveto_cubic_abs(x1, y1, x2, y2, x, y)
            }),
            (SmoothCurveTo, true) => parse_groups::<_, 4>(cursor, handler, true, |h, [x2, y2, x, y]| {
                h.curveto_cubic_smooth_rel(x2, y2, x, y)
            }),
            (SmoothCurveTo, false) => parse_groups::<_, 4>(cursor, handler, true, |h, [x2, y2, x, y]| {
                h.curveto_cubic_smooth_abs(x2, y2, x, y)
            }),
            (QuadTo, true) => parse_groups::<_, 4>(cursor, handler, true, |h, [x1, y1, x, y]| {
                h.curveto_quadratic_rel(x1, y1, x, y)
            }),
            (QuadTo, false) => parse_groups::<_, 4>(cursor, handler, true, |h, [x1, y1, x, y]| {
                h.curveto_quadratic_abs(x1, y1, x, y)
            }),
            (SmoothQuadTo, true) => parse_groups::<_, 2>(cursor, handler, true, |h, [x, y]| {
                h.curveto_quadratic_smooth_rel(x, y)
            }),
            (SmoothQuadTo, false) => parse_groups::<_, 2>(cursor, handler, true, |h, [x, y]| {
                h.curveto_quadratic_smooth_abs(x, y)
            }),
            (Arc, _) => parse_arcs(cursor, handler, relative),
            (ClosePath, _) => Ok(()),
        }
    }
}

/// Parses a sequence of operand groups of `N` numbers each, invoking `emit`
/// for every group.
///
/// The sequence ends at the first character that cannot begin a number.
/// If `expect_number` is set (the command letter or a trailing comma was
/// just consumed) at least one more group is required.
fn parse_groups<H, const N: usize>(
    cursor: &mut Cursor,
    handler: &mut H,
    mut expect_number: bool,
    mut emit: impl FnMut(&mut H, [f32; N]) -> Result<(), HandlerError>,
) -> Result<(), ParseError> {
    loop {
        if !cursor.starts_number() {
            return if expect_number {
                Err(cursor.unexpected())
            } else {
                Ok(())
            };
        }
        let args = parse_args::<N>(cursor)?;
        emit(handler, args)?;
        expect_number = cursor.skip_comma_spaces();
    }
}

/// Parses `N` numbers separated by optional commas and whitespace.
fn parse_args<const N: usize>(cursor: &mut Cursor) -> Result<[f32; N], ParseError> {
    let mut args = [0.0; N];
    for (i, arg) in args.iter_mut().enumerate() {
        if i != 0 {
            cursor.skip_comma_spaces();
        }
        *arg = parse_float(cursor)?;
    }
    Ok(args)
}

/// Parses the operand groups of an elliptical arc command.
///
/// The large-arc and sweep flags must be a literal `0` or `1`, which allows
/// them to appear without separators (`a1 1 0 1150 50`).
fn parse_arcs<H: PathHandler>(
    cursor: &mut Cursor,
    handler: &mut H,
    relative: bool,
) -> Result<(), ParseError> {
    let mut expect_number = true;
    loop {
        if !cursor.starts_number() {
            return if expect_number {
                Err(cursor.unexpected())
            } else {
                Ok(())
            };
        }
        let [rx, ry, x_axis_rotation] = parse_args::<3>(cursor)?;
        cursor.skip_comma_spaces();
        let large_arc = parse_flag(cursor)?;
        cursor.skip_comma_spaces();
        let sweep = parse_flag(cursor)?;
        cursor.skip_comma_spaces();
        let [x, y] = parse_args::<2>(cursor)?;
        if relative {
            handler.arc_rel(rx, ry, x_axis_rotation, large_arc, sweep, x, y)?;
        } else {
            handler.arc_abs(rx, ry, x_axis_rotation, large_arc, sweep, x, y)?;
        }
        expect_number = cursor.skip_comma_spaces();
    }
}

fn parse_flag(cursor: &mut Cursor) -> Result<bool, ParseError> {
    let flag = match cursor.current() {
        Some('0') => false,
        Some('1') => true,
        found => {
            let (line, column) = cursor.position();
            return Err(ParseError::InvalidFlag {
                found,
                line,
                column,
            });
        }
    };
    cursor.advance();
    Ok(flag)
}

/// Path command, independent of whether operands are absolute or relative.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Operator {
    MoveTo,
    ClosePath,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    SmoothCurveTo,
    QuadTo,
    SmoothQuadTo,
    Arc,
}

impl Operator {
    /// Creates an operator from the given command letter.
    fn from_letter(letter: char) -> Option<Self> {
        use Operator::*;
        Some(match letter.to_ascii_lowercase() {
            'm' => MoveTo,
            'z' => ClosePath,
            'l' => LineTo,
            'h' => HorizontalLineTo,
            'v' => VerticalLineTo,
            'c' => CurveTo,
            's' => SmoothCurveTo,
            'q' => QuadTo,
            't' => SmoothQuadTo,
            'a' => Arc,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{command::path_handler_methods, PathCommand};

    #[derive(Clone, PartialEq, Debug)]
    enum Event {
        Start,
        Command(PathCommand),
        End,
    }

    /// Records every event, optionally rejecting lines to negative x.
    #[derive(Default, Debug)]
    struct CaptureHandler {
        events: Vec<Event>,
        reject_negative_lines: bool,
    }

    impl PathHandler for CaptureHandler {
        fn start_path(&mut self) -> Result<(), HandlerError> {
            self.events.push(Event::Start);
            Ok(())
        }

        fn end_path(&mut self) -> Result<(), HandlerError> {
            self.events.push(Event::End);
            Ok(())
        }

        path_handler_methods!(|this, command| {
            if this.reject_negative_lines {
                if let PathCommand::LineToAbs { x, .. } = command {
                    if x < 0.0 {
                        return Err(HandlerError::new("negative x"));
                    }
                }
            }
            this.events.push(Event::Command(command));
            Ok(())
        });
    }

    fn parse(d: &str) -> (bool, Vec<PathCommand>) {
        let mut commands = Vec::new();
        let ok = parse_path(d, &mut commands);
        (ok, commands)
    }

    fn capture(d: &str) -> (bool, Vec<Event>, Vec<ParseError>) {
        let mut handler = CaptureHandler::default();
        let mut parser = PathParser::new(&mut handler);
        let ok = parser.parse(d);
        let errors = parser.errors().to_vec();
        (ok, handler.events, errors)
    }

    #[test]
    fn every_command() {
        use PathCommand::*;
        let (ok, commands) = parse(
            "M1 2 m3 4 L5 6 l7 8 H9 h10 V11 v12 \
             C1 2 3 4 5 6 c-1-2-3-4-5-6 S1 2 3 4 s-1-2-3-4 \
             Q1 2 3 4 q-1-2-3-4 T1 2 t-1-2 \
             A1 2 3 0 1 4 5 a-1-2-3 1 0-4-5 Z z",
        );
        assert!(ok);
        let expected = [
            MoveToAbs { x: 1.0, y: 2.0 },
            MoveToRel { x: 3.0, y: 4.0 },
            LineToAbs { x: 5.0, y: 6.0 },
            LineToRel { x: 7.0, y: 8.0 },
            HorizontalLineToAbs { x: 9.0 },
            HorizontalLineToRel { x: 10.0 },
            VerticalLineToAbs { y: 11.0 },
            VerticalLineToRel { y: 12.0 },
            CurveToAbs {
                x1: 1.0,
                y1: 2.0,
                x2: 3.0,
                y2: 4.0,
                x: 5.0,
                y: 6.0,
            },
            CurveToRel {
                x1: -1.0,
                y1: -2.0,
                x2: -3.0,
                y2: -4.0,
                x: -5.0,
                y: -6.0,
            },
            SmoothCurveToAbs {
                x2: 1.0,
                y2: 2.0,
                x: 3.0,
                y: 4.0,
            },
            SmoothCurveToRel {
                x2: -1.0,
                y2: -2.0,
                x: -3.0,
                y: -4.0,
            },
            QuadToAbs {
                x1: 1.0,
                y1: 2.0,
                x: 3.0,
                y: 4.0,
            },
            QuadToRel {
                x1: -1.0,
                y1: -2.0,
                x: -3.0,
                y: -4.0,
            },
            SmoothQuadToAbs { x: 1.0, y: 2.0 },
            SmoothQuadToRel { x: -1.0, y: -2.0 },
            ArcAbs {
                rx: 1.0,
                ry: 2.0,
                x_axis_rotation: 3.0,
                large_arc: false,
                sweep: true,
                x: 4.0,
                y: 5.0,
            },
            ArcRel {
                rx: -1.0,
                ry: -2.0,
                x_axis_rotation: -3.0,
                large_arc: true,
                sweep: false,
                x: -4.0,
                y: -5.0,
            },
            ClosePath,
            ClosePath,
        ];
        assert_eq!(commands, expected);
    }

    #[test]
    fn implicit_repetition() {
        use PathCommand::*;
        let (ok, commands) = parse("M0,0 L1,1 2,2 3,3");
        assert!(ok);
        assert_eq!(
            commands,
            [
                MoveToAbs { x: 0.0, y: 0.0 },
                LineToAbs { x: 1.0, y: 1.0 },
                LineToAbs { x: 2.0, y: 2.0 },
                LineToAbs { x: 3.0, y: 3.0 },
            ]
        );
        let (ok, commands) = parse("M0 0h1 2 3");
        assert!(ok);
        assert_eq!(
            commands,
            [
                MoveToAbs { x: 0.0, y: 0.0 },
                HorizontalLineToRel { x: 1.0 },
                HorizontalLineToRel { x: 2.0 },
                HorizontalLineToRel { x: 3.0 },
            ]
        );
    }

    #[test]
    fn moveto_then_implicit_lineto() {
        use PathCommand::*;
        let (ok, commands) = parse("M0,0 1,1");
        assert!(ok);
        assert_eq!(
            commands,
            [MoveToAbs { x: 0.0, y: 0.0 }, LineToAbs { x: 1.0, y: 1.0 }]
        );
        // relative moveto produces relative linetos
        let (ok, commands) = parse("m1 1 2 2 3 3z");
        assert!(ok);
        assert_eq!(
            commands,
            [
                MoveToRel { x: 1.0, y: 1.0 },
                LineToRel { x: 2.0, y: 2.0 },
                LineToRel { x: 3.0, y: 3.0 },
                ClosePath,
            ]
        );
    }

    #[test]
    fn compact_syntax() {
        use PathCommand::*;
        let (ok, commands) = parse("M10-20L.5.5-1e1-.5");
        assert!(ok);
        assert_eq!(
            commands,
            [
                MoveToAbs { x: 10.0, y: -20.0 },
                LineToAbs { x: 0.5, y: 0.5 },
                LineToAbs { x: -10.0, y: -0.5 },
            ]
        );
        // flags don't require separators
        let (ok, commands) = parse("M0 0a1 1 0 1150 50");
        assert!(ok);
        assert_eq!(
            commands[1],
            ArcRel {
                rx: 1.0,
                ry: 1.0,
                x_axis_rotation: 0.0,
                large_arc: true,
                sweep: true,
                x: 50.0,
                y: 50.0,
            }
        );
    }

    #[test]
    fn start_and_end_bracket_events() {
        let (ok, events, errors) = capture("");
        assert!(ok);
        assert!(errors.is_empty());
        assert_eq!(events, [Event::Start, Event::End]);
        let (ok, events, _) = capture(" \r\n\t ");
        assert!(ok);
        assert_eq!(events, [Event::Start, Event::End]);
        let (ok, events, _) = capture("X");
        assert!(!ok);
        assert_eq!(events, [Event::Start, Event::End]);
    }

    #[test]
    fn arc_flag_must_be_zero_or_one() {
        use PathCommand::*;
        let (ok, events, errors) = capture("A1,1,0,2,0,10,10 M5,5");
        assert!(!ok);
        assert_eq!(
            errors,
            [ParseError::InvalidFlag {
                found: Some('2'),
                line: 1,
                column: 8
            }]
        );
        assert_eq!(
            events,
            [
                Event::Start,
                Event::Command(MoveToAbs { x: 5.0, y: 5.0 }),
                Event::End
            ]
        );
    }

    #[test]
    fn malformed_subpath_is_skipped() {
        use PathCommand::*;
        let (ok, events, errors) = capture("M0,0 L1,1 Q L5,5 M10,10 L20,20");
        assert!(!ok);
        assert_eq!(
            errors,
            [ParseError::UnexpectedCharacter {
                found: 'L',
                line: 1,
                column: 13
            }]
        );
        assert_eq!(
            events,
            [
                Event::Start,
                Event::Command(MoveToAbs { x: 0.0, y: 0.0 }),
                Event::Command(LineToAbs { x: 1.0, y: 1.0 }),
                Event::Command(MoveToAbs { x: 10.0, y: 10.0 }),
                Event::Command(LineToAbs { x: 20.0, y: 20.0 }),
                Event::End
            ]
        );
    }

    #[test]
    fn unknown_command_is_skipped() {
        use PathCommand::*;
        let (ok, commands) = parse("M0,0 X L1,1 m5,5 l1,1");
        assert!(!ok);
        assert_eq!(
            commands,
            [
                MoveToAbs { x: 0.0, y: 0.0 },
                MoveToRel { x: 5.0, y: 5.0 },
                LineToRel { x: 1.0, y: 1.0 },
            ]
        );
    }

    #[test]
    fn missing_operands() {
        use PathCommand::*;
        // incomplete group
        let (ok, commands) = parse("M0,0 L1");
        assert!(!ok);
        assert_eq!(commands, [MoveToAbs { x: 0.0, y: 0.0 }]);
        // trailing comma requires another group
        let (ok, commands) = parse("M0,0 L1,1,");
        assert!(!ok);
        assert_eq!(
            commands,
            [MoveToAbs { x: 0.0, y: 0.0 }, LineToAbs { x: 1.0, y: 1.0 }]
        );
        // comma may not follow the command letter
        let (ok, commands) = parse("M0,0 L,1,1");
        assert!(!ok);
        assert_eq!(commands, [MoveToAbs { x: 0.0, y: 0.0 }]);
        // arc truncated before its final coordinate
        let (ok, events, errors) = capture("M0,0 A1 1 0 0 1 10");
        assert!(!ok);
        assert_eq!(errors, [ParseError::UnexpectedEnd { line: 1, column: 19 }]);
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn error_positions_span_lines() {
        let (ok, _, errors) = capture("M0,0\nL1,1\n  L#");
        assert!(!ok);
        assert_eq!(
            errors,
            [ParseError::UnexpectedCharacter {
                found: '#',
                line: 3,
                column: 4
            }]
        );
    }

    #[test]
    fn handler_errors_skip_subpath() {
        use PathCommand::*;
        let mut handler = CaptureHandler {
            reject_negative_lines: true,
            ..Default::default()
        };
        let mut parser = PathParser::new(&mut handler);
        assert!(!parser.parse("M0,0 L1,1 L-1,1 L2,2 M3,3 L4,4"));
        assert_eq!(
            parser.errors(),
            [ParseError::Handler(HandlerError::new("negative x"))]
        );
        assert_eq!(
            handler.events,
            [
                Event::Start,
                Event::Command(MoveToAbs { x: 0.0, y: 0.0 }),
                Event::Command(LineToAbs { x: 1.0, y: 1.0 }),
                Event::Command(MoveToAbs { x: 3.0, y: 3.0 }),
                Event::Command(LineToAbs { x: 4.0, y: 4.0 }),
                Event::End
            ]
        );
    }

    #[test]
    fn input_length_limit() {
        let mut handler = CaptureHandler::default();
        let mut parser = PathParser::new(&mut handler).with_limits(Limits {
            max_input_len: 8,
            ..Default::default()
        });
        assert_eq!(parser.limits().max_input_len, 8);
        assert!(!parser.parse("M0,0 L10,10"));
        assert_eq!(
            parser.errors(),
            [ParseError::InputTooLong { len: 11, limit: 8 }]
        );
        // start and end are still emitted
        assert_eq!(handler.events, [Event::Start, Event::End]);
    }

    #[test]
    fn error_limit() {
        let mut commands = Vec::new();
        let mut parser = PathParser::new(&mut commands).with_limits(Limits {
            max_errors: 2,
            ..Default::default()
        });
        assert!(!parser.parse("X M0,0 Y M1,1 Z M2,2"));
        assert_eq!(parser.errors().len(), 2);
        assert_eq!(commands, [PathCommand::MoveToAbs { x: 0.0, y: 0.0 }]);
    }

    #[test]
    fn parser_is_reusable() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        let mut parser = PathParser::new(&mut first);
        assert!(!parser.parse("M0,0 X"));
        assert_eq!(parser.errors().len(), 1);
        parser.set_handler(&mut second);
        assert!(parser.parse("M1,1"));
        assert!(parser.errors().is_empty());
        assert_eq!(parser.handler().len(), 1);
        assert_eq!(first, [PathCommand::MoveToAbs { x: 0.0, y: 0.0 }]);
        assert_eq!(second, [PathCommand::MoveToAbs { x: 1.0, y: 1.0 }]);
    }
}
