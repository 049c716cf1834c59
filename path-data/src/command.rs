//! Owned representation of path commands.

use std::fmt;

use crate::{HandlerError, NumberListHandler, PathHandler, Point, PointsHandler};

/// A single command parsed from path data.
///
/// There is one variant for each command method of [`PathHandler`] and the
/// operands are stored exactly as they were parsed.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCommand {
    MoveToRel {
        x: f32,
        y: f32,
    },
    MoveToAbs {
        x: f32,
        y: f32,
    },
    ClosePath,
    LineToRel {
        x: f32,
        y: f32,
    },
    LineToAbs {
        x: f32,
        y: f32,
    },
    HorizontalLineToRel {
        x: f32,
    },
    HorizontalLineToAbs {
        x: f32,
    },
    VerticalLineToRel {
        y: f32,
    },
    VerticalLineToAbs {
        y: f32,
    },
    CurveToRel {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    },
    CurveToAbs {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    },
    SmoothCurveToRel {
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    },
    SmoothCurveToAbs {
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    },
    QuadToRel {
        x1: f32,
        y1: f32,
        x: f32,
        y: f32,
    },
    QuadToAbs {
        x1: f32,
        y1: f32,
        x: f32,
        y: f32,
    },
    SmoothQuadToRel {
        x: f32,
        y: f32,
    },
    SmoothQuadToAbs {
        x: f32,
        y: f32,
    },
    ArcRel {
        rx: f32,
        ry: f32,
        x_axis_rotation: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    },
    ArcAbs {
        rx: f32,
        ry: f32,
        x_axis_rotation: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    },
}

impl PathCommand {
    /// Returns the SVG command letter for this command.
    ///
    /// Close path is always reported as `Z`.
    pub fn letter(&self) -> char {
        use PathCommand::*;
        match self {
            MoveToRel { .. } => 'm',
            MoveToAbs { .. } => 'M',
            ClosePath => 'Z',
            LineToRel { .. } => 'l',
            LineToAbs { .. } => 'L',
            HorizontalLineToRel { .. } => 'h',
            HorizontalLineToAbs { .. } => 'H',
            VerticalLineToRel { .. } => 'v',
            VerticalLineToAbs { .. } => 'V',
            CurveToRel { .. } => 'c',
            CurveToAbs { .. } => 'C',
            SmoothCurveToRel { .. } => 's',
            SmoothCurveToAbs { .. } => 'S',
            QuadToRel { .. } => 'q',
            QuadToAbs { .. } => 'Q',
            SmoothQuadToRel { .. } => 't',
            SmoothQuadToAbs { .. } => 'T',
            ArcRel { .. } => 'a',
            ArcAbs { .. } => 'A',
        }
    }

    /// Returns true if the operands of this command are relative to the
    /// current point.
    pub fn is_relative(&self) -> bool {
        self.letter().is_ascii_lowercase()
    }

    /// Sends this command to the given handler.
    pub fn emit(&self, handler: &mut impl PathHandler) -> Result<(), HandlerError> {
        use PathCommand::*;
        match *self {
            MoveToRel { x, y } => handler.moveto_rel(x, y),
            MoveToAbs { x, y } => handler.moveto_abs(x, y),
            ClosePath => handler.close_path(),
            LineToRel { x, y } => handler.lineto_rel(x, y),
            LineToAbs { x, y } => handler.lineto_abs(x, y),
            HorizontalLineToRel { x } => handler.lineto_horizontal_rel(x),
            HorizontalLineToAbs { x } => handler.lineto_horizontal_abs(x),
            VerticalLineToRel { y } => handler.lineto_vertical_rel(y),
            VerticalLineToAbs { y } => handler.lineto_vertical_abs(y),
            CurveToRel {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => handler.curveto_cubic_rel(x1, y1, x2, y2, x, y),
            CurveToAbs {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => handler.curveto_cubic_abs(x1, y1, x2, y2, x, y),
            SmoothCurveToRel { x2, y2, x, y } => handler.curveto_cubic_smooth_rel(x2, y2, x, y),
            SmoothCurveToAbs { x2, y2, x, y } => handler.curveto_cubic_smooth_abs(x2, y2, x, y),
            QuadToRel { x1, y1, x, y } => handler.curveto_quadratic_rel(x1, y1, x, y),
            QuadToAbs { x1, y1, x, y } => handler.curveto_quadratic_abs(x1, y1, x, y),
            SmoothQuadToRel { x, y } => handler.curveto_quadratic_smooth_rel(x, y),
            SmoothQuadToAbs { x, y } => handler.curveto_quadratic_smooth_abs(x, y),
            ArcRel {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => handler.arc_rel(rx, ry, x_axis_rotation, large_arc, sweep, x, y),
            ArcAbs {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => handler.arc_abs(rx, ry, x_axis_rotation, large_arc, sweep, x, y),
        }
    }

    /// Writes this command in SVG syntax, formatting numbers with the given
    /// precision (the number of digits after the decimal point) if present.
    pub(crate) fn write_svg(&self, out: &mut impl fmt::Write, precision: Option<usize>) -> fmt::Result {
        use PathCommand::*;
        // infinities are written with an exponent that parses back to them
        let num = |out: &mut dyn fmt::Write, value: f32| match precision {
            _ if value == f32::INFINITY => out.write_str("1e128"),
            _ if value == f32::NEG_INFINITY => out.write_str("-1e128"),
            Some(prec) => write!(out, "{value:.prec$}"),
            None => write!(out, "{value}"),
        };
        let pair = |out: &mut dyn fmt::Write, x: f32, y: f32| {
            num(out, x)?;
            out.write_char(',')?;
            num(out, y)
        };
        out.write_char(self.letter())?;
        match *self {
            ClosePath => Ok(()),
            MoveToRel { x, y }
            | MoveToAbs { x, y }
            | LineToRel { x, y }
            | LineToAbs { x, y }
            | SmoothQuadToRel { x, y }
            | SmoothQuadToAbs { x, y } => pair(out, x, y),
            HorizontalLineToRel { x } | HorizontalLineToAbs { x } => num(out, x),
            VerticalLineToRel { y } | VerticalLineToAbs { y } => num(out, y),
            CurveToRel {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            }
            | CurveToAbs {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                pair(out, x1, y1)?;
                out.write_char(' ')?;
                pair(out, x2, y2)?;
                out.write_char(' ')?;
                pair(out, x, y)
            }
            SmoothCurveToRel {
                x2: x1,
                y2: y1,
                x,
                y,
            }
            | SmoothCurveToAbs {
                x2: x1,
                y2: y1,
                x,
                y,
            }
            | QuadToRel { x1, y1, x, y }
            | QuadToAbs { x1, y1, x, y } => {
                pair(out, x1, y1)?;
                out.write_char(' ')?;
                pair(out, x, y)
            }
            ArcRel {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            }
            | ArcAbs {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                pair(out, rx, ry)?;
                out.write_char(' ')?;
                num(out, x_axis_rotation)?;
                write!(out, " {},{} ", large_arc as u8, sweep as u8)?;
                pair(out, x, y)
            }
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_svg(f, None)
    }
}

/// Implements the command methods of [`PathHandler`] by constructing a
/// [`PathCommand`] for each event and evaluating the given body.
///
/// The body receives `self` and the command under the given names and must
/// evaluate to `Result<(), HandlerError>`.
macro_rules! path_handler_methods {
    (|$this:ident, $command:ident| $body:expr) => {
        fn moveto_rel(&mut self, x: f32, y: f32) -> Result<(), $crate::HandlerError> {
            let ($this, $command) = (self, $crate::PathCommand::MoveToRel { x, y });
            $body
        }

        fn moveto_abs(&mut self, x: f32, y: f32) -> Result<(), $crate::HandlerError> {
            let ($this, $command) = (self, $crate::PathCommand::MoveToAbs { x, y });
            $body
        }

        fn close_path(&mut self) -> Result<(), $crate::HandlerError> {
            let ($this, $command) = (self, $crate::PathCommand::ClosePath);
            $body
        }

        fn lineto_rel(&mut self, x: f32, y: f32) -> Result<(), $crate::HandlerError> {
            let ($this, $command) = (self, $crate::PathCommand::LineToRel { x, y });
            $body
        }

        fn lineto_abs(&mut self, x: f32, y: f32) -> Result<(), $crate::HandlerError> {
            let ($this, $command) = (self, $crate::PathCommand::LineToAbs { x, y });
            $body
        }

        fn lineto_horizontal_rel(&mut self, x: f32) -> Result<(), $crate::HandlerError> {
            let ($this, $command) = (self, $crate::PathCommand::HorizontalLineToRel { x });
            $body
        }

        fn lineto_horizontal_abs(&mut self, x: f32) -> Result<(), $crate::HandlerError> {
            let ($this, $command) = (self, $crate::PathCommand::HorizontalLineToAbs { x });
            $body
        }

        fn lineto_vertical_rel(&mut self, y: f32) -> Result<(), $crate::HandlerError> {
            let ($this, $command) = (self, $crate::PathCommand::VerticalLineToRel { y });
            $body
        }

        fn lineto_vertical_abs(&mut self, y: f32) -> Result<(), $crate::HandlerError> {
            let ($this, $command) = (self, $crate::PathCommand::VerticalLineToAbs { y });
            $body
        }

        fn curveto_cubic_rel(
            &mut self,
            x1: f32,
            y1: f32,
            x2: f32,
            y2: f32,
            x: f32,
            y: f32,
        ) -> Result<(), $crate::HandlerError> {
            let command = $crate::PathCommand::CurveToRel {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            };
            let ($this, $command) = (self, command);
            $body
        }

        fn curveto_cubic_abs(
            &mut self,
            x1: f32,
            y1: f32,
            x2: f32,
            y2: f32,
            x: f32,
            y: f32,
        ) -> Result<(), $crate::HandlerError> {
            let command = $crate::PathCommand::CurveToAbs {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            };
            let ($this, $command) = (self, command);
            $body
        }

        fn curveto_cubic_smooth_rel(
            &mut self,
            x2: f32,
            y2: f32,
            x: f32,
            y: f32,
        ) -> Result<(), $crate::HandlerError> {
            let command = $crate::PathCommand::SmoothCurveToRel { x2, y2, x, y };
            let ($this, $command) = (self, command);
            $body
        }

        fn curveto_cubic_smooth_abs(
            &mut self,
            x2: f32,
            y2: f32,
            x: f32,
            y: f32,
        ) -> Result<(), $crate::HandlerError> {
            let command = $crate::PathCommand::SmoothCurveToAbs { x2, y2, x, y };
            let ($this, $command) = (self, command);
            $body
        }

        fn curveto_quadratic_rel(
            &mut self,
            x1: f32,
            y1: f32,
            x: f32,
            y: f32,
        ) -> Result<(), $crate::HandlerError> {
            let command = $crate::PathCommand::QuadToRel { x1, y1, x, y };
            let ($this, $command) = (self, command);
            $body
        }

        fn curveto_quadratic_abs(
            &mut self,
            x1: f32,
            y1: f32,
            x: f32,
            y: f32,
        ) -> Result<(), $crate::HandlerError> {
            let command = $crate::PathCommand::QuadToAbs { x1, y1, x, y };
            let ($this, $command) = (self, command);
            $body
        }

        fn curveto_quadratic_smooth_rel(
            &mut self,
            x: f32,
            y: f32,
        ) -> Result<(), $crate::HandlerError> {
            let ($this, $command) = (self, $crate::PathCommand::SmoothQuadToRel { x, y });
            $body
        }

        fn curveto_quadratic_smooth_abs(
            &mut self,
            x: f32,
            y: f32,
        ) -> Result<(), $crate::HandlerError> {
            let ($this, $command) = (self, $crate::PathCommand::SmoothQuadToAbs { x, y });
            $body
        }

        fn arc_rel(
            &mut self,
            rx: f32,
            ry: f32,
            x_axis_rotation: f32,
            large_arc: bool,
            sweep: bool,
            x: f32,
            y: f32,
        ) -> Result<(), $crate::HandlerError> {
            let command = $crate::PathCommand::ArcRel {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            };
            let ($this, $command) = (self, command);
            $body
        }

        fn arc_abs(
            &mut self,
            rx: f32,
            ry: f32,
            x_axis_rotation: f32,
            large_arc: bool,
            sweep: bool,
            x: f32,
            y: f32,
        ) -> Result<(), $crate::HandlerError> {
            let command = $crate::PathCommand::ArcAbs {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            };
            let ($this, $command) = (self, command);
            $body
        }
    };
}

pub(crate) use path_handler_methods;

impl PathHandler for Vec<PathCommand> {
    path_handler_methods!(|this, command| {
        this.push(command);
        Ok(())
    });
}

impl PointsHandler for Vec<Point> {
    fn point(&mut self, x: f32, y: f32) -> Result<(), HandlerError> {
        self.push(Point::new(x, y));
        Ok(())
    }
}

impl NumberListHandler for Vec<f32> {
    fn number(&mut self, value: f32) -> Result<(), HandlerError> {
        self.push(value);
        Ok(())
    }
}
