//! Resolving path commands into absolute drawing operations.

use kurbo::{BezPath, PathEl};

use crate::{command::path_handler_methods, HandlerError, PathCommand, PathHandler, Point};

/// Maximum distance between an elliptical arc and the cubic beziers that
/// approximate it.
const ARC_TOLERANCE: f64 = 0.1;

/// Interface for accepting a sequence of absolute drawing commands.
pub trait PathPen {
    /// Emit a command to begin a new subpath at (x, y).
    fn move_to(&mut self, x: f32, y: f32);

    /// Emit a line segment from the current point to (x, y).
    fn line_to(&mut self, x: f32, y: f32);

    /// Emit a quadratic bezier segment from the current point with a control
    /// point at (cx0, cy0) and ending at (x, y).
    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32);

    /// Emit a cubic bezier segment from the current point with control
    /// points at (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32);

    /// Emit a command to close the current subpath.
    fn close(&mut self);
}

/// Single absolute drawing command.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PenCommand {
    /// Begin a new subpath at (x, y).
    MoveTo { x: f32, y: f32 },
    /// Draw a line from the current point to (x, y).
    LineTo { x: f32, y: f32 },
    /// Draw a quadratic bezier from the current point with a control point at
    /// (cx0, cy0) and ending at (x, y).
    QuadTo { cx0: f32, cy0: f32, x: f32, y: f32 },
    /// Draw a cubic bezier from the current point with control points at
    /// (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    CurveTo {
        cx0: f32,
        cy0: f32,
        cx1: f32,
        cy1: f32,
        x: f32,
        y: f32,
    },
    /// Close the current subpath.
    Close,
}

impl PathPen for Vec<PenCommand> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.push(PenCommand::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(PenCommand::LineTo { x, y })
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.push(PenCommand::QuadTo { cx0, cy0, x, y })
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.push(PenCommand::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        })
    }

    fn close(&mut self) {
        self.push(PenCommand::Close)
    }
}

impl PathPen for BezPath {
    fn move_to(&mut self, x: f32, y: f32) {
        self.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.quad_to((cx0 as f64, cy0 as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.curve_to(
            (cx0 as f64, cy0 as f64),
            (cx1 as f64, cy1 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.close_path();
    }
}

/// Path handler that resolves commands against the current point and
/// forwards them to a [`PathPen`].
///
/// Relative operands are made absolute, horizontal and vertical lines become
/// regular lines, the implied control points of smooth curves are computed
/// and elliptical arcs are approximated with cubic beziers.
pub struct PenHandler<'a, P> {
    pen: &'a mut P,
    current: Point,
    subpath_start: Point,
    /// Second control point of the previous command, if it was a cubic.
    last_cubic: Option<Point>,
    /// Control point of the previous command, if it was a quadratic.
    last_quad: Option<Point>,
}

impl<'a, P: PathPen> PenHandler<'a, P> {
    pub fn new(pen: &'a mut P) -> Self {
        Self {
            pen,
            current: Point::ZERO,
            subpath_start: Point::ZERO,
            last_cubic: None,
            last_quad: None,
        }
    }

    /// Returns the end point of the most recent command.
    pub fn current_point(&self) -> Point {
        self.current
    }

    fn apply(&mut self, command: PathCommand) {
        use PathCommand::*;
        let base = if command.is_relative() {
            self.current
        } else {
            Point::ZERO
        };
        let mut last_cubic = None;
        let mut last_quad = None;
        match command {
            MoveToRel { x, y } | MoveToAbs { x, y } => {
                let p = base + Point::new(x, y);
                self.pen.move_to(p.x, p.y);
                self.subpath_start = p;
                self.current = p;
            }
            ClosePath => {
                self.pen.close();
                self.current = self.subpath_start;
            }
            LineToRel { x, y } | LineToAbs { x, y } => self.line_to(base + Point::new(x, y)),
            HorizontalLineToRel { x } | HorizontalLineToAbs { x } => {
                self.line_to(Point::new(base.x + x, self.current.y))
            }
            VerticalLineToRel { y } | VerticalLineToAbs { y } => {
                self.line_to(Point::new(self.current.x, base.y + y))
            }
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
                let c1 = base + Point::new(x2, y2);
                self.curve_to(base + Point::new(x1, y1), c1, base + Point::new(x, y));
                last_cubic = Some(c1);
            }
            SmoothCurveToRel { x2, y2, x, y } | SmoothCurveToAbs { x2, y2, x, y } => {
                let c0 = self.reflected(self.last_cubic);
                let c1 = base + Point::new(x2, y2);
                self.curve_to(c0, c1, base + Point::new(x, y));
                last_cubic = Some(c1);
            }
            QuadToRel { x1, y1, x, y } | QuadToAbs { x1, y1, x, y } => {
                let c0 = base + Point::new(x1, y1);
                self.quad_to(c0, base + Point::new(x, y));
                last_quad = Some(c0);
            }
            SmoothQuadToRel { x, y } | SmoothQuadToAbs { x, y } => {
                let c0 = self.reflected(self.last_quad);
                self.quad_to(c0, base + Point::new(x, y));
                last_quad = Some(c0);
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
            } => self.arc_to(
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                base + Point::new(x, y),
            ),
        }
        self.last_cubic = last_cubic;
        self.last_quad = last_quad;
    }

    /// Reflects the given control point about the current point, or returns
    /// the current point if there is no control point.
    fn reflected(&self, control: Option<Point>) -> Point {
        control.map_or(self.current, |control| self.current.reflect(control))
    }

    fn line_to(&mut self, p: Point) {
        self.pen.line_to(p.x, p.y);
        self.current = p;
    }

    fn quad_to(&mut self, c0: Point, p: Point) {
        self.pen.quad_to(c0.x, c0.y, p.x, p.y);
        self.current = p;
    }

    fn curve_to(&mut self, c0: Point, c1: Point, p: Point) {
        self.pen.curve_to(c0.x, c0.y, c1.x, c1.y, p.x, p.y);
        self.current = p;
    }

    /// See <https://www.w3.org/TR/SVG11/implnote.html#ArcOutOfRangeParameters>
    fn arc_to(
        &mut self,
        rx: f32,
        ry: f32,
        x_axis_rotation: f32,
        large_arc: bool,
        sweep: bool,
        to: Point,
    ) {
        if to == self.current {
            return;
        }
        if rx == 0.0 || ry == 0.0 {
            self.line_to(to);
            return;
        }
        let arc = kurbo::SvgArc {
            from: self.current.to_kurbo(),
            to: to.to_kurbo(),
            radii: kurbo::Vec2::new(rx.abs() as f64, ry.abs() as f64),
            x_rotation: (x_axis_rotation as f64).to_radians(),
            large_arc,
            sweep,
        };
        match kurbo::Arc::from_svg_arc(&arc) {
            Some(arc) => {
                for el in arc.append_iter(ARC_TOLERANCE) {
                    if let PathEl::CurveTo(c0, c1, p) = el {
                        self.pen.curve_to(
                            c0.x as f32,
                            c0.y as f32,
                            c1.x as f32,
                            c1.y as f32,
                            p.x as f32,
                            p.y as f32,
                        );
                    }
                }
                self.current = to;
            }
            None => self.line_to(to),
        }
    }
}

impl<P: PathPen> PathHandler for PenHandler<'_, P> {
    fn start_path(&mut self) -> Result<(), HandlerError> {
        self.current = Point::ZERO;
        self.subpath_start = Point::ZERO;
        self.last_cubic = None;
        self.last_quad = None;
        Ok(())
    }

    path_handler_methods!(|this, command| {
        this.apply(command);
        Ok(())
    });
}
