//! Traits for receiving parsed events.

use crate::HandlerError;

/// Trait for processing the commands of SVG path data.
///
/// Methods are invoked in the order that the commands appear in the source
/// text. [`start_path`](Self::start_path) is always called first and
/// [`end_path`](Self::end_path) is always called last, even if the path data
/// contains errors.
///
/// Operands are passed through exactly as parsed: relative commands receive
/// offsets, and smooth curves receive only their explicit control points.
/// Resolving these against the current point is the responsibility of the
/// handler (see [`PenHandler`](crate::PenHandler)).
///
/// Returning an error from any method causes the parser to treat the
/// remainder of the current subpath as malformed.
pub trait PathHandler {
    /// Invoked before any other method.
    fn start_path(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Invoked after all other methods.
    fn end_path(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }

    /// `m x y`
    fn moveto_rel(&mut self, x: f32, y: f32) -> Result<(), HandlerError>;

    /// `M x y`
    fn moveto_abs(&mut self, x: f32, y: f32) -> Result<(), HandlerError>;

    /// `z` or `Z`
    fn close_path(&mut self) -> Result<(), HandlerError>;

    /// `l x y`
    fn lineto_rel(&mut self, x: f32, y: f32) -> Result<(), HandlerError>;

    /// `L x y`
    fn lineto_abs(&mut self, x: f32, y: f32) -> Result<(), HandlerError>;

    /// `h x`
    fn lineto_horizontal_rel(&mut self, x: f32) -> Result<(), HandlerError>;

    /// `H x`
    fn lineto_horizontal_abs(&mut self, x: f32) -> Result<(), HandlerError>;

    /// `v y`
    fn lineto_vertical_rel(&mut self, y: f32) -> Result<(), HandlerError>;

    /// `V y`
    fn lineto_vertical_abs(&mut self, y: f32) -> Result<(), HandlerError>;

    /// `c x1 y1 x2 y2 x y`
    fn curveto_cubic_rel(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    ) -> Result<(), HandlerError>;

    /// `C x1 y1 x2 y2 x y`
    fn curveto_cubic_abs(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    ) -> Result<(), HandlerError>;

    /// `s x2 y2 x y`
    fn curveto_cubic_smooth_rel(
        &mut self,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    ) -> Result<(), HandlerError>;

    /// `S x2 y2 x y`
    fn curveto_cubic_smooth_abs(
        &mut self,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    ) -> Result<(), HandlerError>;

    /// `q x1 y1 x y`
    fn curveto_quadratic_rel(
        &mut self,
        x1: f32,
        y1: f32,
        x: f32,
        y: f32,
    ) -> Result<(), HandlerError>;

    /// `Q x1 y1 x y`
    fn curveto_quadratic_abs(
        &mut self,
        x1: f32,
        y1: f32,
        x: f32,
        y: f32,
    ) -> Result<(), HandlerError>;

    /// `t x y`
    fn curveto_quadratic_smooth_rel(&mut self, x: f32, y: f32) -> Result<(), HandlerError>;

    /// `T x y`
    fn curveto_quadratic_smooth_abs(&mut self, x: f32, y: f32) -> Result<(), HandlerError>;

    /// `a rx ry x-axis-rotation large-arc-flag sweep-flag x y`
    fn arc_rel(
        &mut self,
        rx: f32,
        ry: f32,
        x_axis_rotation: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    ) -> Result<(), HandlerError>;

    /// `A rx ry x-axis-rotation large-arc-flag sweep-flag x y`
    fn arc_abs(
        &mut self,
        rx: f32,
        ry: f32,
        x_axis_rotation: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    ) -> Result<(), HandlerError>;
}

/// Trait for processing the coordinate pairs of a `points` attribute.
pub trait PointsHandler {
    /// Invoked before any other method.
    fn start_points(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Invoked for each coordinate pair.
    fn point(&mut self, x: f32, y: f32) -> Result<(), HandlerError>;

    /// Invoked after all other methods.
    fn end_points(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }
}

/// Trait for processing the values of a list of numbers.
pub trait NumberListHandler {
    fn start_number_list(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }

    fn number(&mut self, value: f32) -> Result<(), HandlerError>;

    fn end_number_list(&mut self) -> Result<(), HandlerError> {
        Ok(())
    }
}
