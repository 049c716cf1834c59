//! Serializing path commands back to path data.

use core::fmt;

use crate::{command::path_handler_methods, HandlerError, PathCommand, PathHandler, PathPen};

/// Path handler that writes commands back out as SVG path data.
///
/// Every command is written with its explicit letter, so implicit repetition
/// in the source is expanded. Parsing the output yields the same sequence of
/// commands (subject to the chosen precision).
#[derive(Clone, Default, Debug)]
pub struct SvgPathWriter(String, Option<usize>);

impl SvgPathWriter {
    /// Creates a new writer that formats floating point values with the
    /// standard behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new writer with the given precision (the number of digits
    /// that will be printed after the decimal).
    pub fn with_precision(precision: usize) -> Self {
        Self(String::default(), Some(precision))
    }

    /// Clears the content of the internal string.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn write_command(&mut self, command: PathCommand) -> Result<(), HandlerError> {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        command
            .write_svg(&mut self.0, self.1)
            .map_err(|_| HandlerError::new("failed to format path command"))
    }

    fn pen_command(&mut self, command: PathCommand) {
        // formatting into a String never fails
        let _ = self.write_command(command);
    }
}

impl PathHandler for SvgPathWriter {
    fn start_path(&mut self) -> Result<(), HandlerError> {
        self.clear();
        Ok(())
    }

    path_handler_methods!(|this, command| this.write_command(command));
}

/// Writes absolute drawing commands, such as those produced by a
/// [`PenHandler`](crate::PenHandler).
impl PathPen for SvgPathWriter {
    fn move_to(&mut self, x: f32, y: f32) {
        self.pen_command(PathCommand::MoveToAbs { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.pen_command(PathCommand::LineToAbs { x, y });
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.pen_command(PathCommand::QuadToAbs {
            x1: cx0,
            y1: cy0,
            x,
            y,
        });
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.pen_command(PathCommand::CurveToAbs {
            x1: cx0,
            y1: cy0,
            x2: cx1,
            y2: cy1,
            x,
            y,
        });
    }

    fn close(&mut self) {
        self.pen_command(PathCommand::ClosePath);
    }
}

impl AsRef<str> for SvgPathWriter {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<SvgPathWriter> for String {
    fn from(value: SvgPathWriter) -> Self {
        value.0
    }
}

impl fmt::Display for SvgPathWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
