//! printing parse results

use ansi_term::{Color, Style};
use path_data::{PathCommand, Point};

pub struct EventPrinter<'a> {
    is_tty: bool,
    writer: &'a mut (dyn std::io::Write + 'a),
}

impl<'a> EventPrinter<'a> {
    pub fn new(writer: &'a mut (dyn std::io::Write + 'a)) -> Self {
        EventPrinter {
            is_tty: atty::is(atty::Stream::Stdout),
            writer,
        }
    }

    fn style(&self, style: Style) -> Style {
        if self.is_tty {
            style
        } else {
            Style::default()
        }
    }

    fn print_bracket(&mut self, event: &str) -> std::io::Result<()> {
        let style = self.style(Style::new().dimmed());
        writeln!(self.writer, "{}", style.paint(event))
    }

    /// Prints one line per path event, with the command letter highlighted.
    pub fn print_path(&mut self, commands: &[PathCommand]) -> std::io::Result<()> {
        self.print_bracket("start_path")?;
        let letter_style = self.style(Color::Cyan.bold());
        for (i, command) in commands.iter().enumerate() {
            let text = command.to_string();
            let (letter, operands) = text.split_at(1);
            writeln!(
                self.writer,
                "{i:>5}  {}{operands}",
                letter_style.paint(letter)
            )?;
        }
        self.print_bracket("end_path")
    }

    pub fn print_points(&mut self, points: &[Point]) -> std::io::Result<()> {
        self.print_bracket("start_points")?;
        for (i, point) in points.iter().enumerate() {
            writeln!(self.writer, "{i:>5}  {},{}", point.x, point.y)?;
        }
        self.print_bracket("end_points")
    }

    pub fn print_numbers(&mut self, values: &[f32]) -> std::io::Result<()> {
        self.print_bracket("start_number_list")?;
        for (i, value) in values.iter().enumerate() {
            writeln!(self.writer, "{i:>5}  {value}")?;
        }
        self.print_bracket("end_number_list")
    }

    pub fn print_svg(&mut self, svg: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{svg}")
    }
}
