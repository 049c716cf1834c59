//! Print the events produced when parsing SVG path data, points or number
//! lists.
//!
//! Errors are reported after the events, and cause a non-zero exit status.

use path_data::{
    NumberListParser, ParseError, PathCommand, PathParser, PenHandler, Point, PointsParser,
    SvgPathWriter,
};

mod print;

use print::EventPrinter;

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = flags::Args::from_env().map_err(|e| Error(e.to_string()))?;
    let mode = Mode::from_args(&args)?;
    let text = if args.file {
        std::fs::read_to_string(&args.input)
            .map_err(|e| Error(format!("failed to read '{}': {e}", args.input)))?
    } else {
        args.input.clone()
    };
    log::debug!("parsing {} bytes as {mode:?}", text.len());

    let stdout = std::io::stdout();
    let mut locked = stdout.lock();
    let mut printer = EventPrinter::new(&mut locked);
    let errors = match mode {
        Mode::Events => {
            let mut commands: Vec<PathCommand> = Vec::new();
            let mut parser = PathParser::new(&mut commands);
            parser.parse(&text);
            let errors = parser.errors().to_vec();
            printer.print_path(&commands).map_err(Error::new)?;
            errors
        }
        Mode::Svg => {
            let mut writer = make_writer(args.precision);
            let mut parser = PathParser::new(&mut writer);
            parser.parse(&text);
            let errors = parser.errors().to_vec();
            printer.print_svg(writer.as_str()).map_err(Error::new)?;
            errors
        }
        Mode::Absolute => {
            let mut writer = make_writer(args.precision);
            let mut pen = PenHandler::new(&mut writer);
            let mut parser = PathParser::new(&mut pen);
            parser.parse(&text);
            let errors = parser.errors().to_vec();
            printer.print_svg(writer.as_str()).map_err(Error::new)?;
            errors
        }
        Mode::Points => {
            let mut points: Vec<Point> = Vec::new();
            let mut parser = PointsParser::new(&mut points);
            parser.parse(&text);
            let errors = parser.errors().to_vec();
            printer.print_points(&points).map_err(Error::new)?;
            errors
        }
        Mode::Numbers => {
            let mut values: Vec<f32> = Vec::new();
            let mut parser = NumberListParser::new(&mut values);
            parser.parse(&text);
            let errors = parser.errors().to_vec();
            printer.print_numbers(&values).map_err(Error::new)?;
            errors
        }
    };
    report_errors(&errors)
}

fn make_writer(precision: Option<usize>) -> SvgPathWriter {
    match precision {
        Some(precision) => SvgPathWriter::with_precision(precision),
        None => SvgPathWriter::new(),
    }
}

fn report_errors(errors: &[ParseError]) -> Result<(), Error> {
    if errors.is_empty() {
        return Ok(());
    }
    for error in errors {
        eprintln!("error: {error}");
    }
    Err(Error(format!("parsing failed with {} error(s)", errors.len())))
}

/// The grammar to parse the input with, and how to print the result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    Events,
    Svg,
    Absolute,
    Points,
    Numbers,
}

impl Mode {
    fn from_args(args: &flags::Args) -> Result<Self, Error> {
        let selected = [
            (args.svg, Mode::Svg),
            (args.absolute, Mode::Absolute),
            (args.points, Mode::Points),
            (args.numbers, Mode::Numbers),
        ]
        .into_iter()
        .filter_map(|(flag, mode)| flag.then_some(mode))
        .collect::<Vec<_>>();
        match selected.as_slice() {
            [] => Ok(Mode::Events),
            [mode] => Ok(*mode),
            _ => Err(Error::new(
                "pass only one of --svg, --absolute, --points and --numbers",
            )),
        }
    }
}

#[derive(Debug, Clone)]
struct Error(String);

impl Error {
    fn new(t: impl std::fmt::Display) -> Self {
        Self(t.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

mod flags {
    xflags::xflags! {
        /// Print the events produced by parsing SVG path data
        cmd args {
                /// The path data, or a file containing it with --file
                required input: String
                /// Treat the input as the path of a file to read
                optional -f, --file
                /// Print the path data normalized to one command per letter
                optional -s, --svg
                /// Print the path data resolved to absolute drawing commands
                optional -a, --absolute
                /// Parse the input as a list of points
                optional -p, --points
                /// Parse the input as a list of numbers
                optional -n, --numbers
                /// Number of digits printed after the decimal point
                optional --precision precision: usize
            }
    }
}
