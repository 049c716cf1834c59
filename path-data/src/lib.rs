//! Parsing SVG path data
//!
//! This crate provides streaming parsers for the
//! micro-grammars used by SVG geometry attributes:
//!
//! - the [path data][path-data] grammar of the `d` attribute
//! - the [points][points] grammar of `polyline` and `polygon`
//! - the generic `<list-of-numbers>` used by attributes such as `viewBox`
//!
//! Parsers do not build geometry themselves. Instead, each parsed command is
//! forwarded to a caller supplied handler ([`PathHandler`],
//! [`PointsHandler`] or [`NumberListHandler`]), in the same vein as a SAX
//! content handler. What the handler does with those events is up to the
//! consumer; this crate includes handlers that record commands
//! ([`PathCommand`]), re-serialize them ([`SvgPathWriter`]) or resolve them
//! into absolute drawing operations ([`PenHandler`]).
//!
//! Numbers are reconstructed from an integer mantissa and a decimal exponent
//! rather than through locale sensitive string conversion. See
//! [`build_float`] for the details and precision limits.
//!
//! Grammar errors are recoverable: a malformed command invalidates only the
//! remainder of its subpath, after which parsing resumes at the next moveto.
//!
//! # Example
//!
//! ```
//! use path_data::{PathCommand, PathParser};
//!
//! let mut commands: Vec<PathCommand> = Vec::new();
//! let mut parser = PathParser::new(&mut commands);
//! assert!(parser.parse("M0,0 L10,10 20,0 z"));
//! assert_eq!(commands.len(), 4);
//! ```
//!
//! [path-data]: https://www.w3.org/TR/SVG11/paths.html#PathData
//! [points]: https://www.w3.org/TR/SVG11/shapes.html#PointsBNF

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod command;
mod cursor;
mod error;
mod handler;
mod limits;
mod number;
mod number_list;
mod path;
mod pen;
mod point;
mod points;
mod svg;

pub use command::PathCommand;
pub use error::{HandlerError, ParseError};
pub use handler::{NumberListHandler, PathHandler, PointsHandler};
pub use limits::Limits;
pub use number::{build_float, parse_number};
pub use number_list::{parse_number_list, NumberListParser};
pub use path::{parse_path, PathParser};
pub use pen::{PathPen, PenCommand, PenHandler};
pub use point::Point;
pub use points::{parse_points, PointsParser};
pub use svg::SvgPathWriter;
