//! Reader primitives and the recursive-descent parser for the polynomial
//! literal grammar.

mod error;
mod poly_parser;
mod reader;

pub use error::{ParseError, ReaderError};
pub use poly_parser::parse_poly;
pub use reader::{cursor, read_coefficient, read_unsigned, Cursor};
