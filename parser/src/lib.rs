mod dialect;
mod error;
mod rows;
mod tokenizer;

pub use dialect::{Dialect, LabelPosition, Separator, DEFAULT_COMMENT, MISSING_VALUE};
pub use error::{ParseError, ParseErrorKind};
pub use rows::{parse_points, parse_rows, parse_values, Point};
