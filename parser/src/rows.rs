use std::str::FromStr;

use crate::dialect::{Dialect, LabelPosition};
use crate::error::{ParseError, ParseErrorKind};
use crate::tokenizer::{self, Line};

/// A class label paired with its feature row, as read from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub label: i32,
    pub features: Vec<f64>,
}

/// Parses every non-blank line into a row of numbers.
///
/// Rows are returned as read; checking that they share a length is left to
/// the dataset builder so it can report the offending row.
pub fn parse_rows(text: &str, dialect: &Dialect) -> Result<Vec<Vec<f64>>, ParseError> {
    let rows = tokenizer::lines(text, dialect.comment)
        .map(|line| parse_row(line, &tokenizer::split(line.text, dialect.separator)))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Parsed {} rows", rows.len());
    Ok(rows)
}

/// Parses lines of the form `label features...` or `features... label`.
pub fn parse_points(
    text: &str,
    position: LabelPosition,
    dialect: &Dialect,
) -> Result<Vec<Point>, ParseError> {
    let points = tokenizer::lines(text, dialect.comment)
        .map(|line| {
            let tokens = tokenizer::split(line.text, dialect.separator);

            // A line always has at least one token, blank lines never reach here
            let (label, features) = match position {
                LabelPosition::First => (tokens[0], &tokens[1..]),
                LabelPosition::Last => (tokens[tokens.len() - 1], &tokens[..tokens.len() - 1]),
            };

            if label.is_empty() {
                return Err(ParseError::new(line.number, ParseErrorKind::MissingLabel));
            }

            let label = tokenizer::label(label).ok_or_else(|| {
                ParseError::new(line.number, ParseErrorKind::InvalidLabel(label.to_string()))
            })?;

            Ok(Point {
                label,
                features: parse_row(line, features)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Parsed {} labeled points ({} label column)", points.len(), position);
    Ok(points)
}

/// Parses a stream of single values, one element per whitespace-separated token.
///
/// Line structure carries no meaning here; only comments are line scoped.
pub fn parse_values<T: FromStr>(text: &str, comment: char) -> Result<Vec<T>, ParseError> {
    let mut values = Vec::new();

    for line in tokenizer::lines(text, comment) {
        for token in line.text.split_whitespace() {
            let value = token.parse().map_err(|_| {
                ParseError::new(line.number, ParseErrorKind::InvalidValue(token.to_string()))
            })?;
            values.push(value);
        }
    }

    log::debug!("Parsed {} values", values.len());
    Ok(values)
}

fn parse_row(line: Line<'_>, tokens: &[&str]) -> Result<Vec<f64>, ParseError> {
    tokens
        .iter()
        .map(|token| {
            tokenizer::value(token).ok_or_else(|| {
                ParseError::new(line.number, ParseErrorKind::InvalidNumber(token.to_string()))
            })
        })
        .collect()
}
