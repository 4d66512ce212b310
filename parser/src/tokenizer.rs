use crate::dialect::{Separator, MISSING_VALUE};

/// A line with its comment stripped. Blank lines are never produced.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Splits the input into non-blank lines with comments removed.
///
/// A comment runs from the comment character to the end of its own line only.
pub(crate) fn lines(text: &str, comment: char) -> impl Iterator<Item = Line<'_>> {
    text.lines().enumerate().filter_map(move |(idx, raw)| {
        let content = match raw.find(comment) {
            Some(pos) => &raw[..pos],
            None => raw,
        };

        if content.trim().is_empty() {
            None
        } else {
            Some(Line {
                number: idx + 1,
                text: content,
            })
        }
    })
}

/// Splits one line into tokens.
///
/// With a character separator every field is kept, including empty ones, so
/// `"1,,3"` yields three tokens with an empty one in the middle.
pub(crate) fn split(line: &str, separator: Separator) -> Vec<&str> {
    match separator {
        Separator::Whitespace => line.split_whitespace().collect(),
        Separator::Char(c) => line.split(c).map(str::trim).collect(),
    }
}

/// Reads a value token. Empty and `?` tokens are missing values.
pub(crate) fn value(token: &str) -> Option<f64> {
    if token.is_empty() || token == MISSING_VALUE {
        return Some(f64::NAN);
    }
    token.parse().ok()
}

/// Reads a label token: an integer, optionally followed by a fraction of zeros.
pub(crate) fn label(token: &str) -> Option<i32> {
    let (integer, fraction) = match token.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (token, ""),
    };

    if !fraction.bytes().all(|b| b == b'0') {
        return None;
    }

    integer.parse().ok()
}
