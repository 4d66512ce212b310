use std::fmt;
use std::str::FromStr;

/// Token standing in for a missing value. Parses to a quiet NaN.
pub const MISSING_VALUE: &str = "?";

pub const DEFAULT_COMMENT: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Any run of spaces and tabs delimits tokens.
    Whitespace,
    /// Exactly this character delimits tokens. Empty tokens are missing values.
    Char(char),
}

impl Separator {
    /// Whitespace characters collapse into the whitespace sentinel.
    pub fn new(c: char) -> Self {
        if c.is_whitespace() {
            Separator::Whitespace
        } else {
            Separator::Char(c)
        }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator::Char(',')
    }
}

impl FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "whitespace" | "space" | "tab" | "\\t" => Ok(Separator::Whitespace),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Separator::new(c)),
                    _ => Err(format!("Separator must be a single character, got '{}'", s)),
                }
            }
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Whitespace => write!(f, "whitespace"),
            Separator::Char(c) => write!(f, "{}", c),
        }
    }
}

/// Column holding the class label or the regression targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPosition {
    First,
    Last,
}

impl FromStr for LabelPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(LabelPosition::First),
            "last" => Ok(LabelPosition::Last),
            _ => Err(format!("Label position must be 'first' or 'last', got '{}'", s)),
        }
    }
}

impl fmt::Display for LabelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelPosition::First => write!(f, "first"),
            LabelPosition::Last => write!(f, "last"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub separator: Separator,
    pub comment: char,
}

impl Dialect {
    pub fn new(separator: Separator, comment: char) -> Self {
        Self { separator, comment }
    }

    pub fn whitespace() -> Self {
        Self::new(Separator::Whitespace, DEFAULT_COMMENT)
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::new(Separator::default(), DEFAULT_COMMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_from_str() {
        assert_eq!("whitespace".parse::<Separator>(), Ok(Separator::Whitespace));
        assert_eq!(";".parse::<Separator>(), Ok(Separator::Char(';')));
        assert_eq!(" ".parse::<Separator>(), Ok(Separator::Whitespace));
        assert_eq!("\t".parse::<Separator>(), Ok(Separator::Whitespace));
        assert!("ab".parse::<Separator>().is_err());
        assert!("".parse::<Separator>().is_err());
    }

    #[test]
    fn test_separator_display_round_trips() {
        for sep in [Separator::Whitespace, Separator::Char('|')] {
            assert_eq!(sep.to_string().parse::<Separator>(), Ok(sep));
        }
    }

    #[test]
    fn test_label_position_from_str() {
        assert_eq!("first".parse::<LabelPosition>(), Ok(LabelPosition::First));
        assert_eq!("LAST".parse::<LabelPosition>(), Ok(LabelPosition::Last));
        assert!("middle".parse::<LabelPosition>().is_err());
    }
}
