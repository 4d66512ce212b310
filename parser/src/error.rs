/// Failure to read the text as the requested dialect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number in the input text.
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("invalid label '{0}', expected an integer")]
    InvalidLabel(String),

    #[error("missing label")]
    MissingLabel,

    #[error("invalid value '{0}'")]
    InvalidValue(String),
}
