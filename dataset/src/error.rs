use std::io;
use std::path::PathBuf;

use parser::ParseError;

/// Rows that do not fit the shape of the dataset being built.
///
/// Row indices count parsed rows from zero, skipping blank and comment lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("row {row} has {got} columns, expected {expected}")]
    Columns {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("batch sizes cover {planned} rows, but {rows} rows were given")]
    BatchPlan { planned: usize, rows: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelRangeError {
    #[error("row {row}: label {label} is below -1, negative labels are only allowed for classes -1/1")]
    Negative { row: usize, label: i32 },

    #[error("row {row}: label {label} is not -1 or 1, but other rows use -1/1 labels")]
    NotBinary { row: usize, label: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("maximum batch size must be at least 1")]
    ZeroBatchSize,

    #[error("rows have {columns} columns, need more than the {outputs} requested outputs")]
    TooManyOutputs { outputs: usize, columns: usize },

    #[error("vector labels need at least one output column")]
    NoOutputs,

    #[error("{outputs} outputs requested, but no label column position is set")]
    OutputsWithoutLabels { outputs: usize },

    #[error("separator and comment character are both '{0}'")]
    SeparatorIsComment(char),

    #[error("comment character must not be whitespace")]
    BlankComment,

    #[error("'{0}' can appear inside values and cannot delimit or comment")]
    ReservedCharacter(char),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option '{name}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}

/// Any failure of an import. No partial dataset is returned alongside it.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("label error: {0}")]
    LabelRange(#[from] LabelRangeError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
