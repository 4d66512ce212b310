mod batch_sizes;
mod builder;
mod config;
mod data;
mod error;
mod import;
mod labels;
mod shape;


pub use batch_sizes::{batch_sizes, DEFAULT_BATCH_SIZE};
pub use builder::{build_dataset, build_labeled_dataset, ClassRow};
pub use config::{
    validate_comment, validate_dialect, ConfigParam, ImportConfig, ImportOption, LabelColumn,
    OptionType, Target,
};
pub use data::{ClassificationDataset, Dataset, LabeledDataset, RegressionDataset};
pub use error::{ConfigError, ImportError, LabelRangeError, ShapeError};
pub use import::{
    csv_string_to_classification, csv_string_to_data, csv_string_to_regression,
    csv_string_to_values, import_classification, import_data, import_from_path,
    import_regression, import_values, parse_text, Imported,
};
pub use labels::{normalize_class_labels, ClassLabels, LabelScheme};
pub use shape::{ClassLabel, Columns, Dense, Features, RowShape, Scalar};

pub use ndarray;
pub use parser::{Dialect, LabelPosition, ParseError, ParseErrorKind, Separator};
