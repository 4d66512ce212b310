use std::fs;
use std::path::Path;
use std::str::FromStr;

use ndarray::{Ix1, Ix2};
use parser::{Dialect, LabelPosition};

use crate::batch_sizes::batch_sizes;
use crate::builder::{build_dataset, build_labeled_dataset, ClassRow};
use crate::config::{validate_comment, validate_dialect, ImportConfig, Target};
use crate::data::{ClassificationDataset, Dataset, RegressionDataset};
use crate::error::{ConfigError, ImportError};
use crate::labels::{normalize_class_labels, LabelScheme};
use crate::shape::{ClassLabel, Columns, Dense, Features, Scalar};

/// Result of [`parse_text`], depending on the configured target.
#[derive(Debug, Clone, PartialEq)]
pub enum Imported {
    Unlabeled(Dataset<f64, Ix2>),
    Classification {
        data: ClassificationDataset,
        scheme: LabelScheme,
    },
    Regression(RegressionDataset),
}

impl Imported {
    pub fn number_of_elements(&self) -> usize {
        match self {
            Imported::Unlabeled(data) => data.number_of_elements(),
            Imported::Classification { data, .. } => data.number_of_elements(),
            Imported::Regression(data) => data.number_of_elements(),
        }
    }

    pub fn number_of_batches(&self) -> usize {
        match self {
            Imported::Unlabeled(data) => data.number_of_batches(),
            Imported::Classification { data, .. } => data.number_of_batches(),
            Imported::Regression(data) => data.number_of_batches(),
        }
    }
}

/// Parses `contents` into the dataset kind selected by `config`.
pub fn parse_text(contents: &str, config: &ImportConfig) -> Result<Imported, ImportError> {
    config.validate()?;

    let dialect = config.dialect();
    let max_batch_size = config.max_batch_size();

    let imported = match config.target()? {
        Target::Unlabeled => {
            Imported::Unlabeled(csv_string_to_data(contents, &dialect, max_batch_size)?)
        }
        Target::Class(position) => {
            let (data, scheme) =
                csv_string_to_classification(contents, position, &dialect, max_batch_size)?;
            Imported::Classification { data, scheme }
        }
        Target::Vector { position, outputs } => Imported::Regression(csv_string_to_regression(
            contents,
            position,
            outputs,
            &dialect,
            max_batch_size,
        )?),
    };

    Ok(imported)
}

/// Reads the whole file, then [`parse_text`].
pub fn import_from_path(
    path: impl AsRef<Path>,
    config: &ImportConfig,
) -> Result<Imported, ImportError> {
    parse_text(&read_file(path.as_ref())?, config)
}

/// Rows of numbers, all of the same width.
pub fn csv_string_to_data(
    contents: &str,
    dialect: &Dialect,
    max_batch_size: usize,
) -> Result<Dataset<f64, Ix2>, ImportError> {
    validate_dialect(dialect)?;

    let rows = parser::parse_rows(contents, dialect)?;
    let sizes = batch_sizes(rows.len(), max_batch_size)?;
    let columns = rows.first().map_or(0, Vec::len);

    log::debug!(
        "Building {} rows x {} columns in {} batches",
        rows.len(),
        columns,
        sizes.len()
    );

    Ok(build_dataset(&rows, &sizes, &Dense { columns })?)
}

/// One value per element, separated by any whitespace.
pub fn csv_string_to_values<T>(
    contents: &str,
    comment: char,
    max_batch_size: usize,
) -> Result<Dataset<T, Ix1>, ImportError>
where
    T: FromStr + Clone + Default,
{
    validate_comment(comment)?;

    let values: Vec<T> = parser::parse_values(contents, comment)?;
    let sizes = batch_sizes(values.len(), max_batch_size)?;

    Ok(build_dataset(&values, &sizes, &Scalar)?)
}

/// Rows with an integer class label in the first or last column.
///
/// Labels are validated and mapped to canonical indices before any row is
/// copied; the returned scheme maps them back.
pub fn csv_string_to_classification(
    contents: &str,
    position: LabelPosition,
    dialect: &Dialect,
    max_batch_size: usize,
) -> Result<(ClassificationDataset, LabelScheme), ImportError> {
    validate_dialect(dialect)?;

    let points = parser::parse_points(contents, position, dialect)?;

    let raw: Vec<i32> = points.iter().map(|p| p.label).collect();
    let labels = normalize_class_labels(&raw)?;

    let rows: Vec<ClassRow> = points
        .into_iter()
        .zip(labels.labels)
        .map(|(point, label)| ClassRow {
            label,
            features: point.features,
        })
        .collect();

    let sizes = batch_sizes(rows.len(), max_batch_size)?;
    let columns = rows.first().map_or(0, |row| row.features.len());

    let data = build_labeled_dataset(&rows, &sizes, &Features { columns }, &ClassLabel)?;
    Ok((data, labels.scheme))
}

/// Rows whose first or last `outputs` columns are regression targets.
pub fn csv_string_to_regression(
    contents: &str,
    position: LabelPosition,
    outputs: usize,
    dialect: &Dialect,
    max_batch_size: usize,
) -> Result<RegressionDataset, ImportError> {
    if outputs == 0 {
        return Err(ConfigError::NoOutputs.into());
    }
    validate_dialect(dialect)?;

    let rows = parser::parse_rows(contents, dialect)?;
    let sizes = batch_sizes(rows.len(), max_batch_size)?;

    let Some(first) = rows.first() else {
        return Ok(RegressionDataset::default());
    };

    let columns = first.len();
    if columns <= outputs {
        return Err(ConfigError::TooManyOutputs { outputs, columns }.into());
    }

    let inputs = columns - outputs;
    let (input_start, output_start) = match position {
        LabelPosition::First => (outputs, 0),
        LabelPosition::Last => (0, inputs),
    };

    let input_shape = Columns {
        total: columns,
        start: input_start,
        len: inputs,
    };
    let output_shape = Columns {
        total: columns,
        start: output_start,
        len: outputs,
    };

    Ok(build_labeled_dataset(
        &rows,
        &sizes,
        &input_shape,
        &output_shape,
    )?)
}

pub fn import_data(
    path: impl AsRef<Path>,
    dialect: &Dialect,
    max_batch_size: usize,
) -> Result<Dataset<f64, Ix2>, ImportError> {
    csv_string_to_data(&read_file(path.as_ref())?, dialect, max_batch_size)
}

pub fn import_values<T>(
    path: impl AsRef<Path>,
    comment: char,
    max_batch_size: usize,
) -> Result<Dataset<T, Ix1>, ImportError>
where
    T: FromStr + Clone + Default,
{
    csv_string_to_values(&read_file(path.as_ref())?, comment, max_batch_size)
}

pub fn import_classification(
    path: impl AsRef<Path>,
    position: LabelPosition,
    dialect: &Dialect,
    max_batch_size: usize,
) -> Result<(ClassificationDataset, LabelScheme), ImportError> {
    csv_string_to_classification(&read_file(path.as_ref())?, position, dialect, max_batch_size)
}

pub fn import_regression(
    path: impl AsRef<Path>,
    position: LabelPosition,
    outputs: usize,
    dialect: &Dialect,
    max_batch_size: usize,
) -> Result<RegressionDataset, ImportError> {
    csv_string_to_regression(
        &read_file(path.as_ref())?,
        position,
        outputs,
        dialect,
        max_batch_size,
    )
}

fn read_file(path: &Path) -> Result<String, ImportError> {
    let contents = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}
