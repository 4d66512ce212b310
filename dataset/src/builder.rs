use ndarray::Ix2;

use crate::data::{Dataset, LabeledDataset};
use crate::error::ShapeError;
use crate::shape::RowShape;

/// A feature row with its canonical class label.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassRow {
    pub label: u32,
    pub features: Vec<f64>,
}

/// Copies `rows` in order into one batch per entry of `batch_sizes`.
///
/// All rows are checked before anything is allocated, so a mismatch names the
/// first offending row and no partial dataset exists.
pub fn build_dataset<R, S>(
    rows: &[R],
    batch_sizes: &[usize],
    shape: &S,
) -> Result<Dataset<S::Elem, S::Dim>, ShapeError>
where
    S: RowShape<R>,
{
    check_plan(rows.len(), batch_sizes)?;

    for (idx, row) in rows.iter().enumerate() {
        check_row(shape, idx, row)?;
    }

    Ok(fill(rows, batch_sizes, shape))
}

/// Like [`build_dataset`], but splits every row into an input and a label part.
///
/// Both parts share the batch plan, so `inputs` and `labels` batches line up.
pub fn build_labeled_dataset<R, I, L>(
    rows: &[R],
    batch_sizes: &[usize],
    inputs: &I,
    labels: &L,
) -> Result<LabeledDataset<L::Elem, L::Dim>, ShapeError>
where
    I: RowShape<R, Elem = f64, Dim = Ix2>,
    L: RowShape<R>,
{
    check_plan(rows.len(), batch_sizes)?;

    for (idx, row) in rows.iter().enumerate() {
        check_row(inputs, idx, row)?;
        check_row(labels, idx, row)?;
    }

    Ok(LabeledDataset::new(
        fill(rows, batch_sizes, inputs),
        fill(rows, batch_sizes, labels),
    ))
}

fn check_plan(rows: usize, batch_sizes: &[usize]) -> Result<(), ShapeError> {
    let planned: usize = batch_sizes.iter().sum();
    if planned != rows {
        return Err(ShapeError::BatchPlan { planned, rows });
    }
    Ok(())
}

fn check_row<R, S: RowShape<R>>(shape: &S, idx: usize, row: &R) -> Result<(), ShapeError> {
    let got = shape.row_width(row);
    if got != shape.width() {
        return Err(ShapeError::Columns {
            row: idx,
            expected: shape.width(),
            got,
        });
    }
    Ok(())
}

fn fill<R, S>(rows: &[R], batch_sizes: &[usize], shape: &S) -> Dataset<S::Elem, S::Dim>
where
    S: RowShape<R>,
{
    let mut remaining = rows;

    let batches = batch_sizes
        .iter()
        .map(|&size| {
            let (chunk, rest) = remaining.split_at(size);
            remaining = rest;

            let mut batch = shape.allocate(size);
            for (i, row) in chunk.iter().enumerate() {
                shape.assign(&mut batch, i, row);
            }
            batch
        })
        .collect();

    debug_assert!(remaining.is_empty());
    Dataset::from_batches(batches)
}
