use ndarray::{Array, Array1, Array2, ArrayView1, Dimension, Ix1, Ix2};

use crate::builder::ClassRow;

/// Describes how rows of type `R` are laid out in a batch.
///
/// The builder only knows how many rows go into each batch; the shape decides
/// how wide a row must be, how a batch is allocated and how one row is copied
/// into it.
pub trait RowShape<R> {
    type Elem;
    type Dim: Dimension;

    /// Number of columns every row must have.
    fn width(&self) -> usize;

    /// Number of columns this row has.
    fn row_width(&self, row: &R) -> usize;

    fn allocate(&self, rows: usize) -> Array<Self::Elem, Self::Dim>;

    fn assign(&self, batch: &mut Array<Self::Elem, Self::Dim>, index: usize, row: &R);
}

/// One value per row, stored as a vector per batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scalar;

impl<T: Clone + Default> RowShape<T> for Scalar {
    type Elem = T;
    type Dim = Ix1;

    fn width(&self) -> usize {
        1
    }

    fn row_width(&self, _row: &T) -> usize {
        1
    }

    fn allocate(&self, rows: usize) -> Array1<T> {
        Array1::from_elem(rows, T::default())
    }

    fn assign(&self, batch: &mut Array1<T>, index: usize, row: &T) {
        batch[index] = row.clone();
    }
}

/// Fixed-width numeric rows, stored as a rows x columns matrix per batch.
#[derive(Debug, Clone, Copy)]
pub struct Dense {
    pub columns: usize,
}

impl RowShape<Vec<f64>> for Dense {
    type Elem = f64;
    type Dim = Ix2;

    fn width(&self) -> usize {
        self.columns
    }

    fn row_width(&self, row: &Vec<f64>) -> usize {
        row.len()
    }

    fn allocate(&self, rows: usize) -> Array2<f64> {
        Array2::zeros((rows, self.columns))
    }

    fn assign(&self, batch: &mut Array2<f64>, index: usize, row: &Vec<f64>) {
        batch.row_mut(index).assign(&ArrayView1::from(row.as_slice()));
    }
}

/// A contiguous column range of rows that are `total` columns wide.
#[derive(Debug, Clone, Copy)]
pub struct Columns {
    pub total: usize,
    pub start: usize,
    pub len: usize,
}

impl RowShape<Vec<f64>> for Columns {
    type Elem = f64;
    type Dim = Ix2;

    fn width(&self) -> usize {
        self.total
    }

    fn row_width(&self, row: &Vec<f64>) -> usize {
        row.len()
    }

    fn allocate(&self, rows: usize) -> Array2<f64> {
        Array2::zeros((rows, self.len))
    }

    fn assign(&self, batch: &mut Array2<f64>, index: usize, row: &Vec<f64>) {
        let range = &row[self.start..self.start + self.len];
        batch.row_mut(index).assign(&ArrayView1::from(range));
    }
}

/// Feature part of a classification row.
#[derive(Debug, Clone, Copy)]
pub struct Features {
    pub columns: usize,
}

impl RowShape<ClassRow> for Features {
    type Elem = f64;
    type Dim = Ix2;

    fn width(&self) -> usize {
        self.columns
    }

    fn row_width(&self, row: &ClassRow) -> usize {
        row.features.len()
    }

    fn allocate(&self, rows: usize) -> Array2<f64> {
        Array2::zeros((rows, self.columns))
    }

    fn assign(&self, batch: &mut Array2<f64>, index: usize, row: &ClassRow) {
        batch
            .row_mut(index)
            .assign(&ArrayView1::from(row.features.as_slice()));
    }
}

/// Canonical label part of a classification row.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassLabel;

impl RowShape<ClassRow> for ClassLabel {
    type Elem = u32;
    type Dim = Ix1;

    fn width(&self) -> usize {
        1
    }

    fn row_width(&self, _row: &ClassRow) -> usize {
        1
    }

    fn allocate(&self, rows: usize) -> Array1<u32> {
        Array1::zeros(rows)
    }

    fn assign(&self, batch: &mut Array1<u32>, index: usize, row: &ClassRow) {
        batch[index] = row.label;
    }
}
