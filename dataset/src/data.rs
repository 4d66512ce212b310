use ndarray::{Array, Array2, ArrayView1, ArrayViewMut, ArrayViewMut2, Axis, Dimension, Ix1, Ix2};

/// An ordered sequence of batches. Each batch holds its rows along axis 0.
///
/// Batch count and batch shapes are fixed once built; values can be changed
/// through [`Dataset::batch_mut`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<A, D: Dimension> {
    batches: Vec<Array<A, D>>,
}

impl<A, D: Dimension> Default for Dataset<A, D> {
    fn default() -> Self {
        Self {
            batches: Vec::new(),
        }
    }
}

impl<A, D: Dimension> Dataset<A, D> {
    pub(crate) fn from_batches(batches: Vec<Array<A, D>>) -> Self {
        Self { batches }
    }

    pub fn number_of_batches(&self) -> usize {
        self.batches.len()
    }

    /// Total number of rows over all batches.
    pub fn number_of_elements(&self) -> usize {
        self.batches.iter().map(|b| b.len_of(Axis(0))).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn batch(&self, b: usize) -> &Array<A, D> {
        &self.batches[b]
    }

    pub fn batch_mut(&mut self, b: usize) -> ArrayViewMut<'_, A, D> {
        self.batches[b].view_mut()
    }

    pub fn batches(&self) -> std::slice::Iter<'_, Array<A, D>> {
        self.batches.iter()
    }

    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batches.iter().map(|b| b.len_of(Axis(0))).collect()
    }

    pub fn into_batches(self) -> Vec<Array<A, D>> {
        self.batches
    }
}

impl<A> Dataset<A, Ix2> {
    /// Columns per row, 0 for an empty dataset.
    pub fn dimension(&self) -> usize {
        self.batches.first().map_or(0, |b| b.ncols())
    }

    /// All rows in input order, across batch boundaries.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, A>> {
        self.batches.iter().flat_map(|b| b.rows())
    }
}

impl<A> Dataset<A, Ix1> {
    /// All elements in input order, across batch boundaries.
    pub fn elements(&self) -> impl Iterator<Item = &A> {
        self.batches.iter().flat_map(|b| b.iter())
    }
}

/// Inputs and labels stored as two datasets with identical batch sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledDataset<L, D: Dimension> {
    inputs: Dataset<f64, Ix2>,
    labels: Dataset<L, D>,
}

/// Feature matrices with one canonical class label per row.
pub type ClassificationDataset = LabeledDataset<u32, Ix1>;

/// Feature matrices with a target vector per row.
pub type RegressionDataset = LabeledDataset<f64, Ix2>;

impl<L, D: Dimension> Default for LabeledDataset<L, D> {
    fn default() -> Self {
        Self {
            inputs: Dataset::default(),
            labels: Dataset::default(),
        }
    }
}

impl<L, D: Dimension> LabeledDataset<L, D> {
    pub(crate) fn new(inputs: Dataset<f64, Ix2>, labels: Dataset<L, D>) -> Self {
        debug_assert_eq!(inputs.batch_sizes(), labels.batch_sizes());
        Self { inputs, labels }
    }

    pub fn number_of_batches(&self) -> usize {
        self.inputs.number_of_batches()
    }

    pub fn number_of_elements(&self) -> usize {
        self.inputs.number_of_elements()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn inputs(&self) -> &Dataset<f64, Ix2> {
        &self.inputs
    }

    pub fn labels(&self) -> &Dataset<L, D> {
        &self.labels
    }

    pub fn input_dimension(&self) -> usize {
        self.inputs.dimension()
    }

    pub fn batch(&self, b: usize) -> (&Array2<f64>, &Array<L, D>) {
        (self.inputs.batch(b), self.labels.batch(b))
    }

    pub fn batch_mut(&mut self, b: usize) -> (ArrayViewMut2<'_, f64>, ArrayViewMut<'_, L, D>) {
        (self.inputs.batch_mut(b), self.labels.batch_mut(b))
    }

    pub fn into_parts(self) -> (Dataset<f64, Ix2>, Dataset<L, D>) {
        (self.inputs, self.labels)
    }
}

impl LabeledDataset<f64, Ix2> {
    /// Target columns per row, 0 for an empty dataset.
    pub fn label_dimension(&self) -> usize {
        self.labels.dimension()
    }
}
