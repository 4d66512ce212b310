use std::path::Path;

use ahash::AHashMap;
use dataset::{Dataset, Imported, LabelScheme};
use dataset::ndarray::Ix2;

/// Statistics about one imported file, for logging.
#[derive(Debug, Clone)]
pub struct Summary {
    pub kind: &'static str,
    pub rows: usize,
    pub batch_sizes: Vec<usize>,
    pub input_dimension: usize,
    pub label_dimension: Option<usize>,
    pub missing: usize,
    pub classes: Option<ClassSummary>,
}

#[derive(Debug, Clone)]
pub struct ClassSummary {
    pub scheme: LabelScheme,
    /// Rows per canonical label.
    pub counts: AHashMap<u32, usize>,
}

impl Summary {
    pub fn new(imported: &Imported) -> Self {
        match imported {
            Imported::Unlabeled(data) => Self {
                kind: "unlabeled",
                rows: data.number_of_elements(),
                batch_sizes: data.batch_sizes(),
                input_dimension: data.dimension(),
                label_dimension: None,
                missing: count_missing(data),
                classes: None,
            },
            Imported::Classification { data, scheme } => {
                let mut counts = AHashMap::new();
                for &label in data.labels().elements() {
                    *counts.entry(label).or_insert(0) += 1;
                }

                Self {
                    kind: "classification",
                    rows: data.number_of_elements(),
                    batch_sizes: data.inputs().batch_sizes(),
                    input_dimension: data.input_dimension(),
                    label_dimension: Some(1),
                    missing: count_missing(data.inputs()),
                    classes: Some(ClassSummary {
                        scheme: *scheme,
                        counts,
                    }),
                }
            }
            Imported::Regression(data) => Self {
                kind: "regression",
                rows: data.number_of_elements(),
                batch_sizes: data.inputs().batch_sizes(),
                input_dimension: data.input_dimension(),
                label_dimension: Some(data.label_dimension()),
                missing: count_missing(data.inputs()) + count_missing(data.labels()),
                classes: None,
            },
        }
    }

    pub fn log(&self, path: &Path) {
        log::info!("{} ({})", path.display(), self.kind);
        log::info!("  Rows: {}", self.rows);

        match (self.batch_sizes.iter().min(), self.batch_sizes.iter().max()) {
            (Some(min), Some(max)) => log::info!(
                "  Batches: {} (sizes {}-{})",
                self.batch_sizes.len(),
                min,
                max
            ),
            _ => log::info!("  Batches: 0"),
        }

        log::info!("  Input dimension: {}", self.input_dimension);
        if let Some(dim) = self.label_dimension {
            log::info!("  Label dimension: {}", dim);
        }

        if self.missing > 0 {
            log::warn!("  Missing values: {}", self.missing);
        }

        if let Some(classes) = &self.classes {
            let kind = if classes.scheme.is_binary() {
                "binary"
            } else {
                "multiclass"
            };
            log::info!("  Label scheme: {}", kind);

            let mut counts: Vec<(u32, usize)> =
                classes.counts.iter().map(|(&l, &c)| (l, c)).collect();
            counts.sort_unstable();

            for (label, count) in counts {
                log::info!(
                    "    class {} (raw {}): {} rows",
                    label,
                    classes.scheme.raw_label(label),
                    count
                );
            }
        }
    }
}

fn count_missing(data: &Dataset<f64, Ix2>) -> usize {
    data.batches()
        .map(|batch| batch.iter().filter(|v| v.is_nan()).count())
        .sum()
}
