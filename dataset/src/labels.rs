use crate::error::LabelRangeError;

/// How raw integer labels map onto canonical class indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelScheme {
    /// Raw labels -1/+1 map to 0/1.
    Binary,
    /// Raw labels are shifted down by the smallest observed label.
    Multiclass { offset: i32 },
}

impl LabelScheme {
    pub fn is_binary(&self) -> bool {
        matches!(self, LabelScheme::Binary)
    }

    /// Canonical index of an already validated raw label.
    fn map(&self, raw: i32) -> u32 {
        match self {
            LabelScheme::Binary => (1 + (raw - 1) / 2) as u32,
            LabelScheme::Multiclass { offset } => (raw - offset) as u32,
        }
    }

    /// Raw label as it appeared in the input for a canonical index.
    pub fn raw_label(&self, mapped: u32) -> i32 {
        match self {
            LabelScheme::Binary => {
                if mapped == 0 {
                    -1
                } else {
                    1
                }
            }
            LabelScheme::Multiclass { offset } => mapped as i32 + offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLabels {
    pub labels: Vec<u32>,
    pub scheme: LabelScheme,
}

impl ClassLabels {
    /// Largest canonical label plus one. Gaps in the raw labels count as classes.
    pub fn num_classes(&self) -> usize {
        self.labels.iter().max().map_or(0, |&max| max as usize + 1)
    }

    pub fn is_binary(&self) -> bool {
        self.scheme.is_binary()
    }
}

/// Validates raw class labels and maps them to canonical indices starting at 0.
///
/// The scheme can only be decided once every label has been seen, so this
/// makes one pass to collect statistics and a second to map.
pub fn normalize_class_labels(raw: &[i32]) -> Result<ClassLabels, LabelRangeError> {
    let mut binary = false;
    let mut min_label = i32::MAX;

    for (row, &label) in raw.iter().enumerate() {
        if label < -1 {
            return Err(LabelRangeError::Negative { row, label });
        }

        if label == -1 {
            binary = true;
        } else {
            min_label = min_label.min(label);
        }
    }

    let scheme = if binary {
        if let Some(row) = raw.iter().position(|&label| label != -1 && label != 1) {
            return Err(LabelRangeError::NotBinary {
                row,
                label: raw[row],
            });
        }
        LabelScheme::Binary
    } else if raw.is_empty() {
        LabelScheme::Multiclass { offset: 0 }
    } else {
        LabelScheme::Multiclass { offset: min_label }
    };

    let labels: Vec<u32> = raw.iter().map(|&label| scheme.map(label)).collect();
    let class_labels = ClassLabels { labels, scheme };

    log::debug!(
        "Label scheme {:?} with {} classes",
        class_labels.scheme,
        class_labels.num_classes()
    );

    if !class_labels.is_binary() {
        let mut distinct = class_labels.labels.clone();
        distinct.sort_unstable();
        distinct.dedup();

        if distinct.len() < class_labels.num_classes() {
            log::warn!(
                "Only {} of {} classes occur in the labels",
                distinct.len(),
                class_labels.num_classes()
            );
        }
    }

    Ok(class_labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary() {
        let labels = normalize_class_labels(&[-1, -1, 1]).unwrap();
        assert_eq!(labels.labels, vec![0, 0, 1]);
        assert!(labels.is_binary());
        assert_eq!(labels.num_classes(), 2);
    }

    #[test]
    fn test_multiclass_keeps_gaps() {
        let labels = normalize_class_labels(&[5, 7, 5]).unwrap();
        assert_eq!(labels.labels, vec![0, 2, 0]);
        assert_eq!(labels.scheme, LabelScheme::Multiclass { offset: 5 });
        assert_eq!(labels.num_classes(), 3);
    }

    #[test]
    fn test_multiclass_from_zero() {
        let labels = normalize_class_labels(&[2, 0, 1, 1]).unwrap();
        assert_eq!(labels.labels, vec![2, 0, 1, 1]);
        assert!(!labels.is_binary());
    }

    #[test]
    fn test_only_positive_ones_are_multiclass() {
        let labels = normalize_class_labels(&[1, 1]).unwrap();
        assert_eq!(labels.labels, vec![0, 0]);
        assert_eq!(labels.scheme, LabelScheme::Multiclass { offset: 1 });
    }

    #[test]
    fn test_minus_one_with_zero() {
        assert_eq!(
            normalize_class_labels(&[-1, 0]),
            Err(LabelRangeError::NotBinary { row: 1, label: 0 })
        );
    }

    #[test]
    fn test_minus_one_with_two() {
        assert_eq!(
            normalize_class_labels(&[1, 2, -1]),
            Err(LabelRangeError::NotBinary { row: 1, label: 2 })
        );
    }

    #[test]
    fn test_below_minus_one() {
        assert_eq!(
            normalize_class_labels(&[0, 1, -2, -1]),
            Err(LabelRangeError::Negative { row: 2, label: -2 })
        );
    }

    #[test]
    fn test_empty() {
        let labels = normalize_class_labels(&[]).unwrap();
        assert!(labels.labels.is_empty());
        assert_eq!(labels.num_classes(), 0);
    }

    #[test]
    fn test_raw_label_inverts_mapping() {
        let raw = [3, 9, 4, 3];
        let labels = normalize_class_labels(&raw).unwrap();
        let restored: Vec<i32> = labels
            .labels
            .iter()
            .map(|&l| labels.scheme.raw_label(l))
            .collect();
        assert_eq!(restored, raw);

        assert_eq!(LabelScheme::Binary.raw_label(0), -1);
        assert_eq!(LabelScheme::Binary.raw_label(1), 1);
    }
}
