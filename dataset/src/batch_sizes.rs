use crate::error::ConfigError;

pub const DEFAULT_BATCH_SIZE: usize = 256;

/// Splits `total` rows into the fewest batches of at most `max_batch_size` rows.
///
/// Sizes differ by at most one, larger batches first, so there is never a tiny
/// trailing batch.
pub fn batch_sizes(total: usize, max_batch_size: usize) -> Result<Vec<usize>, ConfigError> {
    if max_batch_size == 0 {
        return Err(ConfigError::ZeroBatchSize);
    }
    if total == 0 {
        return Ok(Vec::new());
    }

    let num_batches = total.div_ceil(max_batch_size);
    let base = total / num_batches;
    let remainder = total % num_batches;

    Ok((0..num_batches)
        .map(|b| if b < remainder { base + 1 } else { base })
        .collect())
}
