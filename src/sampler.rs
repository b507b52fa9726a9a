// Row sampling for table-tamper
// Uniform selection of row indices without replacement

use crate::error::{check_rate, AttackError, Result};
use log::debug;
use rand::Rng;
use std::collections::BTreeSet;

/// Absorbs the representation error of decimal rates, e.g. `0.29 * 100.0 == 28.999...`.
const COUNT_EPSILON: f64 = 1e-9;

/// `floor(fraction * row_count)`, computed so that decimal fractions land on
/// the count they denote.
pub fn fraction_of(row_count: usize, fraction: f64) -> usize {
    let exact = fraction * row_count as f64;
    ((exact + COUNT_EPSILON).floor() as usize).min(row_count)
}

/// Number of rows `sample_rows` retains for a dataset of `row_count` rows.
pub fn retained_count(row_count: usize, rate: f64) -> usize {
    fraction_of(row_count, 1.0 - rate)
}

/// Select `floor((1 - rate) * row_count)` distinct row indices uniformly at random.
///
/// `rate` is the fraction of rows left out of the sample: `0.0` selects every
/// row and `1.0` selects none. Every subset of the target size is equally
/// likely.
pub fn sample_rows<R: Rng + ?Sized>(row_count: usize, rate: f64, rng: &mut R) -> Result<BTreeSet<usize>> {
    check_rate("sampling rate", rate)?;
    if row_count == 0 {
        return Err(AttackError::InvalidParameter(
            "cannot sample rows from an empty dataset".to_string(),
        ));
    }
    select_rows(row_count, retained_count(row_count, rate), rng)
}

/// Select exactly `count` distinct row indices in `[0, row_count)` uniformly at random.
pub fn select_rows<R: Rng + ?Sized>(row_count: usize, count: usize, rng: &mut R) -> Result<BTreeSet<usize>> {
    if count > row_count {
        return Err(AttackError::InvalidParameter(format!(
            "cannot select {} rows out of {}",
            count, row_count
        )));
    }
    debug!("Sampling {} of {} rows", count, row_count);
    Ok(rand::seq::index::sample(rng, row_count, count).into_iter().collect())
}
