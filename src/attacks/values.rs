// Value modification attacks: uniform and frequency-prioritized

use crate::error::{check_rate, Result};
use crate::frequency::FrequencyIndex;
use crate::models::Dataset;
use crate::mutator::random_value;
use crate::sampler::{fraction_of, select_rows};
use log::debug;
use rand::Rng;

/// Uniform modification attack: rewrite a `rate` fraction of tuples.
///
/// Exactly `floor(rate * R)` rows are chosen uniformly without replacement and
/// every cell in them is replaced by an independent random value. `rate` is
/// the fraction *modified*, the opposite direction from `delete_rows`, where
/// it is the fraction removed. All other rows are left untouched.
pub fn modify_uniform<R: Rng + ?Sized>(dataset: Dataset, rate: f64, rng: &mut R) -> Result<Dataset> {
    dataset.validate()?;
    check_rate("modification rate", rate)?;

    let row_count = dataset.row_count();
    let victim_count = fraction_of(row_count, rate);
    let victims = select_rows(row_count, victim_count, rng)?;

    let mut attacked = dataset;
    for &row in &victims {
        for column in attacked.columns.iter_mut() {
            column[row] = random_value(rng);
        }
    }
    debug!("Modified {} of {} rows", victims.len(), row_count);
    Ok(attacked)
}

/// Frequency-prioritized modification attack.
///
/// Per attribute, value groups are rewritten largest first until the
/// cumulative share of rewritten rows reaches `threshold`. All rows of a group
/// receive the same fresh value, so the sizes of the equal-value partitions
/// of every attribute are preserved while their identities change. Columns
/// are attacked independently, each against its own ranking.
pub fn modify_by_frequency<R: Rng + ?Sized>(dataset: Dataset, threshold: f64, rng: &mut R) -> Result<Dataset> {
    dataset.validate()?;
    check_rate("frequency threshold", threshold)?;

    let row_count = dataset.row_count();
    if row_count == 0 {
        return Ok(dataset);
    }

    let mut attacked = dataset;
    for (name, column) in attacked.names.iter().zip(attacked.columns.iter_mut()) {
        let index = FrequencyIndex::from_column(name, column);
        let mut modified = 0usize;
        let mut rewritten = 0usize;

        for group in &index.groups {
            if modified as f64 / row_count as f64 >= threshold {
                break;
            }
            let value = random_value(rng);
            for &row in &group.rows {
                column[row] = value.clone();
            }
            modified += group.len();
            rewritten += 1;
        }

        debug!(
            "Attribute '{}': rewrote {} of {} value groups ({} rows)",
            name,
            rewritten,
            index.distinct_values(),
            modified
        );
    }
    Ok(attacked)
}
