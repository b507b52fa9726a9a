// Row-level attacks: deletion and insertion

use crate::error::{check_rate, Result};
use crate::models::Dataset;
use crate::mutator::random_row;
use crate::sampler::{fraction_of, sample_rows};
use log::debug;
use rand::Rng;

/// Deletion attack: remove a `rate` fraction of tuples.
///
/// The sampler keeps `floor((1 - rate) * R)` rows; they are copied in
/// ascending original order and every other row is dropped. Attribute names
/// and column order are unchanged.
pub fn delete_rows<R: Rng + ?Sized>(dataset: Dataset, rate: f64, rng: &mut R) -> Result<Dataset> {
    dataset.validate()?;
    let keep = sample_rows(dataset.row_count(), rate, rng)?;
    debug!(
        "Deleting {} of {} rows",
        dataset.row_count() - keep.len(),
        dataset.row_count()
    );

    let mut attacked = Dataset::with_capacity(dataset.names.clone(), keep.len());
    for &row in &keep {
        attacked.push_row(dataset.columns.iter().map(|c| c[row].clone()));
    }
    Ok(attacked)
}

/// Insertion attack: append `floor(rate * R)` tuples of independent random values.
///
/// The original rows come first, verbatim and in order.
pub fn insert_rows<R: Rng + ?Sized>(dataset: Dataset, rate: f64, rng: &mut R) -> Result<Dataset> {
    dataset.validate()?;
    check_rate("insertion rate", rate)?;

    let insert_count = fraction_of(dataset.row_count(), rate);
    debug!("Inserting {} synthetic rows", insert_count);

    let width = dataset.column_count();
    let mut attacked = dataset;
    for _ in 0..insert_count {
        attacked.push_row(random_row(width, rng));
    }
    Ok(attacked)
}
