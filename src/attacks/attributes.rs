// Vertical attack: attribute deletion

use crate::error::{AttackError, Result};
use crate::models::Dataset;
use log::debug;
use rand::Rng;

/// Remove `num` attributes, one at a time.
///
/// Each removal draws uniformly from the attributes still present, so the
/// index space shrinks after every draw. At least one attribute must
/// survive: `num` has to be smaller than the column count. This is stricter
/// than a plain `num <= C` bound; `num == C` is rejected with
/// `InvalidParameter` because a dataset without attributes has no rows.
pub fn delete_attributes<R: Rng + ?Sized>(dataset: Dataset, num: usize, rng: &mut R) -> Result<Dataset> {
    dataset.validate()?;
    if num >= dataset.column_count() {
        return Err(AttackError::InvalidParameter(format!(
            "cannot delete {} of {} attributes, at least one must remain",
            num,
            dataset.column_count()
        )));
    }

    let mut attacked = dataset;
    for _ in 0..num {
        let victim = rng.gen_range(0..attacked.column_count());
        attacked.columns.remove(victim);
        let name = attacked.names.remove(victim);
        debug!("Removed attribute '{}'", name);
    }
    Ok(attacked)
}
