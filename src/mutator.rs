// Replacement value generation for table-tamper
// Produces the random values written by the insertion and modification attacks

use rand::Rng;

/// Upper bound (exclusive) of generated values.
pub const VALUE_SCALE: f64 = 10_000_000.0;

/// Generate one replacement value: `U(0, 1) * VALUE_SCALE` rendered as decimal text.
///
/// Values are independent of the column they land in, so tuples built from
/// them are statistically implausible on purpose.
pub fn random_value<R: Rng + ?Sized>(rng: &mut R) -> String {
    let value: f64 = rng.gen::<f64>() * VALUE_SCALE;
    value.to_string()
}

/// Generate a full tuple of `width` independent random values.
pub fn random_row<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Vec<String> {
    (0..width).map(|_| random_value(rng)).collect()
}
