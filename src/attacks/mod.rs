// Attack Transformations
//
// The tampering models a watermark detector has to survive:
//
// - rows: tuple deletion and tuple insertion (the row count changes)
// - values: uniform and frequency-prioritized value modification
// - attributes: vertical attack, whole attributes removed
//
// Every attack takes the dataset by value, validates its parameters and the
// dataset's structure first, and returns a new dataset. Randomness always
// comes from the caller's RNG so runs replay under a fixed seed.

pub mod attributes;
pub mod rows;
pub mod values;

pub use attributes::delete_attributes;
pub use rows::{delete_rows, insert_rows};
pub use values::{modify_by_frequency, modify_uniform};
