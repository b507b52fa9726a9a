pub mod error;
pub mod models;
pub mod frequency;
pub mod sampler;
pub mod mutator;
pub mod attacks;  // Row, value and attribute attacks
pub mod engine;
pub mod config;
pub mod parsers;
pub mod reporting;

// Re-export commonly used items
pub use error::{check_rate, AttackError};
pub use models::*;
pub use frequency::*;
pub use sampler::*;
pub use mutator::*;
pub use attacks::*;
pub use engine::*;
pub use config::*;
pub use parsers::*;
pub use reporting::*;
