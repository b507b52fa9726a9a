// Error taxonomy for table-tamper
// Every failure is a precondition failure surfaced before any data is touched

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttackError {
    /// A rate outside [0, 1], an attribute count that would empty the dataset,
    /// or a sample demanded from a zero-row dataset.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Names and columns disagree, or columns have different lengths.
    #[error("structural inconsistency: {0}")]
    StructuralInconsistency(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AttackError>;

/// Reject rates that are NaN or fall outside [0, 1].
pub fn check_rate(name: &str, rate: f64) -> Result<()> {
    if rate.is_nan() || !(0.0..=1.0).contains(&rate) {
        return Err(AttackError::InvalidParameter(format!(
            "{} must be within [0, 1], got {}",
            name, rate
        )));
    }
    Ok(())
}
