// Attack configuration for table-tamper
// Defaults < JSON config file < command-line flags

use crate::engine::AttackKind;
use crate::error::{check_rate, AttackError, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackConfig {
    pub attack: AttackKind,
    /// Fraction of rows removed by the deletion attack
    pub deletion_rate: f64,
    /// Inserted rows as a fraction of the original row count
    pub insertion_rate: f64,
    /// Fraction of rows rewritten by the uniform modification attack
    pub modification_rate: f64,
    /// Cumulative share of rows the frequency attack rewrites per attribute
    pub frequency_threshold: f64,
    pub attributes_to_delete: usize,
    pub seed: Option<u64>,
    pub delimiter: char,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            attack: AttackKind::Modify,
            deletion_rate: 0.2,
            insertion_rate: 1.0,
            modification_rate: 0.8,
            frequency_threshold: 0.8,
            attributes_to_delete: 2,
            seed: None,
            delimiter: ',',
        }
    }
}

impl AttackConfig {
    pub fn from_json_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AttackError::Config(format!("failed to read {}: {}", path, e)))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content).map_err(|e| AttackError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Override the rate used by the selected attack.
    pub fn set_rate(&mut self, rate: f64) {
        match self.attack {
            AttackKind::Delete => self.deletion_rate = rate,
            AttackKind::Insert => self.insertion_rate = rate,
            AttackKind::Modify => self.modification_rate = rate,
            AttackKind::ModifyFrequency => self.frequency_threshold = rate,
            AttackKind::DeleteAttributes => {}
        }
    }

    /// The parameter the selected attack runs with.
    pub fn parameter(&self) -> f64 {
        match self.attack {
            AttackKind::Delete => self.deletion_rate,
            AttackKind::Insert => self.insertion_rate,
            AttackKind::Modify => self.modification_rate,
            AttackKind::ModifyFrequency => self.frequency_threshold,
            AttackKind::DeleteAttributes => self.attributes_to_delete as f64,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_rate("deletion_rate", self.deletion_rate)?;
        check_rate("insertion_rate", self.insertion_rate)?;
        check_rate("modification_rate", self.modification_rate)?;
        check_rate("frequency_threshold", self.frequency_threshold)?;
        if matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(AttackError::InvalidParameter(format!(
                "{:?} cannot be used as a delimiter",
                self.delimiter
            )));
        }
        Ok(())
    }
}
