// Attack engine for table-tamper
// Owns the seedable RNG and dispatches one attack per dataset

use crate::attacks::{delete_attributes, delete_rows, insert_rows, modify_by_frequency, modify_uniform};
use crate::config::AttackConfig;
use crate::error::{AttackError, Result};
use crate::models::Dataset;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Supported attack models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttackKind {
    Delete,
    Insert,
    Modify,
    ModifyFrequency,
    DeleteAttributes,
}

impl AttackKind {
    pub const ALL: [AttackKind; 5] = [
        AttackKind::Delete,
        AttackKind::Insert,
        AttackKind::Modify,
        AttackKind::ModifyFrequency,
        AttackKind::DeleteAttributes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttackKind::Delete => "delete",
            AttackKind::Insert => "insert",
            AttackKind::Modify => "modify",
            AttackKind::ModifyFrequency => "modify-frequency",
            AttackKind::DeleteAttributes => "delete-attributes",
        }
    }
}

impl fmt::Display for AttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AttackKind {
    type Err = AttackError;

    fn from_str(s: &str) -> Result<Self> {
        AttackKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                AttackError::InvalidParameter(format!(
                    "unknown attack '{}', expected one of: delete, insert, modify, modify-frequency, delete-attributes",
                    s
                ))
            })
    }
}

/// What one attack run did to one dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttackSummary {
    pub input: String,
    pub attack: AttackKind,
    pub parameter: f64,
    pub rows_before: usize,
    pub rows_after: usize,
    pub columns_before: usize,
    pub columns_after: usize,
    pub cells_modified: usize,
    pub removed_attributes: Vec<String>,
}

pub struct AttackEngine {
    rng: ChaCha20Rng,
}

impl AttackEngine {
    /// Seeded engines replay identically; unseeded ones draw from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Self { rng }
    }

    /// Run the configured attack against `dataset`.
    ///
    /// Parameters and dataset structure are validated before anything is
    /// changed; on error no attacked dataset exists.
    pub fn run(&mut self, dataset: Dataset, config: &AttackConfig, input: &str) -> Result<(Dataset, AttackSummary)> {
        config.validate()?;
        dataset.validate()?;

        let kind = config.attack;
        let rows_before = dataset.row_count();
        let columns_before = dataset.column_count();
        let names_before = dataset.names.clone();

        let (attacked, cells_modified) = match kind {
            AttackKind::Delete => (delete_rows(dataset, config.deletion_rate, &mut self.rng)?, 0),
            AttackKind::Insert => (insert_rows(dataset, config.insertion_rate, &mut self.rng)?, 0),
            AttackKind::Modify => {
                let original = dataset.clone();
                let attacked = modify_uniform(dataset, config.modification_rate, &mut self.rng)?;
                let changed = count_changed_cells(&original, &attacked);
                (attacked, changed)
            }
            AttackKind::ModifyFrequency => {
                let original = dataset.clone();
                let attacked = modify_by_frequency(dataset, config.frequency_threshold, &mut self.rng)?;
                let changed = count_changed_cells(&original, &attacked);
                (attacked, changed)
            }
            AttackKind::DeleteAttributes => (
                delete_attributes(dataset, config.attributes_to_delete, &mut self.rng)?,
                0,
            ),
        };

        let summary = AttackSummary {
            input: input.to_string(),
            attack: kind,
            parameter: config.parameter(),
            rows_before,
            rows_after: attacked.row_count(),
            columns_before,
            columns_after: attacked.column_count(),
            cells_modified,
            removed_attributes: removed_names(&names_before, &attacked.names),
        };

        info!(
            "{} on {}: {} rows x {} attributes -> {} rows x {} attributes",
            kind,
            input,
            summary.rows_before,
            summary.columns_before,
            summary.rows_after,
            summary.columns_after
        );
        Ok((attacked, summary))
    }
}

/// Cells whose value differs between two datasets of identical shape.
fn count_changed_cells(before: &Dataset, after: &Dataset) -> usize {
    before
        .columns
        .iter()
        .zip(&after.columns)
        .map(|(a, b)| a.iter().zip(b).filter(|(x, y)| x != y).count())
        .sum()
}

/// Names present in `before` but not in `after`, counting duplicates.
fn removed_names(before: &[String], after: &[String]) -> Vec<String> {
    let mut remaining: HashMap<&str, usize> = HashMap::new();
    for name in after {
        *remaining.entry(name.as_str()).or_insert(0) += 1;
    }
    let mut removed = Vec::new();
    for name in before {
        match remaining.get_mut(name.as_str()) {
            Some(count) if *count > 0 => *count -= 1,
            _ => removed.push(name.clone()),
        }
    }
    removed
}
