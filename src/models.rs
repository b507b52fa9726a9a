// Core data models and traits for table-tamper

use crate::error::{AttackError, Result};
use std::fmt;

/// A table of named attributes whose columns all share one row count.
///
/// Values are kept as the text they were loaded from; attacks never interpret
/// them numerically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    pub names: Vec<String>,
    pub columns: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset, rejecting mismatched names or ragged columns.
    pub fn new(names: Vec<String>, columns: Vec<Vec<String>>) -> Result<Self> {
        let dataset = Self { names, columns };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Empty dataset with the given attributes and room for `rows` rows per column.
    pub fn with_capacity(names: Vec<String>, rows: usize) -> Self {
        let columns = names.iter().map(|_| Vec::with_capacity(rows)).collect();
        Self { names, columns }
    }

    /// Build a dataset from row-major records.
    pub fn from_rows(names: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let mut dataset = Self::with_capacity(names, rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dataset.column_count() {
                return Err(AttackError::StructuralInconsistency(format!(
                    "row {} has {} values but there are {} attributes",
                    i,
                    row.len(),
                    dataset.column_count()
                )));
            }
            dataset.push_row(row);
        }
        Ok(dataset)
    }

    /// Check that every attribute has a column and every column has the same length.
    pub fn validate(&self) -> Result<()> {
        if self.names.len() != self.columns.len() {
            return Err(AttackError::StructuralInconsistency(format!(
                "{} attribute names but {} columns",
                self.names.len(),
                self.columns.len()
            )));
        }
        if let Some(first) = self.columns.first() {
            let expected = first.len();
            for (name, column) in self.names.iter().zip(&self.columns) {
                if column.len() != expected {
                    return Err(AttackError::StructuralInconsistency(format!(
                        "column '{}' has {} rows, expected {}",
                        name,
                        column.len(),
                        expected
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.len())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Values of row `index` across all columns, in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&str>> {
        if index >= self.row_count() {
            return None;
        }
        Some(self.columns.iter().map(|c| c[index].as_str()).collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.row_count()).map(move |i| self.columns.iter().map(|c| c[i].as_str()).collect())
    }

    /// Append one value per column. Callers guarantee `row.len() == column_count()`.
    pub(crate) fn push_row<I>(&mut self, row: I)
    where
        I: IntoIterator<Item = String>,
    {
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.push(value);
        }
    }

    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows x {} attributes [{}]",
            self.row_count(),
            self.column_count(),
            self.names.join(", ")
        )
    }
}

/// Trait for loading datasets from delimited sources
pub trait DatasetLoader {
    /// Read a file and return a structurally valid dataset
    fn load(&self, file_path: &str) -> Result<Dataset>;
}
