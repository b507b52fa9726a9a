// Frequency ranking for table-tamper
// Groups each attribute's rows by value and ranks the groups by size

use crate::models::Dataset;
use std::collections::HashMap;

/// All rows of one attribute that hold the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueGroup {
    pub value: String,
    pub rows: Vec<usize>,
}

impl ValueGroup {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Value groups of one attribute, largest first.
///
/// Groups of equal size keep the order in which their value first appears in
/// the column, so the ranking is deterministic for a given column. The groups
/// partition the row indices: every row appears in exactly one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyIndex {
    pub attribute: String,
    pub groups: Vec<ValueGroup>,
}

impl FrequencyIndex {
    pub fn from_column(attribute: &str, column: &[String]) -> Self {
        let mut position: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<ValueGroup> = Vec::new();

        for (row, value) in column.iter().enumerate() {
            match position.get(value.as_str()) {
                Some(&i) => groups[i].rows.push(row),
                None => {
                    position.insert(value.as_str(), groups.len());
                    groups.push(ValueGroup {
                        value: value.clone(),
                        rows: vec![row],
                    });
                }
            }
        }

        // sort_by is stable, so ties stay in first-occurrence order
        groups.sort_by(|a, b| b.len().cmp(&a.len()));

        Self {
            attribute: attribute.to_string(),
            groups,
        }
    }

    /// Sizes of the value groups in ranked order.
    pub fn group_sizes(&self) -> Vec<usize> {
        self.groups.iter().map(ValueGroup::len).collect()
    }

    pub fn distinct_values(&self) -> usize {
        self.groups.len()
    }

    pub fn most_frequent(&self) -> Option<&ValueGroup> {
        self.groups.first()
    }
}

/// Derive the frequency index of every attribute, in column order.
pub fn frequency_index(dataset: &Dataset) -> Vec<FrequencyIndex> {
    dataset
        .names
        .iter()
        .zip(&dataset.columns)
        .map(|(name, column)| FrequencyIndex::from_column(name, column))
        .collect()
}
