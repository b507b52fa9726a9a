// Delimited text loader for table-tamper
// Header row becomes the attribute names, every following record one tuple

use crate::error::{AttackError, Result};
use crate::models::{Dataset, DatasetLoader};

pub struct CsvLoader {
    pub delimiter: char,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvLoader {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Parse delimited text already held in memory.
    pub fn parse_str(&self, content: &str) -> Result<Dataset> {
        let mut records = parse_records(content, self.delimiter)?.into_iter();
        let (_, names) = records.next().ok_or_else(|| AttackError::Parse {
            line: 1,
            message: "missing header row".to_string(),
        })?;

        let mut dataset = Dataset::with_capacity(names, 0);
        for (line, record) in records {
            if record.len() != dataset.column_count() {
                return Err(AttackError::StructuralInconsistency(format!(
                    "line {} has {} fields but the header has {}",
                    line,
                    record.len(),
                    dataset.column_count()
                )));
            }
            dataset.push_row(record);
        }
        Ok(dataset)
    }
}

impl DatasetLoader for CsvLoader {
    fn load(&self, file_path: &str) -> Result<Dataset> {
        let content = std::fs::read_to_string(file_path)?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        self.parse_str(content)
    }
}

/// Split text into records, each tagged with the line it starts on.
///
/// Quoted fields may contain the delimiter, line breaks and `""` escapes.
/// Blank lines at the end of the input are dropped.
fn parse_records(content: &str, delimiter: char) -> Result<Vec<(usize, Vec<String>)>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut quote_line = 1;
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(ch);
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() && !quoted => {
                in_quotes = true;
                quoted = true;
                quote_line = line;
            }
            '\r' | '\n' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                record.push(std::mem::take(&mut field));
                records.push((record_line, std::mem::take(&mut record), quoted));
                quoted = false;
                line += 1;
                record_line = line;
            }
            c if c == delimiter => {
                record.push(std::mem::take(&mut field));
                quoted = false;
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(AttackError::Parse {
            line: quote_line,
            message: "unterminated quoted field".to_string(),
        });
    }
    if !field.is_empty() || !record.is_empty() || quoted {
        record.push(field);
        records.push((record_line, record, quoted));
    }

    while matches!(records.last(), Some((_, r, false)) if r.len() == 1 && r[0].is_empty()) {
        records.pop();
    }
    if records.is_empty() {
        return Err(AttackError::Parse {
            line: 1,
            message: "empty input".to_string(),
        });
    }
    Ok(records.into_iter().map(|(line, record, _)| (line, record)).collect())
}
