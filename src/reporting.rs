// Output for table-tamper
// Writes attacked datasets back as delimited text, plus Markdown and JSON run reports

use crate::engine::{AttackKind, AttackSummary};
use crate::error::Result;
use crate::models::Dataset;
use chrono::Local;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Quote a field when it contains the delimiter, a quote, or a line break.
///
/// Values are otherwise written verbatim so the output round-trips through
/// the loader unchanged.
fn escape_field(field: &str, delimiter: char) -> String {
    if field.contains(delimiter) || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_record<'a, W, I>(out: &mut W, fields: I, delimiter: char) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    let line: Vec<String> = fields.into_iter().map(|f| escape_field(f, delimiter)).collect();
    // A lone empty field would be a blank line, which readers skip
    if line.len() == 1 && line[0].is_empty() {
        return writeln!(out, "\"\"");
    }
    writeln!(out, "{}", line.join(&delimiter.to_string()))
}

/// Serialize a dataset: header row of attribute names, then one line per tuple.
pub fn write_dataset<W: Write>(out: &mut W, dataset: &Dataset, delimiter: char) -> Result<()> {
    dataset.validate()?;
    write_record(out, dataset.names.iter().map(String::as_str), delimiter)?;
    for row in dataset.rows() {
        write_record(out, row, delimiter)?;
    }
    Ok(())
}

pub fn export_dataset(path: &Path, dataset: &Dataset, delimiter: char) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_dataset(&mut file, dataset, delimiter)?;
    file.flush()?;
    Ok(())
}

/// Default output name: `<stem>_<attack>_<timestamp>.csv` in `dir`.
pub fn default_output_path(dir: &Path, input: &Path, attack: AttackKind) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("{}_{}_{}.csv", stem, attack, timestamp))
}

/// Default batch output directory: `<root name>_<attack>_<timestamp>` in `dir`.
pub fn default_batch_dir(dir: &Path, root: &Path, attack: AttackKind) -> PathBuf {
    let name = root
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "batch".to_string());
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("{}_{}_{}", name, attack, timestamp))
}

/// Place `input`, found under `root`, at the same relative path under `out_dir`.
///
/// Distinct inputs map to distinct outputs, so files sharing a name in
/// different sub-directories never overwrite each other.
pub fn mirrored_output_path(out_dir: &Path, root: &Path, input: &Path) -> PathBuf {
    match input.strip_prefix(root) {
        Ok(relative) if !relative.as_os_str().is_empty() => out_dir.join(relative),
        _ => out_dir.join(input.file_name().unwrap_or(input.as_os_str())),
    }
}

pub fn export_markdown(summaries: &[AttackSummary]) -> Result<String> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("tamper_report_{}.md", timestamp);
    let mut file = File::create(&filename)?;

    writeln!(file, "# Tamper Report\n")?;
    writeln!(file, "| Input | Attack | Parameter | Rows | Attributes | Cells modified | Removed attributes |")?;
    writeln!(file, "|-------|--------|-----------|------|------------|----------------|--------------------|")?;
    for s in summaries {
        writeln!(
            file,
            "| {} | {} | {} | {} -> {} | {} -> {} | {} | {} |",
            s.input,
            s.attack,
            s.parameter,
            s.rows_before,
            s.rows_after,
            s.columns_before,
            s.columns_after,
            s.cells_modified,
            s.removed_attributes.join(", ")
        )?;
    }

    Ok(filename)
}

pub fn export_json(summaries: &[AttackSummary]) -> Result<String> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("tamper_report_{}.json", timestamp);
    let file = File::create(&filename)?;
    serde_json::to_writer_pretty(file, summaries).map_err(std::io::Error::from)?;
    Ok(filename)
}
