pub mod csv;

pub use self::csv::CsvLoader;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolve an input path to the files to attack.
///
/// A file is returned as-is. A directory is walked recursively for `*.csv`
/// files, returned in sorted order so batch runs are reproducible.
pub fn discover_inputs(input: &str) -> Vec<PathBuf> {
    let path = Path::new(input);
    if !path.is_dir() {
        return vec![path.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"))
        })
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}
