/// Integration tests for the delimited text loader and input discovery
use std::fs;
use table_tamper::error::AttackError;
use table_tamper::models::DatasetLoader;
use table_tamper::parsers::{discover_inputs, CsvLoader};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_csv_basic_parsing() {
    let content = "year,area,wages\n2000,01001,523\n2000,01003,611\n2001,01001,540\n";
    let dataset = CsvLoader::default().parse_str(content).unwrap();

    assert_eq!(dataset.names, strings(&["year", "area", "wages"]));
    assert_eq!(dataset.row_count(), 3);
    assert_eq!(dataset.columns[1], strings(&["01001", "01003", "01001"]));
    assert_eq!(dataset.row(2), Some(vec!["2001", "01001", "540"]));
}

#[test]
fn test_csv_custom_delimiter() {
    let content = "name;city\n\"Dupont; Jean\";Paris\nMartin;Lyon\n";
    let dataset = CsvLoader::new(';').parse_str(content).unwrap();

    assert_eq!(dataset.row_count(), 2);
    assert_eq!(dataset.columns[0][0], "Dupont; Jean");
}

#[test]
fn test_csv_header_only() {
    let dataset = CsvLoader::default().parse_str("a,b,c\n").unwrap();
    assert_eq!(dataset.column_count(), 3);
    assert_eq!(dataset.row_count(), 0);
}

#[test]
fn test_csv_field_count_mismatch() {
    let result = CsvLoader::default().parse_str("a,b\n1,2\n3\n");
    match result {
        Err(AttackError::StructuralInconsistency(message)) => assert!(message.contains("line 3")),
        other => panic!("expected structural error, got {:?}", other),
    }
}

#[test]
fn test_csv_empty_file() {
    assert!(matches!(
        CsvLoader::default().parse_str(""),
        Err(AttackError::Parse { .. })
    ));
}

#[test]
fn test_load_from_file_strips_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geo.csv");
    fs::write(&path, "\u{feff}state,county\r\nCA,Alameda\r\nNY,Kings\r\n").unwrap();

    let dataset = CsvLoader::default().load(path.to_str().unwrap()).unwrap();
    assert_eq!(dataset.names, strings(&["state", "county"]));
    assert_eq!(dataset.columns[1], strings(&["Alameda", "Kings"]));
}

#[test]
fn test_load_missing_file() {
    let result = CsvLoader::default().load("/nonexistent/table-tamper/input.csv");
    assert!(matches!(result, Err(AttackError::Io(_))));
}

#[test]
fn test_discover_inputs_in_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("b.csv"), "a\n1\n").unwrap();
    fs::write(dir.path().join("a.CSV"), "a\n1\n").unwrap();
    fs::write(dir.path().join("nested").join("c.csv"), "a\n1\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

    let inputs = discover_inputs(dir.path().to_str().unwrap());
    let names: Vec<String> = inputs
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(inputs.len(), 3);
    assert!(names.contains(&"a.CSV".to_string()));
    assert!(names.contains(&"b.csv".to_string()));
    assert!(names.contains(&"c.csv".to_string()));
    assert!(!names.contains(&"notes.txt".to_string()));
}

#[test]
fn test_discover_inputs_single_file() {
    let inputs = discover_inputs("wages.csv");
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].to_str(), Some("wages.csv"));
}
