use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::fs;
use std::path::Path;
use table_tamper::attacks::insert_rows;
use table_tamper::config::AttackConfig;
use table_tamper::engine::{AttackEngine, AttackKind};
use table_tamper::models::{Dataset, DatasetLoader};
use table_tamper::parsers::CsvLoader;
use table_tamper::reporting::{
    default_batch_dir, default_output_path, export_dataset, export_json, export_markdown, mirrored_output_path,
};

fn tricky() -> Dataset {
    Dataset::from_rows(
        vec!["name".to_string(), "note".to_string()],
        vec![
            vec!["Smith, J".to_string(), "said \"hi\"".to_string()],
            vec!["-5".to_string(), "two\nlines".to_string()],
            vec!["".to_string(), "plain".to_string()],
        ],
    )
    .unwrap()
}

#[test]
fn written_dataset_loads_back_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    export_dataset(&path, &tricky(), ',').unwrap();
    let loaded = CsvLoader::default().load(path.to_str().unwrap()).unwrap();

    assert_eq!(loaded, tricky());
}

#[test]
fn attacked_dataset_survives_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inserted.tsv");
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let attacked = insert_rows(tricky(), 1.0, &mut rng).unwrap();

    export_dataset(&path, &attacked, '\t').unwrap();
    let loaded = CsvLoader::new('\t').load(path.to_str().unwrap()).unwrap();

    assert_eq!(loaded.row_count(), 6);
    assert_eq!(loaded, attacked);
}

#[test]
fn single_column_empty_values_survive_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("single.csv");
    let dataset = Dataset::new(
        vec!["a".to_string()],
        vec![vec!["1".to_string(), "".to_string(), "".to_string()]],
    )
    .unwrap();

    export_dataset(&path, &dataset, ',').unwrap();
    let loaded = CsvLoader::default().load(path.to_str().unwrap()).unwrap();

    assert_eq!(loaded.row_count(), 3);
    assert_eq!(loaded, dataset);
}

#[test]
fn mirrored_output_paths_stay_distinct() {
    let out = Path::new("attacked");
    let root = Path::new("data");
    let first = mirrored_output_path(out, root, Path::new("data/2000/wages.csv"));
    let second = mirrored_output_path(out, root, Path::new("data/2001/wages.csv"));

    assert_eq!(first, Path::new("attacked/2000/wages.csv"));
    assert_eq!(second, Path::new("attacked/2001/wages.csv"));
    assert_eq!(
        mirrored_output_path(out, root, Path::new("data/top.csv")),
        Path::new("attacked/top.csv")
    );
}

#[test]
fn default_batch_dir_names_root_and_attack() {
    let dir = default_batch_dir(Path::new("."), Path::new("data/qcew"), AttackKind::Insert);
    let name = dir.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("qcew_insert_"));
}

#[test]
fn default_output_path_names_attack() {
    let path = default_output_path(Path::new("out"), Path::new("data/wages.csv"), AttackKind::ModifyFrequency);
    let name = path.file_name().unwrap().to_string_lossy().into_owned();

    assert!(path.starts_with("out"));
    assert!(name.starts_with("wages_modify-frequency_"));
    assert!(name.ends_with(".csv"));
}

#[test]
fn reporting_exports_create_files() {
    let config = AttackConfig {
        attack: AttackKind::Delete,
        deletion_rate: 0.5,
        ..Default::default()
    };
    let (_, summary) = AttackEngine::new(Some(4)).run(tricky(), &config, "tricky.csv").unwrap();
    let summaries = vec![summary];

    let md_filename = export_markdown(&summaries).expect("Markdown export should succeed");
    let json_filename = export_json(&summaries).expect("JSON export should succeed");

    assert!(md_filename.starts_with("tamper_report_"));
    assert!(md_filename.ends_with(".md"));
    let markdown = fs::read_to_string(&md_filename).unwrap();
    assert!(markdown.contains("| tricky.csv | delete | 0.5 | 3 -> 1 |"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_filename).unwrap()).unwrap();
    assert_eq!(json[0]["attack"], "delete");
    assert_eq!(json[0]["rows_after"], 1);

    // Clean up
    let _ = fs::remove_file(&md_filename);
    let _ = fs::remove_file(&json_filename);
}
