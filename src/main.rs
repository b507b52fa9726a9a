// Main CLI entry point for table-tamper
// Uses clap for argument parsing

use clap::{Arg, ArgAction, Command};
use log::{error, warn};
use std::path::{Path, PathBuf};
use table_tamper::config::AttackConfig;
use table_tamper::engine::{AttackEngine, AttackKind, AttackSummary};
use table_tamper::error::{AttackError, Result};
use table_tamper::models::DatasetLoader;
use table_tamper::parsers::{discover_inputs, CsvLoader};
use table_tamper::reporting::{
    default_batch_dir, default_output_path, export_dataset, export_json, export_markdown, mirrored_output_path,
};

fn cli() -> Command {
    Command::new("table-tamper")
        .version(clap::crate_version!())
        .about("Simulates tampering attacks on tabular datasets to test watermark robustness")
        .after_help("EXAMPLES:\n  table-tamper -i wages.csv -k delete --rate 0.2 --seed 7\n  table-tamper -i data/ -o attacked/ -k modify-frequency --rate 0.8 --markdown-report\n  table-tamper -i geo.csv -k delete-attributes --num 2 -o geo_attacked.csv")
        .arg(Arg::new("input")
            .short('i')
            .long("input")
            .required(true)
            .num_args(1)
            .help("Delimited file, or directory of .csv files, to attack"))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .num_args(1)
            .help("Output file (single input) or directory (directory input)"))
        .arg(Arg::new("attack")
            .short('k')
            .long("attack")
            .num_args(1)
            .value_parser(["delete", "insert", "modify", "modify-frequency", "delete-attributes"])
            .help("Attack model to apply (default: modify)"))
        .arg(Arg::new("rate")
            .short('r')
            .long("rate")
            .num_args(1)
            .value_parser(clap::value_parser!(f64))
            .help("Rate for the selected attack, in [0, 1]"))
        .arg(Arg::new("num")
            .short('n')
            .long("num")
            .num_args(1)
            .value_parser(clap::value_parser!(usize))
            .help("Number of attributes removed by delete-attributes"))
        .arg(Arg::new("seed")
            .short('s')
            .long("seed")
            .num_args(1)
            .value_parser(clap::value_parser!(u64))
            .help("Seed for reproducible runs"))
        .arg(Arg::new("delimiter")
            .short('d')
            .long("delimiter")
            .num_args(1)
            .value_parser(clap::value_parser!(char))
            .help("Field delimiter (default: ',')"))
        .arg(Arg::new("config")
            .short('c')
            .long("config")
            .num_args(1)
            .help("JSON configuration file; flags override its values"))
        .arg(Arg::new("markdown_report")
            .long("markdown-report")
            .action(ArgAction::SetTrue)
            .help("Write a Markdown run report"))
        .arg(Arg::new("json_report")
            .long("json-report")
            .action(ArgAction::SetTrue)
            .help("Write a JSON run report"))
}

fn build_config(matches: &clap::ArgMatches) -> Result<AttackConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => AttackConfig::from_json_file(path)?,
        None => AttackConfig::default(),
    };
    if let Some(attack) = matches.get_one::<String>("attack") {
        config.attack = attack.parse::<AttackKind>()?;
    }
    if let Some(&rate) = matches.get_one::<f64>("rate") {
        if config.attack == AttackKind::DeleteAttributes {
            return Err(AttackError::InvalidParameter(
                "delete-attributes takes --num, not --rate".to_string(),
            ));
        }
        config.set_rate(rate);
    }
    if let Some(&num) = matches.get_one::<usize>("num") {
        config.attributes_to_delete = num;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    if let Some(&delimiter) = matches.get_one::<char>("delimiter") {
        config.delimiter = delimiter;
    }
    config.validate()?;
    Ok(config)
}

/// Where the attacked copy of `input` goes.
///
/// In batch mode `batch_dir` is set and outputs mirror the layout under `root`.
fn output_path(output: Option<&String>, batch_dir: Option<&Path>, root: &Path, input: &Path, attack: AttackKind) -> PathBuf {
    match (batch_dir, output) {
        (Some(dir), _) => mirrored_output_path(dir, root, input),
        (None, Some(out)) => PathBuf::from(out),
        (None, None) => default_output_path(Path::new("."), input, attack),
    }
}

fn attack_file(
    engine: &mut AttackEngine,
    loader: &CsvLoader,
    config: &AttackConfig,
    input: &Path,
    output: &Path,
) -> Result<AttackSummary> {
    let label = input.display().to_string();
    let dataset = loader.load(&label)?;
    println!("Loaded {}: {}", label, dataset);

    // Nothing is written unless the attack completed
    let (attacked, summary) = engine.run(dataset, config, &label)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    export_dataset(output, &attacked, config.delimiter)?;
    println!("Wrote {}: {}", output.display(), attacked);
    Ok(summary)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();

    let config = build_config(&matches).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(2);
    });

    let input = matches.get_one::<String>("input").expect("input is required");
    let output = matches.get_one::<String>("output");
    let root = Path::new(input);
    let batch = root.is_dir();
    let inputs = discover_inputs(input);
    if inputs.is_empty() {
        eprintln!("No .csv files found under {}", input);
        std::process::exit(2);
    }
    // Resolved once so every file of a batch lands in the same directory
    let batch_dir: Option<PathBuf> = if batch {
        Some(match output {
            Some(dir) => PathBuf::from(dir),
            None => default_batch_dir(Path::new("."), root, config.attack),
        })
    } else {
        None
    };
    println!("Running {} attack on {} file(s).", config.attack, inputs.len());

    let loader = CsvLoader::new(config.delimiter);
    let mut engine = AttackEngine::new(config.seed);
    let mut summaries = Vec::new();
    let mut failures = 0;

    for path in &inputs {
        let target = output_path(output, batch_dir.as_deref(), root, path, config.attack);
        match attack_file(&mut engine, &loader, &config, path, &target) {
            Ok(summary) => summaries.push(summary),
            Err(e) if batch => {
                warn!("Skipping {}: {}", path.display(), e);
                failures += 1;
            }
            Err(e) => {
                error!("Attack on {} failed: {}", path.display(), e);
                eprintln!("Attack failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    if matches.get_flag("markdown_report") {
        match export_markdown(&summaries) {
            Ok(name) => println!("Markdown report: {}", name),
            Err(e) => eprintln!("Failed to write Markdown report: {}", e),
        }
    }
    if matches.get_flag("json_report") {
        match export_json(&summaries) {
            Ok(name) => println!("JSON report: {}", name),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }

    if failures > 0 {
        eprintln!("{} of {} file(s) failed.", failures, inputs.len());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> clap::ArgMatches {
        let mut argv = vec!["table-tamper", "-i", "data.csv"];
        argv.extend_from_slice(args);
        cli().get_matches_from(argv)
    }

    #[test]
    fn rate_overrides_selected_attack() {
        let config = build_config(&parse(&["-k", "delete", "--rate", "0.5", "--seed", "9"])).unwrap();
        assert_eq!(config.attack, AttackKind::Delete);
        assert_eq!(config.deletion_rate, 0.5);
        assert_eq!(config.modification_rate, 0.8);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn rate_rejected_for_vertical_attack() {
        assert!(build_config(&parse(&["-k", "delete-attributes", "--rate", "0.5"])).is_err());
    }

    #[test]
    fn out_of_range_rate_rejected() {
        assert!(build_config(&parse(&["-k", "insert", "--rate", "1.5"])).is_err());
    }

    #[test]
    fn batch_outputs_mirror_input_tree() {
        let out = "attacked".to_string();
        let dir = Path::new("attacked");
        let root = Path::new("data");
        let first = output_path(Some(&out), Some(dir), root, Path::new("data/2000/wages.csv"), AttackKind::Modify);
        let second = output_path(Some(&out), Some(dir), root, Path::new("data/2001/wages.csv"), AttackKind::Modify);
        assert_eq!(first, Path::new("attacked").join("2000").join("wages.csv"));
        assert_ne!(first, second);
    }

    #[test]
    fn single_output_uses_flag() {
        let out = "result.csv".to_string();
        let path = output_path(Some(&out), None, Path::new("wages.csv"), Path::new("wages.csv"), AttackKind::Delete);
        assert_eq!(path, Path::new("result.csv"));
    }
}
