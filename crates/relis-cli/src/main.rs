//! relis-stats: descriptive statistics report for a RELIS question/answer corpus.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use relis_analytics::{analyze, render, Corpus};
use relis_core::AnalyticsConfig;

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Report {
        config_file: Option<PathBuf>,
        corpus_path: Option<PathBuf>,
    },
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut config_file = None;
    let mut corpus_path = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" | "help" => return Ok(Command::Help),
            "--config" | "-c" => {
                let path = iter
                    .next()
                    .ok_or_else(|| "--config requires a file path".to_string())?;
                config_file = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => {
                return Err(format!(
                    "Unknown option: {}. Use 'relis-stats help' for usage.",
                    flag
                ));
            }
            path => {
                if corpus_path.is_some() {
                    return Err(format!("Unexpected extra argument: {}", path));
                }
                corpus_path = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Command::Report {
        config_file,
        corpus_path,
    })
}

fn print_usage() {
    println!("relis-stats: corpus metadata report for a JSONL question/answer corpus");
    println!();
    println!("Usage: relis-stats [--config <file.json>] [corpus.jsonl]");
    println!();
    println!("Options:");
    println!("  -c, --config <file>      JSON file overriding the analytics settings");
    println!("  -h, --help               Show this help message");
    println!();
    println!("Environment:");
    println!("  RELIS_CORPUS_PATH        Corpus file (default: data/RELIS/q&a.jsonl)");
    println!("  RELIS_SHORTEST_K         Number of shortest answers to dump (default: 10)");
    println!("  RELIS_NEAR_MEAN_INDEX    Rank of the near-mean exemplar (default: 8000)");
    println!("  RELIS_INSPECT_LANGUAGE   Language to dump verbatim, empty to skip (default: ca)");
    println!("  RUST_LOG                 Log filter, logs go to stderr (default: info)");
}

/// Defaults, then the config file, then the environment, then the
/// positional corpus path.
fn resolve_config(
    config_file: Option<PathBuf>,
    corpus_path: Option<PathBuf>,
) -> anyhow::Result<AnalyticsConfig> {
    let mut config = match config_file {
        Some(path) => AnalyticsConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalyticsConfig::default(),
    };
    config.apply_env();
    if let Some(path) = corpus_path {
        config.corpus_path = path;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    // Logs on stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let (config_file, corpus_path) = match parse_args(&args) {
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Ok(Command::Report {
            config_file,
            corpus_path,
        }) => (config_file, corpus_path),
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    let config = resolve_config(config_file, corpus_path)?;
    info!("Corpus: {}", config.corpus_path.display());

    let corpus = Corpus::load(&config.corpus_path)
        .with_context(|| format!("Failed to load corpus {}", config.corpus_path.display()))?;
    let report = analyze(&corpus, &config)?;
    print!("{}", render(&report));

    Ok(())
}
