use clap::Parser;
use gridmatch::io::load_grid;
use gridmatch::{MatchConfig, Matcher, Metric, Position, Tolerance};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Gridmatch CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
enum Mode {
    #[default]
    Find,
    FindAll,
    Equals,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum MetricConfig {
    #[default]
    Euclidean,
    SquaredEuclidean,
}

impl From<MetricConfig> for Metric {
    fn from(value: MetricConfig) -> Self {
        match value {
            MetricConfig::Euclidean => Metric::Euclidean,
            MetricConfig::SquaredEuclidean => Metric::SquaredEuclidean,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    image_path: String,
    template_path: String,
    output_path: Option<String>,
    mode: Mode,
    tolerance: f64,
    metric: MetricConfig,
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct MatchRecord {
    x: usize,
    y: usize,
}

impl From<Position> for MatchRecord {
    fn from(value: Position) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    mode: Mode,
    found: bool,
    matches: Vec<MatchRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    equal: Option<bool>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env()
                    .add_directive("gridmatch=debug".parse()?)
                    .add_directive("gridmatch_cli=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.image_path.is_empty() || config.template_path.is_empty() {
        return Err("image_path and template_path must be set in the config".into());
    }
    if config.limit == Some(0) {
        return Err("limit must be at least 1".into());
    }

    let tolerance = Tolerance::new(config.tolerance)?;
    let image = load_grid(&config.image_path)?;
    let template = load_grid(&config.template_path)?;

    let _span = tracing::info_span!(
        "run",
        mode = ?config.mode,
        image = %config.image_path,
        template = %config.template_path,
    )
    .entered();
    tracing::info!(
        image_width = image.width(),
        image_height = image.height(),
        template_width = template.width(),
        template_height = template.height(),
        "loaded grids"
    );

    let output = match config.mode {
        Mode::Equals => {
            let equal = if tolerance == Tolerance::EXACT {
                image.equals_exact(&template)
            } else {
                image.equals_within_tolerance(&template, tolerance)?
            };
            Output {
                mode: config.mode,
                found: equal,
                matches: Vec::new(),
                equal: Some(equal),
            }
        }
        Mode::Find | Mode::FindAll => {
            let matcher = Matcher::new(template).with_config(MatchConfig {
                tolerance,
                metric: config.metric.into(),
            });
            let positions = match config.mode {
                Mode::FindAll => matcher.find_all(&image, config.limit),
                _ => matcher.find(&image).into_iter().collect(),
            };
            Output {
                mode: config.mode,
                found: !positions.is_empty(),
                matches: positions.into_iter().map(MatchRecord::from).collect(),
                equal: None,
            }
        }
    };

    tracing::info!(found = output.found, matches = output.matches.len(), "finished");

    let json = serde_json::to_string_pretty(&output)?;
    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
