use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use slidematch::{
    call_tool, decide, list_tools, load_rgba_image, Decision, MatchConfig, Matcher, SearchMode,
    DEFAULT_THRESHOLD,
};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Slide puzzle matcher (JSON config driven)")]
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
    /// Print the tool catalogue as JSON and exit.
    #[arg(long)]
    list_tools: bool,
    /// Run a tool call read from FILE (`-` for stdin) and print the response.
    #[arg(long, value_name = "FILE")]
    call: Option<PathBuf>,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ModeConfig {
    #[default]
    Exhaustive,
    CoarseToFine,
}

impl From<ModeConfig> for SearchMode {
    fn from(value: ModeConfig) -> Self {
        match value {
            ModeConfig::Exhaustive => SearchMode::Exhaustive,
            ModeConfig::CoarseToFine => SearchMode::CoarseToFine,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct MatchConfigJson {
    step: usize,
    tolerance: u8,
    alpha_cutoff: u8,
    mode: ModeConfig,
    parallel: bool,
}

impl Default for MatchConfigJson {
    fn default() -> Self {
        let cfg = MatchConfig::default();
        Self {
            step: cfg.step,
            tolerance: cfg.tolerance,
            alpha_cutoff: cfg.alpha_cutoff,
            mode: ModeConfig::Exhaustive,
            parallel: cfg.parallel,
        }
    }
}

impl From<MatchConfigJson> for MatchConfig {
    fn from(value: MatchConfigJson) -> Self {
        Self {
            step: value.step,
            tolerance: value.tolerance,
            alpha_cutoff: value.alpha_cutoff,
            mode: value.mode.into(),
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    background_path: String,
    piece_path: String,
    output_path: Option<String>,
    threshold: f32,
    #[serde(rename = "match")]
    match_cfg: MatchConfigJson,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background_path: String::new(),
            piece_path: String::new(),
            output_path: None,
            threshold: DEFAULT_THRESHOLD,
            match_cfg: MatchConfigJson::default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    matched: bool,
    x: usize,
    y: usize,
    confidence: f32,
    slide_distance: Option<usize>,
}

impl From<Decision> for Output {
    fn from(value: Decision) -> Self {
        Self {
            matched: value.matched,
            x: value.result.x,
            y: value.result.y,
            confidence: value.result.confidence,
            slide_distance: value.slide_distance(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    name: String,
    #[serde(default)]
    arguments: Value,
}

fn read_input(path: &Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    fs::read_to_string(path)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("slidematch=info".parse()?),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
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
    if cli.list_tools {
        println!("{}", serde_json::to_string_pretty(&list_tools())?);
        return Ok(());
    }
    if let Some(path) = &cli.call {
        let call: ToolCall = serde_json::from_str(&read_input(path)?)?;
        let response = call_tool(&call.name, &call.arguments);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.background_path.is_empty() || config.piece_path.is_empty() {
        return Err("background_path and piece_path must be set in the config".into());
    }
    if !(0.0..=1.0).contains(&config.threshold) {
        return Err("threshold must be within [0, 1]".into());
    }

    let background = load_rgba_image(&config.background_path)?;
    let piece = load_rgba_image(&config.piece_path)?;
    let matcher = Matcher::new(piece).with_config(config.match_cfg.into());
    let best = matcher.match_image(background.view())?;
    let output = Output::from(decide(best, config.threshold));
    info!(
        matched = output.matched,
        x = output.x,
        confidence = output.confidence,
        "match complete"
    );
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
