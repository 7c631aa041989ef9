//! procon-signal: score pros and cons from the command line
//!
//! Reads a decision document (JSON or YAML), runs the weighting engine and
//! prints the analysis as JSON on stdout. Logs go to stderr.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use procon_signal::adapters::{DecisionFormat, FileDecisionSource};
use procon_signal::application::AnalyzeDecisionHandler;
use procon_signal::config::{AppConfig, LoggingConfig};
use procon_signal::domain::foundation::Side;
use procon_signal::domain::weighting::{summarize_section, weigh_items, SectionSummary, WeightedItem};
use procon_signal::ports::DecisionSource;

#[derive(Parser)]
#[command(name = "procon-signal")]
#[command(about = "Weigh pros and cons and derive a decision signal")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a whole decision document ("-" reads stdin)
    Analyze {
        /// Path to a .json, .yaml or .yml decision document
        path: PathBuf,

        /// Format of stdin input
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Weigh loose statements for one side
    Score {
        /// Side the statements belong to (pros or cons)
        #[arg(long)]
        side: Side,

        /// Free-text priorities to bias scoring
        #[arg(long, env = "PROCON_SIGNAL_CONTEXT", default_value = "")]
        context: String,

        /// Statements to weigh, in order
        #[arg(required = true)]
        statements: Vec<String>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreOutput {
    side: Side,
    items: Vec<WeightedItem>,
    summary: SectionSummary,
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .context("invalid log filter")?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", output);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    init_tracing(&config.logging)?;

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { path, format } => {
            let command = if path.as_os_str() == "-" {
                let format: DecisionFormat = format.parse()?;
                let mut contents = String::new();
                std::io::stdin()
                    .read_to_string(&mut contents)
                    .context("failed to read stdin")?;
                format.parse(&contents)?
            } else {
                FileDecisionSource::new(&path)
                    .load()
                    .with_context(|| format!("failed to load {}", path.display()))?
            };

            let handler = AnalyzeDecisionHandler::new(config.display.clone());
            let result = handler.handle(command)?;
            info!(options = result.options.len(), "Decision analyzed");
            print_json(&result, cli.pretty)?;
        }
        Command::Score {
            side,
            context,
            statements,
        } => {
            let items = weigh_items(side, &statements, &context);
            let weights: Vec<_> = items.iter().map(|item| item.weight).collect();
            let summary = summarize_section(side, &weights);
            print_json(&ScoreOutput { side, items, summary }, cli.pretty)?;
        }
    }

    Ok(())
}
