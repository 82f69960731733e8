use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadplan_lib::{evaluate_requests, parse_input, render_text, RequestSummary};

#[derive(Parser, Debug)]
#[command(version, about = "Multi-criterion road trip planner")]
struct Cli {
    /// Input file with [CITIES], [ROADS] and [REQUESTS] sections.
    input: PathBuf,

    /// Write the rendered result to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read input from {}", cli.input.display()))?;
    let (network, requests) = parse_input(&text).context("failed to parse routing input")?;

    let reports = evaluate_requests(&network, &requests);
    let summaries: Vec<RequestSummary> = reports
        .iter()
        .map(|report| RequestSummary::from_report(&network, report))
        .collect();

    let rendered = match cli.format {
        OutputFormat::Text => render_text(&summaries),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&summaries)
                .context("failed to serialise request summaries")?;
            json.push('\n');
            json
        }
    };

    match &cli.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("failed to write output to {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
