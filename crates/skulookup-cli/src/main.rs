mod input;
mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use skulookup_core::{AppConfig, Identifier};
use skulookup_scraper::{run_batch_with, BatchSummary, HttpFetcher, Lookup, LookupOutcome, Pacing};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "skulookup")]
#[command(about = "Look up appliance product attributes by model number")]
struct Cli {
    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch and extract attributes for a single model number
    Lookup {
        /// Model number (case-insensitive), e.g. CJE23DP2WS1
        sku: String,
    },
    /// Recognize model numbers in text or a file and look each one up
    Batch {
        #[command(flatten)]
        source: InputArgs,
    },
    /// Print the model numbers recognized in text or a file without fetching
    Identify {
        #[command(flatten)]
        source: InputArgs,
    },
}

/// Where batch input comes from. Standard input is read when neither flag is set.
#[derive(Debug, clap::Args)]
#[group(multiple = false)]
struct InputArgs {
    /// Pasted text to scan for model numbers
    #[arg(long)]
    text: Option<String>,

    /// Text, CSV, or TSV file to scan for model numbers
    #[arg(long)]
    file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = skulookup_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Lookup { sku } => run_lookup(&config, &sku, cli.json).await,
        Commands::Batch { source } => run_batch_command(&config, &source, cli.json).await,
        Commands::Identify { source } => {
            let identifiers = input::read_identifiers(&source)?;
            render::print_identifiers(&identifiers, cli.json)
        }
    }
}

fn build_lookup(config: &AppConfig) -> anyhow::Result<Lookup<HttpFetcher>> {
    let fetcher = HttpFetcher::new(config).context("failed to build HTTP client")?;
    Ok(Lookup::new(fetcher, config))
}

async fn run_lookup(config: &AppConfig, sku: &str, json: bool) -> anyhow::Result<()> {
    let identifier = Identifier::parse(sku)?;
    let lookup = build_lookup(config)?;

    if !json {
        println!("fetching data for {identifier}");
    }
    let outcome = lookup.lookup(&identifier).await;
    if json {
        render::print_json(&[render::entry_json(&identifier, &outcome)])?;
    } else if !matches!(outcome, LookupOutcome::TransportFailure(_)) {
        render::print_outcome(&identifier, &outcome);
    }
    lookup_exit(&identifier, outcome, json)
}

/// Turns a transport failure into the process error. The failure text goes
/// into the error only when it was not already printed as JSON.
fn lookup_exit(identifier: &Identifier, outcome: LookupOutcome, json: bool) -> anyhow::Result<()> {
    let LookupOutcome::TransportFailure(err) = outcome else {
        return Ok(());
    };
    if json {
        anyhow::bail!("lookup for {identifier} failed");
    }
    Err(anyhow::Error::new(err).context(format!("lookup for {identifier} failed")))
}

async fn run_batch_command(config: &AppConfig, source: &InputArgs, json: bool) -> anyhow::Result<()> {
    let identifiers = input::read_identifiers(source)?;
    if identifiers.is_empty() {
        tracing::warn!("no model numbers recognized in batch input");
        if json {
            render::print_json(&[])?;
        } else {
            println!("no model numbers recognized; nothing to look up");
        }
        return Ok(());
    }

    let lookup = build_lookup(config)?;
    let pacing = Pacing::from_config(config);
    if !json {
        println!("looking up {} model numbers", identifiers.len());
    }

    let entries = run_batch_with(&lookup, &identifiers, pacing, |entry| {
        if !json {
            render::print_outcome(&entry.identifier, &entry.outcome);
        }
    })
    .await;

    if json {
        let values: Vec<_> = entries
            .iter()
            .map(|e| render::entry_json(&e.identifier, &e.outcome))
            .collect();
        render::print_json(&values)?;
    } else {
        let summary = BatchSummary::from_entries(&entries);
        println!(
            "{} found, {} with nothing found, {} failed",
            summary.found, summary.nothing_found, summary.failed
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests;
