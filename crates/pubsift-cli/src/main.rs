//! Command line interface for listing PubMed papers with non-academic authors.
//!
//! The `get-papers-list` binary searches PubMed with the given query, keeps the authors whose
//! affiliation is not a university, college, or school, and prints the result as CSV.
//!
//! # Usage
//!
//! ```bash
//! # Print CSV to standard output
//! get-papers-list "cancer immunotherapy"
//!
//! # Save to a file and log the fetched PubMed IDs
//! get-papers-list "crispr[Title] AND 2023[PDAT]" --debug --file papers.csv
//!
//! # Use a custom configuration and a larger result cap
//! get-papers-list "malaria vaccine" --config ./pubsift.toml --max-results 50
//! ```
//!
//! Logging goes to standard error and is controlled by `-v` (repeatable), `--debug`, or
//! `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  io::{self, IsTerminal},
  path::PathBuf,
  process::ExitCode,
};

use clap::{builder::ArgAction, Parser};
use console::style;
use pubsift::{config::Config, error::PubsiftError, table, Fetcher};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod error;
pub mod interaction;

use crate::{error::*, interaction::*};

/// Command line arguments for `get-papers-list`.
#[derive(Parser, Debug)]
#[command(
  name = "get-papers-list",
  author,
  version,
  about = "Fetch PubMed papers with non-academic authors and output CSV"
)]
pub struct Cli {
  /// PubMed search query, supports the full PubMed query syntax
  query: String,

  /// Print debug information, including the fetched PubMed IDs
  #[arg(short, long)]
  debug: bool,

  /// Write the CSV to this file instead of standard output
  #[arg(short, long)]
  file: Option<PathBuf>,

  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(short, long, action = ArgAction::Count, help = "Increase logging verbosity")]
  verbose: u8,

  /// Path to a TOML configuration file. If not specified, uses the platform-specific config
  /// directory when a file exists there and built-in defaults otherwise.
  #[arg(long)]
  config: Option<PathBuf>,

  /// Maximum number of papers to fetch, overriding the configuration
  #[arg(long)]
  max_results: Option<usize>,
}

/// Configures the logging system based on the verbosity level.
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug (also selected by `--debug`)
/// - 4+: trace
fn setup_logging(verbosity: u8, debug: bool) {
  let verbosity = if debug { verbosity.max(3) } else { verbosity };
  let level = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(format!("error,pubsift={level},get_papers_list={level}")));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_ansi(io::stderr().is_terminal())
    .with_target(true)
    .init();
}

/// Loads configuration and applies command line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
  let mut config = Config::load(cli.config.as_deref())?;
  if let Some(max_results) = cli.max_results {
    config = config.with_max_results(max_results);
  }
  trace!("Using configuration: {config:?}");
  Ok(config)
}

/// Runs the search and writes the table.
async fn run(cli: &Cli, interaction: &impl UserInteraction) -> Result<()> {
  let fetcher = Fetcher::new(load_config(cli)?)?;
  let articles = fetcher.get_papers(&cli.query).await?;
  debug!("Writing {} articles", articles.len());

  match &cli.file {
    Some(path) => {
      if articles.is_empty() {
        let message = format!("No papers matched {:?}", cli.query);
        interaction.reply(ResponseContent::Info(&message))?;
      }
      table::write_csv_file(&articles, path)?;
      interaction
        .reply(ResponseContent::Success(&format!("Results saved to {}", path.display())))?;
    },
    None => table::write_csv(&articles, io::stdout().lock())?,
  }
  Ok(())
}

/// Entry point for the `get-papers-list` binary.
///
/// Any failure is reported on standard error and turns into a non-zero exit status.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
  let cli = Cli::parse();
  setup_logging(cli.verbose, cli.debug);

  let interaction = Console;
  match run(&cli, &interaction).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(error) => {
      if interaction.reply(ResponseContent::Error(&error)).is_err() {
        eprintln!("{} {error}", style(ERROR_PREFIX).red());
      }
      ExitCode::FAILURE
    },
  }
}
