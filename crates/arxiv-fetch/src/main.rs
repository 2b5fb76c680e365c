use std::{env, path::PathBuf};

use arxiv_feed::{
  client::{ArxivClient, ARXIV_API_URL},
  paper::Paper,
  query::SearchQuery,
  snapshot::Snapshot,
};
use clap::{builder::ArgAction, Parser};
use console::{style, Emoji};
use errors::ArxivFetchErrors;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod errors;

static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✨ ", "");

/// Query used when neither the command line nor the environment supplies one.
const DEFAULT_QUERY: &str = "all:machine learning";

/// Result count used when neither the command line nor the environment
/// supplies one.
const DEFAULT_MAX_RESULTS: u32 = 20;

#[derive(Parser)]
#[command(version, about = "Fetch recent arXiv papers and write them to a JSON snapshot")]
struct Cli {
  /// arXiv query string, e.g. "cat:cs.AI OR all:machine learning"
  #[arg(long, short)]
  query: Option<String>,

  /// Maximum number of results to request
  #[arg(long, short)]
  max: Option<u32>,

  /// Path of the snapshot file to write
  #[arg(long, short, default_value = "docs/arxiv_data.json")]
  out: PathBuf,

  /// arXiv API endpoint to query (mirrors, testing)
  #[arg(long)]
  api_url: Option<String>,

  /// Verbose mode (-v, -vv, -vvv)
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase logging verbosity"
    )]
  verbose: u8,
}

/// Invocation parameters after layering the command line over the environment
/// over the built-in defaults.
#[derive(Debug)]
struct FetchConfig {
  /// Raw arXiv query expression.
  query:       String,
  /// Number of results to request.
  max_results: u32,
  /// Path of the snapshot file to write.
  out:         PathBuf,
  /// Endpoint the query runs against.
  api_url:     String,
}

/// Resolves each setting in a fixed precedence order: explicit argument,
/// then environment variable, then built-in default.
///
/// `ARXIV_QUERY` backs the query, `MAX_RESULTS` the result count, and
/// `ARXIV_API_URL` the endpoint. An empty query at either layer falls
/// through to the next one, and a `MAX_RESULTS` value that doesn't parse as
/// a non-negative integer fails the run before anything is fetched.
fn resolve(cli: Cli) -> Result<FetchConfig, ArxivFetchErrors> {
  let query = cli
    .query
    .filter(|query| !query.is_empty())
    .or_else(|| env::var("ARXIV_QUERY").ok().filter(|query| !query.is_empty()))
    .unwrap_or_else(|| DEFAULT_QUERY.to_string());

  let max_results = match cli.max {
    Some(max) => max,
    None => match env::var("MAX_RESULTS") {
      Ok(raw) => raw.parse()?,
      Err(_) => DEFAULT_MAX_RESULTS,
    },
  };

  let api_url = cli
    .api_url
    .or_else(|| env::var("ARXIV_API_URL").ok())
    .unwrap_or_else(|| ARXIV_API_URL.to_string());

  Ok(FetchConfig { query, max_results, out: cli.out, api_url })
}

/// Setup logging with the specified verbosity level
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

/// Runs the single fetch-and-normalize pass against the configured endpoint.
async fn fetch_papers(config: &FetchConfig) -> Result<Vec<Paper>, arxiv_feed::errors::FeedError> {
  let client = ArxivClient::with_base_url(&config.api_url)?;
  let query = SearchQuery::new(&config.query, config.max_results);
  client.fetch(&query).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ArxivFetchErrors> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let config = resolve(cli)?;

  debug!("Resolved configuration: {config:?}");

  println!(
    "{} Fetching arXiv for query: {} (max={})",
    style(LOOKING_GLASS).cyan(),
    style(&config.query).yellow(),
    style(config.max_results).yellow()
  );

  match fetch_papers(&config).await {
    Ok(papers) => {
      let snapshot = Snapshot::new(&config.query, papers);
      snapshot.publish(&config.out)?;

      println!(
        "{} Wrote {} with {} papers",
        style(SUCCESS).green(),
        style(config.out.display()).yellow(),
        style(snapshot.papers.len()).yellow()
      );
    },
    Err(e) => {
      println!("{} Error fetching arXiv: {}", style(WARNING).yellow(), style(&e).red());

      let fallback = Snapshot::fallback(&config.query, e.to_string());
      fallback.write(&config.out)?;

      println!("{} Wrote fallback {}", style(SAVE).green(), style(config.out.display()).yellow());
    },
  }

  Ok(())
}
