//! Chart-Harvest main entry point
//!
//! This is the command-line interface for the Chart-Harvest catalog scraper.

use chart_harvest::config::{load_config, validate, Config};
use chart_harvest::scrape::Scraper;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Chart-Harvest: a single-page catalog scraper
///
/// Fetches one listing page, extracts title, year, rating and genres for
/// every entry, prints a summary table and writes all records to CSV.
#[derive(Parser, Debug)]
#[command(name = "chart-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A single-page catalog scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in profile if omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Listing page to fetch
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Client identity sent as the User-Agent header
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// CSV file to write
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Number of records shown in the console table
    #[arg(short, long, value_name = "N")]
    limit: Option<usize>,

    /// Pause before the request, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Parse a saved HTML page instead of fetching
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Show the effective configuration without scraping
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match load_effective_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    if cli.dry_run {
        handle_dry_run(&config, cli.input.as_deref());
        return Ok(());
    }

    let scraper = Scraper::new(config)?;

    println!("Starting IMDb movie scraper...");
    println!("Please wait while we scrape movie data...");

    let summary = match &cli.input {
        Some(path) => {
            tracing::info!("Reading saved page from: {}", path.display());
            let page = std::fs::read(path)?;
            scraper.run_offline(&page)
        }
        None => scraper.run().await,
    };

    tracing::info!(
        "Run finished: {} records, output {}",
        summary.records.len(),
        summary
            .output_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "not written".to_string())
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("chart_harvest=info,warn"),
            1 => EnvFilter::new("chart_harvest=debug,info"),
            2 => EnvFilter::new("chart_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides
fn load_effective_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let loaded = load_config(path)?;
            tracing::info!(
                "Configuration loaded from {} (hash: {})",
                loaded.path.display(),
                loaded.hash
            );
            loaded.config
        }
        None => Config::default(),
    };

    if let Some(url) = &cli.url {
        config.fetch.url = url.clone();
    }
    if let Some(user_agent) = &cli.user_agent {
        config.fetch.user_agent = user_agent.clone();
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.fetch.pre_run_delay_ms = delay_ms;
    }
    if let Some(output) = &cli.output {
        config.output.csv_path = output.display().to_string();
    }
    if let Some(limit) = cli.limit {
        config.output.display_limit = limit;
    }

    validate(&config)?;
    Ok(config)
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config, input: Option<&std::path::Path>) {
    println!("=== Chart-Harvest Dry Run ===\n");

    println!("Fetch:");
    match input {
        Some(path) => println!("  Source: {} (saved page)", path.display()),
        None => println!("  URL: {}", config.fetch.url),
    }
    println!("  User agent: {}", config.fetch.user_agent);
    println!("  Pre-run delay: {}ms", config.fetch.pre_run_delay_ms);

    println!("\nSelectors:");
    println!("  Entry: {}", config.selectors.entry);
    println!(
        "  Title: {} (separator {:?})",
        config.selectors.title, config.selectors.title_separator
    );
    println!(
        "  Year: [{}] then {}",
        config.selectors.year_candidates.join(", "),
        config.selectors.year_fallback
    );
    println!("  Rating: {}", config.selectors.rating);
    println!("  Categories: {}", config.selectors.categories);

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);
    println!("  Display limit: {}", config.output.display_limit);

    println!("\n✓ Configuration is valid");
}
