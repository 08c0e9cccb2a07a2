//! feedview CLI
//!
//! Runs a route loader the way the rendering layer would and prints the view
//! data as JSON on stdout:
//! - `feedview layout` for the feed list
//! - `feedview page <ID>` for one feed's items

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use feedview_loaders::{FeedsClient, LayoutLoader, Load, LoaderConfig, PageLoader, RouteParams};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "feedview", version, about = "Load feed reader route data")]
struct Cli {
    /// Origin of the feeds service (overrides FEEDS_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the layout data (the feed list)
    Layout,
    /// Load the detail page data for one feed
    Page {
        /// Feed identifier, passed through as the `id` route parameter
        id: String,
    },
}

/// `--base-url` wins over the environment
fn config_for(base_url: Option<String>) -> LoaderConfig {
    match base_url {
        Some(base_url) => LoaderConfig::new(base_url),
        None => LoaderConfig::from_env(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr, stdout carries the JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,feedview_loaders=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = config_for(cli.base_url);
    tracing::info!(base_url = %config.base_url, "Starting feedview");

    let client = FeedsClient::new(&config).context("Failed to build HTTP client")?;

    let output = match cli.command {
        Command::Layout => {
            tracing::debug!(prerender = LayoutLoader::PRERENDER, "Loading layout");
            let data = LayoutLoader::new(client)
                .load(&RouteParams::new())
                .await
                .context("Failed to load feed list")?;
            serde_json::to_string_pretty(&data)?
        }
        Command::Page { id } => {
            let params = RouteParams::new().with("id", id.as_str());
            let data = PageLoader::new(client)
                .load(&params)
                .await
                .context("Failed to start loading feed items")?;
            let resolved = data
                .resolve()
                .await
                .with_context(|| format!("Failed to load items for feed {}", id))?;
            serde_json::to_string_pretty(&resolved)?
        }
    };

    println!("{}", output);

    Ok(())
}
