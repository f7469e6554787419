mod commands;
mod render;

use std::num::NonZeroUsize;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::render::{renderer_for, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "brandpeek")]
#[command(about = "Fetch, rank, and display brands from the BrandPeek data source")]
struct Cli {
    /// Override the data source base URL (defaults to `BRANDPEEK_BASE_URL`)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the top-ranked brands
    Top {
        /// Number of brands to show (defaults to `BRANDPEEK_TOP_LIMIT`)
        #[arg(long)]
        limit: Option<NonZeroUsize>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the detail view of a brand in the ranked list
    Show {
        /// Brand identifier (the key in the data source)
        id: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Refresh the ranked list on an interval
    Watch {
        /// Seconds between refreshes
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
        interval_secs: u64,

        /// Number of brands to show (defaults to `BRANDPEEK_TOP_LIMIT`)
        #[arg(long)]
        limit: Option<NonZeroUsize>,

        /// Stop after this many completed refreshes
        #[arg(long)]
        cycles: Option<u64>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = brandpeek_core::load_app_config()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, base_url = %config.base_url, "configuration loaded");

    let client = brandpeek_client::BrandClient::from_config(&config)?;
    let resolve_limit =
        |limit: Option<NonZeroUsize>| limit.map_or(config.top_limit, NonZeroUsize::get);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Top { limit, format } => {
            let renderer = renderer_for(format);
            commands::run_top(&client, resolve_limit(limit), renderer.as_ref(), &mut out).await
        }
        Commands::Show { id, format } => {
            let renderer = renderer_for(format);
            commands::run_show(&client, &id, config.top_limit, renderer.as_ref(), &mut out)
                .await
        }
        Commands::Watch {
            interval_secs,
            limit,
            cycles,
            format,
        } => {
            let renderer = renderer_for(format);
            commands::run_watch(
                &client,
                Duration::from_secs(interval_secs),
                resolve_limit(limit),
                cycles,
                renderer.as_ref(),
                &mut out,
            )
            .await
        }
    }
}
