mod run;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "smartsurf")]
#[command(about = "Automated people-search browsing and connection requests")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scan the configured search page, then work through the discovered
    /// profiles
    Run {
        /// Skip the inline connect flow on the search page and only harvest
        /// profile links
        #[arg(long)]
        no_inline: bool,

        /// Override the configured search URL for this run
        #[arg(long)]
        search_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let mut config = smartsurf_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            no_inline,
            search_url,
        } => {
            if let Some(url) = search_url {
                config.search_url = url;
            }
            let totals = run::run(&config, !no_inline).await?;
            println!(
                "done: {} profiles discovered, {} visited, {} connection requests sent",
                totals.discovered, totals.visited, totals.requests_sent
            );
        }
    }

    Ok(())
}
