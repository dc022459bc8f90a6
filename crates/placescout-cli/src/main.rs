mod explore;

use clap::{Parser, Subcommand};
use placescout_core::RankingPolicy;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "placescout")]
#[command(about = "Search nearby business listings and page through the results")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search listings and print ranked pages
    Search {
        /// Primary keyword, e.g. "salon" (required, non-empty)
        #[arg(long, short = 'k')]
        keyword: String,
        /// Optional refinement appended after the keyword
        #[arg(long, short = 'r')]
        refine: Option<String>,
        #[arg(long, default_value = "")]
        city: String,
        #[arg(long, default_value = "")]
        country: String,
        /// Ranking policy; defaults to `PLACESCOUT_DEFAULT_RANKING`
        #[arg(long)]
        sort: Option<RankingPolicy>,
        /// Maximum number of pages to walk
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
        /// Print each page as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Suggest countries matching the input
    Countries { input: String },
    /// Print the image URL for a photo reference
    PhotoUrl {
        photo_ref: String,
        /// Defaults to `PLACESCOUT_PHOTO_MAX_WIDTH`
        #[arg(long)]
        width: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = placescout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search {
            keyword,
            refine,
            city,
            country,
            sort,
            pages,
            json,
        } => {
            let request = explore::SearchRequest {
                keyword: &keyword,
                refine: refine.as_deref(),
                city: &city,
                country: &country,
                ranking: sort.unwrap_or(config.default_ranking),
                pages,
                json,
            };
            explore::run_search(&config, &request).await?;
        }
        Commands::Countries { input } => explore::run_countries(&config, &input).await?,
        Commands::PhotoUrl { photo_ref, width } => {
            explore::run_photo_url(&config, &photo_ref, width)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
