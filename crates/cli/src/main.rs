mod render;
mod repl;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use api_client::{ClientConfig, MovieApi, MovieApiClient, DEFAULT_API_BASE, DEFAULT_PAGE_LIMIT};
use clap::{Parser, Subcommand};
use colored::Colorize;
use model::{RatingEntry, MIN_SELECTION};
use session::DiscoverySession;
use state::Selection;

/// ReelPicks - browse movies, rate favourites, get recommendations
#[derive(Parser)]
#[command(name = "reel-picks")]
#[command(about = "Movie discovery front-end for a rating-based recommendation service", long_about = None)]
struct Cli {
    /// Base URL of the recommendation backend
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Number of movies fetched per catalog page
    #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
    page_size: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog interactively, select and rate movies
    Browse,

    /// Print one page of the catalog
    Movies {
        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Get recommendations straight from a list of ratings
    Recommend {
        /// A rating as ID=STARS, e.g. --rate 1193=5 (at least three)
        #[arg(long = "rate", value_name = "ID=STARS", required = true)]
        ratings: Vec<RatingEntry>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Quiet by default so the interactive output stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::new(cli.api_base).with_page_limit(cli.page_size);
    let client = MovieApiClient::new(&config).context("Failed to create backend client")?;
    tracing::debug!("reel-picks using backend {}", client.base_url());

    match cli.command {
        Commands::Browse => {
            let session = DiscoverySession::new(Arc::new(client), config.page_limit);
            repl::run(session).await?
        }
        Commands::Movies { page } => handle_movies(&client, page, config.page_limit).await?,
        Commands::Recommend { ratings } => handle_recommend(&client, ratings).await?,
    }

    Ok(())
}

/// Handle the 'movies' command
async fn handle_movies(client: &MovieApiClient, page: u32, limit: u32) -> Result<()> {
    let start = Instant::now();
    let movie_page = client
        .fetch_movies(page, limit)
        .await
        .context("Failed to fetch movies")?;

    println!(
        "{}",
        format!(
            "Page {} ({} movies, {} in catalog, fetched in {:?})",
            page,
            movie_page.movies.len(),
            movie_page.total,
            start.elapsed()
        )
        .bold()
        .blue()
    );
    let movies: Vec<_> = movie_page.movies.iter().collect();
    render::print_movies(&movies, &Selection::new());
    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(client: &MovieApiClient, ratings: Vec<RatingEntry>) -> Result<()> {
    let mut seen = HashSet::new();
    if let Some(dup) = ratings.iter().find(|r| !seen.insert(r.movie_id)) {
        bail!("Movie {} is rated more than once", dup.movie_id);
    }
    if ratings.len() < MIN_SELECTION {
        bail!(
            "Rate at least {} movies to get recommendations (got {})",
            MIN_SELECTION,
            ratings.len()
        );
    }

    let set = client
        .fetch_recommendations(&ratings)
        .await
        .context("Failed to get recommendations")?;

    render::print_recommendations(&set.recommendations, set.reason.as_deref());
    Ok(())
}
