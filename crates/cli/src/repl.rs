//! Interactive browse mode.
//!
//! Each input line is parsed with clap as if it were a tiny command line, so
//! `help` and argument errors come for free.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use model::{MovieId, Stars};
use session::{DiscoverySession, LoadOutcome, RecommendOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ReplLine {
    #[command(subcommand)]
    command: ReplCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
enum ReplCommand {
    /// Show the loaded catalog (after search and genre filters)
    #[command(alias = "ls")]
    List,

    /// Filter titles by text; no text clears the search
    Search { query: Vec<String> },

    /// Filter by genre; no genre clears the filter
    Genre { genre: Option<String> },

    /// Load the next catalog page
    More,

    /// Select a movie, or deselect it if already selected
    Select { id: MovieId },

    /// Rate a selected movie from 1 to 5 stars
    Rate {
        id: MovieId,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        stars: Stars,
    },

    /// Remove a movie from the selection
    Remove { id: MovieId },

    /// Show the selected movies and their ratings
    Selected,

    /// Get recommendations for the selected movies
    Recommend,

    /// Hide the current recommendations
    Hide,

    /// Leave the browser
    #[command(alias = "exit")]
    Quit,
}

fn parse_line(line: &str) -> Result<ReplCommand, clap::Error> {
    ReplLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
}

fn report_load(outcome: LoadOutcome) {
    match outcome {
        LoadOutcome::Loaded { added, has_more } => {
            let tail = if has_more { "" } else { " That's the whole catalog." };
            println!("{} Loaded {} movies.{}", "✓".green(), added, tail);
        }
        LoadOutcome::Skipped => println!("{}", "No more movies to load.".dimmed()),
        LoadOutcome::Failed(error) => println!(
            "{} Failed to load movies: {}. Type `more` to retry.",
            "✗".red(),
            error
        ),
    }
}

fn print_alert(session: &DiscoverySession) {
    if let Some(alert) = session.take_alert() {
        println!("{} {}", "⚠".red(), alert.red().bold());
    }
}

/// Execute one command. Returns `false` when the user quits.
async fn handle(session: &DiscoverySession, command: ReplCommand) -> bool {
    match command {
        ReplCommand::List => session.read(render::print_catalog),
        ReplCommand::Search { query } => {
            session.set_search(query.join(" "));
            session.read(render::print_catalog);
        }
        ReplCommand::Genre { genre } => {
            session.set_genre(genre);
            session.read(render::print_catalog);
        }
        ReplCommand::More => report_load(session.load_more().await),
        ReplCommand::Select { id } => match session.toggle_select(id) {
            Ok(true) => println!("{} Selected {} ({} stars)", "✓".green(), id, model::DEFAULT_RATING),
            Ok(false) => println!("Deselected {}", id),
            Err(e) => println!("{} {}", "✗".red(), e),
        },
        ReplCommand::Rate { id, stars } => {
            if session.set_rating(id, stars) {
                println!("{} Rated {} {}", "✓".green(), id, render::stars(stars).yellow());
            } else {
                println!("Movie {} is not selected; `select {}` first.", id, id);
            }
        }
        ReplCommand::Remove { id } => {
            if !session.remove(id) {
                println!("Movie {} was not selected.", id);
            }
            session.read(|s| render::print_selection(s.selection()));
        }
        ReplCommand::Selected => session.read(|s| render::print_selection(s.selection())),
        ReplCommand::Recommend => {
            println!("{}", "Getting recommendations...".dimmed());
            match session.request_recommendations().await {
                RecommendOutcome::Delivered { .. } => session.read(|s| {
                    render::print_recommendations(
                        s.recommendations().movies(),
                        s.recommendations().reason(),
                    )
                }),
                RecommendOutcome::Disabled { remaining: 0 } => {
                    println!("A recommendation request is already running.")
                }
                RecommendOutcome::Disabled { .. } => {
                    session.read(|s| println!("{}", render::readiness(s.selection())))
                }
                RecommendOutcome::Failed(_) => print_alert(session),
            }
        }
        ReplCommand::Hide => session.hide_recommendations(),
        ReplCommand::Quit => return false,
    }
    true
}

fn prompt(session: &DiscoverySession) -> Result<()> {
    let selected = session.read(|s| s.selection().len());
    print!("{} ", format!("reel-picks [{} selected]>", selected).blue());
    std::io::stdout().flush().context("Failed to flush prompt")
}

/// Run the interactive browser until `quit` or end of input.
pub async fn run(session: DiscoverySession) -> Result<()> {
    println!("{}", "Discover Your Next Favorite Movie".bold().blue());
    println!("Select movies you like, rate them, and get personalized recommendations.");
    println!("{}", "Type `help` for commands.".dimmed());

    report_load(session.load_more().await);
    session.read(render::print_catalog);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(&session)?;
        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Ok(command) => {
                if !handle(&session, command).await {
                    break;
                }
            }
            Err(e) => {
                // Covers `help` output as well as usage errors
                let _ = e.print();
            }
        }
    }
    Ok(())
}
