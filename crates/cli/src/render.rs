//! Terminal rendering for catalog, selection and recommendation views.

use colored::Colorize;
use model::{MAX_STARS, Movie, Stars};
use state::{Selection, Store};

/// `★★★☆☆` for a rating of 3
pub fn stars(rating: Stars) -> String {
    (1..=MAX_STARS)
        .map(|star| if star <= rating { '★' } else { '☆' })
        .collect()
}

fn year_suffix(movie: &Movie) -> String {
    movie.year.map(|y| format!(" ({})", y)).unwrap_or_default()
}

/// One catalog line: selection mark, id, title, badge, rating
pub fn movie_line(movie: &Movie, selection: &Selection) -> String {
    let selected = selection.is_selected(movie.movie_id);
    let mark = if selected { "[x]".green().to_string() } else { "[ ]".to_string() };
    let mut line = format!(
        "{} {:>6}  {}{}",
        mark,
        movie.movie_id,
        movie.title.bold(),
        year_suffix(movie)
    );
    if let Some(genre) = movie.primary_genre() {
        line.push_str(&format!("  {}", genre.cyan()));
    }
    if selected {
        line.push_str(&format!("  {}", stars(selection.rating_of(movie.movie_id)).yellow()));
    }
    line
}

pub fn print_movies(movies: &[&Movie], selection: &Selection) {
    if movies.is_empty() {
        println!("{}", "No movies match.".dimmed());
        return;
    }
    for movie in movies {
        println!("{}", movie_line(movie, selection));
    }
}

/// Status line under the catalog: counts, active filters, load hint
pub fn catalog_footer(store: &Store, visible: usize) -> String {
    let catalog = store.catalog();
    let mut footer = format!(
        "Showing {} of {} loaded movies ({} in catalog)",
        visible,
        catalog.movies().len(),
        catalog.total()
    );
    if !store.search().is_empty() {
        footer.push_str(&format!(", search '{}'", store.search()));
    }
    if let Some(genre) = store.genre() {
        footer.push_str(&format!(", genre '{}'", genre));
    }
    if catalog.has_more() {
        footer.push_str(". Type `more` to load more movies.");
    }
    footer
}

/// The visible catalog plus a status footer
pub fn print_catalog(store: &Store) {
    let visible = store.visible_movies();
    print_movies(&visible, store.selection());
    println!("{}", catalog_footer(store, visible.len()).dimmed());
}

/// Why the recommend button is (not) ready
pub fn readiness(selection: &Selection) -> String {
    match selection.remaining_needed() {
        0 => "Ready to get recommendations!".green().to_string(),
        1 => "Rate at least 1 more movie to get recommendations".to_string(),
        n => format!("Rate at least {} more movies to get recommendations", n),
    }
}

pub fn print_selection(selection: &Selection) {
    println!("{}", "Selected Movies".bold().blue());
    if selection.is_empty() {
        println!("{}", "No movies selected yet".dimmed());
    }
    for entry in selection.entries() {
        println!(
            "{} {:>6}  {}  {}",
            "•".green(),
            entry.movie_id(),
            entry.movie.title,
            stars(entry.rating).yellow()
        );
    }
    println!("{}", readiness(selection));
}

pub fn print_recommendations(movies: &[Movie], reason: Option<&str>) {
    println!("{}", "Recommended For You".bold().blue());
    if let Some(reason) = reason {
        println!("{}", reason.italic());
    }
    if movies.is_empty() {
        println!("{}", "The service had nothing to recommend.".dimmed());
    }
    for (i, movie) in movies.iter().enumerate() {
        let mut line = format!(
            "{}. {}{}",
            (i + 1).to_string().green(),
            movie.title.bold(),
            year_suffix(movie)
        );
        if let Some(genre) = movie.primary_genre() {
            line.push_str(&format!(" [{}]", genre));
        }
        if let Some(rating) = movie.imdb_rating {
            line.push_str(&format!(" - IMDb {:.1}", rating));
        }
        println!("{}", line);
        println!("   {}", movie.poster_or_placeholder().dimmed());
    }
}
