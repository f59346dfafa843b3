//! Catalog filter implementations.

pub mod genre;
pub mod title_search;

pub use genre::GenreFilter;
pub use title_search::TitleSearchFilter;
