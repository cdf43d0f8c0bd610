//! Domain models handed between the title index and the TUI. These types
//! stay light-weight data holders so the index can focus on ordering and the
//! UI can focus on presentation.

use std::fmt;

use crate::error::InputError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single movie in the rental collection.
pub struct Movie {
    /// Unique key of the collection under case-insensitive comparison. The
    /// original spelling is preserved for display.
    pub title: String,
    /// Free-form genre text.
    pub genre: String,
    /// Release year. Expected to be positive, but only the input layer
    /// enforces that.
    pub year: i32,
}

impl Movie {
    pub fn new(title: impl Into<String>, genre: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            year,
        }
    }

    /// Multi-line block shown when a search finds this movie.
    pub fn details(&self) -> [String; 3] {
        [
            format!("Title: {}", self.title),
            format!("Genre: {}", self.genre),
            format!("Year: {}", self.year),
        ]
    }
}

impl fmt::Display for Movie {
    /// One-line listing format: `Title (Genre, Year)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.title, self.genre, self.year)
    }
}

/// Raw user input for a movie before it reaches the index.
///
/// The index only enforces key uniqueness; blank fields and non-positive
/// years are rejected here, at the edge.
pub struct MovieDraft;

impl MovieDraft {
    /// Trim and validate the three text fields of the add form.
    pub fn parse(title: &str, genre: &str, year: &str) -> Result<Movie, InputError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(InputError::MissingTitle);
        }
        let genre = genre.trim();
        if genre.is_empty() {
            return Err(InputError::MissingGenre);
        }
        let year_raw = year.trim();
        if year_raw.is_empty() {
            return Err(InputError::MissingYear);
        }
        let year = year_raw
            .parse::<i32>()
            .map_err(|_| InputError::InvalidYear(year_raw.to_string()))?;
        if year <= 0 {
            return Err(InputError::NonPositiveYear(year));
        }
        Ok(Movie::new(title, genre, year))
    }
}
