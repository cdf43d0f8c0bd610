use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::error::InputError;
use crate::models::{Movie, MovieDraft};

/// Form state for adding a movie.
#[derive(Default, Clone)]
pub(crate) struct MovieForm {
    pub(crate) title: String,
    pub(crate) genre: String,
    pub(crate) year: String,
    pub(crate) active: MovieField,
    pub(crate) error: Option<String>,
}

/// Enumerates the fields within the movie form to drive focus management.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub(crate) enum MovieField {
    #[default]
    Title,
    Genre,
    Year,
}

impl MovieField {
    /// Label rendered in front of the field value.
    pub(crate) fn label(self) -> &'static str {
        match self {
            MovieField::Title => "Title",
            MovieField::Genre => "Genre",
            MovieField::Year => "Year",
        }
    }

    /// Row offset of the field inside the form body.
    pub(crate) fn row(self) -> u16 {
        match self {
            MovieField::Title => 0,
            MovieField::Genre => 1,
            MovieField::Year => 2,
        }
    }
}

impl MovieForm {
    /// Cycle focus forward (Title → Genre → Year → Title).
    pub(crate) fn next_field(&mut self) {
        self.active = match self.active {
            MovieField::Title => MovieField::Genre,
            MovieField::Genre => MovieField::Year,
            MovieField::Year => MovieField::Title,
        };
    }

    /// Cycle focus backward.
    pub(crate) fn previous_field(&mut self) {
        self.active = match self.active {
            MovieField::Title => MovieField::Year,
            MovieField::Genre => MovieField::Title,
            MovieField::Year => MovieField::Genre,
        };
    }

    /// Append a character to the active field. The year only takes digits.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            MovieField::Year => {
                if ch.is_ascii_digit() {
                    self.year.push(ch);
                    true
                } else {
                    false
                }
            }
            MovieField::Title | MovieField::Genre => {
                if ch.is_control() {
                    return false;
                }
                self.field_mut(self.active).push(ch);
                true
            }
        }
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        self.field_mut(self.active).pop();
    }

    /// Validate the inputs and return a movie ready for the index.
    pub(crate) fn parse_inputs(&self) -> Result<Movie, InputError> {
        MovieDraft::parse(&self.title, &self.genre, &self.year)
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field: MovieField) -> Line<'static> {
        let value = self.field(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Character count of the requested field, used to place the cursor.
    pub(crate) fn value_len(&self, field: MovieField) -> usize {
        self.field(field).chars().count()
    }

    fn field(&self, field: MovieField) -> &str {
        match field {
            MovieField::Title => &self.title,
            MovieField::Genre => &self.genre,
            MovieField::Year => &self.year,
        }
    }

    fn field_mut(&mut self, field: MovieField) -> &mut String {
        match field {
            MovieField::Title => &mut self.title,
            MovieField::Genre => &mut self.genre,
            MovieField::Year => &mut self.year,
        }
    }
}
