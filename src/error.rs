use thiserror::Error;

/// Rejections raised while turning form input into a [`crate::Movie`].
///
/// Duplicate titles and missing lookups are not errors; the index reports
/// them as ordinary outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Movie title is required.")]
    MissingTitle,
    #[error("Movie genre is required.")]
    MissingGenre,
    #[error("Release year is required.")]
    MissingYear,
    #[error("Release year \"{0}\" is not a number.")]
    InvalidYear(String),
    #[error("Release year must be positive (got {0}).")]
    NonPositiveYear(i32),
}
