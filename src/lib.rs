//! Core library surface for the Movie Rental TUI application.
//!
//! The heart of the crate is [`TitleIndex`], an unbalanced binary search tree
//! of movies keyed by case-insensitive title. It supports insertion with
//! duplicate rejection, exact-title lookup and lazy in-order enumeration, and
//! lives only in memory for the lifetime of the process. The `ui` module
//! wraps those three operations in a terminal interface.
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod models;
pub mod ui;

/// Startup configuration and diagnostics.
pub use config::AppConfig;

/// Validation failures raised before a movie reaches the index.
pub use error::InputError;

/// The ordered title index and its insert outcome.
pub use index::{compare_titles, InOrder, InsertOutcome, TitleIndex};

/// The record type stored in the index, plus its input parser.
pub use models::{Movie, MovieDraft};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
