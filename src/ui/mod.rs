//! Ratatui front-end for the movie rental catalog. It is a thin adapter: every
//! screen either walks the title index in order, looks a title up, or submits
//! a validated movie for insertion. No catalog logic lives here.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
